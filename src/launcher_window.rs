//! The launcher window: a gpui view over [`LauncherSession`].
//!
//! Presentation and event routing only. Every state change goes through the
//! session; every error it returns ends up in the banner, never in a panic.

use std::path::PathBuf;
use std::sync::Arc;

use gpui::{
    div, prelude::*, px, rgb, uniform_list, ClickEvent, Context, FocusHandle, Focusable,
    KeyDownEvent, PathPromptOptions, ScrollStrategy, SharedString, Subscription, Timer,
    UniformListScrollHandle, Window,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{ErrorSeverity, LauncherError, ResultExt};
use crate::launcher::Launcher;
use crate::session::LauncherSession;

/// Row height for the shortcut list
pub const LIST_ITEM_HEIGHT: f32 = 26.0;

mod colors {
    pub const BACKGROUND: u32 = 0x1e1e1e;
    pub const INPUT_BACKGROUND: u32 = 0x2a2a2a;
    pub const BORDER: u32 = 0x3c3c3c;
    pub const TEXT: u32 = 0xe6e6e6;
    pub const TEXT_MUTED: u32 = 0x8a8a8a;
    pub const SELECTED: u32 = 0x264f78;
    pub const BUTTON: u32 = 0x333333;
    pub const BUTTON_HOVER: u32 = 0x444444;
    pub const INFO: u32 = 0x3b82f6;
    pub const WARNING: u32 = 0xd97706;
    pub const ERROR: u32 = 0xdc2626;
}

/// What the text field is currently editing
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    /// Typing narrows the list
    Filter,
    /// First step of "Add Shortcut": typing the name
    AddName { name: String },
    /// Waiting on the OS file chooser for `name`
    ChoosingFile { name: String },
}

/// Dismissible message shown above the add button
#[derive(Debug, Clone)]
struct Banner {
    message: SharedString,
    severity: ErrorSeverity,
}

impl Banner {
    fn color(&self) -> u32 {
        match self.severity {
            ErrorSeverity::Info => colors::INFO,
            ErrorSeverity::Warning => colors::WARNING,
            ErrorSeverity::Error | ErrorSeverity::Critical => colors::ERROR,
        }
    }
}

pub struct LauncherWindow {
    session: LauncherSession,
    launcher: Arc<Launcher>,
    config: Config,
    mode: InputMode,
    banner: Option<Banner>,
    focus_handle: FocusHandle,
    list_scroll_handle: UniformListScrollHandle,
    _activation_subscription: Subscription,
}

impl LauncherWindow {
    pub fn new(
        session: LauncherSession,
        launcher: Arc<Launcher>,
        config: Config,
        startup_error: Option<LauncherError>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let activation_subscription =
            cx.observe_window_activation(window, |this: &mut Self, window, cx| {
                if !window.is_window_active() {
                    this.handle_focus_lost(window, cx);
                }
            });

        let banner = startup_error.map(|err| Banner {
            message: err.user_message().into(),
            severity: err.severity(),
        });

        info!(
            shortcuts = session.store().len(),
            locked = session.store().is_locked(),
            "Launcher window created"
        );

        LauncherWindow {
            session,
            launcher,
            config,
            mode: InputMode::Filter,
            banner,
            focus_handle: cx.focus_handle(),
            list_scroll_handle: UniformListScrollHandle::new(),
            _activation_subscription: activation_subscription,
        }
    }

    // ---- event routing ----

    fn handle_key(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let key = event.keystroke.key.to_lowercase();
        let modifiers = &event.keystroke.modifiers;
        debug!(key = %key, mode = ?self.mode, "Key pressed");

        // Any keystroke dismisses a transient banner; a critical one stays until clicked.
        if matches!(&self.banner, Some(b) if b.severity != ErrorSeverity::Critical) {
            self.banner = None;
        }

        let typed_char = if modifiers.control || modifiers.platform {
            None
        } else {
            event
                .keystroke
                .key_char
                .as_ref()
                .and_then(|s| s.chars().next())
                .filter(|ch| !ch.is_control())
        };

        match self.mode.clone() {
            InputMode::Filter => match key.as_str() {
                "up" | "arrowup" => self.move_selection_up(cx),
                "down" | "arrowdown" => self.move_selection_down(cx),
                "enter" => self.launch_selected(window, cx),
                "delete" => self.delete_selected(cx),
                "escape" => self.close(cx),
                "backspace" => {
                    if self.session.pop_char() {
                        self.after_refilter(cx);
                    }
                }
                _ => {
                    if let Some(ch) = typed_char {
                        self.session.push_char(ch);
                        self.after_refilter(cx);
                    }
                }
            },
            InputMode::AddName { mut name } => match key.as_str() {
                "escape" => self.set_mode(InputMode::Filter, cx),
                "enter" => {
                    if name.trim().is_empty() {
                        self.set_mode(InputMode::Filter, cx);
                    } else {
                        self.choose_application(name, cx);
                    }
                }
                "backspace" => {
                    name.pop();
                    self.set_mode(InputMode::AddName { name }, cx);
                }
                _ => {
                    if let Some(ch) = typed_char {
                        name.push(ch);
                        self.set_mode(InputMode::AddName { name }, cx);
                    }
                }
            },
            InputMode::ChoosingFile { .. } => {}
        }
        cx.notify();
    }

    fn handle_row_click(
        &mut self,
        ix: usize,
        double_click: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.mode != InputMode::Filter {
            return;
        }
        self.session.select(ix);
        if double_click {
            debug!(ix, "Double-click on row, launching");
            self.launch_selected(window, cx);
        }
        cx.notify();
    }

    fn handle_focus_lost(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        // A launch already hid the window; the activation task owns the exit.
        if self.session.is_closed() {
            return;
        }
        if matches!(self.mode, InputMode::ChoosingFile { .. }) {
            debug!("Focus moved to file chooser, staying open");
            return;
        }
        if !self.config.close_on_focus_loss {
            return;
        }
        info!("Launcher lost focus, closing");
        self.close(cx);
    }

    // ---- actions ----

    fn move_selection_up(&mut self, cx: &mut Context<Self>) {
        if self.session.move_up() {
            self.scroll_to_selection();
            cx.notify();
        }
    }

    fn move_selection_down(&mut self, cx: &mut Context<Self>) {
        if self.session.move_down() {
            self.scroll_to_selection();
            cx.notify();
        }
    }

    fn after_refilter(&mut self, cx: &mut Context<Self>) {
        self.scroll_to_selection();
        cx.notify();
    }

    fn scroll_to_selection(&self) {
        if let Some(ix) = self.session.selected_index() {
            self.list_scroll_handle.scroll_to_item(ix, ScrollStrategy::Nearest);
        }
    }

    fn launch_selected(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        match self.session.launch_selected(&self.launcher) {
            Ok(handle) => {
                // Hide now; activation and exit run after the delay.
                window.remove_window();

                let launcher = self.launcher.clone();
                let delay = self.config.activation_delay();
                cx.spawn(async move |_this, cx| {
                    Timer::after(delay).await;
                    launcher.activate(&handle);
                    cx.update(|cx| cx.quit()).log_err();
                })
                .detach();
            }
            Err(err) => self.show_error(err, cx),
        }
    }

    fn delete_selected(&mut self, cx: &mut Context<Self>) {
        match self.session.delete_selected() {
            Ok(name) => {
                debug!(name = %name, "Deleted from list");
                self.after_refilter(cx);
            }
            Err(err) => self.show_error(err, cx),
        }
    }

    fn start_add(&mut self, cx: &mut Context<Self>) {
        if self.mode == InputMode::Filter {
            self.set_mode(
                InputMode::AddName {
                    name: String::new(),
                },
                cx,
            );
        }
    }

    fn choose_application(&mut self, name: String, cx: &mut Context<Self>) {
        self.set_mode(InputMode::ChoosingFile { name: name.clone() }, cx);

        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: Some("Select Application".into()),
        });

        cx.spawn(async move |this, cx| {
            let picked: Option<PathBuf> = match paths.await {
                Ok(Ok(Some(mut paths))) => paths.pop(),
                Ok(Ok(None)) => None,
                Ok(Err(e)) => {
                    warn!(error = %e, "File chooser failed");
                    None
                }
                Err(_) => None,
            };
            this.update(cx, |this, cx| this.finish_add(&name, picked, cx))
                .warn_on_err();
        })
        .detach();
    }

    fn finish_add(&mut self, name: &str, picked: Option<PathBuf>, cx: &mut Context<Self>) {
        self.mode = InputMode::Filter;
        let Some(path) = picked else {
            debug!(name = %name, "Add shortcut cancelled");
            cx.notify();
            return;
        };

        match self.session.add_shortcut(name, &path.to_string_lossy()) {
            Ok(()) => self.after_refilter(cx),
            Err(err) => self.show_error(err, cx),
        }
    }

    fn close(&mut self, cx: &mut Context<Self>) {
        self.session.cancel();
        cx.quit();
    }

    fn set_mode(&mut self, mode: InputMode, cx: &mut Context<Self>) {
        self.mode = mode;
        cx.notify();
    }

    fn show_error(&mut self, err: LauncherError, cx: &mut Context<Self>) {
        warn!(error = %err, severity = ?err.severity(), "Action failed");
        self.banner = Some(Banner {
            message: err.user_message().into(),
            severity: err.severity(),
        });
        cx.notify();
    }

    // ---- rendering ----

    fn render_input(&self) -> impl IntoElement {
        let (text, placeholder) = match &self.mode {
            InputMode::Filter => (self.session.query().to_string(), "Type to filter..."),
            InputMode::AddName { name } => (name.clone(), "Shortcut name, then Enter"),
            InputMode::ChoosingFile { name } => (name.clone(), ""),
        };
        let is_empty = text.is_empty();

        div()
            .w_full()
            .px(px(8.))
            .py(px(5.))
            .rounded(px(4.))
            .bg(rgb(colors::INPUT_BACKGROUND))
            .border_1()
            .border_color(rgb(colors::BORDER))
            .text_sm()
            .overflow_hidden()
            .whitespace_nowrap()
            .text_color(if is_empty {
                rgb(colors::TEXT_MUTED)
            } else {
                rgb(colors::TEXT)
            })
            .child(SharedString::from(if is_empty {
                placeholder.to_string()
            } else {
                text
            }))
    }

    fn render_list(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let names: Vec<SharedString> = self
            .session
            .visible_names()
            .iter()
            .map(|n| SharedString::from(n.clone()))
            .collect();

        if names.is_empty() {
            let message = if self.session.store().is_empty() {
                "No shortcuts yet"
            } else {
                "No matches"
            };
            return div()
                .flex_1()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(rgb(colors::TEXT_MUTED))
                .child(message)
                .into_any_element();
        }

        let entity = cx.entity();

        uniform_list("shortcut-list", names.len(), move |visible_range, _window, cx| {
            entity.update(cx, |this, cx| {
                let selected = this.session.selected_index();
                visible_range
                    .map(|ix| {
                        let is_selected = selected == Some(ix);
                        let click_handler = cx.listener(
                            move |this: &mut LauncherWindow,
                                  event: &ClickEvent,
                                  window: &mut Window,
                                  cx: &mut Context<LauncherWindow>| {
                                let double_click = matches!(
                                    event,
                                    ClickEvent::Mouse(mouse_event) if mouse_event.down.click_count >= 2
                                );
                                this.handle_row_click(ix, double_click, window, cx);
                            },
                        );
                        div()
                            .id(ix)
                            .h(px(LIST_ITEM_HEIGHT))
                            .w_full()
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded(px(3.))
                            .text_sm()
                            .overflow_hidden()
                            .whitespace_nowrap()
                            .when(is_selected, |row| row.bg(rgb(colors::SELECTED)))
                            .text_color(rgb(colors::TEXT))
                            .on_click(click_handler)
                            .child(names[ix].clone())
                    })
                    .collect()
            })
        })
        .flex_1()
        .track_scroll(&self.list_scroll_handle)
        .into_any_element()
    }

    fn render_banner(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let banner = self.banner.as_ref()?;
        Some(
            div()
                .id("banner")
                .w_full()
                .px(px(6.))
                .py(px(4.))
                .rounded(px(4.))
                .bg(rgb(banner.color()))
                .text_xs()
                .text_color(rgb(0xffffff))
                .cursor_pointer()
                .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.banner = None;
                    cx.notify();
                }))
                .child(banner.message.clone()),
        )
    }

    fn render_add_button(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let enabled = self.mode == InputMode::Filter;
        div()
            .id("add-shortcut")
            .w_full()
            .py(px(5.))
            .flex()
            .justify_center()
            .rounded(px(4.))
            .bg(rgb(colors::BUTTON))
            .text_sm()
            .text_color(if enabled {
                rgb(colors::TEXT)
            } else {
                rgb(colors::TEXT_MUTED)
            })
            .when(enabled, |button| {
                button
                    .cursor_pointer()
                    .hover(|style| style.bg(rgb(colors::BUTTON_HOVER)))
            })
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.start_add(cx);
            }))
            .child("Add Shortcut")
    }
}

impl Focusable for LauncherWindow {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for LauncherWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let handle_key = cx.listener(
            |this: &mut Self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>| {
                this.handle_key(event, window, cx);
            },
        );

        div()
            .key_context("launcher")
            .track_focus(&self.focus_handle)
            .on_key_down(handle_key)
            .size_full()
            .flex()
            .flex_col()
            .gap(px(6.))
            .p(px(8.))
            .bg(rgb(colors::BACKGROUND))
            .border_1()
            .border_color(rgb(colors::BORDER))
            .text_color(rgb(colors::TEXT))
            .child(self.render_input())
            .child(self.render_list(cx))
            .children(self.render_banner(cx))
            .child(self.render_add_button(cx))
    }
}
