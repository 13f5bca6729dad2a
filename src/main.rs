use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gpui::{
    prelude::*, px, size, App, Application, Bounds, Context, Focusable, Window, WindowBounds,
    WindowHandle, WindowOptions,
};
use tracing::{error, info};

use quick_launch::config::{self, Config};
use quick_launch::launcher::Launcher;
use quick_launch::launcher_window::LauncherWindow;
use quick_launch::logging;
use quick_launch::platform;
use quick_launch::session::LauncherSession;
use quick_launch::shortcuts::ShortcutStore;

/// Small always-on-top list of application shortcuts
#[derive(Parser, Debug)]
#[command(name = "quick-launch", version, about)]
struct Args {
    /// Shortcut file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Config file (defaults to ~/.quick-launch/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let _log_guard = logging::init();

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let loaded_config = config::load_config(&config_path);

    let store_path = match &args.store {
        Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref()),
        None => loaded_config.store_path(),
    };
    let (store, startup_error) = ShortcutStore::load_or_lock(&store_path);
    info!(
        store = %store_path.display(),
        shortcuts = store.len(),
        locked = store.is_locked(),
        "Shortcut store opened"
    );

    let launcher = Arc::new(Launcher::new(platform::default_activator()));
    info!(activator = launcher.activator_name(), "Launcher ready");

    Application::new().run(move |cx: &mut App| {
        if let Err(e) = open_launcher_window(cx, store, launcher, loaded_config, startup_error) {
            error!(error = %e, "Failed to open launcher window");
            cx.quit();
        }
    });
}

fn open_launcher_window(
    cx: &mut App,
    store: ShortcutStore,
    launcher: Arc<Launcher>,
    loaded_config: Config,
    startup_error: Option<quick_launch::error::LauncherError>,
) -> anyhow::Result<()> {
    let (width, height) = loaded_config.window_size();
    let bounds = Bounds::centered(None, size(px(width), px(height)), cx);

    let window: WindowHandle<LauncherWindow> = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: None,
            is_movable: true,
            is_resizable: false,
            app_id: Some("quick-launch".to_string()),
            ..Default::default()
        },
        |window, cx| {
            let session = LauncherSession::new(store);
            cx.new(|cx| {
                LauncherWindow::new(session, launcher, loaded_config, startup_error, window, cx)
            })
        },
    )?;

    window.update(
        cx,
        |view: &mut LauncherWindow, window: &mut Window, cx: &mut Context<LauncherWindow>| {
            window.set_window_title("Launcher");
            let focus_handle = view.focus_handle(cx);
            window.focus(&focus_handle, cx);
        },
    )?;

    cx.activate(true);
    Ok(())
}
