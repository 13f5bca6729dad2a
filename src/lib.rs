#![allow(unexpected_cfgs)]

//! Quick Launch - a small GPUI window for starting applications by name
//!
//! The library holds everything except process startup: the shortcut store,
//! filtering and selection, launching, and the window view itself.

pub mod config;
pub mod error;
pub mod filter;
pub mod launcher;
pub mod launcher_window;
pub mod logging;
pub mod platform;
pub mod selection;
pub mod session;
pub mod shortcuts;

#[cfg(test)]
pub(crate) mod test_support;
