//! Console Logging
//!
//! Routes the `log` facade to the browser console.

/// Install the console logger. Debug builds log everything down to `debug`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);
}
