//! Panic hook that restores the terminal before the panic is reported.

use super::setup::emergency_restore;
use std::panic;

/// Install a hook that logs the panic, restores the terminal, then runs the
/// previous hook (color-eyre's, when installed) to print the report.
///
/// Call after `color_eyre::install()` and before creating the
/// `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("panic: {}", panic_info);
        emergency_restore();
        original_hook(panic_info);
    }));
}
