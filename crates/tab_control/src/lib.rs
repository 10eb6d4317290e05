pub mod tabs;

pub use tab_contracts::TabClasses;
pub use tabs::{use_tab_control, RenderPhase, TabControl, TabControlHandle, TabDescriptor, TabItem};

/// Route `log` output to the browser console and install the panic hook.
///
/// Call once from the application's entry point. Does nothing outside wasm.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        // initializes logging using the `log` crate
        _ = console_log::init_with_level(log::Level::Debug);
        console_error_panic_hook::set_once();
    }
}
