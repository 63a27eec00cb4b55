//! Log output for applications embedding the drop-zone.
//!
//! The library only emits `tracing` events. Call [`init_logger`] once at startup if nothing else installs a subscriber.

use tracing::Level;

/// Install a global subscriber printing events at `level` and above.
///
/// Native targets print to stdout through `tracing-subscriber`; in the browser events go to the console through
/// `tracing-wasm`. Returns an error if a global subscriber is already set (the wasm backend panics instead).
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger(level: Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn init_logger(level: Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();

    // tracing-wasm panics instead of reporting an existing subscriber
    tracing_wasm::set_as_global_default_with_config(config);
    Ok(())
}
