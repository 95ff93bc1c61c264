use log::Level;
use wasm_bindgen::prelude::*;

/// Route panics and `log` records to the browser console
///
/// Safe to call more than once; later calls only change the level.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = match level.as_deref() {
        Some(name) => name
            .parse::<Level>()
            .map_err(|_| JsValue::from_str(&format!("Unknown log level: {name}")))?,
        None => Level::Info,
    };

    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
    log::debug!("logging at {level}");
    Ok(())
}
