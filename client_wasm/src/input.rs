//! Keyboard input handling

#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

/// Pick the spelling to hand to the engine
///
/// Some browsers leave `key` empty or report `"Unidentified"` for synthetic
/// events; `code` still names the physical key then.
pub fn resolve_key<'a>(key: &'a str, code: &'a str) -> &'a str {
    match key {
        "" | "Unidentified" => code,
        _ => key,
    }
}

/// Control keys would otherwise scroll the page
pub fn should_prevent_default(key: &str) -> bool {
    game_core::is_control_key(key)
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    let key = event.key();
    let code = event.code();
    resolve_key(&key, &code).to_string()
}
