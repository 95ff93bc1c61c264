//! Keyboard input mapping

use crate::Phase;

/// What a key press asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Jump,
    Reset,
}

/// True for the designated control keys (space / up arrow)
///
/// Accepts both `KeyboardEvent.key` and `KeyboardEvent.code` spellings.
pub fn is_control_key(key: &str) -> bool {
    matches!(key, " " | "Space" | "Spacebar" | "ArrowUp" | "Up")
}

/// Map a key press to an action for the current phase
pub fn action_for_key(key: &str, phase: Phase) -> Option<Action> {
    if !is_control_key(key) {
        return None;
    }
    Some(match phase {
        Phase::Idle => Action::Start,
        Phase::Running => Action::Jump,
        Phase::Over => Action::Reset,
    })
}
