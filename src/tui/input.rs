// Input handling with configurable key behaviors
//
// Two behaviors cover every binding in the app:
// - State-change keys trigger once per press (Enter, Esc, facet cycling)
// - Repeatable keys trigger on press, then repeat while held (navigation)
//
// Text-entry mode bypasses this entirely - while a form field is focused the
// views consume character keys directly.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Defines how a key behaves when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press -> release)
    StateChange,

    /// Trigger on press, then repeat after an initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (arrow keys, j/k)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(450),
            repeat_interval: Duration::from_millis(50),
        }
    }
}

/// Debounce window for terminals that never send Release events
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn new() -> Self {
        Self {
            is_pressed: false,
            press_started: None,
            last_triggered: None,
        }
    }

    fn release(&mut self) {
        self.is_pressed = false;
        self.press_started = None;
        self.last_triggered = None;
    }
}

/// Tracks per-key state and decides when presses become actions
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press event; returns true if the action should fire
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_insert_with(KeyState::new);

        if state.is_pressed {
            match behavior {
                KeyBehavior::StateChange => {
                    // Debounce for terminals without Release events
                    if let Some(last) = state.last_triggered {
                        if now.duration_since(last) >= STATE_CHANGE_DEBOUNCE {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
                KeyBehavior::Repeatable {
                    initial_delay,
                    repeat_interval,
                } => {
                    if let (Some(press_start), Some(last_trigger)) =
                        (state.press_started, state.last_triggered)
                    {
                        let since_press = now.duration_since(press_start);
                        let since_last = now.duration_since(last_trigger);
                        if since_press >= initial_delay && since_last >= repeat_interval {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
            }
        } else {
            // New press always fires
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            true
        }
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Default bindings for this app
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // List/scroll navigation - repeatable
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::navigation(),
        );

        // Everything else is fire-once-per-press; unconfigured keys default
        // to StateChange, so only the exceptions are listed here
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn state_change_fires_once_per_press() {
        let mut handler = InputHandler::new();

        assert!(handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn repeatable_fires_after_initial_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(80),
                repeat_interval: Duration::from_millis(40),
            },
        );

        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(90));
        assert!(handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(50));
        assert!(handler.handle_key_press(KeyCode::Down));
    }

    #[test]
    fn release_resets_repeat_timing() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Down], KeyBehavior::navigation());

        assert!(handler.handle_key_press(KeyCode::Down));
        handler.handle_key_release(KeyCode::Down);

        // Fresh press fires immediately again
        assert!(handler.handle_key_press(KeyCode::Down));
    }
}
