use crate::controllers::interactive::{ControlKey, KeyStatePort};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Held state of the control keys, rebuilt from winit keyboard events so the
/// controller can poll it once per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    escape_held: bool,
    up_held: bool,
    down_held: bool,
}

impl KeyboardState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::Escape => self.escape_held = pressed,
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl KeyStatePort for KeyboardState {
    fn is_key_down(&self, key: ControlKey) -> bool {
        match key {
            ControlKey::Exit => self.escape_held,
            ControlKey::ZoomIn => self.up_held,
            ControlKey::ZoomOut => self.down_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KeyboardState;
    use crate::controllers::interactive::{ControlKey, KeyStatePort};
    use winit::{event::ElementState, keyboard::KeyCode};

    #[test]
    fn default_state_has_nothing_held() {
        let keyboard = KeyboardState::default();

        for &key in ControlKey::ALL {
            assert!(!keyboard.is_key_down(key));
        }
    }

    #[test]
    fn press_and_release_updates_held_keys() {
        let mut keyboard = KeyboardState::default();

        keyboard.handle_key_event(KeyCode::Escape, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::ArrowDown, ElementState::Pressed);

        assert!(keyboard.is_key_down(ControlKey::Exit));
        assert!(keyboard.is_key_down(ControlKey::ZoomIn));
        assert!(keyboard.is_key_down(ControlKey::ZoomOut));

        keyboard.handle_key_event(KeyCode::Escape, ElementState::Released);
        keyboard.handle_key_event(KeyCode::ArrowUp, ElementState::Released);
        keyboard.handle_key_event(KeyCode::ArrowDown, ElementState::Released);

        assert!(!keyboard.is_key_down(ControlKey::Exit));
        assert!(!keyboard.is_key_down(ControlKey::ZoomIn));
        assert!(!keyboard.is_key_down(ControlKey::ZoomOut));
    }

    #[test]
    fn repeated_presses_keep_key_held() {
        let mut keyboard = KeyboardState::default();

        keyboard.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed);

        assert!(keyboard.is_key_down(ControlKey::ZoomIn));
        assert!(keyboard.is_key_down(ControlKey::ZoomIn));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut keyboard = KeyboardState::default();

        keyboard.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::ArrowLeft, ElementState::Pressed);

        assert_eq!(keyboard, KeyboardState::default());
    }

    #[test]
    fn reset_clears_all_state() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_key_event(KeyCode::ArrowDown, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::Escape, ElementState::Pressed);

        keyboard.reset();

        assert_eq!(keyboard, KeyboardState::default());
    }
}
