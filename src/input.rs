use crate::config::KeyBindingConfig;
use sdl2::keyboard::Scancode;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Keys the outcome screen reacts to
///
/// Physical keys are bound to these through [`KeyBindings`], so screens never see
/// SDL scancodes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Up,
    Down,
    Confirm,
}

/// Polled key state
///
/// Implementations must not block and must answer consistently within a frame.
pub trait InputSource {
    fn is_key_held(&self, key: LogicalKey) -> bool;

    fn is_any_held(&self, keys: &[LogicalKey]) -> bool {
        keys.iter().any(|&key| self.is_key_held(key))
    }
}

/// Scancodes held down during the current frame
///
/// Cloning shares the underlying set: the frame context refreshes it once per frame
/// and [`SdlKeyboard`] reads it.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: Rc<RefCell<HashSet<Scancode>>>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held set with this frame's keys
    pub fn replace(&self, pressed: impl IntoIterator<Item = Scancode>) {
        let mut held = self.held.borrow_mut();
        held.clear();
        held.extend(pressed);
    }

    pub fn is_down(&self, scancode: Scancode) -> bool {
        self.held.borrow().contains(&scancode)
    }
}

/// Physical keys bound to each logical key
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub up: Vec<Scancode>,
    pub down: Vec<Scancode>,
    pub confirm: Vec<Scancode>,
}

impl KeyBindings {
    /// Resolve SDL scancode names ("Up", "W", "Space", ...)
    ///
    /// Unknown names are skipped with a warning.
    pub fn from_config(config: &KeyBindingConfig) -> Self {
        KeyBindings {
            up: resolve_names(&config.up),
            down: resolve_names(&config.down),
            confirm: resolve_names(&config.confirm),
        }
    }

    pub fn keys_for(&self, key: LogicalKey) -> &[Scancode] {
        match key {
            LogicalKey::Up => &self.up,
            LogicalKey::Down => &self.down,
            LogicalKey::Confirm => &self.confirm,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            up: vec![Scancode::Up, Scancode::W],
            down: vec![Scancode::Down, Scancode::S],
            confirm: vec![Scancode::Space],
        }
    }
}

fn resolve_names(names: &[String]) -> Vec<Scancode> {
    names
        .iter()
        .filter_map(|name| {
            let scancode = Scancode::from_name(name);
            if scancode.is_none() {
                log::warn!("Unknown key name '{}' in bindings, skipping", name);
            }
            scancode
        })
        .collect()
}

/// [`InputSource`] backed by the SDL keyboard snapshot
pub struct SdlKeyboard {
    state: KeyState,
    bindings: KeyBindings,
}

impl SdlKeyboard {
    pub fn new(state: KeyState, bindings: KeyBindings) -> Self {
        SdlKeyboard { state, bindings }
    }
}

impl InputSource for SdlKeyboard {
    fn is_key_held(&self, key: LogicalKey) -> bool {
        self.bindings
            .keys_for(key)
            .iter()
            .any(|&scancode| self.state.is_down(scancode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_map_arrows_and_wasd() {
        let state = KeyState::new();
        let keyboard = SdlKeyboard::new(state.clone(), KeyBindings::default());

        state.replace([Scancode::W]);
        assert!(keyboard.is_key_held(LogicalKey::Up));
        assert!(!keyboard.is_key_held(LogicalKey::Down));

        state.replace([Scancode::Down]);
        assert!(keyboard.is_key_held(LogicalKey::Down));
        assert!(!keyboard.is_key_held(LogicalKey::Up));

        state.replace([Scancode::Space]);
        assert!(keyboard.is_key_held(LogicalKey::Confirm));
    }

    #[test]
    fn test_replace_clears_previous_frame() {
        let state = KeyState::new();
        state.replace([Scancode::S, Scancode::Space]);
        state.replace([]);
        assert!(!state.is_down(Scancode::S));
        assert!(!state.is_down(Scancode::Space));
    }

    #[test]
    fn test_is_any_held() {
        let state = KeyState::new();
        let keyboard = SdlKeyboard::new(state.clone(), KeyBindings::default());
        state.replace([Scancode::S]);

        assert!(keyboard.is_any_held(&[LogicalKey::Up, LogicalKey::Down]));
        assert!(!keyboard.is_any_held(&[LogicalKey::Up, LogicalKey::Confirm]));
    }

    #[test]
    fn test_unbound_key_is_never_held() {
        let state = KeyState::new();
        let bindings = KeyBindings {
            up: vec![],
            ..KeyBindings::default()
        };
        let keyboard = SdlKeyboard::new(state.clone(), bindings);
        state.replace([Scancode::Up, Scancode::W]);
        assert!(!keyboard.is_key_held(LogicalKey::Up));
    }
}
