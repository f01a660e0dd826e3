//! Key handling for the tab strip

use tabkit_dom::{Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    FocusPrevious,
    FocusNext,
    FocusFirst,
    FocusLast,
    Activate,
    /// Left to the browser
    Ignore,
}

impl KeyAction {
    /// Alt and Shift leave navigation keys to the browser.
    pub fn resolve(key: Key, modifiers: Modifiers) -> Self {
        let bypass = modifiers.alt || modifiers.shift;
        match key {
            Key::Left | Key::Up if !bypass => KeyAction::FocusPrevious,
            Key::Right | Key::Down if !bypass => KeyAction::FocusNext,
            Key::Home if !bypass => KeyAction::FocusFirst,
            Key::End if !bypass => KeyAction::FocusLast,
            Key::Enter | Key::Space => KeyAction::Activate,
            _ => KeyAction::Ignore,
        }
    }

    /// Index this action moves focus to, from `current` in a strip of `len` tabs
    pub fn target(&self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            KeyAction::FocusPrevious => Some(if current == 0 { len - 1 } else { current - 1 }),
            KeyAction::FocusNext => Some(if current + 1 >= len { 0 } else { current + 1 }),
            KeyAction::FocusFirst => Some(0),
            KeyAction::FocusLast => Some(len - 1),
            KeyAction::Activate | KeyAction::Ignore => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(key: Key) -> KeyAction {
        KeyAction::resolve(key, Modifiers::default())
    }

    #[test]
    fn test_resolve_arrows() {
        assert_eq!(plain(Key::Left), KeyAction::FocusPrevious);
        assert_eq!(plain(Key::Up), KeyAction::FocusPrevious);
        assert_eq!(plain(Key::Right), KeyAction::FocusNext);
        assert_eq!(plain(Key::Down), KeyAction::FocusNext);
        assert_eq!(plain(Key::Enter), KeyAction::Activate);
        assert_eq!(plain(Key::Space), KeyAction::Activate);
        assert_eq!(plain(Key::Other(65)), KeyAction::Ignore);
    }

    #[test]
    fn test_modifiers_bypass_navigation() {
        let alt = Modifiers {
            alt: true,
            ..Default::default()
        };
        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        for key in [Key::Left, Key::Up, Key::Right, Key::Down, Key::Home, Key::End] {
            assert_eq!(KeyAction::resolve(key, alt), KeyAction::Ignore);
            assert_eq!(KeyAction::resolve(key, shift), KeyAction::Ignore);
        }
    }

    #[test]
    fn test_targets_wrap() {
        assert_eq!(KeyAction::FocusNext.target(2, 3), Some(0));
        assert_eq!(KeyAction::FocusPrevious.target(0, 3), Some(2));
        assert_eq!(KeyAction::FocusNext.target(0, 3), Some(1));
        assert_eq!(KeyAction::FocusLast.target(0, 3), Some(2));
        assert_eq!(KeyAction::FocusNext.target(0, 1), Some(0));
        assert_eq!(KeyAction::Activate.target(0, 3), None);
        assert_eq!(KeyAction::FocusFirst.target(0, 0), None);
    }
}
