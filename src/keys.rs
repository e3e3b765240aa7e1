use crate::config;
use winit::event::{ModifiersState, VirtualKeyCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Brighter(u8),
    Dimmer(u8),
    ToggleMovement,
}

/// Map a key press to an action. Shift selects the fine brightness step.
pub fn key_action(
    key: VirtualKeyCode,
    modifiers: ModifiersState,
    conf: &config::Overlay,
) -> Option<Action> {
    let step = if modifiers.shift() {
        conf.fine_step
    } else {
        conf.step
    };

    match key {
        VirtualKeyCode::Escape => Some(Action::Quit),
        VirtualKeyCode::Up => Some(Action::Brighter(step)),
        VirtualKeyCode::Down => Some(Action::Dimmer(step)),
        VirtualKeyCode::M => Some(Action::ToggleMovement),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(key: VirtualKeyCode, modifiers: ModifiersState) -> Option<Action> {
        key_action(key, modifiers, &config::Overlay::default())
    }

    #[test]
    fn arrows_use_coarse_step() {
        let none = ModifiersState::empty();
        assert_eq!(action(VirtualKeyCode::Up, none), Some(Action::Brighter(10)));
        assert_eq!(action(VirtualKeyCode::Down, none), Some(Action::Dimmer(10)));
    }

    #[test]
    fn shift_selects_fine_step() {
        let shift = ModifiersState::SHIFT;
        assert_eq!(action(VirtualKeyCode::Up, shift), Some(Action::Brighter(1)));
        assert_eq!(action(VirtualKeyCode::Down, shift), Some(Action::Dimmer(1)));
    }

    #[test]
    fn escape_and_m() {
        let none = ModifiersState::empty();
        assert_eq!(action(VirtualKeyCode::Escape, none), Some(Action::Quit));
        assert_eq!(
            action(VirtualKeyCode::M, ModifiersState::SHIFT),
            Some(Action::ToggleMovement)
        );
    }

    #[test]
    fn other_keys_do_nothing() {
        let none = ModifiersState::empty();
        assert_eq!(action(VirtualKeyCode::Left, none), None);
        assert_eq!(action(VirtualKeyCode::Q, none), None);
    }

    #[test]
    fn configured_steps_are_honored() {
        let conf = config::Overlay {
            brightness: 128,
            step: 25,
            fine_step: 5,
        };
        assert_eq!(
            key_action(VirtualKeyCode::Up, ModifiersState::empty(), &conf),
            Some(Action::Brighter(25))
        );
        assert_eq!(
            key_action(VirtualKeyCode::Down, ModifiersState::SHIFT, &conf),
            Some(Action::Dimmer(5))
        );
    }
}
