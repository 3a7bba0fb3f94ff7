//! The board's two push buttons

use sketchbook_core::input::ButtonPair;
use sketchbook_hal::InputPin;

/// Samples two inputs into a [`ButtonPair`]
///
/// The pins must report `is_high` for "pressed"; wrap active-low buttons
/// in [`sketchbook_hal::gpio::ActiveLow`].
pub struct BoardButtons<L, R> {
    left: L,
    right: R,
    state: ButtonPair,
}

impl<L: InputPin, R: InputPin> BoardButtons<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            state: ButtonPair::new(),
        }
    }

    /// Read both pins and return the updated edge state
    pub fn poll(&mut self) -> &ButtonPair {
        self.state.update(self.left.is_high(), self.right.is_high());
        &self.state
    }

    /// Edge state from the last poll
    pub fn state(&self) -> &ButtonPair {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchbook_hal::gpio::ActiveLow;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct Level(Rc<Cell<bool>>);

    impl InputPin for Level {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_release_edge_through_active_low() {
        let left = Rc::new(Cell::new(true));
        let right = Rc::new(Cell::new(true));
        let mut buttons = BoardButtons::new(
            ActiveLow(Level(left.clone())),
            ActiveLow(Level(right.clone())),
        );
        assert!(!buttons.poll().left.pressed());

        left.set(false);
        assert!(buttons.poll().left.just_pressed());
        left.set(true);
        assert!(buttons.poll().left.just_released());
        assert!(!buttons.state().right.pressed());
    }
}
