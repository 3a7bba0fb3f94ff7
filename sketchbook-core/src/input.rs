//! Button edge tracking
//!
//! The demo boards have two push buttons. Most demos act when a button is
//! released, so both edges are tracked.

/// Pressed/released state of one button across two polls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    state: bool,
    prev_state: bool,
}

impl Button {
    /// Create a released button
    pub const fn new() -> Self {
        Self {
            state: false,
            prev_state: false,
        }
    }

    /// Record the latest poll
    pub fn update(&mut self, pressed: bool) {
        self.prev_state = self.state;
        self.state = pressed;
    }

    /// Whether the button has just been pressed
    pub fn just_pressed(&self) -> bool {
        self.state && !self.prev_state
    }

    /// Whether the button has just been released
    pub fn just_released(&self) -> bool {
        !self.state && self.prev_state
    }

    /// Whether the button is currently pressed
    pub fn pressed(&self) -> bool {
        self.state
    }

    /// Whether the button is currently released
    pub fn released(&self) -> bool {
        !self.state
    }
}

/// The board's left and right buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPair {
    pub left: Button,
    pub right: Button,
}

impl ButtonPair {
    /// Create with both buttons released
    pub const fn new() -> Self {
        Self {
            left: Button::new(),
            right: Button::new(),
        }
    }

    /// Record the latest poll of both buttons
    pub fn update(&mut self, left_pressed: bool, right_pressed: bool) {
        self.left.update(left_pressed);
        self.right.update(right_pressed);
    }

    /// Both buttons held together
    pub fn chord(&self) -> bool {
        self.left.pressed() && self.right.pressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_edges() {
        let mut button = Button::new();
        button.update(true);
        assert!(button.just_pressed());
        assert!(!button.just_released());

        button.update(true);
        assert!(!button.just_pressed());
        assert!(button.pressed());

        button.update(false);
        assert!(button.just_released());
        assert!(button.released());

        button.update(false);
        assert!(!button.just_released());
    }

    #[test]
    fn test_chord() {
        let mut buttons = ButtonPair::new();
        buttons.update(true, false);
        assert!(!buttons.chord());
        buttons.update(true, true);
        assert!(buttons.chord());
        assert!(buttons.right.just_pressed());
    }
}
