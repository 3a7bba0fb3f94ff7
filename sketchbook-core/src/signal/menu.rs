//! Source selection menu driven by the two buttons

use super::Waveform;
use crate::input::ButtonPair;

/// Result of one menu poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEvent {
    /// Nothing to redraw
    Idle,
    /// Highlight moved; `previous` is `None` on the first poll
    Moved {
        previous: Option<usize>,
        current: usize,
    },
    /// Left button confirmed the highlighted entry
    Selected(Waveform),
}

/// Cursor over [`Waveform::ALL`]. Right release advances, left release selects.
#[derive(Debug, Clone, Default)]
pub struct FunctionMenu {
    cursor: usize,
    drawn: Option<usize>,
}

impl FunctionMenu {
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            drawn: None,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static str> {
        Waveform::ALL.iter().map(|w| w.menu_name())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn poll(&mut self, buttons: &ButtonPair) -> MenuEvent {
        if buttons.right.just_released() {
            self.cursor = (self.cursor + 1) % Waveform::ALL.len();
        }
        if buttons.left.just_released() {
            return MenuEvent::Selected(Waveform::ALL[self.cursor]);
        }
        if self.drawn != Some(self.cursor) {
            let previous = self.drawn;
            self.drawn = Some(self.cursor);
            return MenuEvent::Moved {
                previous,
                current: self.cursor,
            };
        }
        MenuEvent::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(b: &mut ButtonPair, left: bool, right: bool) {
        b.update(left, right);
        b.update(false, false);
    }

    #[test]
    fn test_first_poll_draws_cursor() {
        let mut menu = FunctionMenu::new();
        let b = ButtonPair::new();
        assert_eq!(
            menu.poll(&b),
            MenuEvent::Moved {
                previous: None,
                current: 0
            }
        );
        assert_eq!(menu.poll(&b), MenuEvent::Idle);
    }

    #[test]
    fn test_right_advances_and_wraps() {
        let mut menu = FunctionMenu::new();
        let mut b = ButtonPair::new();
        menu.poll(&b);
        for expected in 1..Waveform::ALL.len() {
            release(&mut b, false, true);
            assert_eq!(
                menu.poll(&b),
                MenuEvent::Moved {
                    previous: Some(expected - 1),
                    current: expected
                }
            );
        }
        release(&mut b, false, true);
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn test_left_selects() {
        let mut menu = FunctionMenu::new();
        let mut b = ButtonPair::new();
        release(&mut b, false, true);
        menu.poll(&b);
        release(&mut b, true, false);
        assert_eq!(menu.poll(&b), MenuEvent::Selected(Waveform::Sine));
    }

    #[test]
    fn test_entries_are_numbered() {
        let menu = FunctionMenu::new();
        assert_eq!(menu.entries().count(), 7);
        assert!(menu.entries().next().unwrap().starts_with("0. "));
    }
}
