use crate::constants::KEY_COUNT;

/// # Input
/// The 16-key hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
pub trait Input {
    /// Whether key 0x0..=0xF is held down. Keys above 0xF are never pressed.
    fn is_key_pressed(&self, key: u8) -> bool;

    /// Hands out a key press that has not been consumed yet, if there is one.
    fn pending_key(&mut self) -> Option<u8>;
}

/// # Keypad
/// Key state fed by host press/release events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
    pending: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a key as held and queues it for anyone waiting on a key.
    /// Keys outside 0x0..=0xF are ignored.
    pub fn press(&mut self, key: u8) {
        if let Some(state) = self.pressed.get_mut(key as usize) {
            *state = true;
            self.pending = Some(key);
        }
    }

    /// Lets go of a key; an unconsumed press of the same key is dropped with it.
    pub fn release(&mut self, key: u8) {
        if let Some(state) = self.pressed.get_mut(key as usize) {
            *state = false;
            if self.pending == Some(key) {
                self.pending = None;
            }
        }
    }
}

impl Input for Keypad {
    fn is_key_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    fn pending_key(&mut self) -> Option<u8> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press(0xE);
        assert!(keypad.is_key_pressed(0xE));
        keypad.release(0xE);
        assert!(!keypad.is_key_pressed(0xE));
    }

    #[test]
    fn test_pending_key_is_consumed() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.pending_key(), None);
        keypad.press(0x3);
        keypad.press(0x7);
        assert_eq!(keypad.pending_key(), Some(0x7));
        assert_eq!(keypad.pending_key(), None);
    }

    #[test]
    fn test_release_drops_unconsumed_press() {
        let mut keypad = Keypad::new();
        keypad.press(0x7);
        keypad.release(0x7);
        assert_eq!(keypad.pending_key(), None);
    }

    #[test]
    fn test_release_keeps_other_pending_key() {
        let mut keypad = Keypad::new();
        keypad.press(0x2);
        keypad.press(0x7);
        keypad.release(0x2);
        assert_eq!(keypad.pending_key(), Some(0x7));
    }

    #[test]
    fn test_out_of_range_keys_are_ignored() {
        let mut keypad = Keypad::new();
        keypad.press(0x10);
        assert!(!keypad.is_key_pressed(0x10));
        assert_eq!(keypad.pending_key(), None);
    }
}
