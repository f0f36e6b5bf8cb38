use sdl2::keyboard::Keycode;

/// Host keys in keypad order: key `k` sits at row `k / 4`, column `k % 4`.
/// ```text
/// |0|1|2|3|      |1|2|3|4|
/// |4|5|6|7|  ->  |Q|W|E|R|
/// |8|9|A|B|  ->  |A|S|D|F|
/// |C|D|E|F|      |Z|X|C|V|
/// ```
const KEYS: [Keycode; 16] = [
    Keycode::Num1, Keycode::Num2, Keycode::Num3, Keycode::Num4,
    Keycode::Q, Keycode::W, Keycode::E, Keycode::R,
    Keycode::A, Keycode::S, Keycode::D, Keycode::F,
    Keycode::Z, Keycode::X, Keycode::C, Keycode::V,
];

/// The keypad key bound to a host key, if any.
pub fn keymap(key: Keycode) -> Option<u8> {
    KEYS.iter().position(|&k| k == key).map(|k| k as u8)
}
