use crate::constants::{WRAPPER_ID_LETTERS, WRAPPER_ID_PREFIX};

// Base-36 digits drawn from the fraction; f64 carries about ten of them.
const FRACTION_DIGITS: usize = 12;

/// Build a wrapper element id from a random fraction in `[0, 1)`.
///
/// The fraction is expanded into base-36 digits, digits 0-9 are dropped, and
/// after skipping the first two letters up to `WRAPPER_ID_LETTERS` remain.
pub fn wrapper_id_from(random: f64) -> String {
    let mut frac = random.fract().abs();
    let mut letters = String::with_capacity(FRACTION_DIGITS);
    for _ in 0..FRACTION_DIGITS {
        frac *= 36.0;
        let digit = frac.floor();
        frac -= digit;
        if let Some(c) = char::from_digit(digit as u32, 36) {
            if c.is_ascii_lowercase() {
                letters.push(c);
            }
        }
    }
    let tail: String = letters.chars().skip(2).take(WRAPPER_ID_LETTERS).collect();
    format!("{}{}", WRAPPER_ID_PREFIX, tail)
}
