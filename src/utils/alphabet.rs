//! Letter and contact index conversion utilities.
//!
//! Every component of the machine works on contact indices `0..26`, where
//! index `i` stands for the letter `A + i`. These helpers convert between
//! letters and indices and perform the modular shifts that model a
//! rotor's rotation against its neighbours.

/// Number of symbols (and contacts on every rotor).
pub const ALPHABET_LEN: usize = 26;

/// The symbol alphabet in contact order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const MODULUS: u8 = ALPHABET_LEN as u8;

/// Returns the contact index of a letter, ignoring case.
///
/// # Parameters
/// - `letter`: Any character.
///
/// # Returns
/// `Some(0..26)` for `A`..`Z` and `a`..`z`, `None` for everything else.
pub fn index_of(letter: char) -> Option<u8> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper as u8 - b'A')
    } else {
        None
    }
}

/// Returns the upper-case letter for a contact index.
///
/// # Panics
/// Panics if `index >= 26`.
pub fn letter(index: u8) -> char {
    assert!(index < MODULUS, "contact index {} out of range", index);
    (b'A' + index) as char
}

/// Reduces any value into the contact range `0..26`.
pub fn wrap(value: u8) -> u8 {
    value % MODULUS
}

/// Moves a contact index forward by `by` positions, wrapping at 26.
pub fn advance(index: u8, by: u8) -> u8 {
    ((index as u16 + wrap(by) as u16) % MODULUS as u16) as u8
}

/// Moves a contact index backward by `by` positions, wrapping at 26.
pub fn retreat(index: u8, by: u8) -> u8 {
    advance(index, MODULUS - wrap(by))
}
