//! Permutation: bijective substitution table over the 26-letter alphabet.
//!
//! The shared foundation of rotors and reflectors. A permutation is built
//! once from a wiring string and then answers forward (`map`) and inverse
//! (`unmap`) lookups in constant time through a precomputed inverse table.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RotorCryptError};
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Bijective mapping of contact indices `0..26`.
///
/// Position `i` of the wiring string (letter `A + i`) maps to the letter
/// stored there. `"BCDA..."` maps `A -> B`, `B -> C`, `C -> D`, `D -> A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl Permutation {
    /// Builds a permutation from a 26-letter wiring string.
    ///
    /// # Parameters
    /// - `wiring`: Upper-case string containing every letter `A`..`Z` once.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidWiring`] if the string has the wrong
    /// length, contains a character outside `A`..`Z`, or repeats a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Permutation;
    ///
    /// let p = Permutation::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// assert_eq!(p.map(0), 4); // A -> E
    /// assert_eq!(p.unmap(4), 0);
    ///
    /// assert!(Permutation::new("ABC").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self> {
        let length = wiring.chars().count();
        if length != ALPHABET_LEN {
            return Err(RotorCryptError::InvalidWiring(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN, length
            )));
        }

        let mut forward = [0u8; ALPHABET_LEN];
        let mut counts = [0u8; ALPHABET_LEN];
        for (position, c) in wiring.chars().enumerate() {
            let symbol = match c {
                'A'..='Z' => c as u8 - b'A',
                _ => {
                    return Err(RotorCryptError::InvalidWiring(format!(
                        "character {:?} at position {} is not an upper-case letter",
                        c, position
                    )))
                }
            };
            counts[symbol as usize] += 1;
            forward[position] = symbol;
        }

        // Right length, so a repeat always leaves some letter out.
        if let Some(&repeated) = forward.iter().find(|&&s| counts[s as usize] > 1) {
            let missing = counts
                .iter()
                .position(|&n| n == 0)
                .map(|i| alphabet::letter(i as u8))
                .unwrap_or('?');
            return Err(RotorCryptError::InvalidWiring(format!(
                "letter '{}' appears more than once, '{}' is missing",
                alphabet::letter(repeated),
                missing
            )));
        }

        Ok(Self::from_table(forward))
    }

    /// Builds the inverse index for an already validated table.
    fn from_table(forward: [u8; ALPHABET_LEN]) -> Self {
        let mut inverse = [0u8; ALPHABET_LEN];
        for (input, &output) in forward.iter().enumerate() {
            inverse[output as usize] = input as u8;
        }
        Permutation { forward, inverse }
    }

    /// Returns the output contact for an input contact.
    ///
    /// # Panics
    /// Panics if `symbol >= 26`.
    pub fn map(&self, symbol: u8) -> u8 {
        self.forward[symbol as usize]
    }

    /// Returns the input contact that produces `symbol`.
    ///
    /// # Panics
    /// Panics if `symbol >= 26`.
    pub fn unmap(&self, symbol: u8) -> u8 {
        self.inverse[symbol as usize]
    }

    /// Returns a copy whose table is re-framed `by` contacts around the rotor,
    /// so that index `x` reads the entry that was at `x - by`.
    ///
    /// Output letters are left untouched; only the frame of the inputs moves.
    pub fn rotated(&self, by: u8) -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (x, slot) in forward.iter_mut().enumerate() {
            *slot = self.forward[alphabet::retreat(x as u8, by) as usize];
        }
        Self::from_table(forward)
    }

    /// Returns `true` when applying the permutation twice yields the identity.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Returns every contact that maps to itself.
    pub fn fixed_points(&self) -> Vec<u8> {
        (0..ALPHABET_LEN as u8)
            .filter(|&s| self.map(s) == s)
            .collect()
    }
}

impl FromStr for Permutation {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self> {
        Permutation::new(s)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.forward {
            write!(f, "{}", alphabet::letter(symbol))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "VEADTQRWUFZNLHYPXOGKJIMCSB";
    const REFLECTOR: &str = "EJMZALYXVBWFCRQUONTSPIKHGD";

    #[test]
    fn test_map_follows_wiring() {
        let p = Permutation::new(ROTOR_I).unwrap();
        assert_eq!(p.map(0), b'V' - b'A');
        assert_eq!(p.map(1), b'E' - b'A');
        assert_eq!(p.map(25), b'B' - b'A');
    }

    #[test]
    fn test_unmap_inverts_map() {
        let p = Permutation::new(ROTOR_I).unwrap();
        for s in 0..26u8 {
            assert_eq!(p.unmap(p.map(s)), s);
            assert_eq!(p.map(p.unmap(s)), s);
        }
    }

    #[test]
    fn test_identity() {
        let p = Permutation::new(alphabet::ALPHABET).unwrap();
        assert_eq!(p.fixed_points().len(), 26);
        assert!(p.is_involution());
    }

    #[test]
    fn test_rejects_short_wiring() {
        let err = Permutation::new("ABCDEFGHIJKLMNOPQRSTUVWXY").unwrap_err();
        assert_eq!(
            err,
            RotorCryptError::InvalidWiring("expected 26 letters, got 25".to_string())
        );
    }

    #[test]
    fn test_rejects_repeated_letter() {
        let err = Permutation::new("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert_eq!(
            err,
            RotorCryptError::InvalidWiring("letter 'A' appears more than once, 'B' is missing".to_string())
        );
    }

    #[test]
    fn test_missing_letter_checks_whole_string() {
        // 'B' shows up after the repeat; only 'Z' is absent.
        let err = Permutation::new("AABCDEFGHIJKLMNOPQRSTUVWXY").unwrap_err();
        assert_eq!(
            err,
            RotorCryptError::InvalidWiring("letter 'A' appears more than once, 'Z' is missing".to_string())
        );
    }

    #[test]
    fn test_rejects_lower_case_and_symbols() {
        assert!(matches!(
            Permutation::new("abcdefghijklmnopqrstuvwxyz"),
            Err(RotorCryptError::InvalidWiring(_))
        ));
        assert!(matches!(
            Permutation::new("ABCDEFGHIJKLMNOPQRSTUVWXY-"),
            Err(RotorCryptError::InvalidWiring(_))
        ));
    }

    #[test]
    fn test_rejects_multibyte_padding() {
        // 26 chars but one is not ASCII
        assert!(Permutation::new("ÄBCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    }

    #[test]
    fn test_display_roundtrips_wiring() {
        let p: Permutation = ROTOR_I.parse().unwrap();
        assert_eq!(p.to_string(), ROTOR_I);
    }

    #[test]
    fn test_reflector_wiring_is_involution() {
        let p = Permutation::new(REFLECTOR).unwrap();
        assert!(p.is_involution());
        assert!(p.fixed_points().is_empty());

        let r = Permutation::new(ROTOR_I).unwrap();
        assert!(!r.is_involution());
    }

    #[test]
    fn test_rotated_shifts_input_frame() {
        let p = Permutation::new(ROTOR_I).unwrap();
        let r = p.rotated(1);
        // Index 1 now reads what index 0 held.
        assert_eq!(r.map(1), p.map(0));
        assert_eq!(r.map(0), p.map(25));
        assert_eq!(p.rotated(0), p);
        assert_eq!(p.rotated(26), p);
    }

    #[test]
    fn test_rotated_stays_bijective() {
        let p = Permutation::new(ROTOR_I).unwrap();
        for k in 0..26u8 {
            let r = p.rotated(k);
            for s in 0..26u8 {
                assert_eq!(r.unmap(r.map(s)), s);
            }
        }
    }
}
