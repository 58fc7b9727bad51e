//! Reflector: fixed involutive substitution that turns the signal around.

use crate::error::{Result, RotorCryptError};
use crate::permutation::Permutation;
use crate::utils::alphabet;

/// Non-rotating reflector.
///
/// The wiring pairs letters mutually (`A <-> E` means `E <-> A`) and never
/// maps a letter to itself. Both properties are what make the whole
/// machine self-reciprocal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Permutation,
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidWiring`] if the string is not a permutation.
    /// - [`RotorCryptError::InvalidReflector`] if a letter maps to itself or
    ///   the pairing is not mutual.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Reflector, RotorCryptError};
    ///
    /// let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// assert_eq!(reflector.reflect(0), 4);
    /// assert_eq!(reflector.reflect(4), 0);
    ///
    /// assert!(matches!(
    ///     Reflector::new("VEADTQRWUFZNLHYPXOGKJIMCSB"),
    ///     Err(RotorCryptError::InvalidReflector(_))
    /// ));
    /// ```
    pub fn new(wiring: &str) -> Result<Self> {
        Self::from_permutation(Permutation::new(wiring)?)
    }

    /// Creates a reflector from an already validated permutation.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidReflector`] if the permutation has a
    /// fixed point or is not involutive.
    pub fn from_permutation(wiring: Permutation) -> Result<Self> {
        if let Some(&fixed) = wiring.fixed_points().first() {
            return Err(RotorCryptError::InvalidReflector(format!(
                "'{}' maps to itself",
                alphabet::letter(fixed)
            )));
        }
        if !wiring.is_involution() {
            for s in 0..alphabet::ALPHABET_LEN as u8 {
                let t = wiring.map(s);
                if wiring.map(t) != s {
                    return Err(RotorCryptError::InvalidReflector(format!(
                        "'{}' maps to '{}' but '{}' maps to '{}'",
                        alphabet::letter(s),
                        alphabet::letter(t),
                        alphabet::letter(t),
                        alphabet::letter(wiring.map(t))
                    )));
                }
            }
        }
        Ok(Reflector { wiring })
    }

    /// Returns the contact paired with `symbol`.
    pub fn reflect(&self, symbol: u8) -> u8 {
        self.wiring.map(symbol)
    }

    /// Reflector wiring.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}
