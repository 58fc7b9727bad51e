//! Rotor: rotating substitution unit with a turnover notch.
//!
//! A rotor couples a fixed [`Permutation`] with a rotational offset. The
//! offset misaligns the rotor's contacts against its neighbours, so the
//! same wiring yields a different substitution at every position. Stepping
//! advances the offset by one and reports when the rotor lands on its
//! turnover position.

use tracing::trace;

use crate::error::Result;
use crate::permutation::Permutation;
use crate::utils::alphabet;

/// Turnover used when none is given: the rotor carries after a full turn.
pub const DEFAULT_TURNOVER: u8 = 0;

/// Rotating substitution unit.
///
/// `wiring` and `turnover` are fixed after construction. `offset` is the
/// only mutable state and always stays in `0..26`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation,
    contacts: Permutation,
    turnover: u8,
    offset: u8,
    start: u8,
    home: u8,
}

impl Rotor {
    /// Creates a rotor from a wiring string and a starting position.
    ///
    /// The position is a 0-based rotational offset taken modulo 26. The
    /// wiring string is read as seen from that position: its first letter
    /// is the output of the contact showing in the window when the rotor
    /// sits at `start_position`.
    ///
    /// # Parameters
    /// - `wiring`: 26-letter permutation string.
    /// - `start_position`: Initial offset (wraps modulo 26).
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidWiring`](crate::RotorCryptError::InvalidWiring)
    /// if `wiring` is not a permutation of `A`..`Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Rotor;
    ///
    /// let rotor = Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 1).unwrap();
    /// assert_eq!(rotor.offset(), 1);
    ///
    /// assert!(Rotor::new("VEADTQ", 0).is_err());
    /// ```
    pub fn new(wiring: &str, start_position: u8) -> Result<Self> {
        Ok(Self::from_permutation(Permutation::new(wiring)?, start_position))
    }

    /// Creates a rotor from an already validated permutation.
    ///
    /// The permutation is framed against `start_position` exactly as in
    /// [`new`](Self::new).
    pub fn from_permutation(wiring: Permutation, start_position: u8) -> Self {
        let start = alphabet::wrap(start_position);
        Rotor {
            contacts: wiring.rotated(start),
            wiring,
            turnover: DEFAULT_TURNOVER,
            offset: start,
            start,
            home: start,
        }
    }

    /// Sets the turnover (notch) position, taken modulo 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Rotor;
    ///
    /// let mut rotor = Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 3)
    ///     .unwrap()
    ///     .with_turnover(4);
    /// assert!(rotor.step());
    /// assert!(!rotor.step());
    /// ```
    pub fn with_turnover(mut self, turnover: u8) -> Self {
        self.turnover = alphabet::wrap(turnover);
        self
    }

    /// Passes a contact through the rotor toward the reflector.
    ///
    /// Shifts the incoming contact by the current offset, substitutes
    /// through the wiring and shifts back.
    pub fn forward(&self, symbol: u8) -> u8 {
        let contact = alphabet::advance(symbol, self.offset);
        alphabet::retreat(self.contacts.map(contact), self.offset)
    }

    /// Passes a contact back through the rotor from the reflector side.
    ///
    /// Inverse of [`forward`](Self::forward) at the same offset.
    pub fn backward(&self, symbol: u8) -> u8 {
        let contact = alphabet::advance(symbol, self.offset);
        alphabet::retreat(self.contacts.unmap(contact), self.offset)
    }

    /// Advances the rotor by one position.
    ///
    /// # Returns
    /// `true` when the new offset equals the turnover position.
    pub fn step(&mut self) -> bool {
        self.offset = alphabet::advance(self.offset, 1);
        let landed = self.offset == self.turnover;
        if landed {
            trace!(offset = self.offset, "rotor landed on turnover");
        }
        landed
    }

    /// Returns `true` when the rotor currently sits on its turnover position.
    pub fn at_turnover(&self) -> bool {
        self.offset == self.turnover
    }

    /// Returns `true` when the next step lands the rotor on its turnover.
    pub fn turns_over_next(&self) -> bool {
        alphabet::advance(self.offset, 1) == self.turnover
    }

    /// Current rotational offset.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Moves the rotor to `offset` (taken modulo 26).
    pub fn set_offset(&mut self, offset: u8) {
        self.offset = alphabet::wrap(offset);
    }

    /// Start position the rotor was built with.
    pub fn start_position(&self) -> u8 {
        self.start
    }

    /// Offset restored by [`reset`](Self::reset).
    ///
    /// Equals the start position, except for the fastest rotor of a
    /// [`Machine`](crate::Machine), which is seated one notch behind it.
    pub fn home(&self) -> u8 {
        self.home
    }

    /// Turnover (notch) position.
    pub fn turnover(&self) -> u8 {
        self.turnover
    }

    /// Wiring exactly as given to the constructor, read from the start
    /// position.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }

    /// Wiring re-framed to absolute contact positions, as used by
    /// [`forward`](Self::forward) and [`backward`](Self::backward).
    ///
    /// Same table as [`wiring`](Self::wiring) shifted by the start position.
    pub fn contacts(&self) -> &Permutation {
        &self.contacts
    }

    /// Returns the rotor to its home offset.
    pub fn reset(&mut self) {
        self.offset = self.home;
    }

    /// Moves the home offset (and the rotor) one notch back, so that the
    /// first keypress brings the rotor to its start position.
    pub(crate) fn seat_behind(&mut self) {
        self.home = alphabet::retreat(self.home, 1);
        self.offset = self.home;
    }
}
