//! Machine: rotor stack, reflector and the per-keypress stepping logic.
//!
//! Each alphabetic keypress first advances the rotors according to the
//! stepping rule, then sends the letter through every rotor toward the
//! reflector and back out again. Anything that is not a letter passes
//! through untouched and leaves the rotors where they are.

use tracing::{debug, trace};

use crate::error::{Result, RotorCryptError};
use crate::positions::Positions;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet;

/// Rotor cipher machine.
///
/// # Architecture
///
/// ```text
/// key ─► rotor[0] ─► rotor[1] ─► … ─► rotor[n-1] ─► Reflector
///                                                      │
/// lamp ◄─ rotor[0] ◄─ rotor[1] ◄─ … ◄─ rotor[n-1] ◄────┘
/// ```
///
/// `rotor[0]` is the rightmost, fastest rotor. The rotor list and the
/// reflector are fixed once the machine is built; the rotor offsets are the
/// only state that changes, and they carry over between calls until the
/// machine is [`reset`](Self::reset) or [`restore`](Self::restore)d.
///
/// # Stepping
///
/// Before every letter, as a function of the current offsets only:
/// 1. `rotor[0]` always steps.
/// 2. If that step lands `rotor[0]` on its turnover, `rotor[1]` steps.
/// 3. Every interior rotor already sitting on its turnover steps, and
///    takes the rotor to its left along (the double-step).
///
/// No rotor moves more than one position per keypress.
///
/// The first keypress after assembly or [`reset`](Self::reset) only seats
/// the fastest rotor on its start position: nothing carries, even when a
/// start position equals a turnover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    seated: bool,
}

impl Machine {
    /// Assembles a machine from rotors (rightmost first) and a reflector.
    ///
    /// Rotor start positions name the alignment used for the first
    /// enciphered letter. Since every keypress steps before the signal
    /// passes, the fastest rotor is seated one notch behind its start
    /// position; [`positions`](Self::positions) reports that seated state.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidConfiguration`] if `rotors` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, Reflector, Rotor};
    ///
    /// let rotors = vec![
    ///     Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 1).unwrap(),
    ///     Rotor::new("WNYPVJXTOAMQIZKSRFUHGCEDBL", 2).unwrap(),
    ///     Rotor::new("DJYPKQNOZLMGIHFETRVCBXSWAU", 3).unwrap(),
    /// ];
    /// let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// let mut machine = Machine::new(rotors, reflector).unwrap();
    ///
    /// assert_eq!(machine.encipher("ATTACK AT DAWN"), "TFKZAX KV LCBG");
    /// ```
    ///
    /// ```
    /// use rotorcrypt::{Machine, Reflector};
    ///
    /// let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// assert!(Machine::new(Vec::new(), reflector).is_err());
    /// ```
    pub fn new(mut rotors: Vec<Rotor>, reflector: Reflector) -> Result<Self> {
        let Some(fastest) = rotors.first_mut() else {
            return Err(RotorCryptError::InvalidConfiguration(
                "a machine needs at least one rotor".to_string(),
            ));
        };
        fastest.seat_behind();

        let machine = Machine {
            rotors,
            reflector,
            seated: true,
        };
        debug!(
            rotors = machine.rotors.len(),
            positions = %machine.positions(),
            "machine assembled"
        );
        Ok(machine)
    }

    /// Enciphers `text`, advancing the rotors once per letter.
    ///
    /// Letters are upper-cased; every other character is copied through
    /// unchanged, so the output keeps the layout of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, Reflector, Rotor};
    ///
    /// let rotors = vec![Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 0).unwrap()];
    /// let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// let mut machine = Machine::new(rotors, reflector).unwrap();
    ///
    /// let ciphertext = machine.encipher("hello, world");
    /// assert_eq!(ciphertext.len(), 12);
    /// assert_eq!(&ciphertext[5..7], ", ");
    /// ```
    pub fn encipher(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encipher_char(c)).collect()
    }

    /// Deciphers `text`.
    ///
    /// Identical to [`encipher`](Self::encipher): the cipher is its own
    /// inverse. The result is only the plaintext when the machine starts
    /// from the positions the encipher pass started from; this method does
    /// not rewind the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, Reflector, Rotor};
    ///
    /// let rotors = vec![
    ///     Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 1).unwrap(),
    ///     Rotor::new("WNYPVJXTOAMQIZKSRFUHGCEDBL", 2).unwrap(),
    ///     Rotor::new("DJYPKQNOZLMGIHFETRVCBXSWAU", 3).unwrap(),
    /// ];
    /// let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// let mut machine = Machine::new(rotors, reflector).unwrap();
    ///
    /// let start = machine.positions();
    /// let ciphertext = machine.encipher("Attack at dawn");
    /// machine.restore(&start).unwrap();
    /// assert_eq!(machine.decipher(&ciphertext), "ATTACK AT DAWN");
    /// ```
    pub fn decipher(&mut self, text: &str) -> String {
        self.encipher(text)
    }

    /// Enciphers a single character.
    ///
    /// Non-letters are returned unchanged without stepping the rotors.
    pub fn encipher_char(&mut self, c: char) -> char {
        let Some(symbol) = alphabet::index_of(c) else {
            return c;
        };
        self.press();
        alphabet::letter(self.substitute(symbol))
    }

    /// Returns a snapshot of every rotor offset.
    pub fn positions(&self) -> Positions {
        self.rotors
            .iter()
            .map(Rotor::offset)
            .collect::<Positions>()
            .with_seated(self.seated)
    }

    /// Moves every rotor to the offsets in `positions`.
    ///
    /// A seated snapshot (see [`Positions::is_seated`]) brings back the
    /// non-carrying first keypress along with the offsets.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidConfiguration`] if `positions` does
    /// not cover exactly this machine's rotors. The machine is left
    /// unchanged in that case.
    pub fn restore(&mut self, positions: &Positions) -> Result<()> {
        if positions.len() != self.rotors.len() {
            return Err(RotorCryptError::InvalidConfiguration(format!(
                "positions cover {} rotors, machine has {}",
                positions.len(),
                self.rotors.len()
            )));
        }
        for (rotor, &offset) in self.rotors.iter_mut().zip(positions.as_slice()) {
            rotor.set_offset(offset);
        }
        self.seated = positions.is_seated();
        debug!(positions = %self.positions(), "positions restored");
        Ok(())
    }

    /// Returns every rotor to the positions the machine was assembled with.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, Reflector, Rotor};
    ///
    /// let rotors = vec![Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 5).unwrap()];
    /// let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// let mut machine = Machine::new(rotors, reflector).unwrap();
    ///
    /// let first = machine.encipher("SAME");
    /// machine.reset();
    /// assert_eq!(machine.encipher("SAME"), first);
    /// ```
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
        self.seated = true;
        debug!(positions = %self.positions(), "machine reset");
    }

    /// Rotors in machine order, rightmost first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Number of rotors.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Always `false`: a machine holds at least one rotor.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    // ──────── Keypress ────────

    /// Advances the rotors for one keypress.
    fn press(&mut self) {
        let plan = stepping_plan(&self.rotors, self.seated);
        self.seated = false;
        for (rotor, advances) in self.rotors.iter_mut().zip(plan) {
            if advances {
                rotor.step();
            }
        }
        trace!(positions = %self.positions(), "keypress");
    }

    /// Sends a contact through the rotors, the reflector and back.
    fn substitute(&self, symbol: u8) -> u8 {
        let inbound = self
            .rotors
            .iter()
            .fold(symbol, |contact, rotor| rotor.forward(contact));
        let reflected = self.reflector.reflect(inbound);
        self.rotors
            .iter()
            .rev()
            .fold(reflected, |contact, rotor| rotor.backward(contact))
    }
}

/// Decides which rotors advance on the next keypress.
///
/// Pure function of the rotors' current offsets and turnovers; index `i`
/// of the result is `true` when `rotors[i]` steps. On the seating keypress
/// only the fastest rotor moves.
fn stepping_plan(rotors: &[Rotor], seating: bool) -> Vec<bool> {
    let count = rotors.len();
    let mut plan = vec![false; count];
    let Some(fastest) = rotors.first() else {
        return plan;
    };

    plan[0] = true;
    if seating {
        return plan;
    }
    if count > 1 && fastest.turns_over_next() {
        plan[1] = true;
    }

    // Interior rotors sitting on their notch: the pawl pushes them and the
    // rotor to their left together.
    let interior = rotors.iter().enumerate().take(count - 1).skip(1);
    for (i, rotor) in interior {
        if rotor.at_turnover() {
            plan[i] = true;
            plan[i + 1] = true;
        }
    }
    plan
}
