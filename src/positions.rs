//! Snapshot of every rotor offset in a machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::alphabet;

/// Rotor offsets in machine order (index 0 is the rightmost, fastest rotor).
///
/// Captured with [`Machine::positions`](crate::Machine::positions) and put
/// back with [`Machine::restore`](crate::Machine::restore), so a caller can
/// rewind a machine between an encipher and a decipher pass.
///
/// A snapshot taken right after assembly or [`reset`](crate::Machine::reset)
/// is *seated*: the next keypress only brings the fastest rotor up to its
/// start position and never carries. Restoring a seated snapshot keeps that
/// behaviour.
///
/// Serialized as a plain offset list (`[3, 4, 5]`), or as
/// `{"offsets": [...], "seated": true}` for a seated snapshot. Offsets are
/// taken modulo 26 on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "PositionsRepr", into = "PositionsRepr")]
pub struct Positions {
    offsets: Vec<u8>,
    seated: bool,
}

impl Positions {
    /// Creates a snapshot; every offset is taken modulo 26.
    pub fn new(offsets: Vec<u8>) -> Self {
        Positions {
            offsets: offsets.into_iter().map(alphabet::wrap).collect(),
            seated: false,
        }
    }

    pub(crate) fn with_seated(mut self, seated: bool) -> Self {
        self.seated = seated;
        self
    }

    /// Offsets in machine order.
    pub fn as_slice(&self) -> &[u8] {
        &self.offsets
    }

    /// Returns `true` if the next keypress from these offsets is the seating
    /// step of a freshly assembled or reset machine.
    pub fn is_seated(&self) -> bool {
        self.seated
    }

    /// Number of rotors covered.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the snapshot covers no rotor.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl From<Vec<u8>> for Positions {
    fn from(offsets: Vec<u8>) -> Self {
        Positions::new(offsets)
    }
}

impl FromIterator<u8> for Positions {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Positions::new(iter.into_iter().collect())
    }
}

/// Window letters as an operator reads them, leftmost rotor first.
impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &offset in self.offsets.iter().rev() {
            write!(f, "{}", alphabet::letter(offset))?;
        }
        Ok(())
    }
}

/// Wire form of [`Positions`].
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PositionsRepr {
    Offsets(Vec<u8>),
    Marked { offsets: Vec<u8>, seated: bool },
}

impl From<PositionsRepr> for Positions {
    fn from(repr: PositionsRepr) -> Self {
        match repr {
            PositionsRepr::Offsets(offsets) => Positions::new(offsets),
            PositionsRepr::Marked { offsets, seated } => {
                Positions::new(offsets).with_seated(seated)
            }
        }
    }
}

impl From<Positions> for PositionsRepr {
    fn from(positions: Positions) -> Self {
        if positions.seated {
            PositionsRepr::Marked {
                offsets: positions.offsets,
                seated: true,
            }
        } else {
            PositionsRepr::Offsets(positions.offsets)
        }
    }
}
