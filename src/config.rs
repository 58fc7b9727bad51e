//! Key sheet: serializable description of a machine setup.
//!
//! A [`MachineConfig`] lists the rotor wirings with their start positions
//! and optional turnovers, plus the reflector wiring. It loads from and
//! saves to JSON and builds a validated [`Machine`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::machine::Machine;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, DEFAULT_TURNOVER};

/// One rotor slot on the key sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// 26-letter wiring string.
    pub wiring: String,

    /// Start position (0-based offset).
    #[serde(default)]
    pub position: u8,

    /// Turnover position; the rotor default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnover: Option<u8>,
}

/// Complete machine setup, rotors listed rightmost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub rotors: Vec<RotorConfig>,
    pub reflector: String,
}

impl RotorConfig {
    /// Builds the rotor described by this slot.
    pub fn build(&self) -> Result<Rotor> {
        let rotor = Rotor::new(&self.wiring, self.position)?;
        Ok(match self.turnover {
            Some(turnover) => rotor.with_turnover(turnover),
            None => rotor,
        })
    }
}

/// Describes a rotor by its wiring, start position and turnover. A turnover
/// equal to [`DEFAULT_TURNOVER`] is left off the sheet.
impl From<&Rotor> for RotorConfig {
    fn from(rotor: &Rotor) -> Self {
        RotorConfig {
            wiring: rotor.wiring().to_string(),
            position: rotor.start_position(),
            turnover: (rotor.turnover() != DEFAULT_TURNOVER).then_some(rotor.turnover()),
        }
    }
}

impl MachineConfig {
    /// Writes down the setup of an existing machine.
    ///
    /// The sheet records start positions, not the current offsets: building
    /// it yields the machine as it was assembled.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, MachineConfig, Reflector, Rotor};
    ///
    /// let rotors = vec![Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 7).unwrap()];
    /// let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
    /// let mut machine = Machine::new(rotors, reflector).unwrap();
    /// machine.encipher("ADVANCE THE ROTOR");
    ///
    /// let sheet = MachineConfig::from_machine(&machine);
    /// assert_eq!(sheet.rotors[0].wiring, "VEADTQRWUFZNLHYPXOGKJIMCSB");
    /// assert_eq!(sheet.rotors[0].position, 7);
    /// ```
    pub fn from_machine(machine: &Machine) -> Self {
        MachineConfig {
            rotors: machine.rotors().iter().map(RotorConfig::from).collect(),
            reflector: machine.reflector().wiring().to_string(),
        }
    }

    /// Builds a fresh machine from the key sheet.
    ///
    /// Every call returns an independent machine at the sheet's start
    /// positions.
    ///
    /// # Errors
    /// Propagates the construction errors of rotors, reflector and machine.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::MachineConfig;
    ///
    /// let sheet = MachineConfig::from_json(r#"{
    ///     "rotors": [
    ///         { "wiring": "VEADTQRWUFZNLHYPXOGKJIMCSB", "position": 1 },
    ///         { "wiring": "WNYPVJXTOAMQIZKSRFUHGCEDBL", "position": 2 },
    ///         { "wiring": "DJYPKQNOZLMGIHFETRVCBXSWAU", "position": 3 }
    ///     ],
    ///     "reflector": "EJMZALYXVBWFCRQUONTSPIKHGD"
    /// }"#).unwrap();
    ///
    /// let mut machine = sheet.build().unwrap();
    /// assert_eq!(machine.encipher("ATTACK AT DAWN"), "TFKZAX KV LCBG");
    /// ```
    pub fn build(&self) -> Result<Machine> {
        let rotors = self
            .rotors
            .iter()
            .map(RotorConfig::build)
            .collect::<Result<Vec<_>>>()?;
        let reflector = Reflector::new(&self.reflector)?;
        Machine::new(rotors, reflector)
    }

    /// Parses a key sheet from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the key sheet to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a key sheet from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), rotors = config.rotors.len(), "key sheet loaded");
        Ok(config)
    }

    /// Writes the key sheet to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), "key sheet saved");
        Ok(())
    }
}
