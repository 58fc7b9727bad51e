//! Rotor cipher machine simulator.
//!
//! rotorcrypt models a historical rotor machine: a stack of interchangeable
//! rotors and a fixed reflector forming a self-reciprocal polyalphabetic
//! substitution cipher. Enciphering and deciphering are the same operation,
//! given the same starting rotor positions.
//!
//! # Architecture
//!
//! ```text
//! Permutation  (bijective 26-letter table, forward + inverse lookup)
//!     ↕ framed by a rotational offset
//! Rotor        (permutation + offset + turnover notch)
//!     ↕ N rotors in cascade, signal turned around by
//! Reflector    (involutive permutation without fixed points)
//!     ↕
//! Machine      (stepping rule with double-step + forward/reflect/backward path)
//! ```
//!
//! # Examples
//!
//! Encipher a message and read it back after rewinding the rotors:
//!
//! ```
//! use rotorcrypt::{Machine, Reflector, Rotor};
//!
//! let rotors = vec![
//!     Rotor::new("VEADTQRWUFZNLHYPXOGKJIMCSB", 1).unwrap(),
//!     Rotor::new("WNYPVJXTOAMQIZKSRFUHGCEDBL", 2).unwrap(),
//!     Rotor::new("DJYPKQNOZLMGIHFETRVCBXSWAU", 3).unwrap(),
//! ];
//! let reflector = Reflector::new("EJMZALYXVBWFCRQUONTSPIKHGD").unwrap();
//! let mut machine = Machine::new(rotors, reflector).unwrap();
//!
//! let ciphertext = machine.encipher("ATTACK AT DAWN");
//! assert_eq!(ciphertext, "TFKZAX KV LCBG");
//!
//! machine.reset();
//! assert_eq!(machine.decipher(&ciphertext), "ATTACK AT DAWN");
//! ```
//!
//! Build the same machine from a JSON key sheet:
//!
//! ```
//! use rotorcrypt::MachineConfig;
//!
//! let sheet = MachineConfig::from_json(r#"{
//!     "rotors": [
//!         { "wiring": "VEADTQRWUFZNLHYPXOGKJIMCSB", "position": 1 },
//!         { "wiring": "WNYPVJXTOAMQIZKSRFUHGCEDBL", "position": 2 },
//!         { "wiring": "DJYPKQNOZLMGIHFETRVCBXSWAU", "position": 3 }
//!     ],
//!     "reflector": "EJMZALYXVBWFCRQUONTSPIKHGD"
//! }"#).unwrap();
//!
//! let mut encoder = sheet.build().unwrap();
//! let mut decoder = sheet.build().unwrap();
//! let ciphertext = encoder.encipher("Meet me at noon.");
//! assert_eq!(decoder.decipher(&ciphertext), "MEET ME AT NOON.");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod utils;

mod machine;
mod permutation;
mod positions;
mod reflector;
mod rotor;

pub use config::{MachineConfig, RotorConfig};
pub use error::{Result, RotorCryptError};
pub use machine::Machine;
pub use permutation::Permutation;
pub use positions::Positions;
pub use reflector::Reflector;
pub use rotor::{Rotor, DEFAULT_TURNOVER};
