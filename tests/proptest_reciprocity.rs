//! Property-based tests for the machine's cipher properties.
//!
//! These tests verify that for arbitrary wirings, positions, turnovers and
//! messages the machine is self-reciprocal, never maps a letter to itself,
//! passes non-letters through and steps deterministically.

use proptest::prelude::*;

use rotorcrypt::utils::alphabet::ALPHABET;
use rotorcrypt::{Machine, Permutation, Positions, Reflector, Rotor};

/// Arbitrary rotor wiring: a shuffled alphabet.
fn wiring() -> impl Strategy<Value = String> {
    Just(ALPHABET.chars().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|letters| letters.into_iter().collect())
}

/// Arbitrary reflector wiring: 13 disjoint letter pairs.
fn reflector_wiring() -> impl Strategy<Value = String> {
    Just((0u8..26).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|order| {
            let mut table = [b'A'; 26];
            for pair in order.chunks(2) {
                table[pair[0] as usize] = b'A' + pair[1];
                table[pair[1] as usize] = b'A' + pair[0];
            }
            String::from_utf8(table.to_vec()).unwrap()
        })
}

/// Arbitrary machine of 1..=5 rotors.
fn machine() -> impl Strategy<Value = Machine> {
    (
        prop::collection::vec((wiring(), 0u8..26, 0u8..26), 1..=5),
        reflector_wiring(),
    )
        .prop_map(|(slots, reflector)| {
            let rotors = slots
                .into_iter()
                .map(|(w, position, turnover)| {
                    Rotor::new(&w, position).unwrap().with_turnover(turnover)
                })
                .collect();
            Machine::new(rotors, Reflector::new(&reflector).unwrap()).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn permutation_unmap_inverts_map(w in wiring()) {
        let p = Permutation::new(&w).unwrap();
        for s in 0..26u8 {
            prop_assert_eq!(p.unmap(p.map(s)), s);
        }
    }

    #[test]
    fn generated_reflectors_are_valid(w in reflector_wiring()) {
        prop_assert!(Reflector::new(&w).is_ok());
    }

    #[test]
    fn decipher_inverts_encipher(mut m in machine(), text in "[A-Za-z ,.!?]{0,120}") {
        let start = m.positions();
        let ciphertext = m.encipher(&text);
        m.restore(&start).unwrap();
        prop_assert_eq!(m.decipher(&ciphertext), text.to_ascii_uppercase());
    }

    #[test]
    fn no_letter_maps_to_itself(mut m in machine(), text in "[A-Z]{1,80}") {
        let ciphertext = m.encipher(&text);
        for (p, c) in text.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(p, c);
        }
    }

    #[test]
    fn non_letters_pass_through(mut m in machine(), text in "[0-9 ,.;:!?()-]{0,60}") {
        let before = m.positions();
        prop_assert_eq!(m.encipher(&text), text);
        prop_assert_eq!(m.positions(), before);
    }

    #[test]
    fn stepping_is_a_function_of_start_state(m in machine(), presses in 0usize..300) {
        let mut a = m.clone();
        let mut b = m;
        let mut trail = Vec::with_capacity(presses);
        for _ in 0..presses {
            a.encipher_char('K');
            trail.push(a.positions());
        }
        for expected in &trail {
            b.encipher_char('K');
            prop_assert_eq!(&b.positions(), expected);
        }
    }

    #[test]
    fn offsets_stay_in_range(mut m in machine(), presses in 0usize..200) {
        for _ in 0..presses {
            m.encipher_char('Q');
        }
        prop_assert!(m.positions().as_slice().iter().all(|&o| o < 26));
    }

    #[test]
    fn first_key_moves_only_fastest_rotor(mut m in machine()) {
        let before = m.positions().as_slice().to_vec();
        m.encipher_char('A');
        let after = m.positions();
        prop_assert_eq!(after.as_slice()[0], (before[0] + 1) % 26);
        prop_assert_eq!(&after.as_slice()[1..], &before[1..]);
        for (rotor, slot) in m.rotors().iter().zip(after.as_slice()) {
            prop_assert_eq!(rotor.start_position(), *slot);
        }
    }

    #[test]
    fn restore_accepts_any_positions(mut m in machine(), raw in prop::collection::vec(any::<u8>(), 5)) {
        let positions = Positions::new(raw[..m.len()].to_vec());
        m.restore(&positions).unwrap();
        prop_assert_eq!(m.positions(), positions);
    }
}
