use std::str::FromStr;

use rand::random;

use crate::constants::*;
use crate::error::Error;
use crate::moves::Move;

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(s: &[Move]) -> Result<String, Error> {
    let result: String = s
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    Ok(result)
}

/// Generate a random scramble of `length` moves with no two successive moves
/// on the same face.
pub fn random_scramble(length: usize) -> Vec<Move> {
    let mut scramble = Vec::with_capacity(length);
    let mut previous = N_MOVES;
    while scramble.len() < length {
        let face = random::<usize>() % N_BASE_MOVES;
        if face == previous {
            continue;
        }
        let power = random::<usize>() % 3;
        scramble.push(ALL_MOVES[face + 6 * power]);
        previous = face;
    }
    scramble
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn test_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
        assert!(scramble_from_str("R U X").is_err());
    }

    #[test]
    fn test_scramble_to_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m).unwrap(), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn test_random_scramble() {
        let scramble = random_scramble(25);
        assert_eq!(scramble.len(), 25);
        for pair in scramble.windows(2) {
            assert!(!pair[0].is_same_layer(pair[1]));
        }
    }
}
