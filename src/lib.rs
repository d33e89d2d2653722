//! # twophase
//! `twophase`: crate for solving the 3x3 Rubik's cube with [Kociemba's two phase algorithm](http://kociemba.org/cube.htm).

#[macro_use]
extern crate lazy_static;

/// Error define.
pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;

/// Module for index <-> permutation and n-choose-k conversions.
pub mod combinatorics;

/// Module for represent a cube on the cubie level.
pub mod cubie;

/// Module for represent a cube on the facelet level.
pub mod facelet;

/// Module for the coordinate kinds driving the move tables.
pub mod coord;

/// Module for represent move and create/load move tables.
pub mod moves;

/// Module for create/load pruning tables. The pruning tables cut the search tree during the search.
pub mod pruning;

/// Module for Solver.
pub mod solver;

/// Module containing functions for scrambling the cube.
pub mod scramble;

use std::{fs, path::Path};

use crate::error::Error;

/// Read a raw table file. Returns the bytes only when the file exists and has
/// exactly the expected length; anything else means the table must be rebuilt.
fn read_table_file<P>(path: P, expected_len: usize) -> Option<Vec<u8>>
where
    P: AsRef<Path>,
{
    match fs::read(path) {
        Ok(bytes) if bytes.len() == expected_len => Some(bytes),
        _ => None,
    }
}

/// Write a raw table file. Write failures are fatal.
fn write_table_file<P>(path: P, bytes: &[u8]) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    if let Some(dir) = path.as_ref().parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
