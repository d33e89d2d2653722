use std::path::Path;
use std::{fmt, str::FromStr};

use self::Move::*;
use crate::constants::*;
use crate::coord::Coordinate;
use crate::cubie::{Corner::*, CubieCube, Edge::*};
use crate::error::Error;
use crate::{read_table_file, write_table_file};

/// The 18 face moves.
///
/// Indexed so that R..B are the clockwise quarter turns 0..5, R3..B3 the
/// counter-clockwise turns 6..11 and R2..B2 the half turns 12..17.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Move {
    R,  L,  U,  D,  F,  B,
    R3, L3, U3, D3, F3, B3,
    R2, L2, U2, D2, F2, B2,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(R),
            "R'" => Ok(R3),
            "R2" => Ok(R2),
            "L" => Ok(L),
            "L'" => Ok(L3),
            "L2" => Ok(L2),
            "U" => Ok(U),
            "U'" => Ok(U3),
            "U2" => Ok(U2),
            "D" => Ok(D),
            "D'" => Ok(D3),
            "D2" => Ok(D2),
            "F" => Ok(F),
            "F'" => Ok(F3),
            "F2" => Ok(F2),
            "B" => Ok(B),
            "B'" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble),
        }
    }
}

impl Move {
    /// The move undoing this one: quarter turns pair with their inverses,
    /// half turns are self-inverse.
    pub fn get_inverse(self) -> Self {
        let index = self as usize;
        match index / 6 {
            0 => ALL_MOVES[index + 6],
            1 => ALL_MOVES[index - 6],
            _ => self,
        }
    }

    /// The half turn on the same face.
    pub fn get_half(self) -> Self {
        ALL_MOVES[12 + self as usize % 6]
    }

    /// The clockwise quarter turn of the opposing face.
    pub fn opposing_face(self) -> Self {
        match self as usize % 6 {
            0 => L,
            1 => R,
            2 => D,
            3 => U,
            4 => B,
            _ => F,
        }
    }

    pub fn is_same_layer(&self, other: Move) -> bool {
        self.opposing_face() == other.opposing_face()
    }
}

/// The basic six cube moves described by permutations and changes in orientation.
///
/// R_MOVE
pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR], //permutation of the corners
    co: [2, 0, 0, 1, 1, 0, 0, 2],                 //changes of the orientations of the corners
    ep: [UF, UL, UB, RF, DF, DL, DB, BR, DR, FL, LB, UR], //permutation of the edges
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],     //changes of the orientations of the edges
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// L_MOVE
pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UF, LB, UB, UR, DF, FL, DB, DR, RF, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// U_MOVE
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, RF, FL, LB, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// D_MOVE
pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UF, UL, UB, UR, DL, DB, DR, DF, RF, FL, LB, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// F_MOVE
pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [FL, UL, UB, UR, RF, DL, DB, DR, UF, DF, LB, BR],
    eo: [1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// B_MOVE
pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UF, UL, BR, UR, DF, DL, LB, DR, RF, FL, UB, DB],
    eo: [0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1],
};

/// Move table for one coordinate: `next = table[ordinal][base move]`.
///
/// For a phase 2 coordinate the R, L, F and B columns hold the effect of the
/// half turn instead of the quarter turn, so one table step always stays
/// inside the phase's move group.
pub struct MoveTable {
    coord: Coordinate,
    table: Vec<u32>,
}

impl MoveTable {
    pub fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            table: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coord
    }

    /// Number of logical entries (rows) in the table.
    pub fn size(&self) -> usize {
        self.coord.size()
    }

    /// The coordinate reached from `ordinal` by base move `m` (0..5).
    pub fn next(&self, ordinal: usize, m: usize) -> usize {
        self.table[N_BASE_MOVES * ordinal + m] as usize
    }

    /// Create the table by either generating it or loading it from an
    /// existing file. A file of the wrong size is regenerated.
    pub fn initialize<P>(&mut self, path: P) -> Result<(), Error>
    where
        P: AsRef<Path>,
    {
        let expected = self.size() * N_BASE_MOVES * 4;
        match read_table_file(&path, expected) {
            Some(bytes) => {
                self.table = bytes
                    .chunks_exact(4)
                    .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .collect();
            }
            None => {
                println!("Creating {} table...", path.as_ref().display());
                self.generate();
                let mut bytes = Vec::with_capacity(expected);
                for &value in &self.table {
                    bytes.extend_from_slice(&value.to_le_bytes());
                }
                write_table_file(&path, &bytes)?;
            }
        }
        Ok(())
    }

    /// Generate the table by driving a cube through set/move/get round trips.
    pub fn generate(&mut self) {
        let phase2 = self.coord.is_phase2();
        self.table = vec![0; self.size() * N_BASE_MOVES];
        let mut cube = CubieCube::default();
        for ordinal in 0..self.size() {
            self.coord.set(&mut cube, ordinal);
            for (m, &base) in ALL_MOVES[..N_BASE_MOVES].iter().enumerate() {
                let turn = match phase2 && base != U && base != D {
                    true => base.get_half(),
                    false => base,
                };
                cube.multiply_move(turn);
                self.table[N_BASE_MOVES * ordinal + m] = self.coord.get(&cube) as u32;
                cube.multiply_move(turn.get_inverse()); // restore
            }
        }
    }
}

/// The six move tables of the solver.
pub struct MoveTables {
    pub twist: MoveTable,
    pub flip: MoveTable,
    pub choice: MoveTable,
    pub corner_perm: MoveTable,
    pub edge_perm: MoveTable,
    pub slice_perm: MoveTable,
}

impl MoveTables {
    pub fn new() -> Self {
        Self {
            twist: MoveTable::new(Coordinate::Twist),
            flip: MoveTable::new(Coordinate::Flip),
            choice: MoveTable::new(Coordinate::Choice),
            corner_perm: MoveTable::new(Coordinate::CornerPerm),
            edge_perm: MoveTable::new(Coordinate::EdgePerm),
            slice_perm: MoveTable::new(Coordinate::SlicePerm),
        }
    }

    /// Build or load every table from `dir`.
    pub fn initialize(&mut self, dir: &Path) -> Result<(), Error> {
        for table in [
            &mut self.twist,
            &mut self.flip,
            &mut self.choice,
            &mut self.corner_perm,
            &mut self.edge_perm,
            &mut self.slice_perm,
        ] {
            let path = dir.join(table.coordinate().table_file());
            table.initialize(path)?;
        }
        Ok(())
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}
