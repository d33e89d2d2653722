use crate::cubie::Corner::{self, *};
use crate::cubie::Edge::{self, *};
use crate::moves::Move::{self, *};

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UF, UL, UB, UR, DF, DL, DB, DR, RF, FL, LB, BR];

/// The 18 face moves in index order: quarter turns, inverses, half turns.
#[rustfmt::skip]
pub const ALL_MOVES: [Move; 18] = [
    R,  L,  U,  D,  F,  B,
    R3, L3, U3, D3, F3, B3,
    R2, L2, U2, D2, F2, B2,
];

/// number of clockwise quarter turn base moves
pub const N_BASE_MOVES: usize = 6;
/// number of possible face moves
pub const N_MOVES: usize = 18;
/// 3^7 possible corner orientations
pub const N_TWIST: usize = 2187;
/// 2^11 possible edge orientations
pub const N_FLIP: usize = 2048;
/// 12 choose 4 possible positions of the middle slice edges
pub const N_CHOICE: usize = 495;
/// 8! corner permutations
pub const N_CORNER_PERM: usize = 40320;
/// 8! permutations of the non middle slice edges in slots 0..7
pub const N_EDGE_PERM: usize = 40320;
/// 4! permutations of the middle slice edges in slots 8..11
pub const N_SLICE_PERM: usize = 24;

/// Upper bound on the search depth of either phase.
pub const MAX_SEARCH_DEPTH: usize = 30;
