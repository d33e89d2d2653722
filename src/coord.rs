use crate::constants::*;
use crate::cubie::CubieCube;

/// The six Kociemba coordinates, each a bijection with a slice of the cube
/// state. A move table is built per coordinate by driving a cube through
/// `set`/`get` round trips, so the enum carries everything the table builder
/// needs: the domain size, the phase and the backing file name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Coordinate {
    /// Orientation of the first 7 corners, 3^7 values.
    Twist,
    /// Orientation of the first 11 edges, 2^11 values.
    Flip,
    /// Middle slice membership of the 12 slots, C(12,4) values.
    Choice,
    /// Corner permutation, 8! values.
    CornerPerm,
    /// Non middle slice edge permutation in slots 0..7, 8! values.
    EdgePerm,
    /// Middle slice edge permutation in slots 8..11, 4! values.
    SlicePerm,
}

impl Coordinate {
    /// Number of distinct values of this coordinate.
    pub fn size(self) -> usize {
        match self {
            Coordinate::Twist => N_TWIST,
            Coordinate::Flip => N_FLIP,
            Coordinate::Choice => N_CHOICE,
            Coordinate::CornerPerm => N_CORNER_PERM,
            Coordinate::EdgePerm => N_EDGE_PERM,
            Coordinate::SlicePerm => N_SLICE_PERM,
        }
    }

    /// Phase 2 coordinates restrict R, L, F and B to half turns in their
    /// move tables.
    pub fn is_phase2(self) -> bool {
        matches!(
            self,
            Coordinate::CornerPerm | Coordinate::EdgePerm | Coordinate::SlicePerm
        )
    }

    /// Name of the persisted move table file.
    pub fn table_file(self) -> &'static str {
        match self {
            Coordinate::Twist => "Twist.mtb",
            Coordinate::Flip => "Flip.mtb",
            Coordinate::Choice => "Choice.mtb",
            Coordinate::CornerPerm => "CrnrPerm.mtb",
            Coordinate::EdgePerm => "EdgePerm.mtb",
            Coordinate::SlicePerm => "SlicPerm.mtb",
        }
    }

    /// Read this coordinate off the cube.
    pub fn get(self, cube: &CubieCube) -> usize {
        let value = match self {
            Coordinate::Twist => cube.get_twist(),
            Coordinate::Flip => cube.get_flip(),
            Coordinate::Choice => cube.get_choice(),
            Coordinate::CornerPerm => cube.get_corner_perm(),
            Coordinate::EdgePerm => cube.get_edge_perm(),
            Coordinate::SlicePerm => cube.get_slice_perm(),
        };
        value as usize
    }

    /// Put the cube into some state with the given coordinate value. State
    /// outside the coordinate's scope is left self-consistent but otherwise
    /// unspecified.
    pub fn set(self, cube: &mut CubieCube, ordinal: usize) {
        let ordinal = ordinal as u16;
        match self {
            Coordinate::Twist => cube.set_twist(ordinal),
            Coordinate::Flip => cube.set_flip(ordinal),
            Coordinate::Choice => cube.set_choice(ordinal),
            Coordinate::CornerPerm => cube.set_corner_perm(ordinal),
            Coordinate::EdgePerm => cube.set_edge_perm(ordinal),
            Coordinate::SlicePerm => cube.set_slice_perm(ordinal),
        }
    }
}

/// All six coordinates in table construction order.
pub const ALL_COORDINATES: [Coordinate; 6] = [
    Coordinate::Twist,
    Coordinate::Flip,
    Coordinate::Choice,
    Coordinate::CornerPerm,
    Coordinate::EdgePerm,
    Coordinate::SlicePerm,
];
