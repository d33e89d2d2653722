use std::fmt;

use crate::cubie::{Corner, CubieCube, Edge};
use crate::error::Error;

/// Names the colors of the cube facelets: up, right, front, down, left, back.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Hash)]
pub enum Color {
    U, R, F, D, L, B,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidColor),
        }
    }
}

/// Cube on the facelet level.
///
/// The facelet representation follows the ordering: U-R-F-D-L-B.
///
/// A solved facelet is `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.
#[derive(Debug, PartialEq)]
pub struct FaceCube {
    pub f: [Color; 54],
}

/// Solved cube on the facelet level.
#[rustfmt::skip]
pub const SOLVED_FACE_CUBE: FaceCube = FaceCube {
    f: [
        Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U,
        Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R,
        Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F,
        Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D,
        Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L,
        Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B,
    ],
};

impl Default for FaceCube {
    fn default() -> Self {
        SOLVED_FACE_CUBE
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;
    fn try_from(cube_string: &str) -> Result<Self, Self::Error> {
        if cube_string.len() != 54 {
            return Err(Error::InvalidFaceletString);
        }

        let mut face_cube = FaceCube::default();
        for (i, c) in cube_string.chars().enumerate() {
            face_cube.f[i] = Color::try_from(c)?;
        }
        Ok(face_cube)
    }
}

impl TryFrom<&CubieCube> for FaceCube {
    type Error = Error;
    fn try_from(cubie: &CubieCube) -> Result<Self, Self::Error> {
        cubie.verify()?;
        let mut face = FaceCube::default();

        for (i, corner_faces) in CORNER_FACELET.iter().enumerate() {
            let corner = cubie.cp[i] as usize;
            for (j, f) in corner_faces.iter().enumerate() {
                face.f[*f as usize] =
                    CORNER_COLOR[corner][(j + (3 - cubie.co[i] as usize)) % 3];
            }
        }

        for (i, edge_faces) in EDGE_FACELET.iter().enumerate() {
            let edge = cubie.ep[i] as usize;
            for (j, f) in edge_faces.iter().enumerate() {
                face.f[*f as usize] = EDGE_COLOR[edge][(j + cubie.eo[i] as usize) % 2];
            }
        }

        Ok(face)
    }
}

/// Gives cubie representation of a face cube.
impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;
    fn try_from(face_cube: &FaceCube) -> Result<Self, Self::Error> {
        let mut state = CubieCube::default();

        for i in 0..8 {
            // get the colors of the cubie at corner slot i, starting with U/D
            let mut ori = 0;
            for index in 0..3 {
                ori = index;
                let color = face_cube.f[CORNER_FACELET[i][ori] as usize];
                if color == Color::U || color == Color::D {
                    break;
                }
            }

            let col1 = face_cube.f[CORNER_FACELET[i][(ori + 1) % 3] as usize];
            let col2 = face_cube.f[CORNER_FACELET[i][(ori + 2) % 3] as usize];
            for j in 0..8 {
                if col1 == CORNER_COLOR[j][1] && col2 == CORNER_COLOR[j][2] {
                    // in corner slot i we have corner cubie j
                    state.cp[i] = Corner::try_from(j as u8)?;
                    state.co[i] = ori as u8 % 3;
                    break;
                }
            }
        }

        for i in 0..12 {
            let col1 = face_cube.f[EDGE_FACELET[i][0] as usize];
            let col2 = face_cube.f[EDGE_FACELET[i][1] as usize];
            for j in 0..12 {
                if col1 == EDGE_COLOR[j][0] && col2 == EDGE_COLOR[j][1] {
                    state.ep[i] = Edge::try_from(j as u8)?;
                    state.eo[i] = 0;
                    break;
                }
                if col1 == EDGE_COLOR[j][1] && col2 == EDGE_COLOR[j][0] {
                    state.ep[i] = Edge::try_from(j as u8)?;
                    state.eo[i] = 1;
                    break;
                }
            }
        }

        state.verify()?;
        Ok(state)
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.f.iter().fold(String::new(), |acc, c| format!("{acc}{c}"));
        write!(f, "{s}")
    }
}

/// The names of the facelet positions of the cube.
///
/// ```text
///             |************|
///             |*U1**U2**U3*|
///             |************|
///             |*U4**U5**U6*|
///             |************|
///             |*U7**U8**U9*|
///             |************|
/// ************|************|************|************|
/// *L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
/// ************|************|************|************|
/// *L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
/// ************|************|************|************|
/// *L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
/// ************|************|************|************|
///             |************|
///             |*D1**D2**D3*|
///             |************|
///             |*D4**D5**D6*|
///             |************|
///             |*D7**D8**D9*|
///             |************|
/// ```
/// The 54 characters of a cube definition string name the colors at positions
/// U1..U9, R1..R9, F1..F9, D1..D9, L1..L9, B1..B9 in this order.
#[rustfmt::skip]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Facelet {
    U1, U2, U3, U4, U5, U6, U7, U8, U9,
    R1, R2, R3, R4, R5, R6, R7, R8, R9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9,
    D1, D2, D3, D4, D5, D6, D7, D8, D9,
    L1, L2, L3, L4, L5, L6, L7, L8, L9,
    B1, B2, B3, B4, B5, B6, B7, B8, B9,
}

use self::Facelet::*;

/// Map a corner slot to the 3 facelet positions of its cubie, the U or D
/// facelet first.
pub const CORNER_FACELET: [[Facelet; 3]; 8] = [
    [U9, R1, F3], // URF
    [U7, F1, L3], // UFL
    [U1, L1, B3], // ULB
    [U3, B1, R3], // UBR
    [D3, F9, R7], // DFR
    [D1, L9, F7], // DLF
    [D7, B9, L7], // DBL
    [D9, R9, B7], // DRB
];

/// Map an edge slot to the 2 facelet positions of its cubie.
pub const EDGE_FACELET: [[Facelet; 2]; 12] = [
    [U8, F2], // UF
    [U4, L2], // UL
    [U2, B2], // UB
    [U6, R2], // UR
    [D2, F8], // DF
    [D4, L8], // DL
    [D8, B8], // DB
    [D6, R8], // DR
    [F6, R4], // RF
    [F4, L6], // FL
    [B6, L4], // LB
    [B4, R6], // BR
];

/// The reference colors of each corner cubie, in facelet order.
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// The reference colors of each edge cubie, in facelet order.
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::U, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::D, Color::R],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;
    use crate::moves::Move;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn test_solved_string() {
        let fc = FaceCube::try_from(SOLVED).unwrap();
        assert_eq!(fc, SOLVED_FACE_CUBE);
        assert_eq!(fc.to_string(), SOLVED);
        let cc = CubieCube::try_from(&fc).unwrap();
        assert_eq!(cc, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_invalid_strings() {
        assert!(FaceCube::try_from("UUU").is_err());
        assert!(FaceCube::try_from(SOLVED.replace('B', "X").as_str()).is_err());
    }

    #[test]
    fn test_cubie_round_trip() {
        let mut cc = CubieCube::default();
        cc.multiply_moves(&[
            Move::R, Move::U3, Move::F, Move::L2, Move::D, Move::B3, Move::R3, Move::U, Move::F2,
            Move::L, Move::B2, Move::D3,
        ]);
        let fc = FaceCube::try_from(&cc).unwrap();
        let back = CubieCube::try_from(&fc).unwrap();
        assert_eq!(back, cc);
    }

    #[test]
    fn test_random_round_trip() {
        let mut cc = CubieCube::default();
        for _ in 0..20 {
            cc.randomize();
            let fc = FaceCube::try_from(&cc).unwrap();
            let back = CubieCube::try_from(&fc).unwrap();
            assert_eq!(back, cc);
        }
    }

    #[test]
    fn test_canonical_string() {
        let fc =
            FaceCube::try_from("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF").unwrap();
        let cc = CubieCube::try_from(&fc).unwrap();
        assert!(cc.verify().is_ok());
        let back = FaceCube::try_from(&cc).unwrap();
        assert_eq!(back, fc);
    }

    #[test]
    fn test_flipped_edge_rejected() {
        // flip the UF edge in place
        let mut s: Vec<u8> = SOLVED.bytes().collect();
        s.swap(Facelet::U8 as usize, Facelet::F2 as usize);
        let fc = FaceCube::try_from(std::str::from_utf8(&s).unwrap()).unwrap();
        assert!(matches!(CubieCube::try_from(&fc), Err(Error::FlipError)));
    }

    #[test]
    fn test_twisted_corner_rejected() {
        // twist the URF corner clockwise
        let mut s: Vec<u8> = SOLVED.bytes().collect();
        s[Facelet::U9 as usize] = b'R';
        s[Facelet::R1 as usize] = b'F';
        s[Facelet::F3 as usize] = b'U';
        let fc = FaceCube::try_from(std::str::from_utf8(&s).unwrap()).unwrap();
        assert!(matches!(CubieCube::try_from(&fc), Err(Error::TwistError)));
    }

    #[test]
    fn test_exchanged_edges_rejected() {
        // swap the UF and UL edges
        let mut s: Vec<u8> = SOLVED.bytes().collect();
        s.swap(Facelet::U8 as usize, Facelet::U4 as usize);
        s.swap(Facelet::F2 as usize, Facelet::L2 as usize);
        let fc = FaceCube::try_from(std::str::from_utf8(&s).unwrap()).unwrap();
        assert!(matches!(CubieCube::try_from(&fc), Err(Error::ParityError)));
    }
}
