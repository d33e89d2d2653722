use rand::random;
use std::fmt;
use std::ops::Mul;

use self::{Corner::*, Edge::*};
use crate::combinatorics::{n_choose_k, ordinal_to_permutation, permutation_to_ordinal};
use crate::constants::*;
use crate::error::Error;
use crate::moves::{Move, B_MOVE, D_MOVE, F_MOVE, L_MOVE, R_MOVE, U_MOVE};

/// Represents the 8 corner slots on the cube, described by the faces they touch.
///
/// Example: `ULB` (Up, Left, Back).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Hash)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<u8> for Corner {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(URF),
            1 => Ok(UFL),
            2 => Ok(ULB),
            3 => Ok(UBR),
            4 => Ok(DFR),
            5 => Ok(DLF),
            6 => Ok(DBL),
            7 => Ok(DRB),
            _ => Err(Error::InvalidCorner),
        }
    }
}

/// Represents the 12 edge slots on the cube, described by the faces they touch.
///
/// Slots 8..11 (`RF`, `FL`, `LB`, `BR`) form the middle slice.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Hash)]
pub enum Edge {
    UF, UL, UB, UR, DF, DL, DB, DR, RF, FL, LB, BR,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<u8> for Edge {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UF),
            1 => Ok(UL),
            2 => Ok(UB),
            3 => Ok(UR),
            4 => Ok(DF),
            5 => Ok(DL),
            6 => Ok(DB),
            7 => Ok(DR),
            8 => Ok(RF),
            9 => Ok(FL),
            10 => Ok(LB),
            11 => Ok(BR),
            _ => Err(Error::InvalidEdge),
        }
    }
}

impl Edge {
    /// Middle slice membership is independent of the slot an edge occupies.
    pub fn is_middle_slice(&self) -> bool {
        *self >= RF
    }
}

/// Cube on the cubie level.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CubieCube {
    /// Corner permutation: the corner cubie occupying each corner slot.
    pub cp: [Corner; 8],
    /// Corner orientation: 0 (oriented), 1 (twisted clockwise), 2 (twisted counter-clockwise).
    pub co: [u8; 8],
    /// Edge permutation: the edge cubie occupying each edge slot.
    pub ep: [Edge; 12],
    /// Edge orientation: 0 (oriented), 1 (flipped).
    pub eo: [u8; 12],
}

/// Solved cube on the cubie level.
pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UF, UL, UB, UR, DF, DL, DB, DR, RF, FL, LB, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl Mul for CubieCube {
    type Output = Self;

    fn mul(self, rhs: CubieCube) -> Self::Output {
        let mut res = self;
        res.multiply(rhs);
        res
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        for i in 0..8 {
            s.push_str(&format!("({},{})", self.cp[i], self.co[i]));
        }
        for i in 0..12 {
            s.push_str(&format!("({},{})", self.ep[i], self.eo[i]));
        }
        write!(f, "{s}")
    }
}

impl From<&Vec<Move>> for CubieCube {
    fn from(moves: &Vec<Move>) -> Self {
        CubieCube::default().apply_moves(moves)
    }
}

struct MoveCubeTable {
    cubes: [CubieCube; 18],
}

impl MoveCubeTable {
    fn new() -> Self {
        let quarters = [R_MOVE, L_MOVE, U_MOVE, D_MOVE, F_MOVE, B_MOVE];
        let mut cubes = [CubieCube::default(); 18];
        for (i, cube) in cubes.iter_mut().enumerate() {
            // indices 0..5 are quarter turns, 6..11 inverses, 12..17 half turns
            let applications = [1, 3, 2][i / 6];
            for _ in 0..applications {
                cube.multiply(quarters[i % 6]);
            }
        }
        Self { cubes }
    }
}

lazy_static! {
    /// The 18 face turns as permutation cubes, indexed by move ordinal.
    static ref MOVE_CUBES: MoveCubeTable = MoveCubeTable::new();
}

impl CubieCube {
    /// Reset the cube to the solved (home) state.
    pub fn home(&mut self) {
        *self = SOLVED_CUBIE_CUBE;
    }

    /// Bulk assignment from raw permutation and orientation arrays, e.g. as
    /// produced by an external facelet parser. Fails on any state that
    /// violates the cube invariants.
    pub fn set_state(
        &mut self,
        cp: [u8; 8],
        co: [u8; 8],
        ep: [u8; 12],
        eo: [u8; 12],
    ) -> Result<(), Error> {
        let mut next = CubieCube::default();
        for i in 0..8 {
            next.cp[i] = Corner::try_from(cp[i])?;
            if co[i] >= 3 {
                return Err(Error::InvalidCorner);
            }
            next.co[i] = co[i];
        }
        for i in 0..12 {
            next.ep[i] = Edge::try_from(ep[i])?;
            if eo[i] >= 2 {
                return Err(Error::InvalidEdge);
            }
            next.eo[i] = eo[i];
        }
        next.verify()?;
        *self = next;
        Ok(())
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the corners.
    pub fn corner_multiply(&mut self, b: CubieCube) {
        let mut c_perm = [URF; 8];
        let mut c_ori = [0; 8];
        for c in 0..8 {
            c_perm[c] = self.cp[b.cp[c] as usize];
            c_ori[c] = (self.co[b.cp[c] as usize] + b.co[c]) % 3;
        }
        self.cp = c_perm;
        self.co = c_ori;
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the edges.
    pub fn edge_multiply(&mut self, b: CubieCube) {
        let mut e_perm = [UF; 12];
        let mut e_ori = [0; 12];
        for e in 0..12 {
            e_perm[e] = self.ep[b.ep[e] as usize];
            e_ori[e] = (self.eo[b.ep[e] as usize] + b.eo[e]) % 2;
        }
        self.ep = e_perm;
        self.eo = e_ori;
    }

    /// Multiply this cubie cube with another cubie cube b.
    pub fn multiply(&mut self, b: CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Apply a single face turn to this cubie cube.
    pub fn multiply_move(&mut self, m: Move) {
        self.multiply(MOVE_CUBES.cubes[m as usize]);
    }

    /// Apply a move sequence to this cubie cube.
    pub fn multiply_moves(&mut self, moves: &[Move]) {
        moves.iter().for_each(|&m| self.multiply_move(m));
    }

    /// Applies a move to the current state, returning the new state.
    pub fn apply_move(self, m: Move) -> Self {
        let mut res = self;
        res.multiply_move(m);
        res
    }

    /// Applies a move sequence to the current state, returning the new state.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |acc, &m| acc.apply_move(m))
    }

    /// Get the twist of the 8 corners: the orientations of the first 7 corners
    /// read as a base 3 number. 0 <= twist < 2187.
    pub fn get_twist(&self) -> u16 {
        let mut twist = 0;
        for i in 0..7 {
            twist = 3 * twist + self.co[i] as u16;
        }
        twist
    }

    /// Set the twist of the 8 corners; the orientation of the last corner is
    /// forced by the zero-sum invariant.
    pub fn set_twist(&mut self, twist: u16) {
        let mut twist = twist;
        let mut parity = 0;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            parity += self.co[i];
            twist /= 3;
        }
        self.co[DRB as usize] = (3 - parity % 3) % 3;
    }

    /// Get the flip of the 12 edges: the orientations of the first 11 edges
    /// read as a base 2 number. 0 <= flip < 2048.
    pub fn get_flip(&self) -> u16 {
        let mut flip = 0;
        for i in 0..11 {
            flip = 2 * flip + self.eo[i] as u16;
        }
        flip
    }

    /// Set the flip of the 12 edges; the orientation of the last edge is
    /// forced by the zero-sum invariant.
    pub fn set_flip(&mut self, flip: u16) {
        let mut flip = flip;
        let mut parity = 0;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            parity += self.eo[i];
            flip /= 2;
        }
        self.eo[BR as usize] = (2 - parity % 2) % 2;
    }

    /// Get the choice: which 4 of the 12 slots hold middle slice edges,
    /// ignoring their order. Ranked over the 12-bit masks with four one-bits
    /// in lexicographic order. 0 <= choice < 495, choice = 0 when all four
    /// middle slice edges sit in slots 8..11.
    pub fn get_choice(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        for j in (0..12).rev() {
            if self.ep[j].is_middle_slice() {
                a += n_choose_k(11 - j, x + 1);
                x += 1;
            }
        }
        a as u16
    }

    /// Set the choice, placing the middle slice edges at the slots encoded by
    /// the ordinal and the remaining edges in order elsewhere.
    pub fn set_choice(&mut self, choice: u16) {
        let slice_edge = [RF, FL, LB, BR];
        let other_edge = [UF, UL, UB, UR, DF, DL, DB, DR];
        let mut a = choice as usize;
        let mut taken = [false; 12];
        let mut x = 4;
        for j in 0..12 {
            if x > 0 && a >= n_choose_k(11 - j, x) {
                a -= n_choose_k(11 - j, x);
                self.ep[j] = slice_edge[4 - x];
                taken[j] = true;
                x -= 1;
            }
        }
        let mut x = 0;
        for j in 0..12 {
            if !taken[j] {
                self.ep[j] = other_edge[x];
                x += 1;
            }
        }
    }

    /// Get the Lehmer ordinal of the corner permutation. 0 <= ordinal < 40320.
    pub fn get_corner_perm(&self) -> u16 {
        let mut v = [0; 8];
        for i in 0..8 {
            v[i] = self.cp[i] as u8;
        }
        permutation_to_ordinal(&v) as u16
    }

    /// Set the corner permutation from its Lehmer ordinal.
    pub fn set_corner_perm(&mut self, ordinal: u16) {
        let mut v = [0; 8];
        ordinal_to_permutation(ordinal as usize, &mut v, 0);
        for i in 0..8 {
            self.cp[i] = ALL_CORNERS[v[i] as usize];
        }
    }

    /// Get the Lehmer ordinal of the non middle slice edge permutation in
    /// slots 0..7. Only meaningful when no middle slice edge occupies those
    /// slots, which holds in every phase 2 reachable state.
    pub fn get_edge_perm(&self) -> u16 {
        let mut v = [0; 8];
        for i in 0..8 {
            v[i] = self.ep[i] as u8;
        }
        permutation_to_ordinal(&v) as u16
    }

    /// Set the non middle slice edge permutation from its Lehmer ordinal; the
    /// middle slice edges are parked in their home slots.
    pub fn set_edge_perm(&mut self, ordinal: u16) {
        let mut v = [0; 8];
        ordinal_to_permutation(ordinal as usize, &mut v, 0);
        for i in 0..8 {
            self.ep[i] = ALL_EDGES[v[i] as usize];
        }
        self.ep[8..12].copy_from_slice(&[RF, FL, LB, BR]);
    }

    /// Get the Lehmer ordinal of the middle slice edge permutation in slots
    /// 8..11. Only meaningful when the slice edges are in their slice.
    pub fn get_slice_perm(&self) -> u16 {
        let mut v = [0; 4];
        for i in 0..4 {
            v[i] = self.ep[8 + i] as u8;
        }
        permutation_to_ordinal(&v) as u16
    }

    /// Set the middle slice edge permutation from its Lehmer ordinal; the non
    /// middle slice edges are parked in their home slots.
    pub fn set_slice_perm(&mut self, ordinal: u16) {
        let mut v = [0; 4];
        ordinal_to_permutation(ordinal as usize, &mut v, 8);
        for i in 0..4 {
            self.ep[8 + i] = ALL_EDGES[v[i] as usize];
        }
        self.ep[0..8].copy_from_slice(&[UF, UL, UB, UR, DF, DL, DB, DR]);
    }

    /// Generate a random cube. The probability is the same for all possible states.
    pub fn randomize(&mut self) {
        let mut ep = [0; 12];
        ordinal_to_permutation(random::<usize>() % 479001600, &mut ep, 0); // 12!
        for i in 0..12 {
            self.ep[i] = ALL_EDGES[ep[i] as usize];
        }
        let parity = self.edge_parity();
        loop {
            self.set_corner_perm(random::<u16>() % 40320); // 8!
            if parity == self.corner_parity() {
                // parities of edge and corner permutations must be the same
                break;
            }
        }
        self.set_flip(random::<u16>() % 2048); // 2^11
        self.set_twist(random::<u16>() % 2187); // 3^7
    }

    /// Return the inverse of this cubie cube.
    pub fn inverse_cubie_cube(&self) -> Self {
        let mut d = CubieCube::default();
        for e in 0..12 {
            d.ep[self.ep[e] as usize] = ALL_EDGES[e];
        }
        for e in 0..12 {
            d.eo[e] = self.eo[d.ep[e] as usize];
        }
        for c in 0..8 {
            d.cp[self.cp[c] as usize] = ALL_CORNERS[c];
        }
        for c in 0..8 {
            d.co[c] = (3 - self.co[d.cp[c] as usize]) % 3;
        }
        d
    }

    /// Give the parity of the corner permutation.
    pub fn corner_parity(&self) -> bool {
        let mut s = 0;
        for i in 1..8 {
            for j in 0..i {
                if self.cp[j] as u8 > self.cp[i] as u8 {
                    s += 1;
                }
            }
        }
        s % 2 == 0
    }

    /// Give the parity of the edge permutation. A solvable cube has the same
    /// corner and edge parity.
    pub fn edge_parity(&self) -> bool {
        let mut s = 0;
        for i in 1..12 {
            for j in 0..i {
                if self.ep[j] as u8 > self.ep[i] as u8 {
                    s += 1;
                }
            }
        }
        s % 2 == 0
    }

    /// Check that this cubie cube is a legal, solvable state.
    pub fn verify(&self) -> Result<(), Error> {
        let mut edge_count = [0; 12];
        for e in 0..12 {
            edge_count[self.ep[e] as usize] += 1;
        }
        if edge_count.iter().any(|&c| c != 1) {
            return Err(Error::InvalidEdge);
        }
        if self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
            return Err(Error::FlipError);
        }

        let mut corner_count = [0; 8];
        for c in 0..8 {
            corner_count[self.cp[c] as usize] += 1;
        }
        if corner_count.iter().any(|&c| c != 1) {
            return Err(Error::InvalidCorner);
        }
        if self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
            return Err(Error::TwistError);
        }

        if self.edge_parity() != self.corner_parity() {
            return Err(Error::ParityError);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::ALL_MOVES;
    use crate::moves::Move::*;

    #[test]
    fn test_eq() {
        assert_eq!(CubieCube::default(), CubieCube::default());
    }

    #[test]
    fn test_move_order() {
        // every quarter turn has order 4
        for m in [R, L, U, D, F, B] {
            let mut cc = CubieCube::default();
            for _ in 0..4 {
                cc.multiply_move(m);
            }
            assert_eq!(cc, CubieCube::default(), "{m} has order 4");
        }
    }

    #[test]
    fn test_move_inverse() {
        let mut scrambled = CubieCube::default();
        scrambled.multiply_moves(&[R, U, R3, U3, F, L3, D3, B2]);
        for m in ALL_MOVES {
            let mut cc = scrambled;
            cc.multiply_move(m);
            cc.multiply_move(m.get_inverse());
            assert_eq!(cc, scrambled, "{m} inverse");
        }
    }

    #[test]
    fn test_half_turn_is_double_quarter() {
        for m in [R, L, U, D, F, B] {
            let mut once = CubieCube::default();
            once.multiply_move(m.get_half());
            let mut twice = CubieCube::default();
            twice.multiply_move(m);
            twice.multiply_move(m);
            assert_eq!(once, twice, "{m}2");
        }
    }

    #[test]
    fn test_mult() {
        let state = CubieCube::default().apply_move(R);
        assert_eq!(state, R_MOVE);

        let r2_state = CubieCube::default().apply_move(R).apply_move(R);
        assert_eq!(r2_state, R_MOVE * R_MOVE);
    }

    #[test]
    fn test_sexy_move_order() {
        // (R U R' U') * 6 is the identity
        let mut cc = CubieCube::default();
        for _ in 0..6 {
            cc.multiply_moves(&[R, U, R3, U3]);
        }
        assert_eq!(cc, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_inverse() {
        let mut cc = CubieCube::default();
        cc.multiply_moves(&[R, U, R3, U3, F, L3, D3, B2, R3, U3]);
        let inv = cc.inverse_cubie_cube();
        assert_eq!(cc * inv, SOLVED_CUBIE_CUBE);
        assert_eq!(inv.inverse_cubie_cube(), cc);
    }

    #[test]
    fn test_parity_law() {
        let mut cc = CubieCube::default();
        for _ in 0..50 {
            cc.randomize();
            assert!(cc.verify().is_ok());
            assert_eq!(cc.co.iter().map(|&o| o as u32).sum::<u32>() % 3, 0);
            assert_eq!(cc.eo.iter().map(|&o| o as u32).sum::<u32>() % 2, 0);
            assert_eq!(cc.corner_parity(), cc.edge_parity());
        }
    }

    #[test]
    fn test_solved_coordinates() {
        let cc = CubieCube::default();
        assert_eq!(cc.get_twist(), 0);
        assert_eq!(cc.get_flip(), 0);
        assert_eq!(cc.get_choice(), 0);
        assert_eq!(cc.get_corner_perm(), 0);
        assert_eq!(cc.get_edge_perm(), 0);
        assert_eq!(cc.get_slice_perm(), 0);
    }

    #[test]
    fn test_coordinates_after_moves() {
        let r = CubieCube::default().apply_move(R);
        assert_eq!(r.get_twist(), 1494);
        assert_eq!(r.get_choice(), 76);
        assert_eq!(r.get_corner_perm(), 21021);

        let f = CubieCube::default().apply_move(F);
        assert_eq!(f.get_flip(), 1094);

        let u = CubieCube::default().apply_move(U);
        assert_eq!(u.get_twist(), 0);
        assert_eq!(u.get_flip(), 0);
        assert_eq!(u.get_choice(), 0);
        assert_eq!(u.get_edge_perm(), 15120);
        assert_eq!(u.get_slice_perm(), 0);

        let r2 = CubieCube::default().apply_move(R2);
        assert_eq!(r2.get_slice_perm(), 21);
    }

    #[test]
    fn test_coordinate_round_trip() {
        let mut cc = CubieCube::default();
        for twist in [0, 1, 1093, 2186] {
            cc.set_twist(twist);
            assert_eq!(cc.get_twist(), twist);
            assert!(cc.verify().is_ok());
        }
        for flip in [0, 1, 1024, 2047] {
            cc.set_flip(flip);
            assert_eq!(cc.get_flip(), flip);
        }
        cc.home();
        for choice in 0..495 {
            cc.set_choice(choice);
            assert_eq!(cc.get_choice(), choice);
        }
        cc.home();
        for ordinal in [0, 1, 5040, 21021, 40319] {
            cc.set_corner_perm(ordinal);
            assert_eq!(cc.get_corner_perm(), ordinal);
            cc.set_edge_perm(ordinal);
            assert_eq!(cc.get_edge_perm(), ordinal);
        }
        for ordinal in 0..24 {
            cc.set_slice_perm(ordinal);
            assert_eq!(cc.get_slice_perm(), ordinal);
        }
    }

    #[test]
    fn test_coordinate_round_trip_random() {
        let mut cc = CubieCube::default();
        for _ in 0..50 {
            cc.randomize();
            let twist = cc.get_twist();
            cc.set_twist(twist);
            assert_eq!(cc.get_twist(), twist);
            let flip = cc.get_flip();
            cc.set_flip(flip);
            assert_eq!(cc.get_flip(), flip);
            let choice = cc.get_choice();
            cc.set_choice(choice);
            assert_eq!(cc.get_choice(), choice);
            let corner = cc.get_corner_perm();
            cc.set_corner_perm(corner);
            assert_eq!(cc.get_corner_perm(), corner);
        }
    }

    #[test]
    fn test_set_choice_home() {
        let mut cc = CubieCube::default();
        cc.set_choice(0);
        assert!(cc.ep[8..12].iter().all(|e| e.is_middle_slice()));
        cc.set_choice(494);
        assert!(cc.ep[0..4].iter().all(|e| e.is_middle_slice()));
    }

    #[test]
    fn test_set_state() {
        let mut cc = CubieCube::default();
        let solved = CubieCube::default();
        assert!(cc
            .set_state(
                [0, 1, 2, 3, 4, 5, 6, 7],
                [0; 8],
                [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
                [0; 12],
            )
            .is_ok());
        assert_eq!(cc, solved);

        // one twisted corner
        let result = cc.set_state(
            [0, 1, 2, 3, 4, 5, 6, 7],
            [1, 0, 0, 0, 0, 0, 0, 0],
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            [0; 12],
        );
        assert!(matches!(result, Err(Error::TwistError)));
        assert_eq!(cc, solved);

        // two exchanged edges
        let result = cc.set_state(
            [0, 1, 2, 3, 4, 5, 6, 7],
            [0; 8],
            [1, 0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            [0; 12],
        );
        assert!(matches!(result, Err(Error::ParityError)));
    }
}
