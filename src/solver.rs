use std::cmp::max;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, MoveTables};
use crate::pruning::PruningTables;

/// Placeholder cost every real threshold or solution length undercuts.
const HUGE: usize = usize::MAX;

/// Outcome of a solve.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SolveStatus {
    /// The phase 1 search proved no shorter overall solution exists.
    OptimumFound,
    /// The outer loop stopped at its length or time bound with the best
    /// solution found so far.
    FoundBest,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum SearchResult {
    NotFound,
    Found,
    OptimumFound,
    Abort,
}

/// A two-phase solution: the phase 1 maneuver into ⟨U,D,R2,L2,F2,B2⟩
/// followed by the phase 2 maneuver to home.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub phase1: Vec<Move>,
    pub phase2: Vec<Move>,
}

impl Solution {
    /// Total move count (HTM).
    pub fn len(&self) -> usize {
        self.phase1.len() + self.phase2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phase1.is_empty() && self.phase2.is_empty()
    }

    /// Both phases as one move sequence.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = self.phase1.clone();
        moves.extend_from_slice(&self.phase2);
        moves
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.phase1.iter().map(|m| m.to_string()).collect();
        parts.push(".".to_string());
        parts.extend(self.phase2.iter().map(|m| m.to_string()));
        parts.push(format!("({})", self.len()));
        write!(f, "{}", parts.join(" "))
    }
}

/// Two phase IDA* solver over the six move tables and five pruning tables.
///
/// Phase 1 searches the full move group for a maneuver into the subgroup
/// ⟨U,D,R2,L2,F2,B2⟩; every phase 1 solution launches a phase 2 search on a
/// replayed cube copy, and phase 1 keeps searching for shorter totals until
/// it can prove no better one exists or the outer bounds are hit.
pub struct Solver {
    table_dir: PathBuf,
    initialized: bool,
    moves: MoveTables,
    pruning: PruningTables,

    scrambled: CubieCube,
    solution_moves1: [usize; MAX_SEARCH_DEPTH],
    solution_powers1: [usize; MAX_SEARCH_DEPTH],
    solution_moves2: [usize; MAX_SEARCH_DEPTH],
    solution_powers2: [usize; MAX_SEARCH_DEPTH],
    solution_length1: usize,
    solution_length2: usize,
    min_solution_length: usize,
    threshold1: usize,
    new_threshold1: usize,
    threshold2: usize,
    new_threshold2: usize,
    nodes1: u64,
    nodes2: u64,

    /// Every improving solution found so far, best last.
    pub solutions: Vec<Solution>,
}

impl Solver {
    pub fn new<P: Into<PathBuf>>(table_dir: P) -> Self {
        let moves = MoveTables::new();
        let pruning = PruningTables::new(&moves);
        Self {
            table_dir: table_dir.into(),
            initialized: false,
            moves,
            pruning,
            scrambled: CubieCube::default(),
            solution_moves1: [0; MAX_SEARCH_DEPTH],
            solution_powers1: [0; MAX_SEARCH_DEPTH],
            solution_moves2: [0; MAX_SEARCH_DEPTH],
            solution_powers2: [0; MAX_SEARCH_DEPTH],
            solution_length1: 0,
            solution_length2: 0,
            min_solution_length: HUGE,
            threshold1: 0,
            new_threshold1: HUGE,
            threshold2: 0,
            new_threshold2: HUGE,
            nodes1: 0,
            nodes2: 0,
            solutions: Vec::new(),
        }
    }

    /// Build or load the six move tables and five pruning tables. Idempotent.
    pub fn initialize_tables(&mut self) -> Result<(), Error> {
        if self.initialized {
            return Ok(());
        }
        let dir = self.table_dir.clone();
        self.moves.initialize(&dir)?;
        self.pruning.initialize(&dir, &self.moves)?;
        self.initialized = true;
        Ok(())
    }

    /// The best solution found by the last solve.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.solutions.last()
    }

    /// Nodes expanded by the last solve, per phase.
    pub fn node_counts(&self) -> (u64, u64) {
        (self.nodes1, self.nodes2)
    }

    /// Solve the cube, printing every improving solution as it is found.
    ///
    /// The outer deepening loop stops once the phase 1 search proves
    /// optimality, or - checked between deepenings - once the best solution
    /// is no longer than `max_length` or `timeout` seconds have elapsed with
    /// at least one solution in hand.
    pub fn solve(
        &mut self,
        cube: &CubieCube,
        max_length: usize,
        timeout: f64,
    ) -> Result<SolveStatus, Error> {
        cube.verify()?;
        self.initialize_tables()?;

        self.scrambled = *cube;
        self.solutions.clear();
        self.min_solution_length = HUGE;
        self.solution_length1 = 0;
        self.solution_length2 = 0;
        self.nodes1 = 1; // count the root node here
        self.nodes2 = 0;

        let start_time = Instant::now();
        let twist = cube.get_twist() as usize;
        let flip = cube.get_flip() as usize;
        let choice = cube.get_choice() as usize;
        self.threshold1 = self.phase1_cost(twist, flip, choice);

        loop {
            self.new_threshold1 = HUGE;
            let result = self.search1(twist, flip, choice, 0);
            if result == SearchResult::OptimumFound {
                return Ok(SolveStatus::OptimumFound);
            }
            if !self.solutions.is_empty() {
                if self.min_solution_length <= max_length {
                    return Ok(SolveStatus::FoundBest);
                }
                if start_time.elapsed() > Duration::from_secs_f64(timeout) {
                    return Ok(SolveStatus::FoundBest);
                }
            }
            if self.new_threshold1 >= MAX_SEARCH_DEPTH {
                // impossible for a legal cube
                return Err(Error::SearchExhausted);
            }
            self.threshold1 = self.new_threshold1;
        }
    }

    /// Admissible phase 1 heuristic: maximum of the three pruning lookups.
    fn phase1_cost(&self, twist: usize, flip: usize, choice: usize) -> usize {
        let mut cost = self.pruning.twist_flip.get_value(twist * N_FLIP + flip);
        cost = max(
            cost,
            self.pruning.twist_choice.get_value(twist * N_CHOICE + choice),
        );
        cost = max(
            cost,
            self.pruning.flip_choice.get_value(flip * N_CHOICE + choice),
        );
        cost as usize
    }

    /// Admissible phase 2 heuristic: maximum of the two pruning lookups.
    fn phase2_cost(&self, corner: usize, edge: usize, slice: usize) -> usize {
        let cost = self
            .pruning
            .corner_slice
            .get_value(corner * N_SLICE_PERM + slice);
        let cost2 = self
            .pruning
            .edge_slice
            .get_value(edge * N_SLICE_PERM + slice);
        max(cost, cost2) as usize
    }

    fn search1(
        &mut self,
        twist: usize,
        flip: usize,
        choice: usize,
        depth: usize,
    ) -> SearchResult {
        let cost = self.phase1_cost(twist, flip, choice);

        if cost == 0 {
            // Phase 1 solved. Replay the phase 1 maneuver on a copy of the
            // scrambled cube; phase 2 reads its coordinates off that copy.
            self.solution_length1 = depth;
            let mut phase2_cube = self.scrambled;
            for i in 0..depth {
                for _ in 0..self.solution_powers1[i] {
                    phase2_cube.multiply_move(ALL_MOVES[self.solution_moves1[i]]);
                }
            }
            self.solve2(&phase2_cube);
        }

        let total = depth + cost; // g + h
        if total <= self.threshold1 {
            // Every solution through a node this deep is at least as long as
            // the best one already in hand, which proves optimality for an
            // admissible IDA* expansion order.
            if depth >= self.min_solution_length {
                return SearchResult::OptimumFound;
            }
            for m in 0..N_BASE_MOVES {
                if disallowed(m, &self.solution_moves1, depth) {
                    continue;
                }
                let mut twist2 = twist;
                let mut flip2 = flip;
                let mut choice2 = choice;
                self.solution_moves1[depth] = m;
                for power in 1..4 {
                    twist2 = self.moves.twist.next(twist2, m);
                    flip2 = self.moves.flip.next(flip2, m);
                    choice2 = self.moves.choice.next(choice2, m);
                    self.solution_powers1[depth] = power;
                    self.nodes1 += 1;
                    let result = self.search1(twist2, flip2, choice2, depth + 1);
                    if result != SearchResult::NotFound {
                        return result;
                    }
                }
            }
        } else if total < self.new_threshold1 {
            self.new_threshold1 = total;
        }
        SearchResult::NotFound
    }

    fn solve2(&mut self, cube: &CubieCube) {
        let corner = cube.get_corner_perm() as usize;
        let edge = cube.get_edge_perm() as usize;
        let slice = cube.get_slice_perm() as usize;

        self.threshold2 = self.phase2_cost(corner, edge, slice);
        self.solution_length2 = 0;
        self.nodes2 += 1;

        loop {
            self.new_threshold2 = HUGE;
            let result = self.search2(corner, edge, slice, 0);
            if result != SearchResult::NotFound {
                return;
            }
            if self.new_threshold2 >= MAX_SEARCH_DEPTH {
                return;
            }
            self.threshold2 = self.new_threshold2;
        }
    }

    fn search2(
        &mut self,
        corner: usize,
        edge: usize,
        slice: usize,
        depth: usize,
    ) -> SearchResult {
        let cost = self.phase2_cost(corner, edge, slice);

        if cost == 0 {
            // whole cube solved
            self.solution_length2 = depth;
            let total = self.solution_length1 + depth;
            if total < self.min_solution_length {
                self.min_solution_length = total;
                let solution = self.record_solution();
                println!("{solution}");
                self.solutions.push(solution);
            }
            return SearchResult::Found;
        }

        let total = depth + cost; // g + h
        if total <= self.threshold2 {
            // no point searching at or beyond the best known total
            if self.solution_length1 + depth + 1 >= self.min_solution_length {
                return SearchResult::Abort;
            }
            for m in 0..N_BASE_MOVES {
                if disallowed(m, &self.solution_moves2, depth) {
                    continue;
                }
                let base = ALL_MOVES[m];
                let power_limit = match base == Move::U || base == Move::D {
                    true => 4,
                    false => 2, // R, L, F and B allow only the half turn
                };
                let mut corner2 = corner;
                let mut edge2 = edge;
                let mut slice2 = slice;
                self.solution_moves2[depth] = m;
                for power in 1..power_limit {
                    corner2 = self.moves.corner_perm.next(corner2, m);
                    edge2 = self.moves.edge_perm.next(edge2, m);
                    slice2 = self.moves.slice_perm.next(slice2, m);
                    self.solution_powers2[depth] = power;
                    self.nodes2 += 1;
                    let result = self.search2(corner2, edge2, slice2, depth + 1);
                    if result != SearchResult::NotFound {
                        return result;
                    }
                }
            }
        } else if total < self.new_threshold2 {
            self.new_threshold2 = total;
        }
        SearchResult::NotFound
    }

    fn record_solution(&self) -> Solution {
        let phase1 = (0..self.solution_length1)
            .map(|i| translate_move(self.solution_moves1[i], self.solution_powers1[i], false))
            .collect();
        let phase2 = (0..self.solution_length2)
            .map(|i| translate_move(self.solution_moves2[i], self.solution_powers2[i], true))
            .collect();
        Solution { phase1, phase2 }
    }
}

/// Move redundancy filter shared by both phases.
fn disallowed(m: usize, moves: &[usize; MAX_SEARCH_DEPTH], depth: usize) -> bool {
    if depth == 0 {
        return false;
    }
    let prev = moves[depth - 1];
    // successive moves of a single face fold into one power
    if prev == m {
        return true;
    }
    // opposite faces commute, canonicalise to B before F, L before R, D before U
    let (m_face, prev_face) = (ALL_MOVES[m], ALL_MOVES[prev]);
    if matches!(
        (m_face, prev_face),
        (Move::F, Move::B) | (Move::R, Move::L) | (Move::U, Move::D)
    ) {
        return true;
    }
    // collapse X Y X patterns on opposite axes
    if depth > 1 && moves[depth - 2] == m && prev_face == m_face.opposing_face() {
        return true;
    }
    false
}

/// A recorded step is a base move plus a power; emit the face turn it stands
/// for. Phase 2 steps on R, L, F and B are always the half turn.
fn translate_move(m: usize, power: usize, phase2: bool) -> Move {
    let base = ALL_MOVES[m];
    let mut power = power;
    if phase2 && base != Move::U && base != Move::D {
        power = 2;
    }
    match power {
        2 => base.get_half(),
        3 => base.get_inverse(),
        _ => base,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;
    use crate::facelet::FaceCube;
    use crate::moves::Move::*;
    use crate::scramble::scramble_from_str;
    use std::sync::Mutex;

    lazy_static! {
        static ref SOLVER: Mutex<Solver> = {
            let mut solver = Solver::new("tables");
            solver.initialize_tables().unwrap();
            Mutex::new(solver)
        };
    }

    fn solve_moves(scramble: &[Move], max_length: usize) -> (SolveStatus, Solution) {
        let cube = CubieCube::default().apply_moves(scramble);
        let mut solver = SOLVER.lock().unwrap();
        let status = solver.solve(&cube, max_length, 5.0).unwrap();
        let best = solver.best_solution().unwrap().clone();
        (status, best)
    }

    #[test]
    fn test_solved_cube() {
        let mut solver = SOLVER.lock().unwrap();
        let status = solver.solve(&CubieCube::default(), 25, 5.0).unwrap();
        assert_eq!(status, SolveStatus::OptimumFound);
        let best = solver.best_solution().unwrap();
        assert_eq!(best.len(), 0);
        assert_eq!(best.to_string(), ". (0)");
    }

    #[test]
    fn test_single_quarter_turn() {
        let (status, best) = solve_moves(&[R], 25);
        assert_eq!(status, SolveStatus::OptimumFound);
        assert_eq!(best.len(), 1);
        assert_eq!(best.to_string(), "R' . (1)");
    }

    #[test]
    fn test_phase1_trivial_phase2_engages() {
        // already inside the phase 2 group, the whole solution is phase 2
        let (_, best) = solve_moves(&[R2], 1);
        assert_eq!(best.len(), 1);
        assert!(best.phase1.is_empty());
        assert_eq!(best.phase2, vec![R2]);
    }

    #[test]
    fn test_sexy_move() {
        let scramble = [R, U, R3, U3];
        let (_, best) = solve_moves(&scramble, 4);
        assert_eq!(best.len(), 4);
        let mut cube = CubieCube::default().apply_moves(&scramble);
        cube = cube.apply_moves(&best.moves());
        assert_eq!(cube, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_solution_restores_home() {
        let scrambles = [
            "R U R' U' F L' D' B2 R' U'",
            "U F' D' F2 D B2 D' R2 U' F2 R2 D2 R2 U' L B L R F' D B'",
            "F2 L2 D' B2 U R2 U' L2 U L' R2 D F' L R' U2 F' L' D' U'",
        ];
        for s in scrambles {
            let scramble = scramble_from_str(s).unwrap();
            let (_, best) = solve_moves(&scramble, 25);
            let mut cube = CubieCube::default().apply_moves(&scramble);
            cube = cube.apply_moves(&best.moves());
            assert_eq!(cube, SOLVED_CUBIE_CUBE, "solution failed for {s}");
            assert!(best.len() <= 25);
        }
    }

    #[test]
    fn test_canonical_facelet_string() {
        let fc =
            FaceCube::try_from("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF").unwrap();
        let cube = CubieCube::try_from(&fc).unwrap();
        let mut solver = SOLVER.lock().unwrap();
        let _ = solver.solve(&cube, 25, 5.0).unwrap();
        let best = solver.best_solution().unwrap();
        assert!(best.len() <= 25);
        let solved = cube.apply_moves(&best.moves());
        assert_eq!(solved, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_improving_solutions() {
        let scramble = scramble_from_str("D2 L' U2 F2 R F' U2 B2 L2 D' R' F' U F2 R2 B'").unwrap();
        let cube = CubieCube::default().apply_moves(&scramble);
        let mut solver = SOLVER.lock().unwrap();
        let _ = solver.solve(&cube, 21, 5.0).unwrap();
        let lengths: Vec<usize> = solver.solutions.iter().map(|s| s.len()).collect();
        assert!(!lengths.is_empty());
        // strictly improving, best last
        assert!(lengths.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_no_redundant_moves_in_solutions() {
        // the clockwise quarter turn of a move's own face
        fn face(m: Move) -> Move {
            m.opposing_face().opposing_face()
        }
        for s in ["R U R' U' F L' D' B2 R' U'", "B2 D2 L' F2 U R' D L2 F' U2"] {
            let scramble = scramble_from_str(s).unwrap();
            let (_, best) = solve_moves(&scramble, 25);
            for block in [&best.phase1, &best.phase2] {
                for pair in block.windows(2) {
                    assert!(!pair[0].is_same_layer(pair[1]), "{pair:?} in {best}");
                    // canonical opposite-face order: no B then F etc.
                    assert!(
                        !matches!(
                            (face(pair[0]), face(pair[1])),
                            (Move::B, Move::F) | (Move::L, Move::R) | (Move::D, Move::U)
                        ),
                        "{pair:?} in {best}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_disallowed() {
        let mut moves = [0; MAX_SEARCH_DEPTH];
        assert!(!disallowed(0, &moves, 0));
        // same face twice
        moves[0] = 0;
        assert!(disallowed(0, &moves, 1));
        // F after B, R after L, U after D
        moves[0] = 5;
        assert!(disallowed(4, &moves, 1));
        moves[0] = 1;
        assert!(disallowed(0, &moves, 1));
        moves[0] = 3;
        assert!(disallowed(2, &moves, 1));
        // but not the canonical order
        moves[0] = 4;
        assert!(!disallowed(5, &moves, 1));
        // X Y X on opposite axes
        moves[0] = 2;
        moves[1] = 3;
        assert!(disallowed(2, &moves, 2));
        assert!(!disallowed(4, &moves, 2));
    }

    #[test]
    fn test_translate_move() {
        assert_eq!(translate_move(0, 1, false), R);
        assert_eq!(translate_move(0, 2, false), R2);
        assert_eq!(translate_move(0, 3, false), R3);
        // phase 2: R, L, F, B always emit the half turn
        assert_eq!(translate_move(0, 1, true), R2);
        assert_eq!(translate_move(2, 3, true), U3);
    }
}
