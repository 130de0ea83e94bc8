//! Immediate-neighbor move safety for a Battlesnake turn.
//!
//! Everything in here is a pure function of the `GameState` snapshot:
//! - no logging, no allocation beyond the stack
//! - the same input always yields the same `MoveSet`
//!
//! # Example
//! ```
//! use battle_server::engine::{classify, Direction};
//! use battle_server::game::GameState;
//!
//! let json = r#"{
//!     "board": {"height": 11, "width": 11, "food": [], "snakes": []},
//!     "you": {"body": [{"x": 0, "y": 0}, {"x": 1, "y": 0}]}
//! }"#;
//! let state: GameState = serde_json::from_str(json).unwrap();
//! let safe = classify(&state);
//! assert!(safe.contains(Direction::Up));
//! assert!(!safe.contains(Direction::Left));
//! ```

use serde::Serialize;

use crate::game::{Coord, GameState};

// =============================================================================
// Direction
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    #[default]
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Priority order used whenever directions have to be visited deterministically.
    #[inline(always)]
    pub const fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    #[inline(always)]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// The neighbor of `from` in this direction. May fall off the board.
    #[inline(always)]
    pub fn step(self, from: Coord) -> Coord {
        match self {
            Direction::Up => Coord::new(from.x, from.y + 1),
            Direction::Down => Coord::new(from.x, from.y - 1),
            Direction::Left => Coord::new(from.x - 1, from.y),
            Direction::Right => Coord::new(from.x + 1, from.y),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// MoveSet (4-bit set of directions)
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSet(u8);

impl MoveSet {
    pub const ALL: MoveSet = MoveSet(0b1111);

    pub const fn empty() -> Self {
        MoveSet(0)
    }

    #[inline(always)]
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    #[inline(always)]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in `Direction::all()` order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::all().into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = MoveSet::empty();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl std::fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for MoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(Direction::as_str).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

// =============================================================================
// Geometry helpers
// =============================================================================

/// The cell our head lands on after `dir`, or `None` when we have no head.
pub fn resulting_coord(state: &GameState, dir: Direction) -> Option<Coord> {
    state.you.head().map(|head| dir.step(head))
}

/// Manhattan distance from `from` to the closest food.
///
/// Without food on the board this is `width + height`, which ties every candidate.
pub fn distance_to_closest_food(state: &GameState, from: Coord) -> i32 {
    state
        .board
        .food
        .iter()
        .map(|&food| from.manhattan(food))
        .min()
        .unwrap_or(state.board.width + state.board.height)
}

// =============================================================================
// Safety classification
// =============================================================================

/// Directions that do not kill us this turn.
pub fn classify(state: &GameState) -> MoveSet {
    let Some(head) = state.you.head() else {
        return MoveSet::empty();
    };

    let mut safe = MoveSet::ALL;

    // Never fold back onto the neck.
    if let Some(neck) = state.you.neck() {
        if neck.x < head.x {
            safe.remove(Direction::Left);
        } else if neck.x > head.x {
            safe.remove(Direction::Right);
        } else if neck.y < head.y {
            safe.remove(Direction::Down);
        } else if neck.y > head.y {
            safe.remove(Direction::Up);
        }
    }

    let board = &state.board;
    if head.x == 0 {
        safe.remove(Direction::Left);
    }
    if head.x == board.width - 1 {
        safe.remove(Direction::Right);
    }
    if head.y == 0 {
        safe.remove(Direction::Down);
    }
    if head.y == board.height - 1 {
        safe.remove(Direction::Up);
    }

    for dir in Direction::all() {
        let next = dir.step(head);

        if state.you.body.contains(&next) {
            safe.remove(dir);
            continue;
        }

        // Our own entry in the snake list is checked again here.
        if board.snakes.iter().any(|snake| snake.occupies(next)) {
            safe.remove(dir);
        }
    }

    safe
}

// =============================================================================
// Tests
// =============================================================================
