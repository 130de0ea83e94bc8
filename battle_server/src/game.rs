//! Battlesnake API snapshot types.
//!
//! A `GameState` is decoded fresh from every `/start`, `/move` and `/end`
//! request and is never mutated by the engine.

use serde::Deserialize;

// =============================================================================
// Coordinates
// =============================================================================

/// A grid cell. The origin is the bottom-left corner, `y` grows upward.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    #[inline(always)]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// Snakes and board
// =============================================================================

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Battlesnake {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health: u32,
    pub body: Vec<Coord>,
    #[serde(default)]
    pub head: Option<Coord>,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub latency: Option<String>,
    #[serde(default)]
    pub shout: Option<String>,
}

impl Battlesnake {
    /// First body segment, or the separately reported head when the body is empty.
    pub fn head(&self) -> Option<Coord> {
        self.body.first().copied().or(self.head)
    }

    /// The segment right behind the head.
    pub fn neck(&self) -> Option<Coord> {
        self.body.get(1).copied()
    }

    /// Every cell the snake covers, head included.
    pub fn occupies(&self, cell: Coord) -> bool {
        self.body.contains(&cell) || self.head == Some(cell)
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Board {
    pub height: i32,
    pub width: i32,
    #[serde(default)]
    pub food: Vec<Coord>,
    #[serde(default)]
    pub hazards: Vec<Coord>,
    #[serde(default)]
    pub snakes: Vec<Battlesnake>,
}

impl Board {
    #[inline(always)]
    pub fn contains(&self, cell: Coord) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }
}

// =============================================================================
// Game metadata
// =============================================================================

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RulesetSettings {
    #[serde(rename = "foodSpawnChance", default)]
    pub food_spawn_chance: u32,
    #[serde(rename = "minimumFood", default)]
    pub minimum_food: u32,
    #[serde(rename = "hazardDamagePerTurn", default)]
    pub hazard_damage_per_turn: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Ruleset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub settings: Option<RulesetSettings>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Game {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub ruleset: Option<Ruleset>,
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub timeout: u32,
    #[serde(default)]
    pub source: String,
}

/// One turn's snapshot, as posted to `/start`, `/move` and `/end`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GameState {
    #[serde(default)]
    pub game: Game,
    #[serde(default)]
    pub turn: u32,
    pub board: Board,
    pub you: Battlesnake,
}
