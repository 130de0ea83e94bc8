//! Picking one direction out of the safe set.

use std::str::FromStr;
use std::sync::Arc;

use rand::seq::IndexedRandom;

use crate::engine::{classify, distance_to_closest_food, Direction, MoveSet};
use crate::game::GameState;

/// Returned whenever there is nothing safe left to do.
pub const FALLBACK_MOVE: Direction = Direction::Down;

/// A move-selection policy. Implementations must be cheap to share across requests.
pub trait MoveSelector: Send + Sync {
    fn name(&self) -> &'static str;

    fn select(&self, state: &GameState, safe: MoveSet) -> Direction;
}

// =============================================================================
// Food seeking (default)
// =============================================================================

/// Heads for whichever safe neighbor is closest to any food.
/// Ties go to the first direction in `Direction::all()` order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoodSeeker;

impl MoveSelector for FoodSeeker {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn select(&self, state: &GameState, safe: MoveSet) -> Direction {
        select(state, safe)
    }
}

pub fn select(state: &GameState, safe: MoveSet) -> Direction {
    let Some(head) = state.you.head() else {
        return FALLBACK_MOVE;
    };

    let mut best: Option<(Direction, i32)> = None;
    for dir in safe.iter() {
        let distance = distance_to_closest_food(state, dir.step(head));
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((dir, distance)),
        }
    }

    best.map_or(FALLBACK_MOVE, |(dir, _)| dir)
}

// =============================================================================
// Uniform random
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSafe;

impl MoveSelector for RandomSafe {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&self, _state: &GameState, safe: MoveSet) -> Direction {
        let moves: Vec<Direction> = safe.iter().collect();
        moves
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(FALLBACK_MOVE)
    }
}

// =============================================================================
// Configuration toggle
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    #[default]
    Heuristic,
    Random,
}

impl SelectionStrategy {
    pub fn selector(self) -> Arc<dyn MoveSelector> {
        match self {
            SelectionStrategy::Heuristic => Arc::new(FoodSeeker),
            SelectionStrategy::Random => Arc::new(RandomSafe),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" | "food" => Ok(SelectionStrategy::Heuristic),
            "random" => Ok(SelectionStrategy::Random),
            other => anyhow::bail!("unknown selection strategy '{other}' (expected heuristic or random)"),
        }
    }
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionStrategy::Heuristic => write!(f, "heuristic"),
            SelectionStrategy::Random => write!(f, "random"),
        }
    }
}

// =============================================================================
// Full turn decision
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    pub direction: Direction,
    pub safe: MoveSet,
    /// No safe move existed and `FALLBACK_MOVE` was returned.
    pub fallback: bool,
}

/// Classify, then select. Never fails.
pub fn decide(state: &GameState, selector: &dyn MoveSelector) -> MoveDecision {
    let safe = classify(state);
    if safe.is_empty() {
        return MoveDecision {
            direction: FALLBACK_MOVE,
            safe,
            fallback: true,
        };
    }

    MoveDecision {
        direction: selector.select(state, safe),
        safe,
        fallback: false,
    }
}
