//! Game state and core simulation types
//!
//! All state needed for deterministic replay lives here and serializes as a
//! snapshot. Units live in a fixed, id-ordered vec created once at session
//! start; iteration order is stable by construction.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{Scheduler, TimerHandle, TimerKind};
use super::collision::Aabb;
use super::lasso::Lasso;
use crate::config::LevelConfig;
use crate::consts::*;

/// Animation clip currently playing on a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimClip {
    #[default]
    Idle,
    WalkLeft,
    WalkRight,
    WalkUp,
    WalkDown,
}

/// Per-axis movement state, derived level-triggered from input each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisSign {
    Negative,
    #[default]
    Neutral,
    Positive,
}

/// Which texture variant a unit sprite shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSprite {
    #[default]
    Roaming,
    Roped,
}

/// Capture lifecycle of a unit
///
/// A unit is in exactly one of these at any instant; "held and delivered at
/// once" is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    /// Wandering the arena, collidable, capturable
    FreeRoaming,
    /// Carried in the inventory; escapes when the timer fires
    Held { escape: TimerHandle },
    /// Deliberately dropped; counts toward the win
    Delivered,
}

/// A capturable unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub anim: AnimClip,
    pub sprite: UnitSprite,
    /// Participates in physics and movement
    pub active: bool,
    pub visible: bool,
    pub state: UnitState,
}

impl Unit {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            anim: AnimClip::Idle,
            sprite: UnitSprite::Roaming,
            active: true,
            visible: true,
            state: UnitState::FreeRoaming,
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == UnitState::FreeRoaming
    }

    pub fn is_held(&self) -> bool {
        matches!(self.state, UnitState::Held { .. })
    }

    pub fn is_delivered(&self) -> bool {
        self.state == UnitState::Delivered
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(UNIT_HALF))
    }
}

/// The player-controlled herder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub horizontal: AxisSign,
    pub vertical: AxisSign,
    pub anim: AnimClip,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            horizontal: AxisSign::Neutral,
            vertical: AxisSign::Neutral,
            anim: AnimClip::Idle,
            speed,
        }
    }
}

/// Bounded stack of held unit ids, most recent on top
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    held: Vec<u32>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            held: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.held.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held ids in capture order
    pub fn ids(&self) -> &[u32] {
        &self.held
    }

    pub fn contains(&self, id: u32) -> bool {
        self.held.contains(&id)
    }

    pub(crate) fn push(&mut self, id: u32) {
        debug_assert!(!self.is_full());
        self.held.push(id);
    }

    /// Pop the most recently captured id (stack discipline)
    pub(crate) fn pop(&mut self) -> Option<u32> {
        self.held.pop()
    }

    /// Remove an id regardless of position (used when a held unit escapes)
    pub(crate) fn evict(&mut self, id: u32) {
        self.held.retain(|&held| held != id);
    }
}

/// Monotonic level countdown; never paused
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelClock {
    elapsed_ticks: u64,
    total_ticks: u64,
}

impl LevelClock {
    pub fn new(total_ticks: u64) -> Self {
        Self {
            elapsed_ticks: 0,
            total_ticks,
        }
    }

    pub fn advance(&mut self) {
        self.elapsed_ticks += 1;
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn expired(&self) -> bool {
        self.elapsed_ticks >= self.total_ticks
    }

    /// Remaining time in seconds, clamped at zero
    pub fn remaining_secs(&self) -> f32 {
        self.total_ticks.saturating_sub(self.elapsed_ticks) as f32 * SIM_DT
    }
}

/// End state of a session; terminal once it leaves `InProgress`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    TimedOut,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

/// Things the display layer reacts to, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Captured { unit: u32 },
    Dropped { unit: u32 },
    Escaped { unit: u32 },
    Won,
    TimedOut,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving wander headings
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Capturable units, id-ordered, created once at session start
    pub units: Vec<Unit>,
    pub inventory: Inventory,
    pub lasso: Lasso,
    pub scheduler: Scheduler,
    pub level_clock: LevelClock,
    pub outcome: Outcome,
    /// Pending events for the display layer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed and level tuning
    pub fn new(seed: u64, config: &LevelConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let units = (0..config.unit_count)
            .map(|id| {
                let x = rng.random_range(0..=UNIT_SPAWN_MAX) as f32;
                let y = rng.random_range(0..=UNIT_SPAWN_MAX) as f32;
                Unit::new(id, Vec2::new(x, y))
            })
            .collect();

        let mut scheduler = Scheduler::new();
        let _ = scheduler.every(WANDER_INTERVAL_TICKS, TimerKind::WanderStep);

        Self {
            seed,
            rng,
            time_ticks: 0,
            player: Player::new(
                Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
                config.player_speed,
            ),
            units,
            inventory: Inventory::new(config.capacity),
            lasso: Lasso::default(),
            scheduler,
            level_clock: LevelClock::new(config.total_ticks()),
            outcome: Outcome::InProgress,
            events: Vec::new(),
        }
    }

    pub fn unit(&self, id: u32) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: u32) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
