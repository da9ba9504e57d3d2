//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by unit id)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod inventory;
pub mod lasso;
pub mod state;
pub mod tick;
pub mod wander;

pub use clock::{Scheduler, TimerHandle, TimerKind};
pub use collision::{Aabb, clamp_to_arena};
pub use inventory::{check_win, drop_last, escape, try_capture};
pub use lasso::Lasso;
pub use state::{
    AnimClip, AxisSign, GameEvent, GameState, Inventory, LevelClock, Outcome, Player, Unit,
    UnitSprite, UnitState,
};
pub use tick::{TickInput, tick};
pub use wander::wander_step;
