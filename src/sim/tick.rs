//! Fixed timestep simulation tick
//!
//! Advances one session frame. Per-tick order is fixed: movement/facing
//! first (the lasso pose derives from the just-updated facing), then the
//! pose, arming, integration, capture resolution, drop, scheduled timers,
//! and finally the level clock.

use glam::Vec2;

use super::clock::TimerKind;
use super::collision::clamp_to_arena;
use super::inventory::{drop_last, escape, try_capture};
use super::state::{AnimClip, AxisSign, GameEvent, GameState, Outcome};
use super::wander::wander_step;
use crate::consts::{PLAYER_HALF, SIM_DT, UNIT_HALF};

/// Input signals for a single tick
///
/// Directional signals are level-triggered (held state); the action
/// signals are edge-triggered and must be cleared by the caller after
/// each processed tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Throw the lasso
    pub lasso: bool,
    /// Drop the most recently captured unit
    pub drop: bool,
}

/// Advance the session by one fixed timestep.
///
/// Once the outcome is terminal the session stops processing entirely.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.outcome.is_terminal() {
        return;
    }
    state.time_ticks += 1;

    update_player(state, input);
    state
        .lasso
        .update_pose(state.player.horizontal, state.player.vertical);
    if input.lasso {
        let _ = state.lasso.arm(&mut state.scheduler);
    }

    integrate_positions(state);
    resolve_captures(state);

    if input.drop {
        let _ = drop_last(state);
        if state.outcome.is_terminal() {
            return;
        }
    }

    let fired = state.scheduler.advance();
    for kind in fired {
        match kind {
            TimerKind::LassoDisarm => state.lasso.disarm(),
            TimerKind::WanderStep => wander_step(&mut state.units, &mut state.rng),
            TimerKind::Escape { unit } => escape(state, unit),
        }
    }

    state.level_clock.advance();
    if state.level_clock.expired() {
        state.outcome = Outcome::TimedOut;
        state.events.push(GameEvent::TimedOut);
        log::info!("level time expired");
    }
}

/// Level-triggered movement and facing, horizontal axis then vertical.
///
/// Evaluating vertical second means a simultaneous horizontal+vertical
/// hold leaves the vertical walk clip playing; the lasso pose table
/// handles true diagonals separately.
fn update_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if input.left {
        player.vel.x = -player.speed;
        player.horizontal = AxisSign::Negative;
        player.anim = AnimClip::WalkLeft;
    } else if input.right {
        player.vel.x = player.speed;
        player.horizontal = AxisSign::Positive;
        player.anim = AnimClip::WalkRight;
    } else {
        player.vel.x = 0.0;
        player.horizontal = AxisSign::Neutral;
    }

    if input.up {
        player.vel.y = -player.speed;
        player.vertical = AxisSign::Negative;
        player.anim = AnimClip::WalkUp;
    } else if input.down {
        player.vel.y = player.speed;
        player.vertical = AxisSign::Positive;
        player.anim = AnimClip::WalkDown;
    } else {
        player.vel.y = 0.0;
        player.vertical = AxisSign::Neutral;
    }

    if player.horizontal == AxisSign::Neutral && player.vertical == AxisSign::Neutral {
        player.anim = AnimClip::Idle;
    }
}

/// Move the player and every active unit, confined to the arena
fn integrate_positions(state: &mut GameState) {
    let player = &mut state.player;
    player.pos = clamp_to_arena(player.pos + player.vel * SIM_DT, Vec2::splat(PLAYER_HALF));
    for unit in state.units.iter_mut().filter(|u| u.active) {
        unit.pos = clamp_to_arena(unit.pos + unit.vel * SIM_DT, Vec2::splat(UNIT_HALF));
    }
}

/// While armed, any free-roaming unit overlapping the hitbox is captured
/// (in unit id order, until the inventory fills)
fn resolve_captures(state: &mut GameState) {
    if !state.lasso.armed {
        return;
    }
    let hitbox = state.lasso.hitbox(state.player.pos);
    let overlapping: Vec<u32> = state
        .units
        .iter()
        .filter(|u| u.is_free() && hitbox.overlaps(&u.aabb()))
        .map(|u| u.id)
        .collect();
    for id in overlapping {
        let _ = try_capture(state, id);
    }
}
