//! Capture, drop and escape transitions
//!
//! Policy violations (over-capacity capture, capturing a non-free unit,
//! dropping from an empty inventory) are silent no-ops, never errors.
//! Every operation takes the session state explicitly.

use glam::Vec2;

use super::clock::TimerKind;
use super::state::{AnimClip, GameEvent, GameState, Outcome, UnitSprite, UnitState};
use crate::consts::{DROP_OFFSET, ESCAPE_DELAY_TICKS};

/// Try to capture a free-roaming unit into the inventory.
///
/// Succeeds iff there is room and the unit is free. The captured unit is
/// pulled out of the world (inactive, invisible, velocity zeroed, anim
/// stopped), switches to the roped sprite and gets a fresh escape timer.
pub fn try_capture(state: &mut GameState, unit_id: u32) -> bool {
    if state.inventory.is_full() {
        return false;
    }
    let Some(idx) = state.units.iter().position(|u| u.id == unit_id) else {
        return false;
    };
    if !state.units[idx].is_free() {
        return false;
    }

    let escape = state
        .scheduler
        .once(ESCAPE_DELAY_TICKS, TimerKind::Escape { unit: unit_id });
    let unit = &mut state.units[idx];
    unit.vel = Vec2::ZERO;
    unit.active = false;
    unit.visible = false;
    unit.sprite = UnitSprite::Roped;
    unit.anim = AnimClip::Idle;
    unit.state = UnitState::Held { escape };
    state.inventory.push(unit_id);
    state.events.push(GameEvent::Captured { unit: unit_id });
    log::debug!(
        "captured unit {unit_id} ({}/{})",
        state.inventory.len(),
        state.inventory.capacity()
    );
    true
}

/// Drop the most recently captured unit next to the player.
///
/// The unit re-enters the world as delivered and its escape timer is
/// cancelled for good; a delivered unit never breaks loose. Evaluates the
/// win condition afterwards. No-op on an empty inventory.
pub fn drop_last(state: &mut GameState) -> bool {
    let Some(unit_id) = state.inventory.pop() else {
        return false;
    };
    let drop_pos = state.player.pos + Vec2::splat(DROP_OFFSET);
    let Some(unit) = state.units.iter_mut().find(|u| u.id == unit_id) else {
        return false;
    };
    if let UnitState::Held { escape } = unit.state {
        let _ = state.scheduler.cancel(escape);
    }
    unit.pos = drop_pos;
    unit.active = true;
    unit.visible = true;
    unit.state = UnitState::Delivered;
    state.events.push(GameEvent::Dropped { unit: unit_id });
    log::debug!("delivered unit {unit_id}");

    if check_win(state) {
        state.outcome = Outcome::Won;
        state.events.push(GameEvent::Won);
        log::info!("all units delivered, level won");
    }
    true
}

/// True iff every unit has been delivered
pub fn check_win(state: &GameState) -> bool {
    state.units.iter().all(|u| u.is_delivered())
}

/// Escape timer expiry: a held unit breaks loose.
///
/// The unit reverts to the roaming sprite and re-enters the world free,
/// and is evicted from the inventory so the capacity cap stays exact.
pub fn escape(state: &mut GameState, unit_id: u32) {
    let Some(unit) = state.units.iter_mut().find(|u| u.id == unit_id) else {
        return;
    };
    if !unit.is_held() {
        return;
    }
    unit.sprite = UnitSprite::Roaming;
    unit.active = true;
    unit.visible = true;
    unit.state = UnitState::FreeRoaming;
    state.inventory.evict(unit_id);
    state.events.push(GameEvent::Escaped { unit: unit_id });
    log::debug!("unit {unit_id} escaped");
}
