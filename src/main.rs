//! Lasso Ranch entry point
//!
//! Headless demo driver: a scripted herder chases the nearest free unit,
//! throws the lasso in range and drops its catch where it stands. The real
//! renderer is an external collaborator; this loop exercises the sim and
//! prints the HUD fields it would draw.

use lasso_ranch::sim::{GameEvent, GameState, TickInput, tick};
use lasso_ranch::{LevelConfig, consts, hud};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let config = LevelConfig::default();
    let mut state = GameState::new(seed, &config);
    log::info!(
        "Lasso Ranch starting (seed {seed}, {} units, {:.0}s)",
        config.unit_count,
        config.level_time_secs
    );

    while !state.outcome.is_terminal() {
        let input = demo_input(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            log::info!("event: {event:?}");
        }
        if state.time_ticks % consts::TICK_RATE as u64 == 0 {
            println!("{}  {}", hud::held_text(&state), hud::time_text(&state));
        }
    }

    if let Some(text) = hud::notification(state.outcome) {
        println!("{text}");
    }
}

/// Steer toward the nearest free unit, throw in range, drop when holding
fn demo_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    if !state.inventory.is_empty() {
        input.drop = true;
        return input;
    }

    let Some(target) = state
        .units
        .iter()
        .filter(|u| u.is_free())
        .min_by(|a, b| {
            let da = a.pos.distance_squared(state.player.pos);
            let db = b.pos.distance_squared(state.player.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return input;
    };

    let delta = target.pos - state.player.pos;
    input.left = delta.x < -8.0;
    input.right = delta.x > 8.0;
    input.up = delta.y < -8.0;
    input.down = delta.y > 8.0;
    input.lasso = delta.length() < 50.0;
    input
}
