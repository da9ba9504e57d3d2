//! Status text and end-of-level notifications
//!
//! The display layer renders exactly two text fields plus one blocking
//! notification when the session ends.

use crate::sim::{GameState, Outcome};

/// Held-count field, updated on capture and drop
pub fn held_text(state: &GameState) -> String {
    format!("held: {}", state.inventory.len())
}

/// Remaining-time field
pub fn time_text(state: &GameState) -> String {
    format!("Time: {}", truncate_secs(state.level_clock.remaining_secs()))
}

/// Blocking end-of-level notification, if the session has ended
pub fn notification(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won => Some("WINNER"),
        Outcome::TimedOut => Some("TIME UP"),
    }
}

/// Left-truncate a seconds value to four characters ("59.7333" shows as
/// "59.7", "9.7333" as "9.73")
fn truncate_secs(secs: f32) -> String {
    let mut text = format!("{secs:.3}");
    text.truncate(4);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LevelConfig;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_held_text() {
        let state = GameState::new(1, &LevelConfig::default());
        assert_eq!(held_text(&state), "held: 0");
    }

    #[test]
    fn test_time_text_truncation() {
        assert_eq!(truncate_secs(59.7333), "59.7");
        assert_eq!(truncate_secs(9.7333), "9.73");
        assert_eq!(truncate_secs(60.0), "60.0");
        assert_eq!(truncate_secs(0.0), "0.00");
    }

    #[test]
    fn test_time_text_counts_down() {
        let config = LevelConfig {
            level_time_secs: 10.0,
            ..Default::default()
        };
        let mut state = GameState::new(1, &config);
        assert_eq!(time_text(&state), "Time: 10.0");
        for _ in 0..120 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(time_text(&state), "Time: 9.00");
    }

    #[test]
    fn test_notifications() {
        assert_eq!(notification(Outcome::InProgress), None);
        assert_eq!(notification(Outcome::Won), Some("WINNER"));
        assert_eq!(notification(Outcome::TimedOut), Some("TIME UP"));
    }
}
