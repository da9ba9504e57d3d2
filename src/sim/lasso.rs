//! Lasso pose and arming window
//!
//! The lasso hitbox sits at a directional offset from the player, chosen
//! from the currently held movement signals. Throwing it arms the hitbox
//! for a short single-shot window; the disarm is a scheduler one-shot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::{Scheduler, TimerKind};
use super::collision::Aabb;
use super::state::AxisSign;
use crate::consts::*;

/// The rope/hook hit zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lasso {
    /// Hitbox center relative to the player position
    pub offset: Vec2,
    /// Sprite orientation in degrees
    pub angle: f32,
    /// Collidable and capture-capable
    pub armed: bool,
    pub visible: bool,
}

impl Default for Lasso {
    fn default() -> Self {
        // Idle default before the player has moved: the facing-up offset
        // with the horizontal angle convention
        Self {
            offset: Vec2::new(0.0, -LASSO_VERTICAL_OFFSET),
            angle: 90.0,
            armed: false,
            visible: false,
        }
    }
}

impl Lasso {
    /// Re-derive the pose from the per-axis movement signals.
    ///
    /// Diagonal combinations take priority over single-axis poses; with no
    /// signal held the last pose is retained.
    pub fn update_pose(&mut self, horizontal: AxisSign, vertical: AxisSign) {
        use super::state::AxisSign::{Negative, Neutral, Positive};
        let d = LASSO_DIAGONAL_OFFSET;
        match (horizontal, vertical) {
            (Positive, Negative) => self.set_pose(Vec2::new(d, -d), 45.0),
            (Negative, Negative) => self.set_pose(Vec2::new(-d, -d), -45.0),
            (Positive, Positive) => self.set_pose(Vec2::new(d, d), -45.0),
            (Negative, Positive) => self.set_pose(Vec2::new(-d, d), 45.0),
            (Negative, Neutral) => self.set_pose(Vec2::new(-LASSO_SIDE_OFFSET, 0.0), 90.0),
            (Positive, Neutral) => self.set_pose(Vec2::new(LASSO_SIDE_OFFSET, 0.0), 90.0),
            (Neutral, Negative) => self.set_pose(Vec2::new(0.0, -LASSO_VERTICAL_OFFSET), 0.0),
            (Neutral, Positive) => self.set_pose(Vec2::new(0.0, LASSO_VERTICAL_OFFSET), 0.0),
            (Neutral, Neutral) => {}
        }
    }

    fn set_pose(&mut self, offset: Vec2, angle: f32) {
        self.offset = offset;
        self.angle = angle;
    }

    /// Throw the lasso: arm the hitbox for the fixed window.
    ///
    /// Fire-and-forget single shot; a throw while already armed is ignored
    /// and does not extend the window. Returns whether the throw armed it.
    pub fn arm(&mut self, scheduler: &mut Scheduler) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        self.visible = true;
        let _ = scheduler.once(LASSO_WINDOW_TICKS, TimerKind::LassoDisarm);
        true
    }

    /// Window elapsed: deactivate, hide, stop colliding
    pub fn disarm(&mut self) {
        self.armed = false;
        self.visible = false;
    }

    /// World-space hitbox for the current pose
    pub fn hitbox(&self, player_pos: Vec2) -> Aabb {
        Aabb::new(player_pos + self.offset, Vec2::splat(ROPE_HALF))
    }
}
