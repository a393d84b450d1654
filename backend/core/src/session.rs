//! The local player's session entity, as far as chat commands see it.

use serde::{Deserialize, Serialize};

use crate::gesture::GestureWindow;

/// Number of facing directions an entity can take.
pub const DIRECTIONS: u8 = 8;

/// Current action state of the player entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionState {
    #[default]
    Idle,
    Walk,
    Sit,
    Attack,
    Dead,
}

/// Kinematic and toggle state of the local player.
///
/// Position, facing and action are owned by the map engine; the command
/// router only reads them and rewrites the facing fields.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub position: (f32, f32),
    /// Body facing, `0..DIRECTIONS`.
    pub direction: u8,
    /// Head facing relative to the body.
    pub head_dir: u8,
    pub homunculus_custom_ai: bool,
    pub mercenary_custom_ai: bool,
    action: ActionState,
    head_shakes: Option<GestureWindow>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> ActionState {
        self.action
    }

    pub fn is_sitting(&self) -> bool {
        self.action == ActionState::Sit
    }

    /// Update the action state. Leaving `Sit` discards the head-shake window.
    pub fn set_action(&mut self, next: ActionState) {
        if self.action == ActionState::Sit && next != ActionState::Sit {
            self.head_shakes = None;
        }
        self.action = next;
    }

    /// Rotate the body facing by `steps` eighth-turns.
    pub fn turn(&mut self, steps: u8) {
        self.direction = (self.direction % DIRECTIONS + steps % DIRECTIONS) % DIRECTIONS;
    }

    /// Swing the head to the other side: `1 <-> 2`, anything else becomes `1`.
    pub fn swing_head(&mut self) {
        self.head_dir = if self.head_dir == 1 { 2 } else { 1 };
    }

    /// Head-shake window, allocated on first use.
    pub fn head_shakes_mut(&mut self) -> &mut GestureWindow {
        self.head_shakes.get_or_insert_with(GestureWindow::new)
    }

    pub fn head_shakes(&self) -> Option<&GestureWindow> {
        self.head_shakes.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_wraps_around() {
        let mut s = Session::new();
        s.direction = 7;
        s.turn(1);
        assert_eq!(s.direction, 0);
        s.turn(7);
        assert_eq!(s.direction, 7);
    }

    #[test]
    fn turn_normalizes_out_of_range_direction() {
        let mut s = Session::new();
        s.direction = 250;
        s.turn(7);
        assert_eq!(s.direction, 1);
        s.direction = u8::MAX;
        s.turn(u8::MAX);
        assert_eq!(s.direction, 6);
    }

    #[test]
    fn swing_head_alternates() {
        let mut s = Session::new();
        s.swing_head();
        assert_eq!(s.head_dir, 1);
        s.swing_head();
        assert_eq!(s.head_dir, 2);
        s.swing_head();
        assert_eq!(s.head_dir, 1);
    }

    #[test]
    fn standing_up_drops_head_shake_window() {
        let mut s = Session::new();
        s.set_action(ActionState::Sit);
        s.head_shakes_mut().push(42);
        assert!(s.head_shakes().is_some());

        s.set_action(ActionState::Sit);
        assert!(s.head_shakes().is_some());

        s.set_action(ActionState::Idle);
        assert!(s.head_shakes().is_none());
    }
}
