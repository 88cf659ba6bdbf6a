//! Horizontal facing shared by the player and the boss.

/// Which way a sprite looks. Sprites are authored facing right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing for a horizontal direction, or `None` when there is no movement.
    pub fn from_direction(x: f32) -> Option<Self> {
        if x < 0.0 {
            Some(Facing::Left)
        } else if x > 0.0 {
            Some(Facing::Right)
        } else {
            None
        }
    }

    /// Value for `Sprite::flip_x`.
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}
