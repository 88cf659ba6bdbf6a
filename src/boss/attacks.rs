//! The boss's attack catalogue.
//!
//! Attacks are placeholders: each one only reports what it would do. The
//! vulnerable stand is the one with a gameplay effect, since it shortens
//! the recovery window that follows it.

use rand::Rng;

use super::data::BossConfig;

/// One of the four canned attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    /// Short-range stab.
    Pierce,
    /// Jump and slam down at the predicted landing point.
    Slam,
    /// Step back, then charge at high speed.
    DashBackAndCharge,
    /// Stand still and exposed, giving the player an opening.
    VulnerableStand,
}

impl AttackKind {
    /// All attacks, in catalogue order.
    pub const ALL: [AttackKind; 4] = [
        AttackKind::Pierce,
        AttackKind::Slam,
        AttackKind::DashBackAndCharge,
        AttackKind::VulnerableStand,
    ];

    /// Draw a uniformly random attack.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Log line describing the attack.
    pub fn description(self) -> &'static str {
        match self {
            AttackKind::Pierce => "Attack 1: pierce (short-range stab)",
            AttackKind::Slam => "Attack 2: slam (jump, then strike the landing point)",
            AttackKind::DashBackAndCharge => "Attack 3: dash back, then charge (dangerous)",
            AttackKind::VulnerableStand => "Attack 4: vulnerable stand (opening for the player)",
        }
    }

    /// Recovery window that replaces the normal cooldown, if any.
    pub fn recover_override(self, config: &BossConfig) -> Option<f32> {
        match self {
            AttackKind::VulnerableStand => Some(config.vulnerable_window),
            _ => None,
        }
    }
}
