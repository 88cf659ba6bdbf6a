//! Boss-related components and resources.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Marker component for the boss entity.
#[derive(Component)]
pub struct Boss;

/// Boss behavior mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BossState {
    /// Waiting for the target to come within detection range.
    #[default]
    Idle,
    /// Handled exactly like Idle; there is no patrol path.
    Patrol,
    /// Executing an attack. Collapses into Recover in the same tick.
    Attack,
    /// Cooling down after an attack.
    Recover,
    /// Moving toward the target on the X axis.
    Chase,
}

/// Host-side bookkeeping for the boss's target reference.
///
/// The controller only stores the entity handle; this remembers whether
/// the host already warned about that entity being gone.
#[derive(Component, Default)]
pub struct TargetTracking {
    pub lost: bool,
}

/// Random source for attack selection.
#[derive(Resource)]
pub struct BossRng(pub StdRng);

impl BossRng {
    /// Deterministic when a seed is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}
