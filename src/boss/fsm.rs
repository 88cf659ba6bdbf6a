//! Boss finite-state machine.
//!
//! The controller is engine-agnostic: the host hands it the frame clock,
//! both positions, a random source, and a diagnostics sink each tick, and
//! applies the returned [`BossTick`] to the entity.
//!
//! # Transitions
//!
//! - Idle / Patrol: Chase when the target is within `detection_range`, else Idle
//! - Chase: step toward the target on X; attack once `next_action_time` passes
//! - Attack: transient, the attack itself moves straight on to Recover
//! - Recover: back to Chase once `next_action_time` passes
//!
//! Attacks are gated only by the clock, never by distance to the target.

use bevy::prelude::*;
use rand::Rng;

use super::attacks::AttackKind;
use super::components::BossState;
use super::data::BossConfig;
use crate::core::{ConfigError, DiagnosticsSink, Facing, FrameClock};

/// What a single tick did, for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossTick {
    /// Boss position after movement
    pub position: Vec2,
    /// New facing, if the boss moved
    pub facing: Option<Facing>,
    /// Attack performed this tick
    pub attack: Option<AttackKind>,
    /// Whether the tick ended in a different state than it started
    pub state_changed: bool,
}

/// Per-boss FSM state.
#[derive(Component, Debug, Clone)]
pub struct BossController {
    config: BossConfig,
    target: Entity,
    state: BossState,
    next_action_time: f32,
}

impl BossController {
    /// Create a controller in Idle. A boss without a target cannot run.
    pub fn new(config: BossConfig, target: Option<Entity>) -> Result<Self, ConfigError> {
        let target = target.ok_or(ConfigError::MissingTarget)?;

        Ok(Self {
            config,
            target,
            state: BossState::Idle,
            next_action_time: 0.0,
        })
    }

    pub fn state(&self) -> BossState {
        self.state
    }

    /// The entity being chased.
    pub fn target(&self) -> Entity {
        self.target
    }

    pub fn next_action_time(&self) -> f32 {
        self.next_action_time
    }

    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    /// Advance the FSM by one frame.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        clock: FrameClock,
        position: Vec2,
        target: Vec2,
        rng: &mut R,
        sink: &mut dyn DiagnosticsSink,
    ) -> BossTick {
        let before = self.state;
        let mut report = BossTick {
            position,
            facing: None,
            attack: None,
            state_changed: false,
        };

        match self.state {
            BossState::Idle | BossState::Patrol => {
                // Patrol has no path of its own, so out of range just idles
                if position.distance(target) > self.config.detection_range {
                    self.set_state(BossState::Idle, clock.now, sink);
                } else {
                    self.set_state(BossState::Chase, clock.now, sink);
                }
            }
            BossState::Chase => {
                let (next, facing) = self.chase_step(position, target, clock.delta);
                report.position = next;
                report.facing = facing;

                if clock.now >= self.next_action_time {
                    let kind = AttackKind::roll(rng);
                    self.perform_attack(kind, clock.now, sink);
                    report.attack = Some(kind);
                }
            }
            BossState::Attack => {}
            BossState::Recover => {
                if clock.now >= self.next_action_time {
                    self.set_state(BossState::Chase, clock.now, sink);
                }
            }
        }

        report.state_changed = self.state != before;
        report
    }

    /// Move toward the target on X without passing it.
    fn chase_step(&self, position: Vec2, target: Vec2, delta: f32) -> (Vec2, Option<Facing>) {
        let dx = target.x - position.x;
        let Some(facing) = Facing::from_direction(dx) else {
            return (position, None);
        };

        let max_step = self.config.patrol_speed * delta;
        let x = if dx.abs() <= max_step {
            target.x
        } else {
            position.x + dx.signum() * max_step
        };
        (Vec2::new(x, position.y), Some(facing))
    }

    /// Run an attack and drop into Recover.
    fn perform_attack(&mut self, kind: AttackKind, now: f32, sink: &mut dyn DiagnosticsSink) {
        sink.log_info(kind.description());

        self.set_state(BossState::Attack, now, sink);
        self.set_state(BossState::Recover, now, sink);

        if let Some(window) = kind.recover_override(&self.config) {
            self.next_action_time = now + window;
            sink.log_info(&format!("Recover shortened to {window}s"));
        }
    }

    /// The only place `state` changes.
    fn set_state(&mut self, new_state: BossState, now: f32, sink: &mut dyn DiagnosticsSink) {
        let changed = self.state != new_state;
        self.state = new_state;

        if new_state == BossState::Recover {
            self.next_action_time = now + self.config.attack_cooldown;
            sink.log_info(&format!(
                "Boss state: {:?}. Next action in {}s",
                new_state, self.config.attack_cooldown
            ));
        } else if changed {
            sink.log_info(&format!("Boss state: {:?}", new_state));
        }
    }
}
