//! Player movement controller.
//!
//! One controller covers every movement variant; [`PlayerCapabilities`](super::data::PlayerCapabilities)
//! picks physics or kinematic motion and switches animation, running, and
//! vertical movement on or off. The host calls the lifecycle methods
//! explicitly: `initialize` once, `tick` every frame, and the contact
//! callbacks whenever the physics step reports one.

use bevy::prelude::*;

use super::components::MoveInput;
use super::data::{MotionMode, PlayerConfig};
use crate::core::{ConfigError, DiagnosticsSink, Facing};
use crate::world::ColliderTag;

/// Position and velocity of the body the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }
}

/// Which optional pieces the host found on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attached {
    pub body: bool,
    pub animator: bool,
}

/// Values forwarded to the animation driver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationParams {
    pub speed: f32,
    pub jump: bool,
}

/// What the host should do with a trigger the player entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerResponse {
    /// Remove the trigger entity.
    Consume,
    Ignore,
}

/// Per-player movement state.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    config: PlayerConfig,
    /// Set by `initialize`; nothing runs before that
    spawn_position: Option<Vec2>,
    grounded: bool,
    score: u32,
    facing: Facing,
    animation: Option<AnimationParams>,
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            spawn_position: None,
            grounded: false,
            score: 0,
            facing: Facing::Right,
            animation: None,
        }
    }

    /// Record the spawn point and check the entity's optional pieces.
    ///
    /// Physics motion without a body is fatal. A missing animator only
    /// disables animation forwarding.
    pub fn initialize(
        &mut self,
        spawn: Vec2,
        attached: Attached,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<(), ConfigError> {
        let capabilities = self.config.capabilities;

        if capabilities.motion == MotionMode::Physics && !attached.body {
            let error = ConfigError::MissingBody;
            sink.log_error(&error.to_string());
            return Err(error);
        }

        self.spawn_position = Some(spawn);
        sink.log_info(&format!("Spawn position saved: {spawn}"));

        if capabilities.animated {
            if attached.animator {
                self.animation = Some(AnimationParams::default());
                sink.log_info("Animator found");
            } else {
                sink.log_warn("No animator attached, animation parameters will not be updated");
            }
        }

        sink.log_info(&format!("Hello, [{}]", self.config.player_name));
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.spawn_position.is_some()
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Current animation parameters, `None` without an animator.
    pub fn animation(&self) -> Option<AnimationParams> {
        self.animation
    }

    /// Apply one frame of input to `body`.
    pub fn tick(
        &mut self,
        delta: f32,
        input: &MoveInput,
        body: &mut Body,
        sink: &mut dyn DiagnosticsSink,
    ) {
        if !self.is_initialized() {
            return;
        }

        let capabilities = self.config.capabilities;

        let mut intent = input.axis;
        if !capabilities.vertical_movement {
            intent.y = 0.0;
        }
        let intent = intent.clamp_length_max(1.0);

        let speed = if capabilities.run_modifier && input.run {
            self.config.move_speed * self.config.run_multiplier
        } else {
            self.config.move_speed
        };

        match capabilities.motion {
            MotionMode::Physics => {
                body.velocity.x = intent.x * speed;
                if capabilities.vertical_movement {
                    body.velocity.y = intent.y * speed;
                }
            }
            MotionMode::Kinematic => {
                body.position += intent * speed * delta;
                // No gravity in free-move, so nothing else may carry it vertically
                if capabilities.vertical_movement {
                    body.velocity.y = 0.0;
                }
            }
        }

        // Free-move has W/S instead of jumping
        if input.jump && self.grounded && !capabilities.vertical_movement {
            body.velocity.y = self.config.jump_force;
            if let Some(animation) = self.animation.as_mut() {
                animation.jump = true;
            }
            sink.log_info("Jumped!");
        }

        if let Some(facing) = Facing::from_direction(intent.x) {
            self.facing = facing;
        }

        if let Some(animation) = self.animation.as_mut() {
            animation.speed = intent.length() * speed;
        }
    }

    /// Solid contact started.
    pub fn on_collision_begin(
        &mut self,
        tag: ColliderTag,
        body: &mut Body,
        sink: &mut dyn DiagnosticsSink,
    ) {
        let Some(spawn) = self.spawn_position else {
            return;
        };

        match tag {
            ColliderTag::Ground => {
                self.grounded = true;
                if let Some(animation) = self.animation.as_mut() {
                    animation.jump = false;
                }
            }
            ColliderTag::Obstacle => {
                sink.log_info("Hit an obstacle! Returning to the start point");
                body.position = spawn;
                body.velocity = Vec2::ZERO;
            }
            ColliderTag::Coin => {}
        }
    }

    /// Solid contact ended.
    pub fn on_collision_end(&mut self, tag: ColliderTag) {
        if self.is_initialized() && tag == ColliderTag::Ground {
            self.grounded = false;
        }
    }

    /// Entered a sensor.
    pub fn on_trigger_enter(
        &mut self,
        tag: ColliderTag,
        sink: &mut dyn DiagnosticsSink,
    ) -> TriggerResponse {
        if !self.is_initialized() || tag != ColliderTag::Coin {
            return TriggerResponse::Ignore;
        }

        self.score += 1;
        sink.log_info(&format!("Coin collected! Score: {}", self.score));
        TriggerResponse::Consume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, RecordingSink};
    use crate::player::PlayerCapabilities;

    const DT: f32 = 0.02;
    const BOTH: Attached = Attached {
        body: true,
        animator: true,
    };

    fn ready(capabilities: PlayerCapabilities) -> (PlayerController, RecordingSink) {
        let mut controller = PlayerController::new(PlayerConfig {
            capabilities,
            ..default()
        });
        let mut sink = RecordingSink::default();
        controller
            .initialize(Vec2::new(1.0, 2.0), BOTH, &mut sink)
            .unwrap();
        (controller, sink)
    }

    fn right() -> MoveInput {
        MoveInput {
            axis: Vec2::X,
            ..default()
        }
    }

    fn jump() -> MoveInput {
        MoveInput {
            jump: true,
            ..default()
        }
    }

    #[test]
    fn physics_without_body_is_fatal() {
        let mut controller = PlayerController::new(PlayerConfig::default());
        let mut sink = RecordingSink::default();

        let result = controller.initialize(
            Vec2::ZERO,
            Attached {
                body: false,
                animator: true,
            },
            &mut sink,
        );

        assert_eq!(result, Err(ConfigError::MissingBody));
        assert_eq!(sink.count(LogLevel::Error), 1);
        assert!(!controller.is_initialized());
    }

    #[test]
    fn kinematic_without_body_is_fine() {
        let mut controller = PlayerController::new(PlayerConfig {
            capabilities: PlayerCapabilities::kinematic_basic(),
            ..default()
        });
        let mut sink = RecordingSink::default();

        let attached = Attached {
            body: false,
            animator: false,
        };
        assert!(controller.initialize(Vec2::ZERO, attached, &mut sink).is_ok());
        // Not animated, so no warning either
        assert_eq!(sink.count(LogLevel::Warn), 0);
    }

    #[test]
    fn missing_animator_warns_once_and_degrades() {
        let mut controller = PlayerController::new(PlayerConfig::default());
        let mut sink = RecordingSink::default();
        let attached = Attached {
            body: true,
            animator: false,
        };
        controller.initialize(Vec2::ZERO, attached, &mut sink).unwrap();

        let mut body = Body::default();
        for _ in 0..5 {
            controller.tick(DT, &right(), &mut body, &mut sink);
        }

        assert_eq!(sink.count(LogLevel::Warn), 1);
        assert_eq!(controller.animation(), None);
        assert_eq!(body.velocity.x, 5.0);
    }

    #[test]
    fn greets_player_by_name() {
        let (_, sink) = ready(PlayerCapabilities::default());
        assert!(sink.contains("Hello, [Traveler]"));
    }

    #[test]
    fn ignores_everything_before_initialize() {
        let mut controller = PlayerController::new(PlayerConfig::default());
        let mut sink = RecordingSink::default();
        let mut body = Body::default();

        controller.tick(DT, &right(), &mut body, &mut sink);
        controller.on_collision_begin(ColliderTag::Ground, &mut body, &mut sink);

        assert_eq!(body, Body::default());
        assert!(!controller.is_grounded());
        assert_eq!(
            controller.on_trigger_enter(ColliderTag::Coin, &mut sink),
            TriggerResponse::Ignore
        );
        assert_eq!(controller.score(), 0);
    }

    #[test]
    fn physics_sets_horizontal_velocity_only() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::physics_animated());
        let mut body = Body {
            position: Vec2::ZERO,
            velocity: Vec2::new(0.0, -3.0),
        };
        let input = MoveInput {
            axis: Vec2::new(-1.0, 1.0),
            ..default()
        };

        controller.tick(DT, &input, &mut body, &mut sink);

        assert_eq!(body.velocity, Vec2::new(-5.0, -3.0));
        assert_eq!(body.position, Vec2::ZERO);
        assert_eq!(controller.facing(), Facing::Left);
    }

    #[test]
    fn kinematic_translates_by_speed_and_delta() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::kinematic_basic());
        let mut body = Body::at(Vec2::new(1.0, 2.0));

        controller.tick(0.5, &right(), &mut body, &mut sink);

        assert_eq!(body.position, Vec2::new(3.5, 2.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn run_doubles_speed_only_when_enabled() {
        let running = MoveInput {
            axis: Vec2::X,
            run: true,
            ..default()
        };

        let (mut controller, mut sink) = ready(PlayerCapabilities::kinematic_run());
        let mut body = Body::default();
        controller.tick(1.0, &running, &mut body, &mut sink);
        assert_eq!(body.position.x, 10.0);
        assert_eq!(controller.animation().unwrap().speed, 10.0);

        let (mut controller, mut sink) = ready(PlayerCapabilities::kinematic_basic());
        let mut body = Body::default();
        controller.tick(1.0, &running, &mut body, &mut sink);
        assert_eq!(body.position.x, 5.0);
    }

    #[test]
    fn vertical_movement_uses_normalized_intent() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::kinematic_free_move());
        let mut body = Body::default();
        let input = MoveInput {
            axis: Vec2::new(1.0, 1.0),
            ..default()
        };

        controller.tick(1.0, &input, &mut body, &mut sink);

        assert!((body.position.length() - 5.0).abs() < 1e-4);
        assert!(body.position.y > 0.0);
        assert!((controller.animation().unwrap().speed - 5.0).abs() < 1e-4);
    }

    #[test]
    fn vertical_input_ignored_without_capability() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::kinematic_basic());
        let mut body = Body::default();
        let input = MoveInput {
            axis: Vec2::Y,
            ..default()
        };

        controller.tick(1.0, &input, &mut body, &mut sink);
        assert_eq!(body.position, Vec2::ZERO);
    }

    #[test]
    fn facing_keeps_last_direction_when_idle() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::default());
        let mut body = Body::default();
        let left = MoveInput {
            axis: Vec2::NEG_X,
            ..default()
        };

        controller.tick(DT, &left, &mut body, &mut sink);
        controller.tick(DT, &MoveInput::default(), &mut body, &mut sink);
        assert_eq!(controller.facing(), Facing::Left);

        controller.tick(DT, &right(), &mut body, &mut sink);
        assert_eq!(controller.facing(), Facing::Right);
    }

    #[test]
    fn animation_speed_tracks_intent() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::default());
        let mut body = Body::default();

        controller.tick(DT, &right(), &mut body, &mut sink);
        assert_eq!(controller.animation().unwrap().speed, 5.0);

        controller.tick(DT, &MoveInput::default(), &mut body, &mut sink);
        assert_eq!(controller.animation().unwrap().speed, 0.0);
    }

    #[test]
    fn jump_requires_ground() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::default());
        let mut body = Body::default();

        controller.tick(DT, &jump(), &mut body, &mut sink);
        assert_eq!(body.velocity.y, 0.0);
        assert!(!controller.animation().unwrap().jump);
    }

    #[test]
    fn jump_fires_once_per_press() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::default());
        let mut body = Body::default();
        controller.on_collision_begin(ColliderTag::Ground, &mut body, &mut sink);

        controller.tick(DT, &jump(), &mut body, &mut sink);
        assert_eq!(body.velocity.y, 10.0);
        assert!(controller.animation().unwrap().jump);

        // Leaving the ground, then pressing again mid-air does nothing
        controller.on_collision_end(ColliderTag::Ground);
        body.velocity.y = 4.0;
        controller.tick(DT, &jump(), &mut body, &mut sink);
        assert_eq!(body.velocity.y, 4.0);

        let jumps = sink.entries.iter().filter(|(_, m)| m == "Jumped!").count();
        assert_eq!(jumps, 1);
    }

    #[test]
    fn free_move_never_jumps() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::kinematic_free_move());
        let mut body = Body::default();
        controller.on_collision_begin(ColliderTag::Ground, &mut body, &mut sink);

        controller.tick(DT, &jump(), &mut body, &mut sink);
        assert_eq!(body.velocity.y, 0.0);
        assert!(!sink.contains("Jumped!"));

        // Leftover vertical velocity is cancelled on the next tick
        body.velocity.y = 10.0;
        let up = MoveInput {
            axis: Vec2::Y,
            ..default()
        };
        controller.tick(1.0, &up, &mut body, &mut sink);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.position, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn landing_clears_jump_flag() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::default());
        let mut body = Body::default();
        controller.on_collision_begin(ColliderTag::Ground, &mut body, &mut sink);
        controller.tick(DT, &jump(), &mut body, &mut sink);
        controller.on_collision_end(ColliderTag::Ground);
        assert!(!controller.is_grounded());

        controller.on_collision_begin(ColliderTag::Ground, &mut body, &mut sink);
        assert!(controller.is_grounded());
        assert!(!controller.animation().unwrap().jump);
    }

    #[test]
    fn grounded_only_changes_on_ground_contacts() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::default());
        let mut body = Body::default();

        controller.on_collision_begin(ColliderTag::Ground, &mut body, &mut sink);
        controller.on_collision_end(ColliderTag::Obstacle);
        controller.on_collision_end(ColliderTag::Coin);
        assert!(controller.is_grounded());

        controller.tick(DT, &right(), &mut body, &mut sink);
        assert!(controller.is_grounded());

        controller.on_collision_end(ColliderTag::Ground);
        assert!(!controller.is_grounded());
    }

    #[test]
    fn obstacle_resets_to_spawn() {
        for velocity in [Vec2::ZERO, Vec2::new(3.0, -2.0), Vec2::new(-900.0, 4000.0)] {
            let (mut controller, mut sink) = ready(PlayerCapabilities::default());
            let mut body = Body {
                position: Vec2::new(40.0, -7.0),
                velocity,
            };

            controller.on_collision_begin(ColliderTag::Obstacle, &mut body, &mut sink);

            assert_eq!(body.position, Vec2::new(1.0, 2.0));
            assert_eq!(body.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn each_coin_scores_once() {
        let (mut controller, mut sink) = ready(PlayerCapabilities::default());

        for expected in 1..=3 {
            let response = controller.on_trigger_enter(ColliderTag::Coin, &mut sink);
            assert_eq!(response, TriggerResponse::Consume);
            assert_eq!(controller.score(), expected);
        }

        assert_eq!(
            controller.on_trigger_enter(ColliderTag::Ground, &mut sink),
            TriggerResponse::Ignore
        );
        assert_eq!(controller.score(), 3);
        assert!(sink.contains("Score: 3"));
    }
}
