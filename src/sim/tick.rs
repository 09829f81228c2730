//! Fixed-rate simulation tick
//!
//! One call advances the game by exactly one frame. Velocities are in
//! pixels per tick, so there is no `dt` scaling anywhere in here.

use glam::Vec2;

use super::ai::track_ball;
use super::collision::collides;
use super::state::{Ball, Field, GameEvent, GameState, Paddle, Side};
use crate::consts::*;
use crate::input::paddle_y_for_pointer;

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer y relative to the surface, if the pointer has moved
    pub pointer_y: Option<f32>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if let Some(pointer_y) = input.pointer_y {
        state.user.pos.y = paddle_y_for_pointer(pointer_y, state.user.height);
    }

    let field = state.field;

    state.ball.advance();

    track_ball(&mut state.com, &state.ball);

    // Top/bottom walls. No position correction: the ball may sit past the
    // edge for a tick before the flipped velocity brings it back.
    let ball = &mut state.ball;
    if ball.pos.y + ball.radius > field.height || ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Only the paddle on the ball's half is checked
    let paddle = if state.ball.pos.x < field.half_width() {
        &state.user
    } else {
        &state.com
    };

    if collides(&state.ball, paddle) {
        let side = paddle.side;
        let angle = bounce_off_paddle(&mut state.ball, paddle, field);
        state.events.push(GameEvent::PaddleBounce { side, angle });
    }

    let ball = &state.ball;
    if ball.pos.x - ball.radius < 0.0 {
        state.com.score += 1;
        reset_ball(&mut state.ball, field);
        state.events.push(GameEvent::Scored {
            side: Side::Computer,
        });
    } else if ball.pos.x + ball.radius > field.width {
        state.user.score += 1;
        reset_ball(&mut state.ball, field);
        state.events.push(GameEvent::Scored { side: Side::User });
    }
}

/// Bounce the ball off a paddle it is touching
///
/// The outgoing angle depends only on where the ball struck, relative to the
/// paddle center: dead center goes out flat, the edges go out at 45°. The old
/// velocity is discarded and rebuilt at `ball.speed`, then the speed grows
/// for the next bounce. Returns the outgoing angle in radians.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, field: Field) -> f32 {
    let half_height = paddle.height / 2.0;
    // Not clamped; a corner contact can land slightly outside [-1, 1]
    let collide_point = (ball.pos.y - paddle.center_y()) / half_height;
    let angle = collide_point * MAX_BOUNCE_ANGLE;

    let direction = if ball.pos.x < field.half_width() {
        1.0
    } else {
        -1.0
    };

    ball.vel = Vec2::new(
        direction * ball.speed * angle.cos(),
        ball.speed * angle.sin(),
    );
    ball.speed += PADDLE_SPEEDUP;

    angle
}

/// Serve again from the center after a point
///
/// Only the horizontal velocity is inverted. The vertical component carries
/// over from the rally that just ended.
pub fn reset_ball(ball: &mut Ball, field: Field) {
    ball.pos = field.center();
    ball.speed = BALL_START_SPEED;
    ball.vel.x = -ball.vel.x;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn state() -> GameState {
        GameState::new(Field::new(600.0, 400.0))
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_tick_counts() {
        let mut state = state();
        tick(&mut state, &idle());
        tick(&mut state, &idle());
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_wall_reflection_at_top() {
        let mut state = state();
        state.ball.pos = Vec2::new(300.0, 0.0);
        state.ball.vel = Vec2::new(3.0, -5.0);

        tick(&mut state, &idle());

        assert_eq!(state.ball.vel, Vec2::new(3.0, 5.0));
        // Advanced normally, not pushed back inside
        assert_eq!(state.ball.pos, Vec2::new(303.0, -5.0));
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_wall_reflection_at_bottom() {
        let mut state = state();
        state.ball.pos = Vec2::new(200.0, 388.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        tick(&mut state, &idle());

        assert_eq!(state.ball.vel, Vec2::new(-4.0, -4.0));
        assert_eq!(state.ball.pos, Vec2::new(196.0, 392.0));
    }

    #[test]
    fn test_centered_hit_on_user_paddle_goes_out_flat() {
        let mut state = state();
        // User paddle spans x 20..30, y 150..250
        state.ball.pos = Vec2::new(40.0, 200.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        tick(&mut state, &idle());

        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
        assert_eq!(state.ball.speed, 5.5);
        assert_eq!(
            state.events,
            vec![GameEvent::PaddleBounce {
                side: Side::User,
                angle: 0.0
            }]
        );
    }

    #[test]
    fn test_centered_hit_on_com_paddle_goes_left() {
        let mut state = state();
        // Computer paddle spans x 570..580 and is centered on y = 200
        state.ball.pos = Vec2::new(560.0, 200.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        tick(&mut state, &idle());

        assert_eq!(state.ball.vel, Vec2::new(-5.0, 0.0));
        assert_eq!(state.ball.speed, 5.5);
    }

    #[test]
    fn test_off_center_hit_keeps_speed_magnitude() {
        let mut state = state();
        state.ball.pos = Vec2::new(40.0, 240.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        tick(&mut state, &idle());

        // 40px below center of a 100px paddle: 0.8 * 45°
        let angle = 0.8 * std::f32::consts::FRAC_PI_4;
        assert!((state.ball.vel.x - 5.0 * angle.cos()).abs() < EPS);
        assert!((state.ball.vel.y - 5.0 * angle.sin()).abs() < EPS);
        assert!(state.ball.vel.y > 0.0);
        // Magnitude matches the pre-increment speed
        assert!((state.ball.vel.length_squared() - 25.0).abs() < EPS);
    }

    #[test]
    fn test_hit_above_center_deflects_up() {
        let mut ball = Ball::new(Field::default());
        let paddle = Paddle::new(Side::User, Field::default());
        ball.pos = Vec2::new(35.0, 150.0);

        let angle = bounce_off_paddle(&mut ball, &paddle, Field::default());

        assert!((angle + std::f32::consts::FRAC_PI_4).abs() < EPS);
        assert!(ball.vel.y < 0.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_speed_grows_half_per_bounce() {
        let mut state = state();
        for n in 1..=12 {
            state.ball.pos = Vec2::new(40.0, 200.0);
            state.ball.vel = Vec2::new(-5.0, 0.0);
            tick(&mut state, &idle());
            assert!((state.ball.speed - (5.0 + 0.5 * n as f32)).abs() < EPS);
        }
        // Uncapped, and the bounce itself used the pre-increment speed
        assert!((state.ball.vel.x - 10.5).abs() < EPS);
    }

    #[test]
    fn test_left_exit_scores_for_computer() {
        let mut state = state();
        state.ball.pos = Vec2::new(0.0, 200.0);
        state.ball.vel = Vec2::new(-5.0, 3.0);
        state.ball.speed = 8.0;

        tick(&mut state, &idle());

        assert_eq!(state.com.score, 1);
        assert_eq!(state.user.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(state.ball.speed, 5.0);
        // Serve reverses x only, y carries over
        assert_eq!(state.ball.vel, Vec2::new(5.0, 3.0));
        assert_eq!(
            state.events,
            vec![GameEvent::Scored {
                side: Side::Computer
            }]
        );
    }

    #[test]
    fn test_right_exit_scores_for_user() {
        let mut state = state();
        state.ball.pos = Vec2::new(600.0, 200.0);
        state.ball.vel = Vec2::new(5.0, -1.5);

        tick(&mut state, &idle());

        assert_eq!(state.user.score, 1);
        assert_eq!(state.com.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(-5.0, -1.5));
    }

    #[test]
    fn test_reset_ball() {
        let field = Field::new(800.0, 600.0);
        let mut ball = Ball::new(field);
        ball.pos = Vec2::new(-3.0, 17.0);
        ball.vel = Vec2::new(-7.25, 2.5);
        ball.speed = 9.5;

        reset_ball(&mut ball, field);

        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.speed, 5.0);
        assert_eq!(ball.vel, Vec2::new(7.25, 2.5));
    }

    #[test]
    fn test_only_paddle_on_ball_half_is_checked() {
        let mut state = state();
        // Swap the paddles' x positions
        state.com.pos.x = 20.0;
        state.user.pos.x = 570.0;
        state.ball.pos = Vec2::new(40.0, 200.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        tick(&mut state, &idle());

        assert_eq!(state.ball.vel, Vec2::new(-5.0, 0.0));
        assert_eq!(state.ball.speed, 5.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_pointer_moves_user_paddle_before_physics() {
        let mut state = state();
        // Paddle moved out of the ball's way this very tick
        state.ball.pos = Vec2::new(40.0, 200.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        let input = TickInput {
            pointer_y: Some(350.0),
        };

        tick(&mut state, &input);

        assert_eq!(state.user.pos.y, 300.0);
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_pointer_off_surface_is_not_clamped() {
        let mut state = state();
        let input = TickInput {
            pointer_y: Some(-500.0),
        };

        tick(&mut state, &input);
        assert_eq!(state.user.pos.y, -550.0);
    }

    #[test]
    fn test_ai_tracks_during_tick() {
        let mut state = state();
        state.ball.pos = Vec2::new(300.0, 295.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        tick(&mut state, &idle());

        // Ball at y = 300 after advancing; paddle center was 200
        assert!((state.com.pos.y - 160.0).abs() < EPS);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = state();
        let mut state2 = state();

        let inputs = [
            TickInput {
                pointer_y: Some(120.0),
            },
            TickInput::default(),
            TickInput {
                pointer_y: Some(260.0),
            },
        ];

        for _ in 0..500 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.user.score, state2.user.score);
        assert_eq!(state1.com.score, state2.com.score);
    }

    proptest! {
        #[test]
        fn prop_free_flight_advances_exactly(
            x in 100.0f32..500.0,
            y in 50.0f32..350.0,
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
        ) {
            let mut state = state();
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);

            tick(&mut state, &idle());

            prop_assert_eq!(state.ball.pos, Vec2::new(x + vx, y + vy));
            prop_assert_eq!(state.ball.vel, Vec2::new(vx, vy));
            prop_assert!(state.events.is_empty());
        }

        #[test]
        fn prop_wall_flips_only_vertical(
            x in 100.0f32..500.0,
            vx in -5.0f32..5.0,
            vy in 0.5f32..5.0,
        ) {
            let mut state = state();
            state.ball.pos = Vec2::new(x, 5.0);
            state.ball.vel = Vec2::new(vx, -vy);

            tick(&mut state, &idle());

            prop_assert_eq!(state.ball.vel.x, vx);
            prop_assert_eq!(state.ball.vel.y, vy);
        }

        #[test]
        fn prop_bounce_magnitude_equals_speed(
            y in 145.0f32..255.0,
            speed in 5.0f32..20.0,
        ) {
            let field = Field::default();
            let paddle = Paddle::new(Side::User, field);
            let mut ball = Ball::new(field);
            ball.pos = Vec2::new(35.0, y);
            ball.speed = speed;

            bounce_off_paddle(&mut ball, &paddle, field);

            let diff = (ball.vel.length_squared() - speed * speed).abs();
            prop_assert!(diff < 1e-3 * speed * speed);
            prop_assert!((ball.speed - (speed + 0.5)).abs() < EPS);
        }
    }
}
