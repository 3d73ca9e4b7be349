//! Per-frame simulation step
//!
//! Order within a tick matters: paddles move first so the ball is checked
//! against where they are now, then the ball, then collisions, then scoring.

use super::control::ControlContext;
use super::paddle::Side;
use super::state::{GameEvent, Match, MatchStatus, TickInput, TickResult};
use crate::clamp_dt;

impl Match {
    /// Advance the match by `elapsed` seconds of wall-clock time
    pub fn update(&mut self, elapsed: f32, input: &TickInput) -> TickResult {
        let mut events = Vec::new();

        match self.status {
            MatchStatus::Playing => {
                let dt = clamp_dt(elapsed, self.settings.max_dt);
                self.ticks += 1;
                self.step(dt, input, &mut events);
            }
            MatchStatus::GameOver => {
                if input.restart || input.pointer_active {
                    log::info!("Restarting match");
                    self.reset();
                }
            }
        }

        TickResult {
            events,
            snapshot: self.snapshot(),
        }
    }

    fn step(&mut self, dt: f32, input: &TickInput, events: &mut Vec<GameEvent>) {
        // Paddles
        let ctx = ControlContext {
            input_direction: input.direction,
            ball: &self.ball,
            canvas_height: self.height,
        };
        self.player.update(dt, &ctx);
        self.ai.update(dt, &ctx);

        // Ball
        self.ball.update(dt);

        // Collisions. Both paddles are checked every tick, even right after a hit.
        if self.ball.check_wall_collision(self.height) {
            events.push(GameEvent::WallHit);
        }
        for side in [Side::Left, Side::Right] {
            let paddle = match side {
                Side::Left => &self.player,
                Side::Right => &self.ai,
            };
            if let Some(hit) = self.ball.check_paddle_collision(paddle) {
                self.ball.apply_paddle_hit(hit);
                log::debug!(
                    "{side:?} paddle hit at {hit:.2}, ball speed now {:.1}",
                    self.ball.speed()
                );
                events.push(GameEvent::PaddleHit(side));
            }
        }

        // Scoring
        let bounds = self.ball.bounds();
        let scorer = if bounds.right < 0.0 {
            Some(Side::Right)
        } else if bounds.left > self.width {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(scorer) = scorer {
            match scorer {
                Side::Left => self.player_score += 1,
                Side::Right => self.ai_score += 1,
            }
            log::info!(
                "{scorer:?} scores ({} - {})",
                self.player_score,
                self.ai_score
            );
            events.push(GameEvent::Scored(scorer));
            self.serve();
            self.check_win(events);
        }
    }

    fn check_win(&mut self, events: &mut Vec<GameEvent>) {
        let target = self.settings.target_score;
        let winner = if self.player_score >= target {
            Side::Left
        } else if self.ai_score >= target {
            Side::Right
        } else {
            return;
        };

        self.status = MatchStatus::GameOver;
        log::info!(
            "Game over: {winner:?} wins {} - {}",
            self.player_score,
            self.ai_score
        );
        events.push(GameEvent::GameOver { winner });
    }
}
