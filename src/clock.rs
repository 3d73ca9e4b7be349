//! Frame clock
//!
//! Turns the host's per-frame timestamps (milliseconds, as handed out by a
//! display-refresh callback) into clamped elapsed seconds for `Match::update`,
//! and keeps a rolling FPS figure for the HUD.

use crate::clamp_dt;

const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    max_dt: f32,
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Record a frame at `now_ms` and return seconds since the previous one.
    ///
    /// The first frame returns 0. Gaps longer than `max_dt` (background tab,
    /// debugger) are capped; clocks running backwards yield 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => clamp_dt(((now_ms - last) / 1000.0) as f32, self.max_dt),
            None => 0.0,
        };
        if now_ms.is_finite() {
            self.last_time = Some(now_ms);
            self.track_fps(now_ms);
        }
        dt
    }

    fn track_fps(&mut self, now_ms: f64) {
        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen = (self.frames_seen + 1).min(FPS_WINDOW);

        // Oldest sample in the window
        let oldest_idx = if self.frames_seen < FPS_WINDOW {
            0
        } else {
            self.frame_index
        };
        let elapsed = now_ms - self.frame_times[oldest_idx];
        if self.frames_seen > 1 && elapsed > 0.0 {
            let intervals = (self.frames_seen - 1) as f64;
            self.fps = (intervals * 1000.0 / elapsed).round() as u32;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Forget the previous frame (e.g. after the host loop was stopped)
    pub fn reset(&mut self) {
        *self = Self::new(self.max_dt);
    }
}
