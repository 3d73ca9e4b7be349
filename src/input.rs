//! Keyboard and pointer normalization
//!
//! Hosts feed raw key names and pointer positions in; once per frame they
//! take out a `TickInput` with a single direction for the player paddle.

use crate::sim::TickInput;

/// Pointer steering ignores offsets smaller than this (px)
pub const POINTER_DEAD_ZONE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Up,
    Down,
    Restart,
}

fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        " " | "Space" | "Enter" | "r" | "R" => Some(Key::Restart),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    up_held: bool,
    down_held: bool,
    /// Direction of the most recent key press, wins while both are held
    last_pressed: i8,
    /// Canvas y of an active pointer/touch
    pointer_y: Option<f32>,
    /// One-shot, cleared when read
    restart: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        match key_from_name(key) {
            Some(Key::Up) => {
                self.up_held = true;
                self.last_pressed = -1;
            }
            Some(Key::Down) => {
                self.down_held = true;
                self.last_pressed = 1;
            }
            Some(Key::Restart) => self.restart = true,
            None => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match key_from_name(key) {
            Some(Key::Up) => self.up_held = false,
            Some(Key::Down) => self.down_held = false,
            _ => {}
        }
    }

    /// Pointer pressed or touch started at canvas y
    pub fn pointer_down(&mut self, y: f32) {
        if y.is_finite() {
            self.pointer_y = Some(y);
        }
    }

    /// Only tracked while the pointer is down
    pub fn pointer_move(&mut self, y: f32) {
        if self.pointer_y.is_some() && y.is_finite() {
            self.pointer_y = Some(y);
        }
    }

    pub fn pointer_up(&mut self) {
        self.pointer_y = None;
    }

    /// Drop everything held (window lost focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn key_direction(&self) -> i8 {
        match (self.up_held, self.down_held) {
            (true, true) => self.last_pressed,
            (true, false) => -1,
            (false, true) => 1,
            (false, false) => 0,
        }
    }

    /// Input for the next tick. Pointer steering overrides keys.
    pub fn take_tick_input(&mut self, paddle_center_y: f32) -> TickInput {
        let direction = match self.pointer_y {
            Some(y) if y < paddle_center_y - POINTER_DEAD_ZONE => -1,
            Some(y) if y > paddle_center_y + POINTER_DEAD_ZONE => 1,
            Some(_) => 0,
            None => self.key_direction(),
        };

        TickInput {
            direction,
            restart: std::mem::take(&mut self.restart),
            pointer_active: self.pointer_y.is_some(),
        }
    }
}
