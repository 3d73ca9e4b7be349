//! Sound cues for simulation events
//!
//! The simulation only reports what happened. This module turns those
//! events into procedural tone descriptions and hands them to whatever
//! `AudioSink` the host provides (Web Audio, a native mixer, a log).

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{GameEvent, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Player won a point
    PlayerScore,
    /// AI won a point
    OpponentScore,
    /// Player won the match
    Victory,
    /// AI won the match
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One oscillator burst with an exponential fade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub waveform: Waveform,
    /// Hz at the start of the tone
    pub freq_start: f32,
    /// Hz at the end (equal to start for a flat pitch)
    pub freq_end: f32,
    /// Peak gain before volume scaling
    pub gain: f32,
    /// Seconds after the cue starts
    pub delay: f32,
    pub duration: f32,
}

impl Tone {
    const fn flat(waveform: Waveform, freq: f32, gain: f32, delay: f32, duration: f32) -> Self {
        Self {
            waveform,
            freq_start: freq,
            freq_end: freq,
            gain,
            delay,
            duration,
        }
    }
}

const PADDLE_HIT: &[Tone] = &[Tone {
    waveform: Waveform::Sine,
    freq_start: 150.0,
    freq_end: 60.0,
    gain: 0.6,
    delay: 0.0,
    duration: 0.15,
}];

const WALL_HIT: &[Tone] = &[Tone::flat(Waveform::Sine, 400.0, 0.3, 0.0, 0.1)];

const PLAYER_SCORE: &[Tone] = &[
    Tone::flat(Waveform::Triangle, 600.0, 0.3, 0.0, 0.12),
    Tone::flat(Waveform::Triangle, 900.0, 0.3, 0.1, 0.15),
];

const OPPONENT_SCORE: &[Tone] = &[Tone {
    waveform: Waveform::Sawtooth,
    freq_start: 300.0,
    freq_end: 120.0,
    gain: 0.25,
    delay: 0.0,
    duration: 0.3,
}];

const VICTORY: &[Tone] = &[
    Tone::flat(Waveform::Triangle, 500.0, 0.25, 0.0, 0.3),
    Tone::flat(Waveform::Triangle, 600.0, 0.25, 0.08, 0.3),
    Tone::flat(Waveform::Triangle, 700.0, 0.25, 0.16, 0.3),
    Tone::flat(Waveform::Triangle, 800.0, 0.25, 0.24, 0.3),
    Tone::flat(Waveform::Triangle, 1000.0, 0.25, 0.32, 0.3),
];

const GAME_OVER: &[Tone] = &[
    Tone::flat(Waveform::Sine, 400.0, 0.3, 0.0, 0.4),
    Tone::flat(Waveform::Sine, 350.0, 0.3, 0.2, 0.4),
    Tone::flat(Waveform::Sine, 300.0, 0.3, 0.4, 0.4),
    Tone::flat(Waveform::Sine, 200.0, 0.3, 0.6, 0.4),
];

impl SoundEffect {
    pub fn from_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::WallHit => SoundEffect::WallHit,
            GameEvent::PaddleHit(_) => SoundEffect::PaddleHit,
            GameEvent::Scored(Side::Left) => SoundEffect::PlayerScore,
            GameEvent::Scored(Side::Right) => SoundEffect::OpponentScore,
            GameEvent::GameOver { winner: Side::Left } => SoundEffect::Victory,
            GameEvent::GameOver { winner: Side::Right } => SoundEffect::GameOver,
        }
    }

    /// Tones making up this effect
    pub fn cue(self) -> &'static [Tone] {
        match self {
            SoundEffect::PaddleHit => PADDLE_HIT,
            SoundEffect::WallHit => WALL_HIT,
            SoundEffect::PlayerScore => PLAYER_SCORE,
            SoundEffect::OpponentScore => OPPONENT_SCORE,
            SoundEffect::Victory => VICTORY,
            SoundEffect::GameOver => GAME_OVER,
        }
    }
}

/// Something that can actually make noise
pub trait AudioSink {
    /// Fire and forget; `volume` is already scaled by the mixer
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Volume and mute state between the simulation and a sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioMixer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Forward one tick's events to the sink. Returns how many were played.
    pub fn dispatch<S: AudioSink + ?Sized>(&self, events: &[GameEvent], sink: &mut S) -> usize {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return 0;
        }
        for event in events {
            sink.play(SoundEffect::from_event(event), vol);
        }
        events.len()
    }
}
