//! Duel Pong headless driver
//!
//! Runs an attract-mode match (AI on both sides) against a synthetic 60 Hz
//! frame clock and logs every event. Set `RUST_LOG=debug` to see paddle hits.

#[cfg(not(target_arch = "wasm32"))]
use duel_pong::audio::{AudioMixer, AudioSink, SoundEffect};

/// Logs cues instead of playing them
#[cfg(not(target_arch = "wasm32"))]
struct LogSink;

#[cfg(not(target_arch = "wasm32"))]
impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {effect:?} ({} tones, vol {volume:.2})", effect.cue().len());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use duel_pong::Settings;
    use duel_pong::clock::FrameClock;
    use duel_pong::input::InputState;
    use duel_pong::sim::{GameEvent, Match, MatchStatus, Side};

    env_logger::init();
    log::info!("Duel Pong (headless) starting...");

    let settings = Settings {
        demo_mode: true,
        ..Default::default()
    };
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut game = match Match::new(800.0, 400.0, settings, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start match: {e}");
            std::process::exit(1);
        }
    };

    let mixer = AudioMixer::from_settings(game.settings());
    let mut sink = LogSink;
    let mut clock = FrameClock::new(game.settings().max_dt);
    let mut input = InputState::new();

    let frame_ms = 1000.0 / 60.0;
    let mut now_ms = 0.0;
    // Ten simulated minutes at most
    for frame in 0..36_000u32 {
        // A background-tab stall every so often; the clock caps it
        now_ms += if frame % 1800 == 1799 { 750.0 } else { frame_ms };
        let dt = clock.advance(now_ms);

        let center = game.paddle(Side::Left).center_y();
        let tick_input = input.take_tick_input(center);
        let result = game.update(dt, &tick_input);
        mixer.dispatch(&result.events, &mut sink);

        for event in &result.events {
            if let GameEvent::GameOver { winner } = event {
                log::info!(
                    "{winner:?} wins after {} ticks ({} fps)",
                    game.ticks(),
                    clock.fps()
                );
            }
        }
        if result.snapshot.status == MatchStatus::GameOver {
            break;
        }
    }

    let snap = game.snapshot();
    println!(
        "Final score: {} - {} ({:?})",
        snap.player_score, snap.ai_score, snap.status
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `Match::update` from their own frame callback
}
