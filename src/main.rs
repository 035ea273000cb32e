//! Headless runner
//!
//! Drives the full screen flow (menu, game, score screen) with scripted
//! input, then quits. Frames are timed on a simulated 60 Hz clock; pass
//! `--realtime` to pace them on the wall clock instead. Rendering, audio and
//! real input live in front-ends.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use spiral_dash::clock::FrameClock;
use spiral_dash::consts::FRAME_RATE;
use spiral_dash::hud::FixedAssets;
use spiral_dash::player::ScriptedPlayer;
use spiral_dash::screen::{App, Flow, Screen};
use spiral_dash::signals::{AudioSignal, Signals, SoundCue, SparkDensity};
use spiral_dash::{ConfigError, Difficulty, HighScores, Settings};

/// Audio sink that logs cues
struct LogAudio;

impl AudioSignal for LogAudio {
    fn cue(&mut self, cue: SoundCue) {
        log::debug!("audio: {}", cue.asset_name());
    }
}

fn run(realtime: bool) -> Result<(), ConfigError> {
    let settings = Settings::load(Path::new(Settings::DEFAULT_PATH))?;
    settings.validate()?;
    let high_scores = HighScores::load(HighScores::DEFAULT_PATH);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut app = App::new(settings, Box::new(FixedAssets::default()), high_scores, seed);
    let mut player = ScriptedPlayer::new(Difficulty::Hard);
    let mut clock = FrameClock::new();
    let mut audio = LogAudio;
    let mut sparks = SparkDensity::new();

    let frame = Duration::from_secs(1) / FRAME_RATE;
    let mut now = Instant::now();
    clock.tick_at(now);

    let mut frames = 0u64;
    loop {
        let events = player.events(app.screen());
        let dt = if realtime {
            std::thread::sleep(frame);
            clock.tick()
        } else {
            now += frame;
            clock.tick_at(now)
        };
        if app.step(&events, dt, Signals::new(&mut audio, &mut sparks)) == Flow::Exit {
            break;
        }
        frames += 1;

        if let Screen::ScoreDisplay(score) = app.screen() {
            match score.rank {
                Some(rank) => println!("Score {} (rank {})", score.score, rank),
                None => println!("Score {}", score.score),
            }
        }
    }

    log::info!("Run finished after {} frames", frames);
    println!("High scores: {:?}", app.high_scores().top_scores());
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Spiral Dash (headless) starting...");

    let realtime = std::env::args().skip(1).any(|arg| arg == "--realtime");
    if let Err(err) = run(realtime) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
