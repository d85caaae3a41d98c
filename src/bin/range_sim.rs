//! Headless range session.
//!
//! Loads a config (or the defaults), then plays a scripted input tape at a
//! fixed 60 Hz: walk a lap, and every so often turn toward the nearest target
//! and pull the trigger. Hits, misses and respawns go to the log.
//!
//! Usage: `range_sim [config.json] [--frames N] [--seed S]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shooting_range_engine::game::{RangeConfig, ShootingRange, ShotHit};
use shooting_range_engine::input::{InputHandler, KeyCode, MouseButton};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 600;
/// Frames between trigger pulls
const FIRE_EVERY: u64 = 40;

#[derive(Parser, Debug)]
#[command(name = "range_sim", version, about = "Headless shooting range session")]
struct Cli {
    /// JSON range config; stock layout when omitted
    config: Option<PathBuf>,
    /// Number of 60 Hz frames to simulate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u64,
    /// Arena seed, overriding the config
    #[arg(long)]
    seed: Option<u64>,
}

/// Movement key held during `frame`: a square lap, 1.5 s per side.
fn lap_key(frame: u64) -> KeyCode {
    match (frame / 90) % 4 {
        0 => KeyCode::W,
        1 => KeyCode::D,
        2 => KeyCode::S,
        _ => KeyCode::A,
    }
}

#[derive(Default)]
struct Tally {
    shots: u32,
    hits: u32,
    blocked: u32,
    misses: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match RangeConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => RangeConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.arena.seed = Some(seed);
    }

    let mut range = ShootingRange::new(config);
    let mut input = InputHandler::new();
    let mut tally = Tally::default();
    let mut held = None;

    log::info!("running {} frames at {:.0} Hz", cli.frames, 1.0 / FRAME_DT);

    for frame in 0..cli.frames {
        let key = lap_key(frame);
        if held != Some(key) {
            if let Some(previous) = held {
                input.handle_key(previous, false);
            }
            input.handle_key(key, true);
            held = Some(key);
        }

        let trigger = frame % FIRE_EVERY == FIRE_EVERY - 1;
        if trigger {
            let eye = range.eye();
            let nearest = range
                .targets()
                .iter()
                .min_by(|a, b| a.position.distance(eye).total_cmp(&b.position.distance(eye)))
                .map(|target| target.position);
            if let Some(aim) = nearest {
                range.player_mut().view_mut().look_at(aim);
            }
            input.handle_mouse_button(MouseButton::Left, true);
        }

        let report = range.tick(FRAME_DT, &input.take_snapshot());

        if trigger {
            input.handle_mouse_button(MouseButton::Left, false);
        }

        if let Some(shot) = report.shot {
            tally.shots += 1;
            match shot.hit {
                ShotHit::Target { id, placement } => {
                    tally.hits += 1;
                    log::info!(
                        "frame {frame}: hit {id}, respawned at {} after {} attempt(s)",
                        placement.position,
                        placement.attempts
                    );
                }
                ShotHit::Blocked(body) => {
                    tally.blocked += 1;
                    log::info!("frame {frame}: shot stopped by {body:?}");
                }
                ShotHit::Nothing => {
                    tally.misses += 1;
                    log::info!("frame {frame}: miss");
                }
            }
        }
    }

    log::info!(
        "done after {:.2}s: {} shots, {} hits, {} blocked, {} misses; player at {}",
        range.elapsed(),
        tally.shots,
        tally.hits,
        tally.blocked,
        tally.misses,
        range.player().position()
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["range_sim"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.frames, DEFAULT_FRAMES);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_parse_all() {
        let cli =
            Cli::try_parse_from(["range_sim", "range.json", "--frames", "120", "--seed", "9"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("range.json")));
        assert_eq!(cli.frames, 120);
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["range_sim", "--frames"]).is_err());
        assert!(Cli::try_parse_from(["range_sim", "--frames", "many"]).is_err());
        assert!(Cli::try_parse_from(["range_sim", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["range_sim", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lap_cycles_keys() {
        assert_eq!(lap_key(0), KeyCode::W);
        assert_eq!(lap_key(90), KeyCode::D);
        assert_eq!(lap_key(200), KeyCode::S);
        assert_eq!(lap_key(300), KeyCode::A);
        assert_eq!(lap_key(360), KeyCode::W);
    }
}
