//! rocksynth - preview the game's procedural sounds
//!
//! # Usage
//!
//! ```bash
//! rocksynth laser
//! rocksynth all --seed 7
//! rocksynth music --seconds 20
//! rocksynth all --wav out/
//! ```
//!
//! Set `RUST_LOG=debug` to see every rendered buffer.

mod device;
mod export;

use std::{path::PathBuf, sync::Arc, thread, time::Duration};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rocksynth::{
    playback::{PlaybackDevice, SoundBoard},
    synthesize_background_score, synthesize_seeded, ChordProgression, Effect, Recipe, RecipeKind,
    ScoreConfig, SoundBank, SynthConfig,
};

use device::CpalDevice;

#[derive(Parser)]
#[command(name = "rocksynth")]
#[command(version, about = "Preview procedural arcade sound effects and music")]
struct Args {
    /// Recipe name (laser, explosion, thrust, tone, tone-sweep,
    /// shield-activate, coin-collect, powerup), `all` or `music`
    sound: String,

    /// Write 16-bit WAV files into this directory instead of playing
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Seed for the noise layers (random if omitted)
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Seconds of music to play or export
    #[arg(long, default_value_t = ScoreConfig::LOOP_SECONDS)]
    seconds: f64,
}

enum Target {
    Recipe(RecipeKind),
    All,
    Music,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let target = match args.sound.as_str() {
        "all" => Target::All,
        "music" => Target::Music,
        name => Target::Recipe(name.parse()?),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "using seed");

    match args.wav {
        Some(dir) => export_target(&target, &dir, seed, args.seconds),
        None => play_target(&target, seed, args.seconds),
    }
}

fn export_target(target: &Target, dir: &std::path::Path, seed: u64, seconds: f64) -> Result<()> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    let config = SynthConfig::default();

    match target {
        Target::Recipe(kind) => {
            let buffer = synthesize_seeded(&Recipe::from(*kind), &config, seed)?;
            export::write_wav(&dir.join(format!("{kind}.wav")), &buffer)?;
        }
        Target::All => {
            let bank = SoundBank::build(&config, seed)?;
            for (effect, buffer) in bank.iter() {
                export::write_wav(&dir.join(format!("{effect}.wav")), buffer)?;
            }
        }
        Target::Music => {
            let mut rng = Pcg64::seed_from_u64(seed);
            let buffer = synthesize_background_score(
                &ChordProgression::a_minor(),
                seconds,
                &ScoreConfig::default(),
                &config,
                &mut rng,
            )?;
            export::write_wav(&dir.join("music.wav"), &buffer)?;
        }
    }
    Ok(())
}

fn play_target(target: &Target, seed: u64, seconds: f64) -> Result<()> {
    let mut device = CpalDevice::open().wrap_err("failed to open audio output")?;
    // Render at the device rate so no resampling is needed.
    let config = SynthConfig::with_sample_rate(device.sample_rate());
    info!(sample_rate = config.sample_rate, "audio output ready");

    match target {
        Target::Recipe(kind) => {
            let buffer = synthesize_seeded(&Recipe::from(*kind), &config, seed)?;
            let length = buffer.duration();
            device.play(Arc::new(buffer), 0.7, false)?;
            thread::sleep(length + Duration::from_millis(200));
        }
        Target::All => {
            let mut board = SoundBoard::build(device, &config, &ScoreConfig::default(), seed)?;
            for effect in Effect::ALL {
                info!(%effect, "playing");
                let length = board.bank().get(effect).duration();
                board.play(effect);
                thread::sleep(length + Duration::from_millis(400));
            }
        }
        Target::Music => {
            let mut board = SoundBoard::build(device, &config, &ScoreConfig::default(), seed)?;
            board.start_music();
            thread::sleep(Duration::from_secs_f64(seconds.max(0.0)));
            board.stop_music();
        }
    }
    Ok(())
}

