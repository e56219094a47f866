//! fart - render and play random voices
//!
//! Run with: cargo run --bin fart
//!
//! Each line on stdin plays one sound. An empty line uses the default
//! ranges; `quick`, `long`, `wet` or `squeaky` pick a preset. `q` quits.

mod playback;

use std::io::{self, BufRead, Write};

use color_eyre::eyre::Result as EyreResult;
use fart_machine::{Preset, SynthConfig, VoiceRenderer};
use playback::Playback;

fn main() -> EyreResult<()> {
    env_logger::init();
    color_eyre::install()?;

    let mut playback = Playback::open()?;
    let renderer = VoiceRenderer::new(SynthConfig::default().with_sample_rate(playback.sample_rate()));
    let mut rng = rand::thread_rng();

    let names: Vec<&str> = Preset::ALL.iter().map(Preset::name).collect();
    println!("=== fart machine ===");
    println!("Enter to play, or one of: {} (q to quit)", names.join(", "));

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let preset: Preset = match line.parse() {
            Ok(preset) => preset,
            Err(err) => {
                eprintln!("{}", err);
                prompt()?;
                continue;
            }
        };

        let params = preset.ranges().resolve(&mut rng);
        log::info!("{}: {:?}", preset.name(), params);

        match renderer.render(&params) {
            Ok(samples) => {
                let dropped = playback.queue(&samples);
                if dropped > 0 {
                    log::warn!("queue full, dropped {} samples", dropped);
                }
                println!(
                    "{} at {:.0} Hz for {:.2}s",
                    preset.name(),
                    params.frequency,
                    params.duration
                );
            }
            Err(err) => eprintln!("render failed: {}", err),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
