use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::info;

use clockface::{ClockCommand, ClockFace, ClockFaceConfig, ClockTime};

/// Analog clock face in a window.
#[derive(Debug, Parser)]
#[command(name = "clockface", version, about = "Analog clock face widget")]
struct Args {
    /// Window title
    #[arg(long)]
    title: Option<String>,
    /// Window width in logical pixels
    #[arg(long)]
    width: Option<usize>,
    /// Window height in logical pixels
    #[arg(long)]
    height: Option<usize>,
    /// Redraw cap in frames per second
    #[arg(long)]
    fps: Option<f64>,
    /// Path to a TOML style file
    #[arg(long)]
    style: Option<PathBuf>,
    /// Interval of the time ticker in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.style {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read style file {}", path.display()))?;
            ClockFaceConfig::from_toml_str(&text)
                .with_context(|| format!("cannot parse style file {}", path.display()))?
        }
        None => ClockFaceConfig::default(),
    };
    if let Some(title) = args.title {
        config.title = title;
    }
    if let Some(width) = args.width {
        config.window_width = width;
    }
    if let Some(height) = args.height {
        config.window_height = height;
    }
    if let Some(fps) = args.fps {
        config.max_framerate = fps;
    }

    // The ticker snapshots the wall clock and hands it to the render loop
    // over the channel. Once the window closes the receiver is gone and the
    // failed send stops the thread.
    let (sender, receiver) = mpsc::channel();
    let tick = Duration::from_millis(args.tick_ms);
    thread::spawn(move || loop {
        if sender.send(ClockCommand::SetTime(ClockTime::now())).is_err() {
            break;
        }
        thread::sleep(tick);
    });

    info!("starting clock, tick interval {:?}", tick);
    ClockFace::new(config).show_with_ticker(receiver)?;
    Ok(())
}
