//! Entry point for the **wortuhr** terminal clock.
//!
//! Runs a [`TickSource`](wortuhr::traits::TickSource) on a background
//! thread and updates and redraws the clock on the main thread for every
//! tick it delivers.
//!
//! ```text
//! wortuhr [--once] [--at HH:MM] [--config <path>]
//! ```

use chrono::Local;
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::mpsc;
use wortuhr::clock::{Tick, WordClock};
use wortuhr::config::Config;
use wortuhr::terminal::surface::AnsiSurface;
use wortuhr::terminal::ticker::{FixedTicks, MinuteTicker};
use wortuhr::traits::TickSource;

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    once: bool,
    at: Option<Tick>,
    config: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--once" => parsed.once = true,
            "--at" => {
                let value = args.next().ok_or("--at needs a time (HH:MM)")?;
                parsed.at = Some(Tick::parse(&value).map_err(|e| e.to_string())?);
            }
            "--config" => {
                let value = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }
    Ok(parsed)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/wortuhr`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("wortuhr")
}

/// Load the config from an explicit path, or try
/// `$XDG_CONFIG_HOME/wortuhr/config.json` and fall back to defaults.
fn load_config(explicit: Option<PathBuf>) -> Result<Config, String> {
    if let Some(path) = explicit {
        let cfg = Config::load(&path).map_err(|e| e.to_string())?;
        info!("loaded config from {}", path.display());
        return Ok(cfg);
    }
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

//  Main

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: wortuhr [--once] [--at HH:MM] [--config <path>]");
            std::process::exit(2);
        }
    };

    let config = match load_config(args.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let seed = Local::now().timestamp().unsigned_abs();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut clock = match WordClock::swiss_german(config.layout.clone(), &mut rng) {
        Ok(c) => c,
        Err(e) => {
            error!("clock face failed its self-check: {}", e);
            std::process::exit(1);
        }
    };

    let (tick_tx, tick_rx) = mpsc::channel::<Tick>();
    match (args.at, args.once) {
        (Some(tick), _) => spawn_tick_source(FixedTicks::new([tick]), tick_tx),
        (None, true) => spawn_tick_source(FixedTicks::now(), tick_tx),
        (None, false) => spawn_tick_source(MinuteTicker::new(), tick_tx),
    }

    let mut surface = AnsiSurface::new(std::io::stdout(), config.terminal.clone(), &config.layout);
    run_event_loop(&mut clock, &mut surface, tick_rx);
}

//  Event loop

/// Update for every tick and redraw when the face changed, until the
/// source hangs up.
fn run_event_loop(
    clock: &mut WordClock,
    surface: &mut AnsiSurface<std::io::Stdout>,
    ticks: mpsc::Receiver<Tick>,
) {
    info!("wortuhr running");
    for tick in ticks {
        if let Err(e) = clock.handle(tick) {
            warn!("ignoring tick {:?}: {}", tick, e);
            continue;
        }
        match clock.render_if_dirty(surface) {
            Ok(true) => {}
            Ok(false) => debug!("face unchanged, not redrawing"),
            Err(e) => error!("render failed: {}", e),
        }
    }
    info!("tick source closed, exiting");
}

//  Helpers

fn spawn_tick_source<T: TickSource + 'static>(mut source: T, tx: mpsc::Sender<Tick>) {
    std::thread::spawn(move || {
        if let Err(e) = source.run(tx) {
            error!("tick source error: {}", e);
        }
    });
}
