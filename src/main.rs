mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use as2d::assets::{Catalog, Sprites};
use as2d::compute::{init_state, tick};
use as2d::config::{GameConfig, LogConfig};
use as2d::input::KeyTracker;

/// Longest step fed to the simulation; a stalled terminal must not teleport
/// everything across the field.
const MAX_STEP: f32 = 0.25;

/// Read from the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "as2d.toml";

/// How often the FPS readout refreshes, in seconds.
const FPS_INTERVAL: f32 = 1.0;

#[derive(Parser)]
#[command(name = "as2d")]
#[command(about = "Descend, dodge and shoot down every bouncing sphere")]
struct Args {
    /// TOML config file [default: ./as2d.toml, built-in values if absent]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── FPS readout ───────────────────────────────────────────────────────────────

struct FpsCounter {
    frames: u32,
    elapsed: f32,
    value: f32,
}

impl FpsCounter {
    fn new() -> Self {
        FpsCounter {
            frames: 0,
            elapsed: 0.0,
            value: 0.0,
        }
    }

    fn record(&mut self, dt: f32) {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed >= FPS_INTERVAL {
            self.value = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }
}

// ── Start-up ──────────────────────────────────────────────────────────────────

/// An explicit `--config` must load; the default file is optional, and the
/// reason it was skipped is handed back for the log.
fn load_config(args: &Args) -> Result<(GameConfig, Option<String>)> {
    let (mut config, skipped) = match &args.config {
        Some(path) => {
            let config = GameConfig::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config, None)
        }
        None => GameConfig::load_or_default(DEFAULT_CONFIG),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.log_file.is_some() {
        config.log.file = args.log_file.clone();
    }

    let problems = config.validate();
    if !problems.is_empty() {
        bail!("invalid configuration:\n  {}", problems.join("\n  "));
    }
    Ok((config, skipped))
}

/// Logs go to a file only; the terminal belongs to the game.
fn init_logging(log: &LogConfig) -> Result<()> {
    let Some(path) = &log.file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. After the game ends the final frame (with
/// its banner) stays on screen until then.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    sprites: Sprites,
    rng: &mut impl Rng,
) -> Result<()> {
    let mut state = init_state(config, sprites, rng);
    let mut keys = KeyTracker::default();
    let mut fps = FpsCounter::new();
    let frame_budget = Duration::from_secs_f64(1.0 / config.window.frame_rate as f64);
    let mut last_tick = Instant::now();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Input ─────────────────────────────────────────────────────────────
        while let Ok(event) = rx.try_recv() {
            if let Event::Key(key) = event {
                keys.handle(&key, frame);
            }
        }
        if keys.quit_requested() {
            info!(level = state.level, frame, "quit requested");
            return Ok(());
        }
        let input = keys.snapshot(frame);

        let dt = last_tick.elapsed().as_secs_f32().min(MAX_STEP);
        last_tick = Instant::now();
        state = tick(&state, &input, dt, rng);
        fps.record(dt);

        display::render(out, &state, fps.value, terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, skipped) = load_config(&args)?;
    init_logging(&config.log)?;
    if let Some(reason) = skipped {
        debug!(path = DEFAULT_CONFIG, %reason, "using built-in config");
    }

    let sprites = Sprites::load(&Catalog::builtin()).context("failed to resolve game assets")?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?config.seed, width = config.window.width, height = config.window.height, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Release events let held keys drop out at once; terminals without the
    // kitty protocol fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread; the loop only polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // game loop gone
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config, sprites, &mut rng);

    // Restore the terminal even when the loop failed.
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
