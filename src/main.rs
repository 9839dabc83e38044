mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
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
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ink_reef::assets::{spawn_loader, SpriteSheet};
use ink_reef::compute::{confirm, tick};
use ink_reef::config::GameConfig;
use ink_reef::entities::GameSession;
use ink_reef::input::{Command, KeyState};

#[derive(Parser)]
#[command(name = "ink_reef")]
#[command(about = "Swim, ink the oranges, collect the slices, clear five levels")]
struct Args {
    /// JSON config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Override the configured frame rate
    #[arg(long)]
    fps: Option<u32>,
    /// Where log output goes; the terminal belongs to the game
    #[arg(long, default_value = "ink_reef.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(fps) = args.fps {
        config.fps = fps;
        config.validate()?;
    }
    Ok(config)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One frame per iteration, whatever the status: the tick itself is inert
/// outside of gameplay, so the title and game-over screens just keep drawing.
fn game_loop<W: Write>(
    out: &mut W,
    config: GameConfig,
    rng: &mut StdRng,
    events: &mpsc::Receiver<Event>,
) -> Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / config.fps as f64);
    let sprite_rx = spawn_loader(PathBuf::from(&config.assets_dir));
    let mut sprites = SpriteSheet::new();
    let mut state = GameSession::new(config);
    let mut keys = KeyState::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let frame = state.frame + 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = events.try_recv() {
            if let Event::Key(key) = ev {
                match keys.handle(&key, frame) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Confirm) => state = confirm(&state, rng),
                    None => {}
                }
            }
        }

        let dt = frame_start.duration_since(last);
        last = frame_start;
        let input = keys.sample(frame, dt);
        state = tick(&state, &input, rng);

        sprites.poll(&sprite_rx);
        display::render(out, &state, &sprites)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    let config = load_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, ?config, "starting");

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key-release events. Terminals without the kitty protocol
    // ignore this and fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // A dedicated thread does the blocking reads so the frame loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, config, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}
