mod display;

use std::fs::File;
use std::io::{self, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{cursor, terminal, ExecutableCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use term_invaders::config::{Settings, BOMB_PROBABILITY, TICK_INTERVAL};
use term_invaders::entities::Outcome;
use term_invaders::game::run_game;
use term_invaders::input::{spawn_input, TerminalKeys};

use display::TerminalScreen;

/// Space invaders in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seed for the bomb RNG; omit for a different game every time.
    #[arg(long)]
    seed: Option<u64>,

    /// Chance per alien per frame of dropping a bomb.
    #[arg(long, default_value_t = BOMB_PROBABILITY)]
    bomb_probability: f64,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = TICK_INTERVAL.as_millis() as u64)]
    tick_ms: u64,

    /// Let the cannon leave the screen.
    #[arg(long)]
    no_clamp: bool,

    /// Where to write logs.  The terminal belongs to the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            bomb_probability: self.bomb_probability,
            tick_interval: Duration::from_millis(self.tick_ms),
            clamp_cannon: !self.no_clamp,
            ..Settings::default()
        }
    }
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    std::panic::set_hook(Box::new(|info| {
        restore_terminal();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        eprintln!("{info}");
    }));
    Ok(())
}

fn restore_terminal() {
    let mut out = stdout();
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Restores the terminal when dropped, so every exit after raw mode is on
/// leaves the shell usable.
struct TerminalGuard {
    restore: fn(),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Raw mode, alternate screen, hidden cursor.  A failure part way through
/// undoes whatever already took effect.
fn enter_terminal<W: Write>(
    out: &mut W,
    enable_raw_mode: fn() -> io::Result<()>,
    restore: fn(),
) -> anyhow::Result<TerminalGuard> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let guard = TerminalGuard { restore };
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter the alternate screen")?;
    out.execute(cursor::Hide)
        .context("failed to hide the cursor")?;
    Ok(guard)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings();
    settings.validate().context("invalid settings")?;

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("term_invaders.log"));
    init_tracing(&log_path)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, ?settings, "starting");

    let mut out = BufWriter::new(stdout());
    let terminal_guard = enter_terminal(&mut out, terminal::enable_raw_mode, restore_terminal)?;

    // Dedicate a thread exclusively to blocking key reads, feeding a bounded
    // queue so the game loop never has to block on I/O.
    let input = spawn_input(TerminalKeys, settings.input_capacity);

    let mut screen = TerminalScreen::new(out, settings.world);
    let result = run_game(&mut screen, &input, &settings, &mut rng);
    drop(screen);

    // Restore before reporting anything
    drop(terminal_guard);

    let state = result?;
    let verdict = match state.outcome {
        Some(Outcome::Cleared) => "YOU WIN!",
        _ => "GAME OVER!",
    };
    println!("\n{verdict}\nFinal score: {}", state.score);
    Ok(())
}
