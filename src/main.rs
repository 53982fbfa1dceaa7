use std::io;
use std::panic;
use std::process;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use led_snake::board::FrameBuffer;
use led_snake::config::{
    BOARD_HEIGHT, BOARD_WIDTH, BoardSize, ConfigError, DEFAULT_SEED, DEFAULT_TICK_INTERVAL_MS,
    Settings,
};
use led_snake::game::{Game, GameStatus};
use led_snake::input::InputHandler;
use led_snake::renderer;
use led_snake::terminal_runtime::{BoardTerminal, TerminalSession, restore_terminal};

/// Sleep between frames; input stays responsive while ticks run slower.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "led-snake", version, about)]
struct Cli {
    /// Seed for the apple-placement RNG.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Gameplay tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Board width in pixels.
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: i32,

    /// Board height in pixels.
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: i32,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = match settings_from(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("led-snake: {error}");
            process::exit(2);
        }
    };

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), settings)
}

fn settings_from(cli: &Cli) -> Result<Settings, ConfigError> {
    let size = BoardSize::new(cli.width, cli.height)?;
    Settings::new(size, cli.seed, cli.tick_ms)
}

fn run(terminal: &mut BoardTerminal, settings: Settings) -> io::Result<()> {
    let mut game = Game::new(settings.size, settings.seed);
    let mut display = FrameBuffer::new(settings.size);
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &display, game.status))?;

        input.pump()?;
        if input.quit_requested() {
            return Ok(());
        }

        match game.status {
            GameStatus::Playing => {
                if last_tick.elapsed() >= settings.tick_interval {
                    game.tick(&mut display, input.take_sample().pad);
                    last_tick = Instant::now();
                }
            }
            GameStatus::GameOver => {
                // Idle until the restart switch reads asserted.
                if input.take_sample().restart {
                    game.restart(&mut display);
                    last_tick = Instant::now();
                }
            }
        }

        thread::sleep(FRAME_SLEEP);
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
