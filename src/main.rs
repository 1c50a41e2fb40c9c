use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dino_run::build_info;
use dino_run::input::InputCollector;
use dino_run::ui::{draw_frame, viewport::Viewport};
use dino_run::utils::logging::init_logging;
use dino_run::utils::persistence::{init_config_file, load_config};
use dino_run::{GameConfig, ScreenManager};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Options for a normal run.
#[derive(Debug, Default, PartialEq)]
struct RunOptions {
    config: Option<PathBuf>,
    debug_bounds: bool,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(RunOptions),
    InitConfig,
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--init-config" => return Ok(Command::InitConfig),
            "--debug-bounds" => options.debug_bounds = true,
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}

fn print_help() {
    println!("Dino Run - jump the cacti, survive as long as you can\n");
    println!("Usage: dino-run [options]\n");
    println!("Options:");
    println!("  --config <path>  Load settings from a JSON file");
    println!("  --debug-bounds   Outline cactus hitboxes");
    println!("  --seed <n>       Fixed seed for the cactus sequence");
    println!("  --init-config    Write the default config to ~/.dino-run/config.json");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nSet RUST_LOG (e.g. RUST_LOG=debug) to log to ~/.dino-run/dino-run.log");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'dino-run --help' for usage.");
            std::process::exit(1);
        }
    };

    let result = match command {
        Command::Version => {
            println!("{}", build_info::version_line());
            Ok(())
        }
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::InitConfig => init_config(),
        Command::Run(options) => run(options),
    };

    if let Err(e) = result {
        eprintln!("dino-run: {}", e);
        std::process::exit(1);
    }
}

fn init_config() -> io::Result<()> {
    let (path, written) = init_config_file()?;
    if written {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}

fn run(options: RunOptions) -> io::Result<()> {
    init_logging()?;

    let mut config = load_config(options.config.as_deref())?;
    if options.debug_bounds {
        config.debug_bounds = true;
    }
    log::info!(
        "starting {} (seed {:?}, debug bounds {})",
        build_info::version_line(),
        options.seed,
        config.debug_bounds
    );

    let mut terminal = setup_terminal()?;
    let result = game_loop(&mut terminal, config, options.seed);
    let restored = restore_terminal(&mut terminal);

    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    result.and(restored)
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = stdout
        .execute(EnterAlternateScreen)
        .and_then(|out| out.execute(EnableMouseCapture))
    {
        let _ = reset_terminal_modes(&mut io::stdout());
        return Err(e);
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = reset_terminal_modes(&mut io::stdout());
        e
    })
}

/// Leave raw mode, mouse capture and the alternate screen. Every step runs;
/// the first failure is returned.
fn reset_terminal_modes<W: Write>(out: &mut W) -> io::Result<()> {
    let steps = [
        disable_raw_mode(),
        out.execute(DisableMouseCapture).map(|_| ()),
        out.execute(LeaveAlternateScreen).map(|_| ()),
    ];
    steps.into_iter().collect()
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    let modes = reset_terminal_modes(terminal.backend_mut());
    let cursor = terminal.show_cursor();
    modes.and(cursor)
}

fn game_loop(terminal: &mut Tui, config: GameConfig, seed: Option<u64>) -> io::Result<()> {
    let frame_duration = config.frame_duration();
    let max_dt = config.max_frame_dt;

    let mut manager = ScreenManager::new(config, seed);
    let mut collector = InputCollector::new();
    let mut viewport: Option<Viewport> = None;
    let mut last_frame = Instant::now();

    while !collector.quit_requested() {
        let frame_start = Instant::now();
        let dt = frame_start
            .duration_since(last_frame)
            .as_secs_f64()
            .min(max_dt);
        last_frame = frame_start;

        let input = collector.take();
        terminal.draw(|f| viewport = draw_frame(f, &mut manager, dt, &input))?;

        // Collect input until the next frame is due
        let deadline = frame_start + frame_duration;
        while !collector.quit_requested() {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            let ev = event::read()?;
            collector.handle_event(&ev, |column, row| {
                viewport.and_then(|v| v.to_world(column, row))
            });
        }
    }

    log::info!("quit requested");
    manager.dispose();
    Ok(())
}
