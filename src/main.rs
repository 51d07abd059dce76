use anyhow::{Context, Result as AnyhowResult};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use termfolio::app::App;
use termfolio::config::PortfolioConfig;
use termfolio::render::RenderStyle;
use termfolio::services::time_source::RealTimeSource;
use termfolio::services::tracing_setup;
use termfolio::view;

#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "An interactive terminal portfolio", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (default: the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Presentation style for the transcript
    #[arg(long, value_enum, default_value_t = StyleArg::Cards)]
    style: StyleArg,

    /// Disable reveal and blink animations
    #[arg(long)]
    no_animations: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    /// Rich blocks with metrics tables
    Cards,
    /// Flat log-line text
    Log,
}

impl From<StyleArg> for RenderStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Cards => RenderStyle::Cards,
            StyleArg::Log => RenderStyle::LogLines,
        }
    }
}

/// Restore the terminal no matter how we got here. Safe to call twice.
fn emergency_cleanup() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = PortfolioConfig::load_or_default(args.config.as_deref());
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("termfolio.log"));
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}", log_file.display());
    }
    tracing::info!("termfolio starting");

    let mut config = PortfolioConfig::load_or_default(args.config.as_deref());
    if let Err(e) = config.validate() {
        anyhow::bail!("Invalid configuration: {e}");
    }
    if args.no_animations {
        config.customization.animations.reduced_motion = true;
        config.customization.animations.cursor_blink = false;
    }

    // Restore the terminal before the default panic output runs
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        emergency_cleanup();
        original_hook(panic);
    }));

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(
        stdout(),
        EnterAlternateScreen,
        SetTitle(config.seo.title.as_str())
    )
    .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, args.style.into(), RealTimeSource::shared());
    let result = run_event_loop(&mut app, &mut terminal);

    emergency_cleanup();
    tracing::info!("termfolio exiting");
    result
}

fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    let mut last_render = Instant::now() - FRAME_DURATION;

    loop {
        app.tick();
        if app.should_quit {
            break;
        }

        // Animations run continuously, so every frame draws; the frame
        // budget caps the rate.
        if last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| view::draw(frame, app))?;
            last_render = Instant::now();
        }

        let timeout = FRAME_DURATION.saturating_sub(last_render.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key_event) => app.handle_key(key_event),
                CrosstermEvent::Resize(_, _) => {
                    // Next draw picks up the new size from the frame area
                }
                _ => {}
            }
        }
    }

    Ok(())
}
