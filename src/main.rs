// algoviz: step-by-step algorithm visualizer for the terminal

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use algoviz::algorithms::AlgorithmKind;
use algoviz::engine::constants::DEFAULT_SIZE;
use algoviz::engine::{Session, SpeedLevel};
use algoviz::model::{InputGenerator, NodeId};
use algoviz::ui::{App, ChannelSink};

/// Watch sorting, searching and graph traversal algorithms run one step at a time
#[derive(Debug, Parser)]
#[command(name = "algoviz", version, about)]
struct Cli {
    /// Algorithm to visualize
    #[arg(value_enum)]
    algorithm: AlgorithmKind,

    /// Number of array elements or graph nodes (clamped to 4..=8)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the input generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Initial speed: fast, normal or slow
    #[arg(long, default_value = "normal")]
    speed: String,

    /// Comma-separated custom array, e.g. 5,3,4,1,2
    #[arg(long)]
    values: Option<String>,

    /// Key to search for
    #[arg(long, allow_hyphen_values = true)]
    key: Option<f64>,

    /// Traversal start node (a letter)
    #[arg(long)]
    start: Option<String>,

    /// Traversal target node (a letter)
    #[arg(long)]
    target: Option<String>,

    /// Where to write the log; the terminal belongs to the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn parse_node(text: &str, role: &str) -> anyhow::Result<NodeId> {
    NodeId::parse(text).with_context(|| format!("Invalid {} node '{}': expected a letter", role, text))
}

fn configure(session: &mut Session, cli: &Cli) -> anyhow::Result<()> {
    session.set_size(cli.size);
    session.set_speed(SpeedLevel::parse(&cli.speed));

    if let Some(values) = &cli.values {
        if !cli.algorithm.supports_custom_values() {
            bail!("{} does not accept custom values", cli.algorithm);
        }
        let slots: Vec<String> = values.split(',').map(|s| s.trim().to_string()).collect();
        session.set_custom_values(slots);
    }

    if cli.key.is_some() {
        session.set_search_key(cli.key);
    }

    if let Some(start) = &cli.start {
        let node = parse_node(start, "start")?;
        if !session.set_start_node(Some(node)) {
            bail!("Start node {} is not in the graph", node);
        }
    }
    if let Some(target) = &cli.target {
        let node = parse_node(target, "target")?;
        if !session.set_target_node(Some(node)) {
            bail!("Target node {} is not in the graph", node);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("algoviz.log"));
    init_logging(&log_path)?;
    info!("Starting algoviz: {}", cli.algorithm);

    let generator = match cli.seed {
        Some(seed) => InputGenerator::seeded(seed),
        None => InputGenerator::from_os_rng(),
    };

    let (sink, events) = ChannelSink::channel();
    let mut session = Session::new(cli.algorithm, sink, generator);
    configure(&mut session, &cli)?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, events);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("Exiting algoviz");
    Ok(())
}
