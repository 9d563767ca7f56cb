use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode, WriteLogger};
use status_line::{PathFormat, Record, StatusWriter};
use std::fs::File;
use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "status-demo")]
#[command(about = "Single-line status output demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Count seconds in place behind a label
    Wait {
        #[arg(long, default_value_t = 10)]
        seconds: u64,
    },
    /// Print generated file paths, shortened to fit on one line
    Paths {
        /// Paths per run (0 means 1000)
        #[arg(long, default_value_t = 6000)]
        count: usize,

        /// Line width (0 uses the terminal's)
        #[arg(long, default_value_t = 79)]
        max_width: usize,

        /// Pause after each path, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let mut out = stdout();
    match cli.command {
        Commands::Wait { seconds } => wait(&mut out, seconds),
        Commands::Paths {
            count,
            max_width,
            delay_ms,
        } => paths(&mut out, count, max_width, Duration::from_millis(delay_ms)),
    }
}

fn init_logging(log_file: Option<&Path>, verbose: u8) -> Result<()> {
    let level = match (verbose, log_file.is_some()) {
        (0, false) => LevelFilter::Warn,
        (0, true) => LevelFilter::Info,
        (1, _) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            WriteLogger::init(level, LogConfig::default(), file)
        }
        // Status text goes to stdout, so stderr logging does not disturb it.
        None => TermLogger::init(
            level,
            LogConfig::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    installed.context("installing logger")
}

fn wait(out: &mut Stdout, seconds: u64) -> Result<()> {
    let mut status = StatusWriter::new(out).context("stdout must be a terminal")?;
    let label = format!("{seconds} second wait : ");

    status.label(&label)?;
    for n in 1..=seconds {
        status.write(&n.to_string(), false)?;
        thread::sleep(Duration::from_secs(1));
        status.flush()?;
    }
    status.label(&format!("{label}Completed\n"))?;
    Ok(())
}

fn paths(out: &mut Stdout, count: usize, max_width: usize, delay: Duration) -> Result<()> {
    let width = if max_width == 0 {
        terminal_width()
    } else {
        max_width
    };
    let format = PathFormat::new(width);
    let width = format.max_width();
    let mut status = StatusWriter::with_format(out, format).context("stdout must be a terminal")?;

    for (repeat, relation) in [(100, "over"), (1, "under")] {
        let label = format!("Paths {relation} {width} characters");
        status.label(&format!("{label} "))?;

        let mut shown = 0;
        for (index, path) in fake_paths(repeat, count).enumerate() {
            status.write(&Record::with_text(path, index as u64 + 1), false)?;
            status.flush()?;
            shown += 1;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        status.label(&format!("{label}: Completed\n"))?;
        info!("{label}: showed {shown} paths");
    }
    Ok(())
}

/// One column short of the terminal, so the cursor never wraps. Zero when the
/// size is unknown, which the formatter treats as its default width.
fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) => usize::from(columns).saturating_sub(1),
        Err(e) => {
            warn!("could not read terminal size: {e}");
            0
        }
    }
}

/// `count` paths of the form `/<"path" * repeat>/<n>.xyz`.
fn fake_paths(repeat: usize, count: usize) -> impl Iterator<Item = String> {
    let count = if count < 1 { 1000 } else { count };
    let dir = "path".repeat(repeat.max(1));
    (0..count).map(move |n| format!("{MAIN_SEPARATOR}{dir}{MAIN_SEPARATOR}{n}.xyz"))
}
