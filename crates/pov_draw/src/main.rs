use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use lazy_static::lazy_static;
use pov_engine::preview::{render_text, scale_to_fit};
use pov_engine::{EditState, Format, Point, Tool};
use semver::Version;

mod options;
mod script;

use options::Options;

lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap_or_else(|_| Version::new(0, 0, 0));
}

#[derive(Parser, Debug)]
#[command(version, about = "Design POV LED wand patterns and export them as firmware byte tables", long_about = None)]
pub struct Args {
    #[arg(long, value_name = "COLUMNS", help = "Grid width (1-64), overrides options.toml")]
    width: Option<i32>,

    #[arg(long, value_name = "FORMAT", help = "Output format: heart (64 columns) or hanzi (16 columns)")]
    format: Option<Format>,

    #[arg(long, help = "Also print the stretched LED preview")]
    preview: bool,

    #[arg(long, help = "Don't print the editable grid")]
    no_grid: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Draw a named pattern (heart, heart_outline, hi, smiley)")]
    Pattern { name: String },

    #[command(about = "Place A-Z text at a position")]
    Text {
        text: String,
        #[arg(long, default_value_t = 0)]
        row: i32,
        #[arg(long, default_value_t = 0)]
        col: i32,
    },

    #[command(about = "Drag a line from (r0, c0) to (r1, c1)", allow_negative_numbers = true)]
    Line { r0: i32, c0: i32, r1: i32, c1: i32 },

    #[command(about = "Drag a circle around (row, col) through (edge_row, edge_col)", allow_negative_numbers = true)]
    Circle { row: i32, col: i32, edge_row: i32, edge_col: i32 },

    #[command(about = "Fill a circle around (row, col)", allow_negative_numbers = true)]
    FillCircle { row: i32, col: i32, radius: i32 },

    #[command(about = "Run a drawing script, one command per line")]
    Script { path: PathBuf },
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = Options::config_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

/// File logging in the config directory, stderr only if that is not possible.
/// The handle has to stay alive for the whole run.
fn start_logger() -> Option<LoggerHandle> {
    if let Some(log_dir) = get_log_dir() {
        let started = Logger::try_with_env_or_str("info").and_then(|logger| {
            logger
                .log_to_file(FileSpec::default().directory(&log_dir).basename("pov_draw").suffix("log").suppress_timestamp())
                .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
                .start()
        });
        match started {
            Ok(handle) => return Some(handle),
            Err(err) => eprintln!("Failed to create log file: {err}"),
        }
    } else {
        eprintln!("Failed to create log file");
    }
    Logger::try_with_env_or_str("warn").and_then(|logger| logger.log_to_stderr().start()).ok()
}

fn run_command(state: &mut EditState, command: &Command) -> Result<()> {
    match command {
        Command::Pattern { name } => {
            state.apply_named_pattern(name)?;
        }
        Command::Text { text, row, col } => {
            state.place_text(text, *row, *col)?;
        }
        Command::Line { r0, c0, r1, c1 } => script::drag(state, Tool::Line, &[Point::new(*r0, *c0), Point::new(*r1, *c1)]),
        Command::Circle { row, col, edge_row, edge_col } => {
            script::drag(state, Tool::Circle, &[Point::new(*row, *col), Point::new(*edge_row, *edge_col)]);
        }
        Command::FillCircle { row, col, radius } => {
            state.fill_circle(Point::new(*row, *col), *radius, true);
        }
        Command::Script { path } => {
            let src = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let parsed = script::parse_script(&src).with_context(|| format!("parsing {}", path.display()))?;
            script::run_script(state, &parsed).with_context(|| format!("running {}", path.display()))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = start_logger();
    log::info!("Starting pov_draw {}", *VERSION);

    let options = Options::load();
    let width = args.width.unwrap_or(options.default_width);
    let mut state = EditState::new(width)?;
    state.set_format(args.format.unwrap_or(options.default_format));
    state.set_undo_limit(options.undo_limit);

    run_command(&mut state, &args.command)?;

    let grid = state.grid();
    if !args.no_grid {
        println!("{}", render_text(grid, options.lit_char, options.unlit_char, true));
    }
    if args.preview {
        let preview = scale_to_fit(grid, options.preview_width, options.preview_height);
        println!("{}", render_text(&preview, options.lit_char, options.unlit_char, false));
    }
    print!("{}", state.export());
    Ok(())
}
