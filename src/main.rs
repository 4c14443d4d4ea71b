//! CLI entry point for dirtree

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{OutputConfig, RenderConfig, TreeFormatter, TreeWalker, print_json, render_tree};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
    Never,
}

/// Token that, as the second positional argument, enables file listing.
const FILES_FLAG: &str = "-f";

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    use std::io::IsTerminal;

    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory as a tree, optionally with file sizes")]
#[command(version)]
#[command(override_usage = "dirtree [OPTIONS] <PATH> [-f]")]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Pass `-f` to include regular files, annotated with their size in
    /// bytes. Any other value lists directories only.
    #[arg(value_name = "FLAG", allow_hyphen_values = true)]
    mode: Option<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "never")]
    color: ColorMode,

    /// Number of parallel workers for rendering
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "1")]
    jobs: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirtree={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() {
    // Usage errors exit here with status 2, before the filesystem is touched
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);
    tracing::debug!(?args, "starting");

    let render_config = RenderConfig {
        include_files: args.mode.as_deref() == Some(FILES_FLAG),
        parallel_workers: args.jobs,
    };

    let use_color = should_use_color(args.color);

    let result = if args.json || use_color {
        let walker = TreeWalker::new(render_config);
        match walker.walk(&args.path) {
            Ok(tree) if args.json => print_json(&tree).map_err(Into::into),
            Ok(tree) => TreeFormatter::new(OutputConfig { use_color })
                .print(&tree)
                .map_err(Into::into),
            Err(e) => Err(e),
        }
    } else {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        render_tree(&mut lock, &args.path, &render_config)
    };

    if let Err(e) = result {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}
