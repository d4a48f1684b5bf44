//! CLI entry point for myls

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use myls::logging::init_logging;
use myls::{JsonFormatter, ListOptions, Lister, ListingFormatter, OutputConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "myls")]
#[command(about = "List information about the FILEs (the current directory by default)")]
#[command(version)]
#[command(infer_long_args = true)]
struct Args {
    /// Files or directories to list
    #[arg(value_name = "FILE")]
    paths: Vec<PathBuf>,

    /// Do not ignore entries starting with .
    #[arg(short, long)]
    all: bool,

    /// Like --all, but omit the implied . and ..
    #[arg(short = 'A', long = "almost-all")]
    almost_all: bool,

    /// Use a long listing format
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Reverse order while sorting (sorts names in descending order)
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Sort by time, newest first
    #[arg(short = 't')]
    sort_by_time: bool,

    /// Do not list entries matching PATTERN (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

impl Args {
    fn list_options(&self) -> ListOptions {
        ListOptions {
            show_all: self.all,
            almost_all: self.almost_all,
            long_format: self.long,
            recursive: self.recursive,
            reverse_order: self.reverse,
            sort_by_time: self.sort_by_time,
            ignore_patterns: self.ignore.clone(),
        }
    }
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(if e.use_stderr() { 2 } else { 0 });
    });
    init_logging();

    let options = args.list_options();
    tracing::debug!(?options, paths = ?args.paths, "starting listing");

    let lister = Lister::with_fs(options);
    let result = if args.json {
        lister.list(&args.paths, &mut JsonFormatter::stdout())
    } else {
        let config = OutputConfig::plain(lister.options()).with_color(should_use_color(args.color));
        lister.list(&args.paths, &mut ListingFormatter::stdout(config))
    };

    match result {
        Ok(summary) => process::exit(summary.exit_code()),
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => process::exit(0),
        Err(e) => {
            eprintln!("myls: error writing output: {}", e);
            process::exit(2);
        }
    }
}
