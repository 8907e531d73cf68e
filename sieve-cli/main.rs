mod config;
mod explain;
mod filter;
mod render;

use anyhow::Result;
use clap::Parser as _;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(Debug, clap::Parser)]
#[clap(version, about = "Compile structural search patterns into regex queries")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
    /// Read compile options from a TOML file. Flags override the file.
    #[clap(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,
    /// Treat `...` as a hole.
    #[clap(long, global = true)]
    pub ellipsis: bool,
    /// Match content containing any one literal piece of the pattern, rather
    /// than all pieces in order.
    #[clap(long, global = true)]
    pub any_piece: bool,
    #[clap(long, default_value = "auto", global = true)]
    pub color: ColorChoice,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the regex and query tree for a pattern. Multiple arguments are
    /// joined with single spaces.
    Compile {
        #[clap(required = true)]
        patterns: Vec<String>,
        /// Fold constants and flatten the query tree before printing.
        #[clap(long)]
        simplify: bool,
        #[clap(long)]
        json: bool,
    },
    /// Show the holes and literal segments of a pattern.
    Explain {
        pattern: String,
        #[clap(long)]
        json: bool,
    },
    /// Print the files under the given paths whose contents match the
    /// compiled pattern. Exits with status 1 if nothing matched.
    Filter {
        pattern: String,
        #[clap(required = true)]
        paths: Vec<std::path::PathBuf>,
        /// Also search hidden files and directories.
        #[clap(long)]
        hidden: bool,
    },
}

/// Color mode.
#[derive(Clone, Copy, Default, Debug, clap::ValueEnum)]
pub enum ColorChoice {
    /// Use color if stdout is a terminal, honoring `NO_COLOR` and
    /// `FORCE_COLOR`.
    #[default]
    Auto,
    /// Always emit color codes.
    Always,
    /// Never emit color codes.
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => anstream::ColorChoice::Auto,
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}

/// Log filter from `SIEVE_LOG` directives. Warnings are shown when no
/// directives are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            &std::env::var("SIEVE_LOG").unwrap_or_default(),
        ))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = config::load(&args)?;
    let mut stdout = anstream::AutoStream::new(std::io::stdout(), args.color.into());

    match args.command {
        Command::Compile {
            patterns,
            simplify,
            json,
        } => render::compile(&mut stdout, &options, &patterns, simplify, json),
        Command::Explain { pattern, json } => explain::explain(&mut stdout, &options, &pattern, json),
        Command::Filter {
            pattern,
            paths,
            hidden,
        } => {
            let count = filter::filter(&mut stdout, &options, &pattern, &paths, hidden)?;
            if count == 0 {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
