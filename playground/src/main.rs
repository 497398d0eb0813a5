//! Closure playground CLI.
//!
//! Evaluates the closure snippets top-to-bottom and prints each expression
//! with its value. Ad-hoc subcommands run a single demonstration on
//! command-line input.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use playground::check::check_outcomes;
use playground::core::counter::{call_repeatedly, make_incrementer};
use playground::core::digits::map_digit_names;
use playground::core::sorting::{ComparatorStyle, sort_descending};
use playground::exit_codes;
use playground::io::config::{
    DEFAULT_CONFIG_FILE, PlaygroundConfig, load_config, write_config,
};
use playground::logging;
use playground::snippets::{Snippet, evaluate, evaluate_one, render_text};

#[derive(Parser)]
#[command(
    name = "closure-playground",
    version,
    about = "Runnable snippets demonstrating closures"
)]
struct Cli {
    /// Playground config file. Defaults are used when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate every snippet (or just one) and print the results.
    Run {
        /// Only evaluate this snippet.
        #[arg(short, long)]
        snippet: Option<Snippet>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List snippets in evaluation order.
    List,
    /// Verify counters, sorting, and digit names behave as documented.
    Check,
    /// Write the default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Sort names in descending order.
    Sort {
        /// How the comparator closure is written.
        #[arg(long, default_value = "shorthand")]
        style: ComparatorStyle,

        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Spell numbers digit by digit.
    Digits {
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
    /// Invoke a counter repeatedly and print each running total.
    Count {
        #[arg(long, allow_hyphen_values = true)]
        step: i64,

        #[arg(long, default_value_t = 3)]
        times: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { snippet, format } => cmd_run(&cli.config, snippet, format),
        Command::List => cmd_list(),
        Command::Check => cmd_check(&cli.config),
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Sort { style, names } => cmd_sort(style, &names),
        Command::Digits { numbers } => cmd_digits(&cli.config, &numbers),
        Command::Count { step, times } => cmd_count(step, times),
    }
}

fn cmd_run(config_path: &Path, snippet: Option<Snippet>, format: OutputFormat) -> Result<i32> {
    let cfg = load_config(config_path)?;
    info!(config = %config_path.display(), ?snippet, "running playground");
    let outcomes = match snippet {
        Some(snippet) => vec![evaluate_one(&cfg, snippet)?],
        None => evaluate(&cfg)?,
    };
    match format {
        OutputFormat::Text => print!("{}", render_text(&outcomes)),
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(&outcomes).context("serialize outcomes")?;
            println!("{payload}");
        }
    }
    Ok(exit_codes::OK)
}

fn cmd_list() -> Result<i32> {
    for snippet in Snippet::ALL {
        println!("{snippet}\t{}", snippet.title());
    }
    Ok(exit_codes::OK)
}

fn cmd_check(config_path: &Path) -> Result<i32> {
    let cfg = load_config(config_path)?;
    info!(config = %config_path.display(), "checking playground");
    let violations = check_outcomes(&cfg)?;
    if violations.is_empty() {
        println!("check: ok");
        return Ok(exit_codes::OK);
    }
    for violation in &violations {
        println!("check: {violation}");
    }
    Ok(exit_codes::MISMATCH)
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &PlaygroundConfig::default())?;
    info!(config = %config_path.display(), "wrote default config");
    println!("init: wrote {}", config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_sort(style: ComparatorStyle, names: &[String]) -> Result<i32> {
    for name in sort_descending(names, style) {
        println!("{name}");
    }
    Ok(exit_codes::OK)
}

fn cmd_digits(config_path: &Path, numbers: &[u64]) -> Result<i32> {
    let cfg = load_config(config_path)?;
    for spelled in map_digit_names(numbers, &cfg.digit_names)? {
        println!("{spelled}");
    }
    Ok(exit_codes::OK)
}

fn cmd_count(step: i64, times: u32) -> Result<i32> {
    if step.checked_mul(i64::from(times)).is_none() {
        bail!("step {step} overflows within {times} calls");
    }
    let counter = make_incrementer(step);
    for total in call_repeatedly(&counter, times) {
        println!("{total}");
    }
    Ok(exit_codes::OK)
}
