use clap::{Args, Parser, Subcommand};
use qr_analysis::encoder::version::VersionSelector;
use qr_analysis::tools::{capacity_rows, load_lines, parse_hex};
use qr_analysis::{Analyzer, AnalyzerConfig, ECLevel, Mode, Version, classify};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR data analysis tools")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the encoding mode chosen for an input
    Classify {
        text: String,
        /// Treat TEXT as hex-encoded bytes (e.g. "81 40")
        #[arg(long)]
        hex: bool,
    },
    /// Print the smallest version for a length, level and mode
    Version {
        #[arg(long)]
        length: usize,
        #[arg(long, default_value = "M")]
        level: ECLevel,
        #[arg(long)]
        mode: Mode,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Classify an input and select its version
    Analyze {
        text: String,
        #[arg(long)]
        hex: bool,
        #[arg(long)]
        level: Option<ECLevel>,
        #[command(flatten)]
        range: RangeArgs,
        /// Raise the error correction level while the version stays the same
        #[arg(long)]
        boost: bool,
    },
    /// Analyze every line of a file in parallel
    Batch {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        level: Option<ECLevel>,
        #[arg(long)]
        boost: bool,
    },
    /// Print the capacity of every version for a level and mode
    Table {
        #[arg(long, default_value = "M")]
        level: ECLevel,
        #[arg(long)]
        mode: Mode,
    },
}

#[derive(Args)]
struct RangeArgs {
    /// Smallest version to consider
    #[arg(long)]
    min: Option<u8>,
    /// Largest version to consider
    #[arg(long)]
    max: Option<u8>,
}

impl RangeArgs {
    fn resolve(&self, defaults: &AnalyzerConfig) -> Result<(Version, Version), String> {
        let min = resolve_version(self.min, defaults.min_version)?;
        let max = resolve_version(self.max, defaults.max_version)?;
        Ok((min, max))
    }
}

fn resolve_version(number: Option<u8>, default: Version) -> Result<Version, String> {
    match number {
        Some(n) => Version::new(n).ok_or_else(|| format!("version {} is outside 1-40", n)),
        None => Ok(default),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Classify { text, hex } => classify_cmd(&text, hex),
        Command::Version {
            length,
            level,
            mode,
            range,
        } => version_cmd(length, level, mode, &range),
        Command::Analyze {
            text,
            hex,
            level,
            range,
            boost,
        } => analyze_cmd(&text, hex, level, &range, boost),
        Command::Batch { file, level, boost } => batch_cmd(&file, level, boost),
        Command::Table { level, mode } => {
            table_cmd(level, mode);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn input_bytes(text: &str, hex: bool) -> Result<Vec<u8>, String> {
    if hex {
        parse_hex(text).map_err(|e| e.to_string())
    } else {
        Ok(text.as_bytes().to_vec())
    }
}

fn classify_cmd(text: &str, hex: bool) -> Result<(), String> {
    let input = input_bytes(text, hex)?;
    let mode = classify(&input).map_err(|e| e.to_string())?;
    println!("{}", mode);
    Ok(())
}

fn version_cmd(
    length: usize,
    level: ECLevel,
    mode: Mode,
    range: &RangeArgs,
) -> Result<(), String> {
    let (min, max) = range.resolve(&AnalyzerConfig::default())?;
    let version = VersionSelector::select_in_range(length, level, mode, min, max)
        .map_err(|e| e.to_string())?;
    println!("{}", version);
    Ok(())
}

fn analyze_cmd(
    text: &str,
    hex: bool,
    level: Option<ECLevel>,
    range: &RangeArgs,
    boost: bool,
) -> Result<(), String> {
    let input = input_bytes(text, hex)?;
    let env = AnalyzerConfig::from_env();
    let (min, max) = range.resolve(&env)?;
    let config = env
        .with_ec_level(level.unwrap_or(env.ec_level))
        .with_version_range(min, max)
        .with_boost_ec(boost || env.boost_ec);

    let analysis = Analyzer::with_config(config)
        .analyze(&input)
        .map_err(|e| e.to_string())?;
    println!("{}", analysis);
    Ok(())
}

fn batch_cmd(file: &Path, level: Option<ECLevel>, boost: bool) -> Result<(), String> {
    let inputs =
        load_lines(file).map_err(|e| format!("failed to read {}: {}", file.display(), e))?;
    let env = AnalyzerConfig::from_env();
    let config = env
        .with_ec_level(level.unwrap_or(env.ec_level))
        .with_boost_ec(boost || env.boost_ec);

    let results = Analyzer::with_config(config).analyze_batch(&inputs);
    let mut failures = 0;
    for (line, result) in results.iter().enumerate() {
        match result {
            Ok(analysis) => println!("{}: {}", line + 1, analysis),
            Err(err) => {
                failures += 1;
                println!("{}: error: {}", line + 1, err);
            }
        }
    }

    println!("Analyzed {} inputs, {} failed", results.len(), failures);
    if failures > 0 {
        return Err(format!("{} of {} inputs failed", failures, results.len()));
    }
    Ok(())
}

fn table_cmd(level: ECLevel, mode: Mode) {
    println!("version  size     capacity ({} / {})", mode, level);
    for (version, capacity) in capacity_rows(level, mode) {
        let size = format!("{0}x{0}", version.size());
        println!("{:>7}  {:<7}  {:>8}", version.number(), size, capacity);
    }
}
