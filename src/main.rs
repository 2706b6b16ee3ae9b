//! SHA-1 Digest CLI
//!
//! A command-line tool for computing and checking SHA-1 digests.
//!
//! # Commands
//!
//! - `hash` - Hash text, files or standard input
//! - `check` - Compare a digest against an expected value
//! - `batch` - Hash many files in parallel
//! - `self-test` - Verify published vectors and padding boundaries
//! - `benchmark` - Run performance benchmark

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use sha1d::algorithm::{BLOCK_SIZE, DIGEST_SIZE, ROUNDS};
use sha1d::config::{Config, OutputFormat, Overrides};
use sha1d::output::{hex_digest, write_record};
use sha1d::source::{hash_files, hash_source, InputSource};
use sha1d::{selftest, Digest, Sha1, TextEncoding};

#[derive(Parser)]
#[command(name = "sha1d")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "Compute and check SHA-1 message digests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/sha1d/config.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Encoding for text arguments: utf-8, utf-16be, utf-16le, latin1, ascii
    #[arg(long, global = true)]
    encoding: Option<TextEncoding>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Print hex digests in uppercase
    #[arg(long, global = true)]
    uppercase: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash text, files, or standard input when neither is given
    Hash {
        /// Text to hash
        text: Option<String>,

        /// File to hash (repeatable)
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,
    },

    /// Check that an input hashes to an expected digest
    Check {
        /// Expected digest (40 hex characters)
        expected: String,

        /// Text to hash
        text: Option<String>,

        /// File to hash instead of text
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Hash many files in parallel
    Batch {
        /// Files to hash
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Number of threads to use (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Verify published test vectors and padding boundaries
    SelfTest,

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute
        #[arg(short, long, default_value = "10000")]
        count: u32,

        /// Message size in bytes
        #[arg(short, long, default_value = "1024")]
        size: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = build_config(&cli).and_then(|config| match cli.command {
        Commands::Hash { text, files } => cmd_hash(text, files, &config),
        Commands::Check {
            expected,
            text,
            file,
        } => cmd_check(&expected, text, file, &config),
        Commands::Batch { paths, .. } => cmd_batch(&paths, &config),
        Commands::SelfTest => cmd_self_test(),
        Commands::Benchmark { count, size } => cmd_benchmark(count, size),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Install the logger; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build config from the config file and CLI args
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let threads = match &cli.command {
        Commands::Batch { threads, .. } => *threads,
        _ => None,
    };

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&Overrides {
        encoding: cli.encoding,
        format: cli.format,
        uppercase: cli.uppercase,
        threads,
    });
    log::debug!("Effective config: {:?}", config);
    Ok(config)
}

fn cmd_hash(text: Option<String>, files: Vec<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if let Some(text) = text {
        sources.insert(0, InputSource::Text(text));
    }
    if sources.is_empty() {
        sources.push(InputSource::Stdin);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for source in &sources {
        let record = hash_source(source, config.encoding)?;
        write_record(&mut out, &record, config)?;
    }

    out.flush()?;
    Ok(())
}

fn cmd_check(
    expected: &str,
    text: Option<String>,
    file: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    let expected: Digest = expected
        .trim()
        .parse()
        .with_context(|| format!("Expected digest {:?} is not valid", expected))?;

    let source = match (text, file) {
        (Some(_), Some(_)) => anyhow::bail!("Give either text or --file, not both"),
        (Some(text), None) => InputSource::Text(text),
        (None, Some(path)) => InputSource::File(path),
        (None, None) => InputSource::Stdin,
    };

    let record = hash_source(&source, config.encoding)?;

    if record.digest == expected {
        println!("{}: OK", record.source);
        Ok(())
    } else {
        println!("{}: FAILED", record.source);
        println!("  Expected: {}", hex_digest(&expected, config.uppercase));
        println!("  Actual:   {}", hex_digest(&record.digest, config.uppercase));
        std::process::exit(1);
    }
}

fn cmd_batch(paths: &[PathBuf], config: &Config) -> anyhow::Result<()> {
    let num_threads = config.worker_threads();

    let start = Instant::now();
    let results = hash_files(paths, num_threads).context("Failed to start worker threads")?;
    let elapsed = start.elapsed();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;
    let mut total_bytes = 0u64;

    for result in results {
        match result {
            Ok(record) => {
                total_bytes += record.bytes;
                write_record(&mut out, &record, config)?;
            }
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}", e);
            }
        }
    }
    out.flush()?;

    log::info!(
        "Hashed {} bytes from {} files in {:.2}s on {} threads",
        total_bytes,
        paths.len() - failures,
        elapsed.as_secs_f64(),
        num_threads
    );

    if failures > 0 {
        anyhow::bail!("{} of {} files could not be hashed", failures, paths.len());
    }
    Ok(())
}

fn cmd_self_test() -> anyhow::Result<()> {
    let outcomes = selftest::run();

    for outcome in &outcomes {
        if outcome.passed {
            println!("  ok      {}", outcome.name);
        } else {
            println!(
                "  FAILED  {} (expected {}, got {})",
                outcome.name, outcome.expected, outcome.actual
            );
        }
    }

    let passed = outcomes.iter().filter(|o| o.passed).count();
    println!("\n{}/{} checks passed", passed, outcomes.len());

    if !selftest::all_passed(&outcomes) {
        anyhow::bail!("Self test failed");
    }
    Ok(())
}

fn cmd_benchmark(count: u32, size: usize) -> anyhow::Result<()> {
    println!(
        "Running benchmark with {} hashes of {} bytes...",
        count, size
    );

    let mut hasher = Sha1::new();
    let mut data = vec![0u8; size];

    let start = Instant::now();

    for i in 0..count {
        if let Some(first) = data.first_mut() {
            *first = i as u8;
        }
        let _ = hasher.hash(&data);
    }

    let elapsed = start.elapsed();
    let seconds = elapsed.as_secs_f64();
    let hashrate = count as f64 / seconds;
    let throughput = (count as f64 * size as f64) / seconds / (1024.0 * 1024.0);

    println!("\nResults:");
    println!("  Total hashes: {}", count);
    println!("  Time elapsed: {:.2}s", seconds);
    println!("  Hashrate: {:.2} H/s", hashrate);
    println!("  Throughput: {:.2} MiB/s", throughput);

    println!("\nAlgorithm parameters:");
    println!("  Block size: {} bytes", BLOCK_SIZE);
    println!("  Blocks per message: {}", hasher.blocks_processed());
    println!("  Rounds per block: {}", ROUNDS);
    println!("  Digest size: {} bytes", DIGEST_SIZE);

    Ok(())
}
