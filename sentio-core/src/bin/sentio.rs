//! Command-line front end for the sentiment scorer.
//!
//! ## Usage
//!
//! ```bash
//! # Score a few texts
//! sentio score "The food was EXCELLENT!!!" "This movie was not good"
//!
//! # Score every non-empty line of a file (or stdin), as JSON lines
//! sentio --json lines reviews.txt
//! cat reviews.txt | sentio lines
//!
//! # Measure throughput over a large file
//! sentio bench reviews.txt
//!
//! # Custom tables
//! sentio --config sentio.toml score "meh"
//! SENTIO_CONFIG=sentio.toml sentio score "meh"
//! ```
//!
//! Logs go to stderr; verbosity follows `RUST_LOG` (default `warn`).
//!
//! ## Bench output
//!
//! ```text
//! === Analyze ===
//! --------------------------------
//! Mode        : Analyze
//! Elapsed     : 0.212 s
//! Throughput  : 48.31 MiB/s
//! Lines       : 1_000_000
//! Lines/sec   : 4_716_981
//! --------------------------------
//! ```

use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sentio_core::analyzer::tokenizer::Tokenizer;
use sentio_core::{Scorer, SentimentScore, SentioConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rule-based lexical sentiment scoring", long_about = None)]
struct Args {
    /// TOML file with scoring params and extra table entries
    #[arg(short, long, global = true, env = "SENTIO_CONFIG")]
    config: Option<PathBuf>,

    /// Print one JSON object per scored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score each argument as a separate text
    Score {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Score each non-empty line of a file, or stdin when no path is given
    Lines { path: Option<PathBuf> },
    /// Time tokenization and scoring over every line of a file
    Bench { path: PathBuf },
}

#[derive(Serialize)]
struct Scored<'a> {
    text: &'a str,
    #[serde(flatten)]
    score: SentimentScore,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let scorer = build_scorer(args.config.as_deref())?;

    match args.command {
        Command::Score { texts } => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for text in &texts {
                emit(&mut out, &scorer, text, args.json)?;
            }
            out.flush()?;
        }
        Command::Lines { path } => score_lines(&scorer, path.as_deref(), args.json)?,
        Command::Bench { path } => bench(&scorer, &path)?,
    }

    Ok(())
}

fn build_scorer(path: Option<&Path>) -> Result<Scorer> {
    let Some(path) = path else {
        return Ok(Scorer::new());
    };

    let config = SentioConfig::load(path)
        .with_context(|| format!("loading config {}", path.display()))?;
    Scorer::from_config(&config).context("building scorer from config")
}

fn emit<W: Write>(out: &mut W, scorer: &Scorer, text: &str, json: bool) -> Result<()> {
    let score = scorer.analyze(text);
    if json {
        serde_json::to_writer(&mut *out, &Scored { text, score })?;
        writeln!(out)?;
    } else {
        writeln!(out, "{score}\t{text}")?;
    }
    Ok(())
}

fn score_lines(scorer: &Scorer, path: Option<&Path>, json: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(io::BufReader::new(
            fs::File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in reader.lines() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }
        emit(&mut out, scorer, &line, json)?;
    }

    out.flush()?;
    Ok(())
}

fn bench(scorer: &Scorer, path: &Path) -> Result<()> {
    println!("Loading file...");
    let input = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Lines:     {}\n", fmt_count(lines.len() as u64));

    bench_tokenize(&lines, input.len());
    bench_analyze(scorer, &lines, input.len());

    Ok(())
}

fn bench_tokenize(lines: &[&str], input_bytes: usize) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    let run = || {
        let mut tokens = 0u64;
        for line in lines {
            tokenizer.tokenize(line, |_t| tokens += 1);
        }
        std::hint::black_box(tokens);
    };

    warmup(run);
    let elapsed = measure(run);

    print_perf("Tokenize", input_bytes, elapsed, lines.len() as u64);
}

fn bench_analyze(scorer: &Scorer, lines: &[&str], input_bytes: usize) {
    println!("=== Analyze ===");

    let run = || {
        let mut sum = 0.0f64;
        for line in lines {
            sum += scorer.analyze(line).compound;
        }
        std::hint::black_box(sum);
    };

    warmup(run);
    let elapsed = measure(run);

    print_perf("Analyze", input_bytes, elapsed, lines.len() as u64);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, lines: u64) {
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.2} MiB/s", mib / secs);
    println!("Lines       : {}", fmt_count(lines));
    println!("Lines/sec   : {}", fmt_count((lines as f64 / secs) as u64));
    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
