use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use isohedral::api::{BoundaryWord, Grid, PolyominoReplay, PolyominoSampler, TilingCase};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;
mod table;

use batch::{Shape, Summary};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "isohedral-cli")]
#[command(about = "Decide isohedral tilings of polyforms from their boundary words")]
#[command(version)]
struct Cmd {
    /// Worker threads for batch decisions (default: available parallelism)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decide one boundary word and print the satisfied cases as JSON
    Check {
        #[arg(long, value_enum, default_value_t = GridArg::Square)]
        grid: GridArg,
        #[arg(long)]
        word: String,
    },
    /// Decide every polyomino of an enumeration file
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// Per-shape table (.csv or .parquet) with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
        /// Count every satisfied case instead of stopping at the first
        #[arg(long)]
        classify: bool,
    },
    /// Run an external polyform generator for sizes 1..=N and batch each file
    Enumerate {
        #[arg(long = "gen")]
        generator: PathBuf,
        #[arg(long)]
        size: usize,
        /// Generator grid; only polyomino output can be traced
        #[arg(long, value_enum, default_value_t = GenGrid::Omino)]
        grid: GenGrid,
        /// Directory for the generated `<i>.txt` files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long)]
        classify: bool,
    },
    /// Decide random polyominoes and report the isohedral fraction
    Sample {
        #[arg(long)]
        cells: usize,
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

/// Grids with a one-character alphabet.
#[derive(Clone, Copy, ValueEnum)]
enum GridArg {
    Square,
    Hex,
    Iamond,
}

/// Generator grids whose output files the batch reader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GenGrid {
    Omino,
}

impl GenGrid {
    /// Flag spelling expected by the generator.
    fn flag(self) -> &'static str {
        match self {
            GenGrid::Omino => "-omino",
        }
    }
}

impl From<GridArg> for Grid {
    fn from(g: GridArg) -> Self {
        match g {
            GridArg::Square => Grid::Square,
            GridArg::Hex => Grid::Hex,
            GridArg::Iamond => Grid::Iamond,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let threads = cmd.threads.unwrap_or_else(default_threads);
    match cmd.action {
        Action::Check { grid, word } => check(grid.into(), &word),
        Action::Batch {
            input,
            out,
            classify,
        } => batch(&input, out.as_deref(), threads, classify),
        Action::Enumerate {
            generator,
            size,
            grid,
            dir,
            classify,
        } => enumerate(&generator, size, grid, &dir, threads, classify),
        Action::Sample { cells, count, seed } => sample(cells, count, seed, threads),
    }
}

fn default_threads() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

#[derive(Serialize)]
struct CheckReport {
    grid: String,
    word: String,
    length: usize,
    isohedral: bool,
    cases: Vec<&'static str>,
    first: Option<&'static str>,
    witness: Vec<[usize; 2]>,
}

fn check(grid: Grid, text: &str) -> Result<()> {
    let alg = grid.algebra()?;
    let word = BoundaryWord::new(grid.parse_word(text)?, &alg)?;
    let tilings = isohedral::classify(&word)?;
    let report = CheckReport {
        grid: grid.to_string(),
        word: text.to_string(),
        length: word.len(),
        isohedral: !tilings.is_empty(),
        cases: tilings.iter().map(|t| t.case.name()).collect(),
        first: tilings.first().map(|t| t.case.name()),
        witness: tilings
            .first()
            .map(|t| t.witness.iter().map(|f| [f.start, f.end]).collect())
            .unwrap_or_default(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn batch(input: &Path, out: Option<&Path>, threads: usize, classify: bool) -> Result<()> {
    let (rows, summary) = batch::run_file(input, threads, classify)?;
    if let Some(out) = out {
        let mut df = table::frame(&rows, classify)?;
        table::write(&mut df, out)?;
        let payload = Payload::new(json!({
            "threads": threads,
            "classify": classify,
            "summary": &summary,
        }))
        .with_input(input);
        let sidecar = provenance::write_sidecar(out, payload)?;
        tracing::info!(sidecar = %sidecar.display(), "provenance written");
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn enumerate(
    generator: &Path,
    size: usize,
    grid: GenGrid,
    dir: &Path,
    threads: usize,
    classify: bool,
) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    tracing::info!(generator = %generator.display(), size, grid = grid.flag(), threads, "enumerate start");
    let mut summaries: Vec<Summary> = Vec::with_capacity(size);
    for i in 1..=size {
        let file = dir.join(format!("{i}.txt"));
        let status = generator_command(generator, grid, i, &file)
            .status()
            .with_context(|| format!("running {}", generator.display()))?;
        if !status.success() {
            bail!("{} failed for size {i}: {status}", generator.display());
        }
        let (_, summary) = batch::run_file(&file, threads, classify)?;
        tracing::info!(size = i, shapes = summary.shapes, isohedral = summary.isohedral, "size done");
        summaries.push(summary);
    }
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

/// `<gen> -<grid> -size <i> -free -o <file>`
fn generator_command(generator: &Path, grid: GenGrid, size: usize, file: &Path) -> Command {
    let mut cmd = Command::new(generator);
    cmd.arg(grid.flag())
        .args(["-size", &size.to_string(), "-free", "-o"])
        .arg(file);
    cmd
}

fn sample(cells: usize, count: u64, seed: u64, threads: usize) -> Result<()> {
    let sampler = PolyominoSampler::new(cells)?;
    tracing::info!(cells, count, seed, threads, "sample start");
    let shapes = (0..count)
        .map(|i| {
            let poly = sampler.draw(PolyominoReplay::new(seed, i))?;
            Shape::from_polyomino(i as usize, &poly)
        })
        .collect::<isohedral::Result<Vec<_>>>()?;
    let (rows, failed) = batch::decide_all(&shapes, threads, false)?;
    let summary = Summary::new(format!("sample:{cells}:{seed}"), &rows, failed, false);
    let fraction = if summary.shapes == 0 {
        0.0
    } else {
        summary.isohedral as f64 / summary.shapes as f64
    };
    let first_cases = TilingCase::ALL
        .into_iter()
        .map(|case| {
            let n = rows.iter().filter(|r| r.first_case() == Some(case)).count();
            (case.name(), n)
        })
        .filter(|&(_, n)| n > 0)
        .collect::<std::collections::BTreeMap<_, _>>();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "summary": summary,
            "fraction": fraction,
            "first_cases": first_cases,
        }))?
    );
    Ok(())
}
