//! Batch decisions over enumeration files and sampled shapes.
//!
//! Shapes are split into contiguous chunks, one per worker of a fixed-size
//! pool. Workers share only the read-only square algebra; results come back
//! in input order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use isohedral::api::{grids, Analysis, BoundaryWord, DirectionAlgebra, Grid, Polyomino, Step, TilingCase};
use rayon::prelude::*;
use serde::Serialize;

/// A parsed input shape and its boundary word.
#[derive(Clone, Debug)]
pub struct Shape {
    /// 1-based line in the source file, or the draw index for samples.
    pub line: usize,
    pub cells: usize,
    pub word: Vec<Step>,
}

impl Shape {
    pub fn from_polyomino(line: usize, poly: &Polyomino) -> isohedral::Result<Self> {
        Ok(Self {
            line,
            cells: poly.len(),
            word: poly.boundary_word()?,
        })
    }
}

/// Per-shape outcome. `cases` holds every satisfied case under
/// `--classify`, otherwise at most the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub cells: usize,
    pub word: String,
    pub cases: Vec<TilingCase>,
}

impl Row {
    pub fn isohedral(&self) -> bool {
        !self.cases.is_empty()
    }

    pub fn first_case(&self) -> Option<TilingCase> {
        self.cases.first().copied()
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Summary {
    pub input: String,
    pub shapes: usize,
    pub isohedral: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_case: Option<BTreeMap<&'static str, usize>>,
}

impl Summary {
    pub fn new(input: impl Into<String>, rows: &[Row], skipped: usize, classify: bool) -> Self {
        let per_case = classify.then(|| {
            TilingCase::ALL
                .into_iter()
                .map(|case| (case.name(), rows.iter().filter(|r| r.cases.contains(&case)).count()))
                .collect()
        });
        Self {
            input: input.into(),
            shapes: rows.len(),
            isohedral: rows.iter().filter(|r| r.isohedral()).count(),
            skipped,
            per_case,
        }
    }
}

/// Reads an enumeration file. Lines that fail to parse, or describe a shape
/// that is disconnected or has holes, are logged and counted, never fatal.
pub fn read_shapes(path: &Path) -> Result<(Vec<Shape>, usize)> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut shapes = Vec::new();
    let mut skipped = 0;
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match Polyomino::parse_line(line).and_then(|p| Shape::from_polyomino(i + 1, &p)) {
            Ok(shape) => shapes.push(shape),
            Err(error) => {
                tracing::warn!(line = i + 1, %error, "skipping shape");
                skipped += 1;
            }
        }
    }
    Ok((shapes, skipped))
}

/// Decides every shape on a pool of `threads` workers. Shapes whose
/// decision fails are dropped with a warning; the second value counts them.
pub fn decide_all(shapes: &[Shape], threads: usize, classify: bool) -> Result<(Vec<Row>, usize)> {
    let alg = grids::square()?;
    let threads = threads.max(1);
    let chunk = shapes.len().div_ceil(threads).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("building worker pool")?;

    let chunks: Vec<Vec<Option<Row>>> = pool.install(|| {
        shapes
            .par_chunks(chunk)
            .enumerate()
            .map(|(k, part)| {
                let rows: Vec<Option<Row>> = part
                    .iter()
                    .map(|shape| match decide_one(shape, &alg, classify) {
                        Ok(row) => Some(row),
                        Err(error) => {
                            tracing::warn!(line = shape.line, %error, "decision failed");
                            None
                        }
                    })
                    .collect();
                tracing::debug!(chunk = k, shapes = part.len(), "chunk done");
                rows
            })
            .collect()
    });

    let all: Vec<Option<Row>> = chunks.into_iter().flatten().collect();
    let failed = all.iter().filter(|r| r.is_none()).count();
    Ok((all.into_iter().flatten().collect(), failed))
}

fn decide_one(shape: &Shape, alg: &DirectionAlgebra<Step>, classify: bool) -> isohedral::Result<Row> {
    let word = BoundaryWord::new(shape.word.clone(), alg)?;
    let an = Analysis::new(&word);
    let cases = if classify {
        an.classify()?.into_iter().map(|t| t.case).collect()
    } else {
        an.decide()?.map(|t| t.case).into_iter().collect()
    };
    Ok(Row {
        line: shape.line,
        cells: shape.cells,
        word: Grid::Square.format_word(&shape.word).unwrap_or_default(),
        cases,
    })
}

/// Reads, decides and summarizes one enumeration file.
pub fn run_file(path: &Path, threads: usize, classify: bool) -> Result<(Vec<Row>, Summary)> {
    let (shapes, unreadable) = read_shapes(path)?;
    tracing::info!(input = %path.display(), shapes = shapes.len(), threads, "batch start");
    let (rows, failed) = decide_all(&shapes, threads, classify)?;
    let summary = Summary::new(path.to_string_lossy(), &rows, unreadable + failed, classify);
    tracing::info!(
        input = %path.display(),
        shapes = summary.shapes,
        isohedral = summary.isohedral,
        skipped = summary.skipped,
        "batch done"
    );
    Ok((rows, summary))
}
