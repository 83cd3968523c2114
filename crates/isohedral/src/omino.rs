//! Polyominoes as cell sets, and their clockwise boundary words.
//!
//! Cells are addressed by their lower-left corner. The tracer walks the
//! outline clockwise from the lower-left corner of the leftmost-lowest cell,
//! first step north, and at every vertex prefers a left turn, then straight,
//! then a right turn. Interior edges are present in the vertex table too; the
//! left-first rule keeps the walk on the outside.

use std::collections::{HashMap, HashSet};

use nalgebra::Vector2;

use crate::algebra::Step;
use crate::error::{IsohedralError, Result};

/// Lower-left corner of a unit cell.
pub type Cell = Vector2<i32>;

const E: usize = 0;
const N: usize = 1;
const W: usize = 2;
const S: usize = 3;

#[inline]
fn dir(d: usize) -> Step {
    match d {
        E => Step::new(1, 0),
        N => Step::new(0, 1),
        W => Step::new(-1, 0),
        _ => Step::new(0, -1),
    }
}

const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A finite set of unit cells, stored sorted by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polyomino {
    cells: Vec<Cell>,
}

impl Polyomino {
    /// Deduplicates and sorts; fails on an empty set.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self> {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        cells.sort_by_key(|c| (c.x, c.y));
        cells.dedup();
        if cells.is_empty() {
            return Err(IsohedralError::invalid_input("polyomino without cells"));
        }
        Ok(Self { cells })
    }

    /// One line of an enumeration file: an optional leading non-numeric
    /// token, then `x0 y0 x1 y1 …`.
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace().peekable();
        if tokens.peek().is_some_and(|t| t.parse::<i32>().is_err()) {
            tokens.next();
        }
        let nums = tokens
            .map(|t| {
                t.parse::<i32>()
                    .map_err(|_| IsohedralError::invalid_input(format!("'{t}' is not an integer")))
            })
            .collect::<Result<Vec<_>>>()?;
        if nums.len() % 2 != 0 {
            return Err(IsohedralError::invalid_input(format!(
                "odd number of coordinates ({})",
                nums.len()
            )));
        }
        Self::from_cells(nums.chunks_exact(2).map(|p| Cell::new(p[0], p[1])))
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed polyomino.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Edge-connected and without holes.
    pub fn is_simply_connected(&self) -> bool {
        let set: HashSet<Cell> = self.cells.iter().copied().collect();
        connected(&self.cells, &set) && !has_hole(&self.cells, &set)
    }

    /// Clockwise boundary word over the square grid's unit steps. Fails for a
    /// shape that is disconnected or has holes, since its outline alone
    /// does not describe it.
    pub fn boundary_word(&self) -> Result<Vec<Step>> {
        if !self.is_simply_connected() {
            return Err(IsohedralError::invalid_input(
                "polyomino is not simply connected",
            ));
        }
        let mut edges: HashMap<Cell, u8> = HashMap::new();
        let mut mark = |v: Cell, a: usize, b: usize| {
            *edges.entry(v).or_default() |= (1 << a) | (1 << b);
        };
        for &c in &self.cells {
            mark(c, N, E);
            mark(c + Cell::new(1, 0), N, W);
            mark(c + Cell::new(0, 1), E, S);
            mark(c + Cell::new(1, 1), S, W);
        }

        let start = self.cells[0];
        let mut word = vec![dir(N)];
        let mut cur = start + dir(N);
        let mut heading = N;
        let limit = 4 * self.cells.len() + 4;
        while cur != start {
            if word.len() > limit {
                return Err(IsohedralError::invalid_input("boundary walk does not close"));
            }
            let at = edges.get(&cur).copied().unwrap_or(0);
            let left = (heading + 1) % 4;
            let right = (heading + 3) % 4;
            heading = [left, heading, right]
                .into_iter()
                .find(|&d| at & (1 << d) != 0)
                .ok_or_else(|| IsohedralError::invalid_input("boundary walk reached a dead end"))?;
            word.push(dir(heading));
            cur += dir(heading);
        }
        Ok(word)
    }
}

fn connected(cells: &[Cell], set: &HashSet<Cell>) -> bool {
    let mut seen = HashSet::from([cells[0]]);
    let mut stack = vec![cells[0]];
    while let Some(c) = stack.pop() {
        for (dx, dy) in NEIGHBOURS {
            let nb = c + Cell::new(dx, dy);
            if set.contains(&nb) && seen.insert(nb) {
                stack.push(nb);
            }
        }
    }
    seen.len() == cells.len()
}

/// Flood-fills the complement inside the bounding box grown by one; any
/// empty cell not reached is enclosed.
fn has_hole(cells: &[Cell], set: &HashSet<Cell>) -> bool {
    let (mut lo, mut hi) = (cells[0], cells[0]);
    for c in cells {
        lo = lo.inf(c);
        hi = hi.sup(c);
    }
    lo -= Cell::new(1, 1);
    hi += Cell::new(1, 1);
    let inside = |c: &Cell| c.x >= lo.x && c.y >= lo.y && c.x <= hi.x && c.y <= hi.y;

    let mut seen = HashSet::from([lo]);
    let mut stack = vec![lo];
    while let Some(c) = stack.pop() {
        for (dx, dy) in NEIGHBOURS {
            let nb = c + Cell::new(dx, dy);
            if inside(&nb) && !set.contains(&nb) && seen.insert(nb) {
                stack.push(nb);
            }
        }
    }
    let area = ((hi.x - lo.x + 1) * (hi.y - lo.y + 1)) as usize;
    seen.len() + cells.len() != area
}
