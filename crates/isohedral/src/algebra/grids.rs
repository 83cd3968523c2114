//! Direction algebras of the four supported grids.
//!
//! Directions are lattice steps in the same integer coordinates the boundary
//! tracers use: the square grid in the standard basis, the 60°-grids (hex,
//! iamond, kite) in the skew basis `e1 = (1, 0)`, `e2 = (1/2, √3/2)`.
//! [`Grid::basis`] embeds a step into the Euclidean plane, which is how the
//! tables below are checked against real rotations and reflections.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix2, Vector2};

use super::types::{cyclic, involution, DirectionAlgebra, SymbolMap};
use crate::error::{IsohedralError, Result};

/// A direction symbol: one lattice step.
pub type Step = Vector2<i32>;

#[inline]
fn st(x: i32, y: i32) -> Step {
    Step::new(x, y)
}

/// Grid kinds with a built-in direction algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grid {
    Square,
    Hex,
    Iamond,
    Kite,
}

impl Grid {
    pub const ALL: [Grid; 4] = [Grid::Square, Grid::Hex, Grid::Iamond, Grid::Kite];

    pub fn algebra(self) -> Result<DirectionAlgebra<Step>> {
        match self {
            Grid::Square => square(),
            Grid::Hex => hex(),
            Grid::Iamond => iamond(),
            Grid::Kite => kite(),
        }
    }

    /// Lattice-to-Euclidean embedding (columns are the lattice basis vectors).
    pub fn basis(self) -> Matrix2<f64> {
        match self {
            Grid::Square => Matrix2::identity(),
            Grid::Hex | Grid::Iamond | Grid::Kite => {
                Matrix2::new(1.0, 0.5, 0.0, 3.0_f64.sqrt() / 2.0)
            }
        }
    }

    #[inline]
    pub fn cartesian(self, step: Step) -> Vector2<f64> {
        self.basis() * step.cast::<f64>()
    }

    /// Single-character alphabet, if the grid has one.
    fn letters(self) -> &'static [(char, (i32, i32))] {
        match self {
            Grid::Square => &[('N', (0, 1)), ('E', (1, 0)), ('S', (0, -1)), ('W', (-1, 0))],
            Grid::Hex => &[
                ('U', (-1, 2)),
                ('D', (1, -2)),
                ('R', (1, 1)),
                ('l', (-1, -1)),
                ('L', (-2, 1)),
                ('r', (2, -1)),
            ],
            Grid::Iamond => &[
                ('E', (3, 0)),
                ('W', (-3, 0)),
                ('R', (0, 3)),
                ('l', (0, -3)),
                ('L', (-3, 3)),
                ('r', (3, -3)),
            ],
            Grid::Kite => &[],
        }
    }

    /// Parse a word written in the grid's single-character alphabet.
    pub fn parse_word(self, text: &str) -> Result<Vec<Step>> {
        let letters = self.letters();
        if letters.is_empty() {
            return Err(IsohedralError::invalid_input(format!(
                "the {self} grid has no character alphabet"
            )));
        }
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                letters
                    .iter()
                    .find(|(l, _)| *l == c)
                    .map(|&(_, (x, y))| st(x, y))
                    .ok_or_else(|| {
                        IsohedralError::invalid_input(format!("'{c}' is not a {self} direction"))
                    })
            })
            .collect()
    }

    /// Inverse of [`Grid::parse_word`]; `None` if a step has no letter.
    pub fn format_word(self, word: &[Step]) -> Option<String> {
        let letters = self.letters();
        word.iter()
            .map(|s| {
                letters
                    .iter()
                    .find(|(_, (x, y))| s.x == *x && s.y == *y)
                    .map(|&(c, _)| c)
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Grid::Square => "square",
            Grid::Hex => "hex",
            Grid::Iamond => "iamond",
            Grid::Kite => "kite",
        };
        f.write_str(name)
    }
}

impl FromStr for Grid {
    type Err = IsohedralError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "square" | "omino" => Ok(Grid::Square),
            "hex" => Ok(Grid::Hex),
            "iamond" => Ok(Grid::Iamond),
            "kite" => Ok(Grid::Kite),
            other => Err(IsohedralError::invalid_input(format!("unknown grid '{other}'"))),
        }
    }
}

fn reflections(tables: Vec<(i32, SymbolMap<Step>)>) -> BTreeMap<i32, SymbolMap<Step>> {
    tables.into_iter().collect()
}

/// Adds the fixed points of a reflection to its swap pairs.
fn reflection(swaps: &[(Step, Step)], fixed: &[Step]) -> SymbolMap<Step> {
    let mut m = involution(swaps);
    for &s in fixed {
        m.insert(s, s);
    }
    m
}

/// Polyominoes: unit steps, quarter turns, axes at -45, 0, 45 and 90 degrees.
pub fn square() -> Result<DirectionAlgebra<Step>> {
    let (n, e, s, w) = (st(0, 1), st(1, 0), st(0, -1), st(-1, 0));
    let ccw = cyclic(&[&[e, n, w, s]]);
    let cw = cyclic(&[&[e, s, w, n]]);
    DirectionAlgebra::new(
        90,
        involution(&[(n, s), (e, w)]),
        cw,
        ccw,
        reflections(vec![
            (-45, reflection(&[(n, w), (e, s)], &[])),
            (0, reflection(&[(n, s)], &[e, w])),
            (45, reflection(&[(n, e), (s, w)], &[])),
            (90, reflection(&[(e, w)], &[n, s])),
        ]),
    )
}

/// Polyhexes traced along hexagon edges.
pub fn hex() -> Result<DirectionAlgebra<Step>> {
    let (u, d) = (st(-1, 2), st(1, -2));
    let (ne, sw) = (st(1, 1), st(-1, -1));
    let (nw, se) = (st(-2, 1), st(2, -1));
    long_edge_algebra(u, d, ne, sw, nw, se)
}

fn long_edge_algebra(
    u: Step,
    d: Step,
    ne: Step,
    sw: Step,
    nw: Step,
    se: Step,
) -> Result<DirectionAlgebra<Step>> {
    DirectionAlgebra::new(
        60,
        involution(&[(u, d), (ne, sw), (nw, se)]),
        cyclic(&[&[ne, se, d, sw, nw, u]]),
        cyclic(&[&[ne, u, nw, sw, d, se]]),
        reflections(vec![
            (-60, reflection(&[(u, nw), (ne, sw), (se, d)], &[])),
            (-30, reflection(&[(u, sw), (ne, d)], &[se, nw])),
            (0, reflection(&[(u, d), (ne, se), (nw, sw)], &[])),
            (30, reflection(&[(u, se), (d, nw)], &[ne, sw])),
            (60, reflection(&[(u, ne), (se, nw), (d, sw)], &[])),
            (90, reflection(&[(ne, nw), (se, sw)], &[u, d])),
        ]),
    )
}

/// Polyiamonds: triangle edges at multiples of 60 degrees.
pub fn iamond() -> Result<DirectionAlgebra<Step>> {
    let (e, w) = (st(3, 0), st(-3, 0));
    let (ne, sw) = (st(0, 3), st(0, -3));
    let (nw, se) = (st(-3, 3), st(3, -3));
    DirectionAlgebra::new(
        60,
        involution(&[(e, w), (ne, sw), (nw, se)]),
        cyclic(&[&[e, se, sw, w, nw, ne]]),
        cyclic(&[&[e, ne, nw, w, sw, se]]),
        reflections(vec![
            (-60, reflection(&[(e, sw), (ne, w)], &[se, nw])),
            (-30, reflection(&[(e, se), (ne, sw), (w, nw)], &[])),
            (0, reflection(&[(ne, se), (sw, nw)], &[e, w])),
            (30, reflection(&[(e, ne), (nw, se), (w, sw)], &[])),
            (60, reflection(&[(e, nw), (w, se)], &[ne, sw])),
            (90, reflection(&[(ne, nw), (e, w), (sw, se)], &[])),
        ]),
    )
}

/// Polykites: long edges as on the hex grid plus short edges along the
/// triangle lattice; rotations and reflections never mix the two kinds.
pub fn kite() -> Result<DirectionAlgebra<Step>> {
    let (u, d) = (st(-1, 2), st(1, -2));
    let (ne_l, sw_l) = (st(1, 1), st(-1, -1));
    let (nw_l, se_l) = (st(-2, 1), st(2, -1));
    let (e, w) = (st(1, 0), st(-1, 0));
    let (ne, sw) = (st(0, 1), st(0, -1));
    let (nw, se) = (st(-1, 1), st(1, -1));

    let long = long_edge_algebra(u, d, ne_l, sw_l, nw_l, se_l)?;
    let short = short_tables(e, w, ne, sw, nw, se);

    let mut complement = involution(&[(e, w), (ne, sw), (nw, se)]);
    let mut cw = cyclic(&[&[e, se, sw, w, nw, ne]]);
    let mut ccw = cyclic(&[&[e, ne, nw, w, sw, se]]);
    let mut refl = short;
    for s in long.alphabet().collect::<Vec<_>>() {
        complement.insert(s, long.complement(s)?);
        cw.insert(s, long.rotate_cw(s)?);
        ccw.insert(s, long.rotate_ccw(s)?);
        for theta in long.reflection_angles() {
            let image = long.reflect(theta, s)?;
            refl.entry(theta).or_default().insert(s, image);
        }
    }
    DirectionAlgebra::new(60, complement, cw, ccw, refl)
}

fn short_tables(
    e: Step,
    w: Step,
    ne: Step,
    sw: Step,
    nw: Step,
    se: Step,
) -> BTreeMap<i32, SymbolMap<Step>> {
    reflections(vec![
        (-60, reflection(&[(e, sw), (ne, w)], &[se, nw])),
        (-30, reflection(&[(e, se), (sw, ne), (nw, w)], &[])),
        (0, reflection(&[(se, ne), (nw, sw)], &[e, w])),
        (30, reflection(&[(e, ne), (nw, se), (w, sw)], &[])),
        (60, reflection(&[(e, nw), (w, se)], &[ne, sw])),
        (90, reflection(&[(ne, nw), (e, w), (se, sw)], &[])),
    ])
}
