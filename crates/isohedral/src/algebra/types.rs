//! The direction algebra: complement, elementary rotations and axis reflections
//! over a closed alphabet of edge directions.
//!
//! One value per grid kind, validated once at construction and shared
//! read-only by every search afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::error::{IsohedralError, Result};

/// Anything usable as an edge-direction label.
pub trait Symbol: Copy + Eq + Hash + fmt::Debug {}
impl<T: Copy + Eq + Hash + fmt::Debug> Symbol for T {}

/// Total map over the alphabet.
pub type SymbolMap<S> = HashMap<S, S>;

/// Grid-specific symbolic geometry.
///
/// Invariants (checked by [`DirectionAlgebra::new`]):
/// - the alphabet is the key set of `complement`; every table is total over it
///   and maps into it;
/// - `complement` and every reflection are involutions, and `complement` has
///   no fixed point;
/// - `cw` and `ccw` are mutually inverse and `ccw` has order `360 / min_angle`;
/// - reflection axes are multiples of `min_angle / 2` in `(-90, 90]`.
#[derive(Clone, Debug)]
pub struct DirectionAlgebra<S: Symbol> {
    min_angle: i32,
    complement: SymbolMap<S>,
    cw: SymbolMap<S>,
    ccw: SymbolMap<S>,
    reflections: BTreeMap<i32, SymbolMap<S>>,
}

impl<S: Symbol> DirectionAlgebra<S> {
    pub fn new(
        min_angle: i32,
        complement: SymbolMap<S>,
        cw: SymbolMap<S>,
        ccw: SymbolMap<S>,
        reflections: BTreeMap<i32, SymbolMap<S>>,
    ) -> Result<Self> {
        if min_angle != 60 && min_angle != 90 {
            return Err(IsohedralError::invalid_algebra(format!(
                "minimum angle must be 60 or 90, got {min_angle}"
            )));
        }
        if complement.is_empty() {
            return Err(IsohedralError::invalid_algebra("empty alphabet"));
        }
        let alg = Self {
            min_angle,
            complement,
            cw,
            ccw,
            reflections,
        };
        alg.validate()?;
        Ok(alg)
    }

    fn validate(&self) -> Result<()> {
        check_total("complement", &self.complement, &self.complement)?;
        check_total("cw", &self.cw, &self.complement)?;
        check_total("ccw", &self.ccw, &self.complement)?;
        check_involution("complement", &self.complement)?;
        if let Some(s) = self.complement.iter().find(|(a, b)| a == b).map(|(a, _)| a) {
            return Err(IsohedralError::invalid_algebra(format!(
                "{s:?} is its own complement"
            )));
        }
        let order = 360 / self.min_angle;
        for &s in self.complement.keys() {
            if self.cw[&self.ccw[&s]] != s {
                return Err(IsohedralError::invalid_algebra(format!(
                    "cw does not undo ccw at {s:?}"
                )));
            }
            let mut r = s;
            for _ in 0..order {
                r = self.ccw[&r];
            }
            if r != s {
                return Err(IsohedralError::invalid_algebra(format!(
                    "ccw applied {order} times does not fix {s:?}"
                )));
            }
        }
        let half = self.min_angle / 2;
        for (&theta, table) in &self.reflections {
            if theta % half != 0 || theta <= -90 || theta > 90 {
                return Err(IsohedralError::invalid_algebra(format!(
                    "reflection axis {theta} is not a multiple of {half} in (-90, 90]"
                )));
            }
            let name = format!("reflection {theta}");
            check_total(&name, table, &self.complement)?;
            check_involution(&name, table)?;
        }
        Ok(())
    }

    /// The grid's elementary turn in degrees (60 or 90).
    #[inline]
    pub fn min_angle(&self) -> i32 {
        self.min_angle
    }

    #[inline]
    pub fn contains(&self, s: &S) -> bool {
        self.complement.contains_key(s)
    }

    /// Alphabet in unspecified order.
    pub fn alphabet(&self) -> impl Iterator<Item = S> + '_ {
        self.complement.keys().copied()
    }

    #[inline]
    pub fn complement(&self, s: S) -> Result<S> {
        lookup(&self.complement, s)
    }

    #[inline]
    pub fn rotate_cw(&self, s: S) -> Result<S> {
        lookup(&self.cw, s)
    }

    #[inline]
    pub fn rotate_ccw(&self, s: S) -> Result<S> {
        lookup(&self.ccw, s)
    }

    /// Counterclockwise rotation by `steps` elementary turns.
    pub fn rotate_ccw_by(&self, s: S, steps: usize) -> Result<S> {
        let mut r = s;
        for _ in 0..steps {
            r = self.rotate_ccw(r)?;
        }
        Ok(r)
    }

    /// Elementary turns making up `degrees` (mod 360), or `None` when the
    /// angle is not a multiple of the grid's minimum angle.
    pub fn rotation_steps(&self, degrees: i32) -> Option<usize> {
        let d = degrees.rem_euclid(360);
        if d % self.min_angle == 0 {
            Some((d / self.min_angle) as usize)
        } else {
            None
        }
    }

    /// Image of `s` under reflection across the axis at `theta` degrees.
    pub fn reflect(&self, theta: i32, s: S) -> Result<S> {
        let table = self.reflections.get(&theta).ok_or_else(|| {
            IsohedralError::invalid_input(format!("no reflection axis at {theta} degrees"))
        })?;
        lookup(table, s)
    }

    /// Configured reflection axes, ascending.
    pub fn reflection_angles(&self) -> impl Iterator<Item = i32> + '_ {
        self.reflections.keys().copied()
    }

    /// The axis perpendicular to `theta`, normalized into `(-90, 90]`.
    #[inline]
    pub fn perpendicular(theta: i32) -> i32 {
        if theta > 0 {
            theta - 90
        } else {
            theta + 90
        }
    }
}

#[inline]
fn lookup<S: Symbol>(table: &SymbolMap<S>, s: S) -> Result<S> {
    table
        .get(&s)
        .copied()
        .ok_or_else(|| IsohedralError::invalid_symbol(&s))
}

fn check_total<S: Symbol>(name: &str, table: &SymbolMap<S>, alphabet: &SymbolMap<S>) -> Result<()> {
    if table.len() != alphabet.len() {
        return Err(IsohedralError::invalid_algebra(format!(
            "{name} has {} entries for an alphabet of {}",
            table.len(),
            alphabet.len()
        )));
    }
    for (a, b) in table {
        if !alphabet.contains_key(a) || !alphabet.contains_key(b) {
            return Err(IsohedralError::invalid_algebra(format!(
                "{name} maps {a:?} -> {b:?} outside the alphabet"
            )));
        }
    }
    Ok(())
}

fn check_involution<S: Symbol>(name: &str, table: &SymbolMap<S>) -> Result<()> {
    for (a, b) in table {
        if table.get(b) != Some(a) {
            return Err(IsohedralError::invalid_algebra(format!(
                "{name} is not an involution at {a:?}"
            )));
        }
    }
    Ok(())
}

/// Build a symmetric [`SymbolMap`]: each pair contributes both directions.
pub fn involution<S: Symbol>(pairs: &[(S, S)]) -> SymbolMap<S> {
    let mut m = HashMap::with_capacity(pairs.len() * 2);
    for &(a, b) in pairs {
        m.insert(a, b);
        m.insert(b, a);
    }
    m
}

/// Build a rotation table from one orbit: `cycle[k] -> cycle[k + 1]`.
pub fn cyclic<S: Symbol>(cycles: &[&[S]]) -> SymbolMap<S> {
    let mut m = HashMap::new();
    for cycle in cycles {
        for (k, &s) in cycle.iter().enumerate() {
            m.insert(s, cycle[(k + 1) % cycle.len()]);
        }
    }
    m
}
