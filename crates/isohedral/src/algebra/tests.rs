use std::collections::BTreeMap;

use nalgebra::{Matrix2, Rotation2, Vector2};

use super::*;
use crate::error::IsohedralError;

fn close(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (a - b).norm() < 1e-9
}

fn reflection_matrix(theta_deg: i32) -> Matrix2<f64> {
    let t = 2.0 * (theta_deg as f64).to_radians();
    Matrix2::new(t.cos(), t.sin(), t.sin(), -t.cos())
}

#[test]
fn presets_agree_with_euclidean_geometry() {
    for grid in Grid::ALL {
        let alg = grid.algebra().unwrap();
        let rot = Rotation2::new((alg.min_angle() as f64).to_radians());
        for s in alg.alphabet() {
            let v = grid.cartesian(s);
            assert!(close(grid.cartesian(alg.complement(s).unwrap()), -v), "{grid} complement {s:?}");
            assert!(close(grid.cartesian(alg.rotate_ccw(s).unwrap()), rot * v), "{grid} ccw {s:?}");
            assert!(
                close(grid.cartesian(alg.rotate_cw(s).unwrap()), rot.inverse() * v),
                "{grid} cw {s:?}"
            );
            for theta in alg.reflection_angles() {
                let image = grid.cartesian(alg.reflect(theta, s).unwrap());
                assert!(close(image, reflection_matrix(theta) * v), "{grid} refl {theta} {s:?}");
            }
        }
    }
}

#[test]
fn preset_shapes() {
    let sq = grids::square().unwrap();
    assert_eq!(sq.min_angle(), 90);
    assert_eq!(sq.alphabet().count(), 4);
    assert_eq!(sq.reflection_angles().collect::<Vec<_>>(), vec![-45, 0, 45, 90]);
    let kite = grids::kite().unwrap();
    assert_eq!(kite.alphabet().count(), 12);
    assert_eq!(
        kite.reflection_angles().collect::<Vec<_>>(),
        vec![-60, -30, 0, 30, 60, 90]
    );
}

#[test]
fn rotation_steps_respect_min_angle() {
    let sq = grids::square().unwrap();
    assert_eq!(sq.rotation_steps(90), Some(1));
    assert_eq!(sq.rotation_steps(0), Some(0));
    assert_eq!(sq.rotation_steps(-90), Some(3));
    assert_eq!(sq.rotation_steps(60), None);
    let hex = grids::hex().unwrap();
    assert_eq!(hex.rotation_steps(120), Some(2));
    assert_eq!(hex.rotation_steps(90), None);
    let n = Step::new(0, 1);
    assert_eq!(sq.rotate_ccw_by(n, 2).unwrap(), Step::new(0, -1));
}

#[test]
fn perpendicular_axes_stay_in_range() {
    assert_eq!(DirectionAlgebra::<Step>::perpendicular(-45), 45);
    assert_eq!(DirectionAlgebra::<Step>::perpendicular(90), 0);
    assert_eq!(DirectionAlgebra::<Step>::perpendicular(0), 90);
    assert_eq!(DirectionAlgebra::<Step>::perpendicular(30), -60);
    assert_eq!(DirectionAlgebra::<Step>::perpendicular(-60), 30);
}

#[test]
fn unknown_symbol_is_reported() {
    let sq = grids::square().unwrap();
    let err = sq.complement(Step::new(2, 0)).unwrap_err();
    assert!(matches!(err, IsohedralError::InvalidSymbol { .. }));
    assert!(sq.reflect(30, Step::new(0, 1)).is_err());
}

fn char_tables() -> (SymbolMap<char>, SymbolMap<char>, SymbolMap<char>) {
    (
        involution(&[('N', 'S'), ('E', 'W')]),
        cyclic(&[&['E', 'S', 'W', 'N']]),
        cyclic(&[&['E', 'N', 'W', 'S']]),
    )
}

#[test]
fn char_alphabet_builds() {
    let (comp, cw, ccw) = char_tables();
    let mut refl = BTreeMap::new();
    refl.insert(45, involution(&[('N', 'E'), ('S', 'W')]));
    let alg = DirectionAlgebra::new(90, comp, cw, ccw, refl).unwrap();
    assert_eq!(alg.reflect(45, 'N').unwrap(), 'E');
    assert!(alg.contains(&'W'));
    assert!(!alg.contains(&'X'));
}

#[test]
fn inconsistent_tables_are_rejected() {
    let (comp, cw, ccw) = char_tables();
    assert!(matches!(
        DirectionAlgebra::new(45, comp.clone(), cw.clone(), ccw.clone(), BTreeMap::new()),
        Err(IsohedralError::InvalidAlgebra { .. })
    ));

    // ccw that is not the inverse of cw
    let bad_ccw = cyclic(&[&['E', 'S', 'W', 'N']]);
    assert!(DirectionAlgebra::new(90, comp.clone(), cw.clone(), bad_ccw, BTreeMap::new()).is_err());

    // reflection that is not an involution
    let mut refl = BTreeMap::new();
    refl.insert(0, SymbolMap::from([('N', 'E'), ('E', 'S'), ('S', 'W'), ('W', 'N')]));
    assert!(DirectionAlgebra::new(90, comp.clone(), cw.clone(), ccw.clone(), refl).is_err());

    // axis not a multiple of 45
    let mut refl = BTreeMap::new();
    refl.insert(30, involution(&[('N', 'E'), ('S', 'W')]));
    assert!(DirectionAlgebra::new(90, comp.clone(), cw.clone(), ccw.clone(), refl).is_err());

    // self-complementary symbol
    let comp_fixed = SymbolMap::from([('N', 'N'), ('S', 'S'), ('E', 'W'), ('W', 'E')]);
    assert!(DirectionAlgebra::new(90, comp_fixed, cw, ccw, BTreeMap::new()).is_err());
}

#[test]
fn words_parse_and_format() {
    let word = Grid::Square.parse_word("NE SW").unwrap();
    assert_eq!(word.len(), 4);
    assert_eq!(word[1], Step::new(1, 0));
    assert_eq!(Grid::Square.format_word(&word).as_deref(), Some("NESW"));
    assert_eq!(
        Grid::Hex.format_word(&Grid::Hex.parse_word("UrDlLR").unwrap()).as_deref(),
        Some("UrDlLR")
    );
    assert!(Grid::Square.parse_word("NEX").is_err());
    assert!(Grid::Kite.parse_word("N").is_err());
    assert_eq!("omino".parse::<Grid>().unwrap(), Grid::Square);
    assert!("penrose".parse::<Grid>().is_err());
}
