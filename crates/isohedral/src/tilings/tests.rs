//! Known tilers and non-tilers per case, plus properties over random
//! polyominoes.

use proptest::prelude::*;

use super::*;
use crate::algebra::{grids, DirectionAlgebra, Grid, Step, Symbol};
use crate::omino::Polyomino;
use crate::sample::{PolyominoSampler, ReplayToken};
use crate::word::tiles_cycle;

fn square(i: usize) -> String {
    ["N", "E", "S", "W"].iter().map(|d| d.repeat(i)).collect()
}

fn long_rectangle(i: usize) -> String {
    format!("N{}S{}", "E".repeat(i), "W".repeat(i))
}

fn tall_rectangle(i: usize) -> String {
    format!("{}E{}W", "N".repeat(i), "S".repeat(i))
}

fn rectangle(n: usize, m: usize) -> String {
    format!("{}{}{}{}", "N".repeat(n), "E".repeat(m), "S".repeat(n), "W".repeat(m))
}

fn palindromic(half: &str) -> String {
    let back: String = half.chars().rev().collect();
    format!("{half}{back}")
}

fn witness_on(grid: Grid, text: &str, case: TilingCase) -> Option<Witness> {
    let alg = grid.algebra().unwrap();
    let word = BoundaryWord::new(grid.parse_word(text).unwrap(), &alg).unwrap();
    let found = Analysis::new(&word).witness(case).unwrap();
    if let Some(w) = &found {
        assert!(tiles_cycle(w, word.len()), "{case} witness {w:?} does not tile {text}");
    }
    found
}

#[track_caller]
fn tiles(text: &str, case: TilingCase) {
    assert!(
        witness_on(Grid::Square, text, case).is_some(),
        "{case} should accept {text}"
    );
}

#[track_caller]
fn does_not_tile(text: &str, case: TilingCase) {
    assert!(
        witness_on(Grid::Square, text, case).is_none(),
        "{case} should reject {text}"
    );
}

#[test]
fn translation() {
    use TilingCase::Translation as T;
    for i in 1..=5 {
        tiles(&square(i), T);
        tiles(&long_rectangle(i), T);
        tiles(&tall_rectangle(i), T);
    }
    tiles("NNESESSWNW", T);
    tiles("NNNESESSWW", T);
    tiles("NENENESEESWSWNWSWW", T);
    does_not_tile("NENENESEESSWWNWSWW", T);
    does_not_tile("NENNESSSEESWWWNW", T);
    does_not_tile("WWWNNESENESS", T);
}

#[test]
fn translation_needs_even_length() {
    assert!(witness_on(Grid::Iamond, "ELl", TilingCase::Translation).is_none());
}

#[test]
fn half_turn() {
    use TilingCase::HalfTurn as H;
    for i in 1..=5 {
        tiles(&square(i), H);
        tiles(&long_rectangle(i), H);
        tiles(&tall_rectangle(i), H);
    }
    tiles("NNESESSWWW", H);
    tiles("NNNESESSWW", H);
    tiles("NWNEENWNENESESESSWSWNWSW", H);
    tiles("NENENESEESWSWNWSWW", H);
    tiles("WWWNNESENESS", H);

    let b = palindromic("ENESEENES");
    let c = palindromic("SSESSW");
    let d = "W".repeat(10);
    let e = palindromic("NWWNEE");
    tiles(&format!("{b}{c}{d}{e}"), H);

    does_not_tile("NENNESSSEESWWWNW", H);
    does_not_tile("WWWWWNNESEEENESS", H);
}

#[test]
fn quarter_turn() {
    use TilingCase::QuarterTurn as Q;
    for i in 1..=5 {
        tiles(&square(i), Q);
    }
    tiles(&long_rectangle(2), Q);
    for i in 3..=5 {
        does_not_tile(&long_rectangle(i), Q);
    }
    tiles("NNNESESSWW", Q);
    does_not_tile("NNENESESSWNWSW", Q);
}

#[test]
fn type_1_reflection() {
    use TilingCase::Type1Reflection as R;
    for i in 1..=5 {
        tiles(&square(i), R);
        tiles(&rectangle(2, i), R);
    }
    for i in 4..=7 {
        tiles(&rectangle(3, i), R);
    }
    does_not_tile("NWNENENESESESWSWNWSW", R);
    tiles("NNWNENNNENWNEEEENESEEESESESESWSWSWWWWNWSWWWW", R);
}

#[test]
fn type_2_reflection() {
    use TilingCase::Type2Reflection as R;
    for i in 1..=5 {
        tiles(&square(i), R);
        tiles(&rectangle(2, i), R);
    }
    for i in 4..=7 {
        tiles(&rectangle(3, i), R);
    }
    // non-empty A, Â
    tiles("NNENWNNNEENNEEEENEESESSWWSSSESWSSWNWWSWWWW", R);
    does_not_tile("NNENWNNNEENNEEEENEESESSWWSSSWSESSWNWWSWWWW", R);
    // empty A, Â
    tiles("WNWNNNEESSEEWSWS", R);
    does_not_tile("WNWNNNEESSEEWWSS", R);
}

#[test]
fn type_1_half_turn_reflection() {
    use TilingCase::Type1HalfTurnReflection as R;
    for i in 1..=5 {
        tiles(&square(i), R);
    }
    // non-empty A, Â
    does_not_tile("NNWNENNNENWNEEEENESEEESSSSSESWSSWWWNWSWWWW", R);
    tiles("NNNWNENNNNENWNEEEENESEEESSSSSESWWSESWWWNWSWWWW", R);
    // empty A, Â
    tiles("NNNNNNESESESWSWWSW", R);
    tiles("NNWNEENWNNESESESWSWWSW", R);
    does_not_tile("NNWNENNNESESESWSWWSW", R);
    does_not_tile("NNWNEENWNNESSEESWSWWSW", R);
}

#[test]
fn type_2_half_turn_reflection() {
    use TilingCase::Type2HalfTurnReflection as R;
    for i in 1..=5 {
        tiles(&square(i), R);
    }
    // non-empty D, B; empty A, C
    tiles("NENWNENESESESWSWNWSW", R);
    // non-empty D, B, A, C
    tiles("NENWWNENNENWNENESESESWSSSSSWNWSW", R);
    // empty D
    tiles("NENWWNENENESESSSSWNWSW", R);
}

#[test]
fn triangular_cases_need_a_sixty_degree_grid() {
    for case in [TilingCase::Case7, TilingCase::Case8a, TilingCase::Case8b] {
        assert!(!case.applies_to(&grids::square().unwrap()));
        does_not_tile("NESW", case);
    }
}

#[test]
fn hexagon_tilings() {
    let hexagon = "URrDlL";
    assert!(witness_on(Grid::Hex, hexagon, TilingCase::Translation).is_some());
    let w = witness_on(Grid::Hex, hexagon, TilingCase::Case7).unwrap();
    assert_eq!(w.len(), 3);
    assert!(w.iter().all(|f| f.len(6) == 2));
}

fn f(start: usize, end: usize) -> Factor {
    Factor::new(start, end)
}

/// Witness for `case`, with each factor checked against the θ-drome family
/// named at the same position (180 for palindromes).
#[track_caller]
fn rotation_witness<S: Symbol>(
    word: &BoundaryWord<'_, S>,
    case: TilingCase,
    thetas: &[i32],
) -> Witness {
    let an = Analysis::new(word);
    let witness = an.witness(case).unwrap().expect("rotation tiling");
    assert!(tiles_cycle(&witness, word.len()));
    assert_eq!(witness.len(), thetas.len(), "{case} witness {witness:?}");
    for (factor, &theta) in witness.iter().zip(thetas) {
        assert!(
            an.rotadromes(theta).unwrap().contains(factor),
            "{case}: {factor:?} is not a {theta}-drome"
        );
    }
    witness
}

fn iamond_word<'a>(alg: &'a DirectionAlgebra<Step>, text: &str) -> BoundaryWord<'a, Step> {
    BoundaryWord::new(Grid::Iamond.parse_word(text).unwrap(), alg).unwrap()
}

#[test]
fn iamond_rotation_cases() {
    use TilingCase::{Case7, Case8a, Case8b};
    let alg = grids::iamond().unwrap();

    // hexagon of six triangles: 120° centres at alternate corners
    let hexagon = iamond_word(&alg, "ErlWLR");
    assert_eq!(
        rotation_witness(&hexagon, Case7, &[120, 120, 120]),
        vec![f(5, 0), f(1, 2), f(3, 4)]
    );
    assert!(Analysis::new(&hexagon).witness(Case8a).unwrap().is_none());

    // single triangle: one side a palindrome, the other two a 60-drome
    let triangle = iamond_word(&alg, "ElL");
    assert_eq!(rotation_witness(&triangle, Case8a, &[180, 60]), vec![f(0, 0), f(1, 2)]);
    assert_eq!(rotation_witness(&triangle, Case8b, &[180, 60]), vec![f(0, 0), f(1, 2)]);
    assert!(Analysis::new(&triangle).witness(Case7).unwrap().is_none());

    // trapezoid of three triangles uses all three families
    let trapezoid = iamond_word(&alg, "EElWL");
    assert_eq!(
        rotation_witness(&trapezoid, Case8a, &[180, 60, 120]),
        vec![f(0, 0), f(1, 2), f(3, 4)]
    );
    assert_eq!(
        rotation_witness(&trapezoid, Case8b, &[180, 120, 60]),
        vec![f(1, 1), f(2, 3), f(4, 0)]
    );
    assert_eq!(decide(&trapezoid).unwrap().unwrap().case, TilingCase::HalfTurn);
}

#[test]
fn iamond_reflection_cases() {
    use TilingCase::Type1Reflection as R;
    let alg = grids::iamond().unwrap();
    let rhombus = iamond_word(&alg, "ElWR");
    assert_eq!(has_type_1_reflection_tiling(&rhombus).unwrap(), vec![f(0, 1), f(2, 3)]);
    // triangle of four: reflect squares around two of its corners
    let big_triangle = iamond_word(&alg, "EEllLL");
    let witness = has_type_1_reflection_tiling(&big_triangle).unwrap();
    assert_eq!(witness, vec![f(0, 1), f(2, 5)]);
    assert!(has_translation_tiling(&big_triangle).unwrap().is_empty());
    let cases: Vec<TilingCase> = classify(&big_triangle).unwrap().iter().map(|t| t.case).collect();
    assert!(cases.contains(&R));
    assert!(cases.contains(&TilingCase::HalfTurn));
}

#[test]
fn kite_rotation_cases() {
    use TilingCase::{Case7, Case8a, Case8b};
    let alg = grids::kite().unwrap();
    // one kite of the deltoidal trihexagonal tiling, clockwise from the
    // hexagon centre: long edge, two short edges, long edge back
    let kite = BoundaryWord::new(
        vec![Step::new(1, 1), Step::new(1, -1), Step::new(0, -1), Step::new(-2, 1)],
        &alg,
    )
    .unwrap();

    // 60° centre at the hexagon centre, 120° centre at the far vertex
    assert_eq!(rotation_witness(&kite, Case8a, &[60, 120]), vec![f(3, 0), f(1, 2)]);
    assert_eq!(rotation_witness(&kite, Case8b, &[120, 60]), vec![f(1, 2), f(3, 0)]);
    assert!(Analysis::new(&kite).witness(Case7).unwrap().is_none());

    let first = decide(&kite).unwrap().unwrap();
    assert_eq!(first.case, TilingCase::HalfTurn);
    assert_eq!(first.witness, vec![f(0, 0), f(1, 1), f(2, 2), f(3, 3)]);
    assert!(has_translation_tiling(&kite).unwrap().is_empty());
}

#[test]
fn decision_order_and_classification() {
    let alg = grids::square().unwrap();
    let word = BoundaryWord::new(Grid::Square.parse_word("NESW").unwrap(), &alg).unwrap();
    let first = decide(&word).unwrap().unwrap();
    assert_eq!(first.case, TilingCase::Translation);
    assert!(has_isohedral_tiling(&word).unwrap());

    let all = classify(&word).unwrap();
    let cases: Vec<TilingCase> = all.iter().map(|t| t.case).collect();
    assert_eq!(
        cases,
        vec![
            TilingCase::Translation,
            TilingCase::HalfTurn,
            TilingCase::QuarterTurn,
            TilingCase::Type1Reflection,
            TilingCase::Type2Reflection,
            TilingCase::Type1HalfTurnReflection,
            TilingCase::Type2HalfTurnReflection,
        ]
    );
    assert_eq!(has_translation_tiling(&word).unwrap(), first.witness);
    assert!(has_case_7_tiling(&word).unwrap().is_empty());

    let iamond = grids::iamond().unwrap();
    let triangle = BoundaryWord::new(Grid::Iamond.parse_word("ELl").unwrap(), &iamond).unwrap();
    assert_eq!(decide(&triangle).unwrap().unwrap().case, TilingCase::HalfTurn);
}

#[test]
fn case_names_round_trip() {
    for case in TilingCase::ALL {
        assert_eq!(case.name().parse::<TilingCase>().unwrap(), case);
    }
    assert!("case_9".parse::<TilingCase>().is_err());
}

#[test]
fn small_polyominoes_all_tile() {
    // every polyomino with at most six cells tiles isohedrally
    let alg = grids::square().unwrap();
    for cells in 1..=6 {
        let sampler = PolyominoSampler::new(cells).unwrap();
        for poly in sampler.draw_many(11, 25).unwrap() {
            let word = BoundaryWord::new(poly.boundary_word().unwrap(), &alg).unwrap();
            assert!(has_isohedral_tiling(&word).unwrap(), "{:?}", poly.cells());
        }
    }
}

fn random_word(cells: usize, seed: u64, index: u64) -> Vec<Step> {
    let poly: Polyomino = PolyominoSampler::new(cells)
        .unwrap()
        .draw(ReplayToken::new(seed, index))
        .unwrap();
    poly.boundary_word().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn decision_ignores_starting_point(cells in 4usize..14, seed in any::<u64>(), shift in 0usize..64) {
        let alg = grids::square().unwrap();
        let word = BoundaryWord::new(random_word(cells, seed, 0), &alg).unwrap();
        let moved = word.rotated_start(shift);
        prop_assert_eq!(
            has_isohedral_tiling(&word).unwrap(),
            has_isohedral_tiling(&moved).unwrap()
        );
    }

    #[test]
    fn witnesses_tile_and_repeat(cells in 4usize..14, seed in any::<u64>()) {
        let alg = grids::square().unwrap();
        let word = BoundaryWord::new(random_word(cells, seed, 1), &alg).unwrap();
        let first = classify(&word).unwrap();
        let again = classify(&word).unwrap();
        prop_assert_eq!(&first, &again);
        for tiling in &first {
            prop_assert!(tiles_cycle(&tiling.witness, word.len()), "{} {:?}", tiling.case, tiling.witness);
        }
    }
}
