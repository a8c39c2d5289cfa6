//! Integration tests for the scoring pipeline: validate, score, aggregate, render.
//!
//! Each test drives a whole game through the public free functions and checks
//! what a score sheet would show.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

#[path = "common/mod.rs"]
mod common;

use common::{game, game_of, perfect_game};
use tenpin_tally::{
    aggregate, frame_kind, frame_scores, glyphs, validate, FrameKind, GameConfig, Glyph, Pins,
    ThrowSequence,
};

fn score(throws: &mut ThrowSequence) -> (Vec<Option<Pins>>, Option<Pins>) {
    let config = GameConfig::tenpin();
    validate(throws, &config);
    let frames = frame_scores(throws, &config);
    let total = aggregate(&frames).total;
    (frames, total)
}

fn rendered(throws: &ThrowSequence) -> Vec<String> {
    glyphs(throws, &GameConfig::tenpin())
        .iter()
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Complete games
// ============================================================================

#[test]
fn test_perfect_game_scores_300() {
    let mut throws = perfect_game();
    let (frames, total) = score(&mut throws);

    assert!(frames.iter().all(|f| *f == Some(30)));
    assert_eq!(total, Some(300));

    let running = aggregate(&frames).running;
    let expected: Vec<_> = (1..=10).map(|i| Some(i * 30)).collect();
    assert_eq!(running, expected);
}

#[test]
fn test_perfect_game_glyphs() {
    let throws = perfect_game();
    let glyphs = rendered(&throws);
    for frame in 0..9 {
        assert_eq!(glyphs[frame * 2], "X");
        assert_eq!(glyphs[frame * 2 + 1], "");
    }
    assert_eq!(&glyphs[18..], &["X", "X", "X"]);
}

#[test]
fn test_twelve_strikes_entered_naively() {
    // a scorer typing 10 into every slot gets the same perfect game
    let mut throws = game_of(&[10; 21]);
    let (_, total) = score(&mut throws);
    assert_eq!(total, Some(300));
}

#[test]
fn test_gutter_game() {
    let mut throws = game_of(&[0; 20]);
    let (frames, total) = score(&mut throws);

    assert!(frames.iter().all(|f| *f == Some(0)));
    assert_eq!(total, Some(0));

    let glyphs = rendered(&throws);
    for frame in 0..10 {
        assert_eq!(glyphs[frame * 2], "G");
        assert_eq!(glyphs[frame * 2 + 1], "-");
    }
    assert_eq!(glyphs[20], "");
}

#[test]
fn test_all_spares_with_five_pins() {
    let mut throws = game_of(&[5; 21]);
    let (frames, total) = score(&mut throws);
    assert!(frames.iter().all(|f| *f == Some(15)));
    assert_eq!(total, Some(150));
}

#[test]
fn test_nine_and_miss_game() {
    let throws: Vec<Pins> = std::iter::repeat([9, 0]).take(10).flatten().collect();
    let mut throws = game_of(&throws);
    let (_, total) = score(&mut throws);
    assert_eq!(total, Some(90));
}

#[test]
fn test_mixed_game() {
    // X | 7 / | 9 - | X | G 8 | 8 / | G 6 | X | X | X 8 1
    #[rustfmt::skip]
    let mut throws = game(&[
        Some(10), None,
        Some(7), Some(3),
        Some(9), Some(0),
        Some(10), None,
        Some(0), Some(8),
        Some(8), Some(2),
        Some(0), Some(6),
        Some(10), None,
        Some(10), None,
        Some(10), Some(8), Some(1),
    ]);
    let (frames, total) = score(&mut throws);

    assert_eq!(
        frames,
        vec![
            Some(20),
            Some(19),
            Some(9),
            Some(18),
            Some(8),
            Some(10),
            Some(6),
            Some(30),
            Some(28),
            Some(19),
        ]
    );
    assert_eq!(total, Some(167));
    assert_eq!(
        rendered(&throws),
        vec![
            "X", "", "7", "/", "9", "-", "X", "", "G", "8", "8", "/", "G", "6", "X", "", "X", "",
            "X", "8", "1",
        ]
    );
}

// ============================================================================
// Single frames
// ============================================================================

#[test]
fn test_spare_takes_one_bonus_throw() {
    let mut throws = game(&[Some(5), Some(5), Some(3), None]);
    let (frames, total) = score(&mut throws);

    assert_eq!(frames[0], Some(13));
    assert_eq!(frames[1], None);
    assert_eq!(total, None);
    assert_eq!(rendered(&throws)[1], "/");
}

#[test]
fn test_strike_waits_for_two_bonus_throws() {
    let mut throws = game(&[Some(10), None, Some(4)]);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[0], None);

    let mut throws = game(&[Some(10), None, Some(4), Some(3)]);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[0], Some(17));
    assert_eq!(frames[1], Some(7));
}

#[test]
fn test_double_reads_across_strike_consumed_slot() {
    let mut throws = game(&[Some(10), None, Some(10), None, Some(6), Some(1)]);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[..3], [Some(26), Some(17), Some(7)]);
}

#[test]
fn test_strike_entered_with_second_throw_is_cleared() {
    let mut throws = game(&[Some(10), Some(6), Some(2), Some(3)]);
    let repairs = validate(&mut throws, &GameConfig::tenpin());

    assert_eq!(repairs.len(), 1);
    assert_eq!(throws.pins(1), None);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[0], Some(15));
}

#[test]
fn test_frame_kinds() {
    let mut throws = game(&[Some(10), None, Some(3), Some(7), Some(2), Some(2), Some(4)]);
    validate(&mut throws, &GameConfig::tenpin());
    let config = GameConfig::tenpin();

    assert_eq!(frame_kind(&throws, &config, 0), Some(FrameKind::Strike));
    assert_eq!(frame_kind(&throws, &config, 1), Some(FrameKind::Spare));
    assert_eq!(frame_kind(&throws, &config, 2), Some(FrameKind::Open));
    assert_eq!(frame_kind(&throws, &config, 3), None);
    assert_eq!(frame_kind(&throws, &config, 10), None);
}

// ============================================================================
// Last frame
// ============================================================================

fn with_last_frame(last: [Option<Pins>; 3]) -> ThrowSequence {
    let mut slots = vec![Some(0); 18];
    slots.extend(last);
    game(&slots)
}

#[test]
fn test_open_last_frame_has_no_bonus() {
    let mut throws = with_last_frame([Some(3), Some(4), Some(9)]);
    let (frames, total) = score(&mut throws);

    assert_eq!(throws.pins(20), None);
    assert_eq!(frames[9], Some(7));
    assert_eq!(total, Some(7));
}

#[test]
fn test_spare_in_last_frame_earns_one_bonus() {
    let mut throws = with_last_frame([Some(9), Some(1), Some(10)]);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[9], Some(20));
    // the bonus after a spare is read as a second throw
    assert_eq!(&rendered(&throws)[18..], &["9", "/", "/"]);

    let mut throws = with_last_frame([Some(6), Some(4), Some(10)]);
    score(&mut throws);
    assert_eq!(&rendered(&throws)[18..], &["6", "/", "/"]);
}

#[test]
fn test_strike_in_last_frame_waits_for_both_bonus_throws() {
    let mut throws = with_last_frame([Some(10), Some(10), None]);
    let (frames, total) = score(&mut throws);
    assert_eq!(frames[9], None);
    assert_eq!(total, None);
}

#[test]
fn test_last_frame_strike_then_spare() {
    let mut throws = with_last_frame([Some(10), Some(7), Some(3)]);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[9], Some(20));
    // a first-throw strike makes the bonus a first throw
    assert_eq!(&rendered(&throws)[18..], &["X", "7", "3"]);
}

// ============================================================================
// Incomplete games
// ============================================================================

#[test]
fn test_incomplete_frame_blanks_later_running_totals() {
    let mut throws = game(&[Some(3), Some(4), Some(5), None, Some(2), Some(2)]);
    let (frames, total) = score(&mut throws);
    let running = aggregate(&frames).running;

    assert_eq!(frames[0], Some(7));
    assert_eq!(frames[1], None);
    assert_eq!(frames[2], Some(4));
    assert_eq!(running[0], Some(7));
    assert!(running[1..].iter().all(Option::is_none));
    assert_eq!(total, None);
}

#[test]
fn test_spare_bonus_skips_a_gap() {
    let mut throws = game(&[Some(6), Some(4), None, None, Some(8), Some(1)]);
    let (frames, total) = score(&mut throws);
    assert_eq!(frames[..3], [Some(18), None, Some(9)]);
    assert_eq!(total, None);
}

#[test]
fn test_spare_bonus_skips_an_empty_first_throw() {
    let mut throws = game(&[Some(5), Some(5), None, Some(3)]);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[0], Some(13));
    assert_eq!(frames[1], None);
}

#[test]
fn test_strike_bonus_skips_an_empty_frame() {
    let mut throws = game(&[Some(10), None, None, None, Some(4), Some(3)]);
    let (frames, _) = score(&mut throws);
    assert_eq!(frames[0], Some(17));
    assert_eq!(frames[1], None);
    assert_eq!(frames[2], Some(7));
}

#[test]
fn test_empty_game() {
    let mut throws = ThrowSequence::new(&GameConfig::tenpin());
    let (frames, total) = score(&mut throws);
    assert!(frames.iter().all(Option::is_none));
    assert_eq!(total, None);
    assert!(glyphs(&throws, &GameConfig::tenpin())
        .iter()
        .all(|g| *g == Glyph::Blank));
}

// ============================================================================
// Other configurations
// ============================================================================

#[test]
fn test_ninepin_perfect_game() {
    let config = GameConfig::ninepin();
    let mut slots = Vec::new();
    for _ in 0..9 {
        slots.extend([Some(9), None]);
    }
    slots.extend([Some(9), Some(9), Some(9)]);
    let mut throws = ThrowSequence::from_throws(&config, slots);
    validate(&mut throws, &config);

    let total = aggregate(&frame_scores(&throws, &config)).total;
    assert_eq!(total, Some(config.perfect_score()));
    assert_eq!(total, Some(270));
}

#[test]
fn test_single_frame_game() {
    let config = GameConfig::short_game(1).unwrap();
    let mut throws = ThrowSequence::from_throws(&config, [10, 10, 10]);
    validate(&mut throws, &config);

    assert_eq!(frame_scores(&throws, &config), vec![Some(30)]);
    let glyphs: Vec<_> = glyphs(&throws, &config).iter().map(ToString::to_string).collect();
    assert_eq!(glyphs, vec!["X", "X", "X"]);
}
