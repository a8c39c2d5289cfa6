//! Fuzz target for the scoring pipeline.
//!
//! Feeds arbitrary configurations and raw slot values (including negative and
//! extreme counts) through validate, frame scoring, aggregation and glyph
//! rendering.
//!
//! # Safety Properties Tested
//!
//! - No panics on any input, validated or not
//! - Validation output always passes the sequence rules
//! - Validation is idempotent
//! - A known total equals the sum of the frame scores

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tenpin_tally::{
    aggregate, frame_scores, glyphs, is_valid, validate, GameConfig, Pins, ThrowSequence,
};

#[derive(Debug, Arbitrary)]
struct ScoringInput {
    frame_count: u8,
    strike_value: u8,
    throws: Vec<Option<Pins>>,
}

fuzz_target!(|input: ScoringInput| {
    let frame_count = usize::from(input.frame_count % 32);
    let Ok(config) = GameConfig::new(frame_count, Pins::from(input.strike_value)) else {
        return;
    };
    let raw = ThrowSequence::from_throws(&config, input.throws);

    // unvalidated input must not panic either
    let _ = aggregate(&frame_scores(&raw, &config));
    let _ = glyphs(&raw, &config);

    let mut throws = raw;
    validate(&mut throws, &config);
    assert!(is_valid(&throws, &config), "validated sequence breaks rules: {throws}");

    let mut again = throws.clone();
    assert!(validate(&mut again, &config).is_empty(), "validate not idempotent");
    assert_eq!(again, throws);

    let frames = frame_scores(&throws, &config);
    let totals = aggregate(&frames);
    if let Some(total) = totals.total {
        let sum: Pins = frames.iter().flatten().sum();
        assert_eq!(total, sum);
        assert!(total <= config.perfect_score());
    }
    assert_eq!(glyphs(&throws, &config).len(), throws.len());
});
