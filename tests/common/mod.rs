//! Common test infrastructure shared across integration tests.
//!
//! This module provides:
//! - `case_count`: proptest case budget, reduced under Miri
//! - sequence builders for writing games compactly
//! - proptest strategies for raw (unvalidated) throw input
//!
//! # Usage
//!
//! From any integration test file:
//! ```ignore
//! #[path = "common/mod.rs"]
//! mod common;
//! use common::{game, raw_sequence_strategy};
//! ```

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use proptest::prelude::*;
use tenpin_tally::{GameConfig, Pins, Throw, ThrowSequence};

/// Returns the number of cases to run for property-based tests.
///
/// When running under Miri, returns a reduced count (5) for faster testing.
/// Otherwise, returns the standard count (256).
#[must_use]
pub const fn case_count() -> u32 {
    if cfg!(miri) {
        5
    } else {
        256
    }
}

/// Builds a ten-pin sequence from a compact list where `None` is an empty slot.
pub fn game(throws: &[Option<Pins>]) -> ThrowSequence {
    ThrowSequence::from_throws(&GameConfig::tenpin(), throws.iter().copied())
}

/// Builds a ten-pin sequence from pin counts filling the leading slots.
pub fn game_of(throws: &[Pins]) -> ThrowSequence {
    ThrowSequence::from_throws(&GameConfig::tenpin(), throws.iter().copied())
}

/// A perfect ten-pin game: nine strikes then `X X X`.
pub fn perfect_game() -> ThrowSequence {
    let mut slots = Vec::new();
    for _ in 0..9 {
        slots.push(Some(10));
        slots.push(None);
    }
    slots.extend([Some(10), Some(10), Some(10)]);
    game(&slots)
}

/// Strategy for configurations covering short games and non-standard racks.
pub fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (1usize..=12, 1 as Pins..=15).prop_map(|(frame_count, strike_value)| GameConfig {
        frame_count,
        strike_value,
    })
}

/// Strategy for one raw slot: mostly plausible counts, some garbage, some empty.
pub fn raw_throw_strategy() -> impl Strategy<Value = Throw> {
    prop_oneof![
        6 => (0 as Pins..=10).prop_map(Throw::Pins),
        2 => (-50 as Pins..=50).prop_map(Throw::Pins),
        1 => any::<Pins>().prop_map(Throw::Pins),
        2 => Just(Throw::Unrecorded),
    ]
}

/// Strategy for a configuration together with an unvalidated sequence for it.
pub fn raw_sequence_strategy() -> impl Strategy<Value = (GameConfig, ThrowSequence)> {
    config_strategy().prop_flat_map(|config| {
        prop::collection::vec(raw_throw_strategy(), config.slot_count())
            .prop_map(move |throws| (config, ThrowSequence::from_throws(&config, throws)))
    })
}

/// Strategy for a ten-pin game where every slot holds a count in `0..=10`.
pub fn dense_tenpin_strategy() -> impl Strategy<Value = ThrowSequence> {
    prop::collection::vec(0 as Pins..=10, 21)
        .prop_map(|throws| ThrowSequence::from_throws(&GameConfig::tenpin(), throws))
}
