//! Fuzz target for scoreboard edit sequences.
//!
//! Applies arbitrary operations (throws, raw text, renames, resets) to a
//! scoreboard, including out-of-range players and slots.
//!
//! # Safety Properties Tested
//!
//! - No panics on any operation sequence
//! - Invalid handles and slots are reported as errors, never applied
//! - Every stored sequence stays valid after every operation

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tenpin_tally::{is_valid, GameConfig, PlayerHandle, ScoreboardBuilder};

#[derive(Debug, Arbitrary)]
enum Operation {
    Throw { player: u8, slot: u8, pins: i32 },
    Raw { player: u8, slot: u8, text: String },
    Rename { player: u8, name: String },
    Reset { frame_count: u8, strike_value: i8 },
    Render,
}

#[derive(Debug, Arbitrary)]
struct EditInput {
    num_players: u8,
    operations: Vec<Operation>,
}

fuzz_target!(|input: EditInput| {
    let Ok(mut board) = ScoreboardBuilder::new()
        .with_num_players(usize::from(input.num_players % 6))
        .build()
    else {
        return;
    };

    for op in input.operations.into_iter().take(256) {
        match op {
            Operation::Throw { player, slot, pins } => {
                let _ = board.record_throw(PlayerHandle::new(player.into()), slot.into(), pins);
            }
            Operation::Raw { player, slot, text } => {
                let _ = board.record_raw(PlayerHandle::new(player.into()), slot.into(), &text);
            }
            Operation::Rename { player, name } => {
                let _ = board.rename(PlayerHandle::new(player.into()), name);
            }
            Operation::Reset {
                frame_count,
                strike_value,
            } => {
                let config = GameConfig {
                    frame_count: usize::from(frame_count % 24),
                    strike_value: strike_value.into(),
                };
                let _ = board.reset(config);
            }
            Operation::Render => {
                let _ = board.score_cards().iter().map(ToString::to_string).count();
            }
        }

        let config = *board.config();
        for (_, record) in board.players().iter() {
            assert!(is_valid(&record.throws, &config));
        }
    }
});
