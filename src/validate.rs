//! Throw repair.
//!
//! [`validate`] rewrites a [`ThrowSequence`] in place so that it obeys the
//! game rules. It never rejects input. Two passes run in order:
//!
//! 1. **Clamp**: every recorded value is forced into `0..=strike_value`.
//! 2. **Frames**: a strike in a regular frame clears that frame's second slot;
//!    a frame whose two throws exceed the strike value has its second throw
//!    reduced; the bonus slot is cleared unless the last frame earned it.
//!
//! The last frame never has its second slot cleared by a strike: after a
//! strike the rack is reset, so `X X X` is a legal last frame. The two throws
//! after that strike are only clamped, never capped against each other, so
//! `X 3 9` is kept as entered.
//!
//! Both passes are idempotent: validating a validated sequence is a no-op.

use crate::debug_check_invariants;
use crate::telemetry::{
    InvariantChecker, InvariantViolation, Repair, RepairKind, RepairObserver,
};
use crate::{GameConfig, Pins, Throw, ThrowSequence};

/// Repairs `throws` in place and returns every repair that was applied.
///
/// An empty result means the sequence was already valid.
///
/// # Example
///
/// ```
/// use tenpin_tally::{validate, GameConfig, Throw, ThrowSequence};
///
/// let config = GameConfig::tenpin();
/// let mut throws = ThrowSequence::from_throws(&config, [10, 4, 6, 7]);
/// let repairs = validate(&mut throws, &config);
///
/// // the strike cleared slot 1, and 6 + 7 was capped to a spare
/// assert_eq!(repairs.len(), 2);
/// assert_eq!(throws.get(1), Some(Throw::Unrecorded));
/// assert_eq!(throws.pins(3), Some(4));
/// ```
pub fn validate(throws: &mut ThrowSequence, config: &GameConfig) -> Vec<Repair> {
    let mut repairs = Vec::new();
    clamp_pass(throws.slots_mut(), config.strike_value, &mut repairs);
    frame_pass(throws, config, &mut repairs);
    debug_check_invariants!(SequenceRules::new(throws, config), "after validate");
    repairs
}

/// Like [`validate`], additionally forwarding each repair to `observer`.
pub fn validate_observed(
    throws: &mut ThrowSequence,
    config: &GameConfig,
    observer: &dyn RepairObserver,
) -> Vec<Repair> {
    let repairs = validate(throws, config);
    for repair in &repairs {
        observer.on_repair(repair);
    }
    repairs
}

/// Returns `true` if `throws` already satisfies every rule [`validate`] enforces.
#[must_use]
pub fn is_valid(throws: &ThrowSequence, config: &GameConfig) -> bool {
    SequenceRules::new(throws, config).check_invariants().is_ok()
}

/// Returns `true` if the last frame earns the bonus throw: its first throw is
/// a strike, or both throws are recorded and make a spare.
#[must_use]
pub fn earns_bonus(throws: &ThrowSequence, config: &GameConfig) -> bool {
    let start = config.last_frame_start();
    let strike = config.strike_value;
    match (throws.pins(start), throws.pins(start + 1)) {
        (Some(first), _) if first >= strike => true,
        (Some(first), Some(second)) => first.saturating_add(second) >= strike,
        _ => false,
    }
}

#[inline]
fn clamp_pins(pins: Pins, strike: Pins) -> Pins {
    if pins < 0 {
        0
    } else if pins > strike {
        strike
    } else {
        pins
    }
}

fn clamp_pass(slots: &mut [Throw], strike: Pins, repairs: &mut Vec<Repair>) {
    for (slot, throw) in slots.iter_mut().enumerate() {
        if let Throw::Pins(pins) = *throw {
            let clamped = clamp_pins(pins, strike);
            if clamped != pins {
                *throw = Throw::Pins(clamped);
                repairs.push(Repair::new(
                    RepairKind::Clamped,
                    slot,
                    Throw::Pins(pins),
                    *throw,
                ));
            }
        }
    }
}

fn frame_pass(throws: &mut ThrowSequence, config: &GameConfig, repairs: &mut Vec<Repair>) {
    let strike = config.strike_value;
    let last_frame = config.frame_count.saturating_sub(1);

    for frame in 0..config.frame_count {
        let first_slot = frame * 2;
        let second_slot = first_slot + 1;
        let (Some(first), Some(second)) = (throws.get(first_slot), throws.get(second_slot))
        else {
            break;
        };

        let replacement = match (first, second) {
            (Throw::Pins(a), Throw::Pins(_)) if a >= strike && frame != last_frame => {
                Some((RepairKind::StrikeConsumed, Throw::Unrecorded))
            }
            // a strike in the last frame resets the rack for the second throw
            (Throw::Pins(a), _) if a >= strike => None,
            (Throw::Pins(a), Throw::Pins(b)) if a.saturating_add(b) > strike => {
                Some((RepairKind::SpareCapped, Throw::Pins(strike - a)))
            }
            _ => None,
        };

        if let Some((kind, after)) = replacement {
            throws.slots_mut()[second_slot] = after;
            repairs.push(Repair::new(kind, second_slot, second, after));
        }
    }

    let bonus_slot = config.bonus_slot();
    if let Some(bonus) = throws.get(bonus_slot) {
        if bonus.is_recorded() && !earns_bonus(throws, config) {
            throws.slots_mut()[bonus_slot] = Throw::Unrecorded;
            repairs.push(Repair::new(
                RepairKind::BonusDiscarded,
                bonus_slot,
                bonus,
                Throw::Unrecorded,
            ));
        }
    }
}

/// A throw sequence viewed under a configuration, checkable against the
/// post-validation rules.
#[derive(Debug, Clone, Copy)]
pub struct SequenceRules<'a> {
    throws: &'a ThrowSequence,
    config: &'a GameConfig,
}

impl<'a> SequenceRules<'a> {
    /// Pairs a sequence with the configuration it should satisfy.
    #[must_use]
    pub const fn new(throws: &'a ThrowSequence, config: &'a GameConfig) -> Self {
        Self { throws, config }
    }
}

impl InvariantChecker for SequenceRules<'_> {
    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        const TYPE_NAME: &str = "ThrowSequence";
        let strike = self.config.strike_value;

        if self.throws.len() != self.config.slot_count() {
            return Err(
                InvariantViolation::new(TYPE_NAME, "length does not match configuration")
                    .with_details(format!(
                        "len={}, expected={}",
                        self.throws.len(),
                        self.config.slot_count()
                    )),
            );
        }

        for (slot, throw) in self.throws.iter().enumerate() {
            if let Throw::Pins(pins) = throw {
                if !(0..=strike).contains(&pins) {
                    return Err(InvariantViolation::new(TYPE_NAME, "value out of range")
                        .with_details(format!("slot={slot}, value={pins}, strike={strike}")));
                }
            }
        }

        for frame in 0..self.config.frame_count {
            let first_slot = frame * 2;
            let is_last = frame + 1 == self.config.frame_count;
            match (self.throws.pins(first_slot), self.throws.pins(first_slot + 1)) {
                (Some(a), Some(_)) if a >= strike && !is_last => {
                    return Err(InvariantViolation::new(
                        TYPE_NAME,
                        "strike frame has a second throw",
                    )
                    .with_details(format!("frame={frame}")));
                }
                (Some(a), Some(b)) if a < strike && a.saturating_add(b) > strike => {
                    return Err(InvariantViolation::new(TYPE_NAME, "frame exceeds strike value")
                        .with_details(format!("frame={frame}, first={a}, second={b}")));
                }
                _ => {}
            }
        }

        let bonus_recorded = self
            .throws
            .get(self.config.bonus_slot())
            .is_some_and(Throw::is_recorded);
        if bonus_recorded && !earns_bonus(self.throws, self.config) {
            return Err(InvariantViolation::new(
                TYPE_NAME,
                "bonus throw recorded without strike or spare",
            ));
        }

        Ok(())
    }
}
