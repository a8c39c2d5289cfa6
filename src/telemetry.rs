//! Structured telemetry for throw repairs and invariant checks.
//!
//! The validator never rejects input; it rewrites it. Every rewrite is
//! described by a [`Repair`] value that can be:
//!
//! - Logged via tracing (the [`TracingObserver`])
//! - Collected programmatically for testing (the [`CollectingObserver`])
//! - Sent to custom observers (UI hints, metrics, etc.)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tenpin_tally::telemetry::{CollectingObserver, RepairKind};
//! use tenpin_tally::{GameConfig, PlayerHandle, ScoreboardBuilder, Throw};
//!
//! let observer = Arc::new(CollectingObserver::new());
//! let mut board = ScoreboardBuilder::new()
//!     .with_num_players(1)
//!     .with_game_config(GameConfig::tenpin())
//!     .with_repair_observer(observer.clone())
//!     .build()?;
//!
//! board.record_throw(PlayerHandle::new(0), 0, Throw::Pins(14))?;
//! assert!(observer.has_repair(RepairKind::Clamped));
//! # Ok::<(), tenpin_tally::TallyError>(())
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::Throw;

/// The rule that caused a repair.
///
/// # Forward Compatibility
///
/// This enum is marked `#[non_exhaustive]` because new repair rules may be
/// added in future versions. Always include a wildcard arm when matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RepairKind {
    /// A recorded value was outside `0..=strike_value` and was clamped.
    Clamped,
    /// The second slot of a strike frame held a value and was cleared.
    StrikeConsumed,
    /// A frame's two throws exceeded the strike value; the second was reduced.
    SpareCapped,
    /// The bonus slot held a value although the last frame earned no bonus throw.
    BonusDiscarded,
}

impl RepairKind {
    /// Returns a string representation suitable for logging/metrics labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clamped => "clamped",
            Self::StrikeConsumed => "strike_consumed",
            Self::SpareCapped => "spare_capped",
            Self::BonusDiscarded => "bonus_discarded",
        }
    }
}

impl std::fmt::Display for RepairKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single correction applied by the validator.
///
/// # Serialization
///
/// Serializes with the throw values flattened to an integer or `null`:
///
/// ```
/// # #[cfg(feature = "json")]
/// # {
/// use tenpin_tally::telemetry::{Repair, RepairKind};
/// use tenpin_tally::Throw;
///
/// let repair = Repair::new(RepairKind::Clamped, 3, Throw::Pins(12), Throw::Pins(10));
/// let json = repair.to_json().unwrap();
/// assert!(json.contains(r#""kind":"clamped""#));
/// assert!(json.contains(r#""before":12"#));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Repair {
    /// Which rule fired.
    pub kind: RepairKind,
    /// The slot that was rewritten.
    pub slot: usize,
    /// Value before the repair.
    pub before: Throw,
    /// Value after the repair.
    pub after: Throw,
}

impl Repair {
    /// Creates a new repair record.
    #[must_use]
    pub const fn new(kind: RepairKind, slot: usize, before: Throw, after: Throw) -> Self {
        Self {
            kind,
            slot,
            before,
            after,
        }
    }

    /// Serializes this repair to a JSON string.
    ///
    /// Returns `None` if serialization fails (which should not happen for
    /// well-formed repairs).
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Serializes this repair to a pretty-printed JSON string.
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json_pretty(&self) -> Option<String> {
        serde_json::to_string_pretty(self).ok()
    }
}

impl std::fmt::Display for Repair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] slot {}: {} -> {}",
            self.kind, self.slot, self.before, self.after
        )
    }
}

/// Trait for observing validator repairs.
///
/// # Thread Safety
///
/// When the `sync-send` feature is enabled, observers must be `Send + Sync`
/// to allow sharing across threads.
///
/// # Example
///
/// ```
/// use tenpin_tally::telemetry::{Repair, RepairObserver};
///
/// struct HighlightObserver;
///
/// impl RepairObserver for HighlightObserver {
///     fn on_repair(&self, repair: &Repair) {
///         // flash the corrected cell in the UI
///         let _ = repair.slot;
///     }
/// }
/// ```
#[cfg(feature = "sync-send")]
pub trait RepairObserver: Send + Sync {
    /// Called once for every repair the validator applies.
    fn on_repair(&self, repair: &Repair);
}

#[cfg(not(feature = "sync-send"))]
/// Trait for observing validator repairs.
pub trait RepairObserver {
    /// Called once for every repair the validator applies.
    fn on_repair(&self, repair: &Repair);
}

/// Built-in observer that logs repairs via the `tracing` crate.
///
/// Repairs are ordinary events (users mistype), so they are logged at
/// `debug` level with structured `kind`, `slot`, `before` and `after` fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates a new tracing observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RepairObserver for TracingObserver {
    fn on_repair(&self, repair: &Repair) {
        tracing::debug!(
            kind = repair.kind.as_str(),
            slot = repair.slot,
            before = %repair.before,
            after = %repair.after,
            "repaired throw"
        );
    }
}

/// Built-in observer that collects repairs for testing.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    repairs: Mutex<Vec<Repair>>,
}

impl CollectingObserver {
    /// Creates a new collecting observer with an empty repair list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repairs: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of all collected repairs.
    #[must_use]
    pub fn repairs(&self) -> Vec<Repair> {
        self.repairs.lock().clone()
    }

    /// Returns the number of collected repairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repairs.lock().len()
    }

    /// Returns true if no repairs have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repairs.lock().is_empty()
    }

    /// Checks if any repair of the specified kind has been collected.
    #[must_use]
    pub fn has_repair(&self, kind: RepairKind) -> bool {
        self.repairs.lock().iter().any(|r| r.kind == kind)
    }

    /// Returns all repairs matching the specified kind.
    #[must_use]
    pub fn repairs_of_kind(&self, kind: RepairKind) -> Vec<Repair> {
        self.repairs
            .lock()
            .iter()
            .filter(|r| r.kind == kind)
            .copied()
            .collect()
    }

    /// Clears all collected repairs.
    pub fn clear(&self) {
        self.repairs.lock().clear();
    }
}

impl RepairObserver for CollectingObserver {
    fn on_repair(&self, repair: &Repair) {
        self.repairs.lock().push(*repair);
    }
}

/// A composite observer that forwards repairs to multiple observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RepairObserver>>,
}

impl CompositeObserver {
    /// Creates a new composite observer with no child observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Adds an observer to the composite.
    pub fn add(&mut self, observer: Arc<dyn RepairObserver>) {
        self.observers.push(observer);
    }

    /// Creates a composite observer from a list of observers.
    #[must_use]
    pub fn from_observers(observers: Vec<Arc<dyn RepairObserver>>) -> Self {
        Self { observers }
    }
}

impl RepairObserver for CompositeObserver {
    fn on_repair(&self, repair: &Repair) {
        for observer in &self.observers {
            observer.on_repair(repair);
        }
    }
}

impl std::fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("num_observers", &self.observers.len())
            .finish()
    }
}

/// Result of an invariant check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InvariantViolation {
    /// Name of the type whose invariant was violated.
    pub type_name: &'static str,
    /// Description of the violated invariant.
    pub invariant: String,
    /// Additional diagnostic context.
    pub details: Option<String>,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    #[must_use]
    pub fn new(type_name: &'static str, invariant: impl Into<String>) -> Self {
        Self {
            type_name,
            invariant: invariant.into(),
            details: None,
        }
    }

    /// Adds additional details to the violation.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Serializes this violation to a JSON string.
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.type_name, self.invariant)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Trait for types that maintain internal invariants.
///
/// Types implementing this trait can have their invariants checked at runtime
/// during debug builds or when the `paranoid` feature is enabled.
pub trait InvariantChecker {
    /// Checks that all invariants of this type are satisfied.
    ///
    /// Returns `Ok(())` if all invariants hold, or an `InvariantViolation`
    /// describing the first broken invariant.
    fn check_invariants(&self) -> Result<(), InvariantViolation>;
}

/// Macro for conditionally checking invariants in debug builds.
///
/// Expands to an invariant check that logs through `tracing::error!` in debug
/// builds, and to nothing in release builds unless the `paranoid` feature is
/// enabled.
///
/// # Syntax
///
/// ```text
/// debug_check_invariants!(expr);
/// debug_check_invariants!(expr, "context message");
/// ```
#[macro_export]
#[cfg(any(debug_assertions, feature = "paranoid"))]
macro_rules! debug_check_invariants {
    ($expr:expr) => {{
        use $crate::telemetry::InvariantChecker as _;
        if let Err(violation) = $expr.check_invariants() {
            ::tracing::error!(
                type_name = violation.type_name,
                location = concat!(file!(), ":", line!()),
                "invariant violated: {}",
                violation
            );
        }
    }};

    ($expr:expr, $context:expr) => {{
        use $crate::telemetry::InvariantChecker as _;
        if let Err(violation) = $expr.check_invariants() {
            ::tracing::error!(
                type_name = violation.type_name,
                location = concat!(file!(), ":", line!()),
                "invariant violated: {} [context: {}]",
                violation,
                $context
            );
        }
    }};
}

/// No-op version for release builds without `paranoid` feature.
#[macro_export]
#[cfg(not(any(debug_assertions, feature = "paranoid")))]
macro_rules! debug_check_invariants {
    ($expr:expr) => {{}};
    ($expr:expr, $context:expr) => {{}};
}
