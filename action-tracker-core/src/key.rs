//! ActionKey trait for enumerated operation identifiers

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier for one kind of tracked asynchronous operation.
///
/// Keys are drawn from a fixed, compile-time enumeration. They should be:
/// - Copy + Eq + Hash: keys index the tracker's per-action state maps
/// - Debug: for debugging and logging
/// - Send + 'static: dispatch completions cross thread boundaries
///
/// Use `#[derive(ActionKey)]` from `action-tracker-macros` to auto-implement
/// this trait on a unit-variant enum.
pub trait ActionKey: Copy + Eq + Hash + Debug + Send + 'static {
    /// Get the key's display/log label (derived from the variant name)
    fn label(&self) -> &'static str;

    /// Get every key in the enumeration
    fn all() -> &'static [Self];

    /// Look a key up by its label
    fn from_label(label: &str) -> Option<Self>;
}
