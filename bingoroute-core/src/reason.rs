//! Human-readable explanations attached to a recommendation.
//!
//! Every [`Reason`] carries a [`ReasonKind`] assigned when the reason is
//! produced. Grouping logic keys off the kind and never inspects the
//! message, so rewording a message cannot change bucket membership.

use std::fmt;

/// Which scoring signal produced a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ReasonKind {
    /// The destination lies in a selected district.
    District,
    /// The destination carries at least one selected theme.
    Theme,
    /// The destination is highly rated.
    Rating,
    /// The destination suits the travel season.
    Season,
    /// The destination is reachable by public transit.
    Transit,
    /// The destination offers a special experience or view.
    Experience,
}

/// A tagged explanation for part of a recommendation score.
///
/// # Examples
/// ```
/// use bingoroute_core::{Reason, ReasonKind};
///
/// let reason = Reason::new(ReasonKind::Rating, "highly rated");
/// assert!(reason.is(ReasonKind::Rating));
/// assert_eq!(reason.to_string(), "highly rated");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reason {
    /// Signal that produced the reason.
    pub kind: ReasonKind,
    /// Display text.
    pub message: String,
}

impl Reason {
    /// Construct a reason of `kind` with display `message`.
    pub fn new(kind: ReasonKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Report whether this reason was produced by `kind`.
    pub fn is(&self, kind: ReasonKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
