//! Queryable schedule metadata.
//!
//! Every schedule advertises two facts without being evaluated:
//!
//! - its [`SizeKind`]: whether it is defined for every step forever, or
//!   whether its length is simply not summarised (mixed children);
//! - its [`ElementType`]: the name of the value type it produces.

use std::any::type_name;
use std::fmt;

/// A 1-based step index.  The first step of any schedule is `1`, never `0`.
pub type Step = u64;

// ── SizeKind ──────────────────────────────────────────────────────────────────

/// How far a schedule extends.
///
/// No primitive in this framework is statically finite, so two variants
/// suffice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeKind {
    /// Well-defined for every step `t >= 1`.
    Infinite,
    /// Well-defined for every step `t >= 1`, but the length is not summarised.
    #[default]
    Unknown,
}

impl SizeKind {
    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self, SizeKind::Infinite)
    }
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeKind::Infinite => f.write_str("infinite"),
            SizeKind::Unknown => f.write_str("unknown"),
        }
    }
}

// ── ElementType ───────────────────────────────────────────────────────────────

/// The value type a schedule produces, if it is knowable without evaluation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ElementType {
    Known(&'static str),
    Unknown,
}

impl ElementType {
    /// The element type of a schedule producing `T`.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        ElementType::Known(type_name::<T>())
    }

    #[inline]
    pub fn is_known(self) -> bool {
        matches!(self, ElementType::Known(_))
    }

    /// The type name, or `None` if unknown.
    pub fn name(self) -> Option<&'static str> {
        match self {
            ElementType::Known(name) => Some(name),
            ElementType::Unknown => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("unknown"))
    }
}
