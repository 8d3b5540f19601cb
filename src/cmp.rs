//! Additional traits for comparisions.
//!
//! Serial numbers only have a partial order. This is what `PartialOrd`
//! implements for them and what RFC 1982 arithmetic relies upon. Yet,
//! there are situations where a total order is required nonetheless, such
//! as sorting a list of serial numbers for display or keeping them in an
//! ordered map. In order to make it clear when this mode of comparison is
//! used, this module defines the trait [`CanonicalOrd`].
//!
//! [`CanonicalOrd`]: trait.CanonicalOrd.html

use core::cmp::Ordering;

/// A trait for the canonical sort order of values.
///
/// The canonical sort order of serial numbers ignores wrap-around and
/// compares the raw integer values. Serial numbers of different width are
/// ordered by their width first. This order carries no RFC 1982 meaning.
/// In particular, a serial number that is greater than another one in
/// serial number arithmetic may well sort before it canonically.
pub trait CanonicalOrd<Rhs: ?Sized = Self> {
    /// Returns the canonical ordering between `self` and `other`.
    #[must_use]
    fn canonical_cmp(&self, other: &Rhs) -> Ordering;

    /// Returns whether `self` is canonically less than `other`.
    #[inline]
    #[must_use]
    fn canonical_lt(&self, other: &Rhs) -> bool {
        matches!(self.canonical_cmp(other), Ordering::Less)
    }

    /// Returns whether `self` is canonically less than or equal to `other`.
    #[inline]
    #[must_use]
    fn canonical_le(&self, other: &Rhs) -> bool {
        matches!(self.canonical_cmp(other), Ordering::Less | Ordering::Equal)
    }

    /// Returns whether `self` is canonically greater than `other`.
    #[inline]
    #[must_use]
    fn canonical_gt(&self, other: &Rhs) -> bool {
        matches!(self.canonical_cmp(other), Ordering::Greater)
    }

    /// Returns whether `self` is canonically greater than or equal to `other`.
    #[inline]
    #[must_use]
    fn canonical_ge(&self, other: &Rhs) -> bool {
        matches!(
            self.canonical_cmp(other),
            Ordering::Greater | Ordering::Equal
        )
    }
}

//============ Testing =======================================================
