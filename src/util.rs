//! Misc stuff.

use std::ops::Range;


/// Half-open bounds checks on calendar components, written the way round
/// the validation messages read: “the day is within 1 to 31”.
pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        range.contains(self)
    }
}
