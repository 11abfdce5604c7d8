//! Conversions between intervals and `std::ops` ranges

use std::ops::{Bound, Range, RangeBounds, RangeInclusive};

use log::debug;

use crate::compare::Natural;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::policy::EndpointPolicy;


/// An interval viewed as a std range, so that it can drive APIs such as
/// `BTreeMap::range`
///
/// Std ranges are ordered naturally, so only intervals under `Natural` have
/// this view. `BTreeMap::range` panics on a degenerate interval with both
/// bounds excluded.
impl<T> RangeBounds<T> for Interval<T, Natural> {
    fn start_bound(&self) -> Bound<&T> {
        if self.policy().includes_lower() {
            Bound::Included(self.lower())
        } else {
            Bound::Excluded(self.lower())
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.policy().includes_upper() {
            Bound::Included(self.upper())
        } else {
            Bound::Excluded(self.upper())
        }
    }
}

/// Split a bound into content and inclusion
fn inclusive<T>(bound: Bound<T>, side: &str) -> Result<(T, bool)> {
    match bound {
        Bound::Included(t) => Ok((t, true)),
        Bound::Excluded(t) => Ok((t, false)),
        Bound::Unbounded => {
            debug!("rejected unbounded {} side", side);
            Err(Error::InvalidArgument(format!("{} bound is unbounded", side)))
        }
    }
}

impl<T: Ord> TryFrom<(Bound<T>, Bound<T>)> for Interval<T> {
    type Error = Error;

    fn try_from((start, end): (Bound<T>, Bound<T>)) -> Result<Interval<T>> {
        let (lower, lower_included) = inclusive(start, "lower")?;
        let (upper, upper_included) = inclusive(end, "upper")?;
        Interval::with_policy(
            lower,
            upper,
            EndpointPolicy::from_inclusion(lower_included, upper_included),
        )
    }
}

impl<T: Ord> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = Error;

    fn try_from(range: RangeInclusive<T>) -> Result<Interval<T>> {
        let (lower, upper) = range.into_inner();
        Interval::with_policy(lower, upper, EndpointPolicy::Open)
    }
}

impl<T: Ord> TryFrom<Range<T>> for Interval<T> {
    type Error = Error;

    fn try_from(range: Range<T>) -> Result<Interval<T>> {
        Interval::with_policy(range.start, range.end, EndpointPolicy::LeftHalfOpen)
    }
}
