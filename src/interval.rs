//! Intervals over ordered values

use std::cmp::Ordering;

use log::debug;

use crate::compare::{Comparer, Natural};
use crate::error::{Error, Result};
use crate::policy::{combine, EndpointPolicy};


/// A contiguous span between two bounds of an ordered type
///
/// The order is given by a comparer `C`, which defaults to the natural order
/// of `T`. The endpoint policy decides which bounds are members. An interval
/// is an immutable value: the algebraic operations return new intervals.
///
/// # Type parameters
///
/// - `T` is the type of the bounds and of the values tested for membership.
/// - `C` is the comparer ordering values of `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T, C = Natural> {
    lower: T,
    upper: T,
    comparer: C,
    policy: EndpointPolicy,
}

impl<T: Ord> Interval<T> {
    /// Create an interval including both bounds under the natural order
    ///
    /// Fails with `Error::InvalidInterval` if `lower > upper`.
    ///
    /// ```
    /// use ordspan::Interval;
    /// let digits = Interval::new(0, 9).unwrap();
    /// assert!(digits.contains(&9));
    /// assert!(Interval::new(9, 0).is_err());
    /// ```
    pub fn new(lower: T, upper: T) -> Result<Interval<T>> {
        Interval::with_policy(lower, upper, EndpointPolicy::Open)
    }

    /// Create an interval with the given policy under the natural order
    pub fn with_policy(lower: T, upper: T, policy: EndpointPolicy) -> Result<Interval<T>> {
        Interval::with_comparer(lower, upper, Natural, policy)
    }
}

impl<T, C> Interval<T, C> {
    /// Assemble an interval whose bounds are known to be ordered
    pub(crate) fn from_parts(lower: T, upper: T, comparer: C, policy: EndpointPolicy)
        -> Interval<T, C>
    {
        Interval { lower, upper, comparer, policy }
    }

    /// The lower bound
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// The upper bound
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// The endpoint policy
    pub fn policy(&self) -> EndpointPolicy {
        self.policy
    }

    /// The comparer ordering the bounds
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Decompose into lower and upper bound
    pub fn into_bounds(self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T, C: Comparer<T>> Interval<T, C> {
    /// Create an interval ordered by a custom comparer
    ///
    /// Fails with `Error::InvalidInterval` if `lower` compares greater than
    /// `upper`.
    pub fn with_comparer(lower: T, upper: T, comparer: C, policy: EndpointPolicy)
        -> Result<Interval<T, C>>
    {
        if comparer.compare(&lower, &upper) == Ordering::Greater {
            debug!("rejected interval: lower bound exceeds upper bound");
            return Err(Error::InvalidInterval);
        }
        Ok(Interval { lower, upper, comparer, policy })
    }

    /// Does the interval contain a value?
    ///
    /// Membership at each bound is decided by the endpoint policy.
    pub fn contains(&self, value: &T) -> bool {
        let lower = self.comparer.compare(&self.lower, value);
        let upper = self.comparer.compare(&self.upper, value);
        match self.policy {
            EndpointPolicy::Open => lower.is_le() && upper.is_ge(),
            EndpointPolicy::LeftHalfOpen => lower.is_le() && upper.is_gt(),
            EndpointPolicy::RightHalfOpen => lower.is_lt() && upper.is_ge(),
            EndpointPolicy::Closed => lower.is_lt() && upper.is_gt(),
        }
    }

    /// Does the interval contain both bounds of another?
    pub fn contains_interval(&self, other: &Interval<T, C>) -> bool {
        self.contains(&other.lower) && self.contains(&other.upper)
    }

    /// Is the interval contained in another?
    pub fn is_contained_by(&self, other: &Interval<T, C>) -> bool {
        other.contains_interval(self)
    }

    /// Do the two intervals share a member?
    ///
    /// True if either interval contains a bound of the other.
    pub fn overlaps(&self, other: &Interval<T, C>) -> bool {
        self.contains(&other.lower)
            || self.contains(&other.upper)
            || other.contains(&self.lower)
            || other.contains(&self.upper)
    }
}

impl<T: PartialEq, C: Comparer<T>> Interval<T, C> {
    /// Can the two intervals be joined without a gap?
    ///
    /// This holds if they overlap, if one contains the other or if they touch
    /// at a bound. Touching is value equality of the bounds, independent of
    /// the comparer and of the endpoint policies.
    pub fn is_contiguous_with(&self, other: &Interval<T, C>) -> bool {
        self.overlaps(other)
            || other.overlaps(self)
            || self.contains_interval(other)
            || other.contains_interval(self)
            || self.upper == other.lower
            || self.lower == other.upper
    }
}

impl<T: Clone, C: Comparer<T> + Clone> Interval<T, C> {
    /// The interval of values shared by both, if they overlap
    ///
    /// The result spans from the greater lower bound to the lesser upper
    /// bound. Its policy is `combine(self.policy(), other.policy())`.
    ///
    /// ```
    /// use ordspan::{Interval, EndpointPolicy::Closed};
    /// let a = Interval::with_policy(-10, 6, Closed).unwrap();
    /// let b = Interval::with_policy(1, 10, Closed).unwrap();
    /// assert_eq!(a.intersect(&b).unwrap().to_string(), "(1, 6)");
    /// ```
    pub fn intersect(&self, other: &Interval<T, C>) -> Option<Interval<T, C>> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Interval {
            lower: self.comparer.max(&self.lower, &other.lower).clone(),
            upper: self.comparer.min(&self.upper, &other.upper).clone(),
            comparer: self.comparer.clone(),
            policy: combine(self.policy, other.policy),
        })
    }
}

impl<T: Clone + PartialEq, C: Comparer<T> + Clone> Interval<T, C> {
    /// The interval covering both, if they are contiguous
    ///
    /// If one interval contains the other, the container is returned as it
    /// is. Otherwise the result spans from the lesser lower bound to the
    /// greater upper bound with policy `combine(self.policy(), other.policy())`.
    ///
    /// ```
    /// use ordspan::{Interval, EndpointPolicy::Closed};
    /// let a = Interval::with_policy(3, 9, Closed).unwrap();
    /// let b = Interval::with_policy(7, 11, Closed).unwrap();
    /// assert_eq!(a.union(&b).unwrap().to_string(), "(3, 11)");
    /// ```
    pub fn union(&self, other: &Interval<T, C>) -> Option<Interval<T, C>> {
        if !self.is_contiguous_with(other) {
            return None;
        }
        if self.contains_interval(other) {
            return Some(self.clone());
        }
        if other.contains_interval(self) {
            return Some(other.clone());
        }
        Some(Interval {
            lower: self.comparer.min(&self.lower, &other.lower).clone(),
            upper: self.comparer.max(&self.upper, &other.upper).clone(),
            comparer: self.comparer.clone(),
            policy: combine(self.policy, other.policy),
        })
    }
}


#[cfg(test)]
mod test {
    use super::Interval;
    use crate::error::Error;
    use crate::policy::{combine, EndpointPolicy};
    use crate::policy::EndpointPolicy::*;
    use quickcheck::{quickcheck, TestResult};

    fn iv(lower: i32, upper: i32, policy: EndpointPolicy) -> Interval<i32> {
        Interval::with_policy(lower, upper, policy).unwrap()
    }

    fn last_digit(a: &i32, b: &i32) -> std::cmp::Ordering {
        (a % 10).cmp(&(b % 10))
    }

    #[test]
    fn construction_rejects_inverted_bounds() {
        assert_eq!(Interval::new(10, 5), Err(Error::InvalidInterval));
        assert!(Interval::with_policy(5, 5, Closed).is_ok());
    }

    #[test]
    fn construction_uses_the_comparer() {
        assert!(Interval::with_comparer(13, 7, last_digit, LeftHalfOpen).is_ok());
        assert!(Interval::with_comparer(7, 13, last_digit, LeftHalfOpen).is_err());
    }

    #[test]
    fn closed_excludes_both_bounds() {
        let i = iv(5, 10, Closed);
        assert!(!i.contains(&5));
        assert!(i.contains(&6));
        assert!(!i.contains(&10));
    }

    #[test]
    fn open_includes_both_bounds() {
        let i = iv(5, 10, Open);
        assert!(i.contains(&5));
        assert!(i.contains(&10));
        assert!(!i.contains(&4));
        assert!(!i.contains(&11));
    }

    #[test]
    fn half_open_bounds() {
        let left = iv(5, 10, LeftHalfOpen);
        assert!(left.contains(&5));
        assert!(!left.contains(&10));
        let right = iv(5, 10, RightHalfOpen);
        assert!(!right.contains(&5));
        assert!(right.contains(&10));
    }

    #[test]
    fn contains_under_custom_comparer() {
        let i = Interval::with_comparer(13, 7, last_digit, LeftHalfOpen).unwrap();
        assert!(i.contains(&45));
        assert!(!i.contains(&37));
        assert!(i.contains(&3));
        assert!(!i.contains(&2));
    }

    #[test]
    fn contains_interval() {
        let outer = iv(0, 10, Open);
        assert!(outer.contains_interval(&iv(0, 10, Closed)));
        assert!(outer.contains_interval(&iv(3, 4, Open)));
        assert!(!iv(0, 10, Closed).contains_interval(&outer));
        assert!(iv(3, 4, Open).is_contained_by(&outer));
        assert!(!outer.is_contained_by(&iv(3, 4, Open)));
    }

    #[test]
    fn overlap_at_shared_inclusive_bound() {
        assert!(iv(1, 5, Open).overlaps(&iv(5, 9, Open)));
        assert!(!iv(1, 5, LeftHalfOpen).overlaps(&iv(5, 9, RightHalfOpen)));
        assert!(!iv(1, 4, Open).overlaps(&iv(5, 9, Open)));
    }

    #[test]
    fn touching_intervals_are_contiguous() {
        let a = iv(1, 5, LeftHalfOpen);
        let b = iv(5, 9, RightHalfOpen);
        assert!(!a.overlaps(&b));
        assert!(a.is_contiguous_with(&b));
        assert!(b.is_contiguous_with(&a));
        assert!(!iv(1, 4, Open).is_contiguous_with(&iv(5, 9, Open)));
    }

    #[test]
    fn intersect_closed() {
        let result = iv(-10, 6, Closed).intersect(&iv(1, 10, Closed)).unwrap();
        assert_eq!((*result.lower(), *result.upper()), (1, 6));
        assert_eq!(result.policy(), Closed);
    }

    #[test]
    fn intersect_disjoint_is_none() {
        assert_eq!(iv(1, 4, Open).intersect(&iv(5, 9, Open)), None);
    }

    #[test]
    fn union_closed() {
        let result = iv(3, 9, Closed).union(&iv(7, 11, Closed)).unwrap();
        assert_eq!((*result.lower(), *result.upper()), (3, 11));
        assert_eq!(result.policy(), Closed);
    }

    #[test]
    fn union_returns_container_unchanged() {
        let outer = iv(0, 20, RightHalfOpen);
        let inner = iv(5, 6, Open);
        assert_eq!(outer.union(&inner), Some(outer));
        assert_eq!(inner.union(&outer), Some(outer));
    }

    #[test]
    fn union_of_touching_intervals() {
        let result = iv(1, 5, LeftHalfOpen).union(&iv(5, 9, RightHalfOpen)).unwrap();
        assert_eq!((*result.lower(), *result.upper()), (1, 9));
        assert_eq!(result.policy(), Open);
    }

    #[test]
    fn union_disjoint_is_none() {
        assert_eq!(iv(1, 3, Open).union(&iv(5, 9, Open)), None);
    }

    #[test]
    fn union_none_iff_not_contiguous() {
        fn union_none_iff_not_contiguous(a: Interval<i8>, b: Interval<i8>) -> bool {
            a.union(&b).is_none() == !a.is_contiguous_with(&b)
        }
        quickcheck(union_none_iff_not_contiguous as fn(Interval<i8>, Interval<i8>) -> bool);
    }

    #[test]
    fn intersect_none_iff_no_overlap() {
        fn intersect_none_iff_no_overlap(a: Interval<i8>, b: Interval<i8>) -> bool {
            a.intersect(&b).is_none() == !a.overlaps(&b)
        }
        quickcheck(intersect_none_iff_no_overlap as fn(Interval<i8>, Interval<i8>) -> bool);
    }

    #[test]
    fn intersect_bounds_commute() {
        fn intersect_bounds_commute(a: Interval<i8>, b: Interval<i8>) -> TestResult {
            match (a.intersect(&b), b.intersect(&a)) {
                (Some(ab), Some(ba)) => TestResult::from_bool(
                    ab.into_bounds() == ba.into_bounds()
                        && ab.policy() == combine(a.policy(), b.policy())
                        && ba.policy() == combine(b.policy(), a.policy())
                ),
                (None, None) => TestResult::discard(),
                _ => TestResult::failed(),
            }
        }
        quickcheck(intersect_bounds_commute as fn(Interval<i8>, Interval<i8>) -> TestResult);
    }

    #[test]
    fn union_bounds_commute() {
        fn union_bounds_commute(a: Interval<i8>, b: Interval<i8>) -> TestResult {
            match (a.union(&b), b.union(&a)) {
                (Some(ab), Some(ba)) => TestResult::from_bool(
                    ab.into_bounds() == ba.into_bounds()
                ),
                (None, None) => TestResult::discard(),
                _ => TestResult::failed(),
            }
        }
        quickcheck(union_bounds_commute as fn(Interval<i8>, Interval<i8>) -> TestResult);
    }

    #[test]
    fn intersection_interior_belongs_to_both() {
        fn intersection_interior_belongs_to_both(a: Interval<i8>, b: Interval<i8>, x: i8)
            -> TestResult
        {
            match a.intersect(&b) {
                Some(i) if *i.lower() < x && x < *i.upper() => TestResult::from_bool(
                    a.contains(&x) && b.contains(&x)
                ),
                _ => TestResult::discard(),
            }
        }
        quickcheck(intersection_interior_belongs_to_both
            as fn(Interval<i8>, Interval<i8>, i8) -> TestResult);
    }
}
