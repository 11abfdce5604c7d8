//! Merging collections of intervals

use std::cmp::Ordering;

use itertools::Itertools;

use crate::compare::Natural;
use crate::interval::Interval;
use crate::policy::EndpointPolicy;


/// Merge intervals into the fewest covering ones
///
/// The intervals are sorted by lower bound, an included lower bound first on
/// a tie, and neighbours are joined whenever the next one starts no later
/// than the current one ends. The result is in ascending order and each
/// interval ends strictly before the next one starts. As with `union`, two
/// intervals that touch at a bound merge even if neither includes it.
///
/// ```
/// use ordspan::{coalesce, Interval};
/// let merged = coalesce(vec![
///     Interval::new(8, 9).unwrap(),
///     Interval::new(1, 3).unwrap(),
///     Interval::new(2, 5).unwrap(),
/// ]);
/// assert_eq!(merged, vec![Interval::new(1, 5).unwrap(), Interval::new(8, 9).unwrap()]);
/// ```
pub fn coalesce<T, I>(intervals: I) -> Vec<Interval<T>>
    where I: IntoIterator<Item = Interval<T>>,
          T: Ord + Clone,
{
    intervals
        .into_iter()
        .sorted_by(|a, b| {
            a.lower().cmp(b.lower()).then_with(|| {
                b.policy().includes_lower().cmp(&a.policy().includes_lower())
            })
        })
        .coalesce(|a, b| {
            if b.lower() <= a.upper() { Ok(merge(a, b)) } else { Err((a, b)) }
        })
        .collect()
}

/// Join two intervals, `b` starting within or right at the end of `a`
fn merge<T: Ord>(a: Interval<T>, b: Interval<T>) -> Interval<T> {
    let (a_policy, b_policy) = (a.policy(), b.policy());
    let ties_lower = a.lower() == b.lower();
    let (a_lower, a_upper) = a.into_bounds();
    let (_, b_upper) = b.into_bounds();

    let lower_included = a_policy.includes_lower() || (ties_lower && b_policy.includes_lower());
    let (upper, upper_included) = match a_upper.cmp(&b_upper) {
        Ordering::Greater => (a_upper, a_policy.includes_upper()),
        Ordering::Less => (b_upper, b_policy.includes_upper()),
        Ordering::Equal => (a_upper, a_policy.includes_upper() || b_policy.includes_upper()),
    };
    Interval::from_parts(
        a_lower,
        upper,
        Natural,
        EndpointPolicy::from_inclusion(lower_included, upper_included),
    )
}
