//! Random intervals for property tests

use quickcheck::{Arbitrary, Gen};

use crate::compare::Natural;
use crate::interval::Interval;
use crate::policy::EndpointPolicy;


impl Arbitrary for EndpointPolicy {
    fn arbitrary(g: &mut Gen) -> EndpointPolicy {
        *g.choose(&EndpointPolicy::ALL).unwrap_or(&EndpointPolicy::Open)
    }
}

/// Bounds are drawn independently and swapped into order
impl<T: Arbitrary + Ord> Arbitrary for Interval<T> {
    fn arbitrary(g: &mut Gen) -> Interval<T> {
        let (a, b) = (T::arbitrary(g), T::arbitrary(g));
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        Interval::from_parts(lower, upper, Natural, EndpointPolicy::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Interval<T>>> {
        let policy = self.policy();
        Box::new(
            (self.lower().clone(), self.upper().clone())
                .shrink()
                .filter(|(lower, upper)| lower <= upper)
                .map(move |(lower, upper)| Interval::from_parts(lower, upper, Natural, policy))
        )
    }
}
