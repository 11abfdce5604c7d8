//! Ordering strategies

use std::cmp::Ordering;


/// A three-way ordering used in place of a type's natural order
///
/// Intervals are generic over their comparer, so a custom ordering is
/// resolved statically. Any closure `Fn(&T, &T) -> Ordering` is a comparer.
///
/// ```
/// use std::cmp::Ordering;
/// use ordspan::Comparer;
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"z"), Ordering::Greater);
/// ```
pub trait Comparer<T: ?Sized> {
    /// Compare two values
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// The greater of two values, `a` on a tie
    fn max<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        match self.compare(a, b) {
            Ordering::Less => b,
            _ => a,
        }
    }

    /// The lesser of two values, `a` on a tie
    fn min<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        match self.compare(a, b) {
            Ordering::Greater => b,
            _ => a,
        }
    }
}

impl<T: ?Sized, F> Comparer<T> for F
    where F: Fn(&T, &T) -> Ordering
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}


/// The natural order of a type, given by its `Ord` implementation
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}


/// The reverse of another comparer
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}


/// Order floating point values by `total_cmp`
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct TotalFloat;

impl Comparer<f64> for TotalFloat {
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

impl Comparer<f32> for TotalFloat {
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}
