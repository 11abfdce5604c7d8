//! Default stepping for common types

use std::num::Wrapping;

use num_traits::{CheckedAdd, Float, One};


/// The notion of a next value
///
/// This drives iteration over an interval when no explicit stepper is given.
/// Implementations return `None` where advancing would leave the domain, so a
/// traversal of a bounded type always ends at its maximum instead of
/// wrapping around.
pub trait Successor: Sized {
    /// The value immediately after this one, if there is one
    fn successor(&self) -> Option<Self>;
}

fn checked_successor<T: CheckedAdd + One>(value: &T) -> Option<T> {
    value.checked_add(&T::one())
}

fn float_successor<F: Float>(value: F) -> Option<F> {
    let next = value + F::one();
    if next.is_finite() && next != value {
        Some(next)
    } else {
        None
    }
}

macro_rules! integer_successor (
    ($($t: ty),*) => ($(
        impl Successor for $t {
            fn successor(&self) -> Option<$t> { checked_successor(self) }
        }
    )*)
);

integer_successor!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Successor for f32 {
    fn successor(&self) -> Option<f32> { float_successor(*self) }
}

impl Successor for f64 {
    fn successor(&self) -> Option<f64> { float_successor(*self) }
}

/// Unicode scalar values in order, skipping the surrogate range
impl Successor for char {
    fn successor(&self) -> Option<char> {
        match *self {
            '\u{D7FF}' => Some('\u{E000}'),
            c => char::from_u32(c as u32 + 1),
        }
    }
}

/// Wrapping integers step like their inner type and stop at its maximum
impl<T: Successor> Successor for Wrapping<T> {
    fn successor(&self) -> Option<Wrapping<T>> {
        self.0.successor().map(Wrapping)
    }
}

/// Calendar days
#[cfg(feature = "chrono")]
impl Successor for chrono::NaiveDate {
    fn successor(&self) -> Option<chrono::NaiveDate> {
        self.succ_opt()
    }
}


#[cfg(test)]
mod test {
    use std::num::Wrapping;
    use super::Successor;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn integers_stop_at_max() {
        assert_eq!(254u8.successor(), Some(255));
        assert_eq!(255u8.successor(), None);
        assert_eq!(i64::MAX.successor(), None);
        assert_eq!((-1i32).successor(), Some(0));
    }

    #[test]
    fn integer_successor_is_plus_one() {
        fn integer_successor_is_plus_one(x: i32) -> TestResult {
            if x == i32::MAX { return TestResult::discard(); }
            TestResult::from_bool(x.successor() == Some(x + 1))
        }
        quickcheck(integer_successor_is_plus_one as fn(i32) -> TestResult);
    }

    #[test]
    fn wrapping_does_not_wrap() {
        assert_eq!(Wrapping(200u8).successor(), Some(Wrapping(201)));
        assert_eq!(Wrapping(255u8).successor(), None);
    }

    #[test]
    fn chars_skip_surrogates() {
        assert_eq!('a'.successor(), Some('b'));
        assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
        assert_eq!(char::MAX.successor(), None);
    }

    #[test]
    fn floats_stop_when_stuck() {
        assert_eq!(0.5f64.successor(), Some(1.5));
        assert_eq!(f64::MAX.successor(), None);
        assert_eq!(1.0e20f32.successor(), None);
        assert_eq!(f64::NAN.successor(), None);
        assert_eq!(f64::INFINITY.successor(), None);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn dates_advance_by_day() {
        use chrono::NaiveDate;
        let leap = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(leap.successor(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(NaiveDate::MAX.successor(), None);
    }
}
