//! Stepping through intervals.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::mem;

use log::trace;

use crate::compare::{Comparer, Natural};
use crate::interval::Interval;
use crate::successor::Successor;


/// A strategy producing the value after a given one
///
/// Returning `None` ends the traversal.
pub trait Stepper<T> {
    /// The value after `current`
    fn step(&self, current: &T) -> Option<T>;
}

/// Steps with the type's `Successor` implementation
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct DefaultStepper;

impl<T: Successor> Stepper<T> for DefaultStepper {
    fn step(&self, current: &T) -> Option<T> {
        current.successor()
    }
}

/// Steps with a closure that always produces a next value
#[derive(Clone, Copy, Debug)]
pub struct StepFn<F>(pub F);

impl<T, F> Stepper<T> for StepFn<F>
    where F: Fn(&T) -> T
{
    fn step(&self, current: &T) -> Option<T> {
        Some((self.0)(current))
    }
}

/// Steps with a closure that may decline to produce a next value
#[derive(Clone, Copy, Debug)]
pub struct TryStepFn<F>(pub F);

impl<T, F> Stepper<T> for TryStepFn<F>
    where F: Fn(&T) -> Option<T>
{
    fn step(&self, current: &T) -> Option<T> {
        (self.0)(current)
    }
}


/// An interval together with a stepping strategy
///
/// Every call to `iter` starts an independent traversal, so an iterable
/// interval can be walked any number of times and shared freely.
#[derive(Clone, Copy, Debug)]
pub struct IterableInterval<T, C = Natural, S = DefaultStepper> {
    interval: Interval<T, C>,
    stepper: S,
}

impl<T, C> Interval<T, C> {
    /// Step through the interval with the type's default successor
    ///
    /// ```
    /// use ordspan::{Interval, EndpointPolicy::RightHalfOpen};
    /// let letters = Interval::with_policy('a', 'e', RightHalfOpen).unwrap().iterable();
    /// assert_eq!(letters.iter().collect::<String>(), "bcde");
    /// ```
    pub fn iterable(self) -> IterableInterval<T, C, DefaultStepper>
        where T: Successor
    {
        self.stepped_by(DefaultStepper)
    }

    /// Step through the interval with a closure
    ///
    /// ```
    /// use ordspan::Interval;
    /// let evens = Interval::new(0, 9).unwrap().with_stepper(|x| x + 2);
    /// assert_eq!(evens.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn with_stepper<F>(self, step: F) -> IterableInterval<T, C, StepFn<F>>
        where F: Fn(&T) -> T
    {
        self.stepped_by(StepFn(step))
    }

    /// Step through the interval with a closure returning `None` to stop
    pub fn with_partial_stepper<F>(self, step: F) -> IterableInterval<T, C, TryStepFn<F>>
        where F: Fn(&T) -> Option<T>
    {
        self.stepped_by(TryStepFn(step))
    }

    /// Step through the interval with an arbitrary stepper
    pub fn stepped_by<S: Stepper<T>>(self, stepper: S) -> IterableInterval<T, C, S> {
        IterableInterval { interval: self, stepper }
    }
}

impl<T, C, S> IterableInterval<T, C, S> {
    /// The underlying interval
    pub fn interval(&self) -> &Interval<T, C> {
        &self.interval
    }

    /// The stepping strategy
    pub fn stepper(&self) -> &S {
        &self.stepper
    }

    /// Detach the stepper
    pub fn into_interval(self) -> Interval<T, C> {
        self.interval
    }
}

impl<T, C, S> IterableInterval<T, C, S>
    where T: Clone,
          C: Comparer<T>,
          S: Stepper<T>,
{
    /// Start a new traversal
    pub fn iter(&self) -> Iter<T, C, S> {
        Iter::new(self)
    }
}

impl<'a, T, C, S> IntoIterator for &'a IterableInterval<T, C, S>
    where T: Clone,
          C: Comparer<T>,
          S: Stepper<T>,
{
    type Item = T;
    type IntoIter = Iter<'a, T, C, S>;

    fn into_iter(self) -> Iter<'a, T, C, S> {
        self.iter()
    }
}


enum Cursor<T> {
    Start,
    After(T),
    Done,
}

/// A traversal of an iterable interval
///
/// The first value is the lower bound if the policy includes it, otherwise
/// the step after it. Each further value is the step after the previous one.
/// The traversal ends as soon as a value is not contained in the interval,
/// the stepper returns `None`, or a step does not advance under the
/// interval's comparer. The last rule makes a no-op stepper yield a single
/// value and stops steppers that wrap around. It also ends the traversal
/// when a custom comparer orders the next value at or below the current one
/// even though it is still contained: under a last-digit comparer, `[10, 99]`
/// with the default stepper yields `10..=19` and stops before `20`.
pub struct Iter<'a, T: 'a, C: 'a, S: 'a> {
    owner: &'a IterableInterval<T, C, S>,
    cursor: Cursor<T>,
}

impl<'a, T, C, S> Iter<'a, T, C, S>
    where T: Clone,
          C: Comparer<T>,
          S: Stepper<T>,
{
    /// Create a new traversal
    pub fn new(owner: &'a IterableInterval<T, C, S>) -> Iter<'a, T, C, S> {
        Iter { owner, cursor: Cursor::Start }
    }

    fn advance(&self, from: &T) -> Option<T> {
        let next = match self.owner.stepper.step(from) {
            Some(next) => next,
            None => {
                trace!("stepper exhausted, ending traversal");
                return None;
            }
        };
        if self.owner.interval.comparer().compare(&next, from) != Ordering::Greater {
            trace!("step did not advance, ending traversal");
            return None;
        }
        Some(next)
    }
}

impl<'a, T, C, S> Iterator for Iter<'a, T, C, S>
    where T: Clone,
          C: Comparer<T>,
          S: Stepper<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let owner = self.owner;
        let interval = &owner.interval;
        let candidate = match mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Done => return None,
            Cursor::Start if interval.policy().includes_lower() => {
                Some(interval.lower().clone())
            }
            Cursor::Start => self.advance(interval.lower()),
            Cursor::After(previous) => self.advance(&previous),
        };
        match candidate {
            Some(value) if interval.contains(&value) => {
                self.cursor = Cursor::After(value.clone());
                Some(value)
            }
            _ => None,
        }
    }
}

impl<'a, T, C, S> FusedIterator for Iter<'a, T, C, S>
    where T: Clone,
          C: Comparer<T>,
          S: Stepper<T>,
{}
