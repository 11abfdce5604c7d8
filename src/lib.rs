//! Generic intervals over ordered values
//!
//! An [`Interval`] spans two bounds of any type ordered by a [`Comparer`],
//! with an [`EndpointPolicy`] deciding which bounds are members. Intervals
//! support membership tests, overlap and adjacency queries, intersection and
//! union. Attaching a [`Stepper`] turns an interval into an
//! [`IterableInterval`] that can be walked lazily, any number of times.
//!
//! ```
//! use ordspan::{Interval, EndpointPolicy::Closed};
//!
//! let a = Interval::with_policy(3, 9, Closed).unwrap();
//! let b = Interval::with_policy(7, 11, Closed).unwrap();
//! assert_eq!(a.union(&b).unwrap().to_string(), "(3, 11)");
//! assert_eq!(a.iterable().iter().collect::<Vec<_>>(), vec![4, 5, 6, 7, 8]);
//! ```
//!
//! Note that the policy names are inverted with respect to the usual
//! mathematical convention: `Open` includes both bounds, `Closed` excludes
//! both.

#![warn(missing_docs)]

pub use crate::coalesce::coalesce;
pub use crate::compare::{Comparer, Natural, Reverse, TotalFloat};
pub use crate::error::{Error, Result};
pub use crate::interval::Interval;
pub use crate::iter::{DefaultStepper, Iter, IterableInterval, StepFn, Stepper, TryStepFn};
pub use crate::policy::{combine, EndpointPolicy};
pub use crate::successor::Successor;

pub mod compare;
pub mod error;
pub mod interval;
pub mod iter;
pub mod policy;
pub mod successor;

mod bounds;
mod coalesce;
mod notation;

#[cfg(any(test, feature = "arbitrary"))]
mod arbitrary;
