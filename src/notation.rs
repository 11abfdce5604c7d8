//! Bracket notation
//!
//! An interval is written as `{open}{lower}, {upper}{close}`, where a square
//! bracket marks an included bound and a parenthesis an excluded one:
//!
//! | Policy          | Notation |
//! |-----------------|----------|
//! | `Open`          | `[a, b]` |
//! | `LeftHalfOpen`  | `[a, b)` |
//! | `RightHalfOpen` | `(a, b]` |
//! | `Closed`        | `(a, b)` |
//!
//! Intervals under the natural order parse from the same notation. The
//! bounds are separated by the canonical `", "`; a bare `,` is accepted when
//! no `", "` occurs, and input with more than one candidate separator is
//! rejected as ambiguous.

use std::fmt::{self, Write};
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::policy::EndpointPolicy;


impl EndpointPolicy {
    /// The opening bracket of the notation
    pub fn open_bracket(self) -> char {
        if self.includes_lower() { '[' } else { '(' }
    }

    /// The closing bracket of the notation
    pub fn close_bracket(self) -> char {
        if self.includes_upper() { ']' } else { ')' }
    }
}

impl<T: fmt::Display, C> fmt::Display for Interval<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let policy = self.policy();
        f.write_char(policy.open_bracket())?;
        fmt::Display::fmt(self.lower(), f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(self.upper(), f)?;
        f.write_char(policy.close_bracket())
    }
}

impl<T> FromStr for Interval<T>
    where T: FromStr + Ord,
          T::Err: fmt::Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Interval<T>> {
        let s = s.trim();
        let lower_included = match s.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Err(malformed(s, "expected '[' or '('")),
        };
        let upper_included = match s.chars().last() {
            Some(']') if s.len() > 1 => true,
            Some(')') if s.len() > 1 => false,
            _ => return Err(malformed(s, "expected ']' or ')'")),
        };
        let inner = &s[1..s.len() - 1];
        let (lower, upper) = split_bounds(s, inner)?;
        let lower = parse_bound(s, lower)?;
        let upper = parse_bound(s, upper)?;
        Interval::with_policy(
            lower,
            upper,
            EndpointPolicy::from_inclusion(lower_included, upper_included),
        )
    }
}

/// Split at the single `", "`, or at the single `,` if there is none
fn split_bounds<'a>(s: &str, inner: &'a str) -> Result<(&'a str, &'a str)> {
    let separator = if inner.contains(", ") { ", " } else { "," };
    match inner.matches(separator).count() {
        0 => Err(malformed(s, "expected ',' between the bounds")),
        1 => inner
            .split_once(separator)
            .ok_or_else(|| malformed(s, "expected ',' between the bounds")),
        _ => Err(malformed(s, "ambiguous separator between the bounds")),
    }
}

fn malformed(s: &str, reason: &str) -> Error {
    debug!("rejected interval notation {:?}: {}", s, reason);
    Error::InvalidArgument(format!("{}: {:?}", reason, s))
}

fn parse_bound<T>(s: &str, bound: &str) -> Result<T>
    where T: FromStr,
          T::Err: fmt::Display,
{
    let bound = bound.trim();
    if bound.is_empty() {
        return Err(malformed(s, "missing bound"));
    }
    bound.parse().map_err(|e: T::Err| {
        debug!("rejected bound {:?}: {}", bound, e);
        Error::InvalidBound(format!("{:?}: {}", bound, e))
    })
}
