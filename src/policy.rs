//! Endpoint inclusion policies

/// Which of the two bounds of an interval are members of it
///
/// The naming is inverted with respect to the usual mathematical convention:
/// an `Open` interval includes both of its bounds, a `Closed` interval
/// excludes both.
///
/// | Policy          | Lower included | Upper included |
/// |-----------------|----------------|----------------|
/// | `Open`          | yes            | yes            |
/// | `LeftHalfOpen`  | yes            | no             |
/// | `RightHalfOpen` | no             | yes            |
/// | `Closed`        | no             | no             |
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum EndpointPolicy {
    /// Both bounds included, rendered `[a, b]`
    #[default]
    Open,

    /// Lower bound included, rendered `[a, b)`
    LeftHalfOpen,

    /// Upper bound included, rendered `(a, b]`
    RightHalfOpen,

    /// Both bounds excluded, rendered `(a, b)`
    Closed,
}

impl EndpointPolicy {
    /// All four policies
    pub const ALL: [EndpointPolicy; 4] = [
        EndpointPolicy::Open,
        EndpointPolicy::LeftHalfOpen,
        EndpointPolicy::RightHalfOpen,
        EndpointPolicy::Closed,
    ];

    /// The policy with the given inclusion on each side
    pub fn from_inclusion(lower: bool, upper: bool) -> EndpointPolicy {
        match (lower, upper) {
            (true, true) => EndpointPolicy::Open,
            (true, false) => EndpointPolicy::LeftHalfOpen,
            (false, true) => EndpointPolicy::RightHalfOpen,
            (false, false) => EndpointPolicy::Closed,
        }
    }

    /// Is the lower bound a member?
    pub fn includes_lower(self) -> bool {
        matches!(self, EndpointPolicy::Open | EndpointPolicy::LeftHalfOpen)
    }

    /// Is the upper bound a member?
    pub fn includes_upper(self) -> bool {
        matches!(self, EndpointPolicy::Open | EndpointPolicy::RightHalfOpen)
    }
}


/// Deduce the policy of an interval built from two others
///
/// This is a fixed lookup table used by both union and intersection. Rows
/// are `left`, columns are `right`:
///
/// | left \ right    | `Open`          | `LeftHalfOpen` | `RightHalfOpen` | `Closed`       |
/// |-----------------|-----------------|----------------|-----------------|----------------|
/// | `Open`          | `Open`          | `LeftHalfOpen` | `Open`          | `LeftHalfOpen` |
/// | `LeftHalfOpen`  | `Open`          | `LeftHalfOpen` | `Open`          | `LeftHalfOpen` |
/// | `RightHalfOpen` | `RightHalfOpen` | `Closed`       | `RightHalfOpen` | `Closed`       |
/// | `Closed`        | `RightHalfOpen` | `Closed`       | `RightHalfOpen` | `Closed`       |
///
/// The table is not symmetric: `combine(a, b)` and `combine(b, a)` differ
/// whenever `a` and `b` disagree on either side.
///
/// ```
/// use ordspan::{combine, EndpointPolicy::*};
/// assert_eq!(combine(Open, Closed), LeftHalfOpen);
/// assert_eq!(combine(Closed, Open), RightHalfOpen);
/// ```
pub fn combine(left: EndpointPolicy, right: EndpointPolicy) -> EndpointPolicy {
    use self::EndpointPolicy::*;
    match (left, right) {
        (Open, Open) => Open,
        (Open, LeftHalfOpen) => LeftHalfOpen,
        (Open, RightHalfOpen) => Open,
        (Open, Closed) => LeftHalfOpen,

        (LeftHalfOpen, Open) => Open,
        (LeftHalfOpen, LeftHalfOpen) => LeftHalfOpen,
        (LeftHalfOpen, RightHalfOpen) => Open,
        (LeftHalfOpen, Closed) => LeftHalfOpen,

        (RightHalfOpen, Open) => RightHalfOpen,
        (RightHalfOpen, LeftHalfOpen) => Closed,
        (RightHalfOpen, RightHalfOpen) => RightHalfOpen,
        (RightHalfOpen, Closed) => Closed,

        (Closed, Open) => RightHalfOpen,
        (Closed, LeftHalfOpen) => Closed,
        (Closed, RightHalfOpen) => RightHalfOpen,
        (Closed, Closed) => Closed,
    }
}
