//!
//! Common definitions of edge weights and path distances
//!
//! * `Weight`: raw edge weight of the adjacency matrix
//! * `Cost`: sum of edge weights along a path
//! * `Distance`: a finite cost or "no path"
//!
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Raw edge weight. `0` off the diagonal means "no edge".
pub type Weight = u32;

/// Accumulated cost of a path.
pub type Cost = u64;

/// Placeholder written in place of an infinite distance.
pub const INFINITY_TOKEN: &str = "i";

///
/// Shortest path distance between two vertices.
///
/// `Infinite` means that no path exists. It is ordered after every finite
/// value, so `min` never picks it over a real path.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Cost),
    Infinite,
}

impl Distance {
    /// distance of a vertex to itself
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// finite cost, or None for `Infinite`
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Distance::Finite(c) => Some(*c),
            Distance::Infinite => None,
        }
    }

    ///
    /// Length of the concatenation of two paths.
    ///
    /// `Infinite` absorbs anything. Two finite costs are added with overflow
    /// checking; an overflow is reported instead of wrapping around.
    ///
    pub fn checked_add(self, other: Distance) -> Result<Distance> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a
                .checked_add(b)
                .map(Distance::Finite)
                .ok_or(Error::CostOverflow { lhs: a, rhs: b }),
            _ => Ok(Distance::Infinite),
        }
    }
}

impl From<Weight> for Distance {
    fn from(w: Weight) -> Distance {
        Distance::Finite(Cost::from(w))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(c) => write!(f, "{}", c),
            Distance::Infinite => write!(f, "{}", INFINITY_TOKEN),
        }
    }
}

impl FromStr for Distance {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> std::result::Result<Distance, Self::Err> {
        if s == INFINITY_TOKEN {
            Ok(Distance::Infinite)
        } else {
            s.parse::<Cost>().map(Distance::Finite)
        }
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_order() {
        assert!(Distance::Finite(0) < Distance::Finite(1));
        assert!(Distance::Finite(Cost::MAX) < Distance::Infinite);
        assert_eq!(
            Distance::Infinite.min(Distance::Finite(999)),
            Distance::Finite(999)
        );
    }

    #[test]
    fn distance_add() {
        let f = Distance::Finite;
        assert_eq!(f(5).checked_add(f(3)).unwrap(), f(8));
        assert_eq!(
            f(5).checked_add(Distance::Infinite).unwrap(),
            Distance::Infinite
        );
        assert_eq!(
            Distance::Infinite.checked_add(Distance::Infinite).unwrap(),
            Distance::Infinite
        );
        assert!(matches!(
            f(Cost::MAX).checked_add(f(1)),
            Err(Error::CostOverflow { lhs, rhs: 1 }) if lhs == Cost::MAX
        ));
    }

    #[test]
    fn distance_text() {
        assert_eq!(Distance::Infinite.to_string(), "i");
        assert_eq!(Distance::Finite(42).to_string(), "42");
        assert_eq!("i".parse::<Distance>().unwrap(), Distance::Infinite);
        assert_eq!("17".parse::<Distance>().unwrap(), Distance::Finite(17));
        assert!("x".parse::<Distance>().is_err());
        assert!("-1".parse::<Distance>().is_err());
    }
}
