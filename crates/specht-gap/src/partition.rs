//! Integer partitions indexing Specht and simple modules.

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

/// An error from constructing a [`Partition`].
#[derive(Clone, Debug, Error)]
pub enum PartitionError {
    /// A part was zero. Partitions consist of positive parts only.
    #[error("partition parts must be positive")]
    ZeroPart,
    /// The parts were not weakly decreasing.
    #[error("partition parts must be weakly decreasing ({next} follows {prev})")]
    Ascending {
        /// The part preceding the violation.
        prev: u64,
        /// The offending larger part.
        next: u64,
    },
}

/// A partition: a weakly decreasing sequence of positive integers.
///
/// Partitions index both Specht modules and simple modules, so every query
/// takes a pair of them. The empty partition (of zero) is allowed.
///
/// Most partitions in this domain have a handful of parts, so they are kept
/// inline up to eight parts. No `Ord` is provided: the natural order on
/// partitions (dominance) is partial, and a derived lexicographic order
/// would be misleading.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Partition(SmallVec<[u64; 8]>);

impl Partition {
    /// Validates and wraps a sequence of parts.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::ZeroPart`] if any part is zero and
    /// [`PartitionError::Ascending`] if the parts increase anywhere.
    pub fn new(parts: &[u64]) -> Result<Self, PartitionError> {
        for window in parts.windows(2) {
            if window[1] > window[0] {
                return Err(PartitionError::Ascending {
                    prev: window[0],
                    next: window[1],
                });
            }
        }
        if parts.iter().any(|&part| part == 0) {
            return Err(PartitionError::ZeroPart);
        }
        Ok(Partition(SmallVec::from_slice(parts)))
    }

    /// The parts, largest first.
    #[must_use]
    pub fn parts(&self) -> &[u64] {
        &self.0
    }

    /// The number the partition partitions, i.e. the sum of its parts.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.0.iter().sum()
    }

    /// The number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty partition of zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The partition as a GAP list literal, e.g. `[6,4,3,2,2,1]`.
    #[must_use]
    pub fn to_gap(&self) -> String {
        let mut out = String::from("[");
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&part.to_string());
        }
        out.push(']');
        out
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, "]")
    }
}

impl TryFrom<&[u64]> for Partition {
    type Error = PartitionError;

    fn try_from(parts: &[u64]) -> Result<Self, Self::Error> {
        Partition::new(parts)
    }
}

impl TryFrom<Vec<u64>> for Partition {
    type Error = PartitionError;

    fn try_from(parts: Vec<u64>) -> Result<Self, Self::Error> {
        Partition::new(&parts)
    }
}

impl<const N: usize> TryFrom<[u64; N]> for Partition {
    type Error = PartitionError;

    fn try_from(parts: [u64; N]) -> Result<Self, Self::Error> {
        Partition::new(&parts)
    }
}
