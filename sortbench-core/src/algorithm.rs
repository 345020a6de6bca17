//! Algorithm tags from the executable-under-test wire contract.

use std::fmt;

/// One sorting algorithm measured by a benchmark executable.
///
/// The set is fixed by the wire contract: each successful run prints exactly
/// one `[<tag>] <text> <milliseconds>` line per algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `std::sort` from the C++ standard library.
    CppSort,
    /// `qsort` from libc.
    Qsort,
    /// The qqsort implementation under comparison.
    Qqsort,
}

impl Algorithm {
    /// All algorithms, in series/legend order.
    pub const ALL: [Algorithm; 3] = [Algorithm::CppSort, Algorithm::Qsort, Algorithm::Qqsort];

    /// Wire tag as it appears between brackets on a metric line.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::CppSort => "cppsort",
            Algorithm::Qsort => "qsort",
            Algorithm::Qqsort => "qqsort",
        }
    }

    /// The bracketed line prefix identifying this algorithm's metric line.
    pub fn line_prefix(self) -> &'static str {
        match self {
            Algorithm::CppSort => "[cppsort]",
            Algorithm::Qsort => "[qsort]",
            Algorithm::Qqsort => "[qqsort]",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
