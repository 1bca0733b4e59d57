use std::fmt;

use serde::Serialize;

use crate::cache::TermCache;
use crate::error::{FibError, FibResult};

/// A single value of the sequence, f(n).
///
/// `u128` holds terms up to f(186); anything past that is reported as
/// [`FibError::Overflow`] instead of wrapping.
pub type Term = u128;

/// The three interchangeable algorithms computing f(n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Naive,
    Memoized,
    Iterative,
}

impl Strategy {
    /// Function label used in report lines, e.g. `fib_naive(30) took ...`.
    pub fn fn_name(&self) -> &'static str {
        match self {
            Self::Naive => "fib_naive",
            Self::Memoized => "fib_memo",
            Self::Iterative => "fib",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Memoized => write!(f, "memoized"),
            Self::Iterative => write!(f, "iterative"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "memoized" => Ok(Self::Memoized),
            "iterative" => Ok(Self::Iterative),
            _ => Err(format!("invalid strategy: {s}")),
        }
    }
}

fn check_argument(n: i64) -> FibResult<u64> {
    if n < 0 {
        return Err(FibError::NegativeArgument(n));
    }
    Ok(n as u64)
}

/// Uncached double recursion. Exponential time, deliberately so; this is
/// the benchmark contrast case, not the production path.
pub fn fib_naive(n: i64) -> FibResult<Term> {
    let n = check_argument(n)?;
    naive_inner(n)
}

fn naive_inner(n: u64) -> FibResult<Term> {
    if n < 2 {
        return Ok(Term::from(n));
    }
    let a = naive_inner(n - 1)?;
    let b = naive_inner(n - 2)?;
    a.checked_add(b).ok_or(FibError::Overflow { n })
}

/// Recursion over a caller-owned cache. A hit is a single lookup; a miss
/// appends exactly the terms between the cache frontier and `n`. Repeat
/// calls with a smaller or equal argument do no recomputation.
pub fn fib_memoized(cache: &mut TermCache, n: i64) -> FibResult<Term> {
    let n = check_argument(n)?;
    memoized_inner(cache, n as usize)
}

fn memoized_inner(cache: &mut TermCache, n: usize) -> FibResult<Term> {
    if let Some(term) = cache.get(n) {
        return Ok(term);
    }
    let a = memoized_inner(cache, n - 1)?;
    // The previous call populated everything up to n-1, so this is a hit.
    let b = memoized_inner(cache, n - 2)?;
    let term = a.checked_add(b).ok_or(FibError::Overflow { n: n as u64 })?;
    cache.push(term);
    Ok(term)
}

/// Two rolling predecessors, n-1 additions, no recursion. The safe choice
/// for large n; recursion depth is never a concern here.
pub fn fib_iterative(n: i64) -> FibResult<Term> {
    let n = check_argument(n)?;
    if n < 2 {
        return Ok(Term::from(n));
    }
    let (mut prev, mut curr): (Term, Term) = (0, 1);
    for i in 2..=n {
        let next = prev.checked_add(curr).ok_or(FibError::Overflow { n: i })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}
