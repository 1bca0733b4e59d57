use crate::strategy::Term;

/// Append-only store of computed terms, indexed by n.
///
/// Seeded with f(0) = 0 and f(1) = 1. Entries are never mutated or removed
/// once written, so the populated range only grows for the lifetime of the
/// cache. The memoized strategy extends it one term at a time; a later call
/// with a smaller argument resolves by lookup alone.
///
/// Single-threaded by design. Callers that share one cache across threads
/// must wrap it in a `Mutex` to keep appends ordered.
#[derive(Debug, Clone)]
pub struct TermCache {
    terms: Vec<Term>,
}

impl TermCache {
    pub fn new() -> Self {
        Self { terms: vec![0, 1] }
    }

    /// Number of populated terms. At least 2, never decreases.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false; the seed entries are present from construction.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest n with a stored term.
    pub fn highest_index(&self) -> usize {
        self.terms.len() - 1
    }

    pub fn get(&self, n: usize) -> Option<Term> {
        self.terms.get(n).copied()
    }

    /// Appends the term for index `len()`. Existing entries are untouched.
    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }
}

impl Default for TermCache {
    fn default() -> Self {
        Self::new()
    }
}
