use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search stack is not empty: {pending} resumption records pending")]
    PreconditionViolation { pending: usize },

    #[error("Resumed candidate diverged from its recorded path: {0}")]
    Diverged(#[from] Divergence),
}

/// Ways a replayed candidate can stop retracing the choices it made when a
/// resumption record was taken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Divergence {
    #[error("choice point {depth} had {recorded} alternatives, found {found}")]
    Arity {
        depth: usize,
        recorded: usize,
        found: usize,
    },

    #[error("choice point {depth} produced a value of a different type")]
    Type { depth: usize },

    #[error("choice point {depth} was never reached")]
    Unreached { depth: usize },
}

/// Signal returned by a candidate to abandon the branch it is exploring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fail {
    /// Prune this branch and resume at the most recent choice point
    Backtrack,
    Diverged(Divergence),
}

impl From<Divergence> for Fail {
    fn from(d: Divergence) -> Self {
        Fail::Diverged(d)
    }
}
