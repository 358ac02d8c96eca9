use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::{Deferred, Divergence, Fail, Outcome};

/// A choice made on a branch: which alternative was taken out of how many,
/// and the forced value it produced.
#[derive(Clone)]
pub(crate) struct Step {
    index: usize,
    arity: usize,
    value: Rc<dyn Any>,
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({}/{})", self.index + 1, self.arity)
    }
}

/// Choice point the branch is replaying towards
#[derive(Debug, Clone, Copy)]
struct Target {
    depth: usize,
    next: usize,
    arity: usize,
}

/// Choice point recorded during evaluation, not yet on the search stack
#[derive(Debug)]
pub(crate) struct Pending {
    pub(crate) trail: Vec<Step>,
    pub(crate) next: usize,
    pub(crate) arity: usize,
}

/// The branch of the search a candidate is currently evaluated on.
///
/// Choice points answer from the recorded trail while the branch is being
/// replayed, take the next untried alternative at the point being resumed and
/// take the first alternative everywhere after that.
#[derive(Debug)]
pub struct Branch {
    trail: Vec<Step>,
    depth: usize,
    target: Option<Target>,
    pending: Vec<Pending>,
}

impl Branch {
    pub(crate) fn fresh() -> Branch {
        Branch {
            trail: Vec::new(),
            depth: 0,
            target: None,
            pending: Vec::new(),
        }
    }

    pub(crate) fn resume(trail: Vec<Step>, next: usize, arity: usize) -> Branch {
        let target = Target {
            depth: trail.len(),
            next,
            arity,
        };

        Branch {
            trail,
            depth: 0,
            target: Some(target),
            pending: Vec::new(),
        }
    }

    /// Number of choice points passed on this branch so far
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Choose one of the deferred alternatives. Only the alternative taken is
    /// forced; the rest are explored on backtracking.
    pub fn choice<'d, A, I>(&mut self, alternatives: I) -> Result<A, Fail>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Deferred<'d, A>>,
    {
        let alternatives: Vec<Deferred<'d, A>> = alternatives.into_iter().collect();
        let arity = alternatives.len();
        self.pick(arity, |index| alternatives[index].force())
    }

    /// Choose one of already evaluated values
    pub fn choose<A, I>(&mut self, values: I) -> Result<A, Fail>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = A>,
    {
        self.choice(values.into_iter().map(Deferred::ready))
    }

    fn pick<A, F>(&mut self, arity: usize, force: F) -> Result<A, Fail>
    where
        A: Clone + 'static,
        F: FnOnce(usize) -> A,
    {
        let depth = self.depth;

        if let Some(step) = self.trail.get(depth) {
            if step.arity != arity {
                return Err(Divergence::Arity {
                    depth,
                    recorded: step.arity,
                    found: arity,
                }
                .into());
            }

            let value = step
                .value
                .downcast_ref::<A>()
                .ok_or(Divergence::Type { depth })?
                .clone();
            self.depth += 1;
            return Ok(value);
        }

        let index = match self.target.take() {
            Some(target) => {
                if target.arity != arity {
                    return Err(Divergence::Arity {
                        depth,
                        recorded: target.arity,
                        found: arity,
                    }
                    .into());
                }
                target.next
            }
            None => 0,
        };

        if arity == 0 {
            log::trace!("choice point {depth} has no alternatives");
            return Err(Fail::Backtrack);
        }

        let value = force(index);
        if index + 1 < arity {
            self.pending.push(Pending {
                trail: self.trail.clone(),
                next: index + 1,
                arity,
            });
        }

        self.trail.push(Step {
            index,
            arity,
            value: Rc::new(value.clone()),
        });
        self.depth += 1;

        Ok(value)
    }

    /// Continue with `expr` if it satisfies `pred`, otherwise backtrack.
    /// An exhausted `expr` backtracks without consulting `pred`.
    pub fn assert<A, P>(&self, pred: P, expr: impl Into<Outcome<A>>) -> Result<A, Fail>
    where
        P: FnOnce(&A) -> bool,
    {
        match expr.into() {
            Outcome::Value(value) => {
                if pred(&value) {
                    Ok(value)
                } else {
                    log::trace!("assertion failed at depth {}", self.depth);
                    Err(Fail::Backtrack)
                }
            }
            Outcome::Exhausted => {
                log::trace!("assertion on exhausted value at depth {}", self.depth);
                Err(Fail::Backtrack)
            }
        }
    }

    /// Same as [`Branch::assert`]
    pub fn query<A, P>(&self, pred: P, expr: impl Into<Outcome<A>>) -> Result<A, Fail>
    where
        P: FnOnce(&A) -> bool,
    {
        self.assert(pred, expr)
    }

    pub fn guard(&self, condition: bool) -> Result<(), Fail> {
        if condition {
            Ok(())
        } else {
            Err(Fail::Backtrack)
        }
    }

    /// Abandon this branch
    pub fn fail<A>(&self) -> Result<A, Fail> {
        Err(Fail::Backtrack)
    }

    pub(crate) fn take_pending(&mut self) -> Vec<Pending> {
        std::mem::take(&mut self.pending)
    }

    /// Resumed choice point that the candidate never got to
    pub(crate) fn unreached(&self) -> Option<Divergence> {
        self.target
            .map(|target| Divergence::Unreached { depth: target.depth })
    }
}

/// Choose between expressions, evaluating only the ones the search needs.
///
/// ```
/// use ambit_search::{choice, Session};
///
/// let mut session = Session::new();
/// let all = session.all(|b| Ok(choice!(b; 1, 2)? + choice!(b; 10, 20)?));
/// assert_eq!(all, Ok(vec![11, 21, 12, 22]));
/// ```
#[macro_export]
macro_rules! choice {
    ($branch:expr; $($alt:expr),* $(,)?) => {
        $branch.choice(::std::vec![$($crate::Deferred::new(|| $alt)),*])
    };
}
