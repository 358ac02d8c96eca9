use std::rc::Rc;

use crate::branch::{Branch, Pending};
use crate::stack::{Candidate, Resumption, SearchStack};
use crate::{Fail, Outcome, SearchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Evaluating a candidate forward
    Exploring,
    /// Looking for a choice point to resume
    Backtracking,
    /// Stack ran out while backtracking
    Exhausted,
}

/// Owner of one search stack.
///
/// Candidates are closures evaluated against a [`Branch`]. Every choice point
/// with untried alternatives leaves a resumption record on the stack, and
/// [`Session::backtrack`] resumes the most recent one by replaying its
/// candidate along the recorded choices.
#[derive(Debug)]
pub struct Session<'a, T> {
    stack: SearchStack<'a, T>,
    state: State,
}

impl<'a, T> Session<'a, T> {
    pub fn new() -> Session<'a, T> {
        Session {
            stack: SearchStack::new(),
            state: State::Exploring,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of resumption records on the stack
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// Evaluate a candidate and return its first solution. Records left for
    /// the remaining alternatives stay on the stack for [`Session::backtrack`].
    pub fn evaluate<F>(&mut self, candidate: F) -> Result<Outcome<T>, SearchError>
    where
        F: Fn(&mut Branch) -> Result<T, Fail> + 'a,
    {
        self.start(Rc::new(candidate))
    }

    fn start(&mut self, candidate: Rc<Candidate<'a, T>>) -> Result<Outcome<T>, SearchError> {
        self.state = State::Exploring;

        match self.run(candidate, Branch::fresh()) {
            Ok(value) => Ok(Outcome::Value(value)),
            Err(Fail::Backtrack) => self.backtrack(),
            Err(Fail::Diverged(d)) => Err(d.into()),
        }
    }

    /// Resume the most recent choice point and return the next solution, or
    /// [`Outcome::Exhausted`] if the stack is empty.
    pub fn backtrack(&mut self) -> Result<Outcome<T>, SearchError> {
        self.state = State::Backtracking;

        while self.state == State::Backtracking {
            match self.stack.pop() {
                Some(record) => {
                    let (candidate, branch) = record.invoke();
                    self.state = State::Exploring;

                    match self.run(candidate, branch) {
                        Ok(value) => return Ok(Outcome::Value(value)),
                        Err(Fail::Backtrack) => self.state = State::Backtracking,
                        Err(Fail::Diverged(d)) => return Err(d.into()),
                    }
                }
                None => {
                    log::debug!("search exhausted");
                    self.state = State::Exhausted;
                }
            }
        }

        Ok(Outcome::Exhausted)
    }

    fn run(&mut self, candidate: Rc<Candidate<'a, T>>, mut branch: Branch) -> Result<T, Fail> {
        let result = match (candidate(&mut branch), branch.unreached()) {
            (Err(Fail::Diverged(d)), _) | (_, Some(d)) => Err(Fail::Diverged(d)),
            (result, None) => result,
        };

        // A diverged branch did not follow its trail, its choice points are
        // not resumable
        if !matches!(result, Err(Fail::Diverged(_))) {
            for Pending { trail, next, arity } in branch.take_pending() {
                self.stack.push(Resumption {
                    candidate: candidate.clone(),
                    trail,
                    next,
                    arity,
                });
            }
        }

        result
    }

    fn ensure_idle(&self) -> Result<(), SearchError> {
        if self.stack.is_empty() {
            Ok(())
        } else {
            Err(SearchError::PreconditionViolation {
                pending: self.stack.len(),
            })
        }
    }

    /// Every solution of the candidate in discovery order
    pub fn all<F>(&mut self, candidate: F) -> Result<Vec<T>, SearchError>
    where
        F: Fn(&mut Branch) -> Result<T, Fail> + 'a,
    {
        self.all_query(|_| true, candidate)
    }

    /// Every solution of the candidate satisfying `pred`, in discovery order
    pub fn all_query<F, P>(&mut self, pred: P, candidate: F) -> Result<Vec<T>, SearchError>
    where
        F: Fn(&mut Branch) -> Result<T, Fail> + 'a,
        P: Fn(&T) -> bool,
    {
        self.ensure_idle()?;

        let mut solutions = vec![];
        let mut outcome = self.evaluate(candidate);
        while let Ok(Outcome::Value(value)) = outcome {
            if pred(&value) {
                solutions.push(value);
            }

            outcome = self.backtrack();
        }

        if let Err(e) = outcome {
            log::debug!("enumeration stopped after {} solutions: {e}", solutions.len());
            self.stack.truncate(0);
            return Err(e);
        }

        debug_assert!(self.stack.is_empty());
        log::debug!("enumerated {} solutions", solutions.len());
        Ok(solutions)
    }

    /// Iterate solutions lazily, evaluating one branch per item.
    ///
    /// Dropping the iterator before it finishes leaves the unexplored choice
    /// points on this session.
    pub fn solutions<F>(&mut self, candidate: F) -> Result<Solutions<'_, 'a, T>, SearchError>
    where
        F: Fn(&mut Branch) -> Result<T, Fail> + 'a,
    {
        self.ensure_idle()?;

        Ok(Solutions {
            session: self,
            candidate: Some(Rc::new(candidate)),
            done: false,
        })
    }
}

impl<'a, T> Default for Session<'a, T> {
    fn default() -> Self {
        Session::new()
    }
}

/// Iterator over the solutions of a candidate
pub struct Solutions<'s, 'a, T> {
    session: &'s mut Session<'a, T>,
    candidate: Option<Rc<Candidate<'a, T>>>,
    done: bool,
}

impl<'s, 'a, T> Iterator for Solutions<'s, 'a, T> {
    type Item = Result<T, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let outcome = match self.candidate.take() {
            Some(candidate) => self.session.start(candidate),
            None => self.session.backtrack(),
        };

        match outcome {
            Ok(Outcome::Value(value)) => Some(Ok(value)),
            Ok(Outcome::Exhausted) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                self.session.stack.truncate(0);
                Some(Err(e))
            }
        }
    }
}
