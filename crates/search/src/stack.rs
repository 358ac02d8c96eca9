use std::fmt;
use std::rc::Rc;

use crate::branch::{Branch, Step};
use crate::Fail;

pub(crate) type Candidate<'a, T> = dyn Fn(&mut Branch) -> Result<T, Fail> + 'a;

/// Continue exploring a candidate from a recorded choice point using its
/// next untried alternative.
pub(crate) struct Resumption<'a, T> {
    pub(crate) candidate: Rc<Candidate<'a, T>>,
    /// Choices made before the choice point
    pub(crate) trail: Vec<Step>,
    pub(crate) next: usize,
    pub(crate) arity: usize,
}

impl<'a, T> Resumption<'a, T> {
    /// Consume the record into the candidate to run and the branch that
    /// replays it up to the choice point.
    pub(crate) fn invoke(self) -> (Rc<Candidate<'a, T>>, Branch) {
        let branch = Branch::resume(self.trail, self.next, self.arity);
        (self.candidate, branch)
    }
}

impl<'a, T> fmt::Debug for Resumption<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resumption")
            .field("depth", &self.trail.len())
            .field("next", &self.next)
            .field("arity", &self.arity)
            .finish()
    }
}

#[derive(Debug)]
pub(crate) struct SearchStack<'a, T> {
    records: Vec<Resumption<'a, T>>,
}

impl<'a, T> SearchStack<'a, T> {
    pub(crate) fn new() -> SearchStack<'a, T> {
        SearchStack {
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: Resumption<'a, T>) {
        log::trace!(
            "push choice point depth {}, alternative {}/{}",
            record.trail.len(),
            record.next + 1,
            record.arity
        );
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<Resumption<'a, T>> {
        let record = self.records.pop()?;
        log::trace!("pop {record:?}, {} records remain", self.records.len());
        Some(record)
    }

    /// Drop every record above `len`
    pub(crate) fn truncate(&mut self, len: usize) {
        if self.records.len() > len {
            log::debug!("discarding {} records", self.records.len() - len);
            self.records.truncate(len);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
