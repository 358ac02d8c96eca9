use std::cell::{Cell, OnceCell};
use std::fmt;

type Thunk<'d, A> = Box<dyn FnOnce() -> A + 'd>;

/// A value computed only when forced. Forcing runs the thunk at most once
/// and memoizes the result.
pub struct Deferred<'d, A> {
    thunk: Cell<Option<Thunk<'d, A>>>,
    value: OnceCell<A>,
}

impl<'d, A> Deferred<'d, A> {
    pub fn new<F>(f: F) -> Deferred<'d, A>
    where
        F: FnOnce() -> A + 'd,
    {
        Deferred {
            thunk: Cell::new(Some(Box::new(f))),
            value: OnceCell::new(),
        }
    }

    /// Already evaluated value
    pub fn ready(value: A) -> Deferred<'d, A> {
        Deferred {
            thunk: Cell::new(None),
            value: OnceCell::from(value),
        }
    }

    pub fn force(&self) -> A
    where
        A: Clone,
    {
        self.value
            .get_or_init(|| {
                let thunk = self
                    .thunk
                    .take()
                    .expect("Deferred value without a value or a thunk");
                thunk()
            })
            .clone()
    }
}

impl<'d, A: fmt::Debug> fmt::Debug for Deferred<'d, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => f.write_str("Deferred(<pending>)"),
        }
    }
}
