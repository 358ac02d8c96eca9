/// Result of evaluating or backtracking a search.
///
/// `Exhausted` is the terminal sentinel: no further candidates exist. It is
/// an ordinary value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    Value(T),
    Exhausted,
}

impl<T> Outcome<T> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Outcome::Exhausted)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Exhausted => None,
        }
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(v: T) -> Self {
        Outcome::Value(v)
    }
}
