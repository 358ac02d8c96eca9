mod branch;
mod deferred;
mod error;
mod outcome;
mod session;
mod stack;

pub use branch::Branch;
pub use deferred::Deferred;
pub use error::{Divergence, Fail, SearchError};
pub use outcome::Outcome;
pub use session::{Session, Solutions, State};
