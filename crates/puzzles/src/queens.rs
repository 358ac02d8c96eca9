use ambit_search::{Branch, Fail, SearchError, Session};

/// Column of the queen on each row
pub type Placement = Vec<usize>;

fn safe(placed: &[usize], col: usize) -> bool {
    let row = placed.len();
    placed
        .iter()
        .enumerate()
        .all(|(r, &c)| c != col && row - r != col.abs_diff(c))
}

fn place(b: &mut Branch, n: usize) -> Result<Placement, Fail> {
    let mut placed = Vec::with_capacity(n);
    for _ in 0..n {
        let col = b.choose(0..n)?;
        b.guard(safe(&placed, col))?;
        placed.push(col);
    }

    Ok(placed)
}

/// Every placement of `n` queens on an `n` by `n` board where no two queens
/// attack each other
pub fn solve(n: usize) -> Result<Vec<Placement>, SearchError> {
    let mut session: Session<Placement> = Session::new();
    session.all(move |b| place(b, n))
}

/// Number of solutions, without keeping them around
pub fn count(n: usize) -> Result<usize, SearchError> {
    let mut session: Session<Placement> = Session::new();
    let mut count = 0;
    for solution in session.solutions(move |b| place(b, n))? {
        solution?;
        count += 1;
    }

    log::debug!("{n} queens: {count} solutions");
    Ok(count)
}

/// First solution found, leaving the rest unexplored
pub fn first(n: usize) -> Result<Option<Placement>, SearchError> {
    let mut session: Session<Placement> = Session::new();
    let outcome = session.evaluate(move |b| place(b, n))?;
    Ok(outcome.into_option())
}
