use ambit_search::{SearchError, Session};

pub const LEFT: [u32; 3] = [3, 10, 6];
pub const RIGHT: [u32; 2] = [100, 200];

pub const EVEN_LEFT: [u32; 2] = [4, 5];
pub const EVEN_RIGHT: [u32; 2] = [11, 14];

fn is_even(v: &u32) -> bool {
    v % 2 == 0
}

/// `a + b` for every `a` in `left` and `b` in `right`
pub fn pairwise(left: &[u32], right: &[u32]) -> Result<Vec<u32>, SearchError> {
    let mut session: Session<u32> = Session::new();
    session.all(|b| {
        let x = b.choose(left.iter().copied())?;
        let y = b.choose(right.iter().copied())?;
        Ok(x + y)
    })
}

/// The even sums of [`pairwise`], in the order they are found
pub fn pairwise_even(left: &[u32], right: &[u32]) -> Result<Vec<u32>, SearchError> {
    let mut session: Session<u32> = Session::new();
    session.all_query(is_even, |b| {
        let x = b.choose(left.iter().copied())?;
        let y = b.choose(right.iter().copied())?;
        Ok(x + y)
    })
}

pub fn cartesian() -> Result<Vec<u32>, SearchError> {
    pairwise(&LEFT, &RIGHT)
}

pub fn even() -> Result<Vec<u32>, SearchError> {
    pairwise_even(&EVEN_LEFT, &EVEN_RIGHT)
}
