use ambit_search::{SearchError, Session};

pub type Triple = (u32, u32, u32);

fn pythagorean(&(a, b, c): &Triple) -> bool {
    let square = |side: u32| u128::from(side).pow(2);
    square(a) + square(b) == square(c)
}

/// Try every side in `1..limit` for each of the three sides and keep the
/// sorted pythagorean ones.
pub fn naive(limit: u32) -> Result<Vec<Triple>, SearchError> {
    let mut session: Session<Triple> = Session::new();
    session.all_query(
        |&(a, b, c): &Triple| a < b && b < c,
        move |br| {
            let a = br.choose(1..limit)?;
            let b = br.choose(1..limit)?;
            let c = br.choose(1..limit)?;
            br.assert(pythagorean, (a, b, c))
        },
    )
}

/// Choose the hypotenuse first and bound the other sides by it, so that no
/// redundant combinations are formed. Triples come out ordered by hypotenuse.
pub fn bounded(limit: u32) -> Result<Vec<Triple>, SearchError> {
    let mut session: Session<Triple> = Session::new();
    session.all(move |br| {
        let z = br.choose(1..limit)?;
        let x = br.choose(1..=z)?;
        let y = br.choose(x..=z)?;
        br.guard(pythagorean(&(x, y, z)))?;
        Ok((x, y, z))
    })
}
