use std::fmt;
use std::ops::RangeInclusive;

use ambit_search::{SearchError, Session};

const FLOORS: RangeInclusive<u32> = 1..=5;

/// Floor each of the five residents lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floors {
    pub baker: u32,
    pub cooper: u32,
    pub fletcher: u32,
    pub miller: u32,
    pub smith: u32,
}

impl fmt::Display for Floors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "baker {}, cooper {}, fletcher {}, miller {}, smith {}",
            self.baker, self.cooper, self.fletcher, self.miller, self.smith
        )
    }
}

fn distinct(floors: &[u32]) -> bool {
    floors
        .iter()
        .enumerate()
        .all(|(i, floor)| !floors[..i].contains(floor))
}

/// Baker, Cooper, Fletcher, Miller and Smith live on different floors of a
/// five floor apartment house. Baker does not live on the top floor. Cooper
/// does not live on the bottom floor. Fletcher lives on neither the top nor
/// the bottom floor. Miller lives on a higher floor than Cooper. Smith does
/// not live adjacent to Fletcher, and Fletcher does not live adjacent to
/// Cooper.
///
/// Residents are chosen most constrained first so that each restriction
/// prunes as early as possible.
pub fn solve() -> Result<Vec<Floors>, SearchError> {
    let mut session: Session<Floors> = Session::new();
    let solutions = session.all(|b| {
        let fletcher = b.choose(FLOORS)?;
        b.guard(fletcher != 1 && fletcher != 5)?;

        let cooper = b.choose(FLOORS)?;
        b.guard(cooper != 1 && distinct(&[fletcher, cooper]))?;
        b.guard(fletcher.abs_diff(cooper) != 1)?;

        let miller = b.choose(FLOORS)?;
        b.guard(miller > cooper && distinct(&[fletcher, cooper, miller]))?;

        let smith = b.choose(FLOORS)?;
        b.guard(distinct(&[fletcher, cooper, miller, smith]))?;
        b.guard(smith.abs_diff(fletcher) != 1)?;

        let baker = b.choose(FLOORS)?;
        b.guard(baker != 5 && distinct(&[fletcher, cooper, miller, smith, baker]))?;

        Ok(Floors {
            baker,
            cooper,
            fletcher,
            miller,
            smith,
        })
    })?;

    log::debug!("dwelling: {} solutions", solutions.len());
    Ok(solutions)
}
