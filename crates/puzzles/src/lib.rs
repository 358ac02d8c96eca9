pub mod dwelling;
pub mod queens;
pub mod sums;
pub mod triples;

use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Puzzle {
    Sums,
    Triples,
    Dwelling,
    Queens,
}

impl Puzzle {
    pub fn description(&self) -> &'static str {
        match self {
            Puzzle::Sums => "sums drawn from two lists of choices, all and even only",
            Puzzle::Triples => "pythagorean triples with sides below a limit",
            Puzzle::Dwelling => "who lives on which floor of a five floor building",
            Puzzle::Queens => "place N queens on an N by N board",
        }
    }
}
