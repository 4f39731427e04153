use super::GameEnum;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const fn all() -> &'static [Self] {
        use Suit::*;
        &[Clubs, Diamonds, Hearts, Spades]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("suit ordinal in range")
    }
}

impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Clubs => "Clubs",
                Suit::Diamonds => "Diamonds",
                Suit::Hearts => "Hearts",
                Suit::Spades => "Spades",
            }
        )
    }
}

impl GameEnum for Suit {
    fn all() -> &'static [Self] {
        Suit::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}
