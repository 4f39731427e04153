use super::GameEnum;
use std::fmt::{Display, Formatter};

/// difficulty modifier selected for a run
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Stake {
    White = 0,
    Red = 1,
    Green = 2,
    Black = 3,
    Blue = 4,
    Purple = 5,
    Orange = 6,
    Gold = 7,
}

impl Stake {
    pub const fn all() -> &'static [Self] {
        use Stake::*;
        &[White, Red, Green, Black, Blue, Purple, Orange, Gold]
    }
}

impl From<u8> for Stake {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("stake ordinal in range")
    }
}

impl From<Stake> for u8 {
    fn from(s: Stake) -> u8 {
        s as u8
    }
}

impl Display for Stake {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Stake::White => "White",
                Stake::Red => "Red",
                Stake::Green => "Green",
                Stake::Black => "Black",
                Stake::Blue => "Blue",
                Stake::Purple => "Purple",
                Stake::Orange => "Orange",
                Stake::Gold => "Gold",
            }
        )
    }
}

impl GameEnum for Stake {
    fn all() -> &'static [Self] {
        Stake::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}
