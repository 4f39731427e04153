use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a colored seal rolled onto a playing card
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Seal {
    None = 0,
    Gold = 1,
    Red = 2,
    Blue = 3,
    Purple = 4,
}

impl Seal {
    pub const fn all() -> &'static [Self] {
        use Seal::*;
        &[None, Gold, Red, Blue, Purple]
    }
}

impl From<u8> for Seal {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("seal ordinal in range")
    }
}

impl From<Seal> for u8 {
    fn from(s: Seal) -> u8 {
        s as u8
    }
}

impl Display for Seal {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Seal::None => "None",
                Seal::Gold => "Gold",
                Seal::Red => "Red",
                Seal::Blue => "Blue",
                Seal::Purple => "Purple",
            }
        )
    }
}

impl GameEnum for Seal {
    fn all() -> &'static [Self] {
        Seal::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}
