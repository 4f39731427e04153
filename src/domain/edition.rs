use super::GameEnum;
use std::fmt::{Display, Formatter};

/// cosmetic/mechanical modifier rolled onto a sampled item
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Edition {
    None = 0,
    Foil = 1,
    Holo = 2,
    Polychrome = 3,
    Negative = 4,
}

impl Edition {
    pub const fn all() -> &'static [Self] {
        use Edition::*;
        &[None, Foil, Holo, Polychrome, Negative]
    }
}

impl From<u8> for Edition {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("edition ordinal in range")
    }
}

impl From<Edition> for u8 {
    fn from(e: Edition) -> u8 {
        e as u8
    }
}

impl Display for Edition {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Edition::None => "None",
                Edition::Foil => "Foil",
                Edition::Holo => "Holo",
                Edition::Polychrome => "Polychrome",
                Edition::Negative => "Negative",
            }
        )
    }
}

impl GameEnum for Edition {
    fn all() -> &'static [Self] {
        Edition::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}
