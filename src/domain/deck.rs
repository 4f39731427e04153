use super::GameEnum;
use std::fmt::{Display, Formatter};

/// starting-deck variant selected for a run; only [`Deck::Erratic`] changes
/// sampling control flow (it replaces the standard 52-card deck with 52
/// independent rank/suit draws), but every variant's ordinal is load-bearing
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Deck {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Green = 3,
    Black = 4,
    Magic = 5,
    Nebula = 6,
    Ghost = 7,
    Abandoned = 8,
    Checkered = 9,
    Zodiac = 10,
    Painted = 11,
    Anaglyph = 12,
    Plasma = 13,
    Erratic = 14,
}

impl Deck {
    pub const fn all() -> &'static [Self] {
        use Deck::*;
        &[
            Red, Blue, Yellow, Green, Black, Magic, Nebula, Ghost, Abandoned, Checkered, Zodiac,
            Painted, Anaglyph, Plasma, Erratic,
        ]
    }

    pub fn is_erratic(&self) -> bool {
        matches!(self, Deck::Erratic)
    }
}

impl From<u8> for Deck {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("deck ordinal in range")
    }
}

impl From<Deck> for u8 {
    fn from(d: Deck) -> u8 {
        d as u8
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Deck::Red => "Red",
                Deck::Blue => "Blue",
                Deck::Yellow => "Yellow",
                Deck::Green => "Green",
                Deck::Black => "Black",
                Deck::Magic => "Magic",
                Deck::Nebula => "Nebula",
                Deck::Ghost => "Ghost",
                Deck::Abandoned => "Abandoned",
                Deck::Checkered => "Checkered",
                Deck::Zodiac => "Zodiac",
                Deck::Painted => "Painted",
                Deck::Anaglyph => "Anaglyph",
                Deck::Plasma => "Plasma",
                Deck::Erratic => "Erratic",
            }
        )
    }
}

impl GameEnum for Deck {
    fn all() -> &'static [Self] {
        Deck::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}
