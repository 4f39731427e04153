use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a spectral card sampled into a pack slot, usually destructive/high-variance
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Spectral {
    Familiar = 0,
    Grim = 1,
    Incantation = 2,
    Talisman = 3,
    Aura = 4,
    Wraith = 5,
    Sigil = 6,
    Ouija = 7,
    Ectoplasm = 8,
    Immolate = 9,
    Ankh = 10,
    DejaVu = 11,
    Hex = 12,
    Trance = 13,
    Medium = 14,
    Cryptid = 15,
    TheSoul = 16,
    BlackHole = 17,
}

impl Spectral {
    pub const fn all() -> &'static [Self] {
        use Spectral::*;
        &[
            Familiar, Grim, Incantation, Talisman, Aura, Wraith, Sigil, Ouija, Ectoplasm,
            Immolate, Ankh, DejaVu, Hex, Trance, Medium, Cryptid, TheSoul, BlackHole,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Spectral::Familiar => "Familiar",
            Spectral::Grim => "Grim",
            Spectral::Incantation => "Incantation",
            Spectral::Talisman => "Talisman",
            Spectral::Aura => "Aura",
            Spectral::Wraith => "Wraith",
            Spectral::Sigil => "Sigil",
            Spectral::Ouija => "Ouija",
            Spectral::Ectoplasm => "Ectoplasm",
            Spectral::Immolate => "Immolate",
            Spectral::Ankh => "Ankh",
            Spectral::DejaVu => "Deja Vu",
            Spectral::Hex => "Hex",
            Spectral::Trance => "Trance",
            Spectral::Medium => "Medium",
            Spectral::Cryptid => "Cryptid",
            Spectral::TheSoul => "The Soul",
            Spectral::BlackHole => "Black Hole",
        }
    }
}

impl From<u8> for Spectral {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("spectral ordinal in range")
    }
}

impl From<Spectral> for u8 {
    fn from(s: Spectral) -> u8 {
        s as u8
    }
}

impl Display for Spectral {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl GameEnum for Spectral {
    fn all() -> &'static [Self] {
        Spectral::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.name().eq_ignore_ascii_case(name))
    }
}
