use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a planet card sampled into a pack slot, leveling up a poker hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Planet {
    Mercury = 0,
    Venus = 1,
    Earth = 2,
    Mars = 3,
    Jupiter = 4,
    Saturn = 5,
    Uranus = 6,
    Neptune = 7,
    Pluto = 8,
    PlanetX = 9,
    Ceres = 10,
    Eris = 11,
}

impl Planet {
    pub const fn all() -> &'static [Self] {
        use Planet::*;
        &[
            Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto, PlanetX, Ceres,
            Eris,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
            Planet::PlanetX => "Planet X",
            Planet::Ceres => "Ceres",
            Planet::Eris => "Eris",
        }
    }
}

impl From<u8> for Planet {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("planet ordinal in range")
    }
}

impl From<Planet> for u8 {
    fn from(p: Planet) -> u8 {
        p as u8
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl GameEnum for Planet {
    fn all() -> &'static [Self] {
        Planet::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.name().eq_ignore_ascii_case(name))
    }
}
