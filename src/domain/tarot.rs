use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a tarot card sampled into a pack slot
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Tarot {
    TheFool = 0,
    TheMagician = 1,
    TheHighPriestess = 2,
    TheEmpress = 3,
    TheEmperor = 4,
    TheHierophant = 5,
    TheLovers = 6,
    TheChariot = 7,
    Justice = 8,
    TheHermit = 9,
    TheWheelOfFortune = 10,
    Strength = 11,
    TheHangedMan = 12,
    Death = 13,
    Temperance = 14,
    TheDevil = 15,
    TheTower = 16,
    TheStar = 17,
    TheMoon = 18,
    TheSun = 19,
    Judgement = 20,
    TheWorld = 21,
}

impl Tarot {
    pub const fn all() -> &'static [Self] {
        use Tarot::*;
        &[
            TheFool, TheMagician, TheHighPriestess, TheEmpress, TheEmperor, TheHierophant,
            TheLovers, TheChariot, Justice, TheHermit, TheWheelOfFortune, Strength, TheHangedMan,
            Death, Temperance, TheDevil, TheTower, TheStar, TheMoon, TheSun, Judgement, TheWorld,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Tarot::TheFool => "The Fool",
            Tarot::TheMagician => "The Magician",
            Tarot::TheHighPriestess => "The High Priestess",
            Tarot::TheEmpress => "The Empress",
            Tarot::TheEmperor => "The Emperor",
            Tarot::TheHierophant => "The Hierophant",
            Tarot::TheLovers => "The Lovers",
            Tarot::TheChariot => "The Chariot",
            Tarot::Justice => "Justice",
            Tarot::TheHermit => "The Hermit",
            Tarot::TheWheelOfFortune => "The Wheel of Fortune",
            Tarot::Strength => "Strength",
            Tarot::TheHangedMan => "The Hanged Man",
            Tarot::Death => "Death",
            Tarot::Temperance => "Temperance",
            Tarot::TheDevil => "The Devil",
            Tarot::TheTower => "The Tower",
            Tarot::TheStar => "The Star",
            Tarot::TheMoon => "The Moon",
            Tarot::TheSun => "The Sun",
            Tarot::Judgement => "Judgement",
            Tarot::TheWorld => "The World",
        }
    }
}

impl From<u8> for Tarot {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("tarot ordinal in range")
    }
}

impl From<Tarot> for u8 {
    fn from(t: Tarot) -> u8 {
        t as u8
    }
}

impl Display for Tarot {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl GameEnum for Tarot {
    fn all() -> &'static [Self] {
        Tarot::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.name().eq_ignore_ascii_case(name))
    }
}
