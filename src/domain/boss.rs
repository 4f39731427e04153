use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a boss blind sampled once per ante; the sampler enforces a no-repeat
/// window across recent antes, so history matters beyond this enum itself
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Boss {
    TheHook = 0,
    TheOx = 1,
    TheHouse = 2,
    TheWall = 3,
    TheWheel = 4,
    TheArm = 5,
    TheClub = 6,
    TheFish = 7,
    ThePsychic = 8,
    TheGoad = 9,
    TheWater = 10,
    TheWindow = 11,
    TheManacle = 12,
    TheEye = 13,
    TheMouth = 14,
    ThePlant = 15,
    TheSerpent = 16,
    ThePillar = 17,
    TheNeedle = 18,
    TheHead = 19,
    AmberAcorn = 20,
    VerdantLeaf = 21,
    VioletVessel = 22,
    CrimsonHeart = 23,
    CeruleanBell = 24,
    TheTooth = 25,
    TheFlint = 26,
    TheMark = 27,
}

impl Boss {
    pub const fn all() -> &'static [Self] {
        use Boss::*;
        &[
            TheHook, TheOx, TheHouse, TheWall, TheWheel, TheArm, TheClub, TheFish, ThePsychic,
            TheGoad, TheWater, TheWindow, TheManacle, TheEye, TheMouth, ThePlant, TheSerpent,
            ThePillar, TheNeedle, TheHead, AmberAcorn, VerdantLeaf, VioletVessel, CrimsonHeart,
            CeruleanBell, TheTooth, TheFlint, TheMark,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Boss::TheHook => "The Hook",
            Boss::TheOx => "The Ox",
            Boss::TheHouse => "The House",
            Boss::TheWall => "The Wall",
            Boss::TheWheel => "The Wheel",
            Boss::TheArm => "The Arm",
            Boss::TheClub => "The Club",
            Boss::TheFish => "The Fish",
            Boss::ThePsychic => "The Psychic",
            Boss::TheGoad => "The Goad",
            Boss::TheWater => "The Water",
            Boss::TheWindow => "The Window",
            Boss::TheManacle => "The Manacle",
            Boss::TheEye => "The Eye",
            Boss::TheMouth => "The Mouth",
            Boss::ThePlant => "The Plant",
            Boss::TheSerpent => "The Serpent",
            Boss::ThePillar => "The Pillar",
            Boss::TheNeedle => "The Needle",
            Boss::TheHead => "The Head",
            Boss::AmberAcorn => "Amber Acorn",
            Boss::VerdantLeaf => "Verdant Leaf",
            Boss::VioletVessel => "Violet Vessel",
            Boss::CrimsonHeart => "Crimson Heart",
            Boss::CeruleanBell => "Cerulean Bell",
            Boss::TheTooth => "The Tooth",
            Boss::TheFlint => "The Flint",
            Boss::TheMark => "The Mark",
        }
    }
}

impl From<u8> for Boss {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("boss ordinal in range")
    }
}

impl From<Boss> for u8 {
    fn from(b: Boss) -> u8 {
        b as u8
    }
}

impl Display for Boss {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl GameEnum for Boss {
    fn all() -> &'static [Self] {
        Boss::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.name().eq_ignore_ascii_case(name))
    }
}
