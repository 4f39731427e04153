use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a sticker rolled onto a playing card that changes its chip/mult/economy behavior
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Enhancement {
    None = 0,
    Bonus = 1,
    Mult = 2,
    Wild = 3,
    Glass = 4,
    Steel = 5,
    Stone = 6,
    Gold = 7,
    Lucky = 8,
}

impl Enhancement {
    pub const fn all() -> &'static [Self] {
        use Enhancement::*;
        &[None, Bonus, Mult, Wild, Glass, Steel, Stone, Gold, Lucky]
    }
}

impl From<u8> for Enhancement {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("enhancement ordinal in range")
    }
}

impl From<Enhancement> for u8 {
    fn from(e: Enhancement) -> u8 {
        e as u8
    }
}

impl Display for Enhancement {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Enhancement::None => "None",
                Enhancement::Bonus => "Bonus",
                Enhancement::Mult => "Mult",
                Enhancement::Wild => "Wild",
                Enhancement::Glass => "Glass",
                Enhancement::Steel => "Steel",
                Enhancement::Stone => "Stone",
                Enhancement::Gold => "Gold",
                Enhancement::Lucky => "Lucky",
            }
        )
    }
}

impl GameEnum for Enhancement {
    fn all() -> &'static [Self] {
        Enhancement::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}
