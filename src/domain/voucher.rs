use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a voucher sampled once per ante and, once bought, unlocking its upgrade pair
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Voucher {
    Overstock = 0,
    OverstockPlus = 1,
    ClearanceSale = 2,
    Liquidation = 3,
    Hone = 4,
    GlowUp = 5,
    RerollSurplus = 6,
    RerollGlut = 7,
    CrystalBall = 8,
    OmenGlobe = 9,
    Telescope = 10,
    Observatory = 11,
    Grabber = 12,
    NachoTong = 13,
    Wasteful = 14,
    Recyclomancy = 15,
    TarotMerchant = 16,
    TarotTycoon = 17,
    PlanetMerchant = 18,
    PlanetTycoon = 19,
    SeedMoney = 20,
    MoneyTree = 21,
    Blank = 22,
    Antimatter = 23,
    MagicTrick = 24,
    Illusion = 25,
    Hieroglyph = 26,
    Petroglyph = 27,
    DirectorsCut = 28,
    Retcon = 29,
    PaintBrush = 30,
    Palette = 31,
}

impl Voucher {
    pub const fn all() -> &'static [Self] {
        use Voucher::*;
        &[
            Overstock, OverstockPlus, ClearanceSale, Liquidation, Hone, GlowUp, RerollSurplus,
            RerollGlut, CrystalBall, OmenGlobe, Telescope, Observatory, Grabber, NachoTong,
            Wasteful, Recyclomancy, TarotMerchant, TarotTycoon, PlanetMerchant, PlanetTycoon,
            SeedMoney, MoneyTree, Blank, Antimatter, MagicTrick, Illusion, Hieroglyph, Petroglyph,
            DirectorsCut, Retcon, PaintBrush, Palette,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Voucher::Overstock => "Overstock",
            Voucher::OverstockPlus => "Overstock Plus",
            Voucher::ClearanceSale => "Clearance Sale",
            Voucher::Liquidation => "Liquidation",
            Voucher::Hone => "Hone",
            Voucher::GlowUp => "Glow Up",
            Voucher::RerollSurplus => "Reroll Surplus",
            Voucher::RerollGlut => "Reroll Glut",
            Voucher::CrystalBall => "Crystal Ball",
            Voucher::OmenGlobe => "Omen Globe",
            Voucher::Telescope => "Telescope",
            Voucher::Observatory => "Observatory",
            Voucher::Grabber => "Grabber",
            Voucher::NachoTong => "Nacho Tong",
            Voucher::Wasteful => "Wasteful",
            Voucher::Recyclomancy => "Recyclomancy",
            Voucher::TarotMerchant => "Tarot Merchant",
            Voucher::TarotTycoon => "Tarot Tycoon",
            Voucher::PlanetMerchant => "Planet Merchant",
            Voucher::PlanetTycoon => "Planet Tycoon",
            Voucher::SeedMoney => "Seed Money",
            Voucher::MoneyTree => "Money Tree",
            Voucher::Blank => "Blank",
            Voucher::Antimatter => "Antimatter",
            Voucher::MagicTrick => "Magic Trick",
            Voucher::Illusion => "Illusion",
            Voucher::Hieroglyph => "Hieroglyph",
            Voucher::Petroglyph => "Petroglyph",
            Voucher::DirectorsCut => "Director's Cut",
            Voucher::Retcon => "Retcon",
            Voucher::PaintBrush => "Paint Brush",
            Voucher::Palette => "Palette",
        }
    }
}

impl From<u8> for Voucher {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("voucher ordinal in range")
    }
}

impl From<Voucher> for u8 {
    fn from(v: Voucher) -> u8 {
        v as u8
    }
}

impl Display for Voucher {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl GameEnum for Voucher {
    fn all() -> &'static [Self] {
        Voucher::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.name().eq_ignore_ascii_case(name))
    }
}
