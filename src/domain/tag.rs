use super::GameEnum;
use std::fmt::{Display, Formatter};

/// a small/big-blind reward tag; two are drawn per ante
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    Uncommon = 0,
    Rare = 1,
    Negative = 2,
    Foil = 3,
    Holographic = 4,
    Polychrome = 5,
    Investment = 6,
    Voucher = 7,
    Boss = 8,
    Standard = 9,
    Charm = 10,
    Meteor = 11,
    Buffoon = 12,
    Handy = 13,
    Garbage = 14,
    Ethereal = 15,
    Coupon = 16,
    Double = 17,
    Juggle = 18,
    D6 = 19,
    TopUp = 20,
    Speed = 21,
    Orbital = 22,
    Economy = 23,
}

impl Tag {
    pub const fn all() -> &'static [Self] {
        use Tag::*;
        &[
            Uncommon, Rare, Negative, Foil, Holographic, Polychrome, Investment, Voucher, Boss,
            Standard, Charm, Meteor, Buffoon, Handy, Garbage, Ethereal, Coupon, Double, Juggle,
            D6, TopUp, Speed, Orbital, Economy,
        ]
    }
}

impl From<u8> for Tag {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("tag ordinal in range")
    }
}

impl From<Tag> for u8 {
    fn from(t: Tag) -> u8 {
        t as u8
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Tag::Uncommon => "Uncommon",
                Tag::Rare => "Rare",
                Tag::Negative => "Negative",
                Tag::Foil => "Foil",
                Tag::Holographic => "Holographic",
                Tag::Polychrome => "Polychrome",
                Tag::Investment => "Investment",
                Tag::Voucher => "Voucher",
                Tag::Boss => "Boss",
                Tag::Standard => "Standard",
                Tag::Charm => "Charm",
                Tag::Meteor => "Meteor",
                Tag::Buffoon => "Buffoon",
                Tag::Handy => "Handy",
                Tag::Garbage => "Garbage",
                Tag::Ethereal => "Ethereal",
                Tag::Coupon => "Coupon",
                Tag::Double => "Double",
                Tag::Juggle => "Juggle",
                Tag::D6 => "D6",
                Tag::TopUp => "TopUp",
                Tag::Speed => "Speed",
                Tag::Orbital => "Orbital",
                Tag::Economy => "Economy",
            }
        )
    }
}

impl GameEnum for Tag {
    fn all() -> &'static [Self] {
        Tag::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}
