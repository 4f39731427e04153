use super::GameEnum;
use std::fmt::{Display, Formatter};

/// Jokers number in the hundreds in the full game, far past what a hand-written
/// enum stays legible for, so they live behind a newtype index into a static
/// table instead — one `JokerDef` row per joker, looked up by ordinal. This
/// mirrors the indexed-abstraction idiom used elsewhere in this codebase for
/// large lookup spaces, rather than inventing a new representation.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Legendary = 3,
}

impl Rarity {
    pub const fn all() -> &'static [Self] {
        use Rarity::*;
        &[Common, Uncommon, Rare, Legendary]
    }
}

impl From<u8> for Rarity {
    fn from(n: u8) -> Self {
        *Self::all().get(n as usize).expect("rarity ordinal in range")
    }
}

impl From<Rarity> for u8 {
    fn from(r: Rarity) -> u8 {
        r as u8
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rarity::Common => "Common",
                Rarity::Uncommon => "Uncommon",
                Rarity::Rare => "Rare",
                Rarity::Legendary => "Legendary",
            }
        )
    }
}

impl GameEnum for Rarity {
    fn all() -> &'static [Self] {
        Rarity::all()
    }
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.to_string().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JokerDef {
    pub name: &'static str,
    pub rarity: Rarity,
}

/// Ordinal in this table is part of the PRNG contract; append only, never reorder.
/// This is a representative roster, not the full in-game set — large enough to
/// exercise every rarity tier and every clause shape a filter document can express.
static JOKER_ROWS: &[JokerDef] = &[
    JokerDef { name: "Joker", rarity: Rarity::Common },
    JokerDef { name: "Greedy Joker", rarity: Rarity::Common },
    JokerDef { name: "Lusty Joker", rarity: Rarity::Common },
    JokerDef { name: "Wrathful Joker", rarity: Rarity::Common },
    JokerDef { name: "Gluttonous Joker", rarity: Rarity::Common },
    JokerDef { name: "Jolly Joker", rarity: Rarity::Common },
    JokerDef { name: "Zany Joker", rarity: Rarity::Common },
    JokerDef { name: "Crafty Joker", rarity: Rarity::Common },
    JokerDef { name: "Half Joker", rarity: Rarity::Common },
    JokerDef { name: "Banner", rarity: Rarity::Common },
    JokerDef { name: "Mystic Summit", rarity: Rarity::Common },
    JokerDef { name: "Misprint", rarity: Rarity::Common },
    JokerDef { name: "Raised Fist", rarity: Rarity::Common },
    JokerDef { name: "Scary Face", rarity: Rarity::Common },
    JokerDef { name: "Even Steven", rarity: Rarity::Common },
    JokerDef { name: "Abstract Joker", rarity: Rarity::Uncommon },
    JokerDef { name: "Chaos the Clown", rarity: Rarity::Uncommon },
    JokerDef { name: "Delayed Gratification", rarity: Rarity::Uncommon },
    JokerDef { name: "Hack", rarity: Rarity::Uncommon },
    JokerDef { name: "Pareidolia", rarity: Rarity::Uncommon },
    JokerDef { name: "Gros Michel", rarity: Rarity::Uncommon },
    JokerDef { name: "Ride the Bus", rarity: Rarity::Uncommon },
    JokerDef { name: "Space Joker", rarity: Rarity::Uncommon },
    JokerDef { name: "Burglar", rarity: Rarity::Uncommon },
    JokerDef { name: "Blackboard", rarity: Rarity::Uncommon },
    JokerDef { name: "DNA", rarity: Rarity::Uncommon },
    JokerDef { name: "Splash", rarity: Rarity::Uncommon },
    JokerDef { name: "Ancient Joker", rarity: Rarity::Rare },
    JokerDef { name: "Seltzer", rarity: Rarity::Rare },
    JokerDef { name: "Castle", rarity: Rarity::Rare },
    JokerDef { name: "Smiley Face", rarity: Rarity::Rare },
    JokerDef { name: "Campfire", rarity: Rarity::Rare },
    JokerDef { name: "Mr. Bones", rarity: Rarity::Rare },
    JokerDef { name: "Acrobat", rarity: Rarity::Rare },
    JokerDef { name: "Glass Joker", rarity: Rarity::Rare },
    JokerDef { name: "Showman", rarity: Rarity::Rare },
    JokerDef { name: "Blueprint", rarity: Rarity::Rare },
    JokerDef { name: "Canio", rarity: Rarity::Legendary },
    JokerDef { name: "Triboulet", rarity: Rarity::Legendary },
    JokerDef { name: "Yorick", rarity: Rarity::Legendary },
    JokerDef { name: "Chicot", rarity: Rarity::Legendary },
    JokerDef { name: "Perkeo", rarity: Rarity::Legendary },
];

/// built once, behind a `LazyLock`, the same lifetime the weighted pools
/// give their own static tables
pub static JOKERS: std::sync::LazyLock<Vec<JokerDef>> =
    std::sync::LazyLock::new(|| JOKER_ROWS.to_vec());

/// index into [`JOKERS`]; the sampler's rarity roll picks a tier, then a
/// weighted pool over that tier's slice picks the specific joker
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Joker(u16);

impl Joker {
    pub fn by_index(index: u16) -> Self {
        assert!((index as usize) < JOKERS.len(), "joker index out of range");
        Self(index)
    }

    pub fn by_name(name: &str) -> Option<Self> {
        JOKERS
            .iter()
            .position(|j| j.name.eq_ignore_ascii_case(name))
            .map(|i| Self(i as u16))
    }

    pub fn index(&self) -> u16 {
        self.0
    }

    pub fn def(&self) -> &'static JokerDef {
        &JOKERS[self.0 as usize]
    }

    pub fn rarity(&self) -> Rarity {
        self.def().rarity
    }

    pub fn of_rarity(rarity: Rarity) -> impl Iterator<Item = Joker> {
        JOKERS
            .iter()
            .enumerate()
            .filter(move |(_, j)| j.rarity == rarity)
            .map(|(i, _)| Joker(i as u16))
    }

    pub fn is_legendary(&self) -> bool {
        self.rarity() == Rarity::Legendary
    }
}

impl Display for Joker {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.def().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_is_rare() {
        let j = Joker::by_name("Blueprint").expect("Blueprint exists in the roster");
        assert_eq!(j.rarity(), Rarity::Rare);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Joker::by_name("blueprint"), Joker::by_name("Blueprint"));
    }

    #[test]
    fn every_rarity_is_represented() {
        for rarity in Rarity::all() {
            assert!(Joker::of_rarity(*rarity).next().is_some(), "{rarity} has no jokers");
        }
    }
}
