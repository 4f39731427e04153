use super::GameEnum;
use std::fmt::{Display, Formatter};

/// which mid-run random event a clause is asking about. Unlike the other
/// domain enums this ordinal isn't part of the PRNG contract — each kind
/// draws from its own independently-keyed stream (`sample::sample_event`) —
/// it just gives the filter compiler a closed set to validate against
/// instead of an arbitrary string reaching the sampler.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum EventKind {
    LuckyMoney = 0,
    LuckyMult = 1,
    Misprint = 2,
    WheelOfFortune = 3,
    Cavendish = 4,
    GrosMichel = 5,
}

impl EventKind {
    pub const fn all() -> &'static [Self] {
        use EventKind::*;
        &[LuckyMoney, LuckyMult, Misprint, WheelOfFortune, Cavendish, GrosMichel]
    }
}

impl GameEnum for EventKind {
    fn all() -> &'static [Self] {
        EventKind::all()
    }

    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.to_string().eq_ignore_ascii_case(name))
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EventKind::LuckyMoney => "LuckyMoney",
                EventKind::LuckyMult => "LuckyMult",
                EventKind::Misprint => "Misprint",
                EventKind::WheelOfFortune => "WheelOfFortune",
                EventKind::Cavendish => "Cavendish",
                EventKind::GrosMichel => "GrosMichel",
            }
        )
    }
}
