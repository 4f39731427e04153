mod boss;
mod card;
mod erratic;
mod event;
mod joker;
mod logic;
mod playing_card;
mod tag;
mod voucher;

pub use boss::BossEvaluator;
pub use card::{CardDomain, CardEvaluator};
pub use erratic::{ErraticEvaluator, RankTarget, SuitTarget};
pub use event::EventEvaluator;
pub use joker::{JokerEvaluator, JokerSource, SoulJokerEditionOnlyEvaluator};
pub use logic::{AndEvaluator, OrEvaluator};
pub use playing_card::PlayingCardEvaluator;
pub use tag::TagEvaluator;
pub use voucher::VoucherEvaluator;
