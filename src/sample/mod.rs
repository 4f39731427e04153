//! Per-domain sampling kernels. Each kernel maps one or more stream draws to
//! a domain value, reproducing one generative procedure of the simulated
//! game exactly: the stream keys it draws from, and the order it draws them
//! in, are as much a part of the contract as the values they return.

mod boss;
mod card;
mod context;
mod edition;
mod erratic;
mod event;
mod joker;
mod soul_joker;
mod tag;
mod voucher;

pub use boss::sample_boss;
pub use card::{sample_planet, sample_playing_card, sample_spectral, sample_tarot, PlayingCard};
pub use context::SampleContext;
pub use edition::roll_edition;
pub use erratic::{sample_erratic_deck, ErraticDeck};
pub use event::{sample_event, Event};
pub use joker::sample_joker;
pub use soul_joker::sample_soul_joker;
pub use tag::sample_tags;
pub use voucher::sample_voucher;
