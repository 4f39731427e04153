use super::category::group;
use super::clauses::{
    AndEvaluator, BossEvaluator, CardDomain, CardEvaluator, ErraticEvaluator, EventEvaluator,
    JokerEvaluator, JokerSource, OrEvaluator, PlayingCardEvaluator, RankTarget,
    SoulJokerEditionOnlyEvaluator, SuitTarget, TagEvaluator, VoucherEvaluator,
};
use super::document::FilterDocument;
use super::error::FilterError;
use super::evaluate::ClauseEvaluator;
use super::normalize::{normalize_clause, Clause, ClauseKind};
use crate::domain::{Boss, Deck, EventKind, GameEnum, Joker, Planet, Rank, Spectral, Stake, Suit, Tarot};
use crate::sample::Event;

const DEFAULT_ANTES: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// An immutable, ordered list of compiled clause evaluators plus the static
/// column names a result tally reports against. Built once per filter
/// document; never mutated once constructed.
pub struct CompiledPipeline {
    pub must: Vec<Box<dyn ClauseEvaluator>>,
    pub must_not: Vec<Box<dyn ClauseEvaluator>>,
    pub should: Vec<(Box<dyn ClauseEvaluator>, i64)>,
    pub deck: Deck,
    pub stake: Stake,
    pub columns: Vec<String>,
}

pub fn compile(doc: &FilterDocument) -> Result<CompiledPipeline, FilterError> {
    let deck = doc
        .deck
        .as_deref()
        .map(|s| Deck::parse(s).ok_or_else(|| unknown("deck", "Deck", s)))
        .transpose()?
        .unwrap_or(Deck::Red);
    let stake = doc
        .stake
        .as_deref()
        .map(|s| Stake::parse(s).ok_or_else(|| unknown("stake", "Stake", s)))
        .transpose()?
        .unwrap_or(Stake::White);

    let default_antes: Vec<u8> = doc
        .defaults
        .antes
        .as_ref()
        .map(|antes| antes.iter().map(|&a| a as u8).collect())
        .unwrap_or_else(|| DEFAULT_ANTES.to_vec());
    let default_score = doc.defaults.score.unwrap_or(1);

    let must = normalize_all(&doc.must, "must", false, &default_antes, default_score)?;
    let must_not = normalize_all(&doc.must_not, "mustNot", false, &default_antes, default_score)?;
    let should = normalize_all(&doc.should, "should", true, &default_antes, default_score)?;

    let mut columns = vec!["seed".to_string(), "score".to_string()];
    for clause in &should {
        columns.push(clause_column_name(clause));
    }

    let must = build_group(must)?;
    let must_not = build_group(must_not)?;
    let should = should
        .into_iter()
        .map(|clause| {
            let score = clause.score;
            build_one(clause).map(|evaluator| (evaluator, score))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledPipeline { must, must_not, should, deck, stake, columns })
}

fn clause_column_name(clause: &Clause) -> String {
    format!("{:?}:{}", clause.kind, clause.values.join("|"))
}

fn normalize_all(
    raw: &[serde_json::Value],
    label: &str,
    is_should: bool,
    default_antes: &[u8],
    default_score: i64,
) -> Result<Vec<Clause>, FilterError> {
    raw.iter()
        .enumerate()
        .map(|(i, clause)| normalize_clause(clause, &format!("{label}[{i}]"), is_should, default_antes, default_score))
        .collect()
}

fn unknown(path: &str, domain: &'static str, value: &str) -> FilterError {
    FilterError::UnknownValue { path: path.to_string(), domain, value: value.to_string() }
}

/// Builds a full category group: erratic fusion happens here, before the
/// remaining categories are built one evaluator per clause.
fn build_group(clauses: Vec<Clause>) -> Result<Vec<Box<dyn ClauseEvaluator>>, FilterError> {
    let mut grouped = group(clauses);
    let mut evaluators: Vec<Box<dyn ClauseEvaluator>> = Vec::new();

    if let Some((ranks, suits)) = grouped.erratic_fusion_candidates() {
        let rank_targets = ranks
            .iter()
            .map(|c| {
                let rank = Rank::parse(&c.values[0]).ok_or_else(|| unknown("erraticRank", "Rank", &c.values[0]))?;
                Ok(RankTarget { rank, min: c.min })
            })
            .collect::<Result<Vec<_>, FilterError>>()?;
        let suit_targets = suits
            .iter()
            .map(|c| {
                let suit = Suit::parse(&c.values[0]).ok_or_else(|| unknown("erraticSuit", "Suit", &c.values[0]))?;
                Ok(SuitTarget { suit, min: c.min })
            })
            .collect::<Result<Vec<_>, FilterError>>()?;
        evaluators.push(Box::new(ErraticEvaluator {
            name: "ErraticRankAndSuit".to_string(),
            ranks: rank_targets,
            suits: suit_targets,
        }));
    }

    for kind in [
        ClauseKind::SoulJokerEditionOnly,
        ClauseKind::Voucher,
        ClauseKind::Joker,
        ClauseKind::SoulJoker,
        ClauseKind::TarotCard,
        ClauseKind::PlanetCard,
        ClauseKind::SpectralCard,
        ClauseKind::PlayingCard,
        ClauseKind::Tag,
        ClauseKind::Boss,
        ClauseKind::Event,
        ClauseKind::And,
        ClauseKind::Or,
    ] {
        for clause in grouped.take(kind) {
            evaluators.push(build_one(clause)?);
        }
    }

    Ok(evaluators)
}

fn build_one(clause: Clause) -> Result<Box<dyn ClauseEvaluator>, FilterError> {
    let name = clause_column_name(&clause);
    match clause.kind {
        ClauseKind::Voucher => {
            let wanted = parse_values::<_, _>(&clause.values, "Voucher", crate::domain::Voucher::parse)?;
            Ok(Box::new(VoucherEvaluator { name, wanted, antes: clause.antes, min: clause.min }))
        }
        ClauseKind::Joker | ClauseKind::SoulJoker => {
            let any = clause.values.len() == 1 && clause.values[0].eq_ignore_ascii_case("any");
            let wanted = if any {
                Vec::new()
            } else {
                clause
                    .values
                    .iter()
                    .map(|v| Joker::by_name(v).ok_or_else(|| unknown("joker", "Joker", v)))
                    .collect::<Result<Vec<_>, _>>()?
            };
            let source = if matches!(clause.kind, ClauseKind::SoulJoker) { JokerSource::Soul } else { JokerSource::Shop };
            Ok(Box::new(JokerEvaluator {
                name,
                source,
                wanted,
                any,
                edition: clause.edition,
                antes: clause.antes,
                shop_slots: clause.shop_slots,
                pack_slots: clause.pack_slots,
                min: clause.min,
            }))
        }
        ClauseKind::SoulJokerEditionOnly => {
            let edition = clause.edition.ok_or_else(|| FilterError::Malformed {
                path: name.clone(),
                message: "SoulJokerEditionOnly requires an edition".to_string(),
            })?;
            Ok(Box::new(SoulJokerEditionOnlyEvaluator { name, edition, antes: clause.antes, min: clause.min }))
        }
        ClauseKind::TarotCard => {
            let any = clause.values.len() == 1 && clause.values[0].eq_ignore_ascii_case("any");
            let wanted = if any { Vec::new() } else { parse_values(&clause.values, "Tarot", Tarot::parse)? };
            Ok(Box::new(CardEvaluator {
                name,
                domain: CardDomain::Tarot,
                wanted_tarot: wanted,
                wanted_planet: Vec::new(),
                wanted_spectral: Vec::new(),
                any,
                edition: clause.edition,
                antes: clause.antes,
                pack_slots: clause.pack_slots,
                min: clause.min,
            }))
        }
        ClauseKind::PlanetCard => {
            let any = clause.values.len() == 1 && clause.values[0].eq_ignore_ascii_case("any");
            let wanted = if any { Vec::new() } else { parse_values(&clause.values, "Planet", Planet::parse)? };
            Ok(Box::new(CardEvaluator {
                name,
                domain: CardDomain::Planet,
                wanted_tarot: Vec::new(),
                wanted_planet: wanted,
                wanted_spectral: Vec::new(),
                any,
                edition: clause.edition,
                antes: clause.antes,
                pack_slots: clause.pack_slots,
                min: clause.min,
            }))
        }
        ClauseKind::SpectralCard => {
            let any = clause.values.len() == 1 && clause.values[0].eq_ignore_ascii_case("any");
            let wanted = if any { Vec::new() } else { parse_values(&clause.values, "Spectral", Spectral::parse)? };
            Ok(Box::new(CardEvaluator {
                name,
                domain: CardDomain::Spectral,
                wanted_tarot: Vec::new(),
                wanted_planet: Vec::new(),
                wanted_spectral: wanted,
                any,
                edition: clause.edition,
                antes: clause.antes,
                pack_slots: clause.pack_slots,
                min: clause.min,
            }))
        }
        ClauseKind::PlayingCard => {
            let wanted_rank = clause
                .card_rank
                .as_deref()
                .map(|v| Rank::parse(v).ok_or_else(|| unknown("rank", "Rank", v)))
                .transpose()?;
            let wanted_suit = clause
                .card_suit
                .as_deref()
                .map(|v| Suit::parse(v).ok_or_else(|| unknown("suit", "Suit", v)))
                .transpose()?;
            let wanted_enhancement = clause
                .card_enhancement
                .as_deref()
                .map(|v| crate::domain::Enhancement::parse(v).ok_or_else(|| unknown("enhancement", "Enhancement", v)))
                .transpose()?;
            let wanted_seal = clause
                .card_seal
                .as_deref()
                .map(|v| crate::domain::Seal::parse(v).ok_or_else(|| unknown("seal", "Seal", v)))
                .transpose()?;
            Ok(Box::new(PlayingCardEvaluator {
                name,
                wanted_rank,
                wanted_suit,
                wanted_enhancement,
                wanted_seal,
                edition: clause.edition,
                antes: clause.antes,
                shop_slots: clause.shop_slots,
                pack_slots: clause.pack_slots,
                min: clause.min,
            }))
        }
        ClauseKind::Tag => {
            let wanted = parse_values::<_, _>(&clause.values, "Tag", crate::domain::Tag::parse)?;
            Ok(Box::new(TagEvaluator { name, wanted, antes: clause.antes, min: clause.min }))
        }
        ClauseKind::Boss => {
            let wanted = parse_values::<_, _>(&clause.values, "Boss", Boss::parse)?;
            Ok(Box::new(BossEvaluator { name, wanted, antes: clause.antes, min: clause.min }))
        }
        ClauseKind::Event => {
            let kind = EventKind::parse(&clause.values[0]).ok_or_else(|| unknown("event", "EventKind", &clause.values[0]))?;
            let predicate = build_event_predicate(kind, &clause)?;
            Ok(Box::new(EventEvaluator { name, kind, rolls: clause.rolls, antes: clause.antes, predicate, min: clause.min }))
        }
        ClauseKind::And => {
            let children = clause.children.into_iter().map(build_one).collect::<Result<Vec<_>, _>>()?;
            Ok(Box::new(AndEvaluator { name, children }))
        }
        ClauseKind::Or => {
            let children = clause.children.into_iter().map(build_one).collect::<Result<Vec<_>, _>>()?;
            Ok(Box::new(OrEvaluator { name, children }))
        }
        ClauseKind::ErraticRank => {
            let rank = Rank::parse(&clause.values[0]).ok_or_else(|| unknown("erraticRank", "Rank", &clause.values[0]))?;
            Ok(Box::new(ErraticEvaluator { name, ranks: vec![RankTarget { rank, min: clause.min }], suits: Vec::new() }))
        }
        ClauseKind::ErraticSuit => {
            let suit = Suit::parse(&clause.values[0]).ok_or_else(|| unknown("erraticSuit", "Suit", &clause.values[0]))?;
            Ok(Box::new(ErraticEvaluator { name, ranks: Vec::new(), suits: vec![SuitTarget { suit, min: clause.min }] }))
        }
    }
}

/// Builds the per-roll test for an `Event` clause. A second `values` entry
/// is a numeric amount threshold for the three counter-style events; an
/// `edition` constrains `WheelOfFortune` to a specific roll; the two
/// extinction events match whenever they actually fire. Omitting the extra
/// constraint matches any outcome of that kind.
fn build_event_predicate(kind: EventKind, clause: &Clause) -> Result<Box<dyn Fn(&Event) -> bool + Send + Sync>, FilterError> {
    match kind {
        EventKind::LuckyMoney | EventKind::LuckyMult | EventKind::Misprint => match clause.values.get(1) {
            Some(raw) => {
                let threshold: u32 = raw
                    .parse()
                    .map_err(|_| FilterError::Malformed { path: "event".to_string(), message: format!("{raw:?} is not a valid amount threshold") })?;
                Ok(Box::new(move |event: &Event| match event {
                    Event::LuckyMoney(v) | Event::LuckyMult(v) | Event::Misprint(v) => *v >= threshold,
                    _ => false,
                }))
            }
            None => Ok(Box::new(|event: &Event| matches!(event, Event::LuckyMoney(_) | Event::LuckyMult(_) | Event::Misprint(_)))),
        },
        EventKind::WheelOfFortune => match clause.edition {
            Some(wanted) => Ok(Box::new(move |event: &Event| matches!(event, Event::WheelOfFortune(e) if *e == wanted))),
            None => Ok(Box::new(|event: &Event| matches!(event, Event::WheelOfFortune(_)))),
        },
        EventKind::Cavendish => Ok(Box::new(|event: &Event| matches!(event, Event::CavendishExtinction(true)))),
        EventKind::GrosMichel => Ok(Box::new(|event: &Event| matches!(event, Event::GrosMichelExtinction(true)))),
    }
}

fn parse_values<T, F>(values: &[String], domain: &'static str, parse: F) -> Result<Vec<T>, FilterError>
where
    F: Fn(&str) -> Option<T>,
{
    values.iter().map(|v| parse(v).ok_or_else(|| unknown("value", domain, v))).collect()
}
