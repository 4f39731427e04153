use super::error::FilterError;
use crate::domain::{Edition, GameEnum};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Voucher,
    Joker,
    SoulJoker,
    SoulJokerEditionOnly,
    TarotCard,
    PlanetCard,
    SpectralCard,
    PlayingCard,
    Tag,
    Boss,
    Event,
    ErraticRank,
    ErraticSuit,
    And,
    Or,
}

impl ClauseKind {
    fn canonicalize(tag: &str) -> Option<Self> {
        use ClauseKind::*;
        Some(match tag.to_ascii_lowercase().as_str() {
            "voucher" => Voucher,
            "joker" => Joker,
            "souljoker" | "soul_joker" => SoulJoker,
            "tarot" | "tarotcard" => TarotCard,
            "planet" | "planetcard" => PlanetCard,
            "spectral" | "spectralcard" => SpectralCard,
            "playingcard" | "card" => PlayingCard,
            "tag" => Tag,
            "boss" => Boss,
            "event" => Event,
            "erraticrank" => ErraticRank,
            "erraticsuit" => ErraticSuit,
            "and" => And,
            "or" => Or,
            _ => return None,
        })
    }
}

/// A clause after full normalization: exactly one canonical kind, a
/// non-empty value disjunction (unless it is a compound clause), ante/slot
/// lists capped and defaulted, score/min defaulted.
#[derive(Debug, Clone)]
pub struct Clause {
    pub kind: ClauseKind,
    pub values: Vec<String>,
    pub edition: Option<Edition>,
    pub antes: Vec<u8>,
    pub shop_slots: Vec<u8>,
    pub pack_slots: Vec<u8>,
    /// roll indices within an ante; only meaningful for `Event` clauses.
    pub rolls: Vec<usize>,
    pub min: u32,
    pub score: i64,
    pub require_mega: bool,
    pub children: Vec<Clause>,
    /// `PlayingCard` clauses constrain rank/suit/enhancement/seal independently
    /// rather than through `values`; unused by every other category.
    pub card_rank: Option<String>,
    pub card_suit: Option<String>,
    pub card_enhancement: Option<String>,
    pub card_seal: Option<String>,
}

const SHORTHAND_KEYS: &[&str] = &[
    "voucher",
    "joker",
    "soulJoker",
    "tarot",
    "planet",
    "spectral",
    "playingCard",
    "tag",
    "boss",
    "event",
    "erraticRank",
    "erraticSuit",
];

/// Expand `{ joker: "Blueprint", ... }` into `{ type: "Joker", value: "Blueprint", ... }`
/// before anything else runs, so shorthand and canonical clauses normalize
/// identically from this point on.
fn expand_shorthand(raw: &Value, path: &str) -> Result<Value, FilterError> {
    let obj = raw.as_object().ok_or_else(|| FilterError::Malformed {
        path: path.to_string(),
        message: "clause must be a JSON object".to_string(),
    })?;

    if obj.contains_key("type") {
        return Ok(raw.clone());
    }

    for &key in SHORTHAND_KEYS {
        if let Some(value) = obj.get(key) {
            let mut expanded = obj.clone();
            expanded.remove(key);
            expanded.insert("type".to_string(), Value::String(key.to_string()));
            expanded.insert("value".to_string(), value.clone());
            return Ok(Value::Object(expanded));
        }
    }

    Err(FilterError::Malformed {
        path: path.to_string(),
        message: "clause has no `type` field and no recognized category shorthand".to_string(),
    })
}

fn parse_ante_list(value: Option<&Value>, default: &[u8], path: &str) -> Result<Vec<u8>, FilterError> {
    let Some(value) = value else {
        return Ok(default.to_vec());
    };
    let array = value.as_array().ok_or_else(|| FilterError::Malformed {
        path: path.to_string(),
        message: "antes must be an array of integers".to_string(),
    })?;
    let mut antes = Vec::with_capacity(array.len());
    for entry in array {
        let ante = entry.as_i64().ok_or_else(|| FilterError::Malformed {
            path: path.to_string(),
            message: "ante entries must be integers".to_string(),
        })?;
        if !(1..=8).contains(&ante) {
            return Err(FilterError::AnteOutOfRange { path: path.to_string(), ante });
        }
        antes.push(ante as u8);
    }
    Ok(antes)
}

fn slot_cap(ante: u8) -> u8 {
    if ante == 1 {
        3
    } else {
        5
    }
}

fn parse_slot_list(value: Option<&Value>, antes: &[u8], path: &str) -> Result<Vec<u8>, FilterError> {
    let cap = antes.iter().copied().map(slot_cap).max().unwrap_or(5);
    let Some(value) = value else {
        return Ok((0..=cap).collect());
    };
    let array = value.as_array().ok_or_else(|| FilterError::Malformed {
        path: path.to_string(),
        message: "slot list must be an array of integers".to_string(),
    })?;
    let mut slots = Vec::with_capacity(array.len());
    for entry in array {
        let slot = entry.as_i64().unwrap_or(-1);
        if (0..=cap as i64).contains(&slot) {
            slots.push(slot as u8);
        }
    }
    Ok(slots)
}

/// Non-negative, unbounded roll indices (unlike shop/pack slots these have
/// no per-ante cap — an event slot can in principle roll any number of
/// times). Defaults to `[0]`, the first roll, when the clause omits it.
fn parse_roll_list(value: Option<&Value>, path: &str) -> Result<Vec<usize>, FilterError> {
    let Some(value) = value else {
        return Ok(vec![0]);
    };
    let array = value.as_array().ok_or_else(|| FilterError::Malformed {
        path: path.to_string(),
        message: "rolls must be an array of integers".to_string(),
    })?;
    let mut rolls = Vec::with_capacity(array.len());
    for entry in array {
        let roll = entry.as_i64().ok_or_else(|| FilterError::Malformed {
            path: path.to_string(),
            message: "roll entries must be integers".to_string(),
        })?;
        if roll < 0 {
            return Err(FilterError::Malformed { path: path.to_string(), message: "roll indices must be non-negative".to_string() });
        }
        rolls.push(roll as usize);
    }
    if rolls.is_empty() {
        rolls.push(0);
    }
    Ok(rolls)
}

fn parse_values(obj: &serde_json::Map<String, Value>, path: &str) -> Result<Vec<String>, FilterError> {
    if let Some(values) = obj.get("values") {
        let array = values.as_array().ok_or_else(|| FilterError::Malformed {
            path: path.to_string(),
            message: "values must be an array of strings".to_string(),
        })?;
        let out: Vec<String> = array.iter().filter_map(|v| v.as_str().map(String::from)).collect();
        if out.is_empty() {
            return Err(FilterError::EmptyValues { path: path.to_string() });
        }
        return Ok(out);
    }
    if let Some(value) = obj.get("value").and_then(Value::as_str) {
        if value.eq_ignore_ascii_case("any") {
            return Ok(vec!["Any".to_string()]);
        }
        return Ok(vec![value.to_string()]);
    }
    Err(FilterError::EmptyValues { path: path.to_string() })
}

fn parse_edition(obj: &serde_json::Map<String, Value>, path: &str) -> Result<Option<Edition>, FilterError> {
    let Some(raw) = obj.get("edition").and_then(Value::as_str) else {
        return Ok(None);
    };
    if raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Edition::parse(raw).map(Some).ok_or_else(|| FilterError::UnknownValue {
        path: path.to_string(),
        domain: "Edition",
        value: raw.to_string(),
    })
}

/// Run the full six-step post-processing contract over one raw clause,
/// shorthand expansion first.
pub fn normalize_clause(
    raw: &Value,
    path: &str,
    is_should: bool,
    default_antes: &[u8],
    default_score: i64,
) -> Result<Clause, FilterError> {
    let expanded = expand_shorthand(raw, path)?;
    let obj = expanded.as_object().expect("expand_shorthand always returns an object");

    let type_tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| FilterError::Malformed { path: path.to_string(), message: "missing `type`".to_string() })?;
    let kind = ClauseKind::canonicalize(type_tag)
        .ok_or_else(|| FilterError::UnknownType { path: path.to_string(), kind: type_tag.to_string() })?;

    if matches!(kind, ClauseKind::And | ClauseKind::Or) {
        let raw_children = obj.get("clauses").and_then(Value::as_array).cloned().unwrap_or_default();
        if raw_children.is_empty() {
            return Err(FilterError::EmptyCompound { path: path.to_string(), kind: type_tag.to_string() });
        }
        let mut children = Vec::with_capacity(raw_children.len());
        for (i, child) in raw_children.iter().enumerate() {
            let child_path = format!("{path}.clauses[{i}]");
            children.push(normalize_clause(child, &child_path, is_should, default_antes, default_score)?);
        }
        let antes = parse_ante_list(obj.get("antes"), default_antes, path)?;
        let score = read_score(obj, is_should, default_score, path)?;
        return Ok(Clause {
            kind,
            values: Vec::new(),
            edition: None,
            antes,
            shop_slots: Vec::new(),
            pack_slots: Vec::new(),
            rolls: vec![0],
            min: 1,
            score,
            require_mega: false,
            children,
            card_rank: None,
            card_suit: None,
            card_enhancement: None,
            card_seal: None,
        });
    }

    let antes = parse_ante_list(obj.get("antes"), default_antes, path)?;
    let shop_slots = parse_slot_list(obj.get("shopSlots"), &antes, path)?;
    let pack_slots = parse_slot_list(obj.get("packSlots"), &antes, path)?;
    let rolls = parse_roll_list(obj.get("rolls"), path)?;
    let card_rank = obj.get("rank").and_then(Value::as_str).map(String::from);
    let card_suit = obj.get("suit").and_then(Value::as_str).map(String::from);
    let card_enhancement = obj.get("enhancement").and_then(Value::as_str).map(String::from);
    let card_seal = obj.get("seal").and_then(Value::as_str).map(String::from);
    let values = if matches!(kind, ClauseKind::PlayingCard) {
        if card_rank.is_none() && card_suit.is_none() && card_enhancement.is_none() && card_seal.is_none() {
            return Err(FilterError::EmptyValues { path: path.to_string() });
        }
        Vec::new()
    } else {
        parse_values(obj, path)?
    };
    let edition = parse_edition(obj, path)?;
    let score = read_score(obj, is_should, default_score, path)?;

    let min = match obj.get("min") {
        Some(v) => {
            let min = v.as_i64().unwrap_or(1);
            if min < 1 {
                return Err(FilterError::NegativeMin { path: path.to_string(), min });
            }
            min as u32
        }
        None => 1,
    };

    let require_mega = obj.get("requireMega").and_then(Value::as_bool).unwrap_or(false);

    let kind = if matches!(kind, ClauseKind::SoulJoker)
        && values.len() == 1
        && values[0].eq_ignore_ascii_case("any")
        && edition.is_some()
    {
        ClauseKind::SoulJokerEditionOnly
    } else {
        kind
    };

    Ok(Clause {
        kind,
        values,
        edition,
        antes,
        shop_slots,
        pack_slots,
        rolls,
        min,
        score,
        require_mega,
        children: Vec::new(),
        card_rank,
        card_suit,
        card_enhancement,
        card_seal,
    })
}

fn read_score(
    obj: &serde_json::Map<String, Value>,
    is_should: bool,
    default_score: i64,
    path: &str,
) -> Result<i64, FilterError> {
    match obj.get("score") {
        Some(v) => {
            if !is_should {
                return Err(FilterError::ScoreOnNonShould { path: path.to_string() });
            }
            Ok(v.as_i64().unwrap_or(default_score))
        }
        None => Ok(if is_should { default_score } else { 0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_and_canonical_normalize_identically() {
        let shorthand: Value = serde_json::from_str(r#"{ "joker": "Blueprint", "antes": [1,2,3], "score": 100 }"#).unwrap();
        let canonical: Value =
            serde_json::from_str(r#"{ "type": "Joker", "value": "Blueprint", "antes": [1,2,3], "score": 100 }"#).unwrap();
        let a = normalize_clause(&shorthand, "should[0]", true, &[1, 2, 3, 4, 5, 6, 7, 8], 1).unwrap();
        let b = normalize_clause(&canonical, "should[0]", true, &[1, 2, 3, 4, 5, 6, 7, 8], 1).unwrap();
        assert_eq!(a.values, b.values);
        assert_eq!(a.antes, b.antes);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn ante_out_of_range_is_rejected() {
        let raw: Value = serde_json::from_str(r#"{ "type": "Voucher", "value": "Telescope", "antes": [9] }"#).unwrap();
        let err = normalize_clause(&raw, "must[0]", false, &[1], 1).unwrap_err();
        assert!(matches!(err, FilterError::AnteOutOfRange { .. }));
    }

    #[test]
    fn score_on_must_clause_is_rejected() {
        let raw: Value = serde_json::from_str(r#"{ "type": "Voucher", "value": "Telescope", "score": 5 }"#).unwrap();
        let err = normalize_clause(&raw, "must[0]", false, &[1], 1).unwrap_err();
        assert!(matches!(err, FilterError::ScoreOnNonShould { .. }));
    }

    #[test]
    fn empty_and_is_rejected() {
        let raw: Value = serde_json::from_str(r#"{ "type": "And", "clauses": [] }"#).unwrap();
        let err = normalize_clause(&raw, "must[0]", false, &[1], 1).unwrap_err();
        assert!(matches!(err, FilterError::EmptyCompound { .. }));
    }

    #[test]
    fn ante_one_caps_shop_slots_to_three() {
        let raw: Value = serde_json::from_str(r#"{ "type": "Joker", "value": "Any", "antes": [1] }"#).unwrap();
        let clause = normalize_clause(&raw, "must[0]", false, &[1], 1).unwrap();
        assert_eq!(clause.shop_slots, vec![0, 1, 2, 3]);
    }
}
