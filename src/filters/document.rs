use serde::Deserialize;

/// The root of a user-authored filter. Individual clauses are kept as raw
/// JSON here: category shorthand (`{ joker: "Blueprint" }` instead of
/// `{ type: "Joker", value: "Blueprint" }`) can't be expressed as one fixed
/// Rust shape, so shorthand expansion happens in `normalize` against the
/// raw object instead of being fought with serde field aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterDocument {
    pub name: Option<String>,
    pub deck: Option<String>,
    pub stake: Option<String>,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub must: Vec<serde_json::Value>,
    #[serde(default)]
    pub should: Vec<serde_json::Value>,
    #[serde(default, rename = "mustNot")]
    pub must_not: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    pub antes: Option<Vec<i64>>,
    #[serde(rename = "packSlots")]
    pub pack_slots: Option<Vec<i64>>,
    #[serde(rename = "shopSlots")]
    pub shop_slots: Option<Vec<i64>>,
    pub score: Option<i64>,
}

impl FilterDocument {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_document() {
        let doc = FilterDocument::parse(r#"{ "must": [{ "type": "Voucher", "value": "Telescope", "antes": [1,2] }] }"#).unwrap();
        assert_eq!(doc.must.len(), 1);
        assert!(doc.should.is_empty());
    }

    #[test]
    fn parses_category_shorthand_as_raw_json() {
        let doc = FilterDocument::parse(r#"{ "should": [{ "joker": "Blueprint", "antes": [1,2,3], "score": 100 }] }"#).unwrap();
        assert_eq!(doc.should.len(), 1);
        assert_eq!(doc.should[0]["joker"], "Blueprint");
    }
}
