//! Table layout for the persisted search state. Each constant is raw DDL,
//! `IF NOT EXISTS` so a fresh database and a resumed one bootstrap the same
//! way.

pub const RESULTS_TABLE: &str = "results";
pub const SEARCH_STATE_TABLE: &str = "search_state";
pub const FERTILIZER_TABLE: &str = "seeds";

/// `tally_0 .. tally_{width-1}` columns, one per `should` clause.
pub fn create_results_table(width: usize) -> String {
    let tallies = (0..width).map(|i| format!("tally_{i} INT NOT NULL DEFAULT 0")).collect::<Vec<_>>().join(",\n                ");
    format!(
        r#"
            CREATE TABLE IF NOT EXISTS {RESULTS_TABLE} (
                seed TEXT PRIMARY KEY,
                score BIGINT NOT NULL,
                {tallies}
            );
            CREATE INDEX IF NOT EXISTS results_score_idx ON {RESULTS_TABLE} (score DESC);
        "#
    )
}

pub const CREATE_SEARCH_STATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS search_state (
        filter_id TEXT PRIMARY KEY,
        filter_text TEXT NOT NULL,
        batch_size INT NOT NULL,
        last_completed_batch BIGINT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    );
"#;

pub const CREATE_FERTILIZER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS seeds (
        seed TEXT PRIMARY KEY
    );
"#;

/// `filterId = sanitize(filterName_deck_stake)`: lowercase, non-alphanumerics
/// collapsed to `_`, so arbitrary filter names are safe as a primary key.
pub fn filter_id(name: &str, deck: &str, stake: &str) -> String {
    let raw = format!("{name}_{deck}_{stake}").to_ascii_lowercase();
    let mut out = String::with_capacity(raw.len());
    let mut last_was_underscore = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_was_underscore = false;
        } else if !last_was_underscore {
            out.push('_');
            last_was_underscore = true;
        }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_id_sanitizes_punctuation() {
        assert_eq!(filter_id("Blueprint Hunt!", "Red", "White"), "blueprint_hunt_red_white");
    }

    #[test]
    fn results_table_ddl_has_one_tally_column_per_width() {
        let ddl = create_results_table(3);
        assert_eq!(ddl.matches("tally_").count(), 3);
    }
}
