//! Filter documents, normalization, category grouping, and the compiled
//! evaluator pipeline built from them. This is the layer a user-authored
//! predicate passes through on its way to something the search driver can
//! run per batch.

mod category;
mod clauses;
mod document;
mod error;
mod evaluate;
mod normalize;
mod pipeline;

pub use document::{Defaults, FilterDocument};
pub use error::FilterError;
pub use evaluate::{ClauseEvaluator, EvalCtx};
pub use normalize::{Clause, ClauseKind};
pub use pipeline::{compile, CompiledPipeline};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_the_voucher_must_example() {
        let doc = FilterDocument::parse(
            r#"{ "must": [{ "type": "Voucher", "value": "Telescope", "antes": [1,2] }], "deck": "Red", "stake": "White" }"#,
        )
        .unwrap();
        let pipeline = compile(&doc).unwrap();
        assert_eq!(pipeline.must.len(), 1);
        assert!(pipeline.should.is_empty());
    }

    #[test]
    fn compiles_the_should_score_example() {
        let doc = FilterDocument::parse(r#"{ "should": [{ "joker": "Blueprint", "antes": [1,2,3], "score": 100 }] }"#).unwrap();
        let pipeline = compile(&doc).unwrap();
        assert_eq!(pipeline.should.len(), 1);
        assert_eq!(pipeline.should[0].1, 100);
    }

    #[test]
    fn compiles_the_erratic_fusion_example() {
        let doc = FilterDocument::parse(
            r#"{ "deck": "Erratic", "must": [
                { "type": "ErraticRank", "rank": "Ace", "value": "Ace", "min": 8 },
                { "type": "ErraticSuit", "suit": "Hearts", "value": "Hearts", "min": 20 }
            ] }"#,
        )
        .unwrap();
        let pipeline = compile(&doc).unwrap();
        assert_eq!(pipeline.must.len(), 1, "fused erratic clauses collapse into one evaluator");
    }

    #[test]
    fn unknown_value_is_rejected_at_compile_time() {
        let doc = FilterDocument::parse(r#"{ "must": [{ "type": "Voucher", "value": "NotAVoucher" }] }"#).unwrap();
        assert!(compile(&doc).is_err());
    }

    #[test]
    fn unknown_event_kind_is_rejected_at_compile_time() {
        let doc = FilterDocument::parse(r#"{ "must": [{ "type": "Event", "value": "NotAnEvent" }] }"#).unwrap();
        assert!(compile(&doc).is_err());
    }

    #[test]
    fn event_clause_with_a_recognized_kind_compiles() {
        let doc = FilterDocument::parse(r#"{ "must": [{ "type": "Event", "value": "WheelOfFortune", "edition": "Polychrome" }] }"#).unwrap();
        let pipeline = compile(&doc).unwrap();
        assert_eq!(pipeline.must.len(), 1);
    }
}
