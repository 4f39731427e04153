use super::normalize::{Clause, ClauseKind};

/// Clauses grouped by category, in the fixed evaluation order the category
/// enum itself defines. `SoulJokerEditionOnly` clauses are kept separate
/// from `SoulJoker` so the cheaper identity-free check can run first.
pub struct Grouped {
    pub by_kind: Vec<(ClauseKind, Vec<Clause>)>,
}

const ORDER: &[ClauseKind] = &[
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
    ClauseKind::ErraticRank,
    ClauseKind::ErraticSuit,
    ClauseKind::And,
    ClauseKind::Or,
];

pub fn group(clauses: Vec<Clause>) -> Grouped {
    let mut by_kind: Vec<(ClauseKind, Vec<Clause>)> = ORDER.iter().map(|&k| (k, Vec::new())).collect();
    for clause in clauses {
        let slot = by_kind.iter_mut().find(|(k, _)| *k == clause.kind).expect("ORDER covers every ClauseKind");
        slot.1.push(clause);
    }
    Grouped { by_kind }
}

impl Grouped {
    pub fn take(&mut self, kind: ClauseKind) -> Vec<Clause> {
        self.by_kind
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .map(|(_, clauses)| std::mem::take(clauses))
            .unwrap_or_default()
    }

    /// Erratic fusion: if both erratic-rank and erratic-suit groups are
    /// nonempty, the caller is meant to build one fused evaluator from both
    /// instead of two separate walks of the 52-card deck.
    pub fn erratic_fusion_candidates(&mut self) -> Option<(Vec<Clause>, Vec<Clause>)> {
        let ranks = self.take(ClauseKind::ErraticRank);
        let suits = self.take(ClauseKind::ErraticSuit);
        if ranks.is_empty() && suits.is_empty() {
            None
        } else {
            Some((ranks, suits))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(kind: ClauseKind) -> Clause {
        Clause {
            kind,
            values: vec!["Any".to_string()],
            edition: None,
            antes: vec![1],
            shop_slots: vec![],
            pack_slots: vec![],
            rolls: vec![0],
            min: 1,
            score: 0,
            require_mega: false,
            children: Vec::new(),
            card_rank: None,
            card_suit: None,
            card_enhancement: None,
            card_seal: None,
        }
    }

    #[test]
    fn grouping_preserves_category_order() {
        let clauses = vec![clause(ClauseKind::Boss), clause(ClauseKind::Voucher)];
        let mut grouped = group(clauses);
        assert_eq!(grouped.take(ClauseKind::Voucher).len(), 1);
        assert_eq!(grouped.take(ClauseKind::Boss).len(), 1);
    }

    #[test]
    fn fusion_candidates_empty_when_neither_present() {
        let mut grouped = group(vec![clause(ClauseKind::Joker)]);
        assert!(grouped.erratic_fusion_candidates().is_none());
    }

    #[test]
    fn fusion_candidates_present_when_either_present() {
        let mut grouped = group(vec![clause(ClauseKind::ErraticRank)]);
        assert!(grouped.erratic_fusion_candidates().is_some());
    }
}
