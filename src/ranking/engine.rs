//! Rule engine for multi-criteria candidate ranking.
//!
//! Composes ranking rules sequentially, each with its own tolerance, and
//! orders candidates with a stable insertion sort.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, RankingRule, RuleScore};
use crate::models::RetakeCandidate;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep input order (default).
    #[default]
    Stable,
    /// Deterministic by course code (lexicographic).
    ByCode,
}

#[derive(Clone)]
struct TolerantRule {
    rule: Arc<dyn RankingRule>,
    tolerance: f64,
}

/// A composable rule engine for candidate ranking.
///
/// A rule decides the order of two candidates only when their scores
/// differ by more than the rule's tolerance; otherwise the next rule is
/// consulted.
///
/// # Example
/// ```
/// use retake_planner::ranking::RankingEngine;
///
/// let engine = RankingEngine::retake_order();
/// assert_eq!(engine.rule_names(), vec!["SORTING", "SUCCESS", "VALUE"]);
/// ```
#[derive(Clone)]
pub struct RankingEngine {
    rules: Vec<TolerantRule>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RankingEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
            epsilon: 1e-9,
        }
    }

    /// The retake ordering: sorting score (tolerance 5), then success rate
    /// (tolerance 0.1), then value score.
    pub fn retake_order() -> Self {
        Self::new()
            .with_rule(rules::SortingScore, 5.0)
            .with_rule(rules::SuccessRate, 0.1)
            .with_tie_breaker(rules::ValueScore)
    }

    /// Adds a rule that decides only when scores differ by more than
    /// `tolerance`.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R, tolerance: f64) -> Self {
        self.rules.push(TolerantRule {
            rule: Arc::new(rule),
            tolerance: tolerance.max(0.0),
        });
        self
    }

    /// Adds a rule that decides on any difference above the engine epsilon.
    pub fn with_tie_breaker<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(TolerantRule {
            rule: Arc::new(rule),
            tolerance: 0.0,
        });
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.name()).collect()
    }

    /// Ranks candidates (first = best).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, candidates: &[RetakeCandidate]) -> Vec<usize> {
        let scores: Vec<Vec<RuleScore>> = candidates.iter().map(|c| self.evaluate(c)).collect();
        let mut indices: Vec<usize> = (0..candidates.len()).collect();

        // Stable insertion sort: only strictly-after pairs are swapped.
        for i in 1..indices.len() {
            let mut j = i;
            while j > 0
                && self.compare(
                    &candidates[indices[j - 1]],
                    &scores[indices[j - 1]],
                    &candidates[indices[j]],
                    &scores[indices[j]],
                ) == Ordering::Greater
            {
                indices.swap(j - 1, j);
                j -= 1;
            }
        }

        indices
    }

    /// Consumes and returns the candidates in ranked order.
    pub fn rank(&self, candidates: Vec<RetakeCandidate>) -> Vec<RetakeCandidate> {
        let order = self.sort_indices(&candidates);
        let mut slots: Vec<Option<RetakeCandidate>> = candidates.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect()
    }

    /// Returns the index of the best-ranked candidate.
    pub fn select_best(&self, candidates: &[RetakeCandidate]) -> Option<usize> {
        self.sort_indices(candidates).first().copied()
    }

    /// Evaluates a single candidate and returns scores from each rule.
    pub fn evaluate(&self, candidate: &RetakeCandidate) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.rule.evaluate(candidate))
            .collect()
    }

    fn compare(
        &self,
        a: &RetakeCandidate,
        scores_a: &[RuleScore],
        b: &RetakeCandidate,
        scores_b: &[RuleScore],
    ) -> Ordering {
        for ((r, &score_a), &score_b) in self.rules.iter().zip(scores_a).zip(scores_b) {
            if (score_a - score_b).abs() > r.tolerance.max(self.epsilon) {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match &self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ByCode => a.code().cmp(b.code()),
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::retake_order()
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(tol={})", r.rule.name(), r.tolerance))
                    .collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseRecord, Priority};

    fn make_candidate(code: &str, sorting: f64, success: f64, value: f64) -> RetakeCandidate {
        RetakeCandidate {
            course: CourseRecord::new(code).with_credits(3.0).with_grade(2.0).passed(),
            difficulty: 0.75,
            success_rate: success,
            value_score: value,
            priority: Priority::from_severity(6.0),
            sorting_score: sorting,
        }
    }

    fn codes(candidates: &[RetakeCandidate], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| candidates[i].code().to_string()).collect()
    }

    #[test]
    fn test_primary_rule_decides_outside_tolerance() {
        let candidates = vec![
            make_candidate("low", 40.0, 0.9, 90.0),
            make_candidate("high", 60.0, 0.1, 10.0),
        ];
        let engine = RankingEngine::retake_order();
        let indices = engine.sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["high", "low"]);
    }

    #[test]
    fn test_falls_through_to_success_rate() {
        let candidates = vec![
            make_candidate("A", 52.0, 0.5, 90.0),
            make_candidate("B", 50.0, 0.8, 10.0),
        ];
        // Sorting gap 2 <= 5, success gap 0.3 > 0.1 -> B first
        let indices = RankingEngine::retake_order().sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["B", "A"]);
    }

    #[test]
    fn test_falls_through_to_value_score() {
        let candidates = vec![
            make_candidate("A", 52.0, 0.75, 30.0),
            make_candidate("B", 50.0, 0.80, 35.0),
        ];
        let indices = RankingEngine::retake_order().sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["B", "A"]);
    }

    #[test]
    fn test_sorting_gap_of_exactly_five_falls_through() {
        let candidates = vec![
            make_candidate("A", 55.0, 0.5, 90.0),
            make_candidate("B", 50.0, 0.8, 10.0),
        ];
        let indices = RankingEngine::retake_order().sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["B", "A"]);
    }

    #[test]
    fn test_sorting_gap_above_five_decides() {
        let candidates = vec![
            make_candidate("A", 55.5, 0.5, 10.0),
            make_candidate("B", 50.0, 0.8, 90.0),
        ];
        let indices = RankingEngine::retake_order().sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["A", "B"]);
    }

    #[test]
    fn test_success_gap_below_tolerance_falls_through() {
        // Gap 0.09: value score decides
        let candidates = vec![
            make_candidate("A", 50.0, 0.80, 10.0),
            make_candidate("B", 50.0, 0.71, 20.0),
        ];
        let indices = RankingEngine::retake_order().sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["B", "A"]);
    }

    #[test]
    fn test_success_gap_above_tolerance_decides() {
        // Gap 0.11: success rate decides despite the lower value score
        let candidates = vec![
            make_candidate("A", 50.0, 0.80, 10.0),
            make_candidate("B", 50.0, 0.69, 20.0),
        ];
        let indices = RankingEngine::retake_order().sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["A", "B"]);
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let candidates = vec![
            make_candidate("B", 50.0, 0.5, 10.0),
            make_candidate("A", 50.0, 0.5, 10.0),
        ];
        let indices = RankingEngine::retake_order().sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["B", "A"]);

        let by_code = RankingEngine::retake_order().with_final_tie_breaker(TieBreaker::ByCode);
        let indices = by_code.sort_indices(&candidates);
        assert_eq!(codes(&candidates, &indices), vec!["A", "B"]);
    }

    #[test]
    fn test_non_transitive_input_is_deterministic() {
        // A ~ B and B ~ C on sorting score, but A and C differ by 8.
        let candidates = vec![
            make_candidate("A", 50.0, 0.9, 1.0),
            make_candidate("B", 54.0, 0.5, 2.0),
            make_candidate("C", 58.0, 0.1, 3.0),
        ];
        let engine = RankingEngine::retake_order();
        let first = engine.sort_indices(&candidates);
        let second = engine.sort_indices(&candidates);
        assert_eq!(first, second);
        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_rank_consumes_in_order() {
        let candidates = vec![
            make_candidate("low", 10.0, 0.5, 1.0),
            make_candidate("mid", 30.0, 0.5, 1.0),
            make_candidate("top", 90.0, 0.5, 1.0),
        ];
        let ranked = RankingEngine::retake_order().rank(candidates);
        let ranked_codes: Vec<&str> = ranked.iter().map(|c| c.code()).collect();
        assert_eq!(ranked_codes, vec!["top", "mid", "low"]);
    }

    #[test]
    fn test_empty_candidates() {
        let engine = RankingEngine::retake_order();
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.select_best(&[]).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let candidate = make_candidate("T1", 42.0, 0.6, 20.0);
        let scores = RankingEngine::retake_order().evaluate(&candidate);
        assert_eq!(scores.len(), 3);
        assert!((scores[0] + 42.0).abs() < 1e-10);
        assert!((scores[1] + 0.6).abs() < 1e-10);
        assert!((scores[2] + 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_chain() {
        let candidates = vec![
            make_candidate("A", 0.0, 0.0, 0.0),
            make_candidate("B", 0.0, 0.0, 0.0),
        ];
        let engine = RankingEngine::new()
            .with_rule(rules::LowestGrade, 0.0)
            .with_final_tie_breaker(TieBreaker::ByCode);
        assert_eq!(engine.select_best(&candidates), Some(0));
        assert_eq!(engine.rule_names(), vec!["GRADE"]);
    }
}
