use std::sync::Arc;
use crate::models::{DiscoveryFilter, InfluencerProfile, MatchCriteria, ScoreBreakdown, ScoredMatch, ScoringWeights};
use crate::core::{
    filters::matches_filter,
    rules::ScoringRules,
    scoring::calculate_match_score,
};

/// Scores below this are not worth showing to a marketer
pub const DEFAULT_MIN_SCORE: u8 = 60;

/// Number of matches returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 8;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Main matching orchestrator - implements the ranking pipeline
///
/// # Pipeline Stages
/// 1. Discovery pre-filter (optional)
/// 2. Scoring
/// 3. Minimum score threshold
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    rules: Arc<ScoringRules>,
    min_score: u8,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, rules: ScoringRules) -> Self {
        Self {
            weights,
            rules: Arc::new(rules),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), ScoringRules::default())
    }

    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score.min(100);
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Score a single influencer against campaign criteria
    pub fn score(&self, profile: &InfluencerProfile, criteria: &MatchCriteria) -> ScoreBreakdown {
        calculate_match_score(profile, criteria, &self.weights, &self.rules)
    }

    /// Find the best influencers for a campaign
    ///
    /// # Arguments
    /// * `criteria` - The campaign's matching criteria
    /// * `candidates` - The influencer catalog, in insertion order
    /// * `filter` - Optional discovery filter applied before scoring
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with matches sorted by descending score; equal scores keep
    /// catalog order
    pub fn find_matches(
        &self,
        criteria: &MatchCriteria,
        candidates: &[InfluencerProfile],
        filter: Option<&DiscoveryFilter>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored_matches: Vec<ScoredMatch> = candidates
            .iter()
            // Stage 1: Discovery pre-filter
            .filter(|profile| filter.map_or(true, |f| matches_filter(profile, f)))
            // Stage 2 & 3: Score and drop weak matches
            .filter_map(|profile| {
                let breakdown = self.score(profile, criteria);

                if breakdown.score >= self.min_score {
                    Some(ScoredMatch::new(profile, breakdown))
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps catalog order for ties
        scored_matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        // Stage 4: Limit results
        scored_matches.truncate(limit);

        tracing::debug!(
            "Scored {} candidates, {} above threshold {}",
            total_candidates,
            scored_matches.len(),
            self.min_score
        );

        MatchResult {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
