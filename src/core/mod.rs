// Core algorithm exports
pub mod filters;
pub mod insights;
pub mod matcher;
pub mod rules;
pub mod scoring;

pub use filters::{matches_filter, matches_follower_tier, matches_engagement_tier};
pub use insights::{assess_campaign, predict_performance};
pub use matcher::{Matcher, MatchResult, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
pub use rules::{ScoringRules, RulesError, CategoryMapping, BudgetBucket};
pub use scoring::calculate_match_score;
