//! Campaign Match - influencer match scoring for the CampaignPro dashboard
//!
//! This library scores how well an influencer fits a marketer's campaign
//! criteria and ranks a catalog of influencers by that score. The HTTP
//! service in `main.rs` exposes it alongside catalog discovery and
//! rule-based campaign insights.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Matcher, MatchResult, ScoringRules, calculate_match_score};
pub use self::models::{InfluencerProfile, MatchCriteria, ScoredMatch, ScoreBreakdown, ScoringWeights, FindMatchesRequest, FindMatchesResponse};
pub use self::services::InfluencerCatalog;
