//! Rule-based campaign insights
//!
//! Deterministic estimates for content performance and campaign health.
//! Neither calculation touches the network; both are plain arithmetic over
//! the numbers the caller supplies.

use crate::models::{
    CampaignAssessment, CampaignPerformance, ContentType, Impact, PerformancePrediction,
    Suggestion, SuggestionKind,
};

/// Engagement assumed when the caller has no history for the influencer
pub const DEFAULT_AVERAGE_ENGAGEMENT: f64 = 1000.0;

const PREDICTION_CONFIDENCE: f64 = 0.75;
const REACH_RATIO: f64 = 0.3;

impl ContentType {
    /// Engagement multiplier relative to a regular post
    pub fn multiplier(&self) -> f64 {
        match self {
            ContentType::Reel => 1.5,
            ContentType::Video => 1.3,
            ContentType::Post => 1.0,
            ContentType::Story => 0.8,
        }
    }
}

/// Predict likes, comments, shares and reach for one piece of content
pub fn predict_performance(
    followers: u64,
    average_engagement: Option<f64>,
    content_type: ContentType,
) -> PerformancePrediction {
    let base = average_engagement
        .filter(|e| e.is_finite() && *e > 0.0)
        .unwrap_or(DEFAULT_AVERAGE_ENGAGEMENT);
    let weighted = base * content_type.multiplier();

    PerformancePrediction {
        predicted_likes: round_count(weighted * 0.8),
        predicted_comments: round_count(weighted * 0.1),
        predicted_shares: round_count(weighted * 0.05),
        predicted_reach: round_count(followers as f64 * REACH_RATIO),
        confidence: PREDICTION_CONFIDENCE,
    }
}

/// Score a running campaign and suggest improvements
///
/// The score is three tiered factors of 25 points each plus a flat 25,
/// capped at 100.
pub fn assess_campaign(performance: &CampaignPerformance) -> CampaignAssessment {
    let score = tier(performance.engagement_rate, 5.0, 3.0)
        + tier(performance.conversion_rate, 3.0, 2.0)
        + tier(performance.roas, 4.0, 3.0)
        + 25;

    let mut suggestions = Vec::new();

    if performance.engagement_rate < 3.0 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Engagement,
            suggestion: "Consider working with micro-influencers who typically have higher engagement rates".to_string(),
            impact: Impact::High,
        });
    }

    if performance.conversion_rate < 2.0 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Conversion,
            suggestion: "Add clear call-to-actions and discount codes to improve conversion rates".to_string(),
            impact: Impact::Medium,
        });
    }

    let mut recommendations = Vec::new();

    if performance.budget > 50_000.0 {
        recommendations.push("Consider diversifying across multiple influencer tiers".to_string());
    }

    if performance.duration_days > 90 {
        recommendations.push("Long campaigns may benefit from mid-campaign optimization".to_string());
    }

    recommendations.push("Monitor performance weekly and adjust targeting as needed".to_string());

    CampaignAssessment {
        overall_score: score.min(100),
        suggestions,
        recommendations,
    }
}

/// 25 points at or above `high`, 20 at or above `mid`, 10 otherwise
#[inline]
fn tier(value: f64, high: f64, mid: f64) -> u8 {
    if value >= high {
        25
    } else if value >= mid {
        20
    } else {
        10
    }
}

#[inline]
fn round_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
