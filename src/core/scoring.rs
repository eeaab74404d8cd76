use crate::core::rules::ScoringRules;
use crate::models::{InfluencerProfile, MatchCriteria, ScoreBreakdown, ScoringWeights};

/// Followers within this distance of a bucket's lower bound count as a near miss
pub const NEAR_MISS_FOLLOWERS: u64 = 50_000;

/// Engagement tiers as (minimum rate, points out of 25)
const ENGAGEMENT_TIERS: [(f64, f64); 3] = [(6.0, 25.0), (4.0, 20.0), (2.0, 15.0)];
const ENGAGEMENT_FLOOR: f64 = 10.0;
const ENGAGEMENT_MAX: f64 = 25.0;

/// Reputation tiers as (minimum rating, points out of 15)
const REPUTATION_TIERS: [(f64, f64); 3] = [(4.5, 15.0), (4.0, 12.0), (3.5, 8.0)];
const REPUTATION_FLOOR: f64 = 5.0;
const REPUTATION_MAX: f64 = 15.0;

/// Budget alignment as points out of 20
const BUDGET_INSIDE: f64 = 20.0;
const BUDGET_NEAR_MISS: f64 = 15.0;
const BUDGET_OUTSIDE: f64 = 10.0;
const BUDGET_MAX: f64 = 20.0;

/// Brand-value alignment as points out of 15
const BRAND_VALUES_UNSET: f64 = 15.0;
const BRAND_VALUES_SET: f64 = 12.0;
const BRAND_VALUES_MAX: f64 = 15.0;

/// Calculate the match score (0-100) of an influencer for campaign criteria
///
/// Scoring formula (default weights):
/// score = round(100 * (
///     category      30    # product category maps onto influencer category
///   + engagement    25    # tiered on engagement rate
///   + budget        20    # followers inside the budget's follower interval
///   + reputation    15    # tiered on rating
///   + brand_values  10    # constant, values are not compared
/// ) / total_weight)
pub fn calculate_match_score(
    profile: &InfluencerProfile,
    criteria: &MatchCriteria,
    weights: &ScoringWeights,
    rules: &ScoringRules,
) -> ScoreBreakdown {
    let category = if rules.category_matches(&criteria.product_category, &profile.category) {
        weights.category
    } else {
        0.0
    };

    let engagement = scaled(
        weights.engagement,
        tiered(profile.engagement_rate, &ENGAGEMENT_TIERS, ENGAGEMENT_FLOOR),
        ENGAGEMENT_MAX,
    );

    let budget = scaled(
        weights.budget,
        calculate_budget_points(profile.followers, &criteria.budget_range, rules),
        BUDGET_MAX,
    );

    let reputation = scaled(
        weights.reputation,
        tiered(profile.rating, &REPUTATION_TIERS, REPUTATION_FLOOR),
        REPUTATION_MAX,
    );

    // Brand values are never compared against the influencer
    let brand_points = if criteria.brand_values.is_empty() {
        BRAND_VALUES_UNSET
    } else {
        BRAND_VALUES_SET
    };
    let brand_values = scaled(weights.brand_values, brand_points, BRAND_VALUES_MAX);

    let max_points = weights.total();
    let awarded = category + engagement + budget + reputation + brand_values;

    ScoreBreakdown {
        category,
        engagement,
        budget,
        reputation,
        brand_values,
        max_points,
        score: normalize(awarded, max_points),
    }
}

/// Points out of 20 for follower reach against the budget bucket
///
/// Unknown or empty budget labels fall back to `[0, inf)`, so every
/// influencer sits inside it.
#[inline]
fn calculate_budget_points(followers: u64, budget_range: &str, rules: &ScoringRules) -> f64 {
    let Some(bucket) = rules.budget_for(budget_range) else {
        return BUDGET_INSIDE;
    };

    if bucket.contains(followers) {
        BUDGET_INSIDE
    } else if followers.abs_diff(bucket.min_followers) < NEAR_MISS_FOLLOWERS {
        BUDGET_NEAR_MISS
    } else {
        BUDGET_OUTSIDE
    }
}

/// Points of the first tier whose threshold `value` reaches
#[inline]
fn tiered(value: f64, tiers: &[(f64, f64)], floor: f64) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

/// Rescale tier points to the configured factor weight
#[inline]
fn scaled(weight: f64, points: f64, max: f64) -> f64 {
    weight * points / max
}

#[inline]
fn normalize(awarded: f64, max_points: f64) -> u8 {
    if max_points <= 0.0 || !awarded.is_finite() {
        return 0;
    }

    (awarded / max_points * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityStatus, ContentMetrics, Platform, Rates};

    fn create_test_profile(category: &str, followers: u64, engagement_rate: f64, rating: f64) -> InfluencerProfile {
        InfluencerProfile {
            id: "test_influencer".to_string(),
            name: "Test Influencer".to_string(),
            username: "@test".to_string(),
            email: None,
            avatar: None,
            verified: true,
            platform: Platform::Instagram,
            category: category.to_string(),
            followers,
            engagement_rate,
            average_views: 0,
            location: "Miami, FL".to_string(),
            languages: vec!["English".to_string()],
            rates: Rates::default(),
            metrics: ContentMetrics::default(),
            campaigns: vec![],
            status: AvailabilityStatus::Available,
            rating,
            completed_campaigns: 10,
        }
    }

    fn create_test_criteria(product_category: &str, budget_range: &str) -> MatchCriteria {
        MatchCriteria {
            product_category: product_category.to_string(),
            budget_range: budget_range.to_string(),
            ..MatchCriteria::default()
        }
    }

    fn score(profile: &InfluencerProfile, criteria: &MatchCriteria) -> ScoreBreakdown {
        calculate_match_score(profile, criteria, &ScoringWeights::default(), &ScoringRules::default())
    }

    #[test]
    fn test_full_match_scores_100() {
        let profile = create_test_profile("Fitness & Health", 280_000, 6.9, 4.8);
        let criteria = create_test_criteria("Fitness & Sports", "$15,000 - $50,000");

        let breakdown = score(&profile, &criteria);

        assert_eq!(breakdown.category, 30.0);
        assert_eq!(breakdown.engagement, 25.0);
        assert_eq!(breakdown.budget, 20.0);
        assert_eq!(breakdown.reputation, 15.0);
        assert_eq!(breakdown.brand_values, 10.0);
        assert_eq!(breakdown.score, 100);
    }

    #[test]
    fn test_brand_values_stub() {
        let profile = create_test_profile("Fitness & Health", 280_000, 6.9, 4.8);
        let mut criteria = create_test_criteria("Fitness & Sports", "$15,000 - $50,000");
        criteria.brand_values = vec!["sustainability".to_string()];

        let breakdown = score(&profile, &criteria);

        assert!((breakdown.brand_values - 8.0).abs() < 1e-9);
        assert_eq!(breakdown.score, 98);
    }

    #[test]
    fn test_engagement_tiers() {
        assert_eq!(tiered(6.0, &ENGAGEMENT_TIERS, ENGAGEMENT_FLOOR), 25.0);
        assert_eq!(tiered(5.99, &ENGAGEMENT_TIERS, ENGAGEMENT_FLOOR), 20.0);
        assert_eq!(tiered(4.0, &ENGAGEMENT_TIERS, ENGAGEMENT_FLOOR), 20.0);
        assert_eq!(tiered(2.0, &ENGAGEMENT_TIERS, ENGAGEMENT_FLOOR), 15.0);
        assert_eq!(tiered(1.9, &ENGAGEMENT_TIERS, ENGAGEMENT_FLOOR), 10.0);
        assert_eq!(tiered(0.0, &ENGAGEMENT_TIERS, ENGAGEMENT_FLOOR), 10.0);
    }

    #[test]
    fn test_reputation_tiers() {
        assert_eq!(tiered(5.0, &REPUTATION_TIERS, REPUTATION_FLOOR), 15.0);
        assert_eq!(tiered(4.2, &REPUTATION_TIERS, REPUTATION_FLOOR), 12.0);
        assert_eq!(tiered(3.5, &REPUTATION_TIERS, REPUTATION_FLOOR), 8.0);
        assert_eq!(tiered(3.0, &REPUTATION_TIERS, REPUTATION_FLOOR), 5.0);
    }

    #[test]
    fn test_budget_points() {
        let rules = ScoringRules::default();

        assert_eq!(calculate_budget_points(100_000, "$5,000 - $15,000", &rules), 20.0);
        assert_eq!(calculate_budget_points(600_000, "$5,000 - $15,000", &rules), 10.0);
        // Near miss below the lower bound
        assert_eq!(calculate_budget_points(180_000, "$15,000 - $50,000", &rules), 15.0);
        // Above the upper bound is never a near miss
        assert_eq!(calculate_budget_points(510_000, "$15,000 - $50,000", &rules), 10.0);
        // Unknown bucket covers everything
        assert_eq!(calculate_budget_points(7, "", &rules), 20.0);
        assert_eq!(calculate_budget_points(7, "Whatever", &rules), 20.0);
    }

    #[test]
    fn test_unset_category_keeps_denominator() {
        let profile = create_test_profile("Fitness & Health", 280_000, 6.9, 4.8);
        let criteria = create_test_criteria("", "$15,000 - $50,000");

        let breakdown = score(&profile, &criteria);

        assert_eq!(breakdown.category, 0.0);
        assert_eq!(breakdown.max_points, 100.0);
        assert_eq!(breakdown.score, 70);
    }

    #[test]
    fn test_custom_weights_scale_tiers() {
        let profile = create_test_profile("Food & Cooking", 10_000, 4.5, 3.0);
        let criteria = create_test_criteria("Fitness & Sports", "Over $50,000");
        let weights = ScoringWeights {
            category: 0.0,
            engagement: 50.0,
            budget: 0.0,
            reputation: 30.0,
            brand_values: 20.0,
        };

        let breakdown = calculate_match_score(&profile, &criteria, &weights, &ScoringRules::default());

        // 50 * 20/25 + 30 * 5/15 + 20
        assert!((breakdown.engagement - 40.0).abs() < 1e-9);
        assert!((breakdown.reputation - 10.0).abs() < 1e-9);
        assert_eq!(breakdown.score, 70);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let profile = create_test_profile("Fitness & Health", 280_000, 6.9, 4.8);
        let criteria = create_test_criteria("Fitness & Sports", "");
        let weights = ScoringWeights {
            category: 0.0,
            engagement: 0.0,
            budget: 0.0,
            reputation: 0.0,
            brand_values: 0.0,
        };

        let breakdown = calculate_match_score(&profile, &criteria, &weights, &ScoringRules::default());
        assert_eq!(breakdown.score, 0);
    }

    #[test]
    fn test_non_finite_inputs_stay_in_range() {
        let profile = create_test_profile("Technology", 0, f64::NAN, f64::NAN);
        let criteria = create_test_criteria("Technology & Electronics", "Under $5,000");

        let breakdown = score(&profile, &criteria);

        // NaN fails every threshold and lands on the floor tier
        assert_eq!(breakdown.engagement, 10.0);
        assert_eq!(breakdown.reputation, 5.0);
        assert!(breakdown.score <= 100);
    }
}
