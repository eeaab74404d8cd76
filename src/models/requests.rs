use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{
    unconstrained_as_none, CampaignPerformance, ContentType, DiscoveryFilter, EngagementTier, FollowerTier,
    MatchCriteria, Platform,
};

/// Request to rank the catalog against campaign criteria
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesRequest {
    #[serde(flatten)]
    pub criteria: MatchCriteria,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub filter: Option<DiscoveryFilter>,
}

/// Request to score a single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInfluencerRequest {
    #[validate(length(min = 1))]
    pub influencer_id: String,
    #[serde(default)]
    pub criteria: MatchCriteria,
}

/// Discovery query string
///
/// GET /api/v1/influencers?search=..&category=..&platform=..&followers=..&engagement=..&location=..
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "unconstrained_as_none")]
    pub platform: Option<Platform>,
    #[serde(default, deserialize_with = "unconstrained_as_none")]
    pub followers: Option<FollowerTier>,
    #[serde(default, deserialize_with = "unconstrained_as_none")]
    pub engagement: Option<EngagementTier>,
    pub location: Option<String>,
}

impl From<DiscoveryQuery> for DiscoveryFilter {
    fn from(query: DiscoveryQuery) -> Self {
        DiscoveryFilter {
            search: query.search,
            category: query.category,
            platform: query.platform,
            followers: query.followers,
            engagement: query.engagement,
            location: query.location,
        }
    }
}

/// Request to predict content performance for one influencer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PredictPerformanceRequest {
    #[validate(length(min = 1))]
    pub influencer_id: String,
    pub content_type: ContentType,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub average_engagement: Option<f64>,
}

/// Request to assess a running campaign
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssessCampaignRequest {
    #[validate(range(min = 0.0))]
    pub engagement_rate: f64,
    #[validate(range(min = 0.0))]
    pub conversion_rate: f64,
    #[validate(range(min = 0.0))]
    pub roas: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub duration_days: u32,
}

impl From<&AssessCampaignRequest> for CampaignPerformance {
    fn from(req: &AssessCampaignRequest) -> Self {
        CampaignPerformance {
            engagement_rate: req.engagement_rate,
            conversion_rate: req.conversion_rate,
            roas: req.roas,
            budget: req.budget,
            duration_days: req.duration_days,
        }
    }
}
