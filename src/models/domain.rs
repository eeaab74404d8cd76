use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

/// Social platform an influencer publishes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Tiktok,
    Youtube,
    Twitter,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Twitter => "twitter",
        }
    }
}

/// Booking availability of an influencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Busy,
    Inactive,
}

/// Published rate card, in USD per deliverable
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rates {
    #[serde(default)]
    pub post: u32,
    #[serde(default)]
    pub story: u32,
    #[serde(default)]
    pub reel: u32,
}

/// Lifetime content metrics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub total_reach: u64,
    #[serde(default)]
    pub total_engagement: u64,
}

/// Influencer profile as held in the catalog
///
/// Only `category`, `followers`, `engagement_rate` and `rating` feed the
/// match score; everything else is carried for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub average_views: u64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub rates: Rates,
    #[serde(default)]
    pub metrics: ContentMetrics,
    #[serde(default)]
    pub campaigns: Vec<String>,
    #[serde(default)]
    pub status: AvailabilityStatus,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub completed_campaigns: u32,
}

/// Campaign criteria a marketer matches influencers against
///
/// `target_audience`, `campaign_type`, `content_style`, `location` and
/// `languages` are descriptive only and never change the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCriteria {
    #[serde(default)]
    pub product_category: String,
    #[serde(default, alias = "budget")]
    pub budget_range: String,
    #[serde(default)]
    pub brand_values: Vec<String>,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub campaign_type: String,
    #[serde(default)]
    pub content_style: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Points awarded per factor, plus the normalized score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub category: f64,
    pub engagement: f64,
    pub budget: f64,
    pub reputation: f64,
    pub brand_values: f64,
    pub max_points: f64,
    pub score: u8,
}

impl ScoreBreakdown {
    pub fn awarded(&self) -> f64 {
        self.category + self.engagement + self.budget + self.reputation + self.brand_values
    }

    /// Copy with every point value rounded to two decimals for display
    pub fn rounded(&self) -> Self {
        fn r(v: f64) -> f64 {
            (v * 100.0).round() / 100.0
        }

        Self {
            category: r(self.category),
            engagement: r(self.engagement),
            budget: r(self.budget),
            reputation: r(self.reputation),
            brand_values: r(self.brand_values),
            max_points: r(self.max_points),
            score: self.score,
        }
    }
}

/// Ranked match returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub influencer_id: String,
    pub name: String,
    pub username: String,
    pub category: String,
    pub platform: Platform,
    pub followers: u64,
    pub engagement_rate: f64,
    pub rating: f64,
    pub verified: bool,
    pub location: String,
    pub match_score: u8,
    pub breakdown: ScoreBreakdown,
}

impl ScoredMatch {
    pub fn new(profile: &InfluencerProfile, breakdown: ScoreBreakdown) -> Self {
        Self {
            influencer_id: profile.id.clone(),
            name: profile.name.clone(),
            username: profile.username.clone(),
            category: profile.category.clone(),
            platform: profile.platform,
            followers: profile.followers,
            engagement_rate: profile.engagement_rate,
            rating: profile.rating,
            verified: profile.verified,
            location: profile.location.clone(),
            match_score: breakdown.score,
            breakdown: breakdown.rounded(),
        }
    }
}

/// Maximum points per scoring factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub category: f64,
    pub engagement: f64,
    pub budget: f64,
    pub reputation: f64,
    pub brand_values: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.category + self.engagement + self.budget + self.reputation + self.brand_values
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: 30.0,
            engagement: 25.0,
            budget: 20.0,
            reputation: 15.0,
            brand_values: 10.0,
        }
    }
}

/// Follower-count bands used by the discovery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowerTier {
    Micro,
    Mid,
    Macro,
}

/// Engagement-rate bands used by the discovery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementTier {
    High,
    Medium,
    Low,
}

/// Catalog filter; every present field must match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "unconstrained_as_none")]
    pub platform: Option<Platform>,
    #[serde(default, deserialize_with = "unconstrained_as_none")]
    pub followers: Option<FollowerTier>,
    #[serde(default, deserialize_with = "unconstrained_as_none")]
    pub engagement: Option<EngagementTier>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Deserialize an optional enum choice where an empty value or `"all"`
/// (any case) means no constraint
pub fn unconstrained_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() && !value.trim().eq_ignore_ascii_case("all") => {
            T::deserialize(value.trim().to_ascii_lowercase().into_deserializer()).map(Some)
        }
        _ => Ok(None),
    }
}

/// Distinct attribute values present in a set of profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub platforms: Vec<Platform>,
    pub locations: Vec<String>,
}

/// Deliverable format, used by the performance predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Story,
    Reel,
    Video,
}

/// Predicted outcome of one piece of content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePrediction {
    pub predicted_likes: u64,
    pub predicted_comments: u64,
    pub predicted_shares: u64,
    pub predicted_reach: u64,
    pub confidence: f64,
}

/// Observed campaign performance, input to the campaign assessment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPerformance {
    pub engagement_rate: f64,
    pub conversion_rate: f64,
    pub roas: f64,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub duration_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Engagement,
    Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub suggestion: String,
    pub impact: Impact,
}

/// Rule-based campaign health report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAssessment {
    pub overall_score: u8,
    pub suggestions: Vec<Suggestion>,
    pub recommendations: Vec<String>,
}
