// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AvailabilityStatus, CampaignAssessment, CampaignPerformance, ContentMetrics, ContentType,
    DiscoveryFilter, EngagementTier, Facets, FollowerTier, Impact, InfluencerProfile,
    MatchCriteria, PerformancePrediction, Platform, Rates, ScoreBreakdown, ScoredMatch,
    ScoringWeights, Suggestion, SuggestionKind,
};
pub use requests::{
    AssessCampaignRequest, DiscoveryQuery, FindMatchesRequest, PredictPerformanceRequest,
    ScoreInfluencerRequest,
};
pub use responses::{
    DiscoveryResponse, ErrorResponse, FindMatchesResponse, HealthResponse,
    ScoreInfluencerResponse,
};
