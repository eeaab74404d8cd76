use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, ScoreInfluencerRequest, ScoreInfluencerResponse};
use crate::routes::AppState;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/score", web::post().to(score_influencer));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "productCategory": "Fitness & Sports",
///   "budgetRange": "$15,000 - $50,000",
///   "brandValues": ["sustainability"],
///   "limit": 8,
///   "filter": { "platform": "instagram" }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit);

    tracing::info!(
        "Finding matches request_id={} category={:?} budget={:?} limit={}",
        request_id,
        req.criteria.product_category,
        req.criteria.budget_range,
        limit
    );

    let result = state.matcher.find_matches(
        &req.criteria,
        state.catalog.all(),
        req.filter.as_ref(),
        limit,
    );

    let response = FindMatchesResponse {
        request_id,
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for request {} (from {} candidates)",
        response.matches.len(),
        response.request_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Score one influencer endpoint
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "influencerId": "disc_6",
///   "criteria": { "productCategory": "Fitness & Sports", "budgetRange": "$15,000 - $50,000" }
/// }
/// ```
async fn score_influencer(
    state: web::Data<AppState>,
    req: web::Json<ScoreInfluencerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let Some(profile) = state.catalog.get(&req.influencer_id) else {
        tracing::debug!("Score requested for unknown influencer {}", req.influencer_id);
        return HttpResponse::NotFound().json(ErrorResponse::new(
            "Influencer not found",
            format!("No influencer with id '{}'", req.influencer_id),
            404,
        ));
    };

    let breakdown = state.matcher.score(profile, &req.criteria);

    HttpResponse::Ok().json(ScoreInfluencerResponse {
        influencer_id: profile.id.clone(),
        match_score: breakdown.score,
        breakdown: breakdown.rounded(),
    })
}
