use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{assess_campaign, predict_performance};
use crate::models::{AssessCampaignRequest, CampaignPerformance, ErrorResponse, PredictPerformanceRequest};
use crate::routes::AppState;

/// Configure rule-based insight routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/insights/performance", web::post().to(predict))
        .route("/insights/campaign", web::post().to(assess));
}

/// Predict content performance
///
/// POST /api/v1/insights/performance
///
/// Request body:
/// ```json
/// { "influencerId": "disc_3", "contentType": "reel", "averageEngagement": 2400 }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictPerformanceRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let Some(profile) = state.catalog.get(&req.influencer_id) else {
        return HttpResponse::NotFound().json(ErrorResponse::new(
            "Influencer not found",
            format!("No influencer with id '{}'", req.influencer_id),
            404,
        ));
    };

    let prediction = predict_performance(profile.followers, req.average_engagement, req.content_type);

    tracing::debug!("Predicted {:?} for {} ({:?})", prediction, profile.id, req.content_type);

    HttpResponse::Ok().json(prediction)
}

/// Assess a campaign
///
/// POST /api/v1/insights/campaign
///
/// Request body:
/// ```json
/// { "engagementRate": 4.1, "conversionRate": 1.8, "roas": 3.2, "budget": 60000, "durationDays": 45 }
/// ```
async fn assess(req: web::Json<AssessCampaignRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let assessment = assess_campaign(&CampaignPerformance::from(&*req));

    HttpResponse::Ok().json(assessment)
}
