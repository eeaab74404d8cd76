// Integration tests for Campaign Match

use actix_web::test::{call_and_read_body_json, call_service, init_service, read_body_json, TestRequest};
use actix_web::{http::StatusCode, web, App};
use campaign_match::core::{Matcher, DEFAULT_LIMIT, DEFAULT_MIN_SCORE};
use campaign_match::models::{DiscoveryFilter, MatchCriteria, Platform};
use campaign_match::routes::{self, AppState, MatchLimits};
use campaign_match::services::InfluencerCatalog;
use serde_json::{json, Value};
use std::sync::Arc;

const CATALOG: &str = include_str!("../data/influencers.json");

fn catalog() -> InfluencerCatalog {
    InfluencerCatalog::from_json(CATALOG).expect("shipped catalog should parse")
}

fn fitness_criteria() -> MatchCriteria {
    MatchCriteria {
        product_category: "Fitness & Sports".to_string(),
        budget_range: "$15,000 - $50,000".to_string(),
        ..MatchCriteria::default()
    }
}

fn app_state() -> AppState {
    AppState {
        catalog: Arc::new(catalog()),
        matcher: Matcher::with_default_weights(),
        limits: MatchLimits::default(),
    }
}

macro_rules! init_app {
    () => {
        init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .app_data(routes::json_config())
                .app_data(routes::query_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[test]
fn test_integration_end_to_end_matching() {
    let matcher = Matcher::with_default_weights();
    let catalog = catalog();

    let result = matcher.find_matches(&fitness_criteria(), catalog.all(), None, DEFAULT_LIMIT);

    let ids: Vec<&str> = result.matches.iter().map(|m| m.influencer_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["disc_6", "inf_5", "inf_2", "disc_3", "disc_1", "disc_4", "inf_1", "inf_4"]
    );
    assert_eq!(result.total_candidates, 12);

    let scores: Vec<u8> = result.matches.iter().map(|m| m.match_score).collect();
    assert_eq!(scores, vec![100, 95, 90, 70, 65, 65, 65, 65]);
}

#[test]
fn test_top_n_from_pool_of_six() {
    let matcher = Matcher::with_default_weights();
    let pool: Vec<_> = catalog().all().iter().take(6).cloned().collect();

    let result = matcher.find_matches(&fitness_criteria(), &pool, None, DEFAULT_LIMIT);

    assert!(result.matches.len() <= 8);
    assert!(result.matches.iter().all(|m| m.match_score >= DEFAULT_MIN_SCORE));
    for pair in result.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score, "Matches not sorted by score");
    }

    let ids: Vec<&str> = result.matches.iter().map(|m| m.influencer_id.as_str()).collect();
    assert_eq!(ids, vec!["disc_6", "disc_3", "disc_1", "disc_4", "disc_2", "disc_5"]);
}

#[test]
fn test_weak_matches_are_dropped() {
    let matcher = Matcher::with_default_weights();
    let pool: Vec<_> = catalog().all().iter().take(6).cloned().collect();
    let criteria = MatchCriteria {
        product_category: "Technology & Electronics".to_string(),
        budget_range: "Over $50,000".to_string(),
        brand_values: vec!["sustainability".to_string()],
        ..MatchCriteria::default()
    };

    let result = matcher.find_matches(&criteria, &pool, None, DEFAULT_LIMIT);

    // Jake: 0 + 25 + 10 + 15 + 8 = 58
    assert!(result.matches.iter().all(|m| m.influencer_id != "disc_2"));
    assert_eq!(result.matches[0].influencer_id, "disc_4");
}

#[test]
fn test_filtered_matching() {
    let matcher = Matcher::with_default_weights();
    let catalog = catalog();
    let filter = DiscoveryFilter {
        platform: Some(Platform::Youtube),
        ..Default::default()
    };

    let result = matcher.find_matches(&fitness_criteria(), catalog.all(), Some(&filter), DEFAULT_LIMIT);

    assert!(result.matches.iter().all(|m| m.platform == Platform::Youtube));
    assert_eq!(result.matches[0].influencer_id, "inf_2");
}

#[actix_web::test]
async fn test_find_matches_endpoint() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "productCategory": "Fitness & Sports",
            "budget": "$15,000 - $50,000",
            "brandValues": [],
            "targetAudience": "Gym-goers 18-34"
        }))
        .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    let matches = body["matches"].as_array().unwrap();

    assert_eq!(matches.len(), 8);
    assert_eq!(matches[0]["influencerId"], "disc_6");
    assert_eq!(matches[0]["matchScore"], 100);
    assert_eq!(matches[0]["breakdown"]["category"], 30.0);
    assert_eq!(body["totalCandidates"], 12);
    assert!(body["requestId"].as_str().is_some_and(|id| !id.is_empty()));
}

#[actix_web::test]
async fn test_find_matches_limit_and_filter() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "productCategory": "Fitness & Sports",
            "budgetRange": "$15,000 - $50,000",
            "limit": 2,
            "filter": { "followers": "mid" }
        }))
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["influencerId"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["disc_6", "inf_5"]);
}

#[actix_web::test]
async fn test_find_matches_rejects_zero_limit() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "productCategory": "Fitness & Sports", "limit": 0 }))
        .to_request();
    let resp = call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
}

#[actix_web::test]
async fn test_score_endpoint() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({
            "influencerId": "disc_6",
            "criteria": {
                "productCategory": "Fitness & Sports",
                "budgetRange": "$15,000 - $50,000",
                "brandValues": ["authenticity"]
            }
        }))
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["matchScore"], 98);
    assert_eq!(body["breakdown"]["brandValues"], 8.0);
    assert_eq!(body["breakdown"]["maxPoints"], 100.0);
}

#[actix_web::test]
async fn test_score_unknown_influencer() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "influencerId": "nobody", "criteria": {} }))
        .to_request();
    let resp = call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_discovery_endpoint() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/v1/influencers?platform=youtube")
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 4);
    assert_eq!(body["facets"]["categories"].as_array().unwrap().len(), 9);
    assert_eq!(body["facets"]["platforms"], json!(["instagram", "youtube", "tiktok"]));

    let req = TestRequest::get()
        .uri("/api/v1/influencers?engagement=high&search=new%20york")
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body["influencers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["disc_3", "inf_3"]);
}

#[actix_web::test]
async fn test_discovery_all_means_unconstrained() {
    let app = init_app!();

    for query in ["platform=all", "followers=all", "engagement=ALL", "platform=&followers=", "platform=all&category=all"] {
        let req = TestRequest::get()
            .uri(&format!("/api/v1/influencers?{}", query))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "query {}", query);

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["total"], 12, "query {}", query);
    }
}

#[actix_web::test]
async fn test_find_matches_filter_accepts_all() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "productCategory": "Fitness & Sports",
            "budgetRange": "$15,000 - $50,000",
            "filter": { "platform": "all", "followers": "all", "engagement": "" }
        }))
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 12);
    assert_eq!(body["matches"].as_array().unwrap().len(), 8);
}

#[actix_web::test]
async fn test_discovery_rejects_unknown_platform() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/v1/influencers?platform=myspace")
        .to_request();
    let resp = call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_query");
}

#[actix_web::test]
async fn test_get_influencer() {
    let app = init_app!();

    let req = TestRequest::get().uri("/api/v1/influencers/inf_6").to_request();
    let body: Value = call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "@eco_luna");
    assert_eq!(body["completedCampaigns"], 8);

    let req = TestRequest::get().uri("/api/v1/influencers/missing").to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_performance_prediction_endpoint() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/insights/performance")
        .set_json(json!({ "influencerId": "inf_2", "contentType": "reel" }))
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["predictedLikes"], 1200);
    assert_eq!(body["predictedComments"], 150);
    assert_eq!(body["predictedShares"], 75);
    assert_eq!(body["predictedReach"], 267000);
    assert_eq!(body["confidence"], 0.75);
}

#[actix_web::test]
async fn test_campaign_assessment_endpoint() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/v1/insights/campaign")
        .set_json(json!({
            "engagementRate": 4.1,
            "conversionRate": 1.8,
            "roas": 3.2,
            "budget": 60000,
            "durationDays": 45
        }))
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["overallScore"], 75);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 1);
    assert_eq!(body["suggestions"][0]["type"], "conversion");
    assert_eq!(body["suggestions"][0]["impact"], "medium");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}
