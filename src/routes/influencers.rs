use actix_web::{web, HttpResponse, Responder};
use crate::core::matches_filter;
use crate::models::{DiscoveryFilter, DiscoveryQuery, DiscoveryResponse, ErrorResponse, Facets};
use crate::routes::AppState;

/// Configure catalog discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/influencers", web::get().to(discover))
        .route("/influencers/{id}", web::get().to(get_influencer));
}

/// Discover influencers
///
/// GET /api/v1/influencers?search=&category=&platform=&followers=&engagement=&location=
///
/// Facets are computed over the whole catalog so the client can offer every
/// option regardless of the current filter.
async fn discover(
    state: web::Data<AppState>,
    query: web::Query<DiscoveryQuery>,
) -> impl Responder {
    let filter = DiscoveryFilter::from(query.into_inner());

    let influencers: Vec<_> = state
        .catalog
        .all()
        .iter()
        .filter(|profile| matches_filter(profile, &filter))
        .cloned()
        .collect();

    tracing::debug!("Discovery filter {:?} matched {} influencers", filter, influencers.len());

    HttpResponse::Ok().json(DiscoveryResponse {
        total: influencers.len(),
        influencers,
        facets: Facets::collect(state.catalog.all()),
    })
}

/// GET /api/v1/influencers/{id}
async fn get_influencer(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "Influencer not found",
            format!("No influencer with id '{}'", id),
            404,
        )),
    }
}
