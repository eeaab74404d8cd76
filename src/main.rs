use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use campaign_match::config::{LoggingSettings, Settings};
use campaign_match::core::{Matcher, ScoringRules};
use campaign_match::models::ScoringWeights;
use campaign_match::routes::{self, AppState, MatchLimits};
use campaign_match::services::InfluencerCatalog;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging
///
/// `RUST_LOG` wins over the configured level; `LOG_FORMAT` over the
/// configured format.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    init_tracing(
        settings
            .as_ref()
            .map(|s| &s.logging)
            .unwrap_or(&LoggingSettings::default()),
    );

    info!("Starting CampaignPro match service...");

    let settings = settings.map_err(|e| startup_error("Failed to load configuration", e))?;

    info!("Configuration loaded successfully");

    let catalog = InfluencerCatalog::load(&settings.catalog.path)
        .await
        .map_err(|e| startup_error("Failed to load influencer catalog", e))?;

    if catalog.is_empty() {
        tracing::warn!("Influencer catalog at {} is empty", settings.catalog.path);
    }

    info!("Influencer catalog loaded ({} influencers)", catalog.len());

    let rules = match &settings.scoring.rules_path {
        Some(path) => {
            info!("Loading scoring rules from {}", path);
            ScoringRules::from_path(path).map_err(|e| startup_error("Failed to load scoring rules", e))?
        }
        None => ScoringRules::default(),
    };

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights, rules).with_min_score(settings.min_score());

    info!(
        "Matcher initialized with weights: {:?}, min score {}",
        weights,
        matcher.min_score()
    );

    let app_state = AppState {
        catalog: Arc::new(catalog),
        matcher,
        limits: MatchLimits {
            default_limit: settings.default_limit(),
            max_limit: settings.max_limit(),
        },
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.workers();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
