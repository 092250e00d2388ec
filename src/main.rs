use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use philos_match::config::Settings;
use philos_match::core::Ranker;
use philos_match::routes::{self, AppState};
use philos_match::services::{AnalyticsSink, CompatibilityCache, TracingSink};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the level can come from it
    let settings = Settings::load();

    let log_settings = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_settings.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Philos compatibility service...");

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Configuration error: {}", e),
            ));
        }
    };

    info!("Configuration loaded successfully");

    let cache = if settings.cache.enabled {
        let capacity = settings.cache.capacity.unwrap_or(10_000);
        let ttl = settings.cache.ttl_secs.unwrap_or(300);
        info!("Score cache enabled ({} entries, TTL: {}s)", capacity, ttl);
        Arc::new(CompatibilityCache::new(capacity, ttl))
    } else {
        info!("Score cache disabled");
        Arc::new(CompatibilityCache::disabled())
    };

    let analytics: Option<Arc<dyn AnalyticsSink>> = if settings.analytics.enabled {
        Some(Arc::new(TracingSink))
    } else {
        None
    };

    let ranker = Ranker::new(settings.ranking.parallel_threshold());

    info!(
        "Ranker initialized (parallel threshold: {})",
        settings.ranking.parallel_threshold()
    );

    let app_state = AppState {
        ranker,
        cache,
        analytics,
        ranking: settings.ranking.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
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
