use actix_cors::Cors;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer};
use anyhow::Context;
use retail_boss::config::{Config, LogFormat};
use retail_boss::middleware::{ErrorHandler, RequestId, REQUEST_ID_HEADER};
use retail_boss::AppServices;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting {}", config.app.name);
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        tax_mode = %config.billing.tax_mode,
        gst_rate = %config.billing.gst_rate,
        seed_catalog = config.billing.seed_catalog,
        "Billing configured"
    );
    tracing::info!("CORS configured for origins: {:?}", config.cors.allowed_origins);

    let services = AppServices::from_config(&config).context("Failed to build services")?;

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let origins = config.cors.allowed_origins.clone();
    let server = HttpServer::new(move || {
        let services = services.clone();
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .expose_headers([REQUEST_ID_HEADER])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(ErrorHandler)
            .wrap(cors)
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(RequestId)
            .configure(move |cfg| services.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server error")
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("retail_boss={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
