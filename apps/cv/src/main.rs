use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_cv::config::Config;
use portfolio_cv::contact::mailer::ContactMailer;
use portfolio_cv::contact::rate_limit::RateLimiter;
use portfolio_cv::contact::ContactService;
use portfolio_cv::load_resume;
use portfolio_cv::routes::build_router;
use portfolio_cv::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_cv={},api={}", &config.rust_log, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio CV API v{}", env!("CARGO_PKG_VERSION"));

    let resume = load_resume(&config)?;
    info!(
        name = %resume.profile.name,
        projects = resume.projects.len(),
        "Résumé loaded"
    );

    let mailer = match &config.smtp {
        Some(smtp) => {
            let recipient = config
                .contact_email
                .clone()
                .unwrap_or_else(|| resume.profile.email.clone());
            let mailer = ContactMailer::from_config(smtp, &recipient)?;
            info!(host = %smtp.host, %recipient, "SMTP mailer initialized");
            Some(mailer)
        }
        None => {
            warn!("SMTP_USER / SMTP_APP_PASSWORD not set; contact form disabled");
            None
        }
    };
    let contact = ContactService::new(RateLimiter::new(config.contact_cooldown), mailer);

    let state = AppState {
        resume,
        contact: Arc::new(contact),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
