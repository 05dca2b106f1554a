use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::ServiceProvider;
use crate::{
    api,
    config::{HostConfig, LogConfig},
};

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn initialize_tracing(log: &LogConfig) {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => builder.parse_lossy(directives),
        Err(_) => builder.parse_lossy(&log.level),
    };
    let enable_debug_logging = log.enable_debug_logging;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(enable_debug_logging)
                .with_line_number(enable_debug_logging)
                .with_thread_ids(enable_debug_logging)
                .with_target(enable_debug_logging)
                .with_filter(filter),
        )
        .init();
}

pub async fn initialize_web_host(host: &HostConfig, sp: ServiceProvider) -> anyhow::Result<()> {
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(|cfg| api::configure(cfg, &sp))
    })
    .bind((host.bind_address.to_owned(), host.bind_port))?;

    match server.run().await {
        Ok(_) => tracing::info!("Web server stopped successfully."),
        Err(e) => tracing::error!("Web server stopped with error: {e}"),
    }
    Ok(())
}
