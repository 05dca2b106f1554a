use cloud_order_system::{
    config::AppConfig,
    infrastructure::{initialize_tracing, initialize_web_host, ServiceProvider},
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "config.yaml".to_owned());
    let config = AppConfig::load(&path)?;
    initialize_tracing(&config.log);
    tracing::info!(
        "Loaded {} RAM classes from {path}, serving on {}:{}.",
        config.ram_classes.len(),
        config.host.bind_address,
        config.host.bind_port
    );

    let sp = ServiceProvider::new(&config);
    initialize_web_host(&config.host, sp).await
}
