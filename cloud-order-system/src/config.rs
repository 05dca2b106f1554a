use domain_order::model::{
    entity::RamClass,
    vo::{Capacity, Catalog, PricingConfig},
};
use serde::Deserialize;

/// Prefix of environment overrides, e.g. `CLOUD_ORDER__HOST__BIND_PORT=8080`.
const ENV_PREFIX: &str = "CLOUD_ORDER";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub log: LogConfig,
    pub pricing: PricingConfig,
    /// RAM classes in display order. The first one is preselected on the order form.
    pub ram_classes: Vec<RamClass>,
    pub capacity: Capacity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    pub bind_address: String,
    pub bind_port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_owned(),
            bind_port: 3001,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Print file, line, thread and target of every event.
    #[serde(default)]
    pub enable_debug_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            enable_debug_logging: false,
        }
    }
}

impl AppConfig {
    /// Read `path` (any format the `config` crate knows, yaml by default) and
    /// apply environment overrides on top.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let app_config: Self = ::config::Config::builder()
            .add_source(::config::File::with_name(path))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        app_config.check()?;
        Ok(app_config)
    }

    /// Reject configurations the pricing engine cannot work with.
    pub fn check(&self) -> anyhow::Result<()> {
        self.pricing.ensure_consistent()?;
        if self.ram_classes.is_empty() {
            anyhow::bail!("At least one RAM class must be configured.");
        }
        let mut ids = self.ram_classes.iter().map(|class| class.id).collect::<Vec<_>>();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            anyhow::bail!("RAM class id {} is configured twice.", pair[0]);
        }
        Catalog::new(self.ram_classes.clone()).ensure_consistent()?;
        Ok(())
    }
}
