pub mod repository;
mod service_provider;
mod web_server;

#[rustfmt::skip]
pub use {
    service_provider::ServiceProvider,
    web_server::{initialize_tracing, initialize_web_host},
};
