pub mod candidate;
pub mod catalog;
pub mod cost;
pub mod pricing;
pub mod resource;
pub mod specification;
pub mod user;
pub mod validation;

#[rustfmt::skip]
pub use {
    candidate::CandidateOrder,
    catalog::Catalog,
    cost::{CostBreakdown, OrderView, Quote},
    pricing::PricingConfig,
    resource::ResourceUsage,
    specification::{Capacity, Specification},
    user::UserInfo,
    validation::ValidationResult,
};
