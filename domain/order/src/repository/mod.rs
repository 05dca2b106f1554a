mod order;
mod specification;

#[rustfmt::skip]
pub use {
    order::OrderRepo,
    specification::SpecificationRepo,
};
