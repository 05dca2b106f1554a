mod order;
mod specification;

#[rustfmt::skip]
pub use {
    order::OrderService,
    specification::SpecificationService,
};
