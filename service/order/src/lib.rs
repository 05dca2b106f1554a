mod order;
mod specification;

#[rustfmt::skip]
pub use {
    order::OrderServiceImpl,
    specification::SpecificationServiceImpl,
};
