mod order;
mod specification;

#[rustfmt::skip]
pub use {
    order::MemoryOrderRepo,
    specification::ConfigSpecificationRepo,
};
