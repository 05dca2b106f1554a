pub mod order;
pub mod ram_class;

#[rustfmt::skip]
pub use {
    order::Order,
    ram_class::RamClass,
};
