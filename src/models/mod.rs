pub mod coffee;
pub mod customer;
pub mod order;
