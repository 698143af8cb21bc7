pub mod coffee;
pub mod customer;
pub mod health_check;
pub mod index;
pub mod order;
