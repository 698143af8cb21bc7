pub mod coffee;
