pub mod messages;
pub mod products;
