pub mod about;
pub mod records;
pub mod schema;
pub mod server;
pub mod store;
