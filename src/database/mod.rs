pub mod manager;
pub mod models;
pub mod postgres;
pub mod repository;

#[cfg(test)]
pub mod memory;

pub use manager::{DatabaseError, DatabaseManager};
pub use postgres::PgStore;
pub use repository::{ClientChanges, ClientRepository, ConnectionProbe, NewClient, NewUser, UserRepository};
