use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Client, PaymentStatus, User};

/// Validated input for a new user; `password` is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewClient {
    pub username: String,
    pub email: String,
    pub nama_project: String,
    pub detail_project: String,
    pub total_harga: Decimal,
    pub harga_dibayar: Decimal,
    pub status_pembayaran: PaymentStatus,
}

/// Fields to change on an existing client. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ClientChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub nama_project: Option<String>,
    pub detail_project: Option<String>,
    pub total_harga: Option<Decimal>,
    pub harga_dibayar: Option<Decimal>,
    pub status_pembayaran: PaymentStatus,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Any user holding either the username or the email
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, DatabaseError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    /// Fails with `DatabaseError::Duplicate` when username or email is taken
    async fn insert(&self, user: NewUser) -> Result<User, DatabaseError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn insert(&self, client: NewClient) -> Result<Client, DatabaseError>;

    /// Newest first
    async fn list(&self) -> Result<Vec<Client>, DatabaseError>;

    async fn find(&self, id: Uuid) -> Result<Option<Client>, DatabaseError>;

    /// `None` when no row matched
    async fn update(&self, id: Uuid, changes: ClientChanges) -> Result<Option<Client>, DatabaseError>;

    /// `false` when no row matched
    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError>;
}

#[async_trait]
pub trait ConnectionProbe: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;
}
