use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Client, User};
use crate::database::repository::{ClientChanges, ClientRepository, ConnectionProbe, NewClient, NewUser, UserRepository};

/// In-process store for router tests. Expects input the handlers have
/// already validated and brought to the stored scale.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    clients: RwLock<Vec<Client>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the database were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), DatabaseError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, DatabaseError> {
        self.check_online()?;
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == username || u.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        self.check_online()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, DatabaseError> {
        self.check_online()?;
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(DatabaseError::Duplicate("users_username_key".to_string()));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(DatabaseError::Duplicate("users_email_key".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password: user.password,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl ClientRepository for MemoryStore {
    async fn insert(&self, client: NewClient) -> Result<Client, DatabaseError> {
        self.check_online()?;
        let now = Utc::now();
        let client = Client {
            id_client: Uuid::new_v4(),
            username: client.username,
            email: client.email,
            nama_project: client.nama_project,
            detail_project: client.detail_project,
            total_harga: client.total_harga,
            harga_dibayar: client.harga_dibayar,
            status_pembayaran: client.status_pembayaran,
            created_at: now,
            updated_at: now,
        };
        self.clients.write().await.push(client.clone());
        Ok(client)
    }

    async fn list(&self) -> Result<Vec<Client>, DatabaseError> {
        self.check_online()?;
        let mut clients = self.clients.read().await.clone();
        // later inserts first when timestamps tie
        clients.reverse();
        clients.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(clients)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Client>, DatabaseError> {
        self.check_online()?;
        let clients = self.clients.read().await;
        Ok(clients.iter().find(|c| c.id_client == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: ClientChanges) -> Result<Option<Client>, DatabaseError> {
        self.check_online()?;
        let mut clients = self.clients.write().await;
        let Some(client) = clients.iter_mut().find(|c| c.id_client == id) else {
            return Ok(None);
        };

        if let Some(username) = changes.username {
            client.username = username;
        }
        if let Some(email) = changes.email {
            client.email = email;
        }
        if let Some(nama_project) = changes.nama_project {
            client.nama_project = nama_project;
        }
        if let Some(detail_project) = changes.detail_project {
            client.detail_project = detail_project;
        }
        if let Some(total_harga) = changes.total_harga {
            client.total_harga = total_harga;
        }
        if let Some(harga_dibayar) = changes.harga_dibayar {
            client.harga_dibayar = harga_dibayar;
        }
        client.status_pembayaran = changes.status_pembayaran;
        client.updated_at = Utc::now();

        Ok(Some(client.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        self.check_online()?;
        let mut clients = self.clients.write().await;
        let before = clients.len();
        clients.retain(|c| c.id_client != id);
        Ok(clients.len() < before)
    }
}

#[async_trait]
impl ConnectionProbe for MemoryStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.check_online()
    }
}
