use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Client, User};
use crate::database::repository::{ClientChanges, ClientRepository, ConnectionProbe, NewClient, NewUser, UserRepository};

/// Postgres-backed implementation of every repository trait
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1 OR email = $2 LIMIT 1")
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.password)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}

#[async_trait]
impl ClientRepository for PgStore {
    async fn insert(&self, client: NewClient) -> Result<Client, DatabaseError> {
        let client = sqlx::query_as::<_, Client>(
            "INSERT INTO clients \
             (username, email, nama_project, detail_project, total_harga, harga_dibayar, status_pembayaran) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(client.username)
        .bind(client.email)
        .bind(client.nama_project)
        .bind(client.detail_project)
        .bind(client.total_harga)
        .bind(client.harga_dibayar)
        .bind(client.status_pembayaran)
        .fetch_one(&self.pool)
        .await?;
        Ok(client)
    }

    async fn list(&self) -> Result<Vec<Client>, DatabaseError> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(clients)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Client>, DatabaseError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id_client = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(client)
    }

    async fn update(&self, id: Uuid, changes: ClientChanges) -> Result<Option<Client>, DatabaseError> {
        let client = sqlx::query_as::<_, Client>(
            "UPDATE clients SET \
                username = COALESCE($1, username), \
                email = COALESCE($2, email), \
                nama_project = COALESCE($3, nama_project), \
                detail_project = COALESCE($4, detail_project), \
                total_harga = COALESCE($5, total_harga), \
                harga_dibayar = COALESCE($6, harga_dibayar), \
                status_pembayaran = $7, \
                updated_at = NOW() \
             WHERE id_client = $8 RETURNING *",
        )
        .bind(changes.username)
        .bind(changes.email)
        .bind(changes.nama_project)
        .bind(changes.detail_project)
        .bind(changes.total_harga)
        .bind(changes.harga_dibayar)
        .bind(changes.status_pembayaran)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(client)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM clients WHERE id_client = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ConnectionProbe for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
