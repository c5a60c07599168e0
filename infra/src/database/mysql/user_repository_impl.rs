//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bb_core::domain::entities::user::{User, UserRole};
use bb_core::errors::DomainError;
use bb_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to get id: {}", e)))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::storage(format!("Failed to get role: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::storage(format!("Invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::storage(format!("Failed to get email: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::storage(format!("Failed to get name: {}", e)))?,
            role: UserRole::from_str_or_none(&role),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::storage(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::storage(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        // BINARY forces byte-wise comparison regardless of column collation;
        // the email is a case-sensitive match key.
        let query = r#"
            SELECT id, email, name, role, created_at, updated_at
            FROM users
            WHERE BINARY email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to find user by email: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, name, role, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to find user by id: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = r#"
            SELECT id, email, name, role, created_at, updated_at
            FROM users
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, email, name, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create user: {}", e)))?;

        Ok(user)
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<Option<User>, DomainError> {
        // MySQL reports zero affected rows for a no-change update, so
        // existence is checked explicitly instead of via rows_affected.
        let Some(mut user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let query = r#"
            UPDATE users
            SET role = ?, updated_at = ?
            WHERE id = ?
        "#;

        user.set_role(role);
        sqlx::query(query)
            .bind(user.role.as_str())
            .bind(user.updated_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update role: {}", e)))?;

        Ok(Some(user))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM users WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
