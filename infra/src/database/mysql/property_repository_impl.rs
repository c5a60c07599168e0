//! MySQL implementation of the PropertyRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bb_core::domain::entities::property::{Property, VerificationStatus};
use bb_core::errors::DomainError;
use bb_core::repositories::PropertyRepository;

/// MySQL implementation of PropertyRepository
///
/// Each write touches exactly one row; lifecycle sequences are
/// independent writes with no transaction spanning them.
pub struct MySqlPropertyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    /// Create a new MySQL property repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Property entity
    fn row_to_property(row: &sqlx::mysql::MySqlRow) -> Result<Property, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to get id: {}", e)))?;
        let status: String = row
            .try_get("verification_status")
            .map_err(|e| DomainError::storage(format!("Failed to get status: {}", e)))?;

        Ok(Property {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::storage(format!("Invalid property UUID: {}", e)))?,
            agent_email: row
                .try_get("agent_email")
                .map_err(|e| DomainError::storage(format!("Failed to get agent_email: {}", e)))?,
            title: row
                .try_get("title")
                .map_err(|e| DomainError::storage(format!("Failed to get title: {}", e)))?,
            location: row
                .try_get("location")
                .map_err(|e| DomainError::storage(format!("Failed to get location: {}", e)))?,
            verification_status: VerificationStatus::from_str_or_pending(&status),
            is_advertised: row
                .try_get("is_advertised")
                .map_err(|e| DomainError::storage(format!("Failed to get is_advertised: {}", e)))?,
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
impl PropertyRepository for MySqlPropertyRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let query = r#"
            SELECT id, agent_email, title, location, verification_status,
                   is_advertised, created_at, updated_at
            FROM properties
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to find property: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_property(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_agent_email(&self, email: &str) -> Result<Vec<Property>, DomainError> {
        let query = r#"
            SELECT id, agent_email, title, location, verification_status,
                   is_advertised, created_at, updated_at
            FROM properties
            WHERE BINARY agent_email = ?
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list agent properties: {}", e)))?;

        rows.iter().map(Self::row_to_property).collect()
    }

    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let query = r#"
            INSERT INTO properties (
                id, agent_email, title, location, verification_status,
                is_advertised, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(property.id.to_string())
            .bind(&property.agent_email)
            .bind(&property.title)
            .bind(&property.location)
            .bind(property.verification_status.as_str())
            .bind(property.is_advertised)
            .bind(property.created_at)
            .bind(property.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create property: {}", e)))?;

        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Option<Property>, DomainError> {
        // Existence is checked explicitly: MySQL reports zero affected
        // rows for a no-change update.
        if self.find_by_id(property.id).await?.is_none() {
            return Ok(None);
        }

        let query = r#"
            UPDATE properties
            SET title = ?, location = ?, verification_status = ?,
                is_advertised = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&property.title)
            .bind(&property.location)
            .bind(property.verification_status.as_str())
            .bind(property.is_advertised)
            .bind(property.updated_at)
            .bind(property.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update property: {}", e)))?;

        Ok(Some(property))
    }
}
