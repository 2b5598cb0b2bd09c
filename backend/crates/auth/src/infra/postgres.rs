//! PostgreSQL Repository Implementation
//!
//! Expects the `credentials` table from `database/migrations`. The
//! `UNIQUE` constraint on `email` is what actually prevents duplicate
//! accounts; a violation surfaces as `AuthError::DuplicateAccount`.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::AuthResult;

/// PostgreSQL-backed credential repository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for PgCredentialRepository {
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM credentials WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                created_at
            FROM credentials
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CredentialRow::into_credential))
    }

    async fn insert(&self, credential: &Credential) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO credentials (
                account_id,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(credential.account_id.as_uuid())
        .bind(credential.email.as_str())
        .bind(credential.password_hash.as_phc_string())
        .bind(credential.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CredentialRow {
    account_id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> Credential {
        Credential {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::new(self.email),
            // Parsed lazily: a bad value is reported when signin verifies it.
            password_hash: HashedPassword::from_stored(self.password_hash),
            created_at: self.created_at,
        }
    }
}
