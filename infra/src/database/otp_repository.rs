//! MySQL implementation of the OTP record store
//!
//! Table `otp_verifications` holds one row per (email, application_id).
//! Single consumption relies on `UPDATE ... WHERE verified = FALSE` and the
//! affected row count, so concurrent verifiers cannot both win.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySql, Pool, Row};
use tracing::{debug, error};

use adm_core::domain::entities::otp_record::{OtpKey, OtpRecord};
use adm_core::errors::DomainError;
use adm_core::repositories::OtpRepository;

use crate::InfrastructureError;

/// MySQL-backed OTP record store
#[derive(Clone)]
pub struct MySqlOtpRepository {
    /// Database connection pool
    pool: Pool<MySql>,
}

impl MySqlOtpRepository {
    /// Create a new OTP repository
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    fn storage_error(operation: &str, key: &OtpKey, e: sqlx::Error) -> DomainError {
        error!(
            email = %key.masked_email(),
            application_id = %key.application_id,
            operation = operation,
            error = %e,
            "OTP store query failed"
        );
        InfrastructureError::Database(e).into()
    }

    fn map_row(row: &MySqlRow) -> Result<OtpRecord, sqlx::Error> {
        Ok(OtpRecord {
            email: row.try_get("email")?,
            application_id: row.try_get("application_id")?,
            code: row.try_get("otp")?,
            created_at: row.try_get("created_at")?,
            expires_at: row.try_get("expires_at")?,
            consumed: row.try_get("verified")?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn upsert(&self, record: OtpRecord) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO otp_verifications (
                email, application_id, otp, created_at, expires_at, verified
            ) VALUES (?, ?, ?, ?, ?, FALSE)
            ON DUPLICATE KEY UPDATE
                otp = VALUES(otp),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at),
                verified = FALSE
        "#;

        let key = record.key();
        sqlx::query(query)
            .bind(&record.email)
            .bind(&record.application_id)
            .bind(&record.code)
            .bind(record.created_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("store", &key, e))?;

        debug!(
            email = %key.masked_email(),
            application_id = %key.application_id,
            "Stored OTP record"
        );

        Ok(())
    }

    async fn find_active(&self, key: &OtpKey) -> Result<Option<OtpRecord>, DomainError> {
        let query = r#"
            SELECT email, application_id, otp, created_at, expires_at, verified
            FROM otp_verifications
            WHERE email = ? AND application_id = ? AND verified = FALSE
        "#;

        let row = sqlx::query(query)
            .bind(&key.email)
            .bind(&key.application_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::storage_error("retrieve", key, e))?;

        row.as_ref()
            .map(Self::map_row)
            .transpose()
            .map_err(|e| Self::storage_error("decode", key, e))
    }

    async fn conditional_consume(&self, key: &OtpKey, code: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE otp_verifications
            SET verified = TRUE
            WHERE email = ? AND application_id = ? AND otp = ? AND verified = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(&key.email)
            .bind(&key.application_id)
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("consume", key, e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_expired(&self, key: &OtpKey, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let query = r#"
            DELETE FROM otp_verifications
            WHERE email = ? AND application_id = ? AND expires_at < ?
        "#;

        let result = sqlx::query(query)
            .bind(&key.email)
            .bind(&key.application_id)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("delete", key, e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| InfrastructureError::Database(e).into())
    }
}
