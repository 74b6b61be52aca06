//! Consultation request intake

use anyhow::Context;
use sea_orm::*;
use serde::{Deserialize, Serialize};

use terralux_common::TerraluxError;

use crate::entity::consultation_request;
use crate::entity::enums::ConsultationStatus;

// Stored column widths; intake rejects what the store would truncate.
const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 20;

/// Visitor-supplied fields for a consultation request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsultationData {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub vendor_id: Option<i64>,
    #[serde(default)]
    pub model_id: Option<i64>,
    pub message: String,
}

impl ConsultationData {
    /// Intake validation: email shape and the stored field widths.
    pub fn validate(&self) -> Result<(), TerraluxError> {
        if self.email.len() > MAX_EMAIL_LEN || !is_plausible_email(&self.email) {
            return Err(TerraluxError::IllegalArgument(format!(
                "invalid email address '{}'",
                self.email
            )));
        }
        if self.phone.len() > MAX_PHONE_LEN {
            return Err(TerraluxError::IllegalArgument(format!(
                "phone number exceeds {} characters",
                MAX_PHONE_LEN
            )));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

pub async fn create(
    db: &DatabaseConnection,
    data: ConsultationData,
    user_id: Option<i64>,
) -> anyhow::Result<consultation_request::Model> {
    data.validate()?;
    let now = chrono::Utc::now().naive_utc();

    let entity = consultation_request::ActiveModel {
        user_id: Set(user_id),
        email: Set(data.email),
        phone: Set(data.phone),
        vendor_id: Set(data.vendor_id),
        model_id: Set(data.model_id),
        message: Set(data.message),
        status: Set(ConsultationStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    entity
        .insert(db)
        .await
        .context("failed to create consultation request")
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    fn intake(email: &str, phone: &str) -> ConsultationData {
        ConsultationData {
            email: email.to_string(),
            phone: phone.to_string(),
            vendor_id: Some(5),
            model_id: None,
            message: "Interested in a dome.".to_string(),
        }
    }

    fn stored_request() -> consultation_request::Model {
        let now = chrono::Utc::now().naive_utc();
        consultation_request::Model {
            id: 3,
            user_id: None,
            email: "visitor@example.com".to_string(),
            phone: "".to_string(),
            vendor_id: Some(5),
            model_id: None,
            message: "Interested in a dome.".to_string(),
            status: ConsultationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 3,
                rows_affected: 1,
            }])
            .append_query_results([vec![stored_request()]])
            .into_connection();

        let created = create(&db, intake("visitor@example.com", ""), None)
            .await
            .unwrap();
        assert_eq!(created.status, ConsultationStatus::Pending);
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for email in ["not-an-email", "@example.com", "visitor@nodot", "a b@example.com"] {
            let err = create(&db, intake(email, ""), None).await.unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<TerraluxError>(),
                    Some(TerraluxError::IllegalArgument(_))
                ),
                "'{}' should be rejected",
                email
            );
        }
    }

    #[tokio::test]
    async fn test_overlong_phone_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = create(&db, intake("visitor@example.com", "+1 (555) 000-0000 ext 12345"), None)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TerraluxError>(),
            Some(TerraluxError::IllegalArgument(_))
        ));
    }
}
