//! Consultation request intake: create-only from the public surface

use actix_web::{HttpRequest, HttpResponse, Scope, post, web};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

use terralux_common::{AppError, Identity};
use terralux_persistence::entity::consultation_request;
use terralux_persistence::service::consultation;

pub fn routes() -> Scope {
    web::scope("/consultations").service(create_consultation)
}

/// Reduced response shape for a created request; internal lifecycle fields
/// stay off the public surface.
#[derive(Debug, Serialize)]
struct ConsultationCreated {
    id: i64,
    email: String,
    phone: String,
    vendor: Option<i64>,
    model: Option<i64>,
    message: String,
    created_at: chrono::NaiveDateTime,
}

impl From<consultation_request::Model> for ConsultationCreated {
    fn from(record: consultation_request::Model) -> Self {
        Self {
            id: record.id,
            email: record.email,
            phone: record.phone,
            vendor: record.vendor_id,
            model: record.model_id,
            message: record.message,
            created_at: record.created_at,
        }
    }
}

#[post("")]
async fn create_consultation(
    db: web::Data<DatabaseConnection>,
    body: web::Json<consultation::ConsultationData>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let user_id = Identity::from_request(&req).map(|identity| identity.user_id);
    let created = consultation::create(&db, body.into_inner(), user_id).await?;
    info!("consultation request {} from {}", created.id, created.email);
    Ok(HttpResponse::Created().json(ConsultationCreated::from(created)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use terralux_persistence::entity::enums::ConsultationStatus;

    use super::*;

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

    #[actix_web::test]
    async fn test_create_uses_the_reduced_response_shape() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 3,
                rows_affected: 1,
            }])
            .append_query_results([vec![stored_request()]])
            .into_connection();

        let app =
            test::init_service(App::new().app_data(web::Data::new(db)).service(routes())).await;

        let req = test::TestRequest::post()
            .uri("/consultations")
            .set_json(serde_json::json!({
                "email": "visitor@example.com",
                "vendor_id": 5,
                "message": "Interested in a dome."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["created_at", "email", "id", "message", "model", "phone", "vendor"]
        );
        assert_eq!(body["email"], "visitor@example.com");
        assert_eq!(body["vendor"], 5);
    }

    #[actix_web::test]
    async fn test_malformed_email_is_a_structured_rejection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let app =
            test::init_service(App::new().app_data(web::Data::new(db)).service(routes())).await;

        let req = test::TestRequest::post()
            .uri("/consultations")
            .set_json(serde_json::json!({
                "email": "not-an-email",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("invalid email"));
    }
}
