// Identity middleware for Actix-web
// Authentication is delegated to the deployment's auth layer; a trusted
// reverse proxy verifies the caller and forwards the resolved user id in
// the x-auth-user-id header. This middleware lifts that header into an
// Identity extension; requests without it stay anonymous.

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};
use futures::future::LocalBoxFuture;

use terralux_common::Identity;

const AUTH_USER_HEADER: &str = "x-auth-user-id";

/// Identity middleware transformer
pub struct IdentityExtractor;

impl<S, B> Transform<S, ServiceRequest> for IdentityExtractor
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentityExtractorMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(IdentityExtractorMiddleware { service })
    }
}

pub struct IdentityExtractorMiddleware<S> {
    service: S,
}

fn extract_user_id(req: &ServiceRequest) -> Option<i64> {
    req.headers()
        .get(AUTH_USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
}

impl<S, B> Service<ServiceRequest> for IdentityExtractorMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(user_id) = extract_user_id(&req) {
            req.extensions_mut().insert(Identity { user_id });
        }

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpRequest, HttpResponse, test, web};

    use super::*;

    async fn whoami(req: HttpRequest) -> HttpResponse {
        match Identity::from_request(&req) {
            Some(identity) => HttpResponse::Ok().body(identity.user_id.to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_header_becomes_identity() {
        let app = test::init_service(
            App::new()
                .wrap(IdentityExtractor)
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTH_USER_HEADER, "42"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "42");
    }

    #[actix_web::test]
    async fn test_missing_header_stays_anonymous() {
        let app = test::init_service(
            App::new()
                .wrap(IdentityExtractor)
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }

    #[actix_web::test]
    async fn test_garbage_header_stays_anonymous() {
        let app = test::init_service(
            App::new()
                .wrap(IdentityExtractor)
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTH_USER_HEADER, "not-a-number"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }
}
