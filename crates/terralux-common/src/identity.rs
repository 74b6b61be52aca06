//! Request identity supplied by the upstream auth layer.
//!
//! Authentication itself is out of scope for this service. A trusted
//! reverse proxy (or the deployment's auth middleware) verifies the caller
//! and injects the resolved user id; the identity middleware in the server
//! crate stores it in the request extensions so handlers can attach it to
//! clicks and consultation requests.

use actix_web::{HttpMessage, HttpRequest};

/// Identity of an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
}

impl Identity {
    /// Read the identity stored in the request extensions, if any.
    ///
    /// Anonymous requests carry no identity and yield `None`.
    pub fn from_request(req: &HttpRequest) -> Option<Identity> {
        req.extensions().get::<Identity>().copied()
    }
}
