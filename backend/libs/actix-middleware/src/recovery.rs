//! Panic recovery middleware
//!
//! Converts a panic raised while handling a request into a
//! `500 {"error": "Internal Server Error"}` response. The panic payload is
//! logged; the client only ever sees the generic body.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::Method,
    Error, HttpResponse,
};
use futures::future::{FutureExt, LocalBoxFuture};
use std::any::Any;
use std::future::{ready, Ready};
use std::panic::{self, AssertUnwindSafe};

/// Body returned for every recovered panic
pub const RECOVERED_ERROR_MESSAGE: &str = "Internal Server Error";

/// Middleware that turns handler panics into 500 responses
#[derive(Clone, Default)]
pub struct Recovery;

impl<S, B> Transform<S, ServiceRequest> for Recovery
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RecoveryService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RecoveryService { service }))
    }
}

pub struct RecoveryService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RecoveryService<S>
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
        // The request is not cloned: routing needs unique ownership of it.
        let method = req.method().clone();
        let path = req.path().to_string();

        let call = panic::catch_unwind(AssertUnwindSafe(|| self.service.call(req)));

        Box::pin(async move {
            let fut = match call {
                Ok(fut) => fut,
                Err(payload) => return Err(recovered(&method, &path, payload)),
            };

            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(result) => result,
                Err(payload) => Err(recovered(&method, &path, payload)),
            }
        })
    }
}

fn recovered(method: &Method, path: &str, payload: Box<dyn Any + Send>) -> Error {
    tracing::error!(
        method = %method,
        path = %path,
        panic = %panic_message(payload.as_ref()),
        "Recovered from panic while handling request"
    );

    let response = HttpResponse::InternalServerError()
        .json(serde_json::json!({ "error": RECOVERED_ERROR_MESSAGE }));
    InternalError::from_response(RECOVERED_ERROR_MESSAGE, response).into()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
