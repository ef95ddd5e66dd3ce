use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{JsonPayloadError, QueryPayloadError},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use super::request_id::RequestIdValue;
use crate::core::AppError;

/// Middleware that logs failed requests: 5xx at error level, 4xx at warn
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Ok(res) => log_failure(res),
                Err(err) => tracing::error!(error = %err, "Request error"),
            }

            result
        })
    }
}

fn log_failure<B>(res: &ServiceResponse<B>) {
    let status = res.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return;
    }

    let request_id = res
        .request()
        .extensions()
        .get::<RequestIdValue>()
        .map(|v| v.0.clone())
        .unwrap_or_default();
    let error = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_default();
    let path = res.request().path().to_string();

    if status.is_server_error() {
        tracing::error!(request_id = %request_id, path = %path, status = status.as_u16(), error = %error, "Request failed");
    } else {
        tracing::warn!(request_id = %request_id, path = %path, status = status.as_u16(), error = %error, "Request rejected");
    }
}

/// Malformed JSON bodies become 400 responses in the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Bad query strings become 400 responses in the standard error shape
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid query string: {}", err)).into()
}
