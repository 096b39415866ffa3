#![forbid(unsafe_code)]

use std::any::Any;

use log::error;
use poem::middleware::CatchPanic;
use poem::{post, Endpoint, EndpointExt, Response, Route};

use crate::utils::config::MockConfig;
use crate::utils::errors::Errors;

pub mod consulta;
pub mod extractor;
pub mod templates;

// ---------------------------------------------------------------------------
// consulta_route:
// ---------------------------------------------------------------------------
/** Build the single POST route with the configuration attached as request
 * data and panics turned into the generic 500 response.
 */
pub fn consulta_route(cfg: MockConfig) -> impl Endpoint {
    let path = cfg.endpoint_path.clone();
    Route::new()
        .at(path, post(consulta::datos_del_contribuyente))
        .data(cfg)
        .with(catch_panic())
}

// ---------------------------------------------------------------------------
// catch_panic:
// ---------------------------------------------------------------------------
type PanicResponder = fn(Box<dyn Any + Send + 'static>) -> Response;

pub fn catch_panic() -> CatchPanic<PanicResponder> {
    CatchPanic::new().with_handler(panic_response as PanicResponder)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err.downcast_ref::<&str>().map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!("{}", Errors::Unhandled(detail));
    consulta::make_http_500()
}
