//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation and dispatch to the upload handler.

mod upload;

pub use upload::UploadResponse;

use crate::config::AppState;
use crate::http::response;
use crate::logger;
use crate::logger::AccessLogEntry;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;

/// The single registered route.
const UPLOAD_PATH: &str = "/api/upload";

/// Main entry point for HTTP request handling
///
/// Dispatch: POST on the upload route reaches the upload handler, any other
/// method there is answered with 405, and unregistered paths with 404. The
/// request body is never read.
pub fn handle_request<B>(
    req: Request<B>,
    state: &AppState,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.http_version = version_label(req.version()).to_string();

    let response = match (req.method(), req.uri().path()) {
        (&Method::POST, UPLOAD_PATH) => {
            logger::log_upload_received();
            upload::handle_upload(req.uri().query(), state)
        }
        (method, UPLOAD_PATH) => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            response::build_405_response()
        }
        _ => response::build_404_response(),
    };

    entry.status = response.status().as_u16();
    entry.body_bytes =
        usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX);
    logger::log_access(&entry);

    Ok(response)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
