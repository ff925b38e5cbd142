//! Upload handler module
//!
//! Placeholder for the blob upload pipeline: names the blob and answers with
//! the public URL it would be served from.

use crate::config::AppState;
use crate::http::response;
use crate::logger;
use crate::storage;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

/// Response envelope for the upload endpoint.
///
/// Exactly one of `url` and `error` is populated.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handle a POST to the upload endpoint.
///
/// The original filename is taken from the `filename` query parameter when
/// present; without one the blob gets a key with no extension.
///
/// TODO: stream the request body to the storage account under the generated
/// blob name; until then the handler only reserves a name and reports the
/// URL the blob would get.
pub fn handle_upload(query: Option<&str>, state: &AppState) -> Response<Full<Bytes>> {
    let original_name = filename_param(query).unwrap_or_default();
    let blob = storage::blob_name(&original_name);
    let url = storage::public_url(
        &state.config.base_url,
        &state.config.container_name,
        &blob,
    );

    let payload = UploadResponse {
        url: Some(url),
        error: None,
    };
    match serde_json::to_string(&payload) {
        Ok(body) => response::build_json_response(body),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize upload response: {e}"));
            response::build_500_response()
        }
    }
}

/// Extract the `filename` query parameter. Percent-decoding is not applied.
fn filename_param(query: Option<&str>) -> Option<String> {
    query?.split('&').find_map(|pair| {
        pair.split_once('=')
            .and_then(|(key, value)| (key == "filename").then(|| value.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_param() {
        assert_eq!(
            filename_param(Some("filename=photo.png")),
            Some("photo.png".to_string())
        );
        assert_eq!(
            filename_param(Some("a=1&filename=doc.pdf&b=2")),
            Some("doc.pdf".to_string())
        );
        assert_eq!(filename_param(Some("filename=")), Some(String::new()));
        assert_eq!(filename_param(Some("other=photo.png")), None);
        assert_eq!(filename_param(None), None);
    }

    #[test]
    fn test_upload_response_omits_unset_fields() {
        let payload = UploadResponse {
            url: Some("https://cdn.example.com/$web/x".to_string()),
            error: None,
        };
        let json = serde_json::to_string(&payload).expect("serialize");
        assert_eq!(json, r#"{"url":"https://cdn.example.com/$web/x"}"#);

        let payload = UploadResponse {
            url: None,
            error: Some("boom".to_string()),
        };
        let json = serde_json::to_string(&payload).expect("serialize");
        assert_eq!(json, r#"{"error":"boom"}"#);
    }
}
