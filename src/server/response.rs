use may_minihttp::Response;
use serde_json::Value;
use tracing::error;

/// Reason phrase for the status line. Statuses not listed get `Unknown`.
pub(crate) fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Write a handler result. A `Null` body with status 204 is sent without content.
pub fn write_handler_response(res: &mut Response, status: u16, body: Value) {
    res.status_code(status as usize, status_reason(status));
    if status == 204 && body.is_null() {
        return;
    }
    match serde_json::to_vec(&body) {
        Ok(bytes) => {
            res.header("Content-Type: application/json");
            res.body_vec(bytes);
        }
        Err(e) => {
            error!(error = %e, "Response serialization failed");
            write_json_error(
                res,
                500,
                serde_json::json!({ "error": "Response serialization failed" }),
            );
        }
    }
}

pub fn write_json_error(res: &mut Response, status: u16, body: Value) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}

/// Write a non-JSON body (`/metrics`, `/openapi.yaml`).
pub fn write_text(res: &mut Response, content_type_header: &'static str, body: Vec<u8>) {
    res.status_code(200, "OK");
    res.header(content_type_header);
    res.body_vec(body);
}
