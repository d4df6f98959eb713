use may_minihttp::Response;

use crate::dispatcher::HandlerResponse;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Write a dispatcher response to the wire.
///
/// Every response closes the connection, success or failure; a listing body
/// is a JSON document, an ingestion response has an empty body.
pub fn write_response(res: &mut Response, out: HandlerResponse) {
    res.status_code(out.status as usize, status_reason(out.status));
    res.header("Connection: close");
    if !out.body.is_empty() {
        res.header("Content-Type: application/json");
        res.body_vec(out.body.into_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(405), "Method Not Allowed");
        assert_eq!(status_reason(500), "Internal Server Error");
    }
}
