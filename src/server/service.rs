use std::io;
use std::io::Read;
use std::sync::Arc;

use may_minihttp::{HttpService, Request, Response};
use tracing::{info, warn};

use super::response::write_response;
use crate::dispatcher::Dispatcher;

/// HTTP service bridging the transport to the dispatcher.
///
/// The transport's only jobs here are delivering (method, path, body) to the
/// core and writing the status and body back; all routing and persistence
/// decisions live behind the dispatcher.
#[derive(Clone)]
pub struct IntakeService {
    pub dispatcher: Arc<Dispatcher>,
}

impl IntakeService {
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl HttpService for IntakeService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let method = req.method().to_string();
        // the registry matches the request target verbatim, query string
        // included; "/?verbose=1" is not a known endpoint
        let path = req.path().to_string();

        info!(method = %method, path = %path, "Incoming request");

        // the body is opaque text; it is never parsed here
        let body = {
            let mut body_str = String::new();
            match req.body().read_to_string(&mut body_str) {
                Ok(_) => body_str,
                Err(e) => {
                    warn!(method = %method, path = %path, error = %e, "Request body unreadable, treating as empty");
                    String::new()
                }
            }
        };

        let out = self.dispatcher.dispatch(&method, &path, &body);
        write_response(res, out);
        Ok(())
    }
}
