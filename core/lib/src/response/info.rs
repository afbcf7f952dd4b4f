use crate::http::Status;
use crate::response::Response;

/// Classifies a response by its status code.
///
/// `ResponseInfo` borrows the response it inspects; the classification
/// methods are pure and may be called any number of times.
///
/// ```rust
/// use responser::http::Status;
/// use responser::response::{Response, ResponseInfo};
///
/// let response = Response::build().status(Status::Forbidden).finalize();
/// let info = ResponseInfo::new(&response);
///
/// assert!(info.is_forbidden());
/// assert!(info.is_client_error());
/// assert!(!info.is_ok());
/// ```
#[derive(Debug)]
pub struct ResponseInfo<'r> {
    response: &'r Response,
}

impl<'r> ResponseInfo<'r> {
    /// Creates a new `ResponseInfo` for `response`.
    pub fn new(response: &'r Response) -> ResponseInfo<'r> {
        ResponseInfo { response }
    }

    #[inline]
    fn status(&self) -> Status {
        self.response.status()
    }

    /// If the response is informational: [100, 200).
    pub fn is_informational(&self) -> bool {
        self.status().class().is_informational()
    }

    /// If the response is successful: [200, 300).
    pub fn is_successful(&self) -> bool {
        self.status().class().is_success()
    }

    /// If the response is a redirection: [300, 400).
    pub fn is_redirection(&self) -> bool {
        self.status().class().is_redirection()
    }

    /// If the response is a client error: [400, 500).
    pub fn is_client_error(&self) -> bool {
        self.status().class().is_client_error()
    }

    /// If the response is a server error: [500, 600).
    pub fn is_server_error(&self) -> bool {
        self.status().class().is_server_error()
    }

    /// If the response is `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.status().code == 200
    }

    /// If the response is `403 Forbidden`.
    pub fn is_forbidden(&self) -> bool {
        self.status().code == 403
    }

    /// If the response is `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status().code == 404
    }

    /// If the response's status code is any of `codes`.
    pub fn is_code(&self, codes: &[u16]) -> bool {
        codes.contains(&self.status().code)
    }
}
