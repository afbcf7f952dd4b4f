use std::fmt;

/// Enumeration of HTTP status classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// Status codes in [100, 200).
    Informational,
    /// Status codes in [200, 300).
    Success,
    /// Status codes in [300, 400).
    Redirection,
    /// Status codes in [400, 500).
    ClientError,
    /// Status codes in [500, 600).
    ServerError,
    /// Status codes outside of [100, 600).
    Unknown,
}

macro_rules! class_check_fn {
    ($func:ident, $type:expr, $variant:ident) => (
        /// Returns `true` if `self` is a `StatusClass` of
        #[doc=$type]
        /// Returns `false` otherwise.
        #[inline(always)]
        pub fn $func(&self) -> bool {
            *self == StatusClass::$variant
        }
    )
}

impl StatusClass {
    class_check_fn!(is_informational, "`Informational` (1XX).", Informational);
    class_check_fn!(is_success, "`Success` (2XX).", Success);
    class_check_fn!(is_redirection, "`Redirection` (3XX).", Redirection);
    class_check_fn!(is_client_error, "`ClientError` (4XX).", ClientError);
    class_check_fn!(is_server_error, "`ServerError` (5XX).", ServerError);
    class_check_fn!(is_unknown, "`Unknown`.", Unknown);
}

/// Structure representing an HTTP status: an integer code.
///
/// A `Status` should rarely be created directly. Instead, an associated
/// constant should be used; one is declared for every defined status below.
/// To create a status with a code not declared here, use [`Status::new()`].
///
/// ```rust
/// use responser_http::Status;
///
/// let not_found = Status::NotFound;
/// assert_eq!(not_found.code, 404);
/// assert_eq!(not_found, Status::new(404));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status {
    /// The HTTP status code associated with this status.
    pub code: u16,
}

macro_rules! ctrs {
    ($($code:literal, $name:ident => $reason:literal),+) => {
        $(
            #[doc = concat!("[`Status`] with code <b>", stringify!($code), "</b>.")]
            #[allow(non_upper_case_globals)]
            pub const $name: Status = Status { code: $code };
        )+

        /// Returns a `Status` given a standard status code `code`. If `code`
        /// is not a known status code, `None` is returned.
        ///
        /// ```rust
        /// use responser_http::Status;
        ///
        /// assert_eq!(Status::from_code(404), Some(Status::NotFound));
        /// assert_eq!(Status::from_code(600), None);
        /// ```
        pub const fn from_code(code: u16) -> Option<Status> {
            match code {
                $($code => Some(Status::$name),)+
                _ => None,
            }
        }

        /// Returns the canonical reason phrase if `self` corresponds to a
        /// canonical, known status code. Otherwise, returns `None`.
        ///
        /// ```rust
        /// use responser_http::Status;
        ///
        /// assert_eq!(Status::Ok.reason(), Some("OK"));
        /// assert_eq!(Status::new(599).reason(), None);
        /// ```
        pub const fn reason(&self) -> Option<&'static str> {
            match self.code {
                $($code => Some($reason),)+
                _ => None,
            }
        }
    };
}

impl Status {
    /// Creates a new `Status` with `code`. This should be used _only_ to
    /// construct non-standard HTTP statuses. Use an associated constant for
    /// standard statuses.
    ///
    /// ```rust
    /// use responser_http::Status;
    ///
    /// let custom = Status::new(299);
    /// assert_eq!(custom.code, 299);
    /// ```
    pub const fn new(code: u16) -> Status {
        Status { code }
    }

    /// Returns the class of a given status.
    ///
    /// ```rust
    /// use responser_http::{Status, StatusClass};
    ///
    /// assert_eq!(Status::Forbidden.class(), StatusClass::ClientError);
    /// assert_eq!(Status::new(600).class(), StatusClass::Unknown);
    /// ```
    pub const fn class(self) -> StatusClass {
        match self.code / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Success,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            5 => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }

    ctrs! {
        100, Continue => "Continue",
        101, SwitchingProtocols => "Switching Protocols",
        200, Ok => "OK",
        201, Created => "Created",
        202, Accepted => "Accepted",
        204, NoContent => "No Content",
        206, PartialContent => "Partial Content",
        301, MovedPermanently => "Moved Permanently",
        302, Found => "Found",
        303, SeeOther => "See Other",
        304, NotModified => "Not Modified",
        307, TemporaryRedirect => "Temporary Redirect",
        308, PermanentRedirect => "Permanent Redirect",
        400, BadRequest => "Bad Request",
        401, Unauthorized => "Unauthorized",
        403, Forbidden => "Forbidden",
        404, NotFound => "Not Found",
        405, MethodNotAllowed => "Method Not Allowed",
        406, NotAcceptable => "Not Acceptable",
        409, Conflict => "Conflict",
        410, Gone => "Gone",
        412, PreconditionFailed => "Precondition Failed",
        413, PayloadTooLarge => "Payload Too Large",
        415, UnsupportedMediaType => "Unsupported Media Type",
        416, RangeNotSatisfiable => "Range Not Satisfiable",
        422, UnprocessableEntity => "Unprocessable Entity",
        429, TooManyRequests => "Too Many Requests",
        500, InternalServerError => "Internal Server Error",
        501, NotImplemented => "Not Implemented",
        502, BadGateway => "Bad Gateway",
        503, ServiceUnavailable => "Service Unavailable",
        504, GatewayTimeout => "Gateway Timeout"
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {}", self.code, reason),
            None => write!(f, "{}", self.code),
        }
    }
}

impl Default for Status {
    fn default() -> Status {
        Status::Ok
    }
}
