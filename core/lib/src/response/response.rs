use std::io::{self, Read};
use std::{fmt, mem};

use crate::http::{Header, HeaderMap, Status};

/// A sized response body: a readable stream with a known byte length.
///
/// The length is declared up front by whoever constructs the body; it is not
/// validated against the stream. Bodies are consumed when read.
pub struct Body {
    len: u64,
    reader: Box<dyn Read>,
}

impl Body {
    /// Creates a body from `reader`, declaring its length as `len` bytes.
    pub fn sized<R: Read + 'static>(reader: R, len: u64) -> Body {
        Body { len, reader: Box::new(reader) }
    }

    /// The declared length of this body in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the declared length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consumes `self`, returning the underlying reader.
    #[inline]
    pub fn into_reader(self) -> Box<dyn Read> {
        self.reader
    }

    /// Consumes `self` and reads the entire stream into a byte vector.
    pub fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.len as usize);
        self.reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({} bytes)", self.len)
    }
}

/// An HTTP response: a status, an ordered map of headers, and an optional
/// sized body.
///
/// A `Response` is assembled incrementally through a [`Builder`], obtained via
/// [`Response::build()`], and finalized into a `Response`:
///
/// ```rust
/// use responser::http::Status;
/// use responser::response::Response;
///
/// let response = Response::build()
///     .status(Status::NotFound)
///     .raw_header("X-Reason", "unknown route")
///     .finalize();
///
/// assert_eq!(response.status(), Status::NotFound);
/// assert_eq!(response.headers().get_one("x-reason"), Some("unknown route"));
/// ```
#[derive(Debug, Default)]
pub struct Response {
    status: Status,
    headers: HeaderMap,
    body: Option<Body>,
}

impl Response {
    /// Creates a new, empty `Response` with status `200 OK` and no headers.
    #[inline]
    pub fn new() -> Response {
        Response::default()
    }

    /// Returns a `Builder` with a base of a new, empty response.
    #[inline]
    pub fn build() -> Builder {
        Response::build_from(Response::new())
    }

    /// Returns a `Builder` with a base of `other`.
    #[inline]
    pub fn build_from(other: Response) -> Builder {
        Builder::new(other)
    }

    /// Returns the status of `self`.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Sets the status of `self` to `status`.
    #[inline]
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Returns the headers of `self`.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Sets the header `header` in `self`, replacing any header with the same
    /// name that already exists. Returns `true` if the header was newly added
    /// and `false` if it replaced an existing one.
    #[inline]
    pub fn set_header<H: Into<Header>>(&mut self, header: H) -> bool {
        self.headers.replace(header)
    }

    /// Sets a header with name `name` and value `value`, replacing any header
    /// with the same name. Aliases `set_header(Header::new(name, value))`.
    #[inline]
    pub fn set_raw_header<N, V>(&mut self, name: N, value: V) -> bool
        where N: Into<std::borrow::Cow<'static, str>>,
              V: Into<std::borrow::Cow<'static, str>>
    {
        self.set_header(Header::new(name, value))
    }

    /// Adds `header` to `self`, joining it with any headers with the same
    /// name that already exist.
    #[inline]
    pub fn adjoin_header<H: Into<Header>>(&mut self, header: H) {
        self.headers.add(header)
    }

    /// Removes all headers with the name `name`.
    #[inline]
    pub fn remove_header(&mut self, name: &str) {
        self.headers.remove(name);
    }

    /// Returns the Content-Type header value of `self`, if one is set.
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get_one("Content-Type")
    }

    /// Returns a borrow of the body of `self`, if one is set.
    #[inline]
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Takes the body out of `self`, leaving the response without one.
    #[inline]
    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }

    /// Sets the body of `self` to be `reader` with a declared length of `len`
    /// bytes.
    #[inline]
    pub fn set_sized_body<R: Read + 'static>(&mut self, len: u64, reader: R) {
        self.body = Some(Body::sized(reader, len));
    }
}

/// Builds a [`Response`] incrementally.
///
/// The methods all take and return `&mut self` so that calls chain; the draft
/// is extracted with [`Builder::finalize()`] or [`Builder::ok()`].
pub struct Builder {
    response: Response,
}

impl Builder {
    /// Creates a new `Builder` with base `base`.
    #[inline]
    pub fn new(base: Response) -> Builder {
        Builder { response: base }
    }

    /// Sets the status of the response being built.
    #[inline]
    pub fn status(&mut self, status: Status) -> &mut Builder {
        self.response.set_status(status);
        self
    }

    /// Sets a header of the response being built, replacing any existing
    /// header with the same name.
    #[inline]
    pub fn header<H: Into<Header>>(&mut self, header: H) -> &mut Builder {
        self.response.set_header(header);
        self
    }

    /// Sets a header with name `name` and value `value`, replacing any
    /// existing header with the same name.
    #[inline]
    pub fn raw_header<N, V>(&mut self, name: N, value: V) -> &mut Builder
        where N: Into<std::borrow::Cow<'static, str>>,
              V: Into<std::borrow::Cow<'static, str>>
    {
        self.response.set_raw_header(name, value);
        self
    }

    /// Adds a header to the response being built, joining it with any headers
    /// with the same name that already exist.
    #[inline]
    pub fn header_adjoin<H: Into<Header>>(&mut self, header: H) -> &mut Builder {
        self.response.adjoin_header(header);
        self
    }

    /// Sets the body of the response being built to `reader` with a declared
    /// length of `len` bytes.
    #[inline]
    pub fn sized_body<R: Read + 'static>(&mut self, len: u64, reader: R) -> &mut Builder {
        self.response.set_sized_body(len, reader);
        self
    }

    /// Retrieves the built `Response`, leaving a new empty response behind in
    /// the builder.
    #[inline]
    pub fn finalize(&mut self) -> Response {
        mem::take(&mut self.response)
    }

    /// Retrieves the built `Response` wrapped in `Ok`.
    #[inline]
    pub fn ok<E>(&mut self) -> Result<Response, E> {
        Ok(self.finalize())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::http::Status;
    use super::Response;

    #[test]
    fn empty_response_defaults() {
        let response = Response::new();
        assert_eq!(response.status(), Status::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_none());
    }

    #[test]
    fn builder_replaces_headers() {
        let response = Response::build()
            .raw_header("Content-Type", "text/plain")
            .raw_header("Content-Type", "application/json")
            .finalize();

        assert_eq!(response.headers().get("content-type").count(), 1);
        assert_eq!(response.content_type(), Some("application/json"));
    }

    #[test]
    fn sized_body_round_trip() {
        let mut response = Response::build()
            .sized_body(5, Cursor::new(b"hello".to_vec()))
            .finalize();

        let body = response.take_body().expect("sized body");
        assert_eq!(body.len(), 5);
        assert_eq!(body.into_bytes().expect("readable body"), b"hello");
    }
}
