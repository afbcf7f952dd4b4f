use std::fmt;
use std::io::Cursor;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::http::{ContentType, Status};
use crate::messages::Messages;
use crate::renderer::Renderer;
use crate::response::flash::{self, Storage};
use crate::response::{FileResponser, Response, ResponseInfo};

/// The payload shapes accepted by [`Responser::write()`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Written as a JSON body with `Content-Type: application/json`.
    Json(Value),
    /// Written as a raw body with no Content-Type header.
    Text(String),
}

impl From<&str> for Payload {
    fn from(text: &str) -> Payload {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Payload {
        Payload::Text(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Payload {
        Payload::Json(value)
    }
}

impl From<IndexMap<String, Value>> for Payload {
    fn from(map: IndexMap<String, Value>) -> Payload {
        Payload::Json(Value::Object(map.into_iter().collect()))
    }
}

/// Request-scoped response builder with flash-based state continuity.
///
/// A `Responser` owns the mutable input and message state for exactly one
/// request/response cycle. At construction it seeds that state from any
/// previously flashed values in the storage collaborator; a
/// [`redirect()`](Responser::redirect()) pushes the current state back into
/// storage for the immediately following request to consume. No other
/// operation touches the storage. A `Responser` must therefore never be
/// shared or reused across two independent cycles; a concurrent host
/// constructs one per in-flight request.
///
/// ```rust
/// use responser::http::Status;
/// use responser::response::flash::MemoryStorage;
/// use responser::{Responser, Severity};
///
/// let mut storage = MemoryStorage::new();
///
/// // First request: accumulate a message, then redirect.
/// let mut responser = Responser::new(None, Some(&mut storage));
/// responser.messages_mut().add(Severity::Error, "name is required");
/// let response = responser.redirect("/register", Status::Found);
/// assert_eq!(response.headers().get_one("Location"), Some("/register"));
/// # drop(responser);
///
/// // Next request: the message survived exactly one hop.
/// let responser = Responser::new(None, Some(&mut storage));
/// assert_eq!(responser.messages().len(), 1);
/// ```
pub struct Responser<'r> {
    renderer: Option<&'r dyn Renderer>,
    storage: Option<&'r mut dyn Storage>,
    messages: Messages,
    input: IndexMap<String, Value>,
}

impl<'r> Responser<'r> {
    /// Creates a new `Responser` for one request cycle, seeding the message
    /// and input state from any values flashed by the previous cycle.
    ///
    /// Flashed values of an unexpected shape are ignored, not errors; a
    /// corrupted storage entry degrades to an empty state.
    pub fn new(
        renderer: Option<&'r dyn Renderer>,
        storage: Option<&'r mut dyn Storage>,
    ) -> Responser<'r> {
        let mut responser = Responser {
            renderer,
            storage,
            messages: Messages::new(),
            input: IndexMap::new(),
        };

        responser.assign_flashed();
        responser
    }

    /// Create a new empty response with the given status.
    pub fn create(&self, status: Status) -> Response {
        Response::build().status(status).finalize()
    }

    /// Returns a file responser for download and inline file responses.
    pub fn file(&self) -> FileResponser {
        FileResponser::new()
    }

    /// Returns the response info for `response`.
    pub fn info<'a>(&self, response: &'a Response) -> ResponseInfo<'a> {
        ResponseInfo::new(response)
    }

    /// Redirect response: flashes the current messages and input for the
    /// next request, then responds with `status` and a `Location` header
    /// carrying `uri` verbatim.
    ///
    /// This is the only operation that writes to the storage collaborator.
    /// State accumulated without a following redirect is discarded with the
    /// `Responser` at the end of the request.
    pub fn redirect<U: fmt::Display>(&mut self, uri: U, status: Status) -> Response {
        self.flashing();

        Response::build()
            .status(status)
            .raw_header("Location", uri.to_string())
            .finalize()
    }

    /// Write html into the body response.
    pub fn html<H: Into<String>>(&self, html: H, status: Status) -> Response {
        let body = html.into().into_bytes();
        let len = body.len() as u64;

        Response::build()
            .status(status)
            .header(ContentType::HTML)
            .sized_body(len, Cursor::new(body))
            .finalize()
    }

    /// Write `data` as json into the body response.
    ///
    /// A value that fails to serialize degrades to an empty body; the failure
    /// is recorded as an error-level trace event.
    pub fn json<T: Serialize>(&self, data: &T, status: Status) -> Response {
        let body = match serde_json::to_vec(data) {
            Ok(body) => body,
            Err(error) => {
                tracing::error!(%error, "failed to serialize json response body");
                Vec::new()
            }
        };

        let len = body.len() as u64;
        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(len, Cursor::new(body))
            .finalize()
    }

    /// Render the view named `view` with `data` and write it into the body
    /// response. Without a configured renderer the body is empty.
    pub fn render(&self, view: &str, data: &IndexMap<String, Value>, status: Status) -> Response {
        let body = match self.renderer {
            Some(renderer) => renderer.render(view, data),
            None => String::new(),
        };

        self.html(body, status)
    }

    /// Write `payload` into the body response: JSON payloads carry
    /// `Content-Type: application/json`, text payloads are written raw with
    /// no Content-Type header.
    pub fn write<P: Into<Payload>>(&self, payload: P, status: Status) -> Response {
        match payload.into() {
            Payload::Json(value) => self.json(&value, status),
            Payload::Text(text) => {
                let body = text.into_bytes();
                let len = body.len() as u64;

                Response::build()
                    .status(status)
                    .sized_body(len, Cursor::new(body))
                    .finalize()
            }
        }
    }

    /// Replaces the current input data.
    pub fn with_input(&mut self, input: IndexMap<String, Value>) -> &mut Responser<'r> {
        self.input = input;
        self
    }

    /// The current input data.
    pub fn input(&self) -> &IndexMap<String, Value> {
        &self.input
    }

    /// The messages accumulated during this request cycle.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Mutable access to the messages accumulated during this request cycle.
    pub fn messages_mut(&mut self) -> &mut Messages {
        &mut self.messages
    }

    /// Seeds the request-scoped state from the previous cycle's flashed
    /// values, consuming them from storage.
    fn assign_flashed(&mut self) {
        let Some(storage) = self.storage.as_deref_mut() else { return };

        if let Some(value) = storage.get(flash::MESSAGES_KEY) {
            match serde_json::from_value::<Messages>(value) {
                Ok(messages) => self.messages.push(messages),
                Err(_) => tracing::debug!(key = flash::MESSAGES_KEY, "ignoring malformed flash value"),
            }
        }

        if let Some(value) = storage.get(flash::INPUT_KEY) {
            match serde_json::from_value::<IndexMap<String, Value>>(value) {
                Ok(input) => self.input = input,
                Err(_) => tracing::debug!(key = flash::INPUT_KEY, "ignoring malformed flash value"),
            }
        }
    }

    /// Flashes the current messages and input for the next request cycle.
    ///
    /// The input is flashed even when empty so that a stale value from an
    /// earlier cycle is overwritten.
    fn flashing(&mut self) {
        let Some(storage) = self.storage.as_deref_mut() else { return };

        if let Ok(messages) = serde_json::to_value(&self.messages) {
            storage.flash(flash::MESSAGES_KEY, messages);
        }

        let input = serde_json::to_value(&self.input)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        storage.flash(flash::INPUT_KEY, input);
    }
}

impl fmt::Debug for Responser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responser")
            .field("renderer", &self.renderer.is_some())
            .field("storage", &self.storage.is_some())
            .field("messages", &self.messages)
            .field("input", &self.input)
            .finish()
    }
}
