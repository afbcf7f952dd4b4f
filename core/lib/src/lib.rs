//! Helpers for building HTTP responses atop a message layer: content
//! responses, file download and inline rendering, redirects with flash state,
//! and response-status introspection.
//!
//! # Overview
//!
//! The entry point is [`Responser`], constructed once per request/response
//! cycle with the optional collaborators it delegates to: a [`Renderer`] for
//! views and a [`flash::Storage`](response::flash::Storage) for state that
//! must survive a redirect. File responses are built by a [`FileResponser`],
//! reachable through [`Responser::file()`] or standalone:
//!
//! ```rust
//! use responser::http::Status;
//! use responser::response::{ByteStream, FileResponser};
//!
//! let stream = ByteStream::from_bytes(&b"id,total\n7,19.99\n"[..]);
//! let response = FileResponser::new().download(stream, "orders.csv", None).unwrap();
//!
//! assert_eq!(response.status(), Status::Ok);
//! assert_eq!(response.headers().get_one("Content-Length"), Some("17"));
//! ```
//!
//! # Flash continuity
//!
//! Messages and input accumulated on a `Responser` survive exactly one
//! request hop, and only when the cycle ends in a
//! [`redirect()`](Responser::redirect()): the redirect writes the state into
//! the storage collaborator, the next cycle's `Responser` consumes it at
//! construction, and a cycle after that observes nothing. A cycle that never
//! redirects discards its state.

pub mod fs;
pub mod response;

mod error;
mod messages;
mod renderer;
mod responser;

pub use responser_http as http;

pub use crate::error::{Error, Result};
pub use crate::messages::{Message, Messages, Severity};
pub use crate::renderer::Renderer;
pub use crate::responser::{Payload, Responser};

#[doc(inline)]
pub use crate::response::{FileResponser, Response, ResponseInfo};
