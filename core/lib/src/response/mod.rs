//! Types and traits to build responses.
//!
//! The [`Response`] type and its [`Builder`] are the draft every helper in
//! this crate assembles into. [`FileResponser`] builds complete download and
//! inline file responses from any [`FileSource`]; [`flash`] holds the storage
//! contract that carries state across a redirect; [`ResponseInfo`] classifies
//! a finished response by its status code.

mod file;
mod info;
mod response;
mod stream;

pub mod flash;

pub use self::file::{Disposition, FileResponser, FileSource};
pub use self::flash::{MemoryStorage, Storage};
pub use self::info::ResponseInfo;
pub use self::response::{Body, Builder, Response};
pub use self::stream::ByteStream;
