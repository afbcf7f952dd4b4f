use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::fd::OwnedFd;

use crate::error::{Error, Result};
use crate::fs;
use crate::http::{ContentType, Status};
use crate::response::{ByteStream, Response, ResponseInfo};

/// The input shapes a file response can be built from.
///
/// Exactly one variant is active per request. The `From` implementations
/// cover the ergonomic entry points, so callers rarely name a variant:
///
/// ```rust
/// use responser::response::FileSource;
///
/// let source = FileSource::from("/var/data/report.pdf");
/// assert!(matches!(source, FileSource::Path(_)));
/// ```
#[derive(Debug)]
pub enum FileSource {
    /// A filesystem path, opened and probed on dispatch.
    Path(PathBuf),
    /// An already-opened file abstraction.
    File(fs::File),
    /// An abstract readable stream with a known length.
    Stream(ByteStream),
    /// A raw OS-level file descriptor.
    #[cfg(unix)]
    Raw(OwnedFd),
}

impl From<&str> for FileSource {
    fn from(path: &str) -> FileSource {
        FileSource::Path(PathBuf::from(path))
    }
}

impl From<String> for FileSource {
    fn from(path: String) -> FileSource {
        FileSource::Path(PathBuf::from(path))
    }
}

impl From<&Path> for FileSource {
    fn from(path: &Path) -> FileSource {
        FileSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for FileSource {
    fn from(path: PathBuf) -> FileSource {
        FileSource::Path(path)
    }
}

impl From<fs::File> for FileSource {
    fn from(file: fs::File) -> FileSource {
        FileSource::File(file)
    }
}

impl From<ByteStream> for FileSource {
    fn from(stream: ByteStream) -> FileSource {
        FileSource::Stream(stream)
    }
}

#[cfg(unix)]
impl From<OwnedFd> for FileSource {
    fn from(fd: OwnedFd) -> FileSource {
        FileSource::Raw(fd)
    }
}

/// The disposition mode of a file response: prompt a download or display
/// inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// `Content-Disposition: attachment`.
    Attachment,
    /// `Content-Disposition: inline`.
    Inline,
}

impl Disposition {
    /// The header value token for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Disposition::Attachment => "attachment",
            Disposition::Inline => "inline",
        }
    }

    /// The complete Content-Disposition header value for this mode and
    /// `name`. The name is used verbatim; escaping is the caller's
    /// responsibility.
    pub fn header_value(self, name: &str) -> String {
        format!("{}; filename={}", self.as_str(), name)
    }
}

/// Builds file responses for downloading (attachment) and rendering (inline).
///
/// [`download()`](FileResponser::download()) and
/// [`render()`](FileResponser::render()) accept any [`FileSource`], an
/// optional filename (the empty string means none), and an optional explicit
/// content type that always wins over inference.
///
/// For [`FileSource::Path`] and [`FileSource::File`], body and base headers
/// come from the file abstraction's own response primitives, and an empty
/// name means no Content-Disposition header is emitted at all. For
/// [`FileSource::Stream`] and [`FileSource::Raw`], a name is mandatory and
/// [`Error::MissingFilename`] is returned without one. The asymmetry is
/// intentional, preserved for compatibility with existing callers.
///
/// ```rust
/// use responser::http::Status;
/// use responser::response::{ByteStream, FileResponser};
///
/// let stream = ByteStream::from_bytes(&b"a,b,c\n"[..]);
/// let response = FileResponser::new()
///     .download(stream, "data.csv", None)
///     .unwrap();
///
/// assert_eq!(response.status(), Status::Ok);
/// assert_eq!(
///     response.headers().get_one("Content-Disposition"),
///     Some("attachment; filename=data.csv"),
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FileResponser;

impl FileResponser {
    /// Creates a new `FileResponser`.
    pub fn new() -> FileResponser {
        FileResponser
    }

    /// Create a new empty response with the given status.
    pub fn create(&self, status: Status) -> Response {
        Response::build().status(status).finalize()
    }

    /// Returns the response info for `response`.
    pub fn info<'r>(&self, response: &'r Response) -> ResponseInfo<'r> {
        ResponseInfo::new(response)
    }

    /// Builds a download (attachment) response from `file`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] when the source cannot be resolved
    /// into a readable stream and [`Error::MissingFilename`] when the source
    /// is a stream or raw descriptor and `name` is empty.
    pub fn download<S>(&self, file: S, name: &str, content_type: Option<ContentType>)
        -> Result<Response>
        where S: Into<FileSource>
    {
        self.respond(file.into(), name, content_type, Disposition::Attachment)
    }

    /// Builds a render (inline) response from `file`. Identical to
    /// [`download()`](FileResponser::download()) except for the disposition
    /// mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] when the source cannot be resolved
    /// into a readable stream and [`Error::MissingFilename`] when the source
    /// is a stream or raw descriptor and `name` is empty.
    pub fn render<S>(&self, file: S, name: &str, content_type: Option<ContentType>)
        -> Result<Response>
        where S: Into<FileSource>
    {
        self.respond(file.into(), name, content_type, Disposition::Inline)
    }

    fn respond(
        &self,
        source: FileSource,
        name: &str,
        content_type: Option<ContentType>,
        disposition: Disposition,
    ) -> Result<Response> {
        match source {
            FileSource::Path(path) => {
                let file = fs::File::open(&path).map_err(Error::InvalidSource)?;
                Ok(self.from_file(file, name, content_type, disposition))
            }
            FileSource::File(file) => {
                Ok(self.from_file(file, name, content_type, disposition))
            }
            FileSource::Stream(stream) => {
                self.from_stream(stream, name, content_type, disposition)
            }
            #[cfg(unix)]
            FileSource::Raw(fd) => {
                let stream = ByteStream::from_fd(fd).map_err(Error::InvalidSource)?;
                self.from_stream(stream, name, content_type, disposition)
            }
        }
    }

    fn from_file(
        &self,
        file: fs::File,
        name: &str,
        content_type: Option<ContentType>,
        disposition: Disposition,
    ) -> Response {
        let mut response = match disposition {
            Disposition::Attachment => file.download_response(),
            Disposition::Inline => file.file_response(),
        };

        // No name, no disposition header. Stream sources differ; see above.
        if !name.is_empty() {
            response.set_raw_header("Content-Disposition", disposition.header_value(name));
        }

        if let Some(content_type) = content_type {
            response.set_header(content_type);
        }

        response
    }

    fn from_stream(
        &self,
        stream: ByteStream,
        name: &str,
        content_type: Option<ContentType>,
        disposition: Disposition,
    ) -> Result<Response> {
        if name.is_empty() {
            return Err(Error::MissingFilename);
        }

        let content_type = content_type
            .or_else(|| stream.content_type())
            .unwrap_or(ContentType::Binary);

        let len = stream.len();
        Response::build()
            .status(Status::Ok)
            .header(content_type)
            .raw_header("Content-Length", len.to_string())
            .raw_header("Content-Disposition", disposition.header_value(name))
            .sized_body(len, stream)
            .ok()
    }
}
