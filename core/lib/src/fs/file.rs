use std::io;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;

use crate::http::{ContentType, Status};
use crate::response::Response;

/// A file with an associated name; responds with a Content-Type based on the
/// file extension.
///
/// `File` captures the file's metadata when it is opened: the byte length,
/// the extension-derived content type, and the last-modified timestamp. The
/// response primitives emit those as headers, with an unrecognized extension
/// degrading to `application/octet-stream`. A Content-Disposition header is
/// never set here, that is the responser's overlay.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    file: std::fs::File,
    len: u64,
    content_type: Option<ContentType>,
    last_modified: Option<OffsetDateTime>,
}

impl File {
    /// Attempts to open a file in read-only mode.
    ///
    /// # Errors
    ///
    /// This function will return an error if `path` does not already exist or
    /// its metadata cannot be read. Other errors may also be returned
    /// according to [`OpenOptions::open()`](std::fs::OpenOptions::open()).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use responser::fs::File;
    ///
    /// # fn f() -> std::io::Result<()> {
    /// let file = File::open("report.txt")?;
    /// let response = file.file_response();
    /// # Ok(())
    /// # }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<File> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let metadata = file.metadata()?;
        let len = metadata.len();

        let last_modified = metadata.modified().ok()
            .and_then(|modified| modified.duration_since(SystemTime::UNIX_EPOCH).ok())
            .and_then(|duration| i64::try_from(duration.as_secs()).ok())
            .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok());

        let content_type = path.extension()
            .and_then(|ext| ContentType::from_extension(&ext.to_string_lossy()));

        Ok(File {
            path: path.to_path_buf(),
            file,
            len,
            content_type,
            last_modified,
        })
    }

    /// Retrieve the path of this file.
    #[inline(always)]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// The base name of this file, if the path has one.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// The length of this file in bytes, captured at open time.
    #[inline(always)]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the file was empty at open time.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The content type derived from this file's extension, if recognized.
    #[inline(always)]
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// Retrieve the underlying `std::fs::File`.
    #[inline(always)]
    pub fn file(&self) -> &std::fs::File {
        &self.file
    }

    /// Retrieve a mutable borrow to the underlying `std::fs::File`.
    #[inline(always)]
    pub fn file_mut(&mut self) -> &mut std::fs::File {
        &mut self.file
    }

    /// Take the underlying `std::fs::File`.
    #[inline(always)]
    pub fn take_file(self) -> std::fs::File {
        self.file
    }

    /// Attachment-oriented response primitive: a `200 OK` response carrying
    /// the file's metadata headers and the file as a sized body.
    pub fn download_response(self) -> Response {
        self.respond()
    }

    /// Inline-oriented response primitive. Emits the same base response as
    /// [`File::download_response()`]; the two exist as distinct entry points
    /// for the two disposition modes of the response layer.
    pub fn file_response(self) -> Response {
        self.respond()
    }

    fn respond(self) -> Response {
        let mut builder = Response::build();
        builder.status(Status::Ok);
        builder.header(self.content_type.unwrap_or(ContentType::Binary));

        if let Some(last_modified) = self.last_modified.and_then(|odt| odt.format(&Rfc2822).ok()) {
            builder.raw_header("Last-Modified", last_modified);
        }

        builder.raw_header("Content-Length", self.len.to_string());
        builder.sized_body(self.len, self.file);
        builder.finalize()
    }
}

impl Deref for File {
    type Target = std::fs::File;

    fn deref(&self) -> &std::fs::File {
        &self.file
    }
}

impl DerefMut for File {
    fn deref_mut(&mut self) -> &mut std::fs::File {
        &mut self.file
    }
}
