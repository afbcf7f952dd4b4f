use std::fmt;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::fd::OwnedFd;

use crate::http::ContentType;
use crate::response::Body;

/// A readable byte stream with a known length and an optional origin path.
///
/// This is the normal form every file source is resolved into before response
/// assembly. The origin path, when present, records where the bytes came from
/// and drives media type inference for sources that do not carry their own
/// content type.
pub struct ByteStream {
    reader: Box<dyn Read>,
    len: u64,
    origin: Option<PathBuf>,
}

impl ByteStream {
    /// Creates a stream from `reader`, declaring its length as `len` bytes.
    pub fn new<R: Read + 'static>(reader: R, len: u64) -> ByteStream {
        ByteStream { reader: Box::new(reader), len, origin: None }
    }

    /// Creates an in-memory stream over `bytes`.
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> ByteStream {
        let bytes = bytes.into();
        let len = bytes.len() as u64;
        ByteStream::new(Cursor::new(bytes), len)
    }

    /// Opens the file at `path` as a stream with the file's byte length and
    /// `path` as the stream's origin.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<ByteStream> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let len = file.metadata()?.len();

        Ok(ByteStream::new(file, len).with_origin(path))
    }

    /// Wraps a raw OS file descriptor into a stream, probing the byte length
    /// from the descriptor's metadata. The stream has no origin.
    #[cfg(unix)]
    pub fn from_fd(fd: OwnedFd) -> io::Result<ByteStream> {
        let file = std::fs::File::from(fd);
        let len = file.metadata()?.len();

        Ok(ByteStream::new(file, len))
    }

    /// Declares `path` as the origin of this stream.
    pub fn with_origin<P: AsRef<Path>>(mut self, path: P) -> ByteStream {
        self.origin = Some(path.as_ref().to_path_buf());
        self
    }

    /// The known length of this stream in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the known length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The declared origin of this stream, if any.
    #[inline]
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Infers a content type from the origin path's extension. Returns `None`
    /// when there is no origin or the extension is not recognized.
    pub fn content_type(&self) -> Option<ContentType> {
        self.origin()
            .and_then(|path| path.extension())
            .and_then(|ext| ContentType::from_extension(&ext.to_string_lossy()))
    }

    /// Consumes `self`, returning the underlying reader.
    #[inline]
    pub fn into_reader(self) -> Box<dyn Read> {
        self.reader
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl From<ByteStream> for Body {
    fn from(stream: ByteStream) -> Body {
        let len = stream.len;
        Body::sized(stream.reader, len)
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream")
            .field("len", &self.len)
            .field("origin", &self.origin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ByteStream;
    use crate::http::ContentType;

    #[test]
    fn in_memory_stream() {
        let stream = ByteStream::from_bytes(&b"a,b,c"[..]);
        assert_eq!(stream.len(), 5);
        assert!(stream.origin().is_none());
        assert_eq!(stream.content_type(), None);
    }

    #[test]
    fn origin_drives_content_type() {
        let stream = ByteStream::from_bytes(&b"a,b,c"[..]).with_origin("/tmp/data.csv");
        assert_eq!(stream.content_type(), Some(ContentType::CSV));

        let unknown = ByteStream::from_bytes(&b""[..]).with_origin("/tmp/data.unknown");
        assert_eq!(unknown.content_type(), None);
    }
}
