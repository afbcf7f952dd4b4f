use std::borrow::Cow;
use std::fmt;

use crate::Header;

/// Representation of an HTTP Content-Type.
///
/// A set of constants is declared for commonly used media types, and
/// [`ContentType::from_extension()`] maps recognized file extensions to their
/// associated media type:
///
/// ```rust
/// use responser_http::ContentType;
///
/// assert_eq!(ContentType::from_extension("csv"), Some(ContentType::CSV));
/// assert_eq!(ContentType::from_extension("foo"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(Cow<'static, str>);

macro_rules! content_types {
    ($($name:ident ($($ext:ident),+): $media_type:literal,)+) => {
        impl ContentType {
            $(
                #[doc = concat!("[`ContentType`] for <b>`", $media_type, "`</b>.")]
                #[allow(non_upper_case_globals)]
                pub const $name: ContentType = ContentType(Cow::Borrowed($media_type));
            )+

            /// Returns the Content-Type associated with the extension `ext`
            /// if the extension is recognized. Case-insensitive. Returns
            /// `None` if the extension is not recognized.
            pub fn from_extension(ext: &str) -> Option<ContentType> {
                $($(
                    if uncased::eq(ext, stringify!($ext)) {
                        return Some(ContentType::$name);
                    }
                )+)+

                None
            }
        }
    };
}

known_media_types!(content_types);

impl ContentType {
    /// Creates a new `ContentType` from a raw media type string. Prefer an
    /// associated constant when one exists for the media type.
    ///
    /// ```rust
    /// use responser_http::ContentType;
    ///
    /// let custom = ContentType::new("application/x-custom");
    /// assert_eq!(custom.media_type(), "application/x-custom");
    /// ```
    pub fn new<S: Into<Cow<'static, str>>>(media_type: S) -> ContentType {
        ContentType(media_type.into())
    }

    /// Returns the full media type string, including any parameters.
    #[inline]
    pub fn media_type(&self) -> &str {
        &self.0
    }
}

impl From<ContentType> for Header {
    fn from(content_type: ContentType) -> Header {
        Header::new("Content-Type", content_type.0)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ContentType;

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(ContentType::from_extension("TXT"), Some(ContentType::Plain));
        assert_eq!(ContentType::from_extension("Jpeg"), Some(ContentType::JPEG));
    }

    #[test]
    fn unknown_extension() {
        assert_eq!(ContentType::from_extension(""), None);
        assert_eq!(ContentType::from_extension("tar.gz"), None);
    }
}
