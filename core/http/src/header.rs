use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use uncased::{Uncased, UncasedStr};

/// Simple representation of an HTTP header: a name and a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    /// The name of the header.
    pub(crate) name: Uncased<'static>,
    /// The value of the header.
    pub(crate) value: Cow<'static, str>,
}

impl Header {
    /// Constructs a new header. This method should be used rarely and only
    /// for non-standard headers. Instead, prefer to use the `Into<Header>`
    /// implementations of types such as [`ContentType`](crate::ContentType).
    ///
    /// ```rust
    /// use responser_http::Header;
    ///
    /// let header = Header::new("X-Custom", "value");
    /// assert_eq!(header.to_string(), "X-Custom: value");
    /// ```
    pub fn new<N, V>(name: N, value: V) -> Header
        where N: Into<Cow<'static, str>>, V: Into<Cow<'static, str>>
    {
        Header { name: Uncased::new(name), value: value.into() }
    }

    /// Returns the name of this header with casing preserved.
    #[inline]
    pub fn name(&self) -> &UncasedStr {
        &self.name
    }

    /// Returns the value of this header.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// A collection of headers, mapping a header name to its many ordered values.
///
/// Header names are case-insensitive for retrieval but case-preserving for
/// iteration; insertion order of distinct names is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    headers: IndexMap<Uncased<'static>, Vec<Cow<'static, str>>>,
}

impl HeaderMap {
    /// Returns an empty header collection.
    #[inline]
    pub fn new() -> HeaderMap {
        HeaderMap { headers: IndexMap::new() }
    }

    /// Returns true if `self` contains a header with the name `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(UncasedStr::new(name))
    }

    /// Returns the number of _distinct_ header names in `self`.
    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if there are no headers stored in `self`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns an iterator over all of the values stored for the header with
    /// name `name`. The iterator is empty if no such header exists.
    pub fn get<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.headers
            .get(UncasedStr::new(name))
            .into_iter()
            .flat_map(|values| values.iter().map(|value| value.as_ref()))
    }

    /// Returns the _first_ value stored for the header with name `name`, if
    /// there is one.
    ///
    /// ```rust
    /// use responser_http::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.add_raw("Content-Type", "text/plain");
    /// assert_eq!(map.get_one("content-type"), Some("text/plain"));
    /// ```
    pub fn get_one<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.headers
            .get(UncasedStr::new(name))
            .and_then(|values| values.first().map(|value| value.as_ref()))
    }

    /// Replace any header that matches the name of `header.name` with
    /// `header`. If there is no such header in `self`, add `header`. If the
    /// matching header had multiple values, all of the values are removed and
    /// replaced with the single value in `header`.
    ///
    /// Returns `true` if `header` was added and `false` if it replaced an
    /// existing header.
    pub fn replace<H: Into<Header>>(&mut self, header: H) -> bool {
        let header = header.into();
        self.headers.insert(header.name, vec![header.value]).is_none()
    }

    /// A convenience method to replace a header using a raw name and value.
    /// Aliases `replace(Header::new(name, value))`.
    #[inline]
    pub fn replace_raw<N, V>(&mut self, name: N, value: V) -> bool
        where N: Into<Cow<'static, str>>, V: Into<Cow<'static, str>>
    {
        self.replace(Header::new(name, value))
    }

    /// Adds `header` into the map, appending to any values that already exist
    /// under the header's name.
    pub fn add<H: Into<Header>>(&mut self, header: H) {
        let header = header.into();
        self.headers.entry(header.name).or_default().push(header.value);
    }

    /// A convenience method to add a header using a raw name and value.
    /// Aliases `add(Header::new(name, value))`.
    #[inline]
    pub fn add_raw<N, V>(&mut self, name: N, value: V)
        where N: Into<Cow<'static, str>>, V: Into<Cow<'static, str>>
    {
        self.add(Header::new(name, value))
    }

    /// Removes all of the values for the header with name `name`. Returns
    /// `true` if any were present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.headers.shift_remove(UncasedStr::new(name)).is_some()
    }

    /// Returns an iterator over all of the headers stored in the map, one
    /// `(name, value)` pair per stored value, in insertion order of names.
    pub fn iter(&self) -> impl Iterator<Item = (&UncasedStr, &str)> {
        self.headers.iter().flat_map(|(name, values)| {
            values.iter().map(move |value| (name.as_uncased_str(), value.as_ref()))
        })
    }
}
