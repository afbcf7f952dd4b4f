use indexmap::IndexMap;
use serde_json::Value;

/// The storage key under which flashed messages are persisted.
///
/// Stable across versions; a value flashed by one version of this library is
/// readable by the next.
pub const MESSAGES_KEY: &str = "_responser_messages";

/// The storage key under which flashed input is persisted.
///
/// Stable across versions, like [`MESSAGES_KEY`].
pub const INPUT_KEY: &str = "_responser_input";

/// A key-value store whose values live for exactly one request hop.
///
/// [`flash()`](Storage::flash()) persists a value so that it is readable
/// exactly once, by the next request cycle; [`get()`](Storage::get()) takes
/// the flashed value, consuming it. Consistency across concurrent sessions is
/// the implementor's responsibility; the response layer treats both calls as
/// atomic point operations.
pub trait Storage {
    /// Flash `value` under `key`, to be read exactly once.
    fn flash(&mut self, key: &str, value: Value);

    /// Take the flashed value for `key`, consuming it. Returns `None` if no
    /// value was flashed or it was already consumed.
    fn get(&mut self, key: &str) -> Option<Value>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn flash(&mut self, key: &str, value: Value) {
        (**self).flash(key, value)
    }

    fn get(&mut self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}

/// An in-process [`Storage`] with exactly-one-hop consumption semantics.
///
/// Each flashed entry survives until its first read. Suitable for tests and
/// single-process hosts; multi-process hosts want a session-backed
/// implementation instead.
///
/// ```rust
/// use serde_json::json;
/// use responser::response::flash::Storage;
/// use responser::response::flash::MemoryStorage;
///
/// let mut storage = MemoryStorage::new();
/// storage.flash("key", json!("value"));
///
/// assert_eq!(storage.get("key"), Some(json!("value")));
/// assert_eq!(storage.get("key"), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: IndexMap<String, Value>,
}

impl MemoryStorage {
    /// Creates an empty `MemoryStorage`.
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn flash(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn get(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{MemoryStorage, Storage};

    #[test]
    fn get_consumes() {
        let mut storage = MemoryStorage::new();
        storage.flash("a", json!({"k": "v"}));

        assert_eq!(storage.get("a"), Some(json!({"k": "v"})));
        assert_eq!(storage.get("a"), None);
    }

    #[test]
    fn flash_overwrites_stale_value() {
        let mut storage = MemoryStorage::new();
        storage.flash("a", json!(1));
        storage.flash("a", json!(2));

        assert_eq!(storage.get("a"), Some(json!(2)));
    }
}
