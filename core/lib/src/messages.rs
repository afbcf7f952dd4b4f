use std::slice;

use serde::{Deserialize, Serialize};

/// The severity of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

/// A message: a severity paired with human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// How severe the message is.
    pub severity: Severity,
    /// The message text.
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new<T: Into<String>>(severity: Severity, text: T) -> Message {
        Message { severity, text: text.into() }
    }
}

/// An ordered sink of messages accumulated during one request cycle.
///
/// Serializes transparently as a plain list of messages, which is the shape
/// flashed through the storage collaborator.
///
/// ```rust
/// use responser::{Messages, Severity};
///
/// let mut messages = Messages::new();
/// messages.add(Severity::Error, "name is required");
/// messages.add(Severity::Info, "draft saved");
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages.all()[0].text, "name is required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages {
    messages: Vec<Message>,
}

impl Messages {
    /// Creates an empty message sink.
    pub fn new() -> Messages {
        Messages::default()
    }

    /// Appends a message with `severity` and `text`.
    pub fn add<T: Into<String>>(&mut self, severity: Severity, text: T) {
        self.messages.push(Message::new(severity, text));
    }

    /// Appends every message in `messages`, preserving order.
    pub fn push<I: IntoIterator<Item = Message>>(&mut self, messages: I) {
        self.messages.extend(messages);
    }

    /// All messages, in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// The number of messages in the sink.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no messages have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// An iterator over the messages, in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl IntoIterator for Messages {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
