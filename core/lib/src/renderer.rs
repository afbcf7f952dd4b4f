use indexmap::IndexMap;
use serde_json::Value;

/// A view rendering capability.
///
/// The response layer delegates all view rendering to an implementor of this
/// trait; it never interprets view names or data itself. When a
/// [`Responser`](crate::Responser) is constructed without a renderer, view
/// responses carry an empty body.
pub trait Renderer {
    /// Render the view named `view` with the given `data`, returning the
    /// rendered output.
    fn render(&self, view: &str, data: &IndexMap<String, Value>) -> String;
}
