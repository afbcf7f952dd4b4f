use indexmap::IndexMap;
use serde_json::{json, Value};

use responser::http::Status;
use responser::response::Response;
use responser::{Renderer, Responser};

struct StubRenderer;

impl Renderer for StubRenderer {
    fn render(&self, view: &str, data: &IndexMap<String, Value>) -> String {
        let title = data.get("title").and_then(Value::as_str).unwrap_or("untitled");
        format!("[{}] {}", view, title)
    }
}

fn body_string(mut response: Response) -> String {
    let bytes = response.take_body().expect("response body").into_bytes().unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn create_is_empty() {
    let responser = Responser::new(None, None);
    let response = responser.create(Status::NoContent);

    assert_eq!(response.status(), Status::NoContent);
    assert!(response.headers().is_empty());
    assert!(response.body().is_none());
}

#[test]
fn html_sets_content_type_and_body() {
    let responser = Responser::new(None, None);
    let response = responser.html("<p>hello</p>", Status::Ok);

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some("text/html; charset=utf-8"));
    assert_eq!(body_string(response), "<p>hello</p>");
}

#[test]
fn json_sets_content_type_and_body() {
    let responser = Responser::new(None, None);
    let response = responser.json(&json!({"key": "value"}), Status::Created);

    assert_eq!(response.status(), Status::Created);
    assert_eq!(response.content_type(), Some("application/json"));
    assert_eq!(body_string(response), r#"{"key":"value"}"#);
}

#[test]
fn render_delegates_to_the_renderer() {
    let renderer = StubRenderer;
    let responser = Responser::new(Some(&renderer), None);

    let mut data = IndexMap::new();
    data.insert("title".to_string(), json!("About"));
    let response = responser.render("about", &data, Status::Ok);

    assert_eq!(response.content_type(), Some("text/html; charset=utf-8"));
    assert_eq!(body_string(response), "[about] About");
}

#[test]
fn render_without_a_renderer_writes_nothing() {
    let responser = Responser::new(None, None);
    let response = responser.render("about", &IndexMap::new(), Status::Ok);

    assert_eq!(response.content_type(), Some("text/html; charset=utf-8"));
    assert_eq!(body_string(response), "");
}

#[test]
fn write_json_payload() {
    let responser = Responser::new(None, None);

    let mut map = IndexMap::new();
    map.insert("ready".to_string(), json!(true));
    let response = responser.write(map, Status::Ok);

    assert_eq!(response.content_type(), Some("application/json"));
    assert_eq!(body_string(response), r#"{"ready":true}"#);
}

#[test]
fn write_text_payload_has_no_content_type() {
    let responser = Responser::new(None, None);
    let response = responser.write("plain words", Status::Ok);

    assert_eq!(response.content_type(), None);
    assert_eq!(body_string(response), "plain words");
}

#[test]
fn info_reflects_the_draft() {
    let responser = Responser::new(None, None);
    let response = responser.create(Status::Forbidden);

    let info = responser.info(&response);
    assert!(info.is_forbidden());
    assert!(info.is_client_error());
}

#[test]
fn file_returns_a_file_responser() {
    let responser = Responser::new(None, None);
    let response = responser.file().create(Status::Ok);

    assert_eq!(response.status(), Status::Ok);
}
