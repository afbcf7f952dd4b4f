use indexmap::IndexMap;
use serde_json::{json, Value};

use responser::http::Status;
use responser::response::flash::{self, MemoryStorage, Storage};
use responser::{Responser, Severity};

fn input(key: &str, value: &str) -> IndexMap<String, Value> {
    let mut input = IndexMap::new();
    input.insert(key.to_string(), json!(value));
    input
}

#[test]
fn state_survives_exactly_one_hop() {
    let mut storage = MemoryStorage::new();

    // Current request: accumulate state, then redirect.
    let mut responser = Responser::new(None, Some(&mut storage));
    responser.with_input(input("name", "value"));
    responser.messages_mut().add(Severity::Error, "name is taken");

    let response = responser.redirect("/register", Status::Found);
    assert_eq!(response.status(), Status::Found);
    assert_eq!(response.headers().get_one("Location"), Some("/register"));

    // The redirect does not disturb the current request's state.
    assert_eq!(responser.messages().len(), 1);
    assert_eq!(responser.input().get("name"), Some(&json!("value")));
    drop(responser);

    // Next request: the flashed state is observed.
    let responser = Responser::new(None, Some(&mut storage));
    assert_eq!(responser.messages().len(), 1);
    assert_eq!(responser.messages().all()[0].severity, Severity::Error);
    assert_eq!(responser.messages().all()[0].text, "name is taken");
    assert_eq!(responser.input().get("name"), Some(&json!("value")));
    drop(responser);

    // After next request: nothing was re-flashed, so the state is gone.
    let responser = Responser::new(None, Some(&mut storage));
    assert!(responser.messages().is_empty());
    assert!(responser.input().is_empty());
}

#[test]
fn state_without_a_redirect_is_discarded() {
    let mut storage = MemoryStorage::new();

    let mut responser = Responser::new(None, Some(&mut storage));
    responser.with_input(input("draft", "unsaved"));
    responser.messages_mut().add(Severity::Info, "draft pending");
    drop(responser);

    let responser = Responser::new(None, Some(&mut storage));
    assert!(responser.messages().is_empty());
    assert!(responser.input().is_empty());
}

#[test]
fn reflashing_extends_the_hop() {
    let mut storage = MemoryStorage::new();

    let mut responser = Responser::new(None, Some(&mut storage));
    responser.messages_mut().add(Severity::Warning, "expired session");
    responser.redirect("/login", Status::SeeOther);
    drop(responser);

    // The second cycle redirects again, re-flashing the seeded state.
    let mut responser = Responser::new(None, Some(&mut storage));
    assert_eq!(responser.messages().len(), 1);
    responser.redirect("/login/sso", Status::SeeOther);
    drop(responser);

    let responser = Responser::new(None, Some(&mut storage));
    assert_eq!(responser.messages().len(), 1);
    assert_eq!(responser.messages().all()[0].text, "expired session");
}

#[test]
fn redirect_overwrites_stale_input() {
    let mut storage = MemoryStorage::new();
    storage.flash(flash::INPUT_KEY, json!({"stale": "value"}));

    // The current request consumes the stale input, then redirects without
    // setting any input of its own.
    let mut responser = Responser::new(None, Some(&mut storage));
    assert_eq!(responser.input().get("stale"), Some(&json!("value")));
    responser.redirect("/next", Status::Found);
    drop(responser);

    let responser = Responser::new(None, Some(&mut storage));
    assert!(responser.input().is_empty());
}

#[test]
fn malformed_flash_values_are_ignored() {
    let mut storage = MemoryStorage::new();
    storage.flash(flash::MESSAGES_KEY, json!("not a list"));
    storage.flash(flash::INPUT_KEY, json!(42));

    let responser = Responser::new(None, Some(&mut storage));
    assert!(responser.messages().is_empty());
    assert!(responser.input().is_empty());
    drop(responser);

    // The malformed entries were still consumed.
    assert_eq!(storage.get(flash::MESSAGES_KEY), None);
    assert_eq!(storage.get(flash::INPUT_KEY), None);
}

#[test]
fn no_storage_means_no_continuity() {
    let mut responser = Responser::new(None, None);
    responser.messages_mut().add(Severity::Success, "saved");

    let response = responser.redirect("/done", Status::Found);
    assert_eq!(response.headers().get_one("Location"), Some("/done"));
}
