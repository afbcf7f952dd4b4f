use responser::http::Status;
use responser::response::{FileResponser, ResponseInfo};

#[test]
fn forbidden_classification() {
    let response = FileResponser::new().create(Status::Forbidden);
    let info = ResponseInfo::new(&response);

    assert!(info.is_forbidden());
    assert!(info.is_client_error());
    assert!(!info.is_ok());
    assert!(!info.is_server_error());
}

#[test]
fn server_error_range_is_half_open() {
    let response = FileResponser::new().create(Status::new(599));
    assert!(ResponseInfo::new(&response).is_server_error());

    let response = FileResponser::new().create(Status::new(600));
    let info = ResponseInfo::new(&response);
    assert!(!info.is_server_error());
    assert!(!info.is_client_error());
    assert!(!info.is_informational());
}

#[test]
fn ok_and_not_found() {
    let ok = FileResponser::new().create(Status::Ok);
    let info = ResponseInfo::new(&ok);
    assert!(info.is_ok());
    assert!(info.is_successful());
    assert!(!info.is_redirection());

    let missing = FileResponser::new().create(Status::NotFound);
    let info = ResponseInfo::new(&missing);
    assert!(info.is_not_found());
    assert!(info.is_client_error());
}

#[test]
fn code_membership() {
    let response = FileResponser::new().create(Status::Conflict);
    let info = ResponseInfo::new(&response);

    assert!(info.is_code(&[409]));
    assert!(info.is_code(&[404, 409, 410]));
    assert!(!info.is_code(&[404, 410]));
    assert!(!info.is_code(&[]));
}

#[test]
fn classification_is_idempotent() {
    let response = FileResponser::new().create(Status::Found);
    let info = ResponseInfo::new(&response);

    for _ in 0..3 {
        assert!(info.is_redirection());
        assert!(!info.is_successful());
    }
}
