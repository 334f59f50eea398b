use super::*;

#[test]
fn test_response_is_exposed_for_response_errors() {
    let err = WorkpadError::Response(ErrorResponse {
        status: 400,
        message: "bad request".to_string(),
    });

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.response().unwrap().message, "bad request");
    assert_eq!(
        err.to_string(),
        "workpad service responded with 400: bad request"
    );
}

#[test]
fn test_transport_errors_carry_no_response() {
    let err = WorkpadError::Transport("connection refused".to_string());
    assert!(err.response().is_none());
    assert!(err.status().is_none());
}

#[test]
fn test_error_response_display_without_message() {
    let response = ErrorResponse {
        status: 503,
        message: String::new(),
    };
    assert_eq!(response.to_string(), "503");
}
