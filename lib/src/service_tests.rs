use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    sync::mpsc,
    thread,
};

use crate::workpad::{AssetMap, PersistedWorkpad, Workpad};

use super::*;

struct Captured {
    request_line: String,
    headers: Vec<String>,
    body: String,
}

/// Serves a single request with the given status line and body, reporting
/// what it received.
fn serve_once(
    status_line: &'static str,
    response_body: &'static str,
) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut headers = Vec::new();
        let mut content_length = 0;
        let mut chunked = false;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
                if name.eq_ignore_ascii_case("transfer-encoding") {
                    chunked = value.trim().eq_ignore_ascii_case("chunked");
                }
            }
            headers.push(line.to_lowercase());
        }

        let mut body = Vec::new();
        if chunked {
            loop {
                let mut size = String::new();
                reader.read_line(&mut size).unwrap();
                let size = usize::from_str_radix(size.trim(), 16).unwrap();
                let mut chunk = vec![0; size + 2];
                reader.read_exact(&mut chunk).unwrap();
                if size == 0 {
                    break;
                }
                body.extend_from_slice(&chunk[..size]);
            }
        } else {
            body.resize(content_length, 0);
            reader.read_exact(&mut body).unwrap();
        }

        let mut stream = stream;
        write!(
            stream,
            "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
            response_body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).unwrap(),
        })
        .unwrap();
    });

    (format!("http://{addr}"), rx)
}

fn persisted() -> PersistedWorkpad {
    PersistedWorkpad::from_parts(&Workpad::new("report"), &AssetMap::new())
}

#[test]
fn test_builder_defaults() {
    let service = HttpWorkpadService::builder()
        .base_url("http://localhost:5601/")
        .build()
        .unwrap();

    assert_eq!(
        service.workpad_url("workpad-1"),
        "http://localhost:5601/api/canvas/workpad/workpad-1"
    );
    assert_eq!(service.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn test_builder_requires_base_url() {
    let result = HttpWorkpadService::builder().build();
    assert!(matches!(result, Err(WorkpadError::ServiceBuild(_))));
}

#[test]
fn test_custom_api_path() {
    let service = HttpWorkpadService::builder()
        .base_url("http://kibana")
        .api_path("/s/space/api/canvas/workpad/")
        .build()
        .unwrap();

    assert_eq!(
        service.workpad_url("w"),
        "http://kibana/s/space/api/canvas/workpad/w"
    );
}

#[test]
fn test_update_puts_persisted_workpad() {
    let (url, rx) = serve_once("HTTP/1.1 200 OK", "{}");
    let service = HttpWorkpadService::builder().base_url(url).build().unwrap();
    let workpad = persisted();

    service.update(&workpad.id, &workpad).unwrap();

    let captured = rx.recv().unwrap();
    assert_eq!(
        captured.request_line,
        format!("PUT /api/canvas/workpad/{} HTTP/1.1", workpad.id)
    );
    assert!(captured.headers.contains(&"kbn-xsrf: true".to_string()));
    let sent: PersistedWorkpad = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent, workpad);
}

#[test]
fn test_update_reports_response_status() {
    let (url, rx) = serve_once("HTTP/1.1 400 Bad Request", "bad request");
    let service = HttpWorkpadService::builder().base_url(url).build().unwrap();
    let workpad = persisted();

    let err = service.update(&workpad.id, &workpad).unwrap_err();

    rx.recv().unwrap();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.response().unwrap().message, "bad request");
}

#[test]
fn test_update_reports_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpWorkpadService::builder()
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();
    let workpad = persisted();

    let err = service.update(&workpad.id, &workpad).unwrap_err();

    assert!(matches!(err, WorkpadError::Transport(_)));
    assert!(err.response().is_none());
}
