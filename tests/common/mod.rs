#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener as StdTcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;

const READ_TIMEOUT: Duration = Duration::from_millis(500);
const MAX_READ_DURATION: Duration = Duration::from_secs(6);
const MAX_REQUEST_BYTES: usize = 128 * 1024;

pub const AMZ_JSON: &str = "application/x-amz-json-1.1";

pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Operation name from `X-Amz-Target`, without the API version prefix.
    pub fn operation(&self) -> Option<&str> {
        self.header_value("X-Amz-Target")
            .and_then(|target| target.rsplit('.').next())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

pub fn response_with_body(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {status}\r\n");
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str(&format!("Content-Length: {}\r\n\r\n{}", body.len(), body));
    response
}

pub fn json_response(status: &str, body: &str) -> String {
    response_with_body(status, &[("Content-Type", AMZ_JSON)], body)
}

pub fn api_error_response(status: &str, error_type: &str, message: &str) -> String {
    let body = serde_json::json!({ "__type": error_type, "message": message }).to_string();
    json_response(status, &body)
}

/// Serves a single request on a tokio listener and reports what was received.
pub async fn serve_once(
    response: impl AsRef<[u8]>,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = oneshot::channel();
    let response = response.as_ref().to_vec();

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let deadline = Instant::now() + MAX_READ_DURATION;
            let req = loop {
                if let Some((req, _)) = parse_request(&buf) {
                    break req;
                }
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    panic!("timed out reading request");
                }
                let read =
                    match timeout(remaining.min(READ_TIMEOUT), stream.read(&mut chunk)).await {
                        Ok(Ok(read)) => read,
                        Ok(Err(e)) => panic!("read_request I/O error: {e}"),
                        Err(_) => continue,
                    };
                if read == 0 {
                    panic!("connection closed before a full request arrived");
                }
                buf.extend_from_slice(&chunk[..read]);
                assert!(buf.len() <= MAX_REQUEST_BYTES, "request too large");
            };
            let _ = tx.send(req);
            let _ = stream.write_all(&response).await;
        }
    });

    (format!("http://{}", addr), rx)
}

/// Answers requests in order with `responses`, one connection per request,
/// then stops.
pub fn serve_sequence(
    responses: Vec<String>,
) -> (
    String,
    mpsc::Receiver<CapturedRequest>,
    thread::JoinHandle<()>,
) {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            stream
                .set_read_timeout(Some(MAX_READ_DURATION))
                .expect("read timeout");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let req = loop {
                if let Some((req, _)) = parse_request(&buf) {
                    break req;
                }
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => panic!("connection closed before a full request arrived"),
                    Ok(read) => buf.extend_from_slice(&chunk[..read]),
                }
            };
            let _ = tx.send(req);
            let _ = stream.write_all(with_connection_close(&response).as_bytes());
        }
    });
    (format!("http://{}", addr), rx, handle)
}

fn with_connection_close(response: &str) -> String {
    match response.split_once("\r\n") {
        Some((status_line, rest)) => format!("{status_line}\r\nConnection: close\r\n{rest}"),
        None => response.to_string(),
    }
}

/// Parses one complete request from the front of `buf`, returning it with the
/// number of bytes it occupied.
fn parse_request(buf: &[u8]) -> Option<(CapturedRequest, usize)> {
    let header_end = buf.windows(4).position(|w| w == b"\r\n\r\n")? + 4;
    let header_str = String::from_utf8_lossy(&buf[..header_end]);
    let mut lines = header_str.split("\r\n");
    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let path = request_line.next().unwrap_or("").to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    for line in lines.filter(|line| !line.is_empty()) {
        if let Some((name, value)) = line.split_once(':') {
            let (name, value) = (name.trim(), value.trim());
            if name.eq_ignore_ascii_case("Content-Length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name.to_string(), value.to_string()));
        }
    }

    let total = header_end + content_length;
    if buf.len() < total {
        return None;
    }
    let req = CapturedRequest {
        method,
        path,
        headers,
        body: buf[header_end..total].to_vec(),
    };
    Some((req, total))
}
