use crate::error::{Error, CONFIG_ERROR_REDIRECT_WITH_AUTH};
use crate::models::{
    GetRequestedServiceQuotaChangeInput, GetServiceQuotaInput, RequestServiceQuotaIncreaseInput,
    RequestStatus,
};
use crate::quotas::{ServiceQuotasClient, ServiceQuotasClientBuilder};
use crate::sigv4::{Credentials, SigV4Signer};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

#[test]
fn get_service_quota_posts_json_with_target() {
    let body = r#"{"Quota":{"ServiceCode":"ec2","QuotaCode":"L-1216C47A","QuotaName":"Running On-Demand Standard instances","Value":64.0,"Adjustable":true,"Period":{"PeriodValue":1,"PeriodUnit":"SECOND"}}}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ServiceQuotasClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let output = client
        .get_service_quota(&GetServiceQuotaInput::new("ec2", "L-1216C47A"))
        .expect("request");
    let quota = output.quota.expect("quota");
    assert_eq!(quota.value, Some(64.0));
    assert_eq!(quota.adjustable, Some(true));
    assert_eq!(
        quota.period.and_then(|p| p.period_unit).as_deref(),
        Some("SECOND")
    );

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/");
    assert_eq!(
        req.headers.get("x-amz-target").map(String::as_str),
        Some("ServiceQuotasV20190624.GetServiceQuota")
    );
    assert_eq!(
        req.headers.get("content-type").map(String::as_str),
        Some("application/x-amz-json-1.1")
    );
    assert!(req.headers.get("authorization").is_none());
    let sent: serde_json::Value = serde_json::from_slice(&req.body).expect("json body");
    assert_eq!(
        sent,
        serde_json::json!({"ServiceCode": "ec2", "QuotaCode": "L-1216C47A"})
    );

    handle.join().expect("server");
}

#[test]
fn request_increase_sends_desired_value() {
    let body = r#"{"RequestedQuota":{"Id":"req-42","Status":"PENDING","DesiredValue":128.0}}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ServiceQuotasClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let output = client
        .request_service_quota_increase(&RequestServiceQuotaIncreaseInput::new(
            "ec2",
            "L-1216C47A",
            128.0,
        ))
        .expect("request");
    let change = output.requested_quota.expect("requested quota");
    assert_eq!(change.id.as_deref(), Some("req-42"));
    assert_eq!(change.status, Some(RequestStatus::Pending));

    let req = rx.recv().expect("request");
    assert_eq!(
        req.headers.get("x-amz-target").map(String::as_str),
        Some("ServiceQuotasV20190624.RequestServiceQuotaIncrease")
    );
    let sent: serde_json::Value = serde_json::from_slice(&req.body).expect("json body");
    assert_eq!(sent["DesiredValue"], serde_json::json!(128.0));

    handle.join().expect("server");
}

#[test]
fn get_requested_change_maps_no_such_resource() {
    let body = r#"{"__type":"com.amazonaws.servicequotas#NoSuchResourceException","message":"request not found"}"#;
    let response = response_with_body(
        "400 Bad Request",
        &[
            ("Content-Type", "application/x-amz-json-1.1"),
            ("x-amzn-RequestId", "rid-7"),
        ],
        body,
    );
    let (base_url, rx, handle) = serve_once(response);
    let client = ServiceQuotasClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let err = client
        .get_requested_service_quota_change(&GetRequestedServiceQuotaChangeInput::new("req-1"))
        .expect_err("not found");
    assert!(err.is_not_found());
    let api = err.api_error().expect("api error");
    assert_eq!(api.status, 400);
    assert_eq!(api.message, "request not found");
    assert_eq!(api.request_id.as_deref(), Some("rid-7"));

    let req = rx.recv().expect("request");
    let sent: serde_json::Value = serde_json::from_slice(&req.body).expect("json body");
    assert_eq!(sent, serde_json::json!({"RequestId": "req-1"}));

    handle.join().expect("server");
}

#[test]
fn server_error_without_body_uses_reason_phrase() {
    let response = "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\n\r\n".to_string();
    let (base_url, _rx, handle) = serve_once(response);
    let client = ServiceQuotasClient::builder(&base_url)
        .expect("builder")
        .build()
        .expect("build");

    let err = client
        .get_service_quota(&GetServiceQuotaInput::new("ec2", "L-1"))
        .expect_err("unavailable");
    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 503);
            assert!(api.code.is_empty());
            assert_eq!(api.message, "Service Unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    handle.join().expect("server");
}

#[test]
fn signed_requests_carry_authorization() {
    let (base_url, rx, handle) = serve_once(json_response("200 OK", r#"{"Quota":{}}"#));
    let signer = SigV4Signer::new(
        Credentials::new("AKIDEXAMPLE", "secret").with_session_token("session"),
        "us-west-2",
    );
    let client = ServiceQuotasClient::builder(&base_url)
        .expect("builder")
        .sigv4(signer)
        .build()
        .expect("build");

    client
        .get_service_quota(&GetServiceQuotaInput::new("ec2", "L-1"))
        .expect("request");

    let req = rx.recv().expect("request");
    let auth = req.headers.get("authorization").expect("authorization");
    assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(auth.contains("/us-west-2/servicequotas/aws4_request"));
    assert!(req.headers.contains_key("x-amz-date"));
    assert_eq!(
        req.headers.get("x-amz-security-token").map(String::as_str),
        Some("session")
    );

    handle.join().expect("server");
}

#[test]
fn static_auth_header_is_sent() {
    let (base_url, rx, handle) = serve_once(json_response("200 OK", r#"{}"#));
    let client = ServiceQuotasClient::builder(&base_url)
        .expect("builder")
        .static_auth_header("X-Proxy-Auth", "token")
        .build()
        .expect("build");

    let output = client
        .get_service_quota(&GetServiceQuotaInput::new("ec2", "L-1"))
        .expect("request");
    assert!(output.quota.is_none());

    let req = rx.recv().expect("request");
    assert_eq!(
        req.headers.get("x-proxy-auth").map(String::as_str),
        Some("token")
    );

    handle.join().expect("server");
}

#[test]
fn auth_requires_redirects_disabled() {
    let err = match ServiceQuotasClient::builder("https://servicequotas.us-east-1.amazonaws.com")
        .expect("builder")
        .disable_redirect(false)
        .static_auth_header("X-Proxy-Auth", "token")
        .build()
    {
        Ok(_) => panic!("expected error"),
        Err(err) => err,
    };
    match err {
        Error::Config(message) => assert_eq!(message, CONFIG_ERROR_REDIRECT_WITH_AUTH),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn builder_for_region_uses_public_endpoint() {
    let client = ServiceQuotasClientBuilder::for_region("eu-central-1")
        .expect("builder")
        .build()
        .expect("build");
    assert_eq!(
        client.endpoint().as_str(),
        "https://servicequotas.eu-central-1.amazonaws.com/"
    );
}

#[test]
fn builder_from_lookup_signs_with_env_region() {
    let vars: HashMap<&str, &str> = [
        ("AWS_REGION", "sa-east-1"),
        ("AWS_ENDPOINT_URL_SERVICE_QUOTAS", "http://127.0.0.1:4566"),
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
    ]
    .into_iter()
    .collect();
    let builder =
        ServiceQuotasClientBuilder::from_lookup(|name: &str| vars.get(name).map(|v| v.to_string()))
            .expect("builder");
    let client = builder.build().expect("build");
    assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:4566/");
    match &client.auth {
        Some(crate::quotas::common::AuthProvider::SigV4(signer)) => {
            assert_eq!(signer.region(), "sa-east-1");
        }
        _ => panic!("expected sigv4 auth"),
    }
}

struct CapturedRequest {
    method: String,
    path: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

fn json_response(status: &str, body: &str) -> String {
    response_with_body(status, &[("Content-Type", "application/x-amz-json-1.1")], body)
}

fn response_with_body(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {status}\r\n");
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str(&format!("Content-Length: {}\r\n\r\n{}", body.len(), body));
    response
}

fn serve_once(
    response: String,
) -> (
    String,
    mpsc::Receiver<CapturedRequest>,
    thread::JoinHandle<()>,
) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let req = read_request(&mut stream);
            let _ = tx.send(req);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    (format!("http://{}", addr), rx, handle)
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let read = stream.read(&mut chunk).unwrap_or(0);
        if read == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..read]);
    };

    let header_str = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = header_str.split("\r\n");
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();

    let mut headers = HashMap::new();
    for line in lines {
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut chunk).unwrap_or(0);
        if read == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..read]);
    }

    CapturedRequest {
        method,
        path,
        headers,
        body,
    }
}
