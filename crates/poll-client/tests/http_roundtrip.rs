//! End-to-end tests of the resource wrapper against an in-process HTTP server.
//!
//! A `tiny_http` server answers a scripted list of responses and records every
//! request it sees, so each test can assert on both sides of the exchange.

use std::io::Read;
use std::sync::mpsc;
use std::thread::JoinHandle;

use chrono::NaiveDate;
use poll_client::{ClientError, PollClient, PollResource, RequestOptions};
use poll_config::ApiConfig;
use poll_core::Poll;
use pretty_assertions::assert_eq;

struct Canned {
    status: u16,
    body: &'static str,
    headers: Vec<(&'static str, &'static str)>,
}

impl Canned {
    fn json(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            headers: vec![("Content-Type", "application/json")],
        }
    }

    fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }
}

#[derive(Debug)]
struct Recorded {
    method: String,
    url: String,
    body: String,
    authorization: Option<String>,
}

struct MockServer {
    base_url: String,
    requests: mpsc::Receiver<Recorded>,
    handle: JoinHandle<()>,
}

impl MockServer {
    fn start(script: Vec<Canned>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("mock server should bind");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("mock server should have a port");
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            for canned in script {
                let mut request = server.recv().expect("mock server recv");
                let mut body = String::new();
                request
                    .as_reader()
                    .read_to_string(&mut body)
                    .expect("request body should be utf-8");
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.to_string());
                tx.send(Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    body,
                    authorization,
                })
                .expect("test should still be listening");

                let mut response =
                    tiny_http::Response::from_string(canned.body).with_status_code(canned.status);
                for (name, value) in canned.headers {
                    response = response.with_header(
                        tiny_http::Header::from_bytes(name, value).expect("valid header"),
                    );
                }
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests: rx,
            handle,
        }
    }

    fn client(&self) -> PollClient {
        self.client_with_token("")
    }

    fn client_with_token(&self, token: &str) -> PollClient {
        PollClient::new(&ApiConfig {
            base_url: self.base_url.clone(),
            token: token.to_string(),
            ..ApiConfig::default()
        })
        .expect("client should build")
    }

    fn next_request(&self) -> Recorded {
        self.requests.recv().expect("a request should have been recorded")
    }

    fn finish(self) {
        self.handle.join().expect("mock server thread panicked");
    }
}

fn draft() -> Poll {
    Poll {
        id: None,
        title: "Team lunch".into(),
        description: Some("Friday".into()),
        expiration: NaiveDate::from_ymd_opt(2017, 6, 15),
        options: "Pizza,Sushi".into(),
        voters: "alice,bob".into(),
    }
}

#[tokio::test]
async fn create_posts_wire_payload_and_converts_response() {
    let server = MockServer::start(vec![Canned::json(
        201,
        r#"{"id":11,"title":"Team lunch","description":"Friday","expiration":"2017-06-15","options":"Pizza,Sushi","voters":"alice,bob"}"#,
    )]);

    let created = server.client().create(&draft()).await.unwrap();
    assert_eq!(created.id, Some(11));
    assert_eq!(created.expiration, NaiveDate::from_ymd_opt(2017, 6, 15));

    let request = server.next_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/api/polls");
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert!(sent.get("id").is_none());
    assert_eq!(sent["expiration"], "2017-06-15");
    assert_eq!(sent["options"], "Pizza,Sushi");
    assert_eq!(sent["voters"], "alice,bob");
    assert_eq!(request.authorization, None);
    server.finish();
}

#[tokio::test]
async fn update_puts_to_collection() {
    let server = MockServer::start(vec![Canned::json(
        200,
        r#"{"id":11,"title":"Team dinner","expiration":"2017-07-01","options":"Tacos","voters":"alice"}"#,
    )]);

    let poll = Poll {
        id: Some(11),
        title: "Team dinner".into(),
        expiration: NaiveDate::from_ymd_opt(2017, 7, 1),
        options: "Tacos".into(),
        voters: "alice".into(),
        description: None,
    };
    let updated = server.client_with_token("s3cret").update(&poll).await.unwrap();
    assert_eq!(updated, poll);

    let request = server.next_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.url, "/api/polls");
    assert_eq!(request.authorization.as_deref(), Some("Bearer s3cret"));
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent["id"], 11);
    assert_eq!(sent["expiration"], "2017-07-01");
    server.finish();
}

#[tokio::test]
async fn find_gets_by_id() {
    let server = MockServer::start(vec![Canned::json(
        200,
        r#"{"id":4,"title":"Retro","expiration":null,"options":"A,B","voters":""}"#,
    )]);

    let poll = server.client().find(4).await.unwrap();
    assert_eq!(poll.title, "Retro");
    assert_eq!(poll.expiration, None);

    let request = server.next_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "/api/polls/4");
    server.finish();
}

#[tokio::test]
async fn query_wraps_headers_body_and_status() {
    let server = MockServer::start(vec![
        Canned::json(
            200,
            r#"[{"id":1,"title":"One","expiration":"1970-01-01","options":"","voters":""},{"id":2,"title":"Two","expiration":"2017-06-15","options":"x","voters":"y"}]"#,
        )
        .with_header("X-Total-Count", "12")
        .with_header(
            "Link",
            r#"</api/polls?page=1&size=2>; rel="next",</api/polls?page=5&size=2>; rel="last""#,
        ),
    ]);

    let options = RequestOptions::new().page(0).size(2).sort("id,asc");
    let page = server.client().query(&options).await.unwrap();
    assert_eq!(page.status, 200);
    assert_eq!(page.body.len(), 2);
    assert_eq!(page.body[0].expiration, NaiveDate::from_ymd_opt(1970, 1, 1));
    assert_eq!(page.total_count(), Some(12));
    let links = page.links().unwrap();
    assert_eq!(links.get("next"), Some(&1));
    assert_eq!(links.get("last"), Some(&5));

    let request = server.next_request();
    assert_eq!(request.url, "/api/polls?page=0&size=2&sort=id%2Casc");
    server.finish();
}

#[tokio::test]
async fn delete_returns_status() {
    let server = MockServer::start(vec![Canned {
        status: 200,
        body: "",
        headers: Vec::new(),
    }]);

    let status = server.client().delete(9).await.unwrap();
    assert_eq!(status, 200);

    let request = server.next_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.url, "/api/polls/9");
    server.finish();
}

#[tokio::test]
async fn structured_error_body_is_decoded() {
    let server = MockServer::start(vec![Canned::json(
        400,
        r#"{"message":"error.validation","description":"Method argument not valid","fieldErrors":[{"objectName":"poll","field":"title","message":"NotNull"}]}"#,
    )]);

    let err = server.client().create(&draft()).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "error.validation");
    match err {
        ClientError::Server { body, .. } => assert_eq!(body.field_errors[0].field, "title"),
        other => panic!("expected structured error, got {other:?}"),
    }
    server.finish();
}

#[tokio::test]
async fn plain_text_error_falls_back_to_raw_text() {
    let server = MockServer::start(vec![Canned {
        status: 500,
        body: "Internal Server Error",
        headers: vec![("Content-Type", "text/plain")],
    }]);

    let err = server.client().find(1).await.unwrap_err();
    assert!(matches!(err, ClientError::ServerText { status: 500, .. }));
    assert_eq!(err.user_message(), "Internal Server Error");
    server.finish();
}

#[tokio::test]
async fn invalid_server_date_surfaces_as_core_error() {
    let server = MockServer::start(vec![Canned::json(
        200,
        r#"{"id":4,"title":"Retro","expiration":"someday","options":"","voters":""}"#,
    )]);

    let err = server.client().find(4).await.unwrap_err();
    assert!(matches!(err, ClientError::Core(_)));
    server.finish();
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = PollClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:1".into(),
        timeout_secs: 2,
        ..ApiConfig::default()
    })
    .unwrap();
    let err = client.find(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
