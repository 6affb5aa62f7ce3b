//! End-to-end tests over HTTP: request → router → dispatcher → handler →
//! store → response, against a server on an ephemeral port.

mod common;

use common::http::{delete, get, send_request, with_body};
use common::test_server::TestServer;
use petstore::dispatcher::{Dispatcher, HandlerRequest, HandlerResponse};
use petstore::handlers;
use petstore::ids::RequestId;
use petstore::middleware::Middleware;
use petstore::pet::{Pet, PetStatus};
use petstore::router::Router;
use petstore::server::AppService;
use petstore::spec::routes;
use petstore::store::InMemoryPetStore;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn test_find_by_id_returns_stored_record() {
    let server = TestServer::start(InMemoryPetStore::with_demo_data());
    for id in 1..=10 {
        let resp = get(&server.addr, &format!("/pet/{id}"));
        assert_eq!(resp.status, 200);
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.json()["id"], id);
    }
    let resp = get(&server.addr, "/pet/3");
    assert_eq!(resp.json()["status"], "pending");
    assert_eq!(resp.json()["name"], "Cat 3");
}

#[test]
fn test_find_by_id_absent_is_not_found() {
    let server = TestServer::start(InMemoryPetStore::new());
    let resp = get(&server.addr, "/pet/999");
    assert_eq!(resp.status, 404);
    assert_eq!(resp.json(), json!({"code": 404, "message": "Pet not found"}));
}

#[test]
fn test_find_by_id_non_numeric_is_invalid_parameter() {
    let server = TestServer::start(InMemoryPetStore::with_demo_data());
    let resp = get(&server.addr, "/pet/abc");
    assert_eq!(resp.status, 400);
    assert_eq!(resp.json(), json!({"code": 400, "message": "Invalid id supplied"}));
}

#[test]
fn test_find_by_status_union() {
    let server = TestServer::start(InMemoryPetStore::with_pets([
        Pet::new(1, "a", PetStatus::Available),
        Pet::new(2, "p", PetStatus::Pending),
        Pet::new(3, "s", PetStatus::Sold),
    ]));
    let resp = get(&server.addr, "/pet/findByStatus?status=available,sold");
    assert_eq!(resp.status, 200);
    assert_eq!(ids(&resp.json()), vec![1, 3]);

    let resp = get(&server.addr, "/pet/findByStatus?status=available%2Csold");
    assert_eq!(ids(&resp.json()), vec![1, 3]);
}

#[test]
fn test_find_by_status_missing_query() {
    let server = TestServer::start(InMemoryPetStore::new());
    let resp = get(&server.addr, "/pet/findByStatus");
    assert_eq!(resp.status, 400);
    assert_eq!(resp.json()["message"], "Invalid status supplied");
}

#[test]
fn test_find_by_tags_no_match_is_empty_array() {
    let server = TestServer::start(InMemoryPetStore::with_demo_data());
    let resp = get(&server.addr, "/pet/findByTags?tags=nope");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.json(), json!([]));

    let resp = get(&server.addr, "/pet/findByTags?tags=tag1,nope");
    assert_eq!(resp.status, 200);
    assert!(!ids(&resp.json()).is_empty());
}

#[test]
fn test_add_then_find_round_trip() {
    let server = TestServer::start(InMemoryPetStore::new());
    let body = r#"{"id":1,"name":"Rex","status":"available","tags":[]}"#;
    let resp = with_body(&server.addr, "POST", "/pet", body);
    assert_eq!(resp.status, 200);

    let resp = get(&server.addr, "/pet/1");
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.json(),
        json!({"id": 1, "name": "Rex", "status": "available", "tags": []})
    );
}

#[test]
fn test_absent_fields_not_filled_in() {
    let server = TestServer::start(InMemoryPetStore::new());
    let resp = with_body(&server.addr, "POST", "/pet", r#"{"id":7}"#);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.json(), json!({"id": 7}));
    assert_eq!(get(&server.addr, "/pet/7").json(), json!({"id": 7}));
}

#[test]
fn test_update_replaces_fields() {
    let server = TestServer::start(InMemoryPetStore::with_pets([Pet::new(
        7,
        "Rex",
        PetStatus::Available,
    )]));
    let resp = with_body(
        &server.addr,
        "PUT",
        "/pet",
        r#"{"id":7,"name":"Rex","status":"sold","tags":["old"]}"#,
    );
    assert_eq!(resp.status, 200);
    assert_eq!(resp.json(), json!({"success": true}));

    let pet = get(&server.addr, "/pet/7").json();
    assert_eq!(pet["status"], "sold");
    assert_eq!(pet["tags"], json!(["old"]));
}

#[test]
fn test_delete_is_idempotent() {
    let server = TestServer::start(InMemoryPetStore::with_demo_data());
    let resp = delete(&server.addr, "/pet/4");
    assert_eq!(resp.status, 204);
    assert!(resp.body.is_empty());

    let resp = delete(&server.addr, "/pet/4");
    assert_eq!(resp.status, 204);

    assert_eq!(get(&server.addr, "/pet/4").status, 404);
}

#[test]
fn test_body_without_id_is_rejected_without_mutation() {
    let server = TestServer::start(InMemoryPetStore::new());
    for method in ["POST", "PUT"] {
        let resp = with_body(&server.addr, method, "/pet", r#"{"name":"NoId"}"#);
        assert_eq!(resp.status, 400);
        let body = resp.json();
        assert_eq!(body["message"], "Invalid input for pet");
        assert!(body["details"].as_array().is_some_and(|d| !d.is_empty()));
    }
    assert_eq!(
        get(&server.addr, "/pet/findByStatus?status=available,pending,sold").json(),
        json!([])
    );
}

#[test]
fn test_invalid_json_body_is_invalid_input() {
    let server = TestServer::start(InMemoryPetStore::new());
    let resp = with_body(&server.addr, "POST", "/pet", "{not json");
    assert_eq!(resp.status, 400);
    assert_eq!(resp.json()["message"], "Invalid input for pet");
}

#[test]
fn test_unknown_route_is_not_found() {
    let server = TestServer::start(InMemoryPetStore::new());
    let resp = get(&server.addr, "/store/inventory");
    assert_eq!(resp.status, 404);
    assert_eq!(
        resp.json(),
        json!({"error": "Not Found", "method": "GET", "path": "/store/inventory"})
    );

    let resp = send_request(&server.addr, "PATCH /pet HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert_eq!(resp.status, 404);
}

/// Remembers the request id of every dispatched request.
#[derive(Default)]
struct RecordRequestIds(Mutex<Vec<RequestId>>);

impl Middleware for RecordRequestIds {
    fn before(&self, req: &HandlerRequest) -> Option<HandlerResponse> {
        self.0.lock().unwrap().push(req.request_id);
        None
    }
}

fn start_recording_server() -> (TestServer, Arc<RecordRequestIds>) {
    let recorder = Arc::new(RecordRequestIds::default());
    let mut dispatcher = Dispatcher::new();
    handlers::register_all(&mut dispatcher, Arc::new(InMemoryPetStore::with_demo_data()));
    dispatcher.add_middleware(Arc::clone(&recorder) as Arc<dyn Middleware>);
    let service = AppService::new(Router::new(routes()), dispatcher);
    (TestServer::start_service(service), recorder)
}

#[test]
fn test_incoming_request_id_is_reused() {
    let (server, recorder) = start_recording_server();
    let sent = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    let resp = send_request(
        &server.addr,
        &format!("GET /pet/1 HTTP/1.1\r\nHost: localhost\r\nX-Request-Id: {sent}\r\n\r\n"),
    );
    assert_eq!(resp.status, 200);

    let seen = recorder.0.lock().unwrap().clone();
    assert_eq!(seen, vec![sent.parse::<RequestId>().unwrap()]);
}

#[test]
fn test_invalid_request_id_is_replaced() {
    let (server, recorder) = start_recording_server();
    let resp = send_request(
        &server.addr,
        "GET /pet/1 HTTP/1.1\r\nHost: localhost\r\nX-Request-Id: not-a-ulid\r\n\r\n",
    );
    assert_eq!(resp.status, 200);
    assert_eq!(get(&server.addr, "/pet/2").status, 200);

    let seen = recorder.0.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert_ne!(seen[0], seen[1]);
}
