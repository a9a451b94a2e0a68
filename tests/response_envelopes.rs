//! Purpose: Cover status-envelope checks and typed response bodies.
//! Exports: Integration tests only (no runtime exports).
//! Role: Exercise `api::decode_response` with representative registrar bodies.
//! Invariants: API status failures and server error bodies stay separate error kinds.

use porkbun_codec::api::{
    CreateResponse, ErrorKind, NameServersResponse, PingResponse, RetrieveResponse, ServerError,
    decode_response,
};

#[test]
fn ping_response_decodes_after_success_status() {
    let body = br#"{"status":"SUCCESS","yourIp":"203.0.113.7"}"#;
    let ping: PingResponse = decode_response(body).expect("ping");
    assert!(ping.status.is_success());
    assert_eq!(ping.your_ip, "203.0.113.7");
}

#[test]
fn create_response_reads_numeric_id() {
    let body = br#"{"status":"SUCCESS","id":106926652}"#;
    let created: CreateResponse = decode_response(body).expect("create");
    assert_eq!(created.id, 106_926_652);
}

#[test]
fn retrieve_response_reads_string_typed_records() {
    let body = br#"{
        "status": "SUCCESS",
        "records": [
            {"id": "106926659", "name": "www.borseth.ink", "type": "A",
             "content": "1.1.1.1", "ttl": "600", "prio": "0", "notes": ""}
        ]
    }"#;
    let retrieved: RetrieveResponse = decode_response(body).expect("retrieve");
    assert_eq!(retrieved.records.len(), 1);
    assert_eq!(retrieved.records[0].record_type, "A");
    assert_eq!(retrieved.records[0].ttl, "600");
}

#[test]
fn name_servers_response_reads_ns_list() {
    let body = br#"{"status":"SUCCESS","ns":["curitiba.ns.porkbun.com","fortaleza.ns.porkbun.com"]}"#;
    let response: NameServersResponse = decode_response(body).expect("ns");
    assert_eq!(response.name_servers.len(), 2);
}

#[test]
fn error_status_is_an_api_error() {
    let body = br#"{"status":"ERROR","message":"Domain is not opted in to API access."}"#;
    let err = decode_response::<PingResponse>(body).expect_err("api error");
    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(!err.kind().is_decode());
    assert_eq!(
        err.message(),
        Some("ERROR: Domain is not opted in to API access.")
    );
}

#[test]
fn server_error_body_is_a_server_error() {
    let server: ServerError =
        serde_json::from_slice(br#"{"statusCode":429,"message":"rate limited"}"#)
            .expect("server error");
    let err = server.into_error();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_ne!(err.kind(), ErrorKind::Api);
}

#[test]
fn schema_mismatch_after_success_is_malformed() {
    let body = br#"{"status":"SUCCESS","id":"not-a-number"}"#;
    let err = decode_response::<CreateResponse>(body).expect_err("malformed");
    assert_eq!(err.kind(), ErrorKind::MalformedJson);
}
