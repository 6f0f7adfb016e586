// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport tests against a wiremock store service.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use sd_core::{Engine, StoreStatus};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "engine": "woocommerce",
        "display_name": null,
        "namespace": format!("store-{}", id),
        "release_name": format!("store-{}", id),
        "status": status,
        "url": null,
        "last_error": null,
        "created_at": "2026-02-12T10:00:00+00:00",
        "updated_at": "2026-02-12T10:00:00+00:00"
    })
}

#[tokio::test]
async fn base_url_path_is_joined() {
    let cases = [
        ("/", "/stores"),
        ("/api", "/api/stores"),
        ("/api/", "/api/stores"),
    ];
    for (suffix, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(format!("{}{}", server.uri(), suffix));
        let stores = transport.list_stores().await.unwrap();

        assert!(stores.is_empty(), "base url suffix {:?}", suffix);
    }
}

#[tokio::test]
async fn store_id_is_percent_encoded_as_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/a%2Fb%3Fc"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut body = store_json("a/b?c", "READY");
            body["events"] = serde_json::json!([]);
            body
        }))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/stores/..%2Fx"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let detail = transport.get_store("a/b?c").await.unwrap();
    let reply = transport.delete_store("../x").await.unwrap();

    assert_eq!(detail.id(), "a/b?c");
    assert_eq!(reply, Reply::NoContent);
}

#[tokio::test]
async fn unparseable_base_url_is_network_error() {
    let transport = HttpTransport::new("not a url");
    let err = transport.list_stores().await.unwrap_err();

    assert!(matches!(err, TransportError::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn list_stores_decodes_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            store_json("a", "READY"),
            store_json("b", "HIBERNATING"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let stores = transport.list_stores().await.unwrap();

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].status, StoreStatus::Ready);
    assert_eq!(
        stores[1].status,
        StoreStatus::Unknown("HIBERNATING".to_string())
    );
}

#[tokio::test]
async fn get_store_decodes_detail() {
    let server = MockServer::start().await;
    let mut body = store_json("s1", "READY");
    body["events"] = serde_json::json!([
        {"id": 2, "event_type": "ready", "message": "Ready", "created_at": "2026-02-12T10:05:00Z"},
        {"id": 1, "event_type": "queued", "message": "Queued", "created_at": "2026-02-12T10:00:00Z"}
    ]);
    Mock::given(method("GET"))
        .and(path("/stores/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let detail = transport.get_store("s1").await.unwrap();

    assert_eq!(detail.id(), "s1");
    assert_eq!(detail.events.len(), 2);
    assert_eq!(detail.events[0].event_type, "ready");
}

#[tokio::test]
async fn get_admin_credentials_hits_credentials_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/s1/admin-credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "store_id": "s1",
            "username": "admin",
            "password": "secret",
            "admin_url": "http://s1.example/wp-admin"
        })))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let creds = transport.get_admin_credentials("s1").await.unwrap();

    assert_eq!(creds.username, "admin");
    assert_eq!(creds.admin_url, "http://s1.example/wp-admin");
}

#[tokio::test]
async fn create_store_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores"))
        .and(body_json(serde_json::json!({
            "engine": "woocommerce",
            "display_name": "Acme"
        })))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(serde_json::json!({"store_id": "abc123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let request = CreateStoreRequest::new(Engine::WooCommerce, Some("Acme"));
    let receipt = transport.create_store(&request).await.unwrap();

    assert_eq!(receipt.store_id, "abc123");
}

#[tokio::test]
async fn delete_store_with_body_returns_payload() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/s1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "store_id": "s1",
            "status": "DELETING",
            "namespace": "store-s1",
            "queued_job_id": "job-1"
        })))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let reply = transport.delete_store("s1").await.unwrap();

    let receipt = reply.payload().expect("payload");
    assert_eq!(receipt.status, Some(StoreStatus::Deleting));
}

#[tokio::test]
async fn delete_store_204_is_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/s1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let reply = transport.delete_store("s1").await.unwrap();

    assert_eq!(reply, Reply::NoContent);
}

#[tokio::test]
async fn failure_carries_raw_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_string("{\"detail\":\"Maximum active store limit reached.\"}"),
        )
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let request = CreateStoreRequest::new(Engine::WooCommerce, None);
    let err = transport.create_store(&request).await.unwrap_err();

    assert_eq!(
        err,
        TransportError::Status {
            status: 409,
            message: "{\"detail\":\"Maximum active store limit reached.\"}".to_string(),
        }
    );
}

#[tokio::test]
async fn failure_with_empty_body_synthesizes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let err = transport.list_stores().await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed (503)");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"stores\": []}"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let err = transport.list_stores().await.unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn list_with_204_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let err = transport.list_stores().await.unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let transport = HttpTransport::new("http://127.0.0.1:9");
    let err = transport.list_stores().await.unwrap_err();

    assert!(matches!(err, TransportError::Network(_)));
}
