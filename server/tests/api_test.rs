//! Integration tests for the HTTP API.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! listener is bound.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use nestkit_server::{build_router, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(Config::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[cfg(test)]
mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["delimiter"], ".");
        assert_eq!(body["maxBodyBytes"], 2 * 1024 * 1024);
    }

    #[tokio::test]
    async fn test_health_reports_configured_settings() {
        let app = build_router(Config {
            delimiter: "::".to_string(),
            max_body_bytes: 4096,
            ..Config::default()
        });
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["delimiter"], "::");
        assert_eq!(body["maxBodyBytes"], 4096);
    }

    #[tokio::test]
    async fn test_root_banner_lists_endpoints() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let banner = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(banner.starts_with(concat!("nestkit ", env!("CARGO_PKG_VERSION"))));
        assert!(banner.contains("/path/get"));
        assert!(banner.contains("/csv"));
    }
}

#[cfg(test)]
mod structure_tests {
    use super::*;

    #[tokio::test]
    async fn test_flatten_and_unflatten() {
        let node = json!({"a": {"b": 1, "c": {"d": 2}}});

        let (status, body) = post_json(app(), "/flatten", json!({"node": node})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": {"a.b": 1, "a.c.d": 2}}));

        let (status, body) =
            post_json(app(), "/unflatten", json!({"flat": body["result"].clone()})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], node);
    }

    #[tokio::test]
    async fn test_flatten_drops_empty_mappings() {
        let (status, body) =
            post_json(app(), "/flatten", json!({"node": {"a": {}, "b": {"c": {}}, "d": 1}})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!({"d": 1}));
    }

    #[tokio::test]
    async fn test_flatten_honours_configured_delimiter() {
        let app = build_router(Config {
            delimiter: "/".to_string(),
            ..Config::default()
        });
        let (_, body) =
            post_json(app, "/flatten", json!({"node": {"a": {"b": 1}}, "prefix": "p"})).await;
        assert_eq!(body["result"], json!({"p/a/b": 1}));
    }

    #[tokio::test]
    async fn test_merge_deep_and_shallow() {
        let nodes = json!([{"a": {"x": 1}}, {"a": {"y": 2}}]);

        let (_, body) = post_json(app(), "/merge", json!({"nodes": nodes})).await;
        assert_eq!(body["result"], json!({"a": {"x": 1, "y": 2}}));

        let (_, body) = post_json(app(), "/merge", json!({"nodes": nodes, "deep": false})).await;
        assert_eq!(body["result"], json!({"a": {"y": 2}}));
    }

    #[tokio::test]
    async fn test_diff_is_asymmetric() {
        let (_, body) =
            post_json(app(), "/diff", json!({"a": {"a": 1, "b": 2}, "b": {"a": 1}})).await;
        assert_eq!(body["result"], json!({"b": 2}));

        let (_, body) =
            post_json(app(), "/diff", json!({"a": {"a": 1}, "b": {"a": 1, "b": 2}})).await;
        assert_eq!(body["result"], json!({}));
    }

    #[tokio::test]
    async fn test_common_keys() {
        let (_, body) = post_json(
            app(),
            "/common-keys",
            json!({"a": {"a": 1, "b": 2}, "b": {"b": 3, "c": 4}}),
        )
        .await;
        assert_eq!(body["result"], json!(["b"]));
    }
}

#[cfg(test)]
mod path_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_with_string_and_array_paths() {
        let root = json!({"a": {"b.c": 1, "b": {"c": 2}}});

        let (_, body) = post_json(app(), "/path/get", json!({"root": root, "path": "a.b.c"})).await;
        assert_eq!(body, json!({"found": true, "value": 2}));

        let (_, body) =
            post_json(app(), "/path/get", json!({"root": root, "path": ["a", "b.c"]})).await;
        assert_eq!(body, json!({"found": true, "value": 1}));

        let (_, body) = post_json(app(), "/path/get", json!({"root": root, "path": "a.z"})).await;
        assert_eq!(body, json!({"found": false}));
    }

    #[tokio::test]
    async fn test_set_and_remove() {
        let (_, body) = post_json(
            app(),
            "/path/set",
            json!({"root": {"a": 5}, "path": "a.b", "value": true}),
        )
        .await;
        assert_eq!(body["result"], json!({"a": {"b": true}}));

        let (_, body) = post_json(
            app(),
            "/path/remove",
            json!({"root": {"a": 1, "b": 2, "c": 3}, "path": ["b"]}),
        )
        .await;
        assert_eq!(body["result"], json!({"a": 1, "c": 3}));
    }
}

#[cfg(test)]
mod convert_tests {
    use super::*;

    #[tokio::test]
    async fn test_pick_and_omit() {
        let object = json!({"a": 1, "b": 2, "c": 3});

        let (_, body) = post_json(app(), "/pick", json!({"object": object, "keys": ["c", "a"]})).await;
        assert_eq!(body["result"], json!({"c": 3, "a": 1}));

        let (_, body) = post_json(app(), "/omit", json!({"object": object, "keys": ["a"]})).await;
        assert_eq!(body["result"], json!({"b": 2, "c": 3}));
    }

    #[tokio::test]
    async fn test_query_encode_and_decode() {
        let (_, body) = post_json(
            app(),
            "/query/encode",
            json!({"object": {"q": "rust json", "tags": ["a", "b"]}}),
        )
        .await;
        assert_eq!(body, json!({"query": "q=rust%20json&tags=a%2Cb"}));

        let (_, body) =
            post_json(app(), "/query/decode", json!({"query": "?q=rust%20json&flag"})).await;
        assert_eq!(body["result"], json!({"q": "rust json", "flag": null}));
    }

    #[tokio::test]
    async fn test_csv_response() {
        let request = Request::builder()
            .method("POST")
            .uri("/csv")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"rows": [{"id": 1, "name": "Ada"}, {"id": 2}]}).to_string(),
            ))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"id,name\n1,\"Ada\"\n2,");
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_input_is_bad_request() {
        let (status, body) = post_json(app(), "/flatten", json!({"node": [1, 2]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid input to flatten"));
    }

    #[tokio::test]
    async fn test_merge_error_names_position() {
        let (status, body) =
            post_json(app(), "/merge", json!({"nodes": [{"a": 1}, "oops"]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("node 1"));
    }

    #[tokio::test]
    async fn test_csv_rejects_non_array() {
        let (status, body) = post_json(app(), "/csv", json!({"rows": {"a": 1}})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "rows must be an array");
    }

    #[tokio::test]
    async fn test_body_limit_is_enforced() {
        let app = build_router(Config {
            max_body_bytes: 16,
            ..Config::default()
        });
        let (status, _) = post_json(app, "/flatten", json!({"node": {"key": "x".repeat(64)}})).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = post_json(app(), "/nope", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
