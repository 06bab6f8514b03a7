//! End-to-end tests of the HTTP surface.

use std::sync::Arc;
use std::time::Duration;

use cart_server::config::CartConfig;
use cart_server::lifecycle::startup::{load_view, StartupError};
use cart_server::view::TemplateView;
use reqwest::StatusCode;

mod common;

fn inline_view() -> Arc<TemplateView> {
    Arc::new(TemplateView::from_source(common::TEMPLATE).unwrap())
}

#[tokio::test]
async fn test_cart_scenario() {
    let server = common::start_server(inline_view()).await;
    let client = common::client();

    for _ in 0..3 {
        let res = client.get(server.url("/api/add")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()["location"], "/");
    }
    let ids: Vec<_> = server
        .store
        .snapshot()
        .into_iter()
        .map(|i| i.item_number.to_string())
        .collect();

    let res = client
        .post(server.url("/api/updatecomment"))
        .form(&[("itemnumber", "1"), ("comment", "hello")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let res = client
        .post(server.url("/api/delete"))
        .form(&[("itemnumber", "0")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let res = client
        .post(server.url("/api/updatecomment"))
        .form(&[("itemnumber", "5"), ("comment", "x")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let page = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    let body = page.text().await.unwrap();
    assert_eq!(
        body,
        format!(
            "<ul data-count=\"2\"><li>0|{}|hello</li><li>1|{}|</li></ul>",
            ids[1], ids[2]
        )
    );

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_render_is_idempotent() {
    let server = common::start_server(inline_view()).await;
    let client = common::client();
    server.store.add();
    server.store.add();

    let first = client.get(server.url("/")).send().await.unwrap().text().await.unwrap();
    let second = client.get(server.url("/")).send().await.unwrap().text().await.unwrap();
    assert_eq!(first, second);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_comment_is_escaped_in_page() {
    let server = common::start_server(inline_view()).await;
    let client = common::client();
    server.store.add();

    let res = client
        .post(server.url("/api/updatecomment"))
        .form(&[("itemnumber", "0"), ("comment", "<script>")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let body = client.get(server.url("/")).send().await.unwrap().text().await.unwrap();
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let server = common::start_server(inline_view()).await;
    let client = common::client();
    server.store.add();

    let huge = "x".repeat(CartConfig::default().security.max_body_size + 1);
    let res = client
        .post(server.url("/api/updatecomment"))
        .form(&[("itemnumber", "0"), ("comment", huge.as_str())])
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
    assert_eq!(server.store.snapshot()[0].comment, "");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_missing_template_fails_startup() {
    let mut config = CartConfig::default();
    config.view.template_path = common::temp_path("missing.tmpl").to_string_lossy().into_owned();
    assert!(matches!(load_view(&config), Err(StartupError::Template(_))));
}

#[tokio::test]
async fn test_template_edit_is_picked_up() {
    let path = common::temp_path("live.tmpl");
    std::fs::write(&path, "before {{count}}").unwrap();

    let mut config = CartConfig::default();
    config.view.template_path = path.to_string_lossy().into_owned();
    config.view.watch = true;
    let (view, _watcher) = load_view(&config).unwrap();

    let server = common::start_server(view).await;
    let client = common::client();
    assert_eq!(
        client.get(server.url("/")).send().await.unwrap().text().await.unwrap(),
        "before 0"
    );

    std::fs::write(&path, "after {{count}}").unwrap();

    let mut body = String::new();
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        body = client.get(server.url("/")).send().await.unwrap().text().await.unwrap();
        if body == "after 0" {
            break;
        }
    }
    assert_eq!(body, "after 0");

    server.shutdown.trigger();
    std::fs::remove_file(&path).unwrap_or_default();
}
