//! Tests for the optional legacy route aliases.

use chirpd::config::ServiceConfig;

mod common;

#[tokio::test]
async fn aliases_are_absent_by_default() {
    let (addr, shutdown) = common::spawn_service(ServiceConfig::default()).await;
    let client = common::client();

    for path in ["/healthz", "/metrics"] {
        let res = client
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 404, "{path} should not be mounted");
    }

    let reset = client
        .post(format!("http://{}/reset", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(reset.status(), 404);

    // The canonical surface is untouched by the flag.
    let health = client
        .get(format!("http://{}/api/healthz", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn aliases_mirror_the_canonical_handlers_when_enabled() {
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("index.html"), "hi").unwrap();

    let mut config = ServiceConfig::default();
    config.site.root = site.path().to_str().unwrap().to_string();
    config.compat.legacy_routes = true;

    let (addr, shutdown) = common::spawn_service(config).await;
    let client = common::client();

    let health = client
        .get(format!("http://{}/healthz", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), 200);
    assert_eq!(health.text().await.unwrap(), "OK");

    for _ in 0..2 {
        client
            .get(format!("http://{}/app/index.html", addr))
            .send()
            .await
            .unwrap();
    }

    let metrics = client
        .get(format!("http://{}/metrics", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(metrics.status(), 200);
    assert_eq!(metrics.text().await.unwrap(), "Hits: 2");

    let reset = client
        .post(format!("http://{}/reset", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(reset.status(), 200);

    let after = client
        .get(format!("http://{}/metrics", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(after.text().await.unwrap(), "Hits: 0");

    shutdown.trigger();
}
