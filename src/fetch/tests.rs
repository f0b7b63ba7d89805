// Fetch module tests.

use super::*;
use crate::error_handling::ErrorKind;
use httptest::{matchers::*, responders::*, Expectation, Server};
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_rustls::TlsAcceptor;
use url::Url;

fn test_config(max_redirects: usize) -> Config {
    Config {
        timeout_seconds: 2,
        max_redirects,
        ..Default::default()
    }
}

/// Serves `200 ok` over TLS on 127.0.0.1 with a fresh self-signed certificate
/// for `localhost`. Returns the port and a counter of accepted connections.
async fn spawn_self_signed_upstream() -> (u16, Arc<AtomicUsize>) {
    let key_pair = rcgen::KeyPair::generate().expect("Failed to generate key pair");
    let cert = rcgen::CertificateParams::new(vec!["localhost".to_string()])
        .expect("Invalid certificate params")
        .self_signed(&key_pair)
        .expect("Failed to self-sign certificate");
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));

    let tls_config =
        rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
            .with_safe_default_protocol_versions()
            .expect("Failed to select protocol versions")
            .with_no_client_auth()
            .with_single_cert(vec![cert.der().clone()], key)
            .expect("Failed to build TLS config");
    let acceptor = TlsAcceptor::from(Arc::new(tls_config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    let connections = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&connections);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                // A verifying client aborts the handshake here
                let Ok(mut tls) = acceptor.accept(stream).await else {
                    return;
                };
                let mut buf = [0u8; 4096];
                let mut request = Vec::new();
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match tls.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = tls
                    .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok")
                    .await;
                let _ = tls.shutdown().await;
            });
        }
    });

    (port, connections)
}

fn create_test_resolver(max_redirects: usize) -> DomainResolver {
    DomainResolver::from_config(&test_config(max_redirects)).expect("Failed to build resolver")
}

#[tokio::test]
async fn test_resolve_without_redirects() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body("ok")),
    );

    let url = server.url("/").to_string();
    let resolution = create_test_resolver(30)
        .resolve(&url)
        .await
        .expect("resolve should succeed");

    assert_eq!(resolution.input, url);
    assert_eq!(resolution.final_url, url);
    assert_eq!(resolution.status_code, 200);
    assert!(resolution.history.is_empty());
    assert!(!resolution.tls_bypassed);
}

#[tokio::test]
async fn test_resolve_follows_absolute_and_relative_redirects() {
    let server = Server::run();
    let second = server.url("/second").to_string();
    server.expect(
        Expectation::matching(request::method_path("GET", "/first"))
            .respond_with(status_code(301).append_header("Location", second.as_str())),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/second"))
            .respond_with(status_code(302).append_header("Location", "/final")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/final"))
            .respond_with(status_code(200)),
    );

    let first = server.url("/first").to_string();
    let resolution = create_test_resolver(30)
        .resolve(&first)
        .await
        .expect("resolve should succeed");

    assert_eq!(resolution.final_url, server.url("/final").to_string());
    assert_eq!(resolution.status_code, 200);
    assert_eq!(
        resolution.history,
        vec![
            RedirectStep {
                url: first.clone(),
                status_code: 301
            },
            RedirectStep {
                url: second.clone(),
                status_code: 302
            },
        ]
    );
    assert_eq!(resolution.history_urls(), vec![first, second]);
}

#[tokio::test]
async fn test_resolve_reports_final_non_success_status() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/moved"))
            .respond_with(status_code(308).append_header("Location", "/gone")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .respond_with(status_code(404)),
    );

    let resolution = create_test_resolver(30)
        .resolve(&server.url("/moved").to_string())
        .await
        .expect("a 404 is still a resolved destination");

    assert_eq!(resolution.status_code, 404);
    assert_eq!(resolution.history.len(), 1);
}

#[tokio::test]
async fn test_resolve_redirect_without_location_is_final() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/odd"))
            .respond_with(status_code(302)),
    );

    let url = server.url("/odd").to_string();
    let resolution = create_test_resolver(30)
        .resolve(&url)
        .await
        .expect("resolve should succeed");

    assert_eq!(resolution.final_url, url);
    assert_eq!(resolution.status_code, 302);
    assert!(resolution.history.is_empty());
}

#[tokio::test]
async fn test_resolve_non_redirect_status_with_location_is_final() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/created"))
            .respond_with(status_code(201).append_header("Location", "/elsewhere")),
    );

    let resolution = create_test_resolver(30)
        .resolve(&server.url("/created").to_string())
        .await
        .expect("resolve should succeed");

    assert_eq!(resolution.status_code, 201);
    assert!(resolution.history.is_empty());
}

#[tokio::test]
async fn test_resolve_allows_exactly_max_redirects() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/a"))
            .respond_with(status_code(302).append_header("Location", "/b")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/b"))
            .respond_with(status_code(302).append_header("Location", "/c")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/c")).respond_with(status_code(200)),
    );

    let resolution = create_test_resolver(2)
        .resolve(&server.url("/a").to_string())
        .await
        .expect("two redirects fit a limit of two");

    assert_eq!(resolution.history.len(), 2);
}

#[tokio::test]
async fn test_resolve_too_many_redirects() {
    let server = Server::run();
    // Three redirects are followed, the fourth response trips the limit
    server.expect(
        Expectation::matching(request::method_path("GET", "/loop"))
            .times(4)
            .respond_with(status_code(302).append_header("Location", "/loop")),
    );

    let err = create_test_resolver(3)
        .resolve(&server.url("/loop").to_string())
        .await
        .expect_err("redirect loop should fail");

    assert_eq!(err.kind(), ErrorKind::TooManyRedirects);
    assert_eq!(err.to_string(), "Too many redirects");
}

#[tokio::test]
async fn test_resolve_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = create_test_resolver(30)
        .resolve(&format!("http://{}/", addr))
        .await
        .expect_err("closed port should fail");

    assert_eq!(err.kind(), ErrorKind::Connection);
    assert_eq!(err.to_string(), "Domain unreachable or DNS error");
}

#[tokio::test]
async fn test_resolve_timeout() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow"))
            .times(0..)
            .respond_with(delay_and_then(Duration::from_secs(5), status_code(200))),
    );

    let resolver = DomainResolver::from_config(&Config {
        timeout_seconds: 1,
        ..Default::default()
    })
    .expect("Failed to build resolver");

    let err = resolver
        .resolve(&server.url("/slow").to_string())
        .await
        .expect_err("slow upstream should time out");

    assert_eq!(err.kind(), ErrorKind::Timeout);
}

#[tokio::test]
async fn test_resolve_rejects_invalid_domain() {
    let err = create_test_resolver(30)
        .resolve("not a valid domain!!!")
        .await
        .expect_err("invalid input should fail");

    assert_eq!(err.kind(), ErrorKind::InvalidUrl);
}

#[tokio::test]
async fn test_verified_client_reports_self_signed_certificate_as_tls() {
    let (port, _) = spawn_self_signed_upstream().await;
    let client = init_redirect_client(&test_config(30)).expect("Failed to build client");
    let url = Url::parse(&format!("https://localhost:{port}/")).expect("valid url");

    let err = follow_redirects(url, 30, &client)
        .await
        .expect_err("self-signed certificate should be rejected");

    assert_eq!(err.kind(), ErrorKind::Tls);
    assert_eq!(err.to_string(), "SSL certificate error");
}

#[tokio::test]
async fn test_resolve_retries_once_without_verification_on_self_signed_certificate() {
    let (port, connections) = spawn_self_signed_upstream().await;

    let resolution = create_test_resolver(30)
        .resolve(&format!("localhost:{port}"))
        .await
        .expect("retry without verification should succeed");

    assert!(resolution.tls_bypassed);
    assert_eq!(resolution.status_code, 200);
    assert_eq!(resolution.final_url, format!("https://localhost:{port}/"));
    assert!(resolution.history.is_empty());
    // One rejected handshake, then the single unverified retry
    assert_eq!(connections.load(Ordering::SeqCst), 2);
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_resolve_self_signed_certificate_falls_back() {
    let resolution = create_test_resolver(30)
        .resolve("self-signed.badssl.com")
        .await
        .expect("retry without verification should succeed");

    assert!(resolution.tls_bypassed);
    assert!(resolution.final_url.starts_with("https://self-signed.badssl.com"));
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_resolve_example_com() {
    let resolution = create_test_resolver(30)
        .resolve("example.com")
        .await
        .expect("example.com should resolve");

    assert_eq!(resolution.status_code, 200);
    assert_eq!(resolution.final_url, "https://example.com/");
    assert!(resolution.history.is_empty());
    assert!(!resolution.tls_bypassed);
}
