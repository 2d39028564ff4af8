//! Facade-level smoke test over a live listener.

use seqpaste::{serve_router, AppState, Config, Database};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::oneshot;

#[tokio::test]
async fn serve_router_answers_and_shuts_down_gracefully() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("db");
    let config = Config {
        db_path: db_path.to_str().expect("db path").to_string(),
        port: 0,
        max_paste_size: 1024,
    };
    let db = Database::new(&config.db_path).expect("open db");
    let state = AppState::new(config, db);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener");
    let addr = listener.local_addr().expect("addr");
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve_router(listener, state, false, async move {
        let _ = shutdown_rx.await;
    }));

    let mut stream = tokio::net::TcpStream::connect(addr).await.expect("connect");
    stream
        .write_all(b"GET /paste/-1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .expect("write request");
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");
    let response = String::from_utf8_lossy(&raw);
    assert!(response.starts_with("HTTP/1.1 200"), "response: {}", response);
    assert!(response.contains("\"title\":\"seed\""), "response: {}", response);

    shutdown_tx.send(()).expect("send shutdown");
    server
        .await
        .expect("server task")
        .expect("serve_router result");
}
