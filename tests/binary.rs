//! End-to-end check of the built executable: serve on 8080, exit 0 on a
//! termination signal.
#![cfg(unix)]

use std::process::{Command, Stdio};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tokio::net::TcpStream;

/// Both cases need port 8080; run them one at a time.
static PORT_8080: Mutex<()> = Mutex::new(());

/// Start the server, check it answers, send `signal`, return the exit code.
async fn run_until_signal(signal: &str) -> Option<i32> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hello-server"))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while TcpStream::connect("127.0.0.1:8080").await.is_err() {
        assert!(Instant::now() < deadline, "server never listened on 8080");
        assert!(child.try_wait().unwrap().is_none(), "server exited early");
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let body = reqwest::get("http://127.0.0.1:8080/hello")
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "OK");

    // Handlers are installed before the port opens, so no settling delay.
    let kill = Command::new("kill")
        .args([signal, &child.id().to_string()])
        .status()
        .unwrap();
    assert!(kill.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("server did not exit after {signal}");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    };

    status.code()
}

#[tokio::test]
async fn test_sigterm_exits_cleanly() {
    let _port = PORT_8080.lock().unwrap_or_else(|e| e.into_inner());
    assert_eq!(run_until_signal("-TERM").await, Some(0));
}

#[tokio::test]
async fn test_sigint_exits_cleanly() {
    let _port = PORT_8080.lock().unwrap_or_else(|e| e.into_inner());
    assert_eq!(run_until_signal("-INT").await, Some(0));
}
