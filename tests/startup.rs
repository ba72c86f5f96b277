//! Startup failure handling for the server binary.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[test]
fn test_binary_exits_nonzero_when_port_in_use() {
    // Hold :8080 for the duration of the test. If something else already
    // holds it the binary must fail all the same.
    let _holder = std::net::TcpListener::bind("0.0.0.0:8080");

    let mut child = Command::new(env!("CARGO_BIN_EXE_fixed-latency-server"))
        .env("RUST_LOG", "fixed_latency_server=error")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn server binary");

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("server started despite the port being taken");
        }
        std::thread::sleep(Duration::from_millis(20));
    };

    assert!(!status.success());
}
