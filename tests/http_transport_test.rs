//! Tests for the HTTP command transport against loopback servers

use gesture_drive::dispatch::TransportSink;
use gesture_drive::transport::HttpTransport;
use gesture_drive::Error;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread;
use std::time::Duration;

/// Serve exactly one request with a canned response and hand back what
/// the client asked for
fn spawn_one_shot_server(response: &'static str) -> (SocketAddr, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = [0u8; 2048];
        let n = stream.read(&mut buf).expect("read request");
        stream.write_all(response.as_bytes()).expect("write response");
        String::from_utf8_lossy(&buf[..n]).to_string()
    });

    (addr, handle)
}

#[test]
fn test_sends_get_with_command_token() {
    let (addr, handle) =
        spawn_one_shot_server("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
    let transport = HttpTransport::new(&format!("http://{}", addr), Duration::from_secs(2));

    transport.send("F3").expect("send against live server");

    let request = handle.join().expect("server thread");
    assert!(
        request.starts_with("GET /move?cmd=F3 HTTP/1.1"),
        "unexpected request: {}",
        request
    );
}

#[test]
fn test_trailing_slash_in_base_url_is_tolerated() {
    let (addr, handle) =
        spawn_one_shot_server("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
    let transport = HttpTransport::new(&format!("http://{}/", addr), Duration::from_secs(2));

    transport.send("S").expect("send against live server");

    let request = handle.join().expect("server thread");
    assert!(request.starts_with("GET /move?cmd=S HTTP/1.1"));
}

#[test]
fn test_error_status_is_a_transport_failure() {
    let (addr, handle) =
        spawn_one_shot_server("HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n");
    let transport = HttpTransport::new(&format!("http://{}", addr), Duration::from_secs(2));

    let result = transport.send("B1");
    assert!(matches!(result, Err(Error::TransportFailure(_))));
    handle.join().expect("server thread");
}

#[test]
fn test_unresponsive_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    // Accept the connection but never answer
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        thread::sleep(Duration::from_millis(500));
        drop(stream);
    });

    let transport = HttpTransport::new(&format!("http://{}", addr), Duration::from_millis(100));

    let result = transport.send("L2");
    assert!(
        matches!(result, Err(Error::TransportTimeout { timeout_ms: 100 })),
        "expected timeout, got: {:?}",
        result
    );
    handle.join().expect("server thread");
}

#[test]
fn test_refused_connection_is_a_transport_failure() {
    // Bind to learn a free port, then close it again
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let transport = HttpTransport::new(&format!("http://{}", addr), Duration::from_millis(500));

    let result = transport.send("F");
    assert!(matches!(result, Err(Error::TransportFailure(_))));
}
