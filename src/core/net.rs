// src/core/net.rs
// HTTP/1.0 GET over TCP (std-only, no TLS).
// HTTP/1.0 so the server closes the connection at the end (no chunked transfer).

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{NET_TIMEOUT_SECS, USER_AGENT};

/// Plain HTTP GET; returns the response body as a String.
///
/// * `host` – hostname (no protocol, no port)
/// * `port` – usually 80
/// * `path` – path + query string starting with `/`
pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status_is_ok(status) {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// "HTTP/1.1 200 OK" → true. Only the status code token is inspected.
fn status_is_ok(status_line: &str) -> bool {
    status_line.split_whitespace().nth(1) == Some("200")
}
