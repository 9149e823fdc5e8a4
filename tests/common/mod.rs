//! Shared test fixtures: a one-shot HTTP server and ABI argument helpers.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use alloy_primitives::{address, Address};
use alloy_sol_types::SolValue;

pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
pub const EXCHANGE_PROXY: Address = address!("def1c0ded9bec7f1a1670819833240f027b25eff");

pub const MOCK_QUOTE_JSON: &str = r#"{
    "data": "0xCAFE",
    "sellAmount": "100",
    "buyAmount": "200",
    "to": "0xdef1c0ded9bec7f1a1670819833240f027b25eff"
}"#;

/// Hex text of the ABI encoding of `value`
pub fn word<T: SolValue>(value: T) -> String {
    format!("0x{}", hex::encode(value.abi_encode()))
}

/// Serves exactly one HTTP response, then records the request line
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        Self {
            url: format!("http://{}", addr),
            handle,
        }
    }

    /// Wait for the request and return its first line
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}
