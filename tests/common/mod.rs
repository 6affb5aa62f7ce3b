//! Shared fixtures for integration tests: a pet store server on an ephemeral
//! port and a minimal HTTP/1.1 client over `TcpStream`.
#![allow(dead_code)]

pub mod test_server {
    use petstore::server::{AppService, HttpServer, ServerHandle};
    use petstore::store::InMemoryPetStore;
    use std::net::{SocketAddr, TcpListener};
    use std::sync::{Arc, Once};

    static MAY_INIT: Once = Once::new();

    /// Ensures May coroutines are configured only once
    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            may::config().set_stack_size(0x8000);
        });
    }

    /// Running server, stopped on drop.
    pub struct TestServer {
        handle: Option<ServerHandle>,
        pub addr: SocketAddr,
    }

    impl TestServer {
        pub fn start(store: InMemoryPetStore) -> Self {
            Self::start_service(AppService::for_store(Arc::new(store)))
        }

        pub fn start_service(service: AppService) -> Self {
            setup_may_runtime();
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            let handle = HttpServer(service).start(addr).unwrap();
            handle.wait_ready().unwrap();
            Self {
                handle: Some(handle),
                addr,
            }
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            if let Some(handle) = self.handle.take() {
                handle.stop();
            }
        }
    }
}

pub mod http {
    use serde_json::Value;
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    #[derive(Debug)]
    pub struct TestResponse {
        pub status: u16,
        pub headers: Vec<(String, String)>,
        pub body: String,
    }

    impl TestResponse {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }

        pub fn json(&self) -> Value {
            serde_json::from_str(&self.body).unwrap_or(Value::Null)
        }
    }

    /// Send a raw request and read exactly one response (headers plus
    /// `Content-Length` bytes of body).
    pub fn send_request(addr: &SocketAddr, req: &str) -> TestResponse {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        stream.write_all(req.as_bytes()).unwrap();

        let mut buf = Vec::new();
        let mut tmp = [0u8; 4096];
        loop {
            if let Some(end) = header_end(&buf) {
                let head = String::from_utf8_lossy(&buf[..end]).to_string();
                let len = content_length(&head);
                if buf.len() >= end + 4 + len {
                    return parse_response(&head, &buf[end + 4..end + 4 + len]);
                }
            }
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(e) => panic!("read error: {e:?}; got {:?}", String::from_utf8_lossy(&buf)),
            }
        }
        panic!("connection closed early: {:?}", String::from_utf8_lossy(&buf));
    }

    pub fn get(addr: &SocketAddr, path: &str) -> TestResponse {
        send_request(addr, &format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n"))
    }

    pub fn delete(addr: &SocketAddr, path: &str) -> TestResponse {
        send_request(addr, &format!("DELETE {path} HTTP/1.1\r\nHost: localhost\r\n\r\n"))
    }

    pub fn with_body(addr: &SocketAddr, method: &str, path: &str, body: &str) -> TestResponse {
        send_request(
            addr,
            &format!(
                "{method} {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
                body.len()
            ),
        )
    }

    fn header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse().ok())
            .unwrap_or(0)
    }

    fn parse_response(head: &str, body: &[u8]) -> TestResponse {
        let mut lines = head.lines();
        let status = lines
            .next()
            .and_then(|l| l.split_whitespace().nth(1))
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        let headers = lines
            .filter_map(|l| l.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(body).to_string(),
        }
    }
}
