#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

pub const JOBS_JSON: &str =
    r#"[{"id":"J1","name":"Mowing","pay":15},{"id":"J2","name":"Raking","pay":14}]"#;

/// Binary with a clean environment: no user config, no colors.
pub fn tc(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("timeclock");
    cmd.env("TIMECLOCK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("TIMECLOCK_EMP")
        .env_remove("TIMECLOCK_SESSION");
    cmd
}

/// Temp dir holding the database and an offline job list.
pub struct Fixture {
    pub dir: TempDir,
    pub db: String,
    pub jobs: String,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_jobs(JOBS_JSON)
    }

    pub fn with_jobs(jobs_json: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let db = dir.path().join("timeclock.sqlite");
        let jobs = dir.path().join("jobs.json");
        fs::write(&jobs, jobs_json).expect("write jobs");
        Self {
            db: db.to_string_lossy().to_string(),
            jobs: jobs.to_string_lossy().to_string(),
            dir,
        }
    }

    /// Command for `emp` using the offline job list and no endpoint.
    pub fn emp(&self, emp: &str) -> Command {
        let mut cmd = tc(&self.dir);
        cmd.args(["--db", &self.db, "--jobs-file", &self.jobs, "--emp", emp]);
        cmd
    }

    pub fn write_jobs(&self, jobs_json: &str) {
        fs::write(&self.jobs, jobs_json).expect("rewrite jobs");
    }
}

/// One request seen by the stub endpoint.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Minimal HTTP endpoint: answers GET with `jobs_body`, accepts POSTs.
pub struct StubEndpoint {
    pub url: String,
    pub seen: Arc<Mutex<Vec<Seen>>>,
}

impl StubEndpoint {
    pub fn start(jobs_body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let url = format!("http://{}/exec", listener.local_addr().unwrap());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&seen);
        let jobs_body = jobs_body.to_string();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let Some(req) = read_request(&mut stream) else {
                    continue;
                };
                let body = if req.method == "GET" {
                    jobs_body.clone()
                } else {
                    String::new()
                };
                recorded.lock().unwrap().push(req);
                let resp = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/javascript\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(resp.as_bytes());
            }
        });

        Self { url, seen }
    }

    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    /// Decoded JSON payloads of every POST, in arrival order.
    pub fn payloads(&self) -> Vec<serde_json::Value> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "POST")
            .map(|r| {
                let encoded = r
                    .body
                    .strip_prefix("payload=")
                    .expect("single payload field");
                serde_json::from_str(&form_decode(encoded)).expect("payload json")
            })
            .collect()
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> Option<Seen> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut first = head.lines().next()?.split_whitespace();
    let method = first.next()?.to_string();
    let path = first.next()?.to_string();
    let len = head
        .lines()
        .find_map(|l| {
            let (k, v) = l.split_once(':')?;
            k.eq_ignore_ascii_case("content-length")
                .then(|| v.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    while buf.len() < header_end + len {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    Some(Seen { method, path, body })
}

/// Decode an `application/x-www-form-urlencoded` value.
pub fn form_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 2;
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8(out).unwrap()
}
