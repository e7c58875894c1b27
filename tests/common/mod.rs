#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub const POSTING_HTML: &str = r#"
<section class="top-card-layout">
  <h2 class="top-card-layout__title">Senior Backend Engineer</h2>
  <h4 class="top-card-layout__second-subline">
    <span><a class="topcard__org-name-link" href="/company/acme">Acme Corp</a></span>
    <span class="topcard__flavor topcard__flavor--bullet">Berlin, Germany</span>
  </h4>
</section>
<div class="description__text description__text--rich">
  <div class="show-more-less-html__markup">
    <p>We are hiring.</p>
    <p>Write   Rust   every day.</p>
  </div>
</div>
<ul class="description__job-criteria-list">
  <li><span class="description__job-criteria-text">Full-time</span></li>
  <li><span class="description__job-criteria-text">Mid-Senior level</span></li>
</ul>
"#;

/// Serves exactly one canned HTTP response on a local port.
/// Returns the base URL and a receiver for the raw request head.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else { return };
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        let _ = tx.send(head);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let mut stream = stream;
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    (format!("http://{}", addr), rx)
}

/// Accepts one connection and never answers it.
pub fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(5));
            drop(stream);
        }
    });
    format!("http://{}", addr)
}

/// Fresh, empty scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("job_scraper_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
