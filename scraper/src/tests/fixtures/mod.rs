use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use crate::error::{HarvestError, Result};
use crate::fetch::PageFetcher;

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Load a real failure case for regression testing
pub fn load_failure_html(failure_name: &str) -> Option<String> {
    let path = Path::new("src/tests/fixtures/failures").join(format!("{}.html", failure_name));
    fs::read_to_string(path).ok()
}

/// A profile page with `paragraphs` one-line paragraphs in the body, plus an
/// info box whose header cell reads `marker`. The body holds exactly
/// `paragraphs` text nodes, or `paragraphs + 2` with an info box.
pub fn profile_html(paragraphs: usize, marker: Option<&str>) -> String {
    let body: String = (0..paragraphs)
        .map(|i| format!("<p>Paragraph {}</p>", i))
        .collect();
    let infobox = marker
        .map(|m| {
            format!(
                "<table class=\"infobox biography vcard\"><tr><th>{}</th><td>14 March 1879</td></tr></table>",
                m
            )
        })
        .unwrap_or_default();
    format!(
        "<html><head><title>Profile</title></head><body><div class=\"mw-body-content\">{}{}</div></body></html>",
        infobox, body
    )
}

/// Serves pages from memory; unknown URLs fail like a dropped connection.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }
}

impl PageFetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.pages.get(url).cloned().ok_or_else(|| HarvestError::Fetch {
            url: url.to_string(),
            reason: "no stub page".to_string(),
        })
    }
}

/// Minimal HTTP server on an ephemeral local port. `routes` maps a request
/// path, leading slashes trimmed, to a status code and body; anything else
/// gets a 404. Returns the base URL, with trailing slash.
pub fn serve_pages(routes: Vec<(&str, u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local address");
    let routes: HashMap<String, (u16, String)> = routes
        .into_iter()
        .map(|(path, status, body)| (path.to_string(), (status, body)))
        .collect();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else {
                continue;
            };
            let mut reader = BufReader::new(&stream);
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // Drain the headers
            let mut line = String::new();
            while reader.read_line(&mut line).map_or(false, |n| n > 0) && line != "\r\n" {
                line.clear();
            }

            let path = request_line
                .split_whitespace()
                .nth(1)
                .unwrap_or("")
                .trim_start_matches('/');
            let (status, body) = routes
                .get(path)
                .cloned()
                .unwrap_or_else(|| (404, "<html><body>Not Found</body></html>".to_string()));
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                if status == 200 { "OK" } else { "Not Found" },
                body.len(),
                body
            );
            let _ = (&stream).write_all(response.as_bytes());
        }
    });

    format!("http://{}/", addr)
}
