// src/core/source.rs
//
// Where a text resource comes from: a local file or a plain-HTTP URL.
// One fetch, explicit Ok/Err, no retry.

use std::{fmt, fs, io, path::PathBuf};

use thiserror::Error;

use super::net;
use crate::config::consts::HTTP_PORT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http { host: String, port: u16, path: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("unsupported source {0:?}: use an http:// URL or a file path")]
    Unsupported(String),
}

impl Source {
    /// `http://host[:port]/path` or a filesystem path.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let t = text.trim();
        let lower = t.to_ascii_lowercase();

        if lower.starts_with("https://") {
            return Err(LoadError::Unsupported(s!(t)));
        }
        let Some(rest) = lower.starts_with("http://").then(|| &t["http://".len()..]) else {
            if t.is_empty() || t.contains("://") {
                return Err(LoadError::Unsupported(s!(t)));
            }
            return Ok(Source::File(PathBuf::from(t)));
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port = p.parse::<u16>().map_err(|_| LoadError::Unsupported(s!(t)))?;
                (h, port)
            }
            None => (authority, HTTP_PORT),
        };
        if host.is_empty() {
            return Err(LoadError::Unsupported(s!(t)));
        }

        Ok(Source::Http { host: s!(host), port, path: s!(path) })
    }

    /// Read the whole resource as text.
    pub fn fetch(&self) -> Result<String, LoadError> {
        match self {
            Source::File(path) => fs::read_to_string(path)
                .map_err(|source| LoadError::Read { path: path.clone(), source }),
            Source::Http { host, port, path } => net::http_get(host, *port, path)
                .map_err(|e| LoadError::Fetch { url: self.to_string(), reason: e.to_string() }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Http { host, port, path } if *port == HTTP_PORT => {
                write!(f, "http://{host}{path}")
            }
            Source::Http { host, port, path } => write!(f, "http://{host}:{port}{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urls_and_paths() {
        assert_eq!(
            Source::parse("http://example.org/assets/data/testimonials.csv").unwrap(),
            Source::Http {
                host: s!("example.org"),
                port: 80,
                path: s!("/assets/data/testimonials.csv"),
            }
        );
        assert_eq!(
            Source::parse("http://localhost:4200").unwrap(),
            Source::Http { host: s!("localhost"), port: 4200, path: s!("/") }
        );
        assert_eq!(
            Source::parse("assets/site/index.html").unwrap(),
            Source::File(PathBuf::from("assets/site/index.html"))
        );
    }

    #[test]
    fn rejects_tls_and_garbage() {
        assert!(matches!(Source::parse("https://example.org/"), Err(LoadError::Unsupported(_))));
        assert!(matches!(Source::parse("ftp://example.org/x"), Err(LoadError::Unsupported(_))));
        assert!(matches!(Source::parse("http://host:notaport/"), Err(LoadError::Unsupported(_))));
        assert!(matches!(Source::parse("   "), Err(LoadError::Unsupported(_))));
    }

    #[test]
    fn display_round_trips_default_port() {
        let src = Source::parse("http://example.org/a.csv").unwrap();
        assert_eq!(src.to_string(), "http://example.org/a.csv");
        let src = Source::parse("http://example.org:8080/a.csv").unwrap();
        assert_eq!(src.to_string(), "http://example.org:8080/a.csv");
    }

    #[test]
    fn missing_file_is_read_error() {
        let src = Source::File(PathBuf::from("definitely/not/here.csv"));
        assert!(matches!(src.fetch(), Err(LoadError::Read { .. })));
    }
}
