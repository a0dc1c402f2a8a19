use std::path::{Path, PathBuf};

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// JSON API over HTTP on `listen_addr`.
    Http { listen_addr: String },
    /// MCP tools over stdin/stdout.
    Stdio,
    /// MCP tools over TCP, one session per connection.
    Tcp { listen_addr: String },
}

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    /// JSON catalogue replacing the builtin knowledge base.
    pub catalog_path: Option<PathBuf>,
    /// Directory served under `/static` by the HTTP transport.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Optional:
    /// - `NOTES_TRANSPORT`: "http" (default), "stdio" or "tcp"
    /// - `NOTES_LISTEN_ADDR`: HTTP bind address (default "0.0.0.0:5000")
    /// - `MCP_TCP_LISTEN_ADDR`: required when `NOTES_TRANSPORT=tcp`
    /// - `NOTES_CATALOG_PATH`: JSON catalogue file
    /// - `NOTES_STATIC_DIR`: static asset directory
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let transport = match var("NOTES_TRANSPORT").as_deref().unwrap_or("http") {
            "http" => Transport::Http {
                listen_addr: var("NOTES_LISTEN_ADDR")
                    .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            },
            "stdio" => Transport::Stdio,
            "tcp" => Transport::Tcp {
                listen_addr: var("MCP_TCP_LISTEN_ADDR").ok_or_else(|| {
                    AppError::Config(
                        "MCP_TCP_LISTEN_ADDR environment variable is required for tcp transport"
                            .to_string(),
                    )
                })?,
            },
            other => {
                return Err(AppError::Config(format!(
                    "NOTES_TRANSPORT must be one of http, stdio, tcp (got '{other}')"
                )))
            }
        };

        let catalog_path = var("NOTES_CATALOG_PATH").map(PathBuf::from);
        if let Some(path) = &catalog_path {
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "catalog file not found: {}",
                    path.display()
                )));
            }
        }

        let static_dir = var("NOTES_STATIC_DIR").map(PathBuf::from);
        if let Some(dir) = &static_dir {
            if !dir.is_dir() {
                return Err(AppError::Config(format!(
                    "static directory not found: {}",
                    dir.display()
                )));
            }
        }

        Ok(Self {
            transport,
            catalog_path,
            static_dir,
        })
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_http() {
        let config = load(&[]).unwrap();
        assert_eq!(
            config.transport,
            Transport::Http {
                listen_addr: "0.0.0.0:5000".to_string()
            }
        );
        assert!(config.catalog_path().is_none());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn tcp_requires_address() {
        let err = load(&[("NOTES_TRANSPORT", "tcp")]).unwrap_err();
        assert!(err.to_string().contains("MCP_TCP_LISTEN_ADDR"));

        let config = load(&[
            ("NOTES_TRANSPORT", "tcp"),
            ("MCP_TCP_LISTEN_ADDR", "127.0.0.1:7000"),
        ])
        .unwrap();
        assert_eq!(
            config.transport,
            Transport::Tcp {
                listen_addr: "127.0.0.1:7000".to_string()
            }
        );
    }

    #[test]
    fn unknown_transport_is_rejected() {
        let err = load(&[("NOTES_TRANSPORT", "grpc")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn missing_catalog_file_is_rejected() {
        let err = load(&[("NOTES_CATALOG_PATH", "/nonexistent/catalog.json")]).unwrap_err();
        assert!(err.to_string().contains("catalog file not found"));
    }

    #[test]
    fn missing_static_dir_is_rejected() {
        let err = load(&[("NOTES_STATIC_DIR", "/nonexistent/static")]).unwrap_err();
        assert!(err.to_string().contains("static directory not found"));
    }
}
