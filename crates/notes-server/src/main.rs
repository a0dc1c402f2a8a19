mod config;
mod error;
mod http;
mod server;

use std::sync::Arc;

use rmcp::{transport::stdio, ServiceExt};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Config, Transport};
use notes_engine::{KnowledgeBase, NoteSynthesizer};
use server::NotesServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC when serving on stdio
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting notes-server");

    let config = Config::from_env()?;
    info!(
        transport = ?config.transport,
        catalog = ?config.catalog_path,
        static_dir = ?config.static_dir,
        "configuration loaded"
    );

    let kb = match config.catalog_path() {
        Some(path) => KnowledgeBase::from_path(path)?,
        None => KnowledgeBase::builtin(),
    };
    info!(subjects = kb.subjects().len(), "knowledge base loaded");
    let synth = NoteSynthesizer::new(Arc::new(kb));

    match &config.transport {
        Transport::Http { listen_addr } => {
            let app = http::create_router(synth, config.static_dir.as_deref());
            let listener = TcpListener::bind(listen_addr).await?;
            info!(listen_addr = %listen_addr, "HTTP server ready");
            axum::serve(listener, app).await?;
        }
        Transport::Tcp { listen_addr } => {
            let server = NotesServer::new(synth);
            let listener = TcpListener::bind(listen_addr).await?;
            info!(listen_addr = %listen_addr, "MCP server ready, serving on TCP");
            loop {
                let (stream, peer) = listener.accept().await?;
                let server = server.clone();
                tokio::spawn(async move {
                    info!(peer = %peer, "MCP client connected");
                    let service = server.serve(stream).await.inspect_err(|e| {
                        tracing::error!(error = %e, "MCP server error");
                    })?;
                    service.waiting().await?;
                    info!(peer = %peer, "MCP client disconnected");
                    Ok::<(), anyhow::Error>(())
                });
            }
        }
        Transport::Stdio => {
            info!("MCP server ready, serving on stdio");
            let service = NotesServer::new(synth)
                .serve(stdio())
                .await
                .inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
            service.waiting().await?;
            info!("MCP server shut down");
        }
    }
    Ok(())
}
