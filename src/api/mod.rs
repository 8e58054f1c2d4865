use log::info;
use routes::create_router;
use std::{net::SocketAddr, path::PathBuf};
use tokio::net::TcpListener;

use crate::services::{
    fetcher::DataFetcher,
    shared::env::{backend_url, report_title, server_port},
};

pub mod errors;
pub mod handlers;
pub mod routes;

pub struct AppState {
    pub fetcher: DataFetcher,
    pub title: String,
    pub data_file: Option<PathBuf>,
}

pub struct ServeArgs {
    pub port: Option<u16>,
    pub backend: Option<String>,
    pub data: Option<PathBuf>,
}

pub async fn api(args: ServeArgs) -> anyhow::Result<()> {
    let port = server_port(args.port);
    // with a payload file and no explicit backend, the page reads from this server
    let backend = match (args.backend, &args.data) {
        (Some(backend), _) => backend,
        (None, Some(_)) => format!("http://127.0.0.1:{}", port),
        (None, None) => backend_url(None),
    };

    let state = AppState {
        fetcher: DataFetcher::new(&backend),
        title: report_title(),
        data_file: args.data,
    };
    info!("Report page reads from {}", state.fetcher.endpoint());
    if let Some(data_file) = &state.data_file {
        info!("Serving payload from {}", data_file.display());
    }

    let router = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
