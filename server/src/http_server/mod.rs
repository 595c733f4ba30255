use std::net::SocketAddr;

use axum::response::Response;
use color_eyre::eyre::Context;
use tokio::net::TcpListener;

use crate::Result;
use errors::ServerError;

pub(crate) mod cmd;

pub(crate) mod pages {
    pub mod authors;
    pub mod categories;
    pub mod home;
    pub mod recipes;
}

mod config;
pub mod errors;
pub(crate) mod routes;
mod templates;
mod trace;

const SITE_STYLES: &str = include_str!("../../../static/site.css");

type ResponseResult<T = Response> = Result<T, ServerError>;

pub(crate) async fn run_server(routes: axum::Router) -> Result<()> {
    let tracer = trace::Tracer;
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tracer)
        .on_response(tracer);

    let app = routes.layer(trace_layer);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let port: u16 = port.parse()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to run server")
}
