use tracing::info;

use crate::{http_server::routes, AppState, Result};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;

    let router = routes::make_router().with_state(app_state);

    info!("Spawning Server");
    let server = tokio::spawn(super::run_server(router));

    server.await??;

    info!("Main Returning");

    Ok(())
}
