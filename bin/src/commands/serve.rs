//! Serve command implementation.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use seatwise_lib::prelude::*;

/// Load the dataset and serve the HTTP API.
pub(crate) async fn serve(data: &Path, addr: SocketAddr) -> Result<()> {
    let table = crate::display::load_table(data)?;
    let predictor = Predictor::new(Arc::new(table));

    let app = crate::server::router(predictor);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
