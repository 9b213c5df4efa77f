use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use dotenv::dotenv;
use nutriscan_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("NutriScan API listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
