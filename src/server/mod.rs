//! Development host module
//!
//! Serves the scripts over HTTP in-process, standing in for the CGI server
//! that would normally spawn one script process per request.

pub mod connection;
pub mod listener;
pub mod router;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::logger;

pub use listener::create_listener;

/// Bind the configured address and serve until Ctrl+C
pub async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.get_socket_addr()?;
    let listener = create_listener(addr)?;
    logger::log_server_start(&addr, &config);

    run(listener, Arc::new(config), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
            std::future::pending::<()>().await;
        }
    })
    .await;

    logger::log_info("Shutdown requested, no longer accepting connections");
    Ok(())
}

/// Accept loop; returns once `shutdown` completes
pub async fn run<F>(listener: TcpListener, config: Arc<Config>, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        logger::log_debug(&format!("Accepted connection from {peer_addr}"));
                        connection::handle_connection(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }
            () = &mut shutdown => break,
        }
    }
}
