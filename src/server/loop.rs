// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until shutdown is requested.
///
/// Accept errors are logged without stopping the loop. In-flight connection
/// tasks finish on their own after the loop exits.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) {
    loop {
        // A signal that fired between select iterations has no waiter to
        // notify, so the flag is checked before blocking again.
        if signals.shutdown_requested.load(Ordering::SeqCst) {
            logger::log_shutdown();
            return;
        }

        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = signals.shutdown.notified() => {
                logger::log_shutdown();
                return;
            }
        }
    }
}
