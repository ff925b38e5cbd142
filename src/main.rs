use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;
mod storage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::log_starting();

    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_error(&format!("Configuration error: {e}"));
            std::process::exit(1);
        }
    };

    // The environment is assumed static for the process lifetime, so a
    // missing setting is fatal rather than retried.
    if let Err(e) = cfg.validate() {
        logger::log_error(&format!("Configuration error: {e}"));
        std::process::exit(1);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg));
    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&addr, &state.config);

    server::start_server_loop(listener, state, signals).await;
    Ok(())
}
