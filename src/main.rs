mod cli;
mod dataset;
mod handlers;
mod http;
mod init;
mod trie;

use std::{path::PathBuf, sync::Arc};

use clap::Parser;

use cli::Commands;
use handlers::Ctx;
use trie::Trie;

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Handle CLI flags.
    if let Some(cmd) = cli.command {
        match cmd {
            // Generate a new config file.
            Commands::NewConfig { path } => {
                match init::generate_config(&path) {
                    Ok(_) => {
                        log::info!("config file generated: {}", path.display());
                    }
                    Err(e) => {
                        log::error!("error generating config: {}", e);
                        std::process::exit(1);
                    }
                }
                return;
            }
        }
    }

    // Load config.
    let config = init::init_config(&cli.config);

    // Dataset path from --dataset flag, falling back to the config.
    let dataset_path = cli
        .dataset
        .unwrap_or_else(|| PathBuf::from(&config.dataset.path));

    // Load the vocabulary and build the trie before serving any queries.
    let words = match dataset::load(&dataset_path) {
        Ok(w) => w,
        Err(e) => {
            log::error!("error loading dataset {}: {}", dataset_path.display(), e);
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} words from {}",
        words.len(),
        dataset_path.display()
    );

    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word);
    }

    // Setup the global app context used in HTTP handlers.
    let ctx = Arc::new(Ctx { trie });

    // Start the HTTP server.
    let routes = http::init_handlers(ctx);
    let addr = config.app.address;

    log::info!("starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("error listening on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes)
        .with_graceful_shutdown(http::shutdown_signal())
        .await
    {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}
