mod api;
mod clap;
mod dictionary;
mod lang;
mod prelude;
mod word;

use crate::prelude::*;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Args::parse();

    let dictionaries = match Dictionaries::load(&config.words_dir) {
        Ok(dictionaries) => dictionaries,
        Err(e) => {
            error!("Failed to load word lists from {}: {e}", config.words_dir.display());
            std::process::exit(1);
        }
    };

    serve_api(&config.api_addr, dictionaries).await;
}
