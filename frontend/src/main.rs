use log::{error, info};

mod browser;
mod config;
mod controller;
mod dom;
mod error;
mod scroll;

use config::PageConfig;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging. A logger that is already installed is fine.
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting top page controller");
    let ready = browser::on_document_ready(|| {
        if let Err(err) = browser::start(PageConfig::default()) {
            error!("Top page controller not started: {}", err);
        }
    });
    if let Err(err) = ready {
        error!("Could not wait for document: {}", err);
    }
}
