//! Main application entry point.

use std::io;

fn main() {
    #[cfg(feature = "native")]
    env_logger::init();
    log::info!("Starting Pylette");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = pylette_app::App::new().run(stdin.lock(), stdout.lock()) {
        log::error!("Session failed: {}", e);
        eprintln!("pylette: {}", e);
        std::process::exit(1);
    }
}
