//! natpp - turn a web URL into a desktop shortcut for a native app window.
//!
//! Parses the command line, makes sure the native shell is built, fetches the
//! site's favicon and writes a `.lnk` shortcut to the desktop.

use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    let exit_code = match natpp::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
