use std::io;
use std::path::Path;

use env_logger::Env;
use log::error;

use clashlink::shell::run_shell;
use clashlink::utils::DEFAULT_CONFIG_PATH;

fn main() {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Err(e) = run_shell(&mut input, &mut output, Path::new(DEFAULT_CONFIG_PATH)) {
        error!("session failed: {}", e);
        std::process::exit(1);
    }
}
