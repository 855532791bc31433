// src/utils/env.rs

use log::debug;

/// Load variables from a local `.env` file into the process environment.
/// Missing files are fine; the process environment already applies.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(_) => debug!("No .env file found, using process environment"),
    }
}
