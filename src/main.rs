//! kodegen_aptly_publish - publish GitHub release assets into an Aptly repository.
//!
//! Runs from a terminal or as a GitHub Actions step (options fall back to
//! `INPUT_*` environment variables). Set `RUST_LOG=debug` for request logs.

use kodegen_aptly_publish::cli;
use kodegen_aptly_publish::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Configuration errors land here; runtime failures were already reported
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
