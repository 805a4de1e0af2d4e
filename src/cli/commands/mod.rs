//! Command execution coordinating the publish run.

mod publish;

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

use publish::execute_publish;

/// Execute the publish run and map the outcome to an exit code
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::new();
    execute_command_with(&args, &config).await
}

/// Execute with a caller-supplied runtime configuration.
///
/// Configuration errors are returned as `Err` since nothing was attempted.
/// Failures during the run are reported here and mapped to exit code 1.
pub async fn execute_command_with(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    match execute_publish(args, config).await {
        Ok(_) => Ok(0),
        Err(e) if e.is_config() => Err(e),
        Err(e) => {
            config.error_println(&format!("Publish failed: {}", e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
