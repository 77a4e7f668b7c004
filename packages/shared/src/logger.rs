//! Logging setup utilities for the classroom relay binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The filter covers the workspace library crates and the calling binary.
/// It can be overridden with the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "kokuban-server", "kokuban-client")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use kokuban_shared::logger::setup_logger;
///
/// setup_logger("kokuban-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the default filter directive when `RUST_LOG` is not set.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let mut directives: Vec<String> = ["kokuban_shared", "kokuban_server", "kokuban_client"]
        .iter()
        .map(|krate| format!("{}={}", krate, default_log_level))
        .collect();
    directives.push(format!(
        "{}={}",
        binary_name.replace('-', "_"),
        default_log_level
    ));
    directives.push(format!("tower_http={}", default_log_level));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_crates_and_binary() {
        // テスト項目: デフォルトのフィルタがワークスペースのクレートとバイナリを含む
        // given (前提条件):
        let binary_name = "kokuban-server";

        // when (操作):
        let filter = default_filter(binary_name, "info");

        // then (期待する結果):
        assert!(filter.contains("kokuban_server=info"));
        assert!(filter.contains("kokuban_shared=info"));
        assert!(filter.contains("tower_http=info"));
        // binary names use underscores as tracing targets
        assert!(filter.ends_with("kokuban_server=info,tower_http=info"));
    }
}
