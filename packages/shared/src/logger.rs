//! Logger setup shared by all binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Workspace crates whose events are enabled at the default level.
const WORKSPACE_TARGETS: [&str; 3] = ["classbook_core", "classbook_cli", "classbook_shared"];

/// Build the default filter directive for the given binary.
///
/// Binary names use hyphens while tracing targets use underscores.
fn default_directive(app_name: &str, default_level: &str) -> String {
    let mut directives = vec![format!("{}={}", app_name.replace('-', "_"), default_level)];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={default_level}")),
    );
    directives.join(",")
}

/// Initialize tracing for the given binary.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies to the binary
/// and the workspace crates. Events are written to stderr so they never mix with
/// the interactive menu on stdout.
pub fn setup_logger(app_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(app_name, default_level)));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_binary_and_workspace() {
        // テスト項目: バイナリ名とワークスペースの crate にデフォルトレベルが設定される
        // when (操作):
        let directive = default_directive("classbook", "warn");

        // then (期待する結果):
        assert_eq!(
            directive,
            "classbook=warn,classbook_core=warn,classbook_cli=warn,classbook_shared=warn"
        );
    }

    #[test]
    fn test_default_directive_normalizes_hyphens() {
        // テスト項目: ハイフンを含むバイナリ名は tracing の target 形式に変換される
        // when (操作):
        let directive = default_directive("classbook-admin", "debug");

        // then (期待する結果):
        assert!(directive.starts_with("classbook_admin=debug,"));
    }

    #[test]
    fn test_setup_logger_twice_does_not_panic() {
        // テスト項目: setup_logger を 2 回呼んでもパニックしない
        // when (操作):
        setup_logger("classbook", "info");
        setup_logger("classbook", "info");
    }
}
