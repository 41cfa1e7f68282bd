use std::path::{Path, PathBuf};

/// Run configuration for a ToastMetrics batch run.
///
/// There are no CLI flags, environment variables or config files — the tool
/// is a single-operator batch utility with compiled-in paths. Components take
/// these values as explicit arguments; nothing reads global state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the weekly menu-breakdown CSV exports.
    pub base_dir: PathBuf,
    /// Location of the SQLite store.
    pub db_path: PathBuf,
    /// Rows shown per ranked report.
    pub top_n: usize,
}

/// Reporting period subdirectory under the data root.
const REPORT_PERIOD: &str = "2025-12";

impl Settings {
    /// Resolve the default settings rooted at the user's home directory.
    pub fn resolve() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::rooted_at(&home.join("ToastMetrics"))
    }

    /// Settings rooted at an explicit directory (used for testing).
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            base_dir: root.join("ToastMetrics_data").join(REPORT_PERIOD),
            db_path: root.join("toastmetrics.db"),
            top_n: 10,
        }
    }
}
