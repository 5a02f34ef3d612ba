use serde::{Deserialize, Serialize};

/// Categorical performance label for one role.
///
/// Anything other than `good`, `average` or `poor` (for example the backend's
/// `"not enough data"`) is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PerformanceStatus {
    Good,
    Average,
    Poor,
    Other(String),
}

impl PerformanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PerformanceStatus::Good => "good",
            PerformanceStatus::Average => "average",
            PerformanceStatus::Poor => "poor",
            PerformanceStatus::Other(label) => label,
        }
    }
}

impl From<&str> for PerformanceStatus {
    fn from(label: &str) -> Self {
        match label {
            "good" => PerformanceStatus::Good,
            "average" => PerformanceStatus::Average,
            "poor" => PerformanceStatus::Poor,
            other => PerformanceStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for PerformanceStatus {
    fn from(label: String) -> Self {
        PerformanceStatus::from(label.as_str())
    }
}

impl From<PerformanceStatus> for String {
    fn from(status: PerformanceStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Presentation style of a performance row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStyle {
    Success,
    Warning,
    Danger,
    #[default]
    Secondary,
}

impl RowStyle {
    /// Style class name understood by web front ends
    pub fn class_name(&self) -> &'static str {
        match self {
            RowStyle::Success => "bg-success",
            RowStyle::Warning => "bg-warning",
            RowStyle::Danger => "bg-danger",
            RowStyle::Secondary => "bg-secondary",
        }
    }
}

/// A formatted performance row ready for display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerformanceRow {
    pub text: String,
    pub style: RowStyle,
}

/// Map a status to its row style. Unknown statuses fall back to `Secondary`.
pub fn format_row(status: &PerformanceStatus, text: &str) -> PerformanceRow {
    let style = match status {
        PerformanceStatus::Good => RowStyle::Success,
        PerformanceStatus::Average => RowStyle::Warning,
        PerformanceStatus::Poor => RowStyle::Danger,
        PerformanceStatus::Other(_) => RowStyle::Secondary,
    };

    PerformanceRow {
        text: text.to_string(),
        style,
    }
}
