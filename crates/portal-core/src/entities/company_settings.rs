//! Company settings entity - single-row portal configuration

use chrono::{DateTime, Utc};

/// Portal-wide settings maintained by administrators.
///
/// Stored as a single logical row; reads always return a value (defaults
/// when nothing has been saved yet).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanySettings {
    pub about: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    /// When set, the API returns 503 to non-staff traffic
    pub maintenance_mode: bool,
    pub updated_at: Option<DateTime<Utc>>,
}
