use serde::{Deserialize, Serialize};

/// Optional document context used by the prior-adjustment stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentContext {
    /// Issuing agency, e.g. "DOD".
    pub agency: Option<String>,
    /// Agency branch, e.g. "Air Force". Bonuses are additive with agency.
    pub branch: Option<String>,
}

impl DocumentContext {
    pub fn new(agency: Option<String>, branch: Option<String>) -> Self {
        Self { agency, branch }
    }
}
