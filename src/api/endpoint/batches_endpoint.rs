use serde::{Deserialize, Serialize};

/// Payload for PayTrace's batch export by date range.
///
/// Dates are forwarded exactly as received; PayTrace owns their format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchQuery {
    pub start_date: String,
    pub end_date: String,
}

impl BatchQuery {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}
