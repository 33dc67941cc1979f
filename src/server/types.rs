//! Audit endpoint data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Auditor;

/// Shared state for the audit endpoint
#[derive(Clone)]
pub struct ServerState {
    /// Runs the audits
    pub auditor: Arc<Auditor>,
}

/// Query string of `GET /api/audit`
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    /// Page to audit
    pub url: Option<String>,
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// What went wrong
    pub error: String,
}
