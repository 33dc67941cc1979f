//! Security analysis.
//!
//! Looks at the transport scheme, the security response headers and whether an
//! https page pulls resources over plain http.

use log::debug;
use url::Url;

use super::rules::{evaluate, Rule};
use super::types::{CategoryResult, Metrics, Severity};
use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS, SECURITY_HEADERS,
};
use crate::extract::count_insecure_references;
use crate::models::ResponseHeaders;

struct SecurityFacts {
    https: bool,
    hsts: bool,
    csp: bool,
    xfo: bool,
    xcto: bool,
    csp_frame_ancestors: bool,
    insecure_references: usize,
}

impl SecurityFacts {
    fn clickjacking_protected(&self) -> bool {
        self.xfo || self.csp_frame_ancestors
    }
}

static SECURITY_RULES: &[Rule<SecurityFacts>] = &[
    Rule::penalty(
        Severity::Critical,
        30,
        |f| !f.https,
        |_| "Page is not served over HTTPS".to_string(),
    ),
    Rule::success(|f| f.https, |_| "Served over HTTPS".to_string()),
    Rule::penalty(
        Severity::Warning,
        12,
        |f| !f.hsts,
        |_| "Missing Strict-Transport-Security header".to_string(),
    ),
    Rule::success(|f| f.hsts, |_| "HSTS enabled".to_string()),
    Rule::penalty(
        Severity::Warning,
        10,
        |f| !f.csp,
        |_| "Missing Content-Security-Policy header".to_string(),
    ),
    Rule::success(|f| f.csp, |_| "Content-Security-Policy set".to_string()),
    Rule::penalty(
        Severity::Warning,
        8,
        |f| !f.clickjacking_protected(),
        |_| "No clickjacking protection (X-Frame-Options or CSP frame-ancestors)".to_string(),
    ),
    Rule::success(
        |f| f.clickjacking_protected(),
        |_| "Clickjacking protection in place".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        6,
        |f| !f.xcto,
        |_| "Missing X-Content-Type-Options header".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        5,
        |f| f.https && f.insecure_references > 0,
        |f| {
            format!(
                "Mixed content: {} resources loaded over http://",
                f.insecure_references
            )
        },
    ),
];

/// Analyzes transport and header security.
///
/// Header lookups are case-insensitive. Mixed content is only reported for
/// pages served over https.
pub fn analyze_security(url: &Url, headers: &ResponseHeaders, html: &str) -> CategoryResult {
    let present: Vec<&str> = SECURITY_HEADERS
        .iter()
        .copied()
        .filter(|name| headers.contains(name))
        .collect();
    debug!(
        "Security headers present for {}: {}/{} {:?}",
        url,
        present.len(),
        SECURITY_HEADERS.len(),
        present
    );

    let https = url.scheme() == "https";
    let csp_policy = headers.get(HEADER_CONTENT_SECURITY_POLICY);
    let facts = SecurityFacts {
        https,
        hsts: headers.contains(HEADER_STRICT_TRANSPORT_SECURITY),
        csp: csp_policy.is_some(),
        xfo: headers.contains(HEADER_X_FRAME_OPTIONS),
        xcto: headers.contains(HEADER_X_CONTENT_TYPE_OPTIONS),
        csp_frame_ancestors: csp_policy
            .is_some_and(|policy| policy.to_ascii_lowercase().contains("frame-ancestors")),
        insecure_references: if https {
            count_insecure_references(html)
        } else {
            0
        },
    };

    let metrics = Metrics::new()
        .with("https", facts.https)
        .with("hsts", facts.hsts)
        .with("csp", facts.csp)
        .with("xfo", facts.xfo)
        .with("xcto", facts.xcto);

    evaluate(SECURITY_RULES, &facts).with_metrics(metrics)
}
