//! Configuration constants.
//!
//! This module defines the constants used throughout the application: network
//! timeouts, size limits, scoring weights, benchmark scores and status cutoffs.

// Network operation timeouts
/// Per-request timeout in seconds (default for `--timeout-seconds`)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (5MB)
/// Pages larger than this are rejected instead of analyzed
pub const MAX_RESPONSE_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

// HTTP endpoint
/// Default address the audit endpoint binds to
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
/// Default port for the audit endpoint
pub const DEFAULT_PORT: u16 = 4321;

// Scoring
// Category weights in the total score, in percent. The five weights sum to 100.
/// Weight of the performance score
pub const WEIGHT_PERFORMANCE: u32 = 25;
/// Weight of the SEO score
pub const WEIGHT_SEO: u32 = 25;
/// Weight of the security score
pub const WEIGHT_SECURITY: u32 = 20;
/// Weight of the mobile score
pub const WEIGHT_MOBILE: u32 = 15;
/// Weight of the accessibility score
pub const WEIGHT_ACCESSIBILITY: u32 = 15;

// Reference scores shown next to each category (display only)
/// Performance benchmark
pub const BENCHMARK_PERFORMANCE: u8 = 68;
/// SEO benchmark
pub const BENCHMARK_SEO: u8 = 72;
/// Security benchmark
pub const BENCHMARK_SECURITY: u8 = 65;
/// Mobile benchmark
pub const BENCHMARK_MOBILE: u8 = 78;
/// Accessibility benchmark
pub const BENCHMARK_ACCESSIBILITY: u8 = 62;

// Status bands (inclusive lower bounds); anything below orange is red
/// Lowest green score
pub const STATUS_GREEN_MIN: u8 = 90;
/// Lowest yellow score
pub const STATUS_YELLOW_MIN: u8 = 70;
/// Lowest orange score
pub const STATUS_ORANGE_MIN: u8 = 50;
