//! Declarative scoring rules.
//!
//! Every analyzer gathers its facts into a plain struct and scores them against
//! a static table of [`Rule`]s. Each rule whose condition holds emits one
//! finding, in table order, and issues subtract their penalty from 100. Tiered
//! rules (response-time bands, size bands, ...) are written with disjoint
//! conditions so that exactly one band fires.

use super::types::{CategoryResult, Finding, Severity};

/// Starting score of every category.
pub const MAX_SCORE: i32 = 100;

/// What a triggered rule does to the score.
pub(crate) enum Effect<F> {
    /// Reports a passed check; no score change
    Success,
    /// Subtracts a fixed number of points
    Penalty(Severity, u32),
    /// Subtracts a number of points computed from the facts
    ScaledPenalty(Severity, fn(&F) -> u32),
}

/// One row of a scoring table.
pub(crate) struct Rule<F> {
    pub(crate) when: fn(&F) -> bool,
    pub(crate) effect: Effect<F>,
    pub(crate) message: fn(&F) -> String,
}

impl<F> Rule<F> {
    pub(crate) const fn success(when: fn(&F) -> bool, message: fn(&F) -> String) -> Self {
        Self {
            when,
            effect: Effect::Success,
            message,
        }
    }

    pub(crate) const fn penalty(
        severity: Severity,
        points: u32,
        when: fn(&F) -> bool,
        message: fn(&F) -> String,
    ) -> Self {
        Self {
            when,
            effect: Effect::Penalty(severity, points),
            message,
        }
    }

    pub(crate) const fn scaled(
        severity: Severity,
        points: fn(&F) -> u32,
        when: fn(&F) -> bool,
        message: fn(&F) -> String,
    ) -> Self {
        Self {
            when,
            effect: Effect::ScaledPenalty(severity, points),
            message,
        }
    }
}

/// Clamps a raw score into `0..=100`.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, MAX_SCORE) as u8
}

/// Scores `facts` against `rules`.
pub(crate) fn evaluate<F>(rules: &[Rule<F>], facts: &F) -> CategoryResult {
    let mut score = MAX_SCORE;
    let mut findings = Vec::new();

    for rule in rules.iter().filter(|rule| (rule.when)(facts)) {
        let message = (rule.message)(facts);
        match rule.effect {
            Effect::Success => findings.push(Finding::success(message)),
            Effect::Penalty(severity, points) => {
                score -= points as i32;
                findings.push(Finding::issue(severity, message));
            }
            Effect::ScaledPenalty(severity, points) => {
                score -= points(facts) as i32;
                findings.push(Finding::issue(severity, message));
            }
        }
    }

    CategoryResult {
        score: clamp_score(score),
        findings,
        metrics: None,
    }
}
