//! Result links — `/result/{type}/?e=..&i=..&pi=..`.
//!
//! The result page receives the archetype in its path and the three primary
//! axis means as two-decimal query parameters.  [`ResultLink`] builds that
//! link; [`AxisReadout`] is what a result page recovers from the query.

use serde::{Deserialize, Serialize};

use crate::scoring::{Archetype, Axis, ScoreReport};

/// Path and query for one scored questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultLink {
    pub archetype: Archetype,
    pub e: f64,
    pub i: f64,
    pub pi: f64,
}

impl From<&ScoreReport> for ResultLink {
    fn from(report: &ScoreReport) -> Self {
        Self {
            archetype: report.archetype,
            e: report.averages.e,
            i: report.averages.i,
            pi: report.averages.pi,
        }
    }
}

impl ResultLink {
    /// `/result/{slug}/`
    pub fn path(&self) -> String {
        format!("/result/{}/", self.archetype.slug())
    }

    /// `e=5.17&i=4.00&pi=3.33`
    pub fn query(&self) -> String {
        format!(
            "{}={:.2}&{}={:.2}&{}={:.2}",
            Axis::E.key(),
            self.e,
            Axis::I.key(),
            self.i,
            Axis::Pi.key(),
            self.pi
        )
    }

    /// Absolute URL under `base` (trailing slashes on `base` are dropped).
    pub fn to_url(&self, base: &str) -> String {
        format!("{}{}?{}", base.trim_end_matches('/'), self.path(), self.query())
    }

    /// Read the axis parameters back out of a query string.
    ///
    /// Accepts an optional leading `?`.  Only the first occurrence of a key
    /// counts.  Values that are not finite numbers read as `0`.
    pub fn parse_query(query: &str) -> AxisReadout {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut found: [Option<f64>; 3] = [None; 3];

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(slot) = Axis::ALL.iter().position(|a| a.key() == key) else {
                continue;
            };
            if found[slot].is_none() {
                found[slot] = Some(parse_number(value));
            }
        }

        AxisReadout {
            has_all: found.iter().all(Option::is_some),
            e: found[0].unwrap_or(0.0),
            i: found[1].unwrap_or(0.0),
            pi: found[2].unwrap_or(0.0),
        }
    }
}

fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Axis values recovered from a result link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisReadout {
    /// All of `e`, `i`, `pi` were present.
    pub has_all: bool,
    pub e: f64,
    pub i: f64,
    pub pi: f64,
}

// ============================================================================
// Tests
// ============================================================================
