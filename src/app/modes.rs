//! Panel visibility and submit affordance types.
//!
//! The selector panel is either closed or open. The search term only exists
//! while the panel is open, so a closed panel with a leftover search term
//! cannot be represented: every transition to [`PanelState::Closed`] drops it.
//!
//! # State Machine
//!
//! ```text
//!            open / toggle
//!   Closed ─────────────────▶ Open { search_term }
//!     ▲                          │
//!     └──────────────────────────┘
//!      toggle / close / submit
//!      (single-mode item tap)
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Visibility of the candidate panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Only the header is shown.
    #[default]
    Closed,

    /// The search input and candidate list are shown.
    Open {
        /// Raw search term as typed; empty means no filtering.
        search_term: String,
    },
}

impl PanelState {
    /// An open panel with an empty search term.
    #[must_use]
    pub const fn open() -> Self {
        Self::Open {
            search_term: String::new(),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Current search term; always empty while closed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        match self {
            Self::Closed => "",
            Self::Open { search_term } => search_term,
        }
    }
}

/// How an explicit multi-mode submit is offered while the panel is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitAffordance {
    /// A submit button below the candidate list.
    #[default]
    Button,
    /// A compact indicator next to the search input, no button.
    Indicator,
}

impl FromStr for SubmitAffordance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "button" => Ok(Self::Button),
            "indicator" => Ok(Self::Indicator),
            other => Err(format!(
                "unknown submit affordance '{other}', expected 'button' or 'indicator'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_panel_has_empty_search_term() {
        assert_eq!(PanelState::Closed.search_term(), "");
        assert!(!PanelState::default().is_open());
    }

    #[test]
    fn open_panel_exposes_search_term() {
        let panel = PanelState::Open {
            search_term: "ban".to_string(),
        };
        assert!(panel.is_open());
        assert_eq!(panel.search_term(), "ban");
        assert_eq!(PanelState::open().search_term(), "");
    }

    #[test]
    fn submit_affordance_parses() {
        assert_eq!("indicator".parse::<SubmitAffordance>(), Ok(SubmitAffordance::Indicator));
        assert_eq!("BUTTON".parse::<SubmitAffordance>(), Ok(SubmitAffordance::Button));
        assert!("hidden".parse::<SubmitAffordance>().is_err());
    }
}
