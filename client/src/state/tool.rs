//! Tool-page lifecycle and map chrome state.
//!
//! DESIGN
//! ======
//! The page walks `Idle -> LoadingKey -> LoadingScript -> Ready`, with
//! `Error` reachable from either loading phase. Map clicks and prediction
//! submits are accepted only in `Ready`.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use crate::net::types::Coordinate;
use crate::state::query::QueryForm;

/// Half a unit in the fourth decimal, the precision of the location fields.
const FIELD_TOLERANCE: f64 = 5e-5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ToolPhase {
    #[default]
    Idle,
    LoadingKey,
    LoadingScript,
    Ready,
    Error(String),
}

/// Base layer shown by the map widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapTab {
    #[default]
    Map,
    Satellite,
}

impl MapTab {
    /// Google Maps `mapTypeId` for this tab.
    pub fn map_type_id(self) -> &'static str {
        match self {
            Self::Map => "roadmap",
            Self::Satellite => "satellite",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Map => "Map",
            Self::Satellite => "Satellite",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolState {
    pub phase: ToolPhase,
    pub tab: MapTab,
    /// Marker position; at most one per page.
    pub selected: Option<Coordinate>,
    pub coordinate_panel_open: bool,
    pub history_open: bool,
}

impl ToolState {
    pub fn is_ready(&self) -> bool {
        self.phase == ToolPhase::Ready
    }

    /// `Idle -> LoadingKey`. Returns `false` if loading already started.
    pub fn begin_loading(&mut self) -> bool {
        if self.phase != ToolPhase::Idle {
            return false;
        }
        self.phase = ToolPhase::LoadingKey;
        true
    }

    /// `LoadingKey -> LoadingScript`.
    pub fn key_loaded(&mut self) -> bool {
        if self.phase != ToolPhase::LoadingKey {
            return false;
        }
        self.phase = ToolPhase::LoadingScript;
        true
    }

    /// `LoadingScript -> Ready`.
    pub fn script_loaded(&mut self) -> bool {
        if self.phase != ToolPhase::LoadingScript {
            return false;
        }
        self.phase = ToolPhase::Ready;
        true
    }

    /// Enter `Error` from either loading phase.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !matches!(self.phase, ToolPhase::LoadingKey | ToolPhase::LoadingScript) {
            return false;
        }
        self.phase = ToolPhase::Error(message.into());
        true
    }

    /// Move the marker and open the coordinate panel. Ignored unless ready.
    pub fn select(&mut self, coordinate: Coordinate) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.selected = Some(coordinate);
        self.coordinate_panel_open = true;
        true
    }

    /// Re-select from manually edited location fields.
    ///
    /// Ignored when the fields do not parse or still name the current marker
    /// at field precision, so a map click is not rounded by its own echo.
    pub fn follow_form(&mut self, form: &QueryForm) -> bool {
        let Ok(typed) = form.coordinate() else {
            return false;
        };
        let unchanged = self.selected.is_some_and(|current| {
            (current.latitude - typed.latitude).abs() < FIELD_TOLERANCE
                && (current.longitude - typed.longitude).abs() < FIELD_TOLERANCE
        });
        if unchanged {
            return false;
        }
        self.select(typed)
    }
}

/// Overlay text for non-ready phases; the flag marks error styling.
pub fn status_overlay(phase: &ToolPhase) -> Option<(String, bool)> {
    match phase {
        ToolPhase::Idle | ToolPhase::Ready => None,
        ToolPhase::LoadingKey => Some(("Loading API key...".to_owned(), false)),
        ToolPhase::LoadingScript => Some(("Loading map data...".to_owned(), false)),
        ToolPhase::Error(message) => Some((format!("Error: {message}"), true)),
    }
}
