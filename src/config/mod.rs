pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::{CombinationMode, MatchMode, Scope, SearchSpec, TargetField};

/// The persisted last-used search parameters.
///
/// This is a replay cache for the presentation layer: it restores the
/// previous request between invocations and never affects engine
/// correctness. Window geometry rides along for the search dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    pub expression: String,
    pub match_mode: MatchMode,
    pub target_field: TargetField,
    pub ignore_case: bool,
    pub invert: bool,
    /// For All/Visible scope: union with the existing selection instead of
    /// replacing it.
    pub add_to_selection: bool,
    pub scope: Scope,
    pub persistent_window: bool,
    pub window_size: (f64, f64),
    pub window_position: (f64, f64),
}

impl SearchConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }

    /// Builds the engine request for the stored parameters.
    ///
    /// The combination mode follows the calling convention: Selected scope
    /// always deselects unmatched entries; All/Visible scope replaces the
    /// selection or adds to it per `add_to_selection`.
    pub fn to_spec(&self) -> SearchSpec {
        let combination_mode = match self.scope {
            Scope::Selected => CombinationMode::DeselectUnmatched,
            Scope::All | Scope::Visible => {
                if self.add_to_selection {
                    CombinationMode::Add
                } else {
                    CombinationMode::Replace
                }
            }
        };
        SearchSpec {
            expression: self.expression.clone(),
            match_mode: self.match_mode,
            target_field: self.target_field,
            ignore_case: self.ignore_case,
            invert: self.invert,
            scope: self.scope,
            combination_mode,
        }
    }

    /// Records a request as the new last-used parameters.
    pub fn remember(&mut self, spec: &SearchSpec) {
        self.expression = spec.expression.clone();
        self.match_mode = spec.match_mode;
        self.target_field = spec.target_field;
        self.ignore_case = spec.ignore_case;
        self.invert = spec.invert;
        self.scope = spec.scope;
        if spec.scope != Scope::Selected {
            self.add_to_selection = spec.combination_mode == CombinationMode::Add;
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            expression: String::new(),
            match_mode: MatchMode::Contains,
            target_field: TargetField::Name,
            ignore_case: true,
            invert: false,
            add_to_selection: false,
            scope: Scope::All,
            persistent_window: false,
            window_size: (480.0, 320.0),
            window_position: (100.0, 100.0),
        }
    }
}
