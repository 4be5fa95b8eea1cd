//! Option rows as the card renders them.

use crate::catalog::ProductOption;
use crate::variant::{Selection, SwatchTable};
use serde::Serialize;

/// How a control is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlStyle {
    /// Round color chip.
    Swatch { color: String },
    /// Text button with the value as label.
    Text,
}

/// Selection state of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    Selected,
    /// Another value of the same option is chosen.
    Dimmed,
    Idle,
}

/// One clickable option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionControl {
    pub value: String,
    /// Accessible label, e.g. "Color: Red".
    pub label: String,
    pub state: ControlState,
    pub style: ControlStyle,
}

impl OptionControl {
    pub(crate) fn new(
        option: &ProductOption,
        value: &str,
        selection: &Selection,
        swatches: &SwatchTable,
    ) -> Self {
        let state = match selection.get(&option.name) {
            Some(chosen) if chosen == value => ControlState::Selected,
            Some(_) => ControlState::Dimmed,
            None => ControlState::Idle,
        };

        let color = if option.has_swatch() {
            option.swatch(value).or_else(|| swatches.get(value))
        } else {
            None
        };
        let style = match color {
            Some(color) => ControlStyle::Swatch {
                color: color.to_string(),
            },
            None => ControlStyle::Text,
        };

        Self {
            value: value.to_string(),
            label: format!("{}: {}", option.name, value),
            state,
            style,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.state == ControlState::Selected
    }
}

/// All available values of one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRow {
    pub name: String,
    pub has_swatch: bool,
    pub controls: Vec<OptionControl>,
}

impl OptionRow {
    /// The control for the chosen value, if it is still listed.
    pub fn selected(&self) -> Option<&OptionControl> {
        self.controls.iter().find(|c| c.is_selected())
    }
}
