//! Mode selection as an explicit state machine.
//!
//! The selectable options depend on each other: case modes only make sense
//! for bare names, and the snake→Pascal switch only applies to property
//! declarations. Every change goes through [`reduce`], so the enabled/checked
//! combinations below are the only reachable ones.

use crate::model::{ConversionMode, SourceShape};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeState {
    pub shape: SourceShape,
    pub mode: ConversionMode,
    pub snake_to_pascal: bool,
    /// pascal/camel/lower/upper can be selected
    pub case_modes_enabled: bool,
    /// snake→Pascal / as-is can be toggled
    pub naming_enabled: bool,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            shape: SourceShape::NameOnly,
            mode: ConversionMode::Pascal,
            snake_to_pascal: false,
            case_modes_enabled: true,
            naming_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeEvent {
    SelectNameOnly,
    SelectDefinition,
    /// One of the single-pattern case modes.
    SelectCase(ConversionMode),
    SelectProperty,
    SetSnakeToPascal(bool),
    Clear,
}

pub fn reduce_in_place(st: &mut ModeState, ev: ModeEvent) {
    match ev {
        ModeEvent::SelectNameOnly => {
            st.shape = SourceShape::NameOnly;
            st.case_modes_enabled = true;
            st.naming_enabled = false;
            st.mode = ConversionMode::Pascal;
            st.snake_to_pascal = false;
        }

        ModeEvent::SelectDefinition => {
            st.shape = SourceShape::DefinitionRow;
            st.case_modes_enabled = false;
            st.naming_enabled = true;
            st.mode = ConversionMode::Property;
            st.snake_to_pascal = true;
        }

        ModeEvent::SelectCase(mode) => {
            if !mode.is_case() {
                reduce_in_place(st, ModeEvent::SelectProperty);
                return;
            }
            if !st.case_modes_enabled {
                return;
            }
            st.mode = mode;
            if st.naming_enabled {
                st.naming_enabled = false;
                st.snake_to_pascal = false;
            }
        }

        ModeEvent::SelectProperty => {
            st.mode = ConversionMode::Property;
            if !st.naming_enabled {
                st.naming_enabled = true;
                st.snake_to_pascal = true;
            }
        }

        ModeEvent::SetSnakeToPascal(on) => {
            if st.naming_enabled {
                st.snake_to_pascal = on;
            }
        }

        ModeEvent::Clear => *st = ModeState::default(),
    }
}

pub fn reduce(st: &ModeState, ev: ModeEvent) -> ModeState {
    let mut next = st.clone();
    reduce_in_place(&mut next, ev);
    next
}

impl ModeState {
    pub fn apply(&mut self, ev: ModeEvent) {
        reduce_in_place(self, ev);
    }

    pub fn apply_many<I: IntoIterator<Item = ModeEvent>>(&mut self, events: I) {
        for ev in events {
            self.apply(ev);
        }
    }
}
