use serde::{Deserialize, Serialize};

use crate::mixer::value_type::ValueType;

/// Stored form of a boolean control that `tinymix` reports as `OFF`
pub const BOOL_TRUE: &str = "true";
/// Stored form of a boolean control that `tinymix` reports as `ON`
pub const BOOL_FALSE: &str = "false";

/// One mixer control, as captured from a `tinymix` dump
///
/// Field names follow the persisted state file format. `index` is not
/// persisted: it is the record's position in the dump and is re-derived
/// on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    #[serde(skip)]
    pub index: usize,
    #[serde(rename = "Type")]
    pub value_type: ValueType,
    #[serde(rename = "Num")]
    pub num: usize,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Values")]
    pub values: Vec<String>,
    /// Position of the active choice, only for `Enum` controls
    #[serde(rename = "Selected", default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
}

impl ControlRecord {
    /// The active enum choice, if one was marked
    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }
}
