use crate::mixer::control::{ControlRecord, BOOL_FALSE, BOOL_TRUE};
use crate::mixer::error::EncodeError;
use crate::mixer::value_type::ValueType;

/// Build the `tinymix` arguments that restore `record` on device `device_index`
///
/// The result is `-D <device> <name> -- <values>...`. Enum controls with no
/// selection and fewer than two values contribute no value arguments.
pub fn encode(record: &ControlRecord, device_index: u32) -> Result<Vec<String>, EncodeError> {
    let mut args = vec![
        "-D".to_string(),
        device_index.to_string(),
        record.name.clone(),
        "--".to_string(),
    ];
    args.extend(encode_values(record)?);
    Ok(args)
}

/// Rendered value arguments only
pub fn encode_values(record: &ControlRecord) -> Result<Vec<String>, EncodeError> {
    match record.value_type {
        ValueType::Bool => record
            .values
            .iter()
            .map(|value| match value.as_str() {
                BOOL_TRUE => Ok("1".to_string()),
                BOOL_FALSE => Ok("0".to_string()),
                other => Err(EncodeError::InvalidBoolean(other.to_string())),
            })
            .collect(),
        // Already decimal strings from decode
        ValueType::Int | ValueType::Byte => Ok(record.values.clone()),
        ValueType::Enum => encode_enum(record),
    }
}

fn encode_enum(record: &ControlRecord) -> Result<Vec<String>, EncodeError> {
    let selected = match record.selected {
        Some(selected) => selected,
        None if record.values.len() < 2 => return Ok(Vec::new()),
        None => {
            return Err(EncodeError::MissingSelection {
                name: record.name.clone(),
            })
        }
    };

    record
        .values
        .get(selected)
        .map(|value| vec![value.clone()])
        .ok_or_else(|| EncodeError::SelectionOutOfRange {
            name: record.name.clone(),
            selected,
            len: record.values.len(),
        })
}
