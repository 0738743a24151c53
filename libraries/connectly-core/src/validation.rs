//! Request field validation

use crate::error::{CoreError, Result};

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Check that every named field is present and non-blank.
///
/// Fails with [`CoreError::MissingFields`] listing all offending fields in
/// the order given.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<()> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(name, _)| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingFields(missing))
    }
}

/// Check that an optional field, if supplied, is not blank
pub fn reject_blank(name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CoreError::invalid_input(format!(
            "{name} may not be blank"
        ))),
        _ => Ok(()),
    }
}
