//! Team Validation Rules
//!
//! Field-level checks that run before any store access. Checks are ordered
//! and the first failure wins:
//!
//! 1. presence of `name`, `base`, `championshipsWon`
//! 2. types (strings, integral number)
//! 3. `championshipsWon >= 0`
//! 4. name length
//! 5. base length
//! 6. `name != base`
//!
//! Uniqueness (step 7) needs the store and is enforced by the Team service.

use serde_json::Value;

use crate::domain::value_objects::is_truthy;
use crate::domain::{NewTeam, TeamError, TeamPayload, ValidationMode};

/// Shortest accepted name or base, in UTF-16 code units
pub const MIN_FIELD_LEN: usize = 3;
/// Longest accepted name or base, in UTF-16 code units
pub const MAX_FIELD_LEN: usize = 20;

/// Run steps 1-6 against a raw payload
pub fn validate_team(payload: &TeamPayload, mode: ValidationMode) -> Result<NewTeam, TeamError> {
    let fields = [
        payload.name.as_ref(),
        payload.base.as_ref(),
        payload.championships_won.as_ref(),
    ];
    if !fields.into_iter().all(|field| is_present(field, mode)) {
        return Err(TeamError::MissingParameters);
    }

    let (Some(Value::String(name)), Some(Value::String(base)), Some(championships_won)) =
        (&payload.name, &payload.base, &payload.championships_won)
    else {
        return Err(TeamError::WrongType);
    };
    let championships_won = as_counter(championships_won).ok_or(TeamError::WrongType)?;

    if championships_won < 0 {
        return Err(TeamError::NegativeChampionships);
    }
    if !has_valid_length(name) {
        return Err(TeamError::InvalidNameLength);
    }
    if !has_valid_length(base) {
        return Err(TeamError::InvalidBaseLength);
    }
    if name == base {
        return Err(TeamError::NameEqualsBase);
    }

    Ok(NewTeam {
        name: name.clone(),
        base: base.clone(),
        championships_won,
    })
}

/// Validate a name used as a lookup key (path parameter)
pub fn validate_key(key: &str) -> Result<(), TeamError> {
    if key.is_empty() {
        return Err(TeamError::MissingParameters);
    }
    if !has_valid_length(key) {
        return Err(TeamError::InvalidNameLength);
    }
    Ok(())
}

fn is_present(value: Option<&Value>, mode: ValidationMode) -> bool {
    match (value, mode) {
        (None, _) => false,
        (Some(value), ValidationMode::Legacy) => is_truthy(value),
        (Some(value), ValidationMode::Strict) => !value.is_null(),
    }
}

/// Lengths count UTF-16 code units, so a non-BMP character counts twice
fn has_valid_length(value: &str) -> bool {
    (MIN_FIELD_LEN..=MAX_FIELD_LEN).contains(&value.encode_utf16().count())
}

/// Integral JSON numbers only; `16.0` is accepted, `16.5` is not
fn as_counter(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}
