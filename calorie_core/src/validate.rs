//! Input validation for presentation layers.
//!
//! The ledger itself accepts any entry. Raw user input is checked here
//! before an entry is built.

use crate::{Error, NewEntry, Result};

/// Validate a name and a calorie count as typed by the user
pub fn entry_input(name: &str, calories: &str) -> Result<NewEntry> {
    let name = name.trim();
    let calories = calories.trim();
    if name.is_empty() || calories.is_empty() {
        return Err(Error::Validation("Please fill in all fields".into()));
    }

    let calories = parse_calories(calories)?;
    Ok(NewEntry {
        name: name.to_string(),
        calories,
    })
}

/// Validate a new daily limit. Zero is rejected.
pub fn calorie_limit(input: &str) -> Result<u32> {
    let limit = parse_calories(input.trim())?;
    if limit == 0 {
        return Err(Error::Validation(
            "Calorie limit must be greater than zero".into(),
        ));
    }
    Ok(limit)
}

fn parse_calories(input: &str) -> Result<u32> {
    input.parse::<u32>().map_err(|_| {
        Error::Validation(format!(
            "Calories must be a whole, non-negative number, got {:?}",
            input
        ))
    })
}
