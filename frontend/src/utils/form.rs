//! Form helpers for the adoption dialog: BLIK code formatting and animal
//! name validation.

/// Formats a BLIK code as the user types: digits only, at most six of them,
/// one space after the third. Total and deterministic; running it on its own
/// output is a no-op, and the output never exceeds 7 characters.
pub fn format_value(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(6)
        .collect();

    if digits.len() > 3 {
        format!("{} {}", &digits[..3], &digits[3..])
    } else {
        digits
    }
}

/// An animal name is valid iff it is non-empty after trimming whitespace.
pub fn validate_animal_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// State of the adoption form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub animal_name: String,
    pub is_valid: bool,
    pub has_error: bool,
    pub animal_species_id: Option<u32>,
}

impl FormState {
    /// Back to a pristine form. `Default` is the reset state; this helper
    /// replaces the whole value rather than patching fields one by one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
