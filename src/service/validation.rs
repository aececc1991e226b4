//! Range and consistency checks applied to parsed model output
//!
//! Scores outside [0, 1] are rejected, never clamped.

/// Result of validating one structured response
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether the response passed validation
    pub is_valid: bool,
    /// Critical errors that indicate invalid output
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Reject a score outside the unit interval
    pub fn check_unit_score(&mut self, field: &str, value: f64) {
        if !(0.0..=1.0).contains(&value) {
            self.add_error(format!("{field} must lie in [0, 1], got {value}"));
        }
    }

    /// Warn when a text field the reader depends on is blank
    pub fn check_not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add_warning(format!("{field} is empty"));
        }
    }
}
