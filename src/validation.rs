//! Input validation for simulation workloads.
//!
//! Checks structural integrity of a process set before any policy
//! runs. Detects:
//! - Duplicate process IDs
//! - Zero-length bursts (the policies assume `burst > 0`)
//! - The reserved id 0 (ids are 1-based)
//!
//! An empty workload is valid: every policy yields an empty schedule
//! for it.

use std::collections::HashSet;

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires zero CPU time.
    ZeroBurst,
    /// A process uses the reserved id 0.
    ZeroId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload's process set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                "Process IDs are 1-based; 0 is reserved",
            ));
        }
        if p.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has a zero-length burst", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
