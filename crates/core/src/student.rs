//! Student identity
//!
//! The identity travels with each submission. It is validated once, at
//! construction; where it is stored between sessions is a collaborator
//! concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The classes students can register under.
pub const CLASS_OPTIONS: [&str; 16] = [
    "CS 1st Year",
    "CS 2nd Year",
    "CS 3rd Year",
    "CS 4th Year",
    "ME 1st Year",
    "ME 2nd Year",
    "ME 3rd Year",
    "ME 4th Year",
    "EC 1st Year",
    "EC 2nd Year",
    "EC 3rd Year",
    "EC 4th Year",
    "EEE 1st Year",
    "EEE 2nd Year",
    "EEE 3rd Year",
    "EEE 4th Year",
];

/// Errors that can occur when validating a student identity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudentError {
    /// The trimmed name is shorter than two characters.
    #[error("student name must be at least 2 characters")]
    NameTooShort,

    /// No class was given.
    #[error("a class must be selected")]
    MissingClass,

    /// The class is not one of the published options.
    #[error("unknown class: {0}")]
    UnknownClass(String),
}

/// A validated student identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    name: String,
    admission_number: String,
    class: String,
}

impl Student {
    /// Validate and construct a student identity.
    ///
    /// Name and admission number are trimmed; the class must be one of
    /// [`CLASS_OPTIONS`].
    ///
    /// # Errors
    ///
    /// - [`StudentError::NameTooShort`]: the trimmed name has fewer than two characters.
    /// - [`StudentError::MissingClass`]: the class is empty.
    /// - [`StudentError::UnknownClass`]: the class is not a published option.
    pub fn new(name: &str, admission_number: &str, class: &str) -> Result<Self, StudentError> {
        let name = name.trim();
        let class = class.trim();

        if name.chars().count() < 2 {
            return Err(StudentError::NameTooShort);
        }

        if class.is_empty() {
            return Err(StudentError::MissingClass);
        }

        if !CLASS_OPTIONS.contains(&class) {
            return Err(StudentError::UnknownClass(class.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            admission_number: admission_number.trim().to_string(),
            class: class.to_string(),
        })
    }

    /// The student's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The student's admission number, free-form.
    #[must_use]
    pub fn admission_number(&self) -> &str {
        &self.admission_number
    }

    /// The class the student registered under.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn trims_inputs() -> TestResult {
        let student = Student::new("  Priya Nair  ", " ADM-1042 ", "CS 2nd Year")?;

        assert_eq!(student.name(), "Priya Nair");
        assert_eq!(student.admission_number(), "ADM-1042");
        assert_eq!(student.class(), "CS 2nd Year");

        Ok(())
    }

    #[test]
    fn rejects_short_names() {
        let result = Student::new(" A ", "ADM-1", "CS 1st Year");

        assert_eq!(result, Err(StudentError::NameTooShort));
    }

    #[test]
    fn rejects_missing_class() {
        let result = Student::new("Priya", "ADM-1", "  ");

        assert_eq!(result, Err(StudentError::MissingClass));
    }

    #[test]
    fn rejects_classes_outside_the_published_list() {
        let result = Student::new("Priya", "ADM-1", "Astro 9th Year");

        assert_eq!(
            result,
            Err(StudentError::UnknownClass("Astro 9th Year".to_string()))
        );
    }

    #[test]
    fn every_published_class_is_accepted() -> TestResult {
        for class in CLASS_OPTIONS {
            let student = Student::new("Priya", "ADM-1", class)?;
            assert_eq!(student.class(), class);
        }

        Ok(())
    }
}
