//! Student identity persistence.
//!
//! One identity at a time, kept as a small JSON file so it survives
//! between invocations.

use std::{fs, io, path::PathBuf};

use mockall::automock;
use thiserror::Error;
use tiffin::student::Student;

/// Errors that can occur while loading or saving the identity.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Reading or writing the identity file failed.
    #[error("identity store io error: {0}")]
    Io(#[from] io::Error),

    /// The stored identity could not be parsed.
    #[error("the stored identity is not valid: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persisted slot holding who is currently ordering.
#[automock]
pub trait IdentityStore: Send + Sync {
    /// The saved identity, if one exists.
    fn load(&self) -> Result<Option<Student>, IdentityError>;

    /// Save `student` as the current identity, replacing any previous one.
    fn save(&self, student: &Student) -> Result<(), IdentityError>;

    /// Remove the saved identity. Removing a missing identity is a no-op.
    fn clear(&self) -> Result<(), IdentityError>;
}

/// Identity kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileIdentityStore {
    path: PathBuf,
}

impl JsonFileIdentityStore {
    /// Create a store over the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IdentityStore for JsonFileIdentityStore {
    fn load(&self) -> Result<Option<Student>, IdentityError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, student: &Student) -> Result<(), IdentityError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_vec_pretty(student)?)?;

        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
