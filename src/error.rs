use std::path::Path;

/// Exit code for file-system failures (open, read, create, rename).
pub const EXIT_IO: u8 = 2;
/// Exit code for documents that are not valid JSON or have the wrong shape.
pub const EXIT_MALFORMED: u8 = 3;
/// Exit code for failures that indicate a bug rather than bad input.
pub const EXIT_INTERNAL: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn io(action: &str, path: &Path, err: impl std::fmt::Display) -> Self {
        Self::new(EXIT_IO, format!("Failed to {action} '{}': {err}", path.display()))
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(EXIT_MALFORMED, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
