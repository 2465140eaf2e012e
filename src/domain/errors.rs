/// Simplified error system - failures in this core degrade locally and must
/// never crash the hosting UI.
#[derive(Debug, Clone)]
pub enum AppError {
    ValidationError(String),
    RenderingError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type alias
pub type RenderingResult<T> = Result<T, AppError>;
