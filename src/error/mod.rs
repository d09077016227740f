mod app_error;

pub use app_error::{AppError, ErrorResponse};

pub type Result<T> = std::result::Result<T, AppError>;
