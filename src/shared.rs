pub mod types;
pub mod settings;
pub mod error;
pub mod time;


pub use error::{AppError, AppResult};
