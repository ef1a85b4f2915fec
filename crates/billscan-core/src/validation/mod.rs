pub mod engine;
pub mod outcome;

pub use engine::{validate, validate_procedure_code, validate_with};
pub use outcome::ValidationResult;
