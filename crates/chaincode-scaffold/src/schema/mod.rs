mod parser;
mod types;
mod validator;

pub use parser::{parse_operations, parse_operations_str};
pub use types::*;
pub use validator::{is_js_identifier, validate_project, validate_project_name};
