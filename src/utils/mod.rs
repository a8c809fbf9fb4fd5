pub mod error;
pub mod html;
pub mod interactive;
pub mod output;

pub use error::{AppError, AppResult, report_error};
pub use interactive::*;
pub use output::{OutputStyle, print_success, print_warning};
