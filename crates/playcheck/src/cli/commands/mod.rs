//! CLI commands

mod locales;
mod validate;

pub use locales::LocalesCommand;
pub use validate::ValidateCommand;
