//! Command implementations

mod rules;
mod validate;

pub use rules::rules;
pub use validate::validate;
