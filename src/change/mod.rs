mod details;
mod base;

pub use details::ChangeDetails;
pub use base::Change;
