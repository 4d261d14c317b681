mod engine;
mod report;

pub use engine::DiffEngine;
pub use report::{Violation, ViolationCategory, ViolationReport};
