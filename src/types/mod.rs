mod section;

pub use section::*;
