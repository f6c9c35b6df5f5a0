mod check;
mod generate;

pub use check::*;
pub use generate::*;
