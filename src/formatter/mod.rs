mod style;
mod typescript;

pub use style::{EndOfLine, StyleConfig, StyleError};
pub use typescript::render_declarations;
