mod parallax;
mod pointer;

pub use parallax::wire_parallax;
pub use pointer::{wire_input_handlers, InputWiring};
