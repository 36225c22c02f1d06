pub mod carousel;

pub use carousel::*;
