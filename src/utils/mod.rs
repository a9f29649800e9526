// Utils compartidos

pub mod constants;
pub mod storage;
pub mod viewport;

pub use constants::*;
pub use storage::*;
