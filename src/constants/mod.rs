pub mod accounts;
pub mod tokens;

pub use accounts::*;
pub use tokens::*;
