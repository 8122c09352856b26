pub mod speaker;
pub mod transcript;

pub use speaker::*;
pub use transcript::*;
