pub mod analysis;
pub mod enums;
pub mod message;

pub use analysis::*;
pub use enums::*;
pub use message::*;
