pub mod classification;
pub mod hourly;
pub mod threshold;
pub mod weather;

pub use classification::*;
pub use hourly::*;
pub use threshold::*;
pub use weather::*;
