pub mod macros;
pub mod session;
pub mod spot;
pub mod telemetry;
pub mod time;

pub use session::*;
pub use spot::*;
pub use telemetry::*;
pub use time::*;
