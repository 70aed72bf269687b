//! Data shapes shared by the synthesizer, state, report and exports.

mod analytics;
mod enums;
mod notification;
mod records;

pub use self::analytics::*;
pub use self::enums::*;
pub use self::notification::*;
pub use self::records::*;
