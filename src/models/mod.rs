//! Domain models shared across the entire dashboard.

pub mod bar;
pub mod notification;
pub mod position;

pub use bar::{Bar, ChartPoint};
pub use notification::{Notification, NotificationKind};
pub use position::{Position, PositionInput};
