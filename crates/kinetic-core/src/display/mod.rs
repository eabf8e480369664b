//! Markdown renderings of plans and operation outcomes.
//!
//! Domain models implement `Display` directly (see [`models`]). Newtype
//! wrappers cover the views that need a different shape of the same data:
//! list entries, previews and operation results. Every rendering is markdown
//! so the terminal renderer can style it.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod preview;
pub mod results;

pub use collections::PlanSummaries;
pub use datetime::{LocalDate, LocalDateTime};
pub use preview::{PlanOverview, PlanPreview};
pub use results::{DeleteResult, GenerateResult, ThemeResult};
