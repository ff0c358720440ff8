pub mod inquiry;
pub mod notification;
pub mod outcome;
pub mod presentation;

pub use inquiry::{Field, Inquiry, InquiryForm};
pub use notification::{NotificationRequest, NotificationResult};
pub use outcome::{Outcome, OutcomeKind};
pub use presentation::{Block, BlockKind, Presentation};
