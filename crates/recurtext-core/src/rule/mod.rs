//! Recurrence rule model (RFC 5545 §3.3.10).
//!
//! `Options` is the structured form the natural-language engine reads and
//! writes; `codec` maps it to and from the canonical `FREQ=...;BYDAY=...`
//! text.

mod codec;
mod date;
mod options;

pub use codec::parse_rrule;
pub use date::Date;
pub use options::{Frequency, Options, Weekday, WeekdayNum};
