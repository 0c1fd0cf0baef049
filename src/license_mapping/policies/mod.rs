pub mod lookup_priority;

pub use lookup_priority::{LookupPriority, LookupTier};
