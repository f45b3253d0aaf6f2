//! Availability conditions and post-selection effects for ways.
//!
//! Both are plain data so they can be inspected, tested in isolation and
//! stored alongside the scenario.

mod condition;
mod effect;

pub use condition::Condition;
pub use effect::Effect;
