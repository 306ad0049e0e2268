// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use till::prelude::*;` to get started quickly.

pub use crate::account::{Account, AccountEvent};
pub use crate::actor::{Actor, ActorConfig, ActorReport, Consumer, Producer, Shutdown};
pub use crate::error::{AccountError, TillError};
