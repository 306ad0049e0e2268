// ABOUTME: Account module - a shared balance behind a fair lock with wait/notify.
// ABOUTME: Contains the account itself and its observable event stream.

mod account;
mod events;

pub use account::Account;
pub use events::AccountEvent;
