//! Command implementations for cloudcli.

pub mod list;
pub mod login;

pub use list::list_entries;
pub use login::{login, login_with};
