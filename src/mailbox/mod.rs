//! The mailbox domain: the authoritative state machine, the record
//! store mirroring it, and the facade the HTTP layer talks to.

pub mod facade;
pub mod machine;
pub mod models;
pub mod store;

pub use facade::StatusFacade;
pub use machine::{Mailbox, Transition};
pub use models::{HistoryQuery, MailItem, MailboxSnapshot};
pub use store::StoreError;
