// Application layer - the ledger that clients (CLI, tests) drive.
// The presentation layer holds no state of its own: it renders whatever
// `Ledger::all` returns and routes every mutation through here.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
