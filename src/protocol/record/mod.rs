//! Record store commands
//!
//! UPDATE mutates a single field, GET reads a record or one of its fields,
//! DUMP renders the whole store.

pub mod dump;
pub mod get;
pub mod update;

pub use dump::DumpCmd;
pub use get::GetCmd;
pub use update::UpdateCmd;

use crate::protocol::command::Command;
use crate::record::RecordId;

/// Parse a record id argument, or produce the error command for it
pub(crate) fn parse_id(arg: &str) -> Result<RecordId, Command> {
    arg
        .parse()
        .map_err(|_| Command::Invalid(format!("ERR invalid record id '{}'", arg)))
}
