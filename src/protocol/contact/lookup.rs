use tracing::debug;

use crate::contacts::ContactBook;
use crate::protocol::command::{Command, wrong_arity};
use crate::protocol::reply::Reply;

/// LOOKUP command: LOOKUP name field
#[derive(Debug, Clone, PartialEq)]
pub struct LookupCmd {
    pub name: String,
    pub field: String,
}

impl LookupCmd {
    /// Create a new LOOKUP command
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
        }
    }

    /// Parse LOOKUP command from its arguments
    pub fn parse(args: &[String]) -> Command {
        if args.len() != 3 {
            return wrong_arity("lookup");
        }
        Command::Lookup(LookupCmd::new(args[1].clone(), args[2].clone()))
    }

    /// Execute the LOOKUP command
    pub fn execute(&self, contacts: &ContactBook) -> Reply {
        match contacts.lookup(&self.name, &self.field) {
            Ok(value) => Reply::Value(value.clone()),
            Err(e) => {
                debug!(name = %self.name, field = %self.field, "lookup miss: {}", e);
                Reply::error(format!("ERR {}", e))
            }
        }
    }
}
