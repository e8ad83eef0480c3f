use tracing::warn;

use crate::protocol::command::{Command, wrong_arity};
use crate::protocol::record::parse_id;
use crate::protocol::reply::Reply;
use crate::record::RecordId;
use crate::store::RecordStore;

/// UPDATE command: UPDATE id field value
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCmd {
    pub id: RecordId,
    pub field: String,
    pub value: String,
}

impl UpdateCmd {
    /// Parse UPDATE command from its arguments
    pub fn parse(args: &[String]) -> Command {
        if args.len() != 4 {
            return wrong_arity("update");
        }

        let id = match parse_id(&args[1]) {
            Ok(id) => id,
            Err(cmd) => return cmd,
        };

        Command::Update(UpdateCmd {
            id,
            field: args[2].clone(),
            value: args[3].clone(),
        })
    }

    /// Execute the UPDATE command, replying with the updated record
    pub fn execute(&self, store: &mut RecordStore) -> Reply {
        match store.update_field(self.id, &self.field, self.value.as_str()) {
            Ok(store) => Reply::json(&store.get(self.id)),
            Err(e) => {
                warn!(id = %self.id, field = %self.field, "update rejected: {}", e);
                Reply::error(format!("ERR {}", e))
            }
        }
    }
}
