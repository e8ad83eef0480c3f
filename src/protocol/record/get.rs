use crate::protocol::command::{Command, wrong_arity};
use crate::protocol::record::parse_id;
use crate::protocol::reply::Reply;
use crate::record::RecordId;
use crate::store::RecordStore;

/// GET command: GET id [field]
#[derive(Debug, Clone, PartialEq)]
pub struct GetCmd {
    pub id: RecordId,
    pub field: Option<String>,
}

impl GetCmd {
    /// Create a GET command for a whole record
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            field: None,
        }
    }

    /// Restrict the command to a single field
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Parse GET command from its arguments
    pub fn parse(args: &[String]) -> Command {
        if !(2..=3).contains(&args.len()) {
            return wrong_arity("get");
        }

        let id = match parse_id(&args[1]) {
            Ok(id) => id,
            Err(cmd) => return cmd,
        };

        Command::Get(GetCmd {
            id,
            field: args.get(2).cloned(),
        })
    }

    /// Execute the GET command
    pub fn execute(&self, store: &RecordStore) -> Reply {
        let Some(record) = store.get(self.id) else {
            return Reply::Nil;
        };

        match &self.field {
            None => Reply::json(record),
            Some(field) => match record.get(field) {
                Some(value) => Reply::Value(value.clone()),
                None => Reply::Nil,
            },
        }
    }
}
