use crate::protocol::command::{Command, wrong_arity};
use crate::protocol::reply::Reply;
use crate::store::RecordStore;

/// DUMP command: render every record, ordered by id
#[derive(Debug, Clone, PartialEq)]
pub struct DumpCmd;

impl DumpCmd {
    pub fn parse(args: &[String]) -> Command {
        if args.len() != 1 {
            return wrong_arity("dump");
        }
        Command::Dump(DumpCmd)
    }

    pub fn execute(&self, store: &RecordStore) -> Reply {
        Reply::json(store)
    }
}
