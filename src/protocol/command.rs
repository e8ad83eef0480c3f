use crate::protocol::contact::LookupCmd;
use crate::protocol::parser::Parser;
use crate::protocol::record::{DumpCmd, GetCmd, UpdateCmd};
use crate::protocol::reply::Reply;
use crate::session::Session;

/// Commands understood by a session
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// UPDATE id field value
    Update(UpdateCmd),
    /// GET id [field]
    Get(GetCmd),
    /// LOOKUP name field
    Lookup(LookupCmd),
    /// DUMP
    Dump(DumpCmd),
    /// Rejected at parse time; carries the error reply text
    Invalid(String),
}

impl Command {
    /// Parse a tokenized line into a Command
    fn from_args(args: &[String]) -> Option<Self> {
        let name = args.first()?.to_uppercase();

        let cmd = match name.as_str() {
            "UPDATE" => UpdateCmd::parse(args),
            "GET" => GetCmd::parse(args),
            "LOOKUP" => LookupCmd::parse(args),
            "DUMP" => DumpCmd::parse(args),
            _ => Command::Invalid(format!("ERR unknown command '{}'", name)),
        };
        Some(cmd)
    }

    /// Execute the command on the given session and return the reply
    fn execute_internal(&self, session: &mut Session) -> Reply {
        match self {
            Command::Update(cmd) => cmd.execute(session.store_mut()),
            Command::Get(cmd) => cmd.execute(session.store()),
            Command::Lookup(cmd) => cmd.execute(session.contacts()),
            Command::Dump(cmd) => cmd.execute(session.store()),
            Command::Invalid(msg) => Reply::error(msg.clone()),
        }
    }

    /// Parse and execute one command line on the given session
    pub fn execute(line: &str, session: &mut Session) -> Reply {
        let Some(args) = Parser::parse(line) else {
            return Reply::error("ERR unbalanced quotes in command");
        };

        match Self::from_args(&args) {
            Some(cmd) => cmd.execute_internal(session),
            None => Reply::error("ERR empty command"),
        }
    }
}

/// Error reply for a command called with the wrong number of arguments
pub(crate) fn wrong_arity(name: &str) -> Command {
    Command::Invalid(format!(
        "ERR wrong number of arguments for '{}' command",
        name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldValue, RecordId};

    fn args(line: &str) -> Vec<String> {
        Parser::parse(line).unwrap()
    }

    #[test]
    fn test_parse_update_command() {
        let cmd = Command::from_args(&args("update 5439 artist ABBA")).unwrap();
        match cmd {
            Command::Update(update) => {
                assert_eq!(update.id, RecordId::from(5439));
                assert_eq!(update.field, "artist");
                assert_eq!(update.value, "ABBA");
            }
            _ => panic!("Expected UPDATE command"),
        }
    }

    #[test]
    fn test_parse_lookup_command() {
        let cmd = Command::from_args(&args("LOOKUP Harry likes")).unwrap();
        assert_eq!(cmd, Command::Lookup(LookupCmd::new("Harry", "likes")));
    }

    #[test]
    fn test_parse_empty() {
        assert!(Command::from_args(&[]).is_none());
    }

    #[test]
    fn test_execute_update_then_get() {
        let mut session = Session::tutorial();

        let reply = Command::execute("UPDATE 5439 artist ABBA", &mut session);
        assert_eq!(
            reply,
            Reply::Json(serde_json::json!({"album": "ABBA Gold", "artist": "ABBA"}))
        );

        let reply = Command::execute("GET 5439 artist", &mut session);
        assert_eq!(reply, Reply::Value(FieldValue::from("ABBA")));
    }

    #[test]
    fn test_execute_lookup() {
        let mut session = Session::tutorial();
        let reply = Command::execute("lookup Harry likes", &mut session);
        assert_eq!(reply.encode(), r#"["Hogwarts","Girls"]"#);
    }

    #[test]
    fn test_execute_unknown_command() {
        let mut session = Session::tutorial();
        let reply = Command::execute("FROB 1 2", &mut session);
        assert_eq!(reply, Reply::error("ERR unknown command 'FROB'"));
    }

    #[test]
    fn test_execute_unbalanced_quotes() {
        let mut session = Session::tutorial();
        let reply = Command::execute(r#"UPDATE 2548 album "Slippery"#, &mut session);
        assert_eq!(reply, Reply::error("ERR unbalanced quotes in command"));
    }

    #[test]
    fn test_execute_empty_command() {
        let mut session = Session::tutorial();
        let reply = Command::execute("", &mut session);
        assert_eq!(reply, Reply::error("ERR empty command"));
    }
}
