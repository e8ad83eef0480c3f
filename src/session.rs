use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::contacts::ContactBook;
use crate::error::SeedError;
use crate::protocol::{Command, Reply};
use crate::seed::Seed;
use crate::store::RecordStore;

/// A record store and contact book that commands execute against
pub struct Session {
    store: RecordStore,
    contacts: ContactBook,
}

impl Session {
    pub fn new(store: RecordStore, contacts: ContactBook) -> Self {
        Self { store, contacts }
    }

    /// Build a session from configuration, loading the seed file if one is set
    pub fn from_config(config: &Config) -> Result<Self, SeedError> {
        let seed = match &config.seed {
            Some(path) => Seed::from_file(path)?,
            None => {
                info!("No seed file configured, using built-in tutorial data");
                Seed::tutorial()
            }
        };
        Ok(Self::from_seed(seed, config))
    }

    pub fn from_seed(seed: Seed, config: &Config) -> Self {
        let (store, contacts) = seed.into_parts(&config.list_field, &config.contact_name_field);
        Self::new(store, contacts)
    }

    /// Session over the built-in tutorial data with default field names
    pub fn tutorial() -> Self {
        Self::from_seed(Seed::tutorial(), &Config::default())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    /// Execute a single command line
    pub fn execute(&mut self, line: &str) -> Reply {
        debug!("Received command: {:?}", line);
        Command::execute(line, self)
    }

    /// Read commands line by line from `input` until EOF, writing each reply
    /// to `output`. Blank lines are skipped.
    ///
    /// Returns the number of commands executed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> std::io::Result<usize> {
        let mut executed = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Invalid UTF-8 is replaced rather than ending the session
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            let reply = self.execute(line);
            if reply.is_error() {
                warn!("Command {:?} failed: {}", line, reply.encode());
            }
            reply.write_to(&mut output)?;
            output.flush()?;
            executed += 1;
        }

        info!("Input closed after {} commands", executed);
        Ok(executed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldValue, RecordId};
    use std::io::Cursor;

    #[test]
    fn test_run_script() {
        let mut session = Session::tutorial();
        let input = Cursor::new(
            "UPDATE 5439 artist ABBA\n\
              \n\
              GET 5439 artist\n\
              UPDATE 2548 tracks \"\"\n\
              GET 2548 tracks\n\
              LOOKUP Harry likes\n\
              LOOKUP Unknown likes\n\
              LOOKUP Harry age\n",
        );
        let mut output = Vec::new();

        let executed = session.run(input, &mut output).unwrap();
        assert_eq!(executed, 7);

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"album":"ABBA Gold","artist":"ABBA"}"#,
                "ABBA",
                r#"{"album":"Slippery When Wet","artist":"Bon Jovi"}"#,
                "(nil)",
                r#"["Hogwarts","Girls"]"#,
                "ERR No such contact",
                "ERR No such property",
            ]
        );
    }

    #[test]
    fn test_run_survives_invalid_utf8() {
        let mut session = Session::tutorial();
        let input = Cursor::new(b"GET 5439\nGET \xff\n GET 2468 album\r\n".to_vec());
        let mut output = Vec::new();

        let executed = session.run(input, &mut output).unwrap();
        assert_eq!(executed, 3);

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"album":"ABBA Gold"}"#,
                "ERR invalid record id '\u{fffd}'",
                "1999",
            ]
        );
    }

    #[test]
    fn test_execute_mutates_session_store() {
        let mut session = Session::tutorial();
        session.execute("UPDATE 1245 tracks \"Addicted to Love\"");
        session.execute("UPDATE 1245 tracks \"I Didn't Mean to Turn You On\"");
        assert_eq!(
            session.store().get(RecordId::from(1245)).unwrap().get("tracks"),
            Some(&FieldValue::List(vec![
                "Addicted to Love".to_string(),
                "I Didn't Mean to Turn You On".to_string(),
            ]))
        );
    }

    #[test]
    fn test_from_config_with_seed_file() {
        let mut seed = tempfile::NamedTempFile::new().unwrap();
        write!(
            seed,
            r#"{{
                "collection": {{"1": {{"songs": []}}}},
                "contacts": [{{"lastName": "Holmes", "number": "4123"}}]
            }}"#
        )
        .unwrap();

        let config = Config {
            seed: Some(seed.path().to_path_buf()),
            list_field: "songs".to_string(),
            contact_name_field: "lastName".to_string(),
            ..Config::default()
        };
        let mut session = Session::from_config(&config).unwrap();

        assert_eq!(
            session.execute("UPDATE 1 songs Violin").encode(),
            r#"{"songs":["Violin"]}"#
        );
        assert_eq!(session.execute("LOOKUP Holmes number").encode(), "4123");
    }

    #[test]
    fn test_from_config_missing_seed_file() {
        let config = Config {
            seed: Some("/nonexistent/seed.json".into()),
            ..Config::default()
        };
        assert!(matches!(
            Session::from_config(&config),
            Err(SeedError::Read { .. })
        ));
    }
}
