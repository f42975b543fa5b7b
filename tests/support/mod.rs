use assert_cmd::Command;
use serde_json::Value;

/// Command for the todo binary under test.
pub fn todo_cmd() -> Command {
    Command::cargo_bin("todo").expect("todo binary")
}

/// Parse a stream of concatenated pretty-printed JSON documents, one per
/// emitted envelope.
pub fn json_docs(stdout: &[u8]) -> Vec<Value> {
    let text = String::from_utf8_lossy(stdout);
    serde_json::Deserializer::from_str(&text)
        .into_iter::<Value>()
        .collect::<Result<Vec<_>, _>>()
        .expect("valid json stream")
}

/// The first envelope a given command produced, if any.
pub fn envelope_for<'a>(docs: &'a [Value], command: &str) -> Option<&'a Value> {
    docs.iter()
        .find(|doc| doc["command"].as_str() == Some(command))
}
