pub mod human;

use serde_json::{Value, json};

/// JSON envelope on stdout for a successful command. `command` is the dotted
/// name of what ran (`record`, `symptom.log`, `recommend`, `menu`,
/// `dashboard`, `goal.add`, `water.add`, `reminder.list`, ...) and `data` is
/// its payload.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

/// Failure envelope written to stderr before exiting with status 1.
/// Validation failures such as a rejected weight use code `general_error`.
pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}
