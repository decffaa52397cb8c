use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, error};

use catalyst_core::job_search::DEFAULT_LOCATION;
use catalyst_store::Toolbox;

use crate::protocol::{JsonRpcMessage, JsonRpcResponse, INVALID_PARAMS, PARSE_ERROR};
use crate::tools;

const SERVER_NAME: &str = "catalyst";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROTOCOL_VERSION: &str = "2024-11-05";

pub const DEFAULT_INSTRUCTIONS: &str = "\
Catalyst is a personal career and life assistant backed by local JSON files.\n\
\n\
JOBS: search_jobs builds search links for the major job boards; analyze_skill_gap \
compares the user's skills against a target role.\n\
\n\
TRACKING: add_application / update_application / list_applications follow the job hunt. \
add_task, track_habit and set_weekly_goal plan the week; weekly_progress_report sums it up.\n\
\n\
MONEY: add_expense, add_income, set_budget and the savings tools keep a monthly picture; \
financial_summary gives the overview.\n\
\n\
WELLNESS: log_mood, journal_entry and weekly_checkin. Be warm and brief.\n\
\n\
Tool replies are plain text. A reply starting with 'Error:' means nothing was saved.";

/// Settings the server passes through to clients and tools.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub instructions: String,
    pub default_location: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            instructions: DEFAULT_INSTRUCTIONS.into(),
            default_location: DEFAULT_LOCATION.into(),
        }
    }
}

/// Run the MCP server on stdio. Blocks until stdin is closed.
pub fn run_server(toolbox: &Toolbox, config: &ServerConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(toolbox, config, stdin.lock(), stdout.lock())
}

/// Serve newline-delimited JSON-RPC from `reader`, one response line per
/// request written to `writer`.
pub fn serve<R: BufRead, W: Write>(
    toolbox: &Toolbox,
    config: &ServerConfig,
    reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin read error: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let msg: JsonRpcMessage = match serde_json::from_str(line) {
            Ok(m) => m,
            Err(e) => {
                error!("invalid JSON-RPC: {e}");
                let resp =
                    JsonRpcResponse::err(Value::Null, PARSE_ERROR, format!("parse error: {e}"));
                write_response(&mut writer, &resp)?;
                continue;
            }
        };

        let method = msg.method.as_deref().unwrap_or("");
        debug!("MCP request: {method}");

        // Notifications have no id
        let id = match msg.id {
            Some(id) => id,
            None => continue,
        };

        let response = match method {
            "initialize" => handle_initialize(id, config),
            "ping" => JsonRpcResponse::ok(id, json!({})),
            "tools/list" => JsonRpcResponse::ok(id, tools::tool_definitions()),
            "tools/call" => handle_tools_call(id, &msg.params, toolbox, config),
            other => JsonRpcResponse::method_not_found(id, other),
        };

        write_response(&mut writer, &response)?;
    }

    Ok(())
}

fn write_response<W: Write>(writer: &mut W, resp: &JsonRpcResponse) -> anyhow::Result<()> {
    let json = serde_json::to_string(resp)?;
    writeln!(writer, "{json}")?;
    writer.flush()?;
    Ok(())
}

fn handle_initialize(id: Value, config: &ServerConfig) -> JsonRpcResponse {
    JsonRpcResponse::ok(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION
            },
            "instructions": config.instructions
        }),
    )
}

fn handle_tools_call(
    id: Value,
    params: &Option<Value>,
    toolbox: &Toolbox,
    config: &ServerConfig,
) -> JsonRpcResponse {
    let params = match params {
        Some(p) => p,
        None => {
            return JsonRpcResponse::err(id, INVALID_PARAMS, "missing params".into());
        }
    };

    let tool_name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n,
        None => {
            return JsonRpcResponse::err(id, INVALID_PARAMS, "missing tool name".into());
        }
    };

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    let result = tools::call_tool(toolbox, config, tool_name, &args);
    JsonRpcResponse::ok(id, serde_json::to_value(result).unwrap_or(json!(null)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_core::FixedClock;
    use catalyst_store::JsonStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn test_toolbox() -> (TempDir, Toolbox) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        let clock = FixedClock::on(2026, 10, 19).unwrap();
        (dir, Toolbox::with_clock(store, Box::new(clock)))
    }

    /// Feed `input` to the server and parse every response line.
    fn exchange(toolbox: &Toolbox, input: &str) -> Vec<Value> {
        let mut out = Vec::new();
        serve(toolbox, &ServerConfig::default(), Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_initialize_and_ping() {
        let (_dir, toolbox) = test_toolbox();
        let replies = exchange(
            &toolbox,
            concat!(
                r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
                "\n",
                r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
                "\n\n",
                r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
                "\n",
            ),
        );
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["result"]["serverInfo"]["name"], json!("catalyst"));
        assert_eq!(replies[0]["result"]["protocolVersion"], json!(PROTOCOL_VERSION));
        assert_eq!(replies[1]["id"], json!(2));
        assert_eq!(replies[1]["result"], json!({}));
    }

    #[test]
    fn test_protocol_errors() {
        let (_dir, toolbox) = test_toolbox();
        let replies = exchange(
            &toolbox,
            concat!(
                "{not json\n",
                r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call"}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{}}"#,
                "\n",
            ),
        );
        assert_eq!(replies[0]["error"]["code"], json!(PARSE_ERROR));
        assert_eq!(replies[0]["id"], Value::Null);
        assert_eq!(replies[1]["error"]["code"], json!(-32601));
        assert_eq!(replies[2]["error"]["message"], json!("missing params"));
        assert_eq!(replies[3]["error"]["message"], json!("missing tool name"));
    }

    #[test]
    fn test_tools_list_and_call() {
        let (_dir, toolbox) = test_toolbox();
        let replies = exchange(
            &toolbox,
            concat!(
                r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"add_task","arguments":{"task":"Prep system design","priority":"high"}}}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"complete_task","arguments":{"task_id":9}}}"#,
                "\n",
            ),
        );

        let names: Vec<&str> = replies[0]["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"add_task"));

        let ok = &replies[1]["result"];
        assert_eq!(
            ok["content"][0]["text"],
            json!("Task #1 added!\n  [HIGH] Prep system design")
        );
        assert!(ok.get("isError").is_none());

        let err = &replies[2]["result"];
        assert_eq!(err["isError"], json!(true));
        assert_eq!(err["content"][0]["text"], json!("Error: Task #9 not found."));
    }
}
