// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::{json, Value};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Stdio};
use tempfile::TempDir;

struct McpProc {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl McpProc {
    fn spawn(cwd: &std::path::Path, extra_args: &[&str]) -> Self {
        let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin!("faqmatch"))
            .current_dir(cwd)
            .env("HOME", cwd)
            .env_remove("FAQMATCH_FAQ")
            .args(extra_args)
            .args(["mcp", "serve"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .expect("spawn mcp");
        let stdin = child.stdin.take().expect("stdin");
        let stdout = BufReader::new(child.stdout.take().expect("stdout"));
        Self {
            child,
            stdin,
            stdout,
        }
    }

    fn call(&mut self, req: Value) -> Value {
        let line = serde_json::to_string(&req).expect("encode");
        writeln!(self.stdin, "{}", line).expect("write req");
        self.stdin.flush().expect("flush");

        let mut resp_line = String::new();
        self.stdout.read_line(&mut resp_line).expect("read resp");
        serde_json::from_str(&resp_line).expect("parse resp")
    }

    fn stop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn tool_call(id: i64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {
            "name": name,
            "arguments": arguments
        }
    })
}

#[test]
fn mcp_initialize_and_list_tools() {
    let dir = TempDir::new().expect("tempdir");
    let mut mcp = McpProc::spawn(dir.path(), &[]);

    let init = mcp.call(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {}
    }));
    assert_eq!(init["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(init["result"]["serverInfo"]["name"], "faqmatch");

    let tools = mcp.call(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/list",
        "params": {}
    }));
    let names: Vec<String> = tools["result"]["tools"]
        .as_array()
        .expect("tools array")
        .iter()
        .filter_map(|t| t.get("name").and_then(Value::as_str))
        .map(ToOwned::to_owned)
        .collect();
    assert!(names.contains(&"faq_ask".to_string()));
    assert!(names.contains(&"faq_explain".to_string()));

    mcp.stop();
}

#[test]
fn mcp_faq_ask_uses_custom_corpus() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("faq.json"),
        r#"[{"question": "Как подключить интернет?", "answer": "Позвоните 123"},
            {"question": "Сколько стоит тариф?", "answer": "500 рублей в месяц"}]"#,
    )
    .expect("write corpus");
    let mut mcp = McpProc::spawn(dir.path(), &["--faq", "faq.json"]);

    let resp = mcp.call(tool_call(1, "faq_ask", json!({ "query": "какая цена" })));
    let text = resp["result"]["content"][0]["text"]
        .as_str()
        .expect("answer text");
    let answer: Value = serde_json::from_str(text).expect("answer json");
    assert_eq!(answer["question"], "Сколько стоит тариф?");
    assert_ne!(answer["tier"], "unmatched");

    let stats = mcp.call(tool_call(2, "faq_stats", json!({})));
    let text = stats["result"]["content"][0]["text"].as_str().expect("stats text");
    let stats: Value = serde_json::from_str(text).expect("stats json");
    assert_eq!(stats["entries"], 2);

    mcp.stop();
}

#[test]
fn mcp_unknown_tool_returns_is_error() {
    let dir = TempDir::new().expect("tempdir");
    let mut mcp = McpProc::spawn(dir.path(), &[]);

    let resp = mcp.call(tool_call(1, "unknown_tool", json!({})));
    assert_eq!(resp["result"]["isError"], true);
    assert!(resp["result"]["content"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .contains("unknown tool"));

    mcp.stop();
}

#[test]
fn mcp_parse_error_keeps_serving() {
    let dir = TempDir::new().expect("tempdir");
    let mut mcp = McpProc::spawn(dir.path(), &[]);

    writeln!(mcp.stdin, "{{not json").expect("write garbage");
    mcp.stdin.flush().expect("flush");
    let mut line = String::new();
    mcp.stdout.read_line(&mut line).expect("read error");
    let err: Value = serde_json::from_str(&line).expect("error json");
    assert_eq!(err["error"]["code"], -32700);

    let pong = mcp.call(json!({ "jsonrpc": "2.0", "id": 9, "method": "ping" }));
    assert_eq!(pong["id"], 9);

    mcp.stop();
}
