// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP server support for faqmatch (stdio JSON-RPC).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

use faqmatch::engine::{diagnose, EngineState};
use faqmatch::output::to_json_string;

const PROTOCOL_VERSION: &str = "2024-11-05";

const HARNESS_INSTRUCTIONS: &str = "\
faqmatch MCP harness (ISP support FAQ lookup).\n\
\n\
Call faq_ask with the customer's question as written. The result is JSON with a tier:\n\
- confident / tentative: `question` and `answer` hold the matched FAQ entry.\n\
- unmatched: `suggestions` lists related FAQ questions to offer instead.\n\
- degenerate: the question was too short; ask the customer for details.\n\
\n\
Use faq_explain to see why an entry ranked where it did, faq_stats for corpus info.\n\
This server is read-only; the FAQ corpus never changes while it runs.";

pub fn run(engine: &EngineState) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(req) => req,
            Err(err) => {
                write_error(&mut stdout, None, -32700, &format!("parse error: {}", err))?;
                continue;
            }
        };

        // JSON-RPC notifications have no id; no response needed.
        if req.id.is_none() {
            continue;
        }

        let resp = handle_request(&req, engine);
        serde_json::to_writer(&mut stdout, &resp)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[serde(rename = "jsonrpc")]
    _jsonrpc: String,
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: &'static str,
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }
}

fn handle_request(req: &JsonRpcRequest, engine: &EngineState) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            req.id.clone(),
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "faqmatch",
                    "version": env!("CARGO_PKG_VERSION")
                },
                "instructions": HARNESS_INSTRUCTIONS
            }),
        ),
        "ping" => JsonRpcResponse::ok(req.id.clone(), json!({})),
        "tools/list" => JsonRpcResponse::ok(
            req.id.clone(),
            json!({
                "tools": tool_definitions()
            }),
        ),
        "tools/call" => handle_tool_call(req, engine),
        _ => JsonRpcResponse {
            jsonrpc: "2.0",
            id: req.id.clone(),
            result: None,
            error: Some(JsonRpcError {
                code: -32601,
                message: format!("method not found: {}", req.method),
            }),
        },
    }
}

fn handle_tool_call(req: &JsonRpcRequest, engine: &EngineState) -> JsonRpcResponse {
    let params = &req.params;
    let tool_name = params
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let args = params.get("arguments").unwrap_or(&Value::Null);

    match dispatch_tool(tool_name, args, engine) {
        Ok(output) => JsonRpcResponse::ok(
            req.id.clone(),
            json!({
                "content": [{
                    "type": "text",
                    "text": output
                }]
            }),
        ),
        Err(err) => JsonRpcResponse::ok(
            req.id.clone(),
            json!({
                "content": [{
                    "type": "text",
                    "text": err
                }],
                "isError": true
            }),
        ),
    }
}

fn dispatch_tool(tool: &str, args: &Value, engine: &EngineState) -> Result<String, String> {
    match tool {
        "faq_ask" => {
            let query = required_str(args, "query")?;
            encode(&engine.answer(query))
        }
        "faq_explain" => {
            let query = required_str(args, "query")?;
            let top = opt_u64(args, "top").unwrap_or(5) as usize;
            encode(&engine.explain(query, top))
        }
        "faq_check" => encode(&diagnose(engine)),
        "faq_stats" => encode(&engine.stats()),
        _ => Err(format!("unknown tool: {}", tool)),
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, String> {
    to_json_string(value, true).map_err(|e| format!("failed to encode result: {}", e))
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, String> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing required argument: {}", key))
}

fn opt_u64(args: &Value, key: &str) -> Option<u64> {
    args.get(key).and_then(Value::as_u64)
}

fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "faq_ask",
            "description": "Answer an ISP support question from the FAQ corpus.",
            "inputSchema": {
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": { "type": "string" }
                }
            }
        }),
        json!({
            "name": "faq_explain",
            "description": "Per-entry keyword, TF-IDF and Jaccard scores for a question.",
            "inputSchema": {
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": { "type": "string" },
                    "top": { "type": "number" }
                }
            }
        }),
        json!({
            "name": "faq_check",
            "description": "Run the built-in diagnostic questions.",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        }),
        json!({
            "name": "faq_stats",
            "description": "Corpus size, vocabulary and fingerprint.",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        }),
    ]
}

fn write_error(w: &mut impl Write, id: Option<Value>, code: i32, message: &str) -> io::Result<()> {
    let resp = JsonRpcResponse {
        jsonrpc: "2.0",
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message: message.to_string(),
        }),
    };
    serde_json::to_writer(&mut *w, &resp)?;
    w.write_all(b"\n")?;
    w.flush()
}
