use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::{Map, Value};

use crate::core::DigestError;

/// An element under construction.
struct Node {
    name: String,
    text: String,
    children: Map<String, Value>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Map::new(),
        }
    }

    /// Leaf elements become strings, everything else an object. Mixed text is dropped.
    fn finish(self) -> (String, Value) {
        let value = if self.children.is_empty() {
            Value::String(self.text)
        } else {
            Value::Object(self.children)
        };
        (self.name, value)
    }
}

/// Decode a reply document into a generic value tree.
///
/// Namespace prefixes and attributes are dropped. An element that occurs once
/// under its parent stays a bare value; repeated siblings are collected into an
/// array. The result is an object holding the root element, e.g.
/// `{"QueryInvoiceDigestResponse": {...}}`.
pub fn decode_reply(xml: &str) -> Result<Value, DigestError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(Node::new(local_name(e.local_name().as_ref())));
            }
            Ok(Event::Empty(ref e)) => {
                let name = local_name(e.local_name().as_ref());
                attach(&mut stack, &mut root, name, Value::String(String::new()))?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| DigestError::Xml(format!("reply text error: {e}")))?;
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| DigestError::Xml("unbalanced closing tag".into()))?;
                let (name, value) = node.finish();
                attach(&mut stack, &mut root, name, value)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DigestError::Xml(format!(
                    "reply parse error at {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DigestError::Xml(format!("unclosed element <{}>", open.name)));
    }
    let (name, value) =
        root.ok_or_else(|| DigestError::Xml("reply has no root element".into()))?;
    let mut doc = Map::new();
    doc.insert(name, value);
    Ok(Value::Object(doc))
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn attach(
    stack: &mut [Node],
    root: &mut Option<(String, Value)>,
    name: String,
    value: Value,
) -> Result<(), DigestError> {
    match stack.last_mut() {
        Some(parent) => {
            insert_child(&mut parent.children, name, value);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some((name, value));
            Ok(())
        }
        None => Err(DigestError::Xml(format!(
            "unexpected second root element <{name}>"
        ))),
    }
}

fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

/// Turn protocol-level faults into errors.
///
/// Recognizes `GeneralErrorResponse` / `GeneralExceptionResponse` roots and
/// any response whose `result.funcCode` is `ERROR`.
pub fn check_fault(reply: &Value) -> Result<(), DigestError> {
    let Some(root) = reply.as_object() else {
        return Ok(());
    };
    for (name, body) in root {
        let is_error_root = name == "GeneralErrorResponse" || name == "GeneralExceptionResponse";
        let func_code = first_str(body, &["/result/funcCode", "/funcCode"]);
        if is_error_root || func_code == Some("ERROR") {
            return Err(DigestError::Remote {
                code: first_str(body, &["/result/errorCode", "/errorCode"])
                    .unwrap_or("UNKNOWN")
                    .to_string(),
                message: first_str(body, &["/result/message", "/message"])
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }
    Ok(())
}

fn first_str<'a>(value: &'a Value, pointers: &[&str]) -> Option<&'a str> {
    pointers
        .iter()
        .find_map(|p| value.pointer(p).and_then(Value::as_str))
}
