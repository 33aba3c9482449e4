use crate::error::ParseError;
use crate::parser::types::*;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

/// Parses XML text into an attributed tree.
///
/// Text directly inside an element is trimmed and has its inner whitespace
/// runs collapsed to one space; whitespace-only text is dropped. When an
/// element holds several text runs (split by child elements) they are
/// concatenated. CDATA is kept verbatim. Comments, processing instructions,
/// declarations and doctypes are skipped.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, an element is left open,
/// an entity is unknown, or an element repeats an attribute.
pub fn parse_document(xml: &str) -> Result<Document, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut builder = TreeBuilder::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                builder.flush_text();
                builder.open(parse_element(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                builder.flush_text();
                builder.attach(parse_element(e)?);
            }
            Ok(Event::End(_)) => builder.close(),
            Ok(Event::Text(ref t)) => {
                builder.push_text(std::str::from_utf8(t)?);
            }
            Ok(Event::GeneralRef(ref r)) => {
                let name = std::str::from_utf8(r)?;
                builder.push_text(&resolve_reference(name)?);
            }
            Ok(Event::CData(ref c)) => {
                builder.push_cdata(std::str::from_utf8(c)?);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let document = builder.finish()?;
    debug!(top_level = document.children.len(), "parsed document");
    Ok(document)
}

/// Reads an element's name and attributes.
fn parse_element(e: &BytesStart<'_>) -> Result<TreeNode, ParseError> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut node = TreeNode::new(name);

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        if node.attribute(key).is_some() {
            return Err(ParseError::DuplicateAttribute {
                element: node.name.clone(),
                attribute: key.to_string(),
            });
        }
        let value = unescape(raw)?;
        node.attributes.push(Attribute::new(key, value.into_owned()));
    }

    Ok(node)
}

/// Resolves the body of an `&...;` reference.
fn resolve_reference(name: &str) -> Result<String, ParseError> {
    let unknown = || ParseError::UnknownEntity {
        name: name.to_string(),
    };

    let resolved = match name {
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "apos" => '\'',
        "quot" => '"',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                None
            };
            code.and_then(char::from_u32).ok_or_else(unknown)?
        }
    };

    Ok(resolved.to_string())
}

struct OpenElement {
    node: TreeNode,
    pending: String,
}

/// Accumulates elements on a stack while events stream in.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<OpenElement>,
    document: Document,
}

impl TreeBuilder {
    fn open(&mut self, node: TreeNode) {
        self.stack.push(OpenElement {
            node,
            pending: String::new(),
        });
    }

    fn close(&mut self) {
        self.flush_text();
        if let Some(open) = self.stack.pop() {
            self.attach(open.node);
        }
    }

    fn attach(&mut self, node: TreeNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.node.children.push(node),
            None => self.document.children.push(node),
        }
    }

    // Text outside the root element is dropped.
    fn push_text(&mut self, text: &str) {
        if let Some(open) = self.stack.last_mut() {
            open.pending.push_str(text);
        }
    }

    fn push_cdata(&mut self, text: &str) {
        self.flush_text();
        if let Some(open) = self.stack.last_mut() {
            open.node.text.push_str(text);
        }
    }

    fn flush_text(&mut self) {
        if let Some(open) = self.stack.last_mut() {
            let pending = std::mem::take(&mut open.pending);
            let normalized = pending.split_whitespace().collect::<Vec<_>>().join(" ");
            open.node.text.push_str(&normalized);
        }
    }

    fn finish(self) -> Result<Document, ParseError> {
        match self.stack.last() {
            Some(open) => Err(ParseError::UnclosedElement {
                name: open.node.name.clone(),
            }),
            None => Ok(self.document),
        }
    }
}
