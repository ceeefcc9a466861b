//! Definition-document loading and serialization
//!
//! Documents are held as a generic element tree. The naming layers read and
//! mutate attributes through `Node` without knowing about markup details;
//! this module owns the only quick-xml usage in the crate.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::infrastructure::error::{InfraError, InfraResult};

/// One document element: tag name, ordered attributes, ordered children and
/// the 1-based source line of its opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub line: u64,
}

impl Node {
    pub fn new(name: impl Into<String>, line: u64) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            line,
        }
    }

    /// Attribute lookup by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an existing attribute value or append a new attribute.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Child elements with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |c| c.name == tag)
    }

    /// Mutable variant of [`Node::children_named`].
    pub fn children_named_mut<'a>(
        &'a mut self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a mut Node> {
        self.children.iter_mut().filter(move |c| c.name == tag)
    }
}

/// A loaded definition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
}

/// Read and parse a document from a file.
pub fn load_document(path: &Path) -> InfraResult<Document> {
    debug!("load_document: {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;
    parse_document(&text)
}

/// Parse a document from text into the element tree.
pub fn parse_document(text: &str) -> InfraResult<Document> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let line = line_at(text, reader.buffer_position() as usize);
                stack.push(node_from_tag(&e, line)?);
            }
            Ok(Event::Empty(e)) => {
                let line = line_at(text, reader.buffer_position() as usize);
                let node = node_from_tag(&e, line)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| InfraError::markup("closing tag without opening tag"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(InfraError::markup(format!(
                    "{} (line {})",
                    e,
                    line_at(text, reader.buffer_position() as usize)
                )))
            }
        }
    }

    root.ok_or_else(|| InfraError::markup("document has no root element"))
        .map(|root| Document { root })
}

/// Serialize the tree with an XML declaration and 2-space indentation.
pub fn serialize_document(document: &Document) -> InfraResult<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(serialize_err)?;
    write_node(&mut writer, &document.root)?;
    Ok(writer.into_inner())
}

/// Serialize and write in one step. The document is rendered to memory
/// first, so an output file is either written completely or not at all.
pub fn write_document(document: &Document, path: &Path) -> InfraResult<()> {
    debug!("write_document: {}", path.display());
    let bytes = serialize_document(document)?;
    fs::write(path, bytes).map_err(|e| InfraError::io(format!("write {}", path.display()), e))
}

fn node_from_tag(tag: &BytesStart<'_>, line: u64) -> InfraResult<Node> {
    let mut node = Node::new(String::from_utf8_lossy(tag.name().as_ref()).into_owned(), line);
    for attribute in tag.attributes() {
        let attribute =
            attribute.map_err(|e| InfraError::markup(format!("bad attribute: {e}")))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| InfraError::markup(format!("bad attribute value: {e}")))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> InfraResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(InfraError::markup("multiple root elements"));
    }
    *root = Some(node);
    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> InfraResult<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if node.children.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(serialize_err)?;
    } else {
        writer.write_event(Event::Start(start)).map_err(serialize_err)?;
        for child in &node.children {
            write_node(writer, child)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(node.name.as_str())))
            .map_err(serialize_err)?;
    }
    Ok(())
}

fn serialize_err(e: impl std::fmt::Display) -> InfraError {
    InfraError::markup(format!("serialize failed: {e}"))
}

fn line_at(text: &str, offset: usize) -> u64 {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DEFTABLE>
  <SMART_FOLDER JOBNAME="AB12C34D-123-XYZ" DATACENTER="CTM_PROD">
    <JOB JOBNAME="XABCDE12F123GHI456"/>
  </SMART_FOLDER>
</DEFTABLE>
"#;

    #[test]
    fn parses_attributes_and_hierarchy() {
        let doc = parse_document(SAMPLE).unwrap();
        assert_eq!(doc.root.name, "DEFTABLE");
        let folder = doc.root.children_named("SMART_FOLDER").next().unwrap();
        assert_eq!(folder.attribute("JOBNAME"), Some("AB12C34D-123-XYZ"));
        assert_eq!(folder.attribute("MISSING"), None);
        let job = folder.children_named("JOB").next().unwrap();
        assert_eq!(job.attribute("JOBNAME"), Some("XABCDE12F123GHI456"));
    }

    #[test]
    fn records_source_lines() {
        let doc = parse_document(SAMPLE).unwrap();
        let folder = doc.root.children_named("SMART_FOLDER").next().unwrap();
        assert_eq!(folder.line, 3);
        assert_eq!(folder.children_named("JOB").next().unwrap().line, 4);
    }

    #[test]
    fn set_attribute_replaces_or_appends() {
        let mut node = Node::new("JOB", 1);
        node.set_attribute("JOBNAME", "A");
        node.set_attribute("JOBNAME", "B");
        node.set_attribute("NODEID", "N");
        assert_eq!(node.attribute("JOBNAME"), Some("B"));
        assert_eq!(node.attributes.len(), 2);
    }

    #[test]
    fn serialization_round_trips_attribute_values() {
        let mut doc = parse_document(SAMPLE).unwrap();
        doc.root.children_named_mut("SMART_FOLDER").for_each(|f| {
            f.set_attribute("DATACENTER", "A<B&\"C\"");
        });
        let bytes = serialize_document(&doc).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));

        let reparsed = parse_document(&text).unwrap();
        let folder = reparsed.root.children_named("SMART_FOLDER").next().unwrap();
        assert_eq!(folder.attribute("DATACENTER"), Some("A<B&\"C\""));
    }

    #[test]
    fn rejects_mismatched_markup() {
        assert!(parse_document("<A><B></A>").is_err());
        assert!(parse_document("").is_err());
    }
}
