//! Minimal element tree built from quick-xml events
//!
//! Only elements and attributes are kept. Text, comments and processing
//! instructions carry nothing the ribbon report needs.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

/// Default buffer capacity for XML parsing (4KB)
const XML_BUFFER_CAPACITY: usize = 4096;

/// Deepest element nesting accepted; real ribbons stay well under 20
pub(crate) const MAX_DEPTH: usize = 512;

/// An XML element with its attributes and child elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the named attribute, or an empty string when absent
    pub fn attribute_or_empty(&self, name: &str) -> String {
        self.attribute(name).unwrap_or_default().to_string()
    }

    /// Direct children with the given element name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Parse an XML string into its root element
///
/// Fails on anything that is not well-formed: syntax errors, mismatched end
/// tags, elements left open at end of input, a missing root element, more
/// than one root element, character data outside the root element, or
/// references to undeclared entities.
pub(crate) fn parse_tree(xml: &str) -> Result<XmlElement> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::with_capacity(XML_BUFFER_CAPACITY);
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event_result = reader.read_event_into(&mut buf);
        let is_empty_element = matches!(&event_result, Ok(Event::Empty(_)));

        match event_result {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let element = read_element(e)?;
                if is_empty_element {
                    attach(&mut open, &mut root, element)?;
                } else if open.len() >= MAX_DEPTH {
                    return Err(Error::invalid_xml_element(
                        &element.name,
                        &format!("nesting exceeds {} levels", MAX_DEPTH),
                    ));
                } else {
                    open.push(element);
                }
            }
            Ok(Event::End(_)) => {
                let element = open
                    .pop()
                    .ok_or_else(|| Error::InvalidXml("Unexpected closing tag".to_string()))?;
                attach(&mut open, &mut root, element)?;
            }
            Ok(Event::Text(ref e)) => {
                let text =
                    std::str::from_utf8(e).map_err(|err| Error::InvalidXml(err.to_string()))?;
                if !text.trim_ascii().is_empty() {
                    ensure_inside_root(&open, "text")?;
                    unescape(text)?;
                }
            }
            Ok(Event::CData(_)) => ensure_inside_root(&open, "CDATA section")?,
            Ok(Event::GeneralRef(ref e)) => {
                let name =
                    std::str::from_utf8(e).map_err(|err| Error::InvalidXml(err.to_string()))?;
                ensure_inside_root(&open, "entity reference")?;
                unescape(&format!("&{};", name))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::invalid_xml_element(
            &unclosed.name,
            "element is not closed before end of input",
        ));
    }

    root.ok_or_else(|| Error::InvalidXml("Document has no root element".to_string()))
}

/// Read the name and attributes of a start or empty tag
fn read_element(e: &BytesStart) -> Result<XmlElement> {
    let name = e.name();
    let name_str =
        std::str::from_utf8(name.as_ref()).map_err(|e| Error::InvalidXml(e.to_string()))?;

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| Error::invalid_xml_element(name_str, &err.to_string()))?;
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|err| Error::invalid_xml_element(name_str, &err.to_string()))?;
        attributes.push((key.to_string(), unescape(raw)?.into_owned()));
    }

    Ok(XmlElement {
        name: name_str.to_string(),
        attributes,
        children: Vec::new(),
    })
}

/// Character data is only allowed between the root's start and end tags
fn ensure_inside_root(open: &[XmlElement], what: &str) -> Result<()> {
    if open.is_empty() {
        return Err(Error::InvalidXml(format!(
            "{} outside the root element",
            what
        )));
    }
    Ok(())
}

/// Append a finished element to its parent, or make it the root
fn attach(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::invalid_xml_element(
            &element.name,
            "document has more than one root element",
        ));
    }
    *root = Some(element);
    Ok(())
}
