//! Minimal XML reader for SVG documents.
//!
//! Parses just enough XML for the drawings this crate consumes: nested
//! elements, quoted attributes and self-closing tags. Prologs, comments,
//! doctypes and CDATA sections are skipped, and text content is ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SvgError, SvgResult};

/// One element in the parsed document tree.
#[derive(Debug, Clone, Default)]
pub struct SvgNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<SvgNode>,
}

impl SvgNode {
    /// The element name, e.g. `g` or `path`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute value by name. Absence is a normal outcome.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }
}

/// A parsed SVG document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    root: SvgNode,
}

impl SvgDocument {
    /// Parses SVG text into a document tree.
    ///
    /// The first `<svg>` element at the top level becomes the root; a
    /// document without one is rejected.
    pub fn parse(text: &str) -> SvgResult<Self> {
        let mut reader = Reader::new(text.trim_start_matches('\u{feff}'));
        let top = reader.read_elements(None)?;
        let root = top
            .into_iter()
            .find(|node| node.name == "svg")
            .ok_or(SvgError::MissingSvgRoot)?;
        debug!(
            "Parsed SVG document, root has {} direct children",
            root.children.len()
        );
        Ok(Self { root })
    }

    /// Reads and parses an SVG file.
    pub fn load(path: &Path) -> SvgResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The `<svg>` root element.
    pub fn root(&self) -> &SvgNode {
        &self.root
    }
}

struct Reader<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn malformed(&self, reason: impl Into<String>) -> SvgError {
        SvgError::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Reads sibling elements until end of input (top level) or the
    /// closing tag of `parent`. Text between elements is ignored.
    fn read_elements(&mut self, parent: Option<&str>) -> SvgResult<Vec<SvgNode>> {
        let mut nodes = Vec::new();
        loop {
            match self.rest().find('<') {
                Some(offset) => self.pos += offset + 1,
                None => {
                    return match parent {
                        None => Ok(nodes),
                        Some(name) => {
                            Err(self.malformed(format!("unterminated element <{name}>")))
                        }
                    };
                }
            }
            let rest = self.rest();
            if rest.starts_with("!--") {
                let end = rest
                    .find("-->")
                    .ok_or_else(|| self.malformed("unterminated comment"))?;
                self.pos += end + 3;
                continue;
            }
            if rest.starts_with("![CDATA[") {
                let end = rest
                    .find("]]>")
                    .ok_or_else(|| self.malformed("unterminated CDATA section"))?;
                self.pos += end + 3;
                continue;
            }
            if rest.starts_with('?') {
                let end = rest
                    .find("?>")
                    .ok_or_else(|| self.malformed("unterminated processing instruction"))?;
                self.pos += end + 2;
                continue;
            }
            if rest.starts_with('!') {
                let end = rest
                    .find('>')
                    .ok_or_else(|| self.malformed("unterminated declaration"))?;
                self.pos += end + 1;
                continue;
            }
            if rest.starts_with('/') {
                self.pos += 1;
                let name = self.read_name()?;
                self.skip_whitespace();
                if !self.rest().starts_with('>') {
                    return Err(self.malformed(format!("malformed closing tag </{name}>")));
                }
                self.pos += 1;
                return match parent {
                    Some(open) if open == name => Ok(nodes),
                    Some(open) => Err(self.malformed(format!(
                        "mismatched closing tag </{name}> inside <{open}>"
                    ))),
                    None => Err(self.malformed(format!("unexpected closing tag </{name}>"))),
                };
            }
            nodes.push(self.read_element()?);
        }
    }

    /// Reads one element starting just after its `<`.
    fn read_element(&mut self) -> SvgResult<SvgNode> {
        let name = self.read_name()?;
        let mut node = SvgNode {
            name,
            ..Default::default()
        };
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.starts_with("/>") {
                self.pos += 2;
                return Ok(node);
            }
            if rest.starts_with('>') {
                self.pos += 1;
                node.children = self.read_elements(Some(&node.name))?;
                return Ok(node);
            }
            if rest.is_empty() {
                return Err(self.malformed(format!("unterminated element <{}>", node.name)));
            }
            let attribute = self.read_attribute(&node.name)?;
            node.attributes.push(attribute);
        }
    }

    fn read_attribute(&mut self, element: &str) -> SvgResult<(String, String)> {
        let key = self.read_name()?;
        self.skip_whitespace();
        if !self.rest().starts_with('=') {
            return Err(self.malformed(format!(
                "attribute '{key}' in <{element}> has no value"
            )));
        }
        self.pos += 1;
        self.skip_whitespace();
        let quote = match self.rest().chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => {
                return Err(self.malformed(format!(
                    "attribute '{key}' in <{element}> has an unquoted value"
                )));
            }
        };
        self.pos += 1;
        let rest = self.rest();
        let end = rest.find(quote).ok_or_else(|| {
            self.malformed(format!(
                "attribute '{key}' in <{element}> has an unterminated value"
            ))
        })?;
        let value = decode_entities(&rest[..end]);
        self.pos += end + 1;
        Ok((key, value))
    }

    fn read_name(&mut self) -> SvgResult<String> {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-' | '.')))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.malformed("expected a name"));
        }
        self.pos += len;
        Ok(rest[..len].to_string())
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        self.pos += len;
    }
}

/// Decodes the five predefined XML entities; anything else passes
/// through unchanged.
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let known = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&apos;", '\''),
        ];
        match known
            .iter()
            .find_map(|(entity, ch)| rest.strip_prefix(entity).map(|after| (*ch, after)))
        {
            Some((ch, after)) => {
                out.push(ch);
                rest = after;
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
