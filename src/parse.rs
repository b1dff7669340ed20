use crate::chariter::{CharIter, DEFAULT_MAX_DEPTH};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::XmlError;
use crate::error::XmlError::{
    InvalidIdentifier, MismatchedEndTag, TrailingContent, UnexpectedCharacter,
    UnterminatedAttributeValue, UnterminatedText,
};
use crate::node::XmlNode;
use crate::xmlchar::XmlChar;

const START_NODE: char = '<';
const END_NODE: char = '>';
const SLASH: char = '/';
const EQUAL_SIGN: char = '=';
const QUOTE_MARK: char = '"';

/// Recursive descent parser for a small XML subset: elements, attributes
/// with double-quoted values, and plain inner text. No entities, comments,
/// CDATA sections or processing instructions.
///
/// The parser itself holds no state between calls besides the sink; each
/// call to [parse](XmlParser::parse) walks the input with a fresh
/// [CharIter].
pub struct XmlParser<S = TracingSink> {
    sink: S,
    max_depth: u32,
}

impl Default for XmlParser<TracingSink> {
    fn default() -> Self {
        XmlParser::with_sink(TracingSink)
    }
}

impl XmlParser<TracingSink> {
    pub fn new() -> Self {
        XmlParser::default()
    }
}

impl<S: DiagnosticSink> XmlParser<S> {
    pub fn with_sink(sink: S) -> Self {
        XmlParser { sink, max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Set the maximum element nesting depth; the root element is depth 1.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Parse a document consisting of exactly one element, optionally
    /// surrounded by whitespace.
    pub fn parse(&self, xml: &str) -> Result<XmlNode, XmlError> {
        let mut cs = CharIter::with_max_depth(xml, self.max_depth);
        let result = self.parse_document(&mut cs);
        if let Err(err) = &result {
            let at = cs.error_pos_of(err.pos());
            self.sink.log(&format!("{} (line {}, column {})", err, at.row, at.col));
        }
        result
    }

    fn parse_document(&self, cs: &mut CharIter) -> Result<XmlNode, XmlError> {
        let root = self.read_node(cs)?;
        cs.skip_spaces();
        if cs.has_next() {
            return Err(TrailingContent { pos: cs.pos() });
        }
        Ok(root)
    }

    /// element ::= EmptyElemTag | STag (element* | text) ETag
    fn read_node(&self, cs: &mut CharIter) -> Result<XmlNode, XmlError> {
        cs.skip_spaces();
        cs.increment_depth()?;
        let mut node = XmlNode::new();
        let tag = self.read_start_tag(cs, &mut node)?;
        tracing::trace!(name = tag.name, pos = cs.pos(), "read start tag");
        if tag.closed {
            cs.decrement_depth();
            return Ok(node);
        }

        // if the content turns out to be text, any leading whitespace is part of it
        let save_pos = cs.pos();
        if cs.peek_non_white() == Some(START_NODE) {
            while !self.upcoming_end_tag(cs) {
                let child = self.read_node(cs)?;
                node.add_child(child);
                if cs.peek_non_white() != Some(START_NODE) {
                    break;
                }
            }
        } else {
            cs.reset(save_pos);
            let text = cs
                .consume_until(START_NODE)
                .ok_or(UnterminatedText { pos: save_pos })?;
            node.set_text(text);
        }

        self.read_end_tag(cs, tag.name)?;
        cs.decrement_depth();
        Ok(node)
    }

    /// STag ::= '<' Name (S Attribute)* S? '>'
    /// EmptyElemTag ::= '<' Name (S Attribute)* S? '/' S? '>'
    fn read_start_tag<'a>(
        &self,
        cs: &mut CharIter<'a>,
        node: &mut XmlNode,
    ) -> Result<StartTag<'a>, XmlError> {
        cs.match_char(START_NODE)?;
        let name = self.read_identifier(cs)?;
        node.set_name(name);

        while matches!(cs.peek_non_white(), Some(c) if c.is_identifier_start()) {
            self.read_attribute(cs, node)?;
        }

        let pos = cs.pos();
        match cs.next_char() {
            Some(SLASH) => {
                cs.match_char(END_NODE)?;
                Ok(StartTag { name, closed: true })
            }
            Some(END_NODE) => Ok(StartTag { name, closed: false }),
            found => Err(UnexpectedCharacter { expected: END_NODE, found, pos }),
        }
    }

    /// ETag ::= '<' S? '/' Name S? '>'
    fn read_end_tag(&self, cs: &mut CharIter, start_name: &str) -> Result<(), XmlError> {
        cs.match_char(START_NODE)?;
        cs.match_char(SLASH)?;
        cs.skip_spaces();
        let pos = cs.pos();
        let name = self.read_identifier(cs)?;
        if name != start_name {
            return Err(MismatchedEndTag {
                expected: start_name.to_string(),
                found: name.to_string(),
                pos,
            });
        }
        cs.match_char(END_NODE)
    }

    /// Attribute ::= Name S? '=' S? '"' [^"]* '"'
    fn read_attribute(&self, cs: &mut CharIter, node: &mut XmlNode) -> Result<(), XmlError> {
        let name = self.read_identifier(cs)?;
        cs.match_char(EQUAL_SIGN)?;
        cs.match_char(QUOTE_MARK)?;
        let value_pos = cs.pos();
        let value = cs
            .consume_until(QUOTE_MARK)
            .ok_or(UnterminatedAttributeValue { pos: value_pos })?;
        cs.match_char(QUOTE_MARK)?;
        node.set_attribute(name, value);
        Ok(())
    }

    /// Name ::= Letter (Letter | Digit)*
    ///
    /// The character ending the name is left for the caller. Running out of
    /// input inside a name is an error, since no tag can end there.
    fn read_identifier<'a>(&self, cs: &mut CharIter<'a>) -> Result<&'a str, XmlError> {
        cs.skip_spaces();
        let start = cs.pos();
        match cs.next_char() {
            Some(c) if c.is_identifier_start() => {}
            _ => return Err(InvalidIdentifier { pos: start }),
        }
        loop {
            match cs.peek() {
                Some(c) if c.is_identifier_char() => {
                    cs.next_char();
                }
                Some(_) => return Ok(cs.slice(start, cs.pos())),
                None => return Err(InvalidIdentifier { pos: start }),
            }
        }
    }

    /// Test whether the cursor, sitting on a '<', starts an end tag.
    /// The cursor is restored either way.
    fn upcoming_end_tag(&self, cs: &mut CharIter) -> bool {
        let save_pos = cs.pos();
        cs.next_char();
        let next = cs.peek_non_white();
        cs.reset(save_pos);
        next == Some(SLASH)
    }
}

struct StartTag<'a> {
    name: &'a str,
    closed: bool,
}

/// Parse with the default [TracingSink].
pub fn parse(xml: &str) -> Result<XmlNode, XmlError> {
    XmlParser::new().parse(xml)
}
