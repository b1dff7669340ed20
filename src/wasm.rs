use wasm_bindgen::prelude::*;

use crate::parse::XmlParser;

/// Parse and re-serialize a document. `undefined` if it does not parse.
#[wasm_bindgen(js_name = normalizeXml)]
pub fn normalize_xml(xml: &str) -> Option<String> {
    XmlParser::new().parse(xml).ok().map(|root| root.serialize())
}

/// The error message for a document that does not parse, `undefined` for one that does.
#[wasm_bindgen(js_name = xmlParseError)]
pub fn xml_parse_error(xml: &str) -> Option<String> {
    XmlParser::new().parse(xml).err().map(|err| err.to_string())
}
