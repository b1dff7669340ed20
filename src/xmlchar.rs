pub trait XmlChar {
    fn is_xml_whitespace(&self) -> bool;

    fn is_identifier_start(&self) -> bool;

    fn is_identifier_char(&self) -> bool;
}

impl XmlChar for char {
    /// Any Unicode whitespace, so `\u{A0}` and friends separate tokens too.
    fn is_xml_whitespace(&self) -> bool {
        self.is_whitespace()
    }

    /// Identifiers must start with a letter. No `_` or `:`.
    fn is_identifier_start(&self) -> bool {
        self.is_alphabetic()
    }

    /// Letters and the decimal digits `0-9`. Other numerics such as `²` or
    /// `½` end a name.
    fn is_identifier_char(&self) -> bool {
        self.is_alphabetic() || self.is_ascii_digit()
    }
}
