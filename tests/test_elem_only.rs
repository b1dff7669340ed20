use lemur_xml::error::XmlError::*;
use lemur_xml::node::XmlNode;
use lemur_xml::parse::XmlParser;

fn elem(name: &str, children: Vec<XmlNode>) -> XmlNode {
    let mut node = XmlNode::named(name);
    for child in children {
        node.add_child(child);
    }
    node
}

#[test]
pub fn test_root_only() {
    let xml = "<root></root>";
    let root_elem = elem("root", vec![]);
    assert_eq!(root_elem, XmlParser::new().parse(xml).unwrap());
}

#[test]
pub fn test_child_list() {
    let xml = "<root><a></a><b></b><c></c><d></d></root>";
    let root_elem = elem(
        "root",
        vec![elem("a", vec![]), elem("b", vec![]), elem("c", vec![]), elem("d", vec![])],
    );
    let root = XmlParser::new().parse(xml).unwrap();
    assert_eq!(root_elem, root);
    assert_eq!(4, root.num_children());
    let names: Vec<_> = root.children().iter().map(|n| n.name().unwrap()).collect();
    assert_eq!(vec!["a", "b", "c", "d"], names);
}

#[test]
pub fn test_nested_structure() {
    let xml = "<root><a><b></b><c><d></d></c></a><e></e></root>";
    let root_elem = elem(
        "root",
        vec![
            elem("a", vec![elem("b", vec![]), elem("c", vec![elem("d", vec![])])]),
            elem("e", vec![]),
        ],
    );
    assert_eq!(root_elem, XmlParser::new().parse(xml).unwrap());
}

#[test]
pub fn test_empty_element_tag() {
    let xml = "<root><a/><b><c/></b></root>";
    let root_elem = elem(
        "root",
        vec![elem("a", vec![]), elem("b", vec![elem("c", vec![])])],
    );
    assert_eq!(root_elem, XmlParser::new().parse(xml).unwrap());
}

#[test]
pub fn test_random_spaces() {
    let xml = "<root     \t\r\t \n   ><a    \t\r\t   /><b  \t  \n><c   \t\r\t /></b \n\n ></root  \n\n     \t\r\t  >";
    let root_elem = elem(
        "root",
        vec![elem("a", vec![]), elem("b", vec![elem("c", vec![])])],
    );
    assert_eq!(root_elem, XmlParser::new().parse(xml).unwrap());
}

#[test]
pub fn test_spaces_inside_tag_delimiters() {
    // whitespace is skipped before every literal and every name
    let xml = "  < root>< a / >< / root >\n";
    let root_elem = elem("root", vec![elem("a", vec![])]);
    assert_eq!(root_elem, XmlParser::new().parse(xml).unwrap());
}

#[test]
pub fn test_whitespace_only_content_is_dropped() {
    let root = XmlParser::new().parse("<root>\n   \t</root>").unwrap();
    assert!(!root.has_children());
    assert_eq!(None, root.text());
    assert!(!root.is_text_node());
}

#[test]
pub fn test_alphanumeric_names() {
    let xml = "<h1><row2col3/><Ünïcödé/></h1>";
    let root = XmlParser::new().parse(xml).unwrap();
    assert_eq!(Some("h1"), root.name());
    let names: Vec<_> = root.children().iter().map(|n| n.name().unwrap()).collect();
    assert_eq!(vec!["row2col3", "Ünïcödé"], names);
}

#[test]
pub fn test_invalid_names() {
    for xml in ["<1abc></1abc>", "<_abc></_abc>", "<:abc/>", "<></>"] {
        let actual_err = XmlParser::new().parse(xml).unwrap_err();
        assert!(matches!(actual_err, InvalidIdentifier { pos: 1 }), "{}: {:?}", xml, actual_err);
    }

    // only the decimal digits 0-9 continue a name
    let actual_err = XmlParser::new().parse("<a²/>").unwrap_err();
    assert_eq!(UnexpectedCharacter { expected: '>', found: Some('²'), pos: 2 }, actual_err);
    let actual_err = XmlParser::new().parse("<x½></x½>").unwrap_err();
    assert!(matches!(actual_err, UnexpectedCharacter { found: Some('½'), .. }));

    // a name ends at the first non-alphanumeric character
    let actual_err = XmlParser::new().parse("<a-b></a-b>").unwrap_err();
    assert_eq!(UnexpectedCharacter { expected: '>', found: Some('-'), pos: 2 }, actual_err);
}

#[test]
pub fn test_non_matching_tags() {
    // Opening tag "a" does not match closing tag "aa"
    let xml = "<root><a></aa></root>";
    let actual_err = XmlParser::new().parse(xml).unwrap_err();
    assert_eq!(
        MismatchedEndTag { expected: "a".to_string(), found: "aa".to_string(), pos: 11 },
        actual_err
    );
}

#[test]
pub fn test_case_sensitive_end_tag() {
    let actual_err = XmlParser::new().parse("<Root></root>").unwrap_err();
    assert!(matches!(actual_err, MismatchedEndTag { .. }));
}

#[test]
pub fn test_text_between_children() {
    // mixed content is outside the supported subset
    let actual_err = XmlParser::new().parse("<root><a/>text<b/></root>").unwrap_err();
    assert_eq!(UnexpectedCharacter { expected: '<', found: Some('t'), pos: 10 }, actual_err);
}
