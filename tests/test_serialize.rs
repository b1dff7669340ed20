use insta::assert_snapshot;
use lemur_xml::node::XmlNode;
use lemur_xml::parse::XmlParser;
use lemur_xml::wasm::{normalize_xml, xml_parse_error};

#[test]
pub fn test_round_trip() {
    let root = XmlParser::new().parse("<a x=\"1\"><b/></a>").unwrap();
    assert_eq!(Some("a"), root.name());
    assert_eq!(Some("1"), root.attribute("x"));
    assert_eq!(1, root.num_children());
    let b = root.first_child().unwrap();
    assert_eq!(Some("b"), b.name());
    assert_eq!(None, b.text());
    assert!(!b.has_children());

    assert_snapshot!(root.serialize(), @r#"<a x="1"><b/></a>"#);
}

#[test]
pub fn test_text_node() {
    let root = XmlParser::new().parse("<a>hello</a>").unwrap();
    assert_snapshot!(root.serialize(), @"<a>hello</a>");
}

#[test]
pub fn test_whitespace_is_normalized() {
    let xml = "<root   a = \"1\"  >\n  <item k=\"v\" />\n  <item>text</item>\n</root >";
    let root = XmlParser::new().parse(xml).unwrap();
    assert_snapshot!(root.serialize(), @r#"<root a="1"><item k="v"/><item>text</item></root>"#);

    // the normalized form is a fixed point
    let again = XmlParser::new().parse(&root.serialize()).unwrap();
    assert_eq!(root, again);
    assert_eq!(root.serialize(), again.serialize());
}

#[test]
pub fn test_attribute_order_is_insertion_order() {
    let mut node = XmlNode::named("node");
    node.set_attribute("z", "1");
    node.set_attribute("a", 2);
    node.set_attribute("m", "3");
    node.set_attribute("z", "4");
    assert_snapshot!(node.serialize(), @r#"<node z="4" a="2" m="3"/>"#);
}

#[test]
pub fn test_equality_ignores_attribute_order() {
    let first = XmlParser::new().parse("<a x=\"1\" y=\"2\"/>").unwrap();
    let second = XmlParser::new().parse("<a y=\"2\" x=\"1\"/>").unwrap();
    assert_eq!(first, second);
    assert_ne!(first.serialize(), second.serialize());
}

#[test]
pub fn test_built_tree() {
    let mut root = XmlNode::named("config");
    root.set_attribute("version", 3);
    let mut server = XmlNode::named("server");
    server.add_child(XmlNode::with_text("host", "localhost"));
    server.add_child(XmlNode::with_text("port", "8080"));
    root.add_child(server);
    root.prepend_child(XmlNode::named("comment"));

    assert_snapshot!(
        root.serialize(),
        @r#"<config version="3"><comment/><server><host>localhost</host><port>8080</port></server></config>"#
    );
}

#[test]
pub fn test_text_wins_over_children() {
    let mut node = XmlNode::named("a");
    node.add_child(XmlNode::named("b"));
    node.set_text("text");
    assert_eq!("<a>text</a>", node.serialize());

    // empty text does not count as content
    node.set_text("");
    assert_eq!("<a><b/></a>", node.serialize());
}

#[test]
pub fn test_unnamed_node() {
    assert_eq!("</>", XmlNode::new().serialize());
}

#[test]
pub fn test_bindings() {
    assert_eq!(
        Some("<a x=\"1\"><b/></a>".to_string()),
        normalize_xml("<a   x=\"1\" >  <b />  </a>")
    );
    assert_eq!(None, xml_parse_error("<a/>"));

    assert_eq!(None, normalize_xml("<a><b></a></b>"));
    assert_eq!(
        Some("end tag </a> at byte 8 does not match start tag <b>".to_string()),
        xml_parse_error("<a><b></a></b>")
    );
}
