use crate::node::XmlNode;

/// Non-empty text wins over children; a node with neither is written as an
/// empty element tag.
pub(crate) fn write_node(node: &XmlNode, out: &mut String) {
    let name = node.name().unwrap_or_default();
    write_start_tag(node, name, out);

    match node.text() {
        Some(text) if !text.is_empty() => {
            out.push('>');
            out.push_str(text);
        }
        _ if node.has_children() => {
            out.push('>');
            for child in node.children() {
                write_node(child, out);
            }
        }
        _ => {
            out.push_str("/>");
            return;
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Everything up to, but not including, the closing `>` or `/>`.
fn write_start_tag(node: &XmlNode, name: &str, out: &mut String) {
    out.push('<');
    out.push_str(name);
    for (key, value) in node.attributes() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
