//! Cue text sanitization.
//!
//! Cue text is displayed as markup, so it's parsed as an `HTML` fragment and
//! rebuilt keeping only a fixed set of styling elements. Everything else is
//! removed with its content.

use log::warn;
use regex::Regex;
use std::sync::LazyLock;

/// Elements kept in cue text, all other elements are removed along with their content.
pub const ALLOWED_TAGS: [&str; 9] = ["i", "b", "u", "ruby", "rt", "c", "v", "lang", "font"];

/// Elements without content.
const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw text, not markup.
const RAW_TEXT_TAGS: [&str; 6] = ["script", "style", "textarea", "title", "xmp", "noscript"];

#[derive(Debug, PartialEq, Eq)]
struct Attribute {
    name: String,
    value: String,
}

#[derive(Debug, PartialEq, Eq)]
struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

#[derive(Debug, PartialEq, Eq)]
enum Node {
    Text(String),
    Element(Element),
}

impl Element {
    fn new(name: String, attributes: Vec<Attribute>) -> Self {
        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    /// Name without a `WebVTT` class suffix (`c.yellow` -> `c`).
    fn base_name(&self) -> &str {
        self.name.split('.').next().unwrap_or_default()
    }
}

/// Remove disallowed markup from a cue text.
///
/// Elements in [`ALLOWED_TAGS`] are kept without their `style` attribute and without
/// inline event handlers (`on*` attributes). Any other element is dropped with its content.
#[profiling::function]
#[must_use]
pub fn sanitize(cue_text: &str) -> String {
    let mut nodes = parse_fragment(cue_text);
    sanitize_children(&mut nodes);

    let mut out = String::with_capacity(cue_text.len());
    nodes.iter().for_each(|node| write_node(&mut out, node));
    out
}

fn sanitize_children(nodes: &mut Vec<Node>) {
    nodes.retain_mut(|node| match node {
        Node::Text(_) => true,
        Node::Element(elem) => {
            if ALLOWED_TAGS.contains(&elem.base_name()) {
                elem.attributes.retain(|attr| {
                    let keep = attr.name != "style" && !attr.name.starts_with("on");
                    if !keep {
                        warn!("Removed '{}' attribute during sanitization.", attr.name);
                    }
                    keep
                });
                sanitize_children(&mut elem.children);
                true
            } else {
                warn!("Removed '{}' during sanitization.", elem.name);
                false
            }
        }
    });
}

/// Parse a markup fragment into a node tree, the way a lenient `HTML` parser would.
fn parse_fragment(input: &str) -> Vec<Node> {
    static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"(?s)<!--.*?(?:-->|$)|<(/?)([A-Za-z][^\s/>]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
            .unwrap()
    });

    // Open elements, the fragment root is not part of it.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Vec<Node> = Vec::new();
    let mut pos = 0;

    while let Some(caps) = TOKEN.captures_at(input, pos) {
        let Some(token) = caps.get(0) else { break };
        push_text(&mut stack, &mut root, &input[pos..token.start()]);
        pos = token.end();

        let Some(name) = caps.get(2) else {
            // comment
            continue;
        };
        let name = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|slash| !slash.is_empty());

        if closing {
            close_element(&mut stack, &mut root, &name);
            continue;
        }

        let raw_attributes = caps.get(3).map_or("", |attrs| attrs.as_str());
        let elem = Element::new(name, parse_attributes(raw_attributes));
        let self_closing = raw_attributes.trim_end().ends_with('/');

        if RAW_TEXT_TAGS.contains(&elem.name.as_str()) {
            let (content, end) = raw_text(input, pos, &elem.name);
            let mut elem = elem;
            if !content.is_empty() {
                elem.children.push(Node::Text(content.into()));
            }
            append(&mut stack, &mut root, Node::Element(elem));
            pos = end;
        } else if self_closing || VOID_TAGS.contains(&elem.base_name()) {
            append(&mut stack, &mut root, Node::Element(elem));
        } else {
            stack.push(elem);
        }
    }
    push_text(&mut stack, &mut root, &input[pos..]);

    while let Some(elem) = stack.pop() {
        append(&mut stack, &mut root, Node::Element(elem));
    }
    root
}

/// Find the end of a raw text element, returning its content and the position after its end tag.
fn raw_text<'a>(input: &'a str, from: usize, name: &str) -> (&'a str, usize) {
    let rest = &input[from..];
    let closing = format!("</{name}");
    let Some(start) = rest.to_ascii_lowercase().find(&closing) else {
        return (rest, input.len());
    };
    let end = match rest[start..].find('>') {
        Some(gt) => from + start + gt + 1,
        None => input.len(),
    };
    (&rest[..start], end)
}

fn parse_attributes(raw: &str) -> Vec<Attribute> {
    static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#).unwrap()
    });

    ATTRIBUTE
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |value| value.as_str());
            Some(Attribute {
                name,
                value: value.into(),
            })
        })
        .collect()
}

fn append(stack: &mut [Element], root: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => root.push(node),
    }
}

fn push_text(stack: &mut [Element], root: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        append(stack, root, Node::Text(text.into()));
    }
}

/// Close the innermost open element named `name`, and every element opened after it.
/// A closing tag without matching open element is ignored.
fn close_element(stack: &mut Vec<Element>, root: &mut Vec<Node>, name: &str) {
    let name = name.split('.').next().unwrap_or_default();
    let Some(open_idx) = stack.iter().rposition(|elem| elem.base_name() == name) else {
        return;
    };
    while stack.len() > open_idx {
        if let Some(elem) = stack.pop() {
            append(stack, root, Node::Element(elem));
        }
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => {
            for c in text.chars() {
                match c {
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    _ => out.push(c),
                }
            }
        }
        Node::Element(elem) => {
            out.push('<');
            out.push_str(&elem.name);
            for attr in &elem.attributes {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&attr.value.replace('&', "&amp;").replace('"', "&quot;"));
                out.push('"');
            }
            out.push('>');
            if !VOID_TAGS.contains(&elem.base_name()) {
                elem.children.iter().for_each(|child| write_node(out, child));
                out.push_str("</");
                out.push_str(&elem.name);
                out.push('>');
            }
        }
    }
}
