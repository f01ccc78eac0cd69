//! mdast to JSON conversion.
//!
//! Produces the unist-shaped JSON that JavaScript mdast tooling expects:
//! a `type` field, node-specific fields, and `children` arrays. Source
//! positions are dropped so the output stays stable across whitespace-only
//! edits and stays small on the wire.

use markdown::mdast::{AlignKind, AttributeContent, AttributeValue, Node, ReferenceKind};
use serde_json::{Value as JsonValue, json};

/// Converts an mdast tree to unist-shaped JSON.
pub fn tree_to_json(node: &Node) -> JsonValue {
    match node {
        Node::Root(root) => json!({
            "type": "root",
            "children": children_json(&root.children),
        }),
        Node::Blockquote(quote) => json!({
            "type": "blockquote",
            "children": children_json(&quote.children),
        }),
        Node::FootnoteDefinition(def) => json!({
            "type": "footnoteDefinition",
            "identifier": def.identifier,
            "label": def.label,
            "children": children_json(&def.children),
        }),
        Node::MdxJsxFlowElement(elem) => json!({
            "type": "mdxJsxFlowElement",
            "name": elem.name,
            "attributes": attributes_json(&elem.attributes),
            "children": children_json(&elem.children),
        }),
        Node::List(list) => json!({
            "type": "list",
            "ordered": list.ordered,
            "start": list.start,
            "spread": list.spread,
            "children": children_json(&list.children),
        }),
        Node::MdxjsEsm(esm) => json!({
            "type": "mdxjsEsm",
            "value": esm.value,
        }),
        Node::Toml(toml) => json!({
            "type": "toml",
            "value": toml.value,
        }),
        Node::Yaml(yaml) => json!({
            "type": "yaml",
            "value": yaml.value,
        }),
        Node::Break(_) => json!({"type": "break"}),
        Node::InlineCode(code) => json!({
            "type": "inlineCode",
            "value": code.value,
        }),
        Node::InlineMath(math) => json!({
            "type": "inlineMath",
            "value": math.value,
        }),
        Node::Delete(del) => json!({
            "type": "delete",
            "children": children_json(&del.children),
        }),
        Node::Emphasis(em) => json!({
            "type": "emphasis",
            "children": children_json(&em.children),
        }),
        Node::MdxTextExpression(expr) => json!({
            "type": "mdxTextExpression",
            "value": expr.value,
        }),
        Node::FootnoteReference(footnote) => json!({
            "type": "footnoteReference",
            "identifier": footnote.identifier,
            "label": footnote.label,
        }),
        Node::Html(html) => json!({
            "type": "html",
            "value": html.value,
        }),
        Node::Image(image) => json!({
            "type": "image",
            "alt": image.alt,
            "url": image.url,
            "title": image.title,
        }),
        Node::ImageReference(image) => json!({
            "type": "imageReference",
            "alt": image.alt,
            "identifier": image.identifier,
            "label": image.label,
            "referenceType": reference_json(&image.reference_kind),
        }),
        Node::MdxJsxTextElement(elem) => json!({
            "type": "mdxJsxTextElement",
            "name": elem.name,
            "attributes": attributes_json(&elem.attributes),
            "children": children_json(&elem.children),
        }),
        Node::Link(link) => json!({
            "type": "link",
            "url": link.url,
            "title": link.title,
            "children": children_json(&link.children),
        }),
        Node::LinkReference(link) => json!({
            "type": "linkReference",
            "identifier": link.identifier,
            "label": link.label,
            "referenceType": reference_json(&link.reference_kind),
            "children": children_json(&link.children),
        }),
        Node::Strong(strong) => json!({
            "type": "strong",
            "children": children_json(&strong.children),
        }),
        Node::Text(text) => json!({
            "type": "text",
            "value": text.value,
        }),
        Node::Code(code) => json!({
            "type": "code",
            "lang": code.lang,
            "meta": code.meta,
            "value": code.value,
        }),
        Node::Math(math) => json!({
            "type": "math",
            "meta": math.meta,
            "value": math.value,
        }),
        Node::MdxFlowExpression(expr) => json!({
            "type": "mdxFlowExpression",
            "value": expr.value,
        }),
        Node::Heading(heading) => json!({
            "type": "heading",
            "depth": heading.depth,
            "children": children_json(&heading.children),
        }),
        Node::Table(table) => json!({
            "type": "table",
            "align": table.align.iter().map(align_json).collect::<Vec<_>>(),
            "children": children_json(&table.children),
        }),
        Node::ThematicBreak(_) => json!({"type": "thematicBreak"}),
        Node::TableRow(row) => json!({
            "type": "tableRow",
            "children": children_json(&row.children),
        }),
        Node::TableCell(cell) => json!({
            "type": "tableCell",
            "children": children_json(&cell.children),
        }),
        Node::ListItem(item) => json!({
            "type": "listItem",
            "checked": item.checked,
            "spread": item.spread,
            "children": children_json(&item.children),
        }),
        Node::Definition(def) => json!({
            "type": "definition",
            "identifier": def.identifier,
            "label": def.label,
            "url": def.url,
            "title": def.title,
        }),
        Node::Paragraph(para) => json!({
            "type": "paragraph",
            "children": children_json(&para.children),
        }),
    }
}

fn children_json(children: &[Node]) -> JsonValue {
    JsonValue::Array(children.iter().map(tree_to_json).collect())
}

fn attributes_json(attributes: &[AttributeContent]) -> JsonValue {
    JsonValue::Array(attributes.iter().map(attribute_json).collect())
}

fn attribute_json(attribute: &AttributeContent) -> JsonValue {
    match attribute {
        AttributeContent::Property(prop) => json!({
            "type": "mdxJsxAttribute",
            "name": prop.name,
            "value": match &prop.value {
                Some(AttributeValue::Literal(literal)) => json!(literal),
                Some(AttributeValue::Expression(expr)) => json!({
                    "type": "mdxJsxAttributeValueExpression",
                    "value": expr.value,
                }),
                None => JsonValue::Null,
            },
        }),
        AttributeContent::Expression(expr) => json!({
            "type": "mdxJsxExpressionAttribute",
            "value": expr.value,
        }),
    }
}

fn align_json(kind: &AlignKind) -> JsonValue {
    match kind {
        AlignKind::Left => json!("left"),
        AlignKind::Right => json!("right"),
        AlignKind::Center => json!("center"),
        AlignKind::None => JsonValue::Null,
    }
}

fn reference_json(kind: &ReferenceKind) -> JsonValue {
    match kind {
        ReferenceKind::Shortcut => json!("shortcut"),
        ReferenceKind::Collapsed => json!("collapsed"),
        ReferenceKind::Full => json!("full"),
    }
}
