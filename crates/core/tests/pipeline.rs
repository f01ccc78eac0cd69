use cjkmd_core::{ParseOptions, Pipeline, tree_to_json};

#[test]
fn transforms_a_chapter_document() {
    let source = "---\ntitle: 第一章 初识插件\nsidebar_position: 1\n---\n\n# “插件”与‘事件’ {#plugin-and-event}\n\n她说：“用‘监听器’就够了。”\n";
    let doc = Pipeline::docs(ParseOptions::markdown())
        .run(source)
        .expect("pipeline should succeed");

    // Check frontmatter is split off before parsing
    assert_eq!(doc.frontmatter["title"], "第一章 初识插件");
    assert_eq!(doc.frontmatter["sidebar_position"], 1);

    // Check quotes in body text are rewritten
    let tree = tree_to_json(&doc.tree);
    let paragraph = &tree["children"][1];
    assert_eq!(paragraph["type"], "paragraph");
    assert_eq!(paragraph["children"][0]["value"], "她说：『用「监听器」就够了。』");

    // Check anchors come from the normalized text and the custom id
    insta::assert_debug_snapshot!(doc.headings, @r#"
    [
        HeadingEntry {
            depth: 1,
            text: "『插件』与「事件」",
            slug: "plugin-and-event",
        },
    ]
    "#);
}

#[test]
fn parses_mdx_chapters_with_jsx_components() {
    let source = "import Tabs from '@theme/Tabs';\n\n# 安装\n\n<Tabs>\n  <TabItem value=\"maven\">“构建”</TabItem>\n</Tabs>\n";
    let doc = Pipeline::docs(ParseOptions::mdx())
        .run(source)
        .expect("pipeline should succeed");

    let tree = serde_json::to_string(&tree_to_json(&doc.tree)).unwrap();

    // Check the import and the component survive as mdast nodes
    assert!(tree.contains("mdxjsEsm"), "tree: {}", tree);
    assert!(tree.contains("mdxJsxFlowElement"), "tree: {}", tree);

    // Check quote normalization reaches text nested inside JSX
    assert!(tree.contains("『构建』"), "tree: {}", tree);

    assert_eq!(doc.headings.len(), 1);
    assert_eq!(doc.headings[0].slug, "安装");
}

#[test]
fn leaves_code_and_straight_quotes_alone() {
    let source =
        "代码 `var s = \"x\"` 与 \"直引号\"。\n\n```java\nString s = \"“有意的”\";\n```\n";
    let doc = Pipeline::docs(ParseOptions::markdown())
        .run(source)
        .expect("pipeline should succeed");

    let tree = tree_to_json(&doc.tree);

    // Check inline code keeps its straight quotes
    let inline = &tree["children"][0]["children"][1];
    assert_eq!(inline["type"], "inlineCode");
    assert_eq!(inline["value"], "var s = \"x\"");

    // Check straight quotes in prose are not typographic quotes
    assert_eq!(tree["children"][0]["children"][2]["value"], " 与 \"直引号\"。");

    // Check fenced code keeps even curly quotes
    assert_eq!(tree["children"][1]["type"], "code");
    assert_eq!(tree["children"][1]["value"], "String s = \"“有意的”\";");
}

#[test]
fn collects_heading_anchors_in_document_order() {
    let source = "# 概述\n\n## 安装\n\n### Windows 安装\n\n## 安装 {#install-alt}\n\n## 安装\n";
    let doc = Pipeline::docs(ParseOptions::markdown())
        .run(source)
        .expect("pipeline should succeed");

    insta::assert_debug_snapshot!(doc.headings, @r#"
    [
        HeadingEntry {
            depth: 1,
            text: "概述",
            slug: "概述",
        },
        HeadingEntry {
            depth: 2,
            text: "安装",
            slug: "安装",
        },
        HeadingEntry {
            depth: 3,
            text: "Windows 安装",
            slug: "windows-安装",
        },
        HeadingEntry {
            depth: 2,
            text: "安装",
            slug: "install-alt",
        },
        HeadingEntry {
            depth: 2,
            text: "安装",
            slug: "安装-1",
        },
    ]
    "#);
}

#[test]
fn documents_without_text_remain_untouched() {
    let doc = Pipeline::docs(ParseOptions::markdown())
        .run("***\n")
        .expect("pipeline should succeed");

    let tree = tree_to_json(&doc.tree);
    assert_eq!(tree["children"][0]["type"], "thematicBreak");
    insta::assert_debug_snapshot!(doc.headings, @"[]");
}
