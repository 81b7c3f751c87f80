//! Export tests for the HTML format (markdown → HTML)
//!
//! These tests verify the converter pipeline on the subset of markdown the
//! generator emits, and the document template around it.

use insta::assert_snapshot;
use mdipsum_core::format::Format;
use mdipsum_core::formats::html::{markdown_to_html_body, HtmlFormat, HtmlTheme};
use mdipsum_core::to_html;
use once_cell::sync::Lazy;
use regex::Regex;

fn strip_styles(html: &str) -> String {
    static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new("(?is)<style[^>]*?>.*?</style>").expect("valid regex for stripping style blocks")
    });
    STYLE_REGEX
        .replace_all(html, "<style></style>")
        .into_owned()
}

#[test]
fn test_heading_and_paragraph() {
    let html = to_html("# Title\n\nSome text.\n");

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<p>Some text.</p>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_generated_subset_body() {
    let markdown = r#"# Lorem Ipsum Dolor

Lorem __ipsum__ dolor _sit_ amet.

* First list item
* Second list item
* Third list item

```python
def greet(name):
    return f"Hello, {name}!"
```

See [inline link](https://example.com/page1) for more information.
"#;

    assert_snapshot!(markdown_to_html_body(markdown).trim_end(), @r#"
<h1>Lorem Ipsum Dolor</h1>

<p>Lorem <strong>ipsum</strong> dolor <em>sit</em> amet.</p>

<ul>
<li>First list item</li>
<li>Second list item</li>
<li>Third list item</li>
</ul>

<pre><code class="language-python">def greet(name):
    return f"Hello, {name}!"</code></pre>

<p>See <a href="https://example.com/page1">inline link</a> for more information.</p>
"#);
}

#[test]
fn test_setext_document() {
    let markdown = "Lorem Ipsum\n===========\n\nDolor sit amet.\n\nConsectetur Elit\n----------------\n\nSed do eiusmod.\n\n";
    let html = markdown_to_html_body(markdown);

    assert_eq!(
        html,
        "<h1>Lorem Ipsum</h1>\n\n<p>Dolor sit amet.</p>\n\n<h2>Consectetur Elit</h2>\n\n<p>Sed do eiusmod.</p>\n\n"
    );
}

#[test]
fn test_reference_links_are_not_converted() {
    let markdown = "See [reference link][1] for more information.\n\n[1]: https://example.com/ref1\n\n";
    let html = to_html(markdown);

    assert!(html.contains("<p>See [reference link][1] for more information.</p>"));
    assert!(html.contains("<p>[1]: https://example.com/ref1</p>"));
    assert!(!html.contains("<a href"));
}

#[test]
fn test_document_skeleton() {
    let html = strip_styles(&to_html("# Amet Elit\n\nBody.\n"));

    assert_snapshot!(html, @r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="mdipsum">
  <title>Amet Elit</title>
  <style></style>
</head>
<body>
<main class="ipsum-document">
<h1>Amet Elit</h1>

<p>Body.</p>

</main>
</body>
</html>
"#);
}

#[test]
fn test_format_themes() {
    let light = HtmlFormat::new(HtmlTheme::Light).serialize("Body.\n").unwrap();
    let dark = HtmlFormat::new(HtmlTheme::Dark).serialize("Body.\n").unwrap();

    assert_eq!(strip_styles(&light), strip_styles(&dark));
    assert_ne!(light, dark);
}
