//! Parse-then-render tests for the HTML and plain-text targets.

use prosedown::{Renderer, parse};
use similar_asserts::assert_eq;

#[test]
fn renders_a_small_document() {
    let input = "# Title\n\nSome *styled* text.\n\n- first\n- second\n";
    let html = Renderer::to_html(&parse(input));
    assert_eq!(
        html,
        "<h1>Title</h1>\n\
         <p>Some <em>styled</em> text.</p>\n\
         <ul>\n<li>first</li>\n<li>second</li>\n</ul>\n"
    );
}

#[test]
fn renders_code_block_with_language() {
    let html = Renderer::to_html(&parse("```ts\nconst x = 1 < 2;\n```"));
    assert_eq!(
        html,
        "<pre><code class=\"language-ts\">const x = 1 &lt; 2;</code></pre>\n"
    );
}

#[test]
fn renders_blockquote_link_and_image() {
    let input = "> see [docs](https://example.com)\n\n![cover](c.jpg)";
    let html = Renderer::to_html(&parse(input));
    assert_eq!(
        html,
        "<blockquote>see <a href=\"https://example.com\">docs</a></blockquote>\n\
         <p><img src=\"c.jpg\" alt=\"cover\"></p>\n"
    );
}

#[test]
fn escapes_user_text() {
    let html = Renderer::to_html(&parse("a <script> & more"));
    assert_eq!(html, "<p>a &lt;script&gt; &amp; more</p>\n");
}

#[test]
fn plain_text_excerpt() {
    let input = "# Title\n\nSome **bold** text with `code`.\n\n- one\n- two\n";
    let plain = Renderer::to_plain_text(&parse(input));
    assert_eq!(plain, "Title\nSome bold text with code.\none\ntwo\n");
}
