//! Properties every extracted article holds, checked on deliberately messy pages.

use rs_crux::dom::{self, NodeRef, Selection};
use rs_crux::extractor::postprocess::{
    ATTRIBUTES_TO_RETAIN, MIN_LENGTH_FOR_PARAGRAPHS, RETAIN_TAGS, RETAIN_TAGS_TOP_LEVEL,
    TAGS_EXEMPT_FROM_MIN_LENGTH_CHECK,
};
use rs_crux::url_utils::count_letters;
use rs_crux::{extract, Article, GRAVITY_ATTR};

const SENTENCE: &str = "Rescue crews reached the valley at dawn, and the road reopened by noon. ";

fn messy_page() -> String {
    let paragraph = SENTENCE.repeat(4);
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="no-js">
<head>
    <title>Valley road reopens</title>
    <link rel="canonical" href="/news/valley-road">
    <link rel="amphtml" href="amp/valley-road">
    <link rel="alternate" type="application/rss+xml" href="/rss">
    <link rel="icon" href="//static.example/favicon.ico">
    <meta property="og:video" content="/video/valley.mp4">
    <style>body {{ color: red }}</style>
    <script>var tracking = true;</script>
</head>
<body class="page" onload="init()">
    <header id="site-header"><a href="/">Logo</a><nav class="menu"><a href="/a">A</a></nav></header>
    <div id="main" class="story-body" data-track="1">
        <h1 class="headline">Valley road reopens</h1>
        <p class="lead" style="color: #333">{paragraph}</p>
        <script>document.write("ad");</script>
        <!-- an HTML comment -->
        <p onclick="expand()">{paragraph} <a href="related/other-story" rel="nofollow" target="_blank">Related</a></p>
        <noscript><img src="/img/valley.jpg" width="900" height="600" alt="The valley road"></noscript>
        <form action="/subscribe"><input name="email"><p>Subscribe to updates, daily.</p></form>
        <div class="share-tools"><a href="https://share.example/?u=1">Share</a></div>
        <span style="display:none">hidden tracking text that should never show up anywhere</span>
        <ul><li>{paragraph}</li><li>Short item</li></ul>
        <table><tr><td>{paragraph}</td></tr></table>
        <p>{paragraph}<br><br>{paragraph}</p>
        <p>-- ** -- ** -- ** -- ** -- ** -- ** -- ** -- ** -- ** --</p>
        <iframe src="/embed/widget"></iframe>
        <p><img src="tiny.gif" width="1" height="1"></p>
    </div>
    <aside class="sidebar"><p>Most read stories this week, ranked by you.</p></aside>
    <footer id="footer"><p>Copyright 2024, Valley News. All rights reserved.</p></footer>
</body>
</html>"#
    )
}

fn extracted() -> Article {
    match extract("https://valley.example/news/2024/road", &messy_page()) {
        Ok(article) => article,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

fn body(article: &Article) -> NodeRef<'_> {
    match dom::body(&article.document) {
        Some(body) => body,
        None => panic!("output document has no body"),
    }
}

#[test]
fn content_was_found() {
    let article = extracted();
    assert!(!article.is_empty());
    assert!(article.content_text().contains("Rescue crews reached the valley"));
}

#[test]
fn only_whitelisted_attributes_remain() {
    let article = extracted();
    for node in article.document.select("*").nodes() {
        let tag = dom::tag_name(node).unwrap_or_default();
        for name in dom::attribute_names(node) {
            assert!(
                ATTRIBUTES_TO_RETAIN.contains(&name.as_str()),
                "<{tag}> kept attribute {name}"
            );
        }
    }
}

#[test]
fn only_whitelisted_tags_remain() {
    let article = extracted();
    for node in dom::descendant_elements(&body(&article)) {
        let tag = dom::tag_name(&node).unwrap_or_default();
        assert!(RETAIN_TAGS.contains(&tag.as_str()), "kept <{tag}>");
    }
}

#[test]
fn top_level_children_are_paragraph_like() {
    let article = extracted();
    for child in body(&article).children() {
        if child.is_text() {
            continue;
        }
        let tag = dom::tag_name(&child).unwrap_or_default();
        assert!(RETAIN_TAGS_TOP_LEVEL.contains(&tag.as_str()), "top-level <{tag}>");
    }
}

#[test]
fn noise_elements_are_gone() {
    let article = extracted();
    let doc = &article.document;
    assert!(doc.select("script, style, form, noscript, iframe").is_empty());
    assert!(doc.select(rs_crux::GRAVITY_SELECTOR).is_empty());

    let html = article.content_html();
    assert!(!html.contains(GRAVITY_ATTR));
    assert!(!html.contains("<!--"));

    let text = article.content_text();
    assert!(!text.contains("hidden tracking text"));
    assert!(!text.contains("Subscribe to updates"));
    assert!(!text.contains("Most read stories"));
    assert!(!text.contains("Copyright 2024"));
}

#[test]
fn short_or_symbolic_top_level_paragraphs_are_dropped() {
    let article = extracted();
    for child in dom::element_children(&body(&article)) {
        let tag = dom::tag_name(&child).unwrap_or_default();
        if TAGS_EXEMPT_FROM_MIN_LENGTH_CHECK.contains(&tag.as_str())
            || Selection::from(child).select("img").exists()
        {
            continue;
        }
        let text = dom::text(&child);
        let len = text.chars().count();
        assert!(len >= MIN_LENGTH_FOR_PARAGRAPHS, "short <{tag}>: {text:?}");
        assert!(len <= 2 * count_letters(&text), "mostly symbols: {text:?}");
    }
}

#[test]
fn every_url_is_absolute() {
    let article = extracted();
    for url in [
        &article.canonical_url,
        &article.amp_url,
        &article.feed_url,
        &article.favicon_url,
        &article.video_url,
        &article.image_url,
    ] {
        assert!(url.is_empty() || url.starts_with("http"), "not absolute: {url}");
    }
    assert_eq!(article.canonical_url, "https://valley.example/news/valley-road");
    assert_eq!(article.amp_url, "https://valley.example/news/2024/amp/valley-road");
    assert_eq!(article.favicon_url, "https://static.example/favicon.ico");

    let doc = &article.document;
    for node in doc.select("[href], [src]").nodes() {
        for name in ["href", "src"] {
            let value = dom::attr(node, name);
            assert!(value.is_empty() || value.starts_with("http"), "relative {name}: {value}");
        }
    }
}

#[test]
fn noscript_image_is_recovered() {
    let article = extracted();
    assert!(article.images.iter().any(|image| image.src == "/img/valley.jpg"));
    assert_eq!(article.image_url, "https://valley.example/img/valley.jpg");
}

#[test]
fn extraction_is_deterministic() {
    let first = extracted();
    let second = extracted();
    assert_eq!(first.content_html(), second.content_html());
    assert_eq!(first.images, second.images);
}
