//! One extraction pass: clone, preprocess, score, select, then collect images and clean up.
//!
//! A pass owns its copy of the page. [`Pass::run`] stops after selection so the caller can
//! look at how much text was found and decide whether to try again with different
//! preprocessing; [`Pass::finish`] turns the chosen pass into the output document.

use dom_query::NodeId;

use crate::dom::{self, Document, NodeRef};
use crate::extractor::images::collect_images;
use crate::extractor::postprocess::{into_output_document, Postprocessor};
use crate::extractor::preprocess::Preprocessor;
use crate::extractor::scoring::GravityScores;
use crate::extractor::selection::select_best;
use crate::options::PreprocessorOptions;
use crate::result::{empty_document, Image};
use crate::url_utils::absolutize;

/// State of a pass between selection and postprocessing.
pub struct Pass {
    document: Document,
    selected: Option<NodeId>,
    scores: GravityScores,
    text_len: usize,
}

impl Pass {
    /// Preprocess a fresh copy of `source` and select its best node.
    #[must_use]
    pub fn run(source: &Document, options: &PreprocessorOptions) -> Self {
        let document = dom::clone_document(source);
        let mut scores = GravityScores::new();

        let (selected, text_len) = match dom::body(&document) {
            Some(body) => {
                Preprocessor.preprocess(&body, options);
                match select_best(&body, &mut scores) {
                    Some(best) => (Some(best.node.id), dom::text_len(&best.node)),
                    None => (None, 0),
                }
            }
            None => (None, 0),
        };

        tracing::debug!(
            strip_unlikely = options.strip_unlikely_candidates,
            found = selected.is_some(),
            text_len,
            "pass selected"
        );

        Self {
            document,
            selected,
            scores,
            text_len,
        }
    }

    /// Whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Text length of the selected node, `0` when nothing was selected.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// The selected node.
    #[must_use]
    pub fn selected(&self) -> Option<NodeRef<'_>> {
        self.selected.map(|id| NodeRef::new(id, &self.document.tree))
    }

    /// Collect images from the selection, clean it, and return the output document.
    ///
    /// Images are collected before cleanup, which may remove some of them. Relative URLs in
    /// the body resolve against the page's `<base href>`, else against `page_url`.
    #[must_use]
    pub fn finish(self, page_url: &str) -> (Document, Vec<Image>) {
        let Some(id) = self.selected else {
            return (empty_document(), Vec::new());
        };

        let base_url = document_base_url(&self.document, page_url);
        let root = NodeRef::new(id, &self.document.tree);
        let images = collect_images(&root);
        Postprocessor.postprocess(&root, &self.scores, &base_url);
        into_output_document(&self.document, &root);

        (self.document, images)
    }
}

/// The URL relative links of `doc` resolve against: the first `<base href>`, itself resolved
/// against `page_url`, or `page_url` when there is none.
#[must_use]
pub fn document_base_url(doc: &Document, page_url: &str) -> String {
    let href = doc
        .select("base[href]")
        .nodes()
        .first()
        .map(|base| dom::attr(base, "href"))
        .unwrap_or_default();
    match absolutize(&href, page_url) {
        base if base.is_empty() => page_url.to_string(),
        base => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "The harbour reopened on Monday, weeks after the storm damaged it. ";

    #[test]
    fn run_leaves_the_source_untouched() {
        let source = dom::parse(&format!(
            r#"<body><div id="sidebar">menu</div><div id="content"><p>{0}</p><p>{0}</p><p>{0}</p></div></body>"#,
            SENTENCE.repeat(3)
        ));
        let options = PreprocessorOptions {
            strip_unlikely_candidates: true,
            ..PreprocessorOptions::default()
        };
        let pass = Pass::run(&source, &options);
        assert!(!pass.is_empty());
        assert!(source.select("#sidebar").exists());
        assert_eq!(pass.selected().map(|n| dom::attr(&n, "id")), Some("content".to_string()));
    }

    #[test]
    fn finish_produces_clean_body() {
        let source = dom::parse(&format!(
            r#"<html><head><title>T</title></head><body><div id="content" class="story">
               <p>{0}</p><p>{0}<img src="/a.jpg" width="640" height="480"></p><p>{0}</p></div></body></html>"#,
            SENTENCE.repeat(3)
        ));
        let pass = Pass::run(&source, &PreprocessorOptions::default());
        let (document, images) = pass.finish("https://news.example/story");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "/a.jpg");
        assert_eq!(document.select("body > p").length(), 3);
        assert!(document.select("title, #content").is_empty());
        assert_eq!(
            document.select("img").attr("src").map(|s| s.to_string()),
            Some("https://news.example/a.jpg".to_string())
        );
    }

    #[test]
    fn base_href_takes_precedence_over_page_url() {
        let with_base = dom::parse(r#"<head><base href="https://cdn.example/assets/"></head>"#);
        assert_eq!(
            document_base_url(&with_base, "https://site.example/news/story"),
            "https://cdn.example/assets/"
        );

        let relative_base = dom::parse(r#"<head><base href="/static/"></head>"#);
        assert_eq!(
            document_base_url(&relative_base, "https://site.example/news/story"),
            "https://site.example/static/"
        );

        let target_only = dom::parse(r#"<head><base target="_blank"></head>"#);
        assert_eq!(
            document_base_url(&target_only, "https://site.example/news/story"),
            "https://site.example/news/story"
        );
    }

    #[test]
    fn body_urls_resolve_against_base_href() {
        let source = dom::parse(&format!(
            r#"<html><head><base href="https://cdn.example/assets/"></head><body><div id="content">
               <p>{0}<img src="pic.jpg"></p><p>{0} <a href="x.html">more</a></p><p>{0}</p></div></body></html>"#,
            SENTENCE.repeat(3)
        ));
        let pass = Pass::run(&source, &PreprocessorOptions::default());
        let (document, _) = pass.finish("https://site.example/news/story");
        assert_eq!(
            document.select("img").attr("src").map(|s| s.to_string()),
            Some("https://cdn.example/assets/pic.jpg".to_string())
        );
        assert_eq!(
            document.select("a").attr("href").map(|s| s.to_string()),
            Some("https://cdn.example/assets/x.html".to_string())
        );
    }

    #[test]
    fn empty_pass_yields_empty_document() {
        let source = dom::parse("<body><span>nothing here</span></body>");
        let pass = Pass::run(&source, &PreprocessorOptions::default());
        assert!(pass.is_empty());
        assert_eq!(pass.text_len(), 0);
        let (document, images) = pass.finish("https://a.example/");
        assert!(images.is_empty());
        assert!(document.select("body *").is_empty());
    }
}
