use rs_crux::{extract, extract_bytes, extract_with_options, ArticleExtractor, Error, Options};

const SENTENCE: &str = "The council voted on Tuesday to extend the tram line, after months of debate. ";

fn paragraph() -> String {
    SENTENCE.repeat(4)
}

#[test]
fn empty_input_is_rejected() {
    let result = extract("https://a.com/", "");
    match result {
        Err(Error::InvalidInput(_)) => {}
        Err(err) => panic!("expected InvalidInput, got Err({err:?})"),
        Ok(article) => panic!("expected Err(_), got Ok({article:?})"),
    }

    assert!(matches!(
        extract_bytes("https://a.com/", b""),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn sidebar_is_left_out_of_the_article() {
    let html = format!(
        r#"<html><head><title>Tram line extended</title></head><body>
            <div id="sidebar">
                <a href="/">Home</a> <a href="/sport">Sport</a> <a href="/weather">Weather</a>
                <p>Most read: Ten things to do this weekend, and other stories you missed.</p>
            </div>
            <div id="content">
                <p>{0}</p>
                <p>{0}</p>
                <p>{0}</p>
            </div>
        </body></html>"#,
        paragraph()
    );

    let result = extract("https://news.example/tram", &html);
    match result {
        Ok(article) => {
            assert_eq!(article.title, "Tram line extended");
            let text = article.content_text();
            assert!(text.starts_with("The council voted"));
            assert!(!text.contains("Most read"));
            assert!(!text.contains("Weather"));
            assert_eq!(article.document.select("body > p").length(), 3);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn image_only_paragraph_survives_with_absolute_src() {
    let html = format!(
        r#"<html><body><div id="content">
            <p>{0}</p>
            <p class="photo"><img src="/a.jpg" width="800" height="600" alt="x"></p>
            <p>{0}</p>
            <p>{0}</p>
        </div></body></html>"#,
        paragraph()
    );

    let result = extract("https://site/story", &html);
    match result {
        Ok(article) => {
            let imgs = article.document.select("body img");
            assert_eq!(imgs.length(), 1);
            assert_eq!(
                imgs.attr("src").map(|s| s.to_string()),
                Some("https://site/a.jpg".to_string())
            );
            assert_eq!(article.images.len(), 1);
            assert_eq!(article.image_url, "https://site/a.jpg");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn double_line_break_becomes_a_single_space() {
    let html = format!(
        r#"<html><body><div id="content">
            <p>alpha<br><br>beta {0}</p>
            <p>{0}</p>
            <p>{0}</p>
        </div></body></html>"#,
        paragraph()
    );

    let result = extract("https://site/story", &html);
    match result {
        Ok(article) => {
            assert!(article.content_text().starts_with("alpha beta"));
            assert_eq!(article.document.select("body br").length(), 1);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn fallback_recovers_content_stripped_by_the_first_pass() {
    // The only real text sits in a container whose class looks like chrome.
    let html = format!(
        r#"<html><body>
            <div id="teaser"><p>Sign up for our newsletter to get the latest news, every morning.</p></div>
            <div class="social-wrapper">
                <p>{0}</p>
                <p>{0}</p>
                <p>{0}</p>
            </div>
        </body></html>"#,
        paragraph()
    );

    let result = extract("https://site/story", &html);
    match result {
        Ok(article) => {
            let text = article.content_text();
            assert!(text.contains("The council voted"), "fallback not used: {text}");
            assert!(!text.contains("newsletter"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn without_fallback_the_short_first_pass_is_kept() {
    let html = format!(
        r#"<html><body>
            <div id="teaser"><p>Sign up for our newsletter to get the latest news, every morning.</p></div>
            <div class="social-wrapper"><p>{0}</p><p>{0}</p><p>{0}</p></div>
        </body></html>"#,
        paragraph()
    );
    let options = Options {
        min_article_text_length: 0,
        ..Options::default()
    };

    let result = extract_with_options("https://site/story", &html, options);
    match result {
        Ok(article) => {
            let text = article.content_text();
            assert!(text.contains("newsletter"));
            assert!(!text.contains("The council voted"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn protocol_relative_image_takes_the_page_scheme() {
    let html = format!(
        r#"<html><body><div id="content">
            <p>{0} <img src="//cdn.example/x.png"></p>
            <p>{0}</p>
            <p>{0}</p>
        </div></body></html>"#,
        paragraph()
    );

    let result = extract("https://site/a.html", &html);
    match result {
        Ok(article) => {
            let src = article.document.select("body img").attr("src").map(|s| s.to_string());
            assert_eq!(src, Some("https://cdn.example/x.png".to_string()));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn page_without_content_yields_an_empty_article() {
    let result = extract(
        "https://site/",
        "<html><head><title>Home</title></head><body><span>Welcome</span></body></html>",
    );
    match result {
        Ok(article) => {
            assert_eq!(article.title, "Home");
            assert!(article.is_empty());
            assert!(article.images.is_empty());
            assert_eq!(article.content_html(), "");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn lazy_loaded_images_use_data_src() {
    let html = format!(
        r#"<html><body><article class="post">
            <p>{0}</p>
            <p><img src="/placeholder.gif" data-src="/real/harbour.jpg" width="1200" height="800"
                    alt="The harbour at dawn"></p>
            <p>{0}</p>
            <p>{0}</p>
        </article></body></html>"#,
        paragraph()
    );

    let result = extract("https://site/story", &html);
    match result {
        Ok(article) => {
            assert_eq!(article.images.len(), 1);
            assert_eq!(article.images[0].src, "/real/harbour.jpg");
            assert!(article.images[0].weight >= 20);
            assert_eq!(article.image_url, "https://site/real/harbour.jpg");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn legacy_encoding_is_decoded() {
    let mut html = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9 reopens</title></head><body><div>".to_vec();
    for _ in 0..3 {
        html.extend_from_slice(b"<p>");
        html.extend_from_slice(paragraph().as_bytes());
        html.extend_from_slice(b"</p>");
    }
    html.extend_from_slice(b"</div></body></html>");

    let result = extract_bytes("https://site/cafe", &html);
    match result {
        Ok(article) => {
            assert_eq!(article.title, "Café reopens");
            assert!(!article.is_empty());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn builder_steps_can_run_alone() {
    let html = format!(
        r#"<html><head><title>Tram</title></head><body><div><p>{0}</p><p>{0}</p><p>{0}</p></div></body></html>"#,
        paragraph()
    );

    let metadata_only = match ArticleExtractor::new("https://site/tram", &html) {
        Ok(extractor) => extractor.extract_metadata().into_article(),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(metadata_only.title, "Tram");
    assert!(metadata_only.is_empty());

    let content_only = match ArticleExtractor::new("https://site/tram", &html) {
        Ok(extractor) => extractor.extract_content().into_article(),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(content_only.title, "");
    assert!(content_only.content_text().contains("tram line"));
}

#[test]
fn base_href_governs_body_urls() {
    let html = format!(
        r#"<html><head><base href="https://cdn.example/assets/"></head><body><div id="content">
            <p>{0}</p>
            <p><img src="pic.jpg" width="800" height="600"></p>
            <p>{0} <a href="x.html">More</a></p>
            <p>{0}</p>
        </div></body></html>"#,
        paragraph()
    );

    let result = extract("https://site.example/news/story", &html);
    match result {
        Ok(article) => {
            let doc = &article.document;
            assert_eq!(
                doc.select("body img").attr("src").map(|s| s.to_string()),
                Some("https://cdn.example/assets/pic.jpg".to_string())
            );
            assert_eq!(
                doc.select("body a").attr("href").map(|s| s.to_string()),
                Some("https://cdn.example/assets/x.html".to_string())
            );
            assert_eq!(article.image_url, "https://cdn.example/assets/pic.jpg");
            assert_eq!(article.canonical_url, "https://site.example/news/story");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
