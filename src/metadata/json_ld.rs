//! JSON-LD Metadata Parsing
//!
//! Schema.org objects embedded in `<script type="application/ld+json">` are a fallback for the
//! headline, description, image and keywords when `<meta>` tags are missing.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

/// Article-like schema objects of a document, most relevant first.
#[derive(Debug, Clone, Default)]
pub struct JsonLd {
    articles: Vec<SchemaObject>,
}

#[derive(Debug, Clone)]
struct SchemaObject {
    data: Map<String, Value>,
    importance: i32,
}

impl JsonLd {
    /// Parse every JSON-LD script of `doc`. Scripts that are not valid JSON are skipped.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let mut articles = Vec::new();

        for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
            let json_text = Selection::from(*script).text().trim().to_string();
            if json_text.is_empty() {
                continue;
            }
            let data: Value = match serde_json::from_str(&json_text) {
                Ok(v) => v,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping malformed JSON-LD");
                    continue;
                }
            };
            collect_articles(&data, 0, &mut articles);
        }

        // Stable: equally important objects keep document order.
        articles.sort_by(|a, b| b.importance.cmp(&a.importance));
        Self { articles }
    }

    /// Whether no article-like object was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// `headline`, else `name`.
    #[must_use]
    pub fn headline(&self) -> Option<String> {
        self.first(|data| {
            get_single_string_value(data, "headline").or_else(|| get_single_string_value(data, "name"))
        })
    }

    /// `description`.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.first(|data| get_single_string_value(data, "description"))
    }

    /// `image` as a string, an `ImageObject`, or the first entry of a list of either.
    #[must_use]
    pub fn image(&self) -> Option<String> {
        self.first(extract_schema_image)
    }

    /// `keywords` as a list or a comma-separated string.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        self.first(|data| get_string_values(data, "keywords"))
            .unwrap_or_default()
    }

    fn first<T>(&self, f: impl Fn(&Map<String, Value>) -> Option<T>) -> Option<T> {
        self.articles.iter().find_map(|article| f(&article.data))
    }
}

/// Walk objects, arrays and `@graph` lists, keeping article-typed objects.
fn collect_articles(value: &Value, depth: i32, articles: &mut Vec<SchemaObject>) {
    match value {
        Value::Object(map) => {
            let types = get_schema_types(value);
            let next_depth = if types.is_empty() { depth } else { depth + 1 };
            if is_article_type(&types) {
                articles.push(SchemaObject {
                    data: map.clone(),
                    importance: 100 - depth * 10,
                });
            }
            for val in map.values() {
                collect_articles(val, next_depth, articles);
            }
        }
        Value::Array(arr) => {
            for item in arr {
                collect_articles(item, depth, articles);
            }
        }
        _ => {}
    }
}

/// Lowercased `@type` values of a schema object.
fn get_schema_types(value: &Value) -> Vec<String> {
    let Some(type_val) = value.as_object().and_then(|obj| obj.get("@type")) else {
        return Vec::new();
    };

    match type_val {
        Value::String(s) => vec![s.to_lowercase()],
        Value::Array(arr) => arr
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        _ => Vec::new(),
    }
}

fn is_article_type(types: &[String]) -> bool {
    types.iter().any(|t| {
        matches!(
            t.as_str(),
            "article"
                | "newsarticle"
                | "blogposting"
                | "webpage"
                | "report"
                | "techarticle"
                | "scholarlyarticle"
                | "socialmediaposting"
                | "reportagenewsarticle"
                | "analysisnewsarticle"
        )
    })
}

fn get_string_values(data: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let result: Vec<String> = match data.get(key)? {
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(arr) => arr
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

fn get_single_string_value(data: &Map<String, Value>, key: &str) -> Option<String> {
    let value = match data.get(key)? {
        Value::String(s) => s.as_str(),
        Value::Array(arr) => arr.first().and_then(Value::as_str)?,
        _ => return None,
    };
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn extract_schema_image(data: &Map<String, Value>) -> Option<String> {
    let image = match data.get("image")? {
        Value::Array(arr) => arr.first()?,
        other => other,
    };
    let url = match image {
        Value::String(s) => s.as_str(),
        Value::Object(obj) => obj.get("url").and_then(Value::as_str)?,
        _ => return None,
    };
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}
