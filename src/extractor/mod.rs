//! Main content extraction.
//!
//! # Module Structure
//!
//! - `keep`: "worth keeping" judgements shared by pre- and postprocessing
//! - `preprocess`: noise removal before scoring
//! - `scoring`: candidate enumeration, weights and the gravity-score table
//! - `selection`: best-node selection with parent coalescing
//! - `images`: image collection and dominant-image ranking
//! - `postprocess`: whitelist cleanup of the selected node
//! - `pipeline`: one complete pass over a copy of the page
//!
//! # Usage
//!
//! ```rust
//! use rs_crux::dom;
//! use rs_crux::extractor::Pass;
//! use rs_crux::PreprocessorOptions;
//!
//! let paragraph = "Council members debated the budget, then approved it late. ".repeat(4);
//! let html = format!("<body><div><p>{paragraph}</p><p>{paragraph}</p><p>{paragraph}</p></div></body>");
//! let pass = Pass::run(&dom::parse(&html), &PreprocessorOptions::default());
//! assert!(!pass.is_empty());
//!
//! let (document, images) = pass.finish("https://example.com/budget");
//! assert_eq!(document.select("body > p").length(), 3);
//! assert!(images.is_empty());
//! ```

pub mod images;
pub mod keep;
pub mod pipeline;
pub mod postprocess;
pub mod preprocess;
pub mod scoring;
pub mod selection;

pub use images::{collect_images, dominant_image, rank_images};
pub use keep::KeepPolicy;
pub use pipeline::Pass;
pub use postprocess::Postprocessor;
pub use preprocess::Preprocessor;
pub use scoring::{GravityScores, Scorer};
pub use selection::{select_best, Selected};
