//! Image collection and dominant-image ranking.
//!
//! Collection walks every `<img>` of the selected body in document order and records what the
//! tag declares. Ranking rebuilds those records with a weight; the first image whose weight
//! reaches [`DOMINANT_IMAGE_MIN_WEIGHT`] becomes the article's image.

use crate::dom::{self, NodeRef, Selection};
use crate::patterns::UNLIKELY_IMAGE_SRC;
use crate::result::Image;

/// Weight an image needs to be chosen as the dominant image.
pub const DOMINANT_IMAGE_MIN_WEIGHT: i32 = 20;

/// Weight of an image that declares no usable dimensions.
const UNKNOWN_SIZE_WEIGHT: i32 = 10;

/// Alt text shorter than this says nothing about the picture.
const MEANINGFUL_ALT_LEN: usize = 10;

/// Collect the `<img>` elements below `root` (or `root` itself) in document order.
#[must_use]
pub fn collect_images(root: &NodeRef) -> Vec<Image> {
    let mut images = Vec::new();
    if dom::has_tag(root, &["img"]) {
        images.push(image_from(root));
    }
    for img in Selection::from(*root).select("img").nodes() {
        images.push(image_from(img));
    }
    tracing::debug!(count = images.len(), "collected images");
    images
}

fn image_from(img: &NodeRef) -> Image {
    // Lazy-loading pages keep the real URL in data-src.
    let data_src = dom::attr(img, "data-src");
    let src = if data_src.is_empty() { dom::attr(img, "src") } else { data_src };

    let no_follow = img
        .parent()
        .is_some_and(|parent| dom::attr(&parent, "rel").contains("nofollow"));

    Image {
        src,
        weight: 0,
        title: dom::attr(img, "title"),
        height: dom::parse_attr_as_int(img, "height"),
        width: dom::parse_attr_as_int(img, "width"),
        alt: dom::attr(img, "alt"),
        no_follow,
        element_html: dom::outer_html(img).to_string(),
    }
}

/// Weighted copies of `images`, order preserved.
#[must_use]
pub fn rank_images(images: &[Image]) -> Vec<Image> {
    images
        .iter()
        .enumerate()
        .map(|(position, image)| Image {
            weight: image_weight(image, position),
            ..image.clone()
        })
        .collect()
}

/// The first ranked image heavy enough to represent the article.
#[must_use]
pub fn dominant_image(ranked: &[Image]) -> Option<&Image> {
    ranked
        .iter()
        .find(|image| image.weight >= DOMINANT_IMAGE_MIN_WEIGHT)
}

/// Weight of one image found at `position` (zero-based) in the article body.
#[must_use]
pub fn image_weight(image: &Image, position: usize) -> i32 {
    let src = image.src.trim();
    if src.is_empty() {
        return -100;
    }

    let mut weight = size_weight(image.width, image.height);
    weight += aspect_weight(image.width, image.height);

    if image.alt.trim().chars().count() >= MEANINGFUL_ALT_LEN {
        weight += 5;
    }
    if !image.title.trim().is_empty() {
        weight += 3;
    }

    // Earlier images are more likely to be the lead image.
    weight += 10_i32.saturating_sub(5 * position.min(2) as i32);

    if image.no_follow {
        weight -= 20;
    }
    if src.starts_with("data:") || UNLIKELY_IMAGE_SRC.is_match(src) {
        weight -= 30;
    }
    weight
}

fn size_weight(width: i32, height: i32) -> i32 {
    if width <= 0 || height <= 0 {
        return UNKNOWN_SIZE_WEIGHT;
    }
    let area = i64::from(width) * i64::from(height);
    match area {
        a if a >= 250_000 => 30,
        a if a >= 50_000 => 20,
        a if a >= 10_000 => 10,
        a if a >= 5_000 => 0,
        _ => -20,
    }
}

/// Banners and skyscrapers outside 1:3..3:1 are penalised.
fn aspect_weight(width: i32, height: i32) -> i32 {
    if width <= 0 || height <= 0 {
        return 0;
    }
    let ratio = f64::from(width) / f64::from(height);
    if (1.0 / 3.0..=3.0).contains(&ratio) {
        0
    } else {
        -15
    }
}
