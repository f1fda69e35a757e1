//! Best-effort image preloading, so slideshow transitions don't flash.

/// Start a browser-side fetch for each image path. No-op outside the
/// browser; failures are ignored, the slideshow just loads lazily then.
pub fn preload_images(paths: Vec<String>) {
    #[cfg(target_arch = "wasm32")]
    for path in &paths {
        if let Ok(img) = web_sys::HtmlImageElement::new() {
            img.set_src(path);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = paths;
}
