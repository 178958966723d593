/// Shown when the page does not provide `instagramImagesData`.
pub const FALLBACK_IMAGES: [&str; 6] = [
    "american-burger.jpg.png",
    "bacon-cheese-burger.jpg.png",
    "bbq-burger.jpg.png",
    "beef-burger.jpg.png",
    "cheese-burger.jpg.png",
    "chicken-burger.jpg.png",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(base_path: &str, file: &str) -> Self {
        Self {
            src: format!("{}{}", base_path, file),
            alt: alt_text(file),
        }
    }
}

pub fn gallery_images<S: AsRef<str>>(files: &[S], base_path: &str) -> Vec<GalleryImage> {
    files
        .iter()
        .map(|file| GalleryImage::new(base_path, file.as_ref()))
        .collect()
}

/// "images/bbq-burger.jpg.png" -> "Bbq burger"
pub fn alt_text(file: &str) -> String {
    let name = file.rsplit('/').next().unwrap_or(file);
    let stem = name.split('.').next().unwrap_or(name).replace('-', " ");

    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_text() {
        assert_eq!(alt_text("bacon-cheese-burger.jpg.png"), "Bacon cheese burger");
        assert_eq!(alt_text("nested/path/bbq-burger.jpg"), "Bbq burger");
        assert_eq!(alt_text("plain"), "Plain");
        assert_eq!(alt_text(""), "");
    }

    #[test]
    fn test_gallery_images_from_fallback() {
        let images = gallery_images(&FALLBACK_IMAGES, "images/instagram/");
        assert_eq!(images.len(), 6);
        assert_eq!(images[0].src, "images/instagram/american-burger.jpg.png");
        assert_eq!(images[0].alt, "American burger");
    }
}
