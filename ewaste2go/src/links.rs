//! Builders for the URLs the app hands to the platform opener, plus the
//! opener itself. Nothing here talks to the network.

use crate::error::AppError;
use ewaste_data::Coordinates;
use std::path::Path;
use url::Url;

pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";
pub const MAP_PREVIEW_ZOOM: u8 = 14;

pub const SUPPORT_PHONE: &str = "+6088232311";
pub const SUPPORT_PHONE_DISPLAY: &str = "+60 88-232311";
pub const SUPPORT_EMAIL: &str = "support@ewaste2go.my";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

pub fn maps_search(coordinates: Coordinates) -> String {
    format!("{}{},{}", MAPS_SEARCH_BASE, coordinates.lat, coordinates.lng)
}

/// Maps search for a free-form place name or address
pub fn maps_search_query(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}{}", MAPS_SEARCH_BASE, encoded)
}

pub fn maps_embed(coordinates: Coordinates, zoom: u8) -> String {
    format!(
        "https://maps.google.com/maps?q={},{}&hl=en&z={}&output=embed",
        coordinates.lat, coordinates.lng, zoom
    )
}

/// `tel:` link; spaces in display-formatted numbers are dropped
pub fn tel(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}

/// wa.me wants the number without `+` or separators
pub fn whatsapp(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

/// Validates a user-picked image and turns it into a `file://` preview
/// reference. The file is never read or copied.
pub fn image_preview(path: &Path) -> Result<Url, AppError> {
    let display = path.display().to_string();

    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if !is_image {
        return Err(AppError::InvalidImage(format!("{} is not an image", display)));
    }

    let absolute = std::fs::canonicalize(path)
        .map_err(|e| AppError::InvalidImage(format!("{}: {}", display, e)))?;
    if !absolute.is_file() {
        return Err(AppError::InvalidImage(format!("{} is not a file", display)));
    }

    Url::from_file_path(&absolute).map_err(|_| AppError::InvalidImage(display))
}

/// Fire-and-forget hand-off to the platform opener
pub fn open_external(target: &str) {
    match open::that_detached(target) {
        Ok(()) => tracing::info!("Opened external link: {}", target),
        Err(e) => tracing::warn!("Failed to open {}: {}", target, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn maps_search_uses_lat_lng() {
        assert_eq!(
            maps_search(Coordinates::new(5.98, 116.09)),
            "https://www.google.com/maps/search/?api=1&query=5.98,116.09"
        );
    }

    #[test]
    fn maps_search_query_is_encoded() {
        assert_eq!(
            maps_search_query("Lintas Square, KK"),
            "https://www.google.com/maps/search/?api=1&query=Lintas+Square%2C+KK"
        );
    }

    #[test]
    fn embed_url_carries_zoom() {
        assert_eq!(
            maps_embed(Coordinates::new(5.9785, 116.0735), MAP_PREVIEW_ZOOM),
            "https://maps.google.com/maps?q=5.9785,116.0735&hl=en&z=14&output=embed"
        );
    }

    #[test]
    fn contact_links() {
        assert_eq!(tel("+60 88-521 800"), "tel:+6088-521800");
        assert_eq!(mailto(SUPPORT_EMAIL), "mailto:support@ewaste2go.my");
        assert_eq!(whatsapp(SUPPORT_PHONE_DISPLAY), "https://wa.me/6088232311");
    }

    #[test]
    fn image_preview_accepts_existing_image() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"not really a png").unwrap();

        let url = image_preview(file.path()).unwrap();
        assert_eq!(url.scheme(), "file");
    }

    #[test]
    fn image_preview_rejects_missing_or_non_image() {
        assert!(matches!(
            image_preview(Path::new("/definitely/not/here.jpg")),
            Err(AppError::InvalidImage(_))
        ));

        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            image_preview(file.path()),
            Err(AppError::InvalidImage(_))
        ));
    }
}
