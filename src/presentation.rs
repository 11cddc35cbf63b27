//! Presentation Helpers
//!
//! Polish UI labels, unit formatting and photo decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::models::Sex;

pub const LIST_ERROR_MESSAGE: &str = "Nie udało się pobrać listy ras.";
pub const LIST_EMPTY_MESSAGE: &str = "Brak ras spełniających kryteria.";
pub const LOADING_MESSAGE: &str = "Ładowanie...";
pub const DETAIL_ERROR_MESSAGE: &str = "Wystąpił błąd podczas pobierania danych o psie.";
pub const DETAIL_NOT_FOUND_MESSAGE: &str = "Nie znaleziono danych psa.";
pub const NO_PHOTO_MESSAGE: &str = "Brak zdjęcia";

pub fn sex_label(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "Pies",
        _ => "Suka",
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Tak"
    } else {
        "Nie"
    }
}

pub fn weight_label(weight: f64) -> String {
    format!("{weight} kg")
}

pub fn age_label(age: f64) -> String {
    format!("{age} lat")
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/jpeg",
    }
}

/// Data URL for a base64 photo, `None` when missing or undecodable
pub fn image_data_url(image: Option<&str>) -> Option<String> {
    let encoded: String = image?.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if encoded.is_empty() {
        return None;
    }
    match STANDARD.decode(&encoded) {
        Ok(bytes) if !bytes.is_empty() => Some(format!("data:{};base64,{}", sniff_mime(&bytes), encoded)),
        Ok(_) => None,
        Err(e) => {
            log::warn!("[Presentation] Dropping undecodable photo: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_labels() {
        assert_eq!(sex_label(Sex::Male), "Pies");
        assert_eq!(sex_label(Sex::Female), "Suka");
        assert_eq!(sex_label(Sex::Other), "Suka");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Tak");
        assert_eq!(yes_no(false), "Nie");
    }

    #[test]
    fn test_units() {
        assert_eq!(weight_label(12.5), "12.5 kg");
        assert_eq!(weight_label(30.0), "30 kg");
        assert_eq!(age_label(4.0), "4 lat");
    }

    #[test]
    fn test_png_data_url() {
        let encoded = STANDARD.encode([0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        let url = image_data_url(Some(&encoded)).unwrap();
        assert_eq!(url, format!("data:image/png;base64,{encoded}"));
    }

    #[test]
    fn test_unknown_bytes_default_to_jpeg() {
        let encoded = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0]);
        assert!(image_data_url(Some(&encoded)).unwrap().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_wrapped_base64_is_accepted() {
        let encoded = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
        let wrapped = format!("{}\n{}", &encoded[..4], &encoded[4..]);
        assert_eq!(
            image_data_url(Some(&wrapped)),
            Some(format!("data:image/jpeg;base64,{encoded}"))
        );
    }

    #[test]
    fn test_missing_or_broken_photo() {
        assert_eq!(image_data_url(None), None);
        assert_eq!(image_data_url(Some("   ")), None);
        assert_eq!(image_data_url(Some("%%%not base64%%%")), None);
    }
}
