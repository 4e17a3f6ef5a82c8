//! Wire-level restaurant records.
//!
//! Mirrors the backend's JSON shapes. Every field the server may omit
//! carries a serde default so a partial record never fails to decode;
//! visual defaults on top of these (colors, placeholder text) are the
//! draft store's concern.

use serde::{Deserialize, Serialize};

const fn default_active() -> bool {
    true
}

/// One restaurant as returned by fetch-by-identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    /// Records written before the pause feature existed have no flag;
    /// those count as active.
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub book: MenuBook,
    #[serde(default)]
    pub banners: BannerSet,
}

/// The menu book's image references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuBook {
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub back_url: Option<String>,
    #[serde(default)]
    pub pages: Vec<String>,
}

/// The three banner slots as stored server-side. Any subset may be
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BannerSet {
    #[serde(default)]
    pub main: Option<BannerRecord>,
    #[serde(default)]
    pub side_top: Option<BannerRecord>,
    #[serde(default)]
    pub side_bottom: Option<BannerRecord>,
}

/// One stored banner slot. All fields optional; the draft store fills
/// the gaps with per-slot defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BannerRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// One row of the fetch-list response, for slot-source selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub slug: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Full metadata object accepted by the update-details endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub full_address: String,
    #[serde(default)]
    pub google_maps_link: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub seo_overrides: SeoOverrides,
}

/// Optional search-engine metadata overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeoOverrides {
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_decodes_with_defaults() {
        let record: RestaurantRecord = serde_json::from_str("{}").unwrap();
        assert!(record.is_active);
        assert!(record.book.pages.is_empty());
        assert!(record.banners.side_top.is_none());
    }

    #[test]
    fn explicit_pause_flag_survives() {
        let record: RestaurantRecord =
            serde_json::from_str(r#"{"slug":"grill-town","isActive":false}"#).unwrap();
        assert!(!record.is_active);
        assert_eq!(record.slug, "grill-town");
    }

    #[test]
    fn camel_case_field_names_round_trip() {
        let record: RestaurantRecord = serde_json::from_str(
            r##"{
                "logoUrl": "https://cdn/logo.png",
                "whatsappNumber": "15551234567",
                "book": {"coverUrl": "c.jpg", "backUrl": "b.jpg", "pages": ["p1.jpg"]},
                "banners": {"sideTop": {"bgColor": "#112233", "price": "$9"}}
            }"##,
        )
        .unwrap();
        assert_eq!(record.logo_url.as_deref(), Some("https://cdn/logo.png"));
        assert_eq!(record.book.cover_url.as_deref(), Some("c.jpg"));
        let side_top = record.banners.side_top.unwrap();
        assert_eq!(side_top.bg_color.as_deref(), Some("#112233"));
        assert_eq!(side_top.price.as_deref(), Some("$9"));

        let json = serde_json::to_string(&BannerRecord {
            bg_color: Some("#445566".into()),
            ..BannerRecord::default()
        })
        .unwrap();
        assert!(json.contains("\"bgColor\""));
    }

    #[test]
    fn summary_defaults_to_active() {
        let list: Vec<RestaurantSummary> =
            serde_json::from_str(r#"[{"slug": "a", "name": "A"}]"#).unwrap();
        assert!(list[0].is_active);
    }
}
