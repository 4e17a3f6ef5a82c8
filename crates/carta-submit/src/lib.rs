//! carta-submit: Submission packaging for banner drafts (sans-IO).
//!
//! Turns an [`AssetDraft`] into a structured description of one
//! atomic multipart request body: text parts for every field the
//! draft manages, file parts only for slots whose image was replaced
//! this session. The description is plain data -- `carta-io` converts
//! it to a browser `FormData` and sends it; tests inspect it
//! directly.

use carta_core::banner::{AssetDraft, BannerSlot};

/// MIME type of every cropped banner asset.
pub const JPEG_MIME: &str = "image/jpeg";

/// One text field of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPart {
    pub name: &'static str,
    pub value: String,
}

/// One binary file of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: &'static str,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The assembled update-banners request body.
///
/// Text parts always cover all ten managed fields -- an empty string
/// means "clear this field server-side", so the body represents the
/// complete desired state of the fields it manages. File parts exist
/// only for slots with a pending blob; untouched slots never
/// overwrite their stored server image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerSubmission {
    pub texts: Vec<TextPart>,
    pub files: Vec<FilePart>,
}

impl BannerSubmission {
    /// Look up a text part by wire name.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|part| part.name == name)
            .map(|part| part.value.as_str())
    }
}

/// Package the current draft into one submission body.
#[must_use]
pub fn package(draft: &AssetDraft) -> BannerSubmission {
    let main = draft.slot(BannerSlot::Main);
    let side_top = draft.slot(BannerSlot::SideTop);
    let side_bottom = draft.slot(BannerSlot::SideBottom);

    let text = |name: &'static str, value: &str| TextPart {
        name,
        value: value.to_owned(),
    };

    let texts = vec![
        text("mainTitle", main.title()),
        text("mainSubtitle", main.subtitle()),
        text("mainBg", main.bg_color()),
        text("sideTopTitle", side_top.title()),
        text("sideTopSubtitle", side_top.subtitle()),
        text("sideTopPrice", side_top.price().unwrap_or("")),
        text("sideTopBg", side_top.bg_color()),
        text("sideBottomTitle", side_bottom.title()),
        text("sideBottomSubtitle", side_bottom.subtitle()),
        text("sideBottomBg", side_bottom.bg_color()),
    ];

    let files = BannerSlot::ALL
        .iter()
        .filter_map(|&slot| {
            draft.slot(slot).pending().map(|bytes| FilePart {
                name: slot.upload_field(),
                filename: slot.upload_filename().to_owned(),
                content_type: JPEG_MIME.to_owned(),
                bytes: bytes.to_vec(),
            })
        })
        .collect();

    BannerSubmission { texts, files }
}

/// One raw upload for the create flow (not cropped -- sent as
/// selected).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAsset {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The initial asset set accepted by the create endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreatePackage {
    pub name: String,
    pub whatsapp_number: String,
    /// Book page aspect ratio (width / height).
    pub ratio: f64,
    pub logo: Option<CreateAsset>,
    pub front: Option<CreateAsset>,
    pub back: Option<CreateAsset>,
    pub pages: Vec<CreateAsset>,
}

impl CreatePackage {
    /// Flatten into multipart text and file parts.
    ///
    /// `pages` repeats its field name once per body page, preserving
    /// page order.
    #[must_use]
    pub fn into_parts(self) -> (Vec<TextPart>, Vec<FilePart>) {
        let texts = vec![
            TextPart {
                name: "name",
                value: self.name,
            },
            TextPart {
                name: "whatsappNumber",
                value: self.whatsapp_number,
            },
            TextPart {
                name: "ratio",
                value: self.ratio.to_string(),
            },
        ];

        let named = |name: &'static str, asset: CreateAsset| FilePart {
            name,
            filename: asset.filename,
            content_type: asset.content_type,
            bytes: asset.bytes,
        };

        let mut files = Vec::new();
        if let Some(logo) = self.logo {
            files.push(named("logo", logo));
        }
        if let Some(front) = self.front {
            files.push(named("front", front));
        }
        if let Some(back) = self.back {
            files.push(named("back", back));
        }
        files.extend(self.pages.into_iter().map(|page| named("pages", page)));

        (texts, files)
    }
}
