//! Packaging behavior for partial edits: text fields are always
//! complete, binary parts appear only for slots replaced this session.

#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use carta_core::banner::{AssetDraft, BannerSlot, SlotField};
use carta_core::preview::{BlobUrls, PreviewError, PreviewHandle};
use carta_submit::{package, CreateAsset, CreatePackage, JPEG_MIME};

struct StaticUrls;

impl BlobUrls for StaticUrls {
    fn create(&self, _bytes: &[u8], mime: &str) -> Result<String, PreviewError> {
        Ok(format!("blob:{mime}/test"))
    }

    fn revoke(&self, _url: &str) {}
}

fn urls() -> Rc<dyn BlobUrls> {
    Rc::new(StaticUrls)
}

const ALL_TEXT_FIELDS: [&str; 10] = [
    "mainTitle",
    "mainSubtitle",
    "mainBg",
    "sideTopTitle",
    "sideTopSubtitle",
    "sideTopPrice",
    "sideTopBg",
    "sideBottomTitle",
    "sideBottomSubtitle",
    "sideBottomBg",
];

#[test]
fn text_only_edit_sends_every_field_and_no_binary() {
    let mut draft = AssetDraft::new();
    draft.set_field(BannerSlot::SideBottom, SlotField::Title, "Weekend special");

    let submission = package(&draft);

    let names: Vec<&str> = submission.texts.iter().map(|t| t.name).collect();
    assert_eq!(names, ALL_TEXT_FIELDS);
    assert!(submission.files.is_empty());

    assert_eq!(submission.text("sideBottomTitle"), Some("Weekend special"));
    // Untouched fields ride along as the complete desired state:
    // defaults for colors, empty strings for text.
    assert_eq!(submission.text("mainBg"), Some("#EAB308"));
    assert_eq!(submission.text("mainTitle"), Some(""));
    assert_eq!(submission.text("sideTopPrice"), Some(""));
}

#[test]
fn pending_blob_becomes_exactly_one_named_file_part() {
    let urls = urls();
    let mut draft = AssetDraft::new();
    let preview = PreviewHandle::create(&urls, &[0xFF, 0xD8], JPEG_MIME).unwrap();
    draft.apply_cropped_asset(BannerSlot::Main, preview, vec![0xFF, 0xD8, 0xFF, 0xD9]);

    let submission = package(&draft);

    assert_eq!(submission.files.len(), 1);
    let file = &submission.files[0];
    assert_eq!(file.name, "mainImage");
    assert_eq!(file.filename, "main.jpg");
    assert_eq!(file.content_type, JPEG_MIME);
    assert_eq!(file.bytes, vec![0xFF, 0xD8, 0xFF, 0xD9]);
}

#[test]
fn each_slot_maps_to_its_documented_upload_names() {
    let urls = urls();
    let mut draft = AssetDraft::new();
    for slot in BannerSlot::ALL {
        let preview = PreviewHandle::create(&urls, &[0x00], JPEG_MIME).unwrap();
        draft.apply_cropped_asset(slot, preview, vec![0x00]);
    }

    let submission = package(&draft);
    let names: Vec<(&str, &str)> = submission
        .files
        .iter()
        .map(|f| (f.name, f.filename.as_str()))
        .collect();
    assert_eq!(
        names,
        [
            ("mainImage", "main.jpg"),
            ("sideTopImage", "top.jpg"),
            ("sideBottomImage", "bottom.jpg"),
        ]
    );
}

#[test]
fn clearing_a_field_submits_the_empty_string() {
    let mut draft = AssetDraft::new();
    draft.set_field(BannerSlot::Main, SlotField::Title, "Set then cleared");
    draft.set_field(BannerSlot::Main, SlotField::Title, "");

    let submission = package(&draft);
    assert_eq!(submission.text("mainTitle"), Some(""));
}

#[test]
fn create_package_orders_parts_like_the_admin_form() {
    let page = |n: u32| CreateAsset {
        filename: format!("page-{n}.jpg"),
        content_type: JPEG_MIME.to_owned(),
        bytes: vec![0xD8],
    };

    let (texts, files) = CreatePackage {
        name: "Grill Town".to_owned(),
        whatsapp_number: "15551234567".to_owned(),
        ratio: 210.0 / 297.0,
        logo: Some(CreateAsset {
            filename: "logo.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: vec![0x89],
        }),
        front: Some(page(0)),
        back: None,
        pages: vec![page(1), page(2)],
    }
    .into_parts();

    let text_names: Vec<&str> = texts.iter().map(|t| t.name).collect();
    assert_eq!(text_names, ["name", "whatsappNumber", "ratio"]);

    let file_names: Vec<&str> = files.iter().map(|f| f.name).collect();
    assert_eq!(file_names, ["logo", "front", "pages", "pages"]);
    assert_eq!(files[2].filename, "page-1.jpg");
}
