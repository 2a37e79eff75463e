use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::content::contact::ContactInfo;

pub const VCARD_MIME: &str = "text/vcard";

/// What gets handed to the browser as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardFile {
    pub file_name: String,
    pub mime: &'static str,
    pub body: &'static str,
}

impl VCardFile {
    pub fn for_contact(contact: &ContactInfo) -> Self {
        Self {
            file_name: format!("{}.vcf", contact.name.replace(' ', "_")),
            mime: VCARD_MIME,
            body: contact.vcf,
        }
    }
}

/// Triggers a save dialog for the contact card. Browser API failures are
/// logged and otherwise swallowed; there is nothing useful to show the user.
pub fn export_vcard(contact: &ContactInfo) {
    let file = VCardFile::for_contact(contact);
    match trigger_download(&file) {
        Ok(()) => info!("vCard download started: {}", file.file_name),
        Err(e) => warn!("vCard download failed: {:?}", e),
    }
}

fn trigger_download(file: &VCardFile) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(file.body));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&file.file_name);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::contact::JANE_WEST;

    #[test]
    fn file_name_follows_contact_name() {
        let file = VCardFile::for_contact(&JANE_WEST);
        assert_eq!(file.file_name, "Jane_West.vcf");
        assert_eq!(file.mime, "text/vcard");
        assert_eq!(file.body, JANE_WEST.vcf);
    }
}
