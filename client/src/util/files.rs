//! File picker helpers for solution attachments.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

#[cfg(feature = "hydrate")]
use crate::net::types::Attachment;

/// Advisory `accept` filter for the picker; the backend does not enforce it.
pub const ACCEPT: &str = ".pdf,.doc,.docx,.ppt,.pptx,.txt,.png,.jpg,.jpeg,.zip";

/// Compact size label, e.g. `1.5 MB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn human_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KB {
        format!("{bytes} B")
    } else if bytes_f < KB * KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{:.1} MB", bytes_f / (KB * KB))
    }
}

/// Read a picked file fully into memory and encode it.
///
/// The size cap is checked before any bytes are read.
///
/// # Errors
///
/// Returns a display message if the file is too large or cannot be read.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub async fn read_attachment(file: web_sys::File) -> Result<Attachment, String> {
    let name = file.name();
    crate::net::types::attachment::check_size(&name, file.size() as usize).map_err(|e| e.to_string())?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {name}: {e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Attachment::encode(name, &bytes).map_err(|e| e.to_string())
}

/// Every file currently selected in a file input, in picker order.
#[cfg(feature = "hydrate")]
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
