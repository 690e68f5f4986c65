//! Solution attachments: file bytes carried inline as base64 text.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::MAX_ATTACHMENT_BYTES;

/// Error returned by [`Attachment::encode`] and [`Attachment::decode`].
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    /// The file exceeds [`MAX_ATTACHMENT_BYTES`].
    #[error("{name} is {size} bytes; attachments are limited to {limit} bytes")]
    TooLarge { name: String, size: usize, limit: usize },
    /// The payload is not valid base64.
    #[error("attachment payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// A named file encoded for a JSON body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name as picked by the user.
    pub name: String,
    /// Base64 (standard alphabet, padded) of the raw bytes.
    pub data: String,
}

impl Attachment {
    /// Encode raw file bytes, refusing anything over the size cap.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::TooLarge`] if `bytes` exceeds [`MAX_ATTACHMENT_BYTES`].
    pub fn encode(name: impl Into<String>, bytes: &[u8]) -> Result<Self, AttachmentError> {
        let name = name.into();
        check_size(&name, bytes.len())?;
        Ok(Self { name, data: STANDARD.encode(bytes) })
    }

    /// Decode the payload back to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::Decode`] if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, AttachmentError> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }

    /// Size of the decoded payload in bytes, computed from the encoded length.
    #[must_use]
    pub fn decoded_len(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count();
        (self.data.len() / 4 * 3).saturating_sub(padding)
    }
}

/// Reject sizes above the cap before any bytes are read or encoded.
///
/// # Errors
///
/// Returns [`AttachmentError::TooLarge`] if `size` exceeds [`MAX_ATTACHMENT_BYTES`].
pub fn check_size(name: &str, size: usize) -> Result<(), AttachmentError> {
    if size > MAX_ATTACHMENT_BYTES {
        return Err(AttachmentError::TooLarge {
            name: name.to_owned(),
            size,
            limit: MAX_ATTACHMENT_BYTES,
        });
    }
    Ok(())
}

/// Remove the attachment at `index`, ignoring out-of-range indices.
pub fn remove_at(files: &mut Vec<Attachment>, index: usize) {
    if index < files.len() {
        files.remove(index);
    }
}
