//! Cover image data helpers.
//!
//! The backend stores cover images as base64 text next to a content type.
//! These helpers encode, decode and size that representation for display.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{AppError, AppResult};

/// Encode raw image bytes into the text-safe cover representation.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a cover back into raw bytes.
pub fn from_base64(value: &str) -> AppResult<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|e| AppError::FileLoad(format!("invalid base64 payload: {e}")))
}

/// True when the content type names an image format.
pub fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Human-readable decoded size of a base64 payload, e.g. `"12 345 bytes"`.
pub fn byte_size(base64: &str) -> String {
    format!("{} bytes", group_thousands(decoded_size(base64)))
}

fn padding_size(value: &str) -> usize {
    if value.ends_with("==") {
        2
    } else if value.ends_with('=') {
        1
    } else {
        0
    }
}

fn decoded_size(value: &str) -> usize {
    value.len() / 4 * 3 - padding_size(value)
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let bytes = vec![0u8, 1, 2, 3, 4];
        let encoded = to_base64(&bytes);
        assert_eq!(from_base64(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_from_base64_rejects_garbage() {
        assert!(matches!(
            from_base64("not base64!!"),
            Err(AppError::FileLoad(_))
        ));
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("image/png"));
        assert!(is_image("image/jpeg"));
        assert!(!is_image("application/pdf"));
    }

    #[test]
    fn test_byte_size_accounts_for_padding() {
        // 5 raw bytes encode to 8 base64 chars with one '=' of padding
        let encoded = to_base64(&[0u8; 5]);
        assert_eq!(byte_size(&encoded), "5 bytes");
    }

    #[test]
    fn test_byte_size_groups_thousands() {
        let encoded = to_base64(&vec![0u8; 12_345]);
        assert_eq!(byte_size(&encoded), "12 345 bytes");
    }
}
