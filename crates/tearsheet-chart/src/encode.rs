//! In-memory PNG encoding for rendered bitmaps.

use crate::error::{ChartError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// Encode an RGB888 framebuffer as a base64 PNG string.
pub(crate) fn png_base64(rgb: &[u8], width: u32, height: u32) -> Result<String> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ChartError::Encode(e.to_string()))?;
    Ok(STANDARD.encode(png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_png_base64_produces_png_payload() {
        let rgb = vec![255u8; 4 * 4 * 3];
        let payload = png_base64(&rgb, 4, 4).unwrap();

        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(&decoded[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_png_base64_rejects_short_buffer() {
        let rgb = vec![0u8; 3];
        assert!(matches!(
            png_base64(&rgb, 4, 4),
            Err(ChartError::Encode(_))
        ));
    }
}
