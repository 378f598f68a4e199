//! Image format sniffing from magic bytes

use image::ImageFormat;

use crate::errors::MediaError;

/// Formats accepted on the decode-to-file path, with their file extensions.
const SUPPORTED: [(ImageFormat, &str); 3] = [
    (ImageFormat::Jpeg, "jpeg"),
    (ImageFormat::Png, "png"),
    (ImageFormat::Gif, "gif"),
];

/// Sniff the image format from the structural header of `data`.
///
/// Only magic bytes are inspected; no extension or MIME hint enters
/// the decision.
pub fn sniff_format(data: &[u8]) -> Result<ImageFormat, MediaError> {
    image::guess_format(data).map_err(|_| MediaError::UnknownFormat)
}

/// File extension for `format` if it is in the supported set.
pub fn supported_extension(format: ImageFormat) -> Option<&'static str> {
    SUPPORTED
        .iter()
        .find(|(f, _)| *f == format)
        .map(|(_, ext)| *ext)
}

/// Lowercase tag for error reporting, e.g. "bmp".
pub(crate) fn format_tag(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_png() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(sniff_format(&png_header).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_sniff_jpeg() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(sniff_format(&jpeg_header).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_sniff_gif() {
        assert_eq!(sniff_format(b"GIF89a").unwrap(), ImageFormat::Gif);
    }

    #[test]
    fn test_garbage_is_unknown() {
        let err = sniff_format(b"not an image at all").unwrap_err();
        assert!(matches!(err, MediaError::UnknownFormat));
    }

    #[test]
    fn test_empty_is_unknown() {
        assert!(sniff_format(&[]).is_err());
    }

    #[test]
    fn test_bmp_recognized_but_unsupported() {
        let bmp = b"BM\x3a\x00\x00\x00\x00\x00\x00\x00\x36\x00\x00\x00";
        let format = sniff_format(bmp).unwrap();
        assert_eq!(supported_extension(format), None);
        assert_eq!(format_tag(format), "bmp");
    }

    #[test]
    fn test_supported_extensions() {
        assert_eq!(supported_extension(ImageFormat::Jpeg), Some("jpeg"));
        assert_eq!(supported_extension(ImageFormat::Png), Some("png"));
        assert_eq!(supported_extension(ImageFormat::Gif), Some("gif"));
        assert_eq!(supported_extension(ImageFormat::WebP), None);
    }
}
