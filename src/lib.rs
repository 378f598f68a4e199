//! Media Codec - base64 data URI <-> image file conversion
//!
//! A small codec for moving images between their on-disk and
//! data-URI representations:
//! - Decode a data URI, sniff the image format from its bytes, save as `<base>.<format>`
//! - Encode a file's contents into a data URI or a bare base64 string
//! - Format validation against the supported set (JPEG, PNG, GIF)

mod encode;
mod sniff;
mod file;
mod errors;

pub use encode::{from_base64, to_base64, wrap_data_uri};
pub use file::{data_uri_to_file, encode_file, file_to_base64, file_to_data_uri, EncodeOptions};
pub use sniff::{sniff_format, supported_extension};
pub use errors::MediaError;
