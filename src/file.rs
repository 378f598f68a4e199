//! File-level operations: data URI to file and file to data URI

use std::fs;
use std::path::{Path, PathBuf};

use crate::encode::{data_uri_payload, from_base64, to_base64, wrap_data_uri};
use crate::errors::MediaError;
use crate::sniff::{format_tag, sniff_format, supported_extension};

#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o644;

/// Controls for [`encode_file`].
#[derive(Clone, Copy, Debug)]
pub struct EncodeOptions {
    /// Wrap the payload as `data:image/<ext>;base64,...` instead of
    /// returning bare base64.
    pub wrap_as_data_uri: bool,
    /// Fail on paths without a filename extension.
    pub require_extension: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            wrap_as_data_uri: true,
            require_extension: true,
        }
    }
}

/// Decode a base64 data URI and save it as `<base_name>.<format>`.
///
/// The format is sniffed from the decoded bytes and must be JPEG, PNG
/// or GIF; the MIME hint in the URI prefix is ignored. The file is
/// written only when every prior step succeeds. Returns the written
/// path, whose extension carries the sniffed format.
pub fn data_uri_to_file(
    base_name: impl AsRef<Path>,
    data_uri: &str,
) -> Result<PathBuf, MediaError> {
    let payload = data_uri_payload(data_uri)?;
    let bytes = from_base64(payload)?;

    let format = sniff_format(&bytes)?;
    let ext = supported_extension(format)
        .ok_or_else(|| MediaError::UnsupportedFormat(format_tag(format).to_string()))?;

    // Append rather than replace, so "./data.correct" becomes
    // "./data.correct.jpeg"
    let mut path = base_name.as_ref().as_os_str().to_os_string();
    path.push(".");
    path.push(ext);
    let path = PathBuf::from(path);

    write_output(&path, &bytes)?;
    Ok(path)
}

#[cfg(unix)]
fn write_output(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_FILE_MODE)
        .open(path)?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_output(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(path, bytes)
}

/// Encode a file's contents as base64, shaped by `options`.
///
/// The extension hint in the wrapped form is taken from the filename
/// verbatim and never checked against the file contents, so a `.txt`
/// file yields `data:image/.txt;base64,...`.
pub fn encode_file(path: impl AsRef<Path>, options: &EncodeOptions) -> Result<String, MediaError> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty());
    if options.require_extension && extension.is_none() {
        return Err(MediaError::MissingExtension(path.to_path_buf()));
    }

    let contents = fs::read(path)?;
    let payload = to_base64(&contents);

    if options.wrap_as_data_uri {
        let ext_with_dot = extension.map(|ext| format!(".{}", ext)).unwrap_or_default();
        Ok(wrap_data_uri(&ext_with_dot, &payload))
    } else {
        Ok(payload)
    }
}

/// Encode a file as an image data URI.
///
/// Requires the path to carry an extension, which becomes the (naive)
/// MIME hint of the URI.
pub fn file_to_data_uri(path: impl AsRef<Path>) -> Result<String, MediaError> {
    encode_file(path, &EncodeOptions::default())
}

/// Encode a file as a bare base64 string, no wrapper and no
/// extension check.
pub fn file_to_base64(path: impl AsRef<Path>) -> Result<String, MediaError> {
    encode_file(
        path,
        &EncodeOptions {
            wrap_as_data_uri: false,
            require_extension: false,
        },
    )
}
