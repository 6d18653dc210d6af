//! Message body segmentation over any codec

use tracing::debug;

use crate::coding::EncDec;
use crate::config::SegmentationConfig;
use crate::errors::Result;

/// Encode a message body into one or more segments.
///
/// Splitting happens only when the codec can split and the whole body
/// exceeds `single_octet_limit`; segments are then bounded by
/// `concat_octet_limit()`. Codecs without the capability always yield
/// one segment.
pub fn split_message(
    codec: &dyn EncDec,
    text: &str,
    config: &SegmentationConfig,
) -> Result<Vec<Vec<u8>>> {
    let splitter = match codec.as_splitter() {
        Some(splitter) if splitter.should_split(text, config.single_octet_limit) => splitter,
        _ => return Ok(vec![codec.encode(text)?]),
    };

    let limit = config.concat_octet_limit();
    let segments = splitter.encode_split(text, limit)?;

    debug!(
        coding = %codec.data_coding(),
        octet_limit = limit,
        segments = segments.len(),
        "Split message into segments"
    );

    Ok(segments)
}
