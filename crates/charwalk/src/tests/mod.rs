mod cursor;
mod decode_iso_2022_jp;
mod decode_legacy;
mod decode_utf8;
mod decode_utf16;
mod encode;
mod labels;
mod property_cursor;

use alloc::vec::Vec;

use crate::Decoder;

/// Decodes to the end in replace mode, collecting code points.
pub(crate) fn collect_codes<D: Decoder>(decoder: &mut D) -> Vec<u32> {
    let mut out = Vec::new();
    while let Some(code_point) = decoder.next_code().unwrap() {
        out.push(code_point);
    }
    out
}
