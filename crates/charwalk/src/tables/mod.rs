//! Static transformation tables for the legacy encodings, regenerated by
//! `tools/gen_tables.py`, plus the lookup helpers the engines use.

#[allow(clippy::all, clippy::pedantic)]
#[rustfmt::skip]
mod big5;
#[allow(clippy::all, clippy::pedantic)]
#[rustfmt::skip]
mod euc_kr;
#[allow(clippy::all, clippy::pedantic)]
#[rustfmt::skip]
mod gb18030;
#[allow(clippy::all, clippy::pedantic)]
#[rustfmt::skip]
mod jis;
#[allow(clippy::all, clippy::pedantic)]
#[rustfmt::skip]
mod katakana;
#[allow(clippy::all, clippy::pedantic)]
#[rustfmt::skip]
pub(crate) mod single_byte;

fn decode_u16(table: &[(u16, u16)], pointer: usize) -> Option<u32> {
    let key = u16::try_from(pointer).ok()?;
    table
        .binary_search_by_key(&key, |&(p, _)| p)
        .ok()
        .map(|i| u32::from(table[i].1))
}

fn encode_u16(table: &[(u16, u16)], code_point: u32) -> Option<usize> {
    let key = u16::try_from(code_point).ok()?;
    table
        .binary_search_by_key(&key, |&(cp, _)| cp)
        .ok()
        .map(|i| usize::from(table[i].1))
}

pub(crate) fn jis0208_decode(pointer: usize) -> Option<u32> {
    decode_u16(&jis::JIS0208, pointer)
}

/// The lowest jis0208 pointer encoding a code point.
pub(crate) fn jis0208_encode(code_point: u32) -> Option<usize> {
    encode_u16(&jis::JIS0208_ENCODE, code_point)
}

/// As [`jis0208_encode`], but never a pointer in the 8272..=8835 block the
/// Shift_JIS encoder skips; such code points use their later duplicate.
pub(crate) fn shift_jis_encode(code_point: u32) -> Option<usize> {
    let pointer = jis0208_encode(code_point)?;
    if (8272..=8835).contains(&pointer) {
        return encode_u16(&jis::SHIFT_JIS_OVERRIDES, code_point);
    }
    Some(pointer)
}

pub(crate) fn jis0212_decode(pointer: usize) -> Option<u32> {
    decode_u16(&jis::JIS0212, pointer)
}

pub(crate) fn euc_kr_decode(pointer: usize) -> Option<u32> {
    decode_u16(&euc_kr::EUC_KR, pointer)
}

pub(crate) fn euc_kr_encode(code_point: u32) -> Option<usize> {
    encode_u16(&euc_kr::EUC_KR_ENCODE, code_point)
}

pub(crate) fn gb18030_decode(pointer: usize) -> Option<u32> {
    gb18030::GB18030.get(pointer).map(|&cp| u32::from(cp))
}

pub(crate) fn gb18030_encode(code_point: u32) -> Option<usize> {
    encode_u16(&gb18030::GB18030_ENCODE, code_point)
}

/// Code point for a four-byte gb18030 pointer, by linear interpolation over
/// the ranges table. Pointer 7457 sits outside the table and is pinned.
pub(crate) fn gb18030_ranges_decode(pointer: u32) -> Option<u32> {
    if pointer == 7457 {
        return Some(0xE7C7);
    }
    if (39420..189_000).contains(&pointer) || pointer > 1_237_575 {
        return None;
    }
    if pointer >= 189_000 {
        return Some(0x1_0000 + pointer - 189_000);
    }
    let ranges = &gb18030::GB18030_RANGES;
    let i = match ranges.binary_search_by_key(&pointer, |&(p, _)| p) {
        Ok(i) => i,
        Err(i) => i - 1,
    };
    let (range_pointer, range_code_point) = ranges[i];
    Some(range_code_point + (pointer - range_pointer))
}

/// Four-byte gb18030 pointer for a code point the two-byte index lacks.
pub(crate) fn gb18030_ranges_encode(code_point: u32) -> u32 {
    if code_point == 0xE7C7 {
        return 7457;
    }
    if code_point >= 0x1_0000 {
        return 189_000 + code_point - 0x1_0000;
    }
    let ranges = &gb18030::GB18030_RANGES;
    let i = match ranges.binary_search_by_key(&code_point, |&(_, cp)| cp) {
        Ok(i) => i,
        Err(i) => i - 1,
    };
    let (range_pointer, range_code_point) = ranges[i];
    range_pointer + (code_point - range_code_point)
}

pub(crate) fn big5_decode(pointer: usize) -> Option<u32> {
    let key = u16::try_from(pointer).ok()?;
    big5::BIG5
        .binary_search_by_key(&key, |&(p, _)| p)
        .ok()
        .map(|i| big5::BIG5[i].1)
}

/// The four pointers that decode to a base scalar plus a combining mark.
pub(crate) fn big5_double(pointer: usize) -> Option<(u32, u32)> {
    let key = u16::try_from(pointer).ok()?;
    big5::BIG5_DOUBLES
        .iter()
        .find(|&&(p, _, _)| p == key)
        .map(|&(_, first, second)| (first, second))
}

pub(crate) fn big5_encode(code_point: u32) -> Option<usize> {
    big5::BIG5_ENCODE
        .binary_search_by_key(&code_point, |&(cp, _)| cp)
        .ok()
        .map(|i| usize::from(big5::BIG5_ENCODE[i].1))
}

/// Full-width equivalents for the half-width katakana block, used by the
/// Japanese encoders.
pub(crate) fn katakana_fold(code_point: u32) -> u32 {
    u32::from(katakana::KATAKANA[(code_point - 0xFF61) as usize])
}
