//! Property tests for the cursor and error-protocol invariants, run across
//! every registered encoding with arbitrary (mostly malformed) input.

use alloc::vec::Vec;

use quickcheck::QuickCheck;

use crate::{Decoder, DecoderOptions, Encoding};

fn test_count() -> u64 {
    if is_ci::cached() { 1_000 } else { 200 }
}

/// Replace-mode and fatal-mode decoders consume identical bytes for
/// identical input, the character cursor rises by exactly one per step, and
/// decoding always ends with the byte cursor at the end of the buffer.
#[test]
fn replace_and_fatal_modes_stay_in_lock_step() {
    fn prop(bytes: Vec<u8>) -> bool {
        for encoding in Encoding::all() {
            let mut replace = encoding.decoder(&bytes, DecoderOptions::default());
            let mut fatal = encoding
                .decoder(&bytes, DecoderOptions { fatal: true, ..Default::default() });
            let mut steps = 0;
            loop {
                let lenient = replace.next_code().unwrap();
                let strict = fatal.next_code();
                let cursors_agree = replace.pos_char() == fatal.pos_char()
                    && replace.pos_byte() == fatal.pos_byte();
                if !cursors_agree {
                    return false;
                }
                match lenient {
                    None => {
                        if strict != Ok(None) {
                            return false;
                        }
                        break;
                    }
                    Some(0xFFFD) => {
                        if !matches!(strict, Ok(Some(0xFFFD)) | Err(_)) {
                            return false;
                        }
                    }
                    Some(code_point) => {
                        if strict != Ok(Some(code_point)) {
                            return false;
                        }
                    }
                }
                steps += 1;
                if replace.pos_char() != steps {
                    return false;
                }
            }
            if replace.pos_byte() != replace.len_byte() {
                return false;
            }
        }
        true
    }

    QuickCheck::new().tests(test_count()).quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// `seek(k)` followed by `seek(-k)` returns to the same position, even when
/// the traversed span contains malformed sequences.
#[test]
fn seeks_are_symmetric() {
    fn prop(bytes: Vec<u8>, a: usize, b: usize) -> bool {
        for encoding in Encoding::all() {
            let mut decoder = encoding.decoder(&bytes, DecoderOptions::default());
            let total = decoder.len_char();
            let forward = a % (total + 1);
            decoder.seek(forward.try_into().unwrap()).unwrap();
            let at = (decoder.pos_char(), decoder.pos_byte());
            let further = b % (total - forward + 1);
            if decoder.seek(further.try_into().unwrap()).unwrap() != 0 {
                return false;
            }
            let back = isize::try_from(further).unwrap();
            if decoder.seek(-back).unwrap() != 0 {
                return false;
            }
            if (decoder.pos_char(), decoder.pos_byte()) != at {
                return false;
            }
            // seeking past the start is clamped and reported
            decoder.rewind();
            if decoder.seek(-1).unwrap() != 1 {
                return false;
            }
        }
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, usize, usize) -> bool);
}

/// Peeking is idempotent and transactional: repeated peeks agree and the
/// cursor never moves, in either error mode.
#[test]
fn peeks_are_idempotent() {
    fn prop(bytes: Vec<u8>, skip: usize, fatal: bool) -> bool {
        for encoding in Encoding::all() {
            let options = DecoderOptions { fatal, ..Default::default() };
            let mut decoder = encoding.decoder(&bytes, options);
            let total = decoder.len_char();
            let skip = skip % (total + 1);
            if decoder.seek(skip.try_into().unwrap()).is_err() {
                // a fault while skipping still leaves a usable decoder
                continue;
            }
            let at = (decoder.pos_char(), decoder.pos_byte());
            let first = decoder.peek_codes(3);
            let second = decoder.peek_codes(3);
            if first != second {
                return false;
            }
            if (decoder.pos_char(), decoder.pos_byte()) != at {
                return false;
            }
        }
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, usize, bool) -> bool);
}

/// `len_char` is stable, cursor-preserving, and equal to the number of
/// `next_code` steps.
#[test]
fn char_length_matches_traversal() {
    fn prop(bytes: Vec<u8>) -> bool {
        for encoding in Encoding::all() {
            let mut decoder = encoding.decoder(&bytes, DecoderOptions::default());
            let expected = decoder.len_char();
            if decoder.pos_char() != 0 {
                return false;
            }
            let mut steps = 0;
            while decoder.next_code().unwrap().is_some() {
                steps += 1;
            }
            if steps != expected || decoder.len_char() != expected {
                return false;
            }
        }
        true
    }

    QuickCheck::new().tests(test_count()).quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Everything an encoding's tables can produce decodes back to itself —
/// except the handful of code points the encoders fold by design (the yen
/// sign and overline into their Roman bytes, U+2212 into U+FF0D, half-width
/// katakana into the jis0208 block, and GBK's bare euro byte).
#[test]
fn encoded_output_round_trips() {
    for encoding in Encoding::all().iter().filter(|e| e.has_encoder()) {
        let mut out = Vec::new();
        for code_point in sample_scalars(encoding.name()) {
            let folds = match encoding.name() {
                "Shift_JIS" | "EUC-JP" => matches!(code_point, 0xA5 | 0x203E | 0x2212),
                "ISO-2022-JP" => matches!(code_point, 0x2212 | 0xFF61..=0xFF9F),
                "GBK" => code_point == 0x20AC,
                _ => false,
            };
            if folds {
                continue;
            }
            let mut encoder = encoding.encoder(true).unwrap();
            out.clear();
            if encoder.encode(code_point, &mut out).is_err() {
                continue;
            }
            encoder.finish(&mut out);
            let mut decoder = encoding.decoder(&out, DecoderOptions::default());
            let decoded = decoder.next_code().unwrap();
            assert_eq!(
                decoded,
                Some(code_point),
                "{} round trip of U+{code_point:04X} via {out:?}",
                encoding.name(),
            );
            assert_eq!(decoder.next_code(), Ok(None));
        }
    }
}

/// A spread of scalars for the round-trip property: ASCII, the upper
/// single-byte range, representative table entries, and the odd corners
/// (EUDC, four-byte gb18030 ranges, supplementary planes).
fn sample_scalars(name: &str) -> Vec<u32> {
    let mut out: Vec<u32> = (0x20..0x7F).collect();
    out.extend(0xA0..0x100);
    out.extend([
        0x0411, 0x05D0, 0x0630, 0x2014, 0x20AC, 0x2212, 0x2500, 0x3000, 0x3042, 0x30AB,
        0x4E00, 0x4E04, 0x5341, 0x79FB, 0xAC00, 0xE000, 0xF8FF, 0xFF5E, 0xFF71, 0xFFE6,
    ]);
    if name == "gb18030" {
        out.extend([0x0080, 0x009F, 0xE7C7, 0x1_0000, 0x2_A6A5, 0x10_FFFF]);
    }
    if name == "UTF-8" {
        out.extend([0x07FF, 0x0800, 0xFFFD, 0x1_0000, 0x10_FFFF]);
    }
    if name == "x-user-defined" {
        out.extend(0xF780..0xF800);
    }
    out
}
