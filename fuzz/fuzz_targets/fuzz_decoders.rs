#![no_main]
//! Drives arbitrary bytes through every registered decoder and checks the
//! cursor invariants: one character per step, agreement between replace and
//! fatal modes, transactional peeks, and seek symmetry.

use charwalk::{Decoder, DecoderOptions, Encoding};
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 3; // encoding selector + two seek seeds

fn walk(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let encodings = Encoding::all();
    let encoding = encodings[usize::from(data[0]) % encodings.len()];
    let seed_a = usize::from(data[1]);
    let seed_b = usize::from(data[2]);
    let bytes = &data[HEADER..];

    let mut replace = encoding.decoder(bytes, DecoderOptions::default());
    let mut fatal = encoding.decoder(
        bytes,
        DecoderOptions { fatal: true, allow_surrogates: seed_b & 1 != 0 },
    );

    let mut steps = 0;
    loop {
        let lenient = replace.next_code().expect("replace mode never fails");
        let _ = fatal.next_code();
        assert_eq!(replace.pos_char(), fatal.pos_char());
        assert_eq!(replace.pos_byte(), fatal.pos_byte());
        if lenient.is_none() {
            break;
        }
        steps += 1;
        assert_eq!(replace.pos_char(), steps);
    }
    assert_eq!(replace.pos_byte(), bytes.len());
    assert_eq!(replace.len_char(), steps);

    // transactional peeks at an arbitrary interior position
    replace.rewind();
    let skip = seed_a % (steps + 1);
    replace.seek(skip as isize).expect("replace mode never fails");
    let at = (replace.pos_char(), replace.pos_byte());
    assert_eq!(replace.peek_codes(4), replace.peek_codes(4));
    assert_eq!((replace.pos_char(), replace.pos_byte()), at);

    // seek symmetry from that position
    let further = seed_b % (steps - skip + 1);
    replace.seek(further as isize).expect("replace mode never fails");
    replace.seek(-(further as isize)).expect("backward seeks never fail");
    assert_eq!((replace.pos_char(), replace.pos_byte()), at);
}

fuzz_target!(|data: &[u8]| walk(data));
