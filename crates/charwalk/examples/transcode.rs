//! Transcodes a Shift_JIS byte stream to UTF-8 on stdout, substituting
//! HTML numeric references for anything the target cannot carry.

use charwalk::{Decoder, DecoderOptions, Encoding};

fn main() {
    let input: &[u8] = b"\x93\x8C\x8B\x9E\x82\xC6\x82\xCD Tokyo \x82\xC5\x82\xB7";

    let mut decoder = Encoding::decoder_for_label("shift_jis", input, DecoderOptions::default())
        .expect("shift_jis is a registered label");
    let mut encoder = Encoding::for_label("utf-8")
        .and_then(|e| e.encoder(false))
        .expect("utf-8 has an encoder");

    let mut out = Vec::new();
    while let Some(code_point) = decoder.next_code().expect("replace mode cannot fail") {
        encoder.encode(code_point, &mut out).expect("non-fatal mode cannot fail");
    }
    encoder.finish(&mut out);

    println!("{}", String::from_utf8_lossy(&out));
}
