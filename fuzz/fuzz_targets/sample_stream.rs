use honggfuzz::fuzz;
use std::io::Cursor;
use tokengen::{Charset, ReaderEntropy, Sampler};

// First two bytes pick the charset size, the third the token length; the
// rest is the entropy stream.
fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 3 {
                return;
            }
            let symbols = u16::from_be_bytes([data[0], data[1]]) as u32 + 1;
            let length = data[2] as usize;
            let chars: String = (0..symbols).filter_map(|i| char::from_u32(0x100 + i)).collect();
            let charset = Charset::new(&chars).unwrap();
            let sampler = Sampler::new(charset.clone(), length).unwrap();
            let mut source = ReaderEntropy::new(Cursor::new(&data[3..]));
            if let Ok(token) = sampler.sample(&mut source) {
                assert_eq!(token.chars().count(), length);
                assert!(token.chars().all(|c| charset.contains(c)));
            }
        });
    }
}
