use std::fs::File;
use std::io::{BufReader, Write};

use rand::RngCore;
use tokengen::{ReaderEntropy, Tokengen, TokengenError, DEFAULT_CHARSET};

#[test]
fn tokens_from_recorded_entropy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut data = vec![0u8; 1 << 16];
    rand::thread_rng().fill_bytes(&mut data);
    file.write_all(&data).unwrap();

    let tg = Tokengen::new(DEFAULT_CHARSET, 64).unwrap();
    let mut src = ReaderEntropy::new(BufReader::new(File::open(file.path()).unwrap()));
    for _ in 0..100 {
        let token = tg.generate_token_with(&mut src).unwrap();
        assert_eq!(token.len(), 64);
    }
}

#[test]
fn exhausted_file_surfaces_eof() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[1, 2, 3]).unwrap();

    let tg = Tokengen::new(DEFAULT_CHARSET, 32).unwrap();
    let mut src = ReaderEntropy::new(File::open(file.path()).unwrap());
    match tg.generate_token_with(&mut src) {
        Err(TokengenError::Entropy(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof)
        }
        other => panic!("expected entropy error, got {other:?}"),
    }
}
