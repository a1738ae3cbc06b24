//! Sources of cryptographically secure random bytes.
//!
//! The sampler only needs one capability: fill a buffer completely or fail.

use std::io::{self, Read};

use rand::rngs::OsRng;
use rand::RngCore;

/// Supplies random bytes to the sampler.
///
/// Implementations must either fill all of `buf` or return an error. A
/// failure aborts token generation; the sampler never retries it.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        (**self).fill(buf)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        (**self).fill(buf)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        OsRng.try_fill_bytes(buf).map_err(io::Error::from)
    }
}

/// Adapts any [`RngCore`]. Only as secure as the wrapped generator; seeded
/// generators are meant for reproducible tests.
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

impl<R: RngCore> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: RngCore> EntropySource for RngEntropy<R> {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.0.try_fill_bytes(buf).map_err(io::Error::from)
    }
}

/// Reads entropy from a byte stream such as `/dev/urandom` or a recorded
/// file. Running out of input is an `UnexpectedEof` error.
#[derive(Debug)]
pub struct ReaderEntropy<R> {
    inner: R,
}

impl<R: Read> ReaderEntropy<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> EntropySource for ReaderEntropy<R> {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.inner.read_exact(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_fills_in_order() {
        let mut src = ReaderEntropy::new(Cursor::new(vec![1u8, 2, 3, 4, 5]));
        let mut buf = [0u8; 3];
        src.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        let mut rest = [0u8; 2];
        src.fill(&mut rest).unwrap();
        assert_eq!(rest, [4, 5]);
    }

    #[test]
    fn reader_short_read_is_error() {
        let mut src = ReaderEntropy::new(Cursor::new(vec![1u8, 2]));
        let mut buf = [0u8; 3];
        let err = src.fill(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn os_entropy_fills_buffer() {
        let mut buf = [0u8; 64];
        OsEntropy.fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn boxed_source_forwards() {
        let mut src: Box<dyn EntropySource> = Box::new(ReaderEntropy::new(Cursor::new(vec![9u8])));
        let mut buf = [0u8; 1];
        src.fill(&mut buf).unwrap();
        assert_eq!(buf, [9]);
    }
}
