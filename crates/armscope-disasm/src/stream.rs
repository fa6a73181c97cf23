//! Streaming disassembly over any [`Read`] source.
//!
//! [`Disassembly`] pulls 4-byte little-endian words from a reader, decodes
//! and renders each one, and yields a [`DisassembledWord`] per word. Words
//! that fail to decode or render still produce a line, with the
//! `.inst 0x%08x` placeholder as text.

use std::io::{self, ErrorKind, Read};

use armscope_core::{placeholder, FormatOptions, Instruction, RenderError};
use thiserror::Error;
use tracing::debug;

use crate::{decode, DecodeError};

/// Any failure met while streaming.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

/// One word of a stream with its rendered text.
#[derive(Debug)]
pub struct DisassembledWord {
    pub address: u64,
    pub word: u32,
    /// Assembly text, or the placeholder when `result` is an error.
    pub text: String,
    pub result: Result<Instruction, StreamError>,
}

impl DisassembledWord {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Iterator of disassembled words read from `R`.
///
/// A trailing partial word yields one [`DecodeError::Truncated`] and ends
/// the iteration, as does any other read error.
#[derive(Debug)]
pub struct Disassembly<R> {
    reader: R,
    address: u64,
    options: FormatOptions,
    finished: bool,
}

impl<R: Read> Disassembly<R> {
    /// Starts disassembling `reader` with its first word at `base`.
    pub fn new(reader: R, base: u64) -> Self {
        Self {
            reader,
            address: base,
            options: FormatOptions::default(),
            finished: false,
        }
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Address of the next word.
    pub fn address(&self) -> u64 {
        self.address
    }

    /// Fills `buf` as far as the reader allows, returning the byte count.
    fn fill(&mut self, buf: &mut [u8; 4]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    fn disassemble(&self, word: u32, address: u64) -> DisassembledWord {
        let rendered = decode(word, address)
            .map_err(StreamError::from)
            .and_then(|insn| Ok((insn.format(&self.options)?, insn)));
        match rendered {
            Ok((text, insn)) => DisassembledWord { address, word, text, result: Ok(insn) },
            Err(error) => {
                debug!(address, word, %error, "word not disassembled");
                DisassembledWord { address, word, text: placeholder(word), result: Err(error) }
            }
        }
    }
}

impl<R: Read> Iterator for Disassembly<R> {
    type Item = Result<DisassembledWord, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut buf = [0u8; 4];
        let filled = match self.fill(&mut buf) {
            Ok(filled) => filled,
            Err(error) => {
                self.finished = true;
                debug!(address = self.address, %error, "read failed");
                return Some(Err(error.into()));
            }
        };
        match filled {
            0 => {
                self.finished = true;
                None
            }
            4 => {
                let address = self.address;
                self.address = address.wrapping_add(Instruction::SIZE as u64);
                Some(Ok(self.disassemble(u32::from_le_bytes(buf), address)))
            }
            available => {
                self.finished = true;
                debug!(address = self.address, available, "truncated trailing word");
                Some(Err(DecodeError::truncated(self.address, Instruction::SIZE, available).into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn test_addresses_advance() {
        let bytes = words(&[0xd503201f, 0xd65f03c0]);
        let lines: Vec<_> = Disassembly::new(Cursor::new(bytes), 0x4000)
            .map(|line| line.expect("no stream error"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].address, lines[0].text.as_str()), (0x4000, "nop"));
        assert_eq!((lines[1].address, lines[1].text.as_str()), (0x4004, "ret"));
    }

    #[test]
    fn test_failures_render_placeholder() {
        let bytes = words(&[0x00000000, 0x91800000]);
        let lines: Vec<_> = Disassembly::new(Cursor::new(bytes), 0).flatten().collect();
        assert_eq!(lines[0].text, ".inst 0x00000000");
        assert!(matches!(lines[0].result, Err(StreamError::Render(RenderError::UndefinedOperation { .. }))));
        assert_eq!(lines[1].text, ".inst 0x91800000");
        assert!(matches!(lines[1].result, Err(StreamError::Decode(DecodeError::Reserved { .. }))));
    }

    #[test]
    fn test_trailing_partial_word() {
        let mut bytes = words(&[0xd503201f]);
        bytes.extend_from_slice(&[0x01, 0x02]);
        let mut stream = Disassembly::new(Cursor::new(bytes), 0x10);
        assert!(stream.next().is_some_and(|line| line.is_ok()));
        match stream.next() {
            Some(Err(StreamError::Decode(DecodeError::Truncated { address, available, .. }))) => {
                assert_eq!(address, 0x14);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_decimal_option() {
        let bytes = words(&[0x91000420]);
        let line = Disassembly::new(Cursor::new(bytes), 0)
            .with_options(FormatOptions::decimal())
            .next()
            .expect("one word")
            .expect("no stream error");
        assert_eq!(line.text, "add\tx0, x1, #1");
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn test_io_error_ends_stream() {
        let mut stream = Disassembly::new(Failing, 0);
        assert!(matches!(stream.next(), Some(Err(StreamError::Io(_)))));
        assert!(stream.next().is_none());
    }
}
