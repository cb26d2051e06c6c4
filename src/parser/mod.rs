//! Line reading and tokenizing for CSV input

pub mod tokenizer;

pub use tokenizer::{tokenize_line, LineTokenizer};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

/// Iterator over the physical lines of a reader.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is not part of
/// the yielded text. A leading UTF-8 byte-order mark is dropped.
pub struct LineReader<R> {
    reader: R,
    first: bool,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            first: true,
            done: false,
        }
    }

    fn read_line_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut saw_any = false;

        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(saw_any.then_some(line));
            }
            saw_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = available[pos];
                    line.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    if terminator == b'\r' {
                        let next = self.reader.fill_buf()?;
                        if next.first() == Some(&b'\n') {
                            self.reader.consume(1);
                        }
                    }
                    return Ok(Some(line));
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl LineReader<BufReader<File>> {
    /// Open `path` for line reading
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let bytes = match self.read_line_bytes() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        let mut line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                self.done = true;
                return Some(Err(io::Error::new(io::ErrorKind::InvalidData, err)));
            }
        };

        if std::mem::take(&mut self.first) && line.starts_with(UTF8_BOM) {
            line.drain(..UTF8_BOM.len());
        }

        Some(Ok(line))
    }
}
