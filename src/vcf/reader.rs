//! Streaming VCF reader
//!
//! Parses the header once, then yields variants one data line at a time.
//! The input is consumed exactly once in file order.

use crate::core::{open_input, HeaderParseError, LineIterator, Result, UpdError};
use crate::vcf::header::VcfHeader;
use crate::vcf::record::Variant;
use std::io::BufRead;
use std::path::Path;

/// A VCF input stream with its parsed header
pub struct VcfReader<R: BufRead> {
    lines: LineIterator<R>,
    header: VcfHeader,
}

impl<R: BufRead> std::fmt::Debug for VcfReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcfReader")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl VcfReader<Box<dyn BufRead>> {
    /// Open a VCF file, transparently decompressing gzip/bzip2 input
    pub fn open(path: &Path) -> Result<Self> {
        let reader = open_input(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UpdError::Header(HeaderParseError::FileNotFound(path.to_path_buf()))
            } else {
                UpdError::Io(e)
            }
        })?;
        Self::new(reader)
    }
}

impl<R: BufRead> VcfReader<R> {
    /// Parse the header from a reader; leaves the stream at the first
    /// data line
    pub fn new(reader: R) -> Result<Self> {
        let mut lines = LineIterator::new(reader);
        let mut header = VcfHeader::new();

        loop {
            let line_number = lines.line_number() + 1;
            match lines.next_line() {
                Some(Ok(line)) => {
                    if line.starts_with("##") {
                        header.add_meta_line(line, line_number)?;
                    } else if line.starts_with('#') {
                        header.set_sample_line(line, line_number)?;
                        break;
                    } else {
                        // Data line before the #CHROM header
                        return Err(UpdError::Header(HeaderParseError::NoSampleHeader));
                    }
                }
                Some(Err(e)) => return Err(UpdError::Io(e)),
                None => return Err(UpdError::Header(HeaderParseError::NoSampleHeader)),
            }
        }

        Ok(Self { lines, header })
    }

    pub fn header(&self) -> &VcfHeader {
        &self.header
    }

    /// Decode the next data line, skipping blank lines
    pub fn next_variant(&mut self) -> Option<Result<Variant>> {
        loop {
            let line_number = self.lines.line_number() + 1;
            match self.lines.next_line() {
                Some(Ok(line)) => {
                    if line.is_empty() {
                        continue;
                    }
                    return Some(
                        Variant::parse(line, line_number).map_err(UpdError::Record),
                    );
                }
                Some(Err(e)) => return Some(Err(UpdError::Io(e))),
                None => return None,
            }
        }
    }
}

impl<R: BufRead> Iterator for VcfReader<R> {
    type Item = Result<Variant>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_variant()
    }
}
