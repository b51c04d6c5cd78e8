//! Zip fixtures for unit tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// Builds an uncompressed zip in memory. `None` content marks a directory entry.
pub(crate) fn build_zip(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, content) in entries {
        match content {
            Some(data) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            None => writer.add_directory(*name, options).unwrap(),
        }
    }
    writer.finish().unwrap().into_inner()
}

/// Flips one byte inside the first occurrence of `needle` (stored member data).
pub(crate) fn flip_byte_of(bytes: &mut [u8], needle: &[u8]) {
    let pos = bytes
        .windows(needle.len())
        .position(|w| w == needle)
        .expect("payload present in archive");
    bytes[pos + needle.len() / 2] ^= 0xFF;
}
