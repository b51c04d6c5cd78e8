//! Zip fixtures for install tests.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Builds a stored (uncompressed) zip. `None` content means a directory entry.
pub fn build_zip(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
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

/// A small dictionary archive laid out like the real one.
pub fn dictionary_zip() -> Vec<u8> {
    let sys: Vec<u8> = (0u8..=250).cycle().take(40 * 1024).collect();
    build_zip(&[
        ("unidic/", None),
        ("unidic/dicrc", Some(b"; dictionary settings\n".as_slice())),
        ("unidic/sys.dic", Some(sys.as_slice())),
        ("unidic/matrix.bin", Some(b"matrix-costs".as_slice())),
        ("unidic/x.bin", Some(b"unwanted".as_slice())),
    ])
}

/// Same archive with one byte of `sys.dic` data flipped, so its CRC fails.
pub fn corrupt_dictionary_zip() -> Vec<u8> {
    let mut bytes = dictionary_zip();
    // Stored data of sys.dic starts right after its local header; the byte
    // pattern 0,1,2,... is unique to it.
    let needle: Vec<u8> = (0u8..32).collect();
    let pos = bytes
        .windows(needle.len())
        .position(|w| w == needle.as_slice())
        .unwrap();
    bytes[pos + 100] ^= 0xFF;
    bytes
}

/// Relative path -> file content for every file below `root`.
pub fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            walk(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).unwrap().to_string_lossy().into_owned();
            out.insert(rel, fs::read(&path).unwrap());
        }
    }
}
