// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Minimal reader for uncompressed tar archives.
//
// Only enough of the format is implemented to index regular-file members
// and slice their contents back out by (offset, size). Links, directories
// and special files are rejected.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

use thiserror::Error;

/// Header block size; archives advance in multiples of this.
const BLOCK: u64 = 512;

/// One regular-file member of an archive. `offset` points at the first
/// content byte, not at the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarEntry {
    pub name: String,
    pub offset: u64,
    pub size: u64,
}

#[derive(Debug, Error)]
pub enum TarError {
    #[error("failed to open the file: {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("only normal file entries are supported (type flag {type_flag:#x})")]
    UnsupportedEntryType { type_flag: u8 },
    #[error("invalid metadata: the entry extends past the end of the archive")]
    TruncatedEntry,
    #[error("the requested range of {path} is not valid UTF-8")]
    NonUtf8 { path: String },
}

/// Entry name: the NUL-terminated first 100 bytes of the header.
fn entry_name(header: &[u8]) -> &[u8] {
    let field = &header[..100];
    match field.iter().position(|&b| b == 0) {
        Some(end) => &field[..end],
        None => field,
    }
}

/// Content size: 11 octal digits at header offset 124. Bytes that are not
/// digits greater than `'0'` contribute nothing, matching the historical
/// tolerance for NUL- and space-padded size fields.
fn entry_size(header: &[u8]) -> u64 {
    header[124..135].iter().fold(0, |acc, &b| {
        let acc = acc * 8;
        if b > b'0' { acc + u64::from(b - b'0') } else { acc }
    })
}

/// Type flag at header offset 156: regular files only.
fn check_entry_type(type_flag: u8) -> Result<(), TarError> {
    match type_flag {
        b'0' | 0 => Ok(()),
        other => Err(TarError::UnsupportedEntryType { type_flag: other }),
    }
}

fn padded(size: u64) -> u64 {
    match size % BLOCK {
        0 => size,
        rem => size + BLOCK - rem,
    }
}

/// Indexes the regular-file members of an archive held in memory.
///
/// Members with an empty name or zero size (notably the terminating zero
/// blocks) are skipped.
pub fn parse_tar_bytes(data: &[u8]) -> Result<Vec<TarEntry>, TarError> {
    let len = data.len() as u64;
    let mut entries = Vec::new();
    let mut offset: u64 = 0;
    while offset + BLOCK < len {
        let header = &data[offset as usize..(offset + BLOCK) as usize];
        check_entry_type(header[156])?;
        let name = entry_name(header);
        let size = entry_size(header);
        if offset + BLOCK + size > len {
            return Err(TarError::TruncatedEntry);
        }
        if size != 0 && !name.is_empty() {
            entries.push(TarEntry {
                name: String::from_utf8_lossy(name).into_owned(),
                offset: offset + BLOCK,
                size,
            });
        }
        offset += BLOCK + padded(size);
    }
    Ok(entries)
}

/// Indexes the regular-file members of an archive on disk.
///
/// Reads one header block at a time and seeks past the padded content, so
/// the archive is never loaded into memory.
pub fn parse_tar_file(path: &str) -> Result<Vec<TarEntry>, TarError> {
    let mut file = open(path)?;
    let file_size = file
        .metadata()
        .map_err(|source| TarError::Read { path: path.to_string(), source })?
        .len();

    let mut header = [0u8; BLOCK as usize];
    let mut entries = Vec::new();
    let mut offset: u64 = 0;
    while offset + BLOCK < file_size {
        file.read_exact(&mut header)
            .map_err(|source| TarError::Read { path: path.to_string(), source })?;
        check_entry_type(header[156])?;
        let name = entry_name(&header);
        let size = entry_size(&header);
        if offset + BLOCK + size > file_size {
            return Err(TarError::TruncatedEntry);
        }
        if size != 0 && !name.is_empty() {
            entries.push(TarEntry {
                name: String::from_utf8_lossy(name).into_owned(),
                offset: offset + BLOCK,
                size,
            });
        }
        let skip = padded(size);
        file.seek(SeekFrom::Current(skip as i64))
            .map_err(|source| TarError::Read { path: path.to_string(), source })?;
        offset += BLOCK + skip;
    }
    Ok(entries)
}

/// Reads exactly `size` bytes starting at `offset`.
pub fn load_bytes(path: &str, offset: u64, size: u64) -> Result<Vec<u8>, TarError> {
    let mut file = open(path)?;
    if offset > 0 {
        file.seek(SeekFrom::Start(offset))
            .map_err(|source| TarError::Read { path: path.to_string(), source })?;
    }
    let mut buf = vec![0u8; size as usize];
    file.read_exact(&mut buf)
        .map_err(|source| TarError::Read { path: path.to_string(), source })?;
    Ok(buf)
}

/// Reads exactly `size` bytes starting at `offset` and decodes them as UTF-8.
pub fn load_text(path: &str, offset: u64, size: u64) -> Result<String, TarError> {
    let bytes = load_bytes(path, offset, size)?;
    String::from_utf8(bytes).map_err(|_| TarError::NonUtf8 { path: path.to_string() })
}

fn open(path: &str) -> Result<File, TarError> {
    File::open(path).map_err(|source| TarError::Open { path: path.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn header(name: &str, size: u64, type_flag: u8) -> [u8; 512] {
        let mut block = [0u8; 512];
        block[..name.len()].copy_from_slice(name.as_bytes());
        let octal = format!("{:011o}", size);
        block[124..135].copy_from_slice(octal.as_bytes());
        block[156] = type_flag;
        block
    }

    fn archive(members: &[(&str, &[u8])]) -> Vec<u8> {
        let mut data = Vec::new();
        for (name, content) in members {
            data.extend_from_slice(&header(name, content.len() as u64, b'0'));
            data.extend_from_slice(content);
            let end = data.len().next_multiple_of(512);
            data.resize(end, 0);
        }
        // terminating zero blocks
        data.resize(data.len() + 1024, 0);
        data
    }

    #[test]
    fn test_parse_tar_bytes_indexes_members() {
        let data = archive(&[("a.txt", b"hello"), ("dir/b.bin", &[7u8; 700])]);
        let entries = parse_tar_bytes(&data).unwrap();

        assert_eq!(
            entries,
            vec![
                TarEntry { name: "a.txt".to_string(), offset: 512, size: 5 },
                // second header starts after 512 (header) + 512 (padded "hello")
                TarEntry { name: "dir/b.bin".to_string(), offset: 1536, size: 700 },
            ]
        );
    }

    #[test]
    fn test_parse_tar_bytes_skips_zero_blocks() {
        let data = archive(&[("only", b"x")]);
        let entries = parse_tar_bytes(&data).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_parse_tar_bytes_empty_archive() {
        let entries = parse_tar_bytes(&[0u8; 1024]).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_tar_bytes_rejects_directories() {
        let mut data = header("subdir/", 0, b'5').to_vec();
        data.resize(data.len() + 1024, 0);
        let err = parse_tar_bytes(&data).unwrap_err();
        assert!(matches!(err, TarError::UnsupportedEntryType { type_flag: b'5' }));
    }

    #[test]
    fn test_parse_tar_bytes_rejects_truncated_content() {
        let mut data = header("big", 600, b'0').to_vec();
        data.resize(data.len() + 100, 7);
        let err = parse_tar_bytes(&data).unwrap_err();
        assert!(matches!(err, TarError::TruncatedEntry));
    }

    #[test]
    fn test_entry_size_ignores_padding_bytes() {
        // NUL-padded size field: only the trailing digits count
        let mut block = header("f", 0, b'0');
        let mut field = [0u8; 11];
        field[9] = b'1';
        field[10] = b'2';
        block[124..135].copy_from_slice(&field);
        assert_eq!(entry_size(&block), 0o12);
    }

    #[test]
    fn test_parse_tar_file_matches_bytes() {
        let data = archive(&[("a.txt", b"hello"), ("b.txt", b"world!")]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        let from_file = parse_tar_file(file.path().to_str().unwrap()).unwrap();
        let from_bytes = parse_tar_bytes(&data).unwrap();
        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn test_parse_tar_file_missing_path() {
        let err = parse_tar_file("/nonexistent/archive.tar").unwrap_err();
        assert!(matches!(err, TarError::Open { .. }));
    }

    #[test]
    fn test_load_bytes_slices_member_content() {
        let data = archive(&[("a.txt", b"hello"), ("b.txt", b"world!")]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        let path = file.path().to_str().unwrap();

        let entries = parse_tar_file(path).unwrap();
        let first = load_bytes(path, entries[0].offset, entries[0].size).unwrap();
        let second = load_text(path, entries[1].offset, entries[1].size).unwrap();
        assert_eq!(first, b"hello");
        assert_eq!(second, "world!");
    }

    #[test]
    fn test_load_text_rejects_non_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let err = load_text(file.path().to_str().unwrap(), 0, 3).unwrap_err();
        assert!(matches!(err, TarError::NonUtf8 { .. }));
    }
}
