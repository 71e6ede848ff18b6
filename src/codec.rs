//! The file codec: streams a file through the block cipher in 16-byte
//! chunks and owns the padding/truncation protocol.
//!
//! ## Wire format
//!
//! Ciphertext is a raw concatenation of independently encrypted 16-byte
//! blocks; no header, no IV, no authentication tag. Its length is always a
//! positive multiple of 16.
//!
//! Before encryption the plaintext is extended with `(16 - ((size + 8)
//! mod 16)) mod 16` zero bytes followed by the original file size as a
//! **little-endian** u64 trailer. Decryption undoes this by truncating the
//! output to the length the trailer records. The byte order is part of the
//! wire format: ciphertext is portable across hosts.
//!
//! Note that [`encrypt_file`] pads the *input* file in place, so the
//! plaintext file on disk grows by 8 to 23 bytes. This mirrors the
//! protocol's definition of padding as a file-level operation.

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::{Result, RijnError};
use crate::schedule::{RoundKeys, KEY_SIZE};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Size of the original-length trailer in bytes.
pub const TRAILER_SIZE: usize = 8;

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| RijnError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn create_output(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| RijnError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Read exactly one block, mapping an EOF in the middle of it to
/// [`RijnError::ShortRead`].
fn read_block(reader: &mut impl Read, block: &mut Block) -> Result<()> {
    reader.read_exact(block).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            RijnError::ShortRead
        } else {
            e.into()
        }
    })
}

/// Append the zero padding and length trailer to a file, in place.
///
/// Returns the padded size, which is always a positive multiple of 16 and
/// strictly greater than the original size.
pub fn pad_in_place(path: &Path) -> Result<u64> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| RijnError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let size = file.metadata()?.len();
    let padding = (BLOCK_SIZE as u64 - ((size + TRAILER_SIZE as u64) % BLOCK_SIZE as u64))
        % BLOCK_SIZE as u64;

    file.write_all(&[0u8; BLOCK_SIZE][..padding as usize])?;
    file.write_all(&size.to_le_bytes())?;

    Ok(size + padding + TRAILER_SIZE as u64)
}

/// Encrypt `input` into `output` with a 16-byte key.
///
/// Pads the input file in place first (see the module docs), then streams
/// it block by block. On any error the partial output file is removed, so
/// a failed run never leaves something that looks like valid ciphertext.
pub fn encrypt_file(input: &Path, output: &Path, key: &[u8; KEY_SIZE]) -> Result<()> {
    let padded_len = pad_in_place(input)?;
    let file = open_input(input)?;

    let result = encrypt_stream(file, padded_len, output, key);
    if result.is_err() {
        let _ = fs::remove_file(output);
    }
    result
}

fn encrypt_stream(input: File, padded_len: u64, output: &Path, key: &[u8; KEY_SIZE]) -> Result<()> {
    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(create_output(output)?);
    let keys = RoundKeys::derive(key);

    let mut block: Block = [0u8; BLOCK_SIZE];
    for _ in 0..padded_len / BLOCK_SIZE as u64 {
        read_block(&mut reader, &mut block)?;
        encrypt_block(&mut block, &keys);
        writer.write_all(&block)?;
    }

    writer.flush()?;
    Ok(())
}

/// Decrypt `input` into `output` with a 16-byte key.
///
/// The input length must be a positive multiple of 16; anything else is
/// rejected as [`RijnError::MalformedCiphertext`]. After all blocks are
/// written, the length trailer is read back from the output and the file
/// is truncated to the original size. On any error the partial output is
/// removed.
pub fn decrypt_file(input: &Path, output: &Path, key: &[u8; KEY_SIZE]) -> Result<()> {
    let file = open_input(input)?;
    let len = file.metadata()?.len();
    if len == 0 || len % BLOCK_SIZE as u64 != 0 {
        return Err(RijnError::MalformedCiphertext(len));
    }

    let result = decrypt_stream(file, len, output, key);
    if result.is_err() {
        let _ = fs::remove_file(output);
    }
    result
}

fn decrypt_stream(input: File, len: u64, output: &Path, key: &[u8; KEY_SIZE]) -> Result<()> {
    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(create_output(output)?);
    let keys = RoundKeys::derive(key);

    let mut block: Block = [0u8; BLOCK_SIZE];
    for _ in 0..len / BLOCK_SIZE as u64 {
        read_block(&mut reader, &mut block)?;
        decrypt_block(&mut block, &keys);
        writer.write_all(&block)?;
    }

    writer.flush()?;
    let mut file = writer
        .into_inner()
        .map_err(|e| RijnError::Io(e.into_error()))?;

    // The last 8 bytes of the decrypted stream are the length trailer
    file.seek(SeekFrom::End(-(TRAILER_SIZE as i64)))?;
    let mut trailer = [0u8; TRAILER_SIZE];
    file.read_exact(&mut trailer)?;
    let original_len = u64::from_le_bytes(trailer);

    // Truncating past the payload would grow the file with zeros; a valid
    // trailer can never claim more than what was decrypted.
    let available = len - TRAILER_SIZE as u64;
    if original_len > available {
        return Err(RijnError::InvalidTrailer {
            trailer: original_len,
            available,
        });
    }

    file.set_len(original_len)?;
    Ok(())
}
