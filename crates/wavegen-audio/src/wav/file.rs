//! Writing WAV files to disk.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::result::WavResult;
use super::writer::{prepare, write_wav};

/// Encodes a buffer and writes it to `path`.
///
/// Bytes go to a temporary file in the destination directory, which is
/// renamed over `path` only once everything has been written and flushed. A
/// failed call therefore never leaves a file (partial or otherwise) at
/// `path`; the temporary file is removed when its handle drops.
///
/// # Arguments
/// * `buffer` - Normalized samples, consumed
/// * `format` - Channel count and sample rate
/// * `path` - Destination file
///
/// # Returns
/// Metadata for the written file; `wav_data` is left empty.
///
/// # Errors
/// [`AudioError::InvalidParameters`] if the buffer does not fit the format
/// (checked before the filesystem is touched), [`AudioError::Io`] if the
/// destination cannot be created or written.
pub fn encode_to_file(
    buffer: SampleBuffer,
    format: WavFormat,
    path: impl AsRef<Path>,
) -> AudioResult<WavResult> {
    let path = path.as_ref();
    let (header, pcm) = prepare(buffer, &format)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".wavegen-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        // Same mode File::create would use, still subject to the umask.
        builder.permissions(Permissions::from_mode(0o666));
    }
    let mut temp = builder.tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write_wav(&mut writer, &header, &pcm)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| AudioError::Io(e.error))?;

    Ok(WavResult::from_parts(&header, &pcm, Vec::new()))
}
