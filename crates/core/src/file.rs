// crates/core/src/file.rs
use std::fs::{File, OpenOptions, Permissions};
use std::io::{self, Read, Write};
use std::path::Path;

use log::debug;

use crate::error::{CopyError, HandleKind, Result};
use crate::options::CopyOptions;

/// Copy one regular file's bytes and permission bits with default options.
///
/// # Errors
/// See [`copy_file_with`].
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    copy_file_with(source, destination, &CopyOptions::default())
}

/// Copy one regular file's bytes and permission bits.
///
/// The destination is created, or truncated if it exists, and its mode is set
/// to the source mode regardless of the umask. Returns the number of bytes
/// copied.
///
/// # Errors
/// - [`CopyError::SourceUnavailable`] if the source cannot be opened, queried or read.
/// - [`CopyError::DestinationUnavailable`] if the destination cannot be created.
/// - [`CopyError::WriteError`] on a failed or short write.
/// - [`CopyError::CloseError`] if the destination cannot be flushed to disk.
pub fn copy_file_with(source: &Path, destination: &Path, options: &CopyOptions) -> Result<u64> {
    let mut src = File::open(source).map_err(|e| CopyError::source_unavailable(source, e))?;
    let permissions = src
        .metadata()
        .map_err(|e| CopyError::source_unavailable(source, e))?
        .permissions();

    let mut dst = create_destination(destination, &permissions)
        .map_err(|e| CopyError::destination_unavailable(destination, e))?;
    dst.set_permissions(permissions)
        .map_err(|e| CopyError::destination_unavailable(destination, e))?;

    let bytes = transfer(
        &mut src,
        &mut dst,
        source,
        destination,
        options.buffer_size,
    )?;

    if options.sync_files {
        dst.sync_all()
            .map_err(|e| CopyError::close_error(HandleKind::File, destination, e))?;
    }

    debug!(
        "copied {} -> {} ({bytes} bytes)",
        source.display(),
        destination.display()
    );
    Ok(bytes)
}

fn create_destination(path: &Path, permissions: &Permissions) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        opts.mode(permissions.mode());
    }
    #[cfg(not(unix))]
    let _ = permissions;
    opts.open(path)
}

/// Read-then-write loop over a fixed-size buffer until end of stream.
pub(crate) fn transfer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    source: &Path,
    destination: &Path,
    buffer_size: usize,
) -> Result<u64> {
    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut total = 0u64;

    loop {
        let nread = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::source_unavailable(source, e)),
        };
        write_chunk(writer, &buf[..nread]).map_err(|e| CopyError::write_error(destination, e))?;
        total += nread as u64;
    }

    Ok(total)
}

fn write_chunk<W: Write>(writer: &mut W, chunk: &[u8]) -> io::Result<()> {
    loop {
        match writer.write(chunk) {
            Ok(n) if n == chunk.len() => return Ok(()),
            Ok(n) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    format!("short write ({n} of {} bytes)", chunk.len()),
                ));
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}
