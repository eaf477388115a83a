//! Async stream variants of the SNI entry codec, for
//! [`embedded_io_async`] transports.

use embedded_io::Error as _;
use embedded_io_async::{Read, ReadExactError, Write};

use crate::{NameType, ServerName, SniError};

/// Write one encoded ServerName entry to `writer`.
///
/// Transport errors are passed through unchanged as [`SniError::Io`];
/// no buffering or retry happens here.
pub async fn write_server_name<W: Write>(
    name: &ServerName<'_>,
    writer: &mut W,
) -> Result<(), SniError> {
    let len = name.name_data().len() as u16;
    let mut header = [0; 3];
    header[0] = name.name_type().0;
    header[1..].copy_from_slice(&len.to_be_bytes());

    writer
        .write_all(&header)
        .await
        .map_err(|e| SniError::Io(e.kind()))?;
    writer
        .write_all(name.name_data())
        .await
        .map_err(|e| SniError::Io(e.kind()))
}

/// Read one ServerName entry from `reader`, placing the name data in
/// `scratch`. The returned entry borrows from `scratch`, which must be
/// at least as long as the declared name length.
pub async fn read_server_name<'a, R: Read>(
    reader: &mut R,
    scratch: &'a mut [u8],
) -> Result<ServerName<'a>, SniError> {
    let mut header = [0; 3];
    reader.read_exact(&mut header).await.map_err(read_error)?;

    let name_type = NameType(header[0]);
    let name_len = usize::from(u16::from_be_bytes([header[1], header[2]]));
    if name_len == 0 {
        warn!("Rejecting ServerName entry with empty name_data");
        return Err(SniError::InvalidLength);
    }

    let name_data = scratch
        .get_mut(..name_len)
        .ok_or(SniError::InsufficientSpace)?;
    reader.read_exact(name_data).await.map_err(read_error)?;

    ServerName::new(name_type, name_data)
}

fn read_error<E: embedded_io::Error>(e: ReadExactError<E>) -> SniError {
    match e {
        ReadExactError::UnexpectedEof => {
            warn!("Input ended inside a ServerName entry");
            SniError::TruncatedInput
        }
        ReadExactError::Other(e) => SniError::Io(e.kind()),
    }
}
