use crate::{
    SniError,
    buffer::EncodeBuffer,
    parse_buffer::ParseBuffer,
};

/// SNI name type code point.
///
/// RFC 6066, Section 3: "For backward compatibility, all future data
/// structures associated with new NameTypes MUST begin with a 16-bit
/// length field. TLS MAY treat provided server names as opaque data and
/// pass the names and types to the application." The codec follows that
/// guidance and never branches on the tag, so unknown code points parse
/// and re-encode unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NameType(pub u8);

impl NameType {
    pub const HOST_NAME: NameType = NameType(0);

    pub fn parse(buf: &mut ParseBuffer) -> Result<Self, SniError> {
        Ok(Self(buf.read_u8()?))
    }

    pub fn encode(self, buf: &mut EncodeBuffer) -> Result<(), SniError> {
        buf.push(self.0)
    }
}

/// A single RFC 6066 ServerName entry.
///
/// Wire format:
/// ```text
/// struct {
///     NameType name_type;          // uint8
///     opaque   name_data<1..2^16-1>;
/// } ServerName;
/// ```
///
/// Immutable once built: construction validates the length bounds, so
/// encoding never has to re-check them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServerName<'a> {
    name_type: NameType,
    name_data: &'a [u8],
}

impl<'a> ServerName<'a> {
    /// Construct an entry from a tag and raw name data.
    ///
    /// This is the canonical constructor: the payload is carried as
    /// opaque bytes for every name type, so new code points need no
    /// bespoke construction path.
    pub fn new(name_type: NameType, name_data: &'a [u8]) -> Result<Self, SniError> {
        if name_data.is_empty() || name_data.len() > usize::from(u16::MAX) {
            return Err(SniError::InvalidLength);
        }
        Ok(Self {
            name_type,
            name_data,
        })
    }

    /// Construct an entry from text, for name types that are defined as
    /// carrying encoded text. Only [`NameType::HOST_NAME`] qualifies.
    pub fn from_text(name_type: NameType, text: &'a str) -> Result<Self, SniError> {
        if name_type != NameType::HOST_NAME {
            return Err(SniError::UnsupportedNameType);
        }
        Self::new(name_type, text.as_bytes())
    }

    /// Construct a host-name entry.
    ///
    /// RFC 6066 specifies ASCII encoding for host names (A-labels for
    /// internationalized names); its predecessor RFC 4366 specified
    /// UTF-8. No A-label conversion is attempted here, so callers with
    /// internationalized names must convert before constructing.
    pub fn host_name(text: &'a str) -> Result<Self, SniError> {
        Self::from_text(NameType::HOST_NAME, text)
    }

    pub fn name_type(&self) -> NameType {
        self.name_type
    }

    pub fn name_data(&self) -> &'a [u8] {
        self.name_data
    }

    /// View the name data of a host-name entry as text.
    ///
    /// Accepts any well-formed UTF-8 rather than just ASCII: for maximum
    /// compatibility with peers that generated names under RFC 4366,
    /// reads are lenient even though generation should be ASCII-only.
    pub fn host_name_text(&self) -> Result<&'a str, SniError> {
        if self.name_type != NameType::HOST_NAME {
            return Err(SniError::NotHostName);
        }
        core::str::from_utf8(self.name_data).map_err(|_| SniError::InvalidUtf8)
    }

    /// Parse one entry. A single linear pass with no branching on the
    /// name type; the length bounds are checked here and again by the
    /// constructor.
    pub fn parse(buf: &mut ParseBuffer<'a>) -> Result<ServerName<'a>, SniError> {
        let name_type = NameType::parse(buf)?;
        let name_len = buf.read_u16()?;
        if name_len == 0 {
            warn!("Rejecting ServerName entry with empty name_data");
            return Err(SniError::InvalidLength);
        }
        let name_data = buf.slice(usize::from(name_len))?.as_slice();
        Self::new(name_type, name_data)
    }

    /// Encode this entry, advancing `buf` by exactly `3 + name_data.len()`
    /// bytes.
    pub fn encode(&self, buf: &mut EncodeBuffer) -> Result<(), SniError> {
        self.name_type.encode(buf)?;
        buf.with_u16_length(|buf| buf.extend_from_slice(self.name_data))
    }
}
