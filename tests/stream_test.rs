use std::sync::Once;

use embedded_sni::{NameType, ServerName, SniError, asynch, blocking};

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| {
        env_logger::init();
    });
}

const A_COM: [u8; 8] = [0x00, 0x00, 0x05, 0x61, 0x2E, 0x63, 0x6F, 0x6D];

#[test]
fn test_blocking_write() {
    setup();
    let name = ServerName::host_name("a.com").unwrap();

    let mut out = [0; 16];
    let mut writer = &mut out[..];
    blocking::write_server_name(&name, &mut writer).unwrap();
    let written = 16 - writer.len();

    assert_eq!(A_COM, out[..written]);
}

#[test]
fn test_blocking_read() {
    setup();
    let mut reader = &A_COM[..];
    let mut scratch = [0; 16];
    let name = blocking::read_server_name(&mut reader, &mut scratch).unwrap();

    assert_eq!(NameType::HOST_NAME, name.name_type());
    assert_eq!("a.com", name.host_name_text().unwrap());
    assert!(reader.is_empty());
}

#[test]
fn test_blocking_read_truncated() {
    setup();
    // Declares 5 bytes of name data, supplies 2.
    let mut reader = &[0x00u8, 0x00, 0x05, 0x41, 0x42][..];
    let mut scratch = [0; 16];
    let result = blocking::read_server_name(&mut reader, &mut scratch);

    assert_eq!(Err(SniError::TruncatedInput), result);
}

#[test]
fn test_blocking_read_empty_name() {
    setup();
    let mut reader = &[0x00u8, 0x00, 0x00][..];
    let mut scratch = [0; 16];
    let result = blocking::read_server_name(&mut reader, &mut scratch);

    assert_eq!(Err(SniError::InvalidLength), result);
}

#[test]
fn test_blocking_read_scratch_too_small() {
    setup();
    let mut reader = &A_COM[..];
    let mut scratch = [0; 4];
    let result = blocking::read_server_name(&mut reader, &mut scratch);

    assert_eq!(Err(SniError::InsufficientSpace), result);
}

#[test]
fn test_blocking_round_trip_opaque() {
    setup();
    let name = ServerName::new(NameType(0x7F), &[0x01, 0x02, 0x03]).unwrap();

    let mut out = [0; 16];
    let mut writer = &mut out[..];
    blocking::write_server_name(&name, &mut writer).unwrap();
    let written = 16 - writer.len();

    let mut reader = &out[..written];
    let mut scratch = [0; 16];
    let decoded = blocking::read_server_name(&mut reader, &mut scratch).unwrap();

    assert_eq!(name, decoded);
}

#[tokio::test]
async fn test_async_write() {
    setup();
    let name = ServerName::host_name("a.com").unwrap();

    let mut out = [0; 16];
    let mut writer = &mut out[..];
    asynch::write_server_name(&name, &mut writer).await.unwrap();
    let written = 16 - writer.len();

    assert_eq!(A_COM, out[..written]);
}

#[tokio::test]
async fn test_async_read() {
    setup();
    let mut reader = &A_COM[..];
    let mut scratch = [0; 16];
    let name = asynch::read_server_name(&mut reader, &mut scratch)
        .await
        .unwrap();

    assert_eq!(NameType::HOST_NAME, name.name_type());
    assert_eq!(b"a.com", name.name_data());
}

#[tokio::test]
async fn test_async_read_truncated() {
    setup();
    let mut reader = &[0x00u8, 0x00, 0x05, 0x41, 0x42][..];
    let mut scratch = [0; 16];
    let result = asynch::read_server_name(&mut reader, &mut scratch).await;

    assert_eq!(Err(SniError::TruncatedInput), result);
}
