#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use rfidwire::ops::{key, mifare, system};
use rfidwire::protocol::DialectConfig;
use rfidwire::status;
use rfidwire::test_support::{dle_reply_script, md_reply_frame};
use rfidwire::transport::MockTransport;
use rfidwire::types::{DeviceAddress, MifareKey, MifareMode, SerialNumber, SnrControl};
use rfidwire::Error;

#[test]
fn key_absent_reports_no_key_without_io() -> Result<()> {
    let mut mock = MockTransport::new();
    mock.set_key_present(false);
    let (mut dev, line) = common::shared_device(mock, DialectConfig::dle());

    assert!(!key::key_present(&mut dev)?);
    let err = key::write_key_data(&mut dev, 40, &[1, 2, 3, 4]).unwrap_err();
    assert_eq!(err.status_code(), u32::from(status::EKS_NO_KEY));
    assert!(line.with(|m| m.log.is_empty()));
    Ok(())
}

#[test]
fn write_then_read_key_data() -> Result<()> {
    let mut mock = MockTransport::new();
    for chunk in dle_reply_script(&common::fixtures::status_reply(40, 0x00)) {
        mock.queue_reply(chunk);
    }
    let mut read = vec![0x4C, 0x01, 0x00, 40, 4];
    read.extend_from_slice(&[9, 8, 7, 6]);
    for chunk in dle_reply_script(&rfidwire::protocol::LogicalMessage::new(0x52, read)) {
        mock.queue_reply(chunk);
    }
    let (mut dev, line) = common::shared_device(mock, DialectConfig::dle());

    key::write_key_data(&mut dev, 40, &[9, 8, 7, 6])?;
    assert_eq!(key::read_key_range(&mut dev, 40, 4)?, vec![9, 8, 7, 6]);

    let sent = line.with(|m| m.sent());
    assert_eq!(sent.len(), 8);
    // write command body: len, 'T', 'P', bank, offset, length, data
    assert_eq!(&sent[1][..7], &[0x0B, 0x54, 0x50, 0x01, 0x00, 40, 4]);
    Ok(())
}

#[test]
fn value_operations_surface_card_errors() -> Result<()> {
    let reader = DeviceAddress::new(2);
    let mut mock = MockTransport::new();
    mock.queue_reply(md_reply_frame(0x02, 0x00, &[100, 0, 0, 0]));
    mock.queue_reply(md_reply_frame(0x02, 0x00, &[90, 0, 0, 0]));
    mock.queue_reply(md_reply_frame(0x02, 0x04, &[0x02]));
    let (mut dev, _line) = common::shared_device(mock, DialectConfig::multi_drop());

    let key = MifareKey::DEFAULT;
    let mode = MifareMode::new(0);
    assert_eq!(mifare::init_value(&mut dev, reader, mode, 1, &key, 100)?, vec![100, 0, 0, 0]);
    assert_eq!(mifare::decrement(&mut dev, reader, mode, 1, &key, 10)?, vec![90, 0, 0, 0]);

    let err = mifare::increment(&mut dev, reader, mode, 1, &key, 5).unwrap_err();
    assert!(matches!(
        err,
        Error::DeviceStatus {
            code: 0x04,
            detail: Some(0x02)
        }
    ));
    assert_eq!(err.status_code(), 4);
    assert!(!dev.is_stale());
    Ok(())
}

#[test]
fn reader_management() -> Result<()> {
    let mut mock = MockTransport::new();
    mock.queue_reply(md_reply_frame(0x05, 0x00, &[0x05]));
    mock.queue_reply(md_reply_frame(0x05, 0x00, &[]));
    mock.queue_reply(md_reply_frame(0x05, 0x00, &[1, 2, 3, 4, 5, 6, 7, 8]));
    let (mut dev, _line) = common::shared_device(mock, DialectConfig::multi_drop());

    let moved = system::set_address(&mut dev, DeviceAddress::BROADCAST, DeviceAddress::new(5))?;
    assert_eq!(moved, DeviceAddress::new(5));
    system::set_baud_rate(&mut dev, moved, 0)?;
    assert_eq!(
        system::get_serial_number(&mut dev, moved)?,
        SerialNumber::from_bytes([1, 2, 3, 4, 5, 6, 7, 8])
    );
    Ok(())
}

#[test]
fn card_uid() -> Result<()> {
    let mut mock = MockTransport::new();
    mock.queue_reply(md_reply_frame(0x01, 0x00, &[0x04, 0xA2, 0x3B, 0x91]));
    let (mut dev, _line) = common::shared_device(mock, DialectConfig::multi_drop());
    let uid = mifare::get_snr(&mut dev, DeviceAddress::new(1), MifareMode::new(0x26), SnrControl::HALT)?;
    assert_eq!(rfidwire::bytes_to_hex(&uid), "04a23b91");
    Ok(())
}

#[test]
fn status_codes_round_trip() {
    for code in [1u32, 3, 4, 5, 7] {
        let err = status::from_code(code).unwrap();
        assert_eq!(err.status_code(), code);
    }
    assert!(matches!(status::from_code(2), Some(Error::ChecksumMismatch { .. })));
}
