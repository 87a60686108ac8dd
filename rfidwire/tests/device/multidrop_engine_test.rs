#[path = "../common/mod.rs"]
mod common;

use rfidwire::ops::mifare;
use rfidwire::protocol::{Command, DialectConfig, MultiDropConfig, RetryPolicy};
use rfidwire::test_support::md_reply_frame;
use rfidwire::transport::{MockTransport, Op};
use rfidwire::types::{DeviceAddress, MifareKey, MifareMode};
use rfidwire::{DeviceBuilder, Error, Response, ms};

const READER: DeviceAddress = DeviceAddress::new(0x01);

#[test]
fn zero_block_read_is_rejected_before_io() {
    let (mut dev, line) = common::shared_device(MockTransport::new(), DialectConfig::multi_drop());
    let err = mifare::read_blocks(&mut dev, READER, MifareMode::new(0), 4, 0, None).unwrap_err();
    assert!(matches!(err, Error::OutOfRange(_)));
    assert_eq!(err.status_code(), 1);
    assert!(line.with(|m| m.log.is_empty()));
}

#[test]
fn reply_from_another_reader_is_an_address_mismatch() {
    let mut mock = MockTransport::new();
    mock.queue_reply(md_reply_frame(0x07, 0x00, &common::fixtures::sample_block()));
    let (mut dev, _line) = common::shared_device(mock, DialectConfig::multi_drop());

    let err = mifare::read_blocks(
        &mut dev,
        READER,
        MifareMode::new(0),
        4,
        1,
        Some(&MifareKey::DEFAULT),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::AddressMismatch {
            sent: 0x01,
            received: 0x07
        }
    ));
    assert_eq!(err.status_code(), 5);
}

#[test]
fn bulk_read_waits_longer() {
    let (mut dev, line) = common::shared_device(MockTransport::new(), DialectConfig::multi_drop());
    let err = mifare::read_blocks(&mut dev, READER, MifareMode::new(0), 0, 15, None).unwrap_err();
    assert!(matches!(err, Error::Timeout));
    // base 2000 + (15 >> 4) * 2000 + 30
    assert_eq!(line.with(|m| m.elapsed), ms(2030));
    assert!(dev.is_stale());
}

#[test]
fn write_wait_scales_per_block() {
    let (mut dev, line) = common::shared_device(MockTransport::new(), DialectConfig::multi_drop());
    let data = vec![0u8; 3 * 16];
    let _ = mifare::write_blocks(
        &mut dev,
        READER,
        MifareMode::new(0),
        4,
        3,
        Some(&MifareKey::DEFAULT),
        &data,
    );
    assert_eq!(line.with(|m| m.elapsed), ms(8000));
}

#[test]
fn large_reply_is_read_in_chunks() {
    let block_data: Vec<u8> = (0u8..=255).cycle().take(12 * 16).collect();
    let mut mock = MockTransport::new();
    mock.queue_reply(md_reply_frame(0x01, 0x00, &block_data));
    let cfg = MultiDropConfig {
        max_transfer: 64,
        ..MultiDropConfig::default()
    };
    let (mut dev, line) = common::shared_device(mock, DialectConfig::MultiDrop(cfg));

    let data = mifare::read_blocks(
        &mut dev,
        READER,
        MifareMode::new(0),
        0,
        12,
        Some(&MifareKey::DEFAULT),
    )
    .unwrap();
    assert_eq!(data, block_data);

    let reads: Vec<usize> = line.with(|m| {
        m.log
            .iter()
            .filter_map(|op| match op {
                Op::Receive { len, .. } => Some(*len),
                _ => None,
            })
            .collect()
    });
    assert_eq!(reads[0], 3);
    assert!(reads[1..].iter().all(|&n| n <= 64));
    assert_eq!(reads.iter().sum::<usize>(), block_data.len() + 6);
}

#[test]
fn retry_policy_from_builder_applies() {
    let mut mock = MockTransport::new();
    let mut bad = md_reply_frame(0x01, 0x00, b"V2.0");
    let n = bad.len();
    bad[n - 2] ^= 0x80;
    mock.queue_reply(bad);
    mock.queue_reply(md_reply_frame(0x01, 0x00, b"V2.0"));
    let line = mock.shared();

    let mut dev = DeviceBuilder::new(DialectConfig::multi_drop())
        .with_transport(line.boxed())
        .with_policy(RetryPolicy::attempts(2).with_checksum_retry())
        .build()
        .unwrap();

    assert_eq!(
        dev.transact(&Command::GetVersion, Some(READER)).unwrap(),
        Response::Version("V2.0".into())
    );
    assert_eq!(line.with(|m| m.sent().len()), 2);
    assert_eq!(line.with(|m| m.purge_count()), 1);
}

#[test]
fn exhausted_attempts_report_timeout() {
    let mock = MockTransport::new();
    let line = mock.shared();
    let mut dev = DeviceBuilder::new(DialectConfig::multi_drop())
        .with_transport(line.boxed())
        .with_policy(RetryPolicy::attempts(3))
        .build()
        .unwrap();
    assert!(matches!(
        dev.transact(&Command::GetSerialNumber, Some(READER)),
        Err(Error::Timeout)
    ));
    assert_eq!(line.with(|m| m.sent().len()), 3);
    assert_eq!(line.with(|m| m.elapsed), ms(3 * 2010));
}
