#[path = "../common/mod.rs"]
mod common;

use rfidwire::ops::key;
use rfidwire::protocol::{DialectConfig, DleConfig};
use rfidwire::test_support::{dle_frame, dle_reply_script, mock_with_dle_reply};
use rfidwire::transport::{MockTransport, Op};
use rfidwire::types::KeyRange;
use rfidwire::{Error, ms};

#[test]
fn serial_number_read_follows_the_seven_steps() {
    let mock = mock_with_dle_reply(&common::fixtures::serial_reply());
    let (mut dev, line) = common::shared_device(mock, DialectConfig::dle());

    let sn = key::serial_number(&mut dev).unwrap();
    assert_eq!(sn.as_bytes().to_vec(), common::fixtures::serial_bytes());
    assert_eq!(sn.to_hex(), common::fixtures::SERIAL_HEX);

    let step = ms(2000);
    let reply_len = dle_frame(&common::fixtures::serial_reply()).len();
    let request = dle_frame(&rfidwire::protocol::Command::ReadKeyData {
        range: KeyRange::serial_number(),
    }
    .message());

    let log = line.with(|m| m.log.clone());
    let writes: Vec<&Op> = log.iter().filter(|op| matches!(op, Op::Send(_))).collect();
    assert_eq!(writes.len(), 4);

    let mut ops = log.iter();
    assert_eq!(ops.next(), Some(&Op::Send(vec![0x02])));
    assert_eq!(
        ops.next(),
        Some(&Op::Receive {
            len: 1,
            timeout: step,
            satisfied: true
        })
    );
    assert_eq!(ops.next(), Some(&Op::Send(request)));
    for _ in 0..2 {
        assert_eq!(
            ops.next(),
            Some(&Op::Receive {
                len: 1,
                timeout: step,
                satisfied: true
            })
        );
    }
    assert_eq!(ops.next(), Some(&Op::Send(vec![0x10])));

    // the reply is consumed byte by byte
    let mut received = 0;
    let mut next = ops.next();
    while let Some(Op::Receive { len, satisfied, .. }) = next {
        assert!(*satisfied);
        received += len;
        next = ops.next();
    }
    assert_eq!(received, reply_len);
    assert_eq!(next, Some(&Op::Send(vec![0x10])));
    assert_eq!(ops.next(), None);
}

#[test]
fn silent_reader_after_sync_times_out_after_one_step() {
    let mut mock = MockTransport::new();
    mock.queue_reply(vec![0x10]);
    let (mut dev, line) = common::shared_device(mock, DialectConfig::dle());

    let err = key::read_key_data(&mut dev, KeyRange::new(0, 4).unwrap()).unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert_eq!(err.status_code(), 4);
    assert_eq!(line.with(|m| m.elapsed), DleConfig::default().step_timeout);

    assert!(dev.is_stale());
    assert!(matches!(
        key::read_key_data(&mut dev, KeyRange::new(0, 4).unwrap()),
        Err(Error::Desynchronized)
    ));
    dev.purge().unwrap();
    assert!(!dev.is_stale());
    assert_eq!(line.with(|m| m.purge_count()), 1);
}

#[test]
fn corrupt_reply_is_closed_and_reported() {
    let mut mock = MockTransport::new();
    let mut script = dle_reply_script(&common::fixtures::serial_reply());
    let last = script[2].len() - 1;
    script[2][last] ^= 0x40;
    for chunk in script {
        mock.queue_reply(chunk);
    }
    let (mut dev, line) = common::shared_device(mock, DialectConfig::dle());

    let err = key::serial_number(&mut dev).unwrap_err();
    assert!(matches!(err, Error::ChecksumMismatch { .. }));
    assert_eq!(err.status_code(), 7);
    assert_eq!(line.with(|m| m.sent().len()), 4);
    assert!(!dev.is_stale());
}

#[test]
fn reader_status_is_passed_through() {
    let mock = mock_with_dle_reply(&common::fixtures::status_reply(116, 0x18));
    let (mut dev, _line) = common::shared_device(mock, DialectConfig::dle());
    match key::serial_number(&mut dev) {
        Err(Error::DeviceStatus { code, .. }) => {
            assert_eq!(code, 0x18);
            assert_eq!(
                rfidwire::status::eks_status_name(code),
                "reader accepts read/write keys only"
            );
        }
        other => panic!("expected DeviceStatus, got {:?}", other),
    }
}

#[test]
fn escape_valued_offsets_are_refused() {
    let (mut dev, line) = common::shared_device(MockTransport::new(), DialectConfig::dle());
    assert!(matches!(
        key::read_key_range(&mut dev, 16, 2),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        key::read_key_range(&mut dev, 0, 16),
        Err(Error::OutOfRange(_))
    ));
    assert!(line.with(|m| m.log.is_empty()));
}

#[test]
fn escape_valued_reply_lengths_are_refused() {
    // a 9-byte read answers with a 16-byte body
    let (mut dev, line) = common::shared_device(MockTransport::new(), DialectConfig::dle());
    assert!(matches!(
        key::read_key_range(&mut dev, 0, 9),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        key::write_key_data(&mut dev, 0, &[0u8; 9]),
        Err(Error::OutOfRange(_))
    ));
    assert!(line.with(|m| m.log.is_empty()));
    assert!(!dev.is_stale());
}

#[test]
fn huge_offsets_are_out_of_range() {
    let (mut dev, line) = common::shared_device(MockTransport::new(), DialectConfig::dle());
    assert!(matches!(
        key::read_key_range(&mut dev, usize::MAX, 1),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        key::write_key_data(&mut dev, usize::MAX, &[1, 2]),
        Err(Error::OutOfRange(_))
    ));
    assert!(line.with(|m| m.log.is_empty()));
}
