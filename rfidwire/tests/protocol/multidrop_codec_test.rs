use rfidwire::protocol::source::SliceSource;
use rfidwire::protocol::{LogicalMessage, MultiDropConfig, multidrop};
use rfidwire::test_support::md_reply_frame;
use rfidwire::Error;

#[path = "../common/mod.rs"]
mod common;

#[test]
fn markers_inside_data_are_not_escaped() {
    let cfg = MultiDropConfig::default();
    let block = common::fixtures::sample_block();
    let wire = md_reply_frame(0x04, 0x00, &block);
    let msg = multidrop::decode(&mut SliceSource::new(&wire), &cfg).unwrap();
    assert_eq!(msg, LogicalMessage::addressed(0x04, 0x00, block));
}

#[test]
fn oversized_declared_length_is_rejected() {
    let cfg = MultiDropConfig {
        max_frame: 16,
        ..MultiDropConfig::default()
    };
    let wire = md_reply_frame(0x01, 0x00, &[0u8; 20]);
    assert!(matches!(
        multidrop::decode(&mut SliceSource::new(&wire), &cfg),
        Err(Error::FrameFormat(_))
    ));
}

#[test]
fn wrong_end_marker() {
    let cfg = MultiDropConfig::default();
    let mut wire = md_reply_frame(0x01, 0x00, &[1, 2]);
    let last = wire.len() - 1;
    wire[last] = 0xBC;
    assert!(matches!(
        multidrop::unpack(&wire, &cfg),
        Err(Error::FrameFormat(_))
    ));
}

#[test]
fn request_frame_has_no_escaping() {
    let cfg = MultiDropConfig::default();
    let msg = LogicalMessage::addressed(0xAA, 0x21, vec![0xBB, 0xAA]);
    let frame = multidrop::encode(&msg, &cfg).unwrap();
    assert_eq!(frame.len(), 8);
    assert_eq!(&frame[..5], &[0xAA, 0xAA, 0x03, 0x21, 0xBB]);
}
