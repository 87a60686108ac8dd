use proptest::prelude::*;
use rfidwire::protocol::source::SliceSource;
use rfidwire::protocol::{DleConfig, LogicalMessage, dle};
use rfidwire::test_support::dle_frame;
use rfidwire::Error;

#[test]
fn encoder_matches_hand_built_frame() {
    let cfg = DleConfig::default();
    let msg = LogicalMessage::new(0x54, vec![0x4C, 0x01, 0x00, 0x20, 0x10]);
    let frame = dle::encode(&msg, &cfg).unwrap();
    assert_eq!(frame.into_bytes(), dle_frame(&msg));
}

#[test]
fn decoder_stops_at_frame_end() {
    let cfg = DleConfig::default();
    let msg = LogicalMessage::new(0x52, vec![0x46, 0x01, 0x00, 0x20, 0x00]);
    let mut wire = dle_frame(&msg);
    wire.extend_from_slice(&[0x02, 0x02]);
    let mut src = SliceSource::new(&wire);
    assert_eq!(dle::decode(&mut src, &cfg).unwrap(), msg);
    assert_eq!(src.remaining(), 2);
}

#[test]
fn length_below_two_is_malformed() {
    let cfg = DleConfig::default();
    let wire = [0x01, 0x10, 0x03, 0x12];
    assert!(matches!(
        dle::decode(&mut SliceSource::new(&wire), &cfg),
        Err(Error::FrameFormat(_))
    ));
}

proptest! {
    #[test]
    fn any_single_bit_flip_in_checksum_is_caught(
        data in prop::collection::vec(any::<u8>(), 0..60),
        bit in 0u8..8,
    ) {
        prop_assume!(data.len() != 14);
        let cfg = DleConfig::default();
        let msg = LogicalMessage::new(0x52, data);
        let mut wire = dle_frame(&msg);
        let last = wire.len() - 1;
        wire[last] ^= 1 << bit;
        let res = dle::decode(&mut SliceSource::new(&wire), &cfg);
        let is_checksum_mismatch = matches!(res, Err(Error::ChecksumMismatch { .. }));
        prop_assert!(is_checksum_mismatch);
    }

    #[test]
    fn truncation_never_yields_a_frame(
        data in prop::collection::vec(any::<u8>(), 0..40),
        cut in 1usize..8,
    ) {
        prop_assume!(data.len() != 14);
        let cfg = DleConfig::default();
        let wire = dle_frame(&LogicalMessage::new(0x52, data));
        let keep = wire.len().saturating_sub(cut);
        let res = dle::decode(&mut SliceSource::new(&wire[..keep]), &cfg);
        prop_assert!(res.is_err());
    }
}
