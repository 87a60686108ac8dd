use rfidwire::protocol::{Command, DleConfig, MultiDropConfig, dle, multidrop};
use rfidwire::types::{BlockCount, DeviceAddress, KeyRange, MifareKey, MifareMode, ValueAmount};

#[test]
fn serial_number_read_frame() {
    let cmd = Command::ReadKeyData {
        range: KeyRange::serial_number(),
    };
    let frame = dle::encode(&cmd.message(), &DleConfig::default()).unwrap();
    let bcc: u8 = 0x07 ^ 0x54 ^ 0x4C ^ 0x01 ^ 0x00 ^ 116 ^ 8 ^ 0x10 ^ 0x03;
    assert_eq!(
        frame.into_bytes(),
        vec![0x07, 0x54, 0x4C, 0x01, 0x00, 116, 8, 0x10, 0x03, bcc]
    );
}

#[test]
fn keyed_mifare_read_frame() {
    let cmd = Command::MifareRead {
        mode: MifareMode::new(0x01),
        start_block: 8,
        blocks: BlockCount::new(1, 15).unwrap(),
        key: Some(MifareKey::DEFAULT),
    };
    let mut msg = cmd.message();
    msg.address = Some(DeviceAddress::new(2).as_u8());
    let frame = multidrop::encode(&msg, &MultiDropConfig::default()).unwrap();
    assert_eq!(&frame[..7], &[0xAA, 0x02, 0x0A, 0x20, 0x01, 0x01, 0x08]);
    assert_eq!(frame.len(), 10 + 5);
}

#[test]
fn value_frames_carry_little_endian_amounts() {
    let cmd = Command::MifareDecrement {
        mode: MifareMode::new(0),
        sector: 2,
        key: MifareKey::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]),
        value: ValueAmount::from_i32(0x0102),
    };
    let payload = cmd.encode();
    assert_eq!(payload[0], 0x23);
    assert_eq!(&payload[payload.len() - 4..], &[0x02, 0x01, 0x00, 0x00]);
}

#[test]
fn system_commands() {
    assert_eq!(Command::GetVersion.encode(), vec![0x86]);
    assert_eq!(Command::GetSerialNumber.encode(), vec![0x83]);
    assert_eq!(Command::SetBaudRate { code: 4 }.encode(), vec![0x81, 4]);
}
