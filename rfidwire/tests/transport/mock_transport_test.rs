use rfidwire::transport::{MockTransport, Op, Transport};
use rfidwire::{Error, ms};

#[test]
fn starved_read_then_purge() {
    let mut m = MockTransport::new();
    m.push_inbound(&[0xAA, 0x01]);
    assert!(matches!(m.receive_exact(5, ms(250)), Err(Error::Timeout)));
    assert_eq!(m.elapsed, ms(250));
    assert_eq!(m.bytes_available().unwrap(), 2);

    m.purge().unwrap();
    assert_eq!(m.bytes_available().unwrap(), 0);
    assert_eq!(
        m.log,
        vec![
            Op::Receive {
                len: 5,
                timeout: ms(250),
                satisfied: false
            },
            Op::Purge
        ]
    );
}

#[test]
fn silent_send_releases_nothing() {
    let mut m = MockTransport::new();
    m.queue_reply(vec![]);
    m.queue_reply(vec![0x10]);
    m.send(&[0x02]).unwrap();
    assert_eq!(m.bytes_available().unwrap(), 0);
    m.send(&[0x02]).unwrap();
    assert_eq!(m.receive_exact(1, ms(10)).unwrap(), vec![0x10]);
}

#[test]
fn key_line_is_scriptable() {
    let line = MockTransport::new().shared();
    let mut boxed = line.boxed();
    assert!(boxed.key_present().unwrap());
    line.with(|m| m.set_key_present(false));
    assert!(!boxed.key_present().unwrap());
}
