// rfidwire/src/ops/mifare.rs

//! Mifare card operations on a multi-drop reader.

use crate::constants::{MIFARE_BLOCK_LEN, ULTRALIGHT_PAGE_LEN};
use crate::device::Device;
use crate::device::multidrop::config::{MAX_READ_BLOCKS, MAX_WRITE_BLOCKS};
use crate::ops::unexpected;
use crate::protocol::{Command, Response};
use crate::types::{BlockCount, DeviceAddress, MifareKey, MifareMode, SnrControl, ValueAmount};
use crate::{Error, Result};

/// Read `num_blocks` blocks starting at `start_block`. Without a key the
/// reader is addressed as an Ultralight and returns 4-byte pages.
pub fn read_blocks(
    dev: &mut Device,
    address: DeviceAddress,
    mode: MifareMode,
    start_block: u8,
    num_blocks: usize,
    key: Option<&MifareKey>,
) -> Result<Vec<u8>> {
    let cmd = Command::MifareRead {
        mode,
        start_block,
        blocks: BlockCount::new(num_blocks, MAX_READ_BLOCKS)?,
        key: key.copied(),
    };
    match dev.transact(&cmd, Some(address))? {
        Response::Blocks(data) => Ok(data),
        other => Err(unexpected("read_blocks", other)),
    }
}

/// Write `data` to `num_blocks` blocks. Keyed writes carry 16 bytes per
/// block, keyless writes 4 bytes per page.
pub fn write_blocks(
    dev: &mut Device,
    address: DeviceAddress,
    mode: MifareMode,
    start_block: u8,
    num_blocks: usize,
    key: Option<&MifareKey>,
    data: &[u8],
) -> Result<Vec<u8>> {
    let blocks = BlockCount::new(num_blocks, MAX_WRITE_BLOCKS)?;
    let unit = if key.is_some() {
        MIFARE_BLOCK_LEN
    } else {
        ULTRALIGHT_PAGE_LEN
    };
    let expected = num_blocks * unit;
    if data.len() != expected {
        return Err(Error::OutOfRange(format!(
            "{} blocks need {} bytes, got {}",
            num_blocks,
            expected,
            data.len()
        )));
    }

    let cmd = Command::MifareWrite {
        mode,
        start_block,
        blocks,
        key: key.copied(),
        data: data.to_vec(),
    };
    match dev.transact(&cmd, Some(address))? {
        Response::Ack(data) => Ok(data),
        other => Err(unexpected("write_blocks", other)),
    }
}

fn value_op(dev: &mut Device, address: DeviceAddress, cmd: Command) -> Result<Vec<u8>> {
    match dev.transact(&cmd, Some(address))? {
        Response::Value(data) => Ok(data),
        other => Err(unexpected("value operation", other)),
    }
}

/// Format `sector` as a value block holding `value`.
pub fn init_value(
    dev: &mut Device,
    address: DeviceAddress,
    mode: MifareMode,
    sector: u8,
    key: &MifareKey,
    value: i32,
) -> Result<Vec<u8>> {
    let cmd = Command::MifareInitValue {
        mode,
        sector,
        key: *key,
        value: ValueAmount::from_i32(value),
    };
    value_op(dev, address, cmd)
}

pub fn decrement(
    dev: &mut Device,
    address: DeviceAddress,
    mode: MifareMode,
    sector: u8,
    key: &MifareKey,
    amount: i32,
) -> Result<Vec<u8>> {
    let cmd = Command::MifareDecrement {
        mode,
        sector,
        key: *key,
        value: ValueAmount::from_i32(amount),
    };
    value_op(dev, address, cmd)
}

pub fn increment(
    dev: &mut Device,
    address: DeviceAddress,
    mode: MifareMode,
    sector: u8,
    key: &MifareKey,
    amount: i32,
) -> Result<Vec<u8>> {
    let cmd = Command::MifareIncrement {
        mode,
        sector,
        key: *key,
        value: ValueAmount::from_i32(amount),
    };
    value_op(dev, address, cmd)
}

/// UID of the card in the field. [`SnrControl::HALT`] puts the card to
/// sleep afterwards.
pub fn get_snr(
    dev: &mut Device,
    address: DeviceAddress,
    mode: MifareMode,
    control: SnrControl,
) -> Result<Vec<u8>> {
    match dev.transact(&Command::MifareGetSerial { mode, control }, Some(address))? {
        Response::Uid(uid) => Ok(uid),
        other => Err(unexpected("get_snr", other)),
    }
}
