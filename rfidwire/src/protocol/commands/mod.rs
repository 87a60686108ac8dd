// rfidwire/src/protocol/commands/mod.rs

pub mod key;
pub mod mifare;
pub mod system;

use std::time::Duration;

use crate::constants::{
    CMD_GET_SERIAL_NUM, CMD_GET_VERSION_NUM, CMD_MF_DEC, CMD_MF_GET_SNR, CMD_MF_INC,
    CMD_MF_INIT_VAL, CMD_MF_READ, CMD_MF_WRITE, CMD_SET_ADDRESS, CMD_SET_BAUDRATE,
    CMD_SET_SERIAL_NUM, EKS_CMD_READ, EKS_CMD_WRITE,
};
use crate::device::multidrop::config as md_config;
use crate::protocol::frame::LogicalMessage;
use crate::types::{
    BlockCount, DeviceAddress, DialectKind, KeyRange, MifareKey, MifareMode, SerialNumber,
    SnrControl, ValueAmount,
};

/// High-level Command enum. Each variant's encoder lives in
/// `protocol::commands::<family>.rs`; parameters are already validated by
/// the types they are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ReadKeyData {
        range: KeyRange,
    },
    WriteKeyData {
        range: KeyRange,
        data: Vec<u8>,
    },
    MifareRead {
        mode: MifareMode,
        start_block: u8,
        blocks: BlockCount,
        key: Option<MifareKey>,
    },
    MifareWrite {
        mode: MifareMode,
        start_block: u8,
        blocks: BlockCount,
        key: Option<MifareKey>,
        data: Vec<u8>,
    },
    MifareInitValue {
        mode: MifareMode,
        sector: u8,
        key: MifareKey,
        value: ValueAmount,
    },
    MifareDecrement {
        mode: MifareMode,
        sector: u8,
        key: MifareKey,
        value: ValueAmount,
    },
    MifareIncrement {
        mode: MifareMode,
        sector: u8,
        key: MifareKey,
        value: ValueAmount,
    },
    MifareGetSerial {
        mode: MifareMode,
        control: SnrControl,
    },
    SetAddress {
        new_address: DeviceAddress,
    },
    SetBaudRate {
        code: u8,
    },
    SetSerialNumber {
        serial: SerialNumber,
    },
    GetSerialNumber,
    GetVersion,
}

impl Command {
    /// Dialect the command belongs to.
    pub fn dialect(&self) -> DialectKind {
        match self {
            Self::ReadKeyData { .. } | Self::WriteKeyData { .. } => DialectKind::Dle,
            _ => DialectKind::MultiDrop,
        }
    }

    /// Operation code identifying the command (the sub-command on DLE).
    pub fn opcode(&self) -> u8 {
        match self {
            Self::ReadKeyData { .. } => EKS_CMD_READ,
            Self::WriteKeyData { .. } => EKS_CMD_WRITE,
            Self::MifareRead { .. } => CMD_MF_READ,
            Self::MifareWrite { .. } => CMD_MF_WRITE,
            Self::MifareInitValue { .. } => CMD_MF_INIT_VAL,
            Self::MifareDecrement { .. } => CMD_MF_DEC,
            Self::MifareIncrement { .. } => CMD_MF_INC,
            Self::MifareGetSerial { .. } => CMD_MF_GET_SNR,
            Self::SetAddress { .. } => CMD_SET_ADDRESS,
            Self::SetBaudRate { .. } => CMD_SET_BAUDRATE,
            Self::SetSerialNumber { .. } => CMD_SET_SERIAL_NUM,
            Self::GetSerialNumber => CMD_GET_SERIAL_NUM,
            Self::GetVersion => CMD_GET_VERSION_NUM,
        }
    }

    /// Encode the command into its raw payload (leading code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ReadKeyData { range } => key::encode_read_key(*range),
            Self::WriteKeyData { range, data } => key::encode_write_key(*range, data),
            Self::MifareRead {
                mode,
                start_block,
                blocks,
                key,
            } => mifare::encode_read(*mode, *start_block, *blocks, key.as_ref()),
            Self::MifareWrite {
                mode,
                start_block,
                blocks,
                key,
                data,
            } => mifare::encode_write(*mode, *start_block, *blocks, key.as_ref(), data),
            Self::MifareInitValue {
                mode,
                sector,
                key,
                value,
            }
            | Self::MifareDecrement {
                mode,
                sector,
                key,
                value,
            }
            | Self::MifareIncrement {
                mode,
                sector,
                key,
                value,
            } => mifare::encode_value(self.opcode(), *mode, *sector, key, *value),
            Self::MifareGetSerial { mode, control } => mifare::encode_get_snr(*mode, *control),
            Self::SetAddress { new_address } => system::encode_set_address(*new_address),
            Self::SetBaudRate { code } => system::encode_set_baud_rate(*code),
            Self::SetSerialNumber { serial } => system::encode_set_serial_number(serial),
            Self::GetSerialNumber => system::encode_get_serial_number(),
            Self::GetVersion => system::encode_get_version(),
        }
    }

    /// Logical message for the codec; the multi-drop address is filled in
    /// by the caller.
    pub fn message(&self) -> LogicalMessage {
        let mut payload = self.encode();
        let opcode = payload.remove(0);
        LogicalMessage::new(opcode, payload)
    }

    /// How long the multi-drop engine waits for this command's reply.
    /// Bulk commands scale the base wait with the block count.
    pub fn wait_time(&self, base: Duration) -> Duration {
        match self {
            Self::MifareRead { blocks, .. } => md_config::read_wait(base, blocks.get()),
            Self::MifareWrite { blocks, .. } => md_config::write_wait(base, blocks.get()),
            Self::SetAddress { .. }
            | Self::SetBaudRate { .. }
            | Self::SetSerialNumber { .. }
            | Self::GetSerialNumber => md_config::system_wait(base),
            _ => base,
        }
    }

    /// Whether the reply's echoed address is compared with the request's.
    /// A reader answers SetAddress from its new address, and serial number
    /// queries are commonly broadcast.
    pub fn checks_address(&self) -> bool {
        !matches!(self, Self::SetAddress { .. } | Self::GetSerialNumber)
    }

    /// Delay some readers need before they accept the command.
    pub fn settle_delay(&self) -> Option<Duration> {
        match self {
            Self::GetVersion => Some(md_config::SETTLE_DELAY),
            _ => None,
        }
    }
}
