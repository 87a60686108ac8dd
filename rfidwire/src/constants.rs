// rfidwire/src/constants.rs
//! Wire-level constants shared by the codecs, engines and adapters.

// --- DLE dialect (EKS key readers) ---------------------------------------

/// Start-of-text marker. Opens a DLE handshake and announces a ready reply.
pub const DLE_STX: u8 = 0x02;

/// End-of-text marker, always preceded by [`DLE`] on the wire.
pub const DLE_ETX: u8 = 0x03;

/// Data-link-escape byte: handshake acknowledge and escape marker.
pub const DLE: u8 = 0x10;

/// Negative acknowledge. Never expected by the host; reported as a
/// handshake violation when seen.
pub const DLE_NAK: u8 = 0x15;

/// Host -> reader "send" opcode ('T').
pub const EKS_CMD_SEND: u8 = 0x54;
/// Reader -> host reply opcode ('R').
pub const EKS_CMD_RESPONSE: u8 = 0x52;
/// Write sub-command ('P').
pub const EKS_CMD_WRITE: u8 = 0x50;
/// Read sub-command ('L').
pub const EKS_CMD_READ: u8 = 0x4C;
/// Status reply kind ('F').
pub const EKS_RES_STATUS: u8 = 0x46;

/// Key memory bank selector that precedes the offset in key commands.
pub const EKS_BANK: [u8; 2] = [0x01, 0x00];

/// Offset of the 8-byte serial number in key memory.
pub const EKS_SERIAL_OFFSET: u8 = 116;
/// Length of the key serial number.
pub const EKS_SERIAL_LEN: u8 = 8;

// --- Multi-drop dialect (iDTRONIC Mifare readers) -------------------------

/// Frame start marker.
pub const MD_STX: u8 = 0xAA;
/// Frame end marker.
pub const MD_ETX: u8 = 0xBB;

/// Device status byte reported on success.
pub const MD_STATUS_OK: u8 = 0x00;

pub const CMD_MF_READ: u8 = 0x20;
pub const CMD_MF_WRITE: u8 = 0x21;
pub const CMD_MF_INIT_VAL: u8 = 0x22;
pub const CMD_MF_DEC: u8 = 0x23;
pub const CMD_MF_INC: u8 = 0x24;
pub const CMD_MF_GET_SNR: u8 = 0x25;

pub const CMD_SET_ADDRESS: u8 = 0x80;
pub const CMD_SET_BAUDRATE: u8 = 0x81;
pub const CMD_SET_SERIAL_NUM: u8 = 0x82;
pub const CMD_GET_SERIAL_NUM: u8 = 0x83;
pub const CMD_GET_VERSION_NUM: u8 = 0x86;

/// Mifare block size in bytes.
pub const MIFARE_BLOCK_LEN: usize = 16;
/// Ultralight page size, used by keyless writes.
pub const ULTRALIGHT_PAGE_LEN: usize = 4;
