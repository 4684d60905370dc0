use super::{CommandFrame, EncodingError, FrameCodec, PAGE, checksum, cipher};
use crate::address::DeviceAddress;
use crate::command::Command;

const FRAME_LEN: usize = 26;
const FRAME_MAGIC: [u8; 4] = *b"HFKJ";
const FRAME_TRAILER: [u8; 6] = [0x10, 0x11, 0x12, 0x13, 0x14, 0x15];

const BODY_LEN: usize = 16;
/// The body checksum covers bytes 0..13 only; byte 13 is excluded by the
/// receiver as well.
const CRC_COVERAGE: usize = 13;

const PARAMS_CIPHER_KEY: u8 = 0xAA;
const BODY_CIPHER_KEY: u8 = 86;

/// Magic parameter bytes of the pairing broadcast.
const PAIR_PARAMS: [u8; 3] = [0xAA, 0x66, 0x55];

/// Codec for the stock Hi-Flying "HFKJ" frame format.
///
/// A 26-byte frame: 4-byte magic, 16-byte obfuscated body, fixed 6-byte
/// trailer. Pairing frames carry magic parameters and skip the inner
/// obfuscation pass so unpaired bulbs can read them.
pub struct HiFlyingCodec;

/// Deterministic filler for the second body byte.
///
/// Receivers ignore it; deriving it from the counter and opcode keeps
/// encoding reproducible.
const fn salt(counter: u16, opcode: u8) -> u8 {
    let [low, high] = counter.to_le_bytes();
    low ^ high ^ opcode
}

impl FrameCodec for HiFlyingCodec {
    fn encode(
        &self,
        command: Command,
        counter: u16,
        address: DeviceAddress,
    ) -> Result<CommandFrame, EncodingError> {
        command.validate()?;

        let opcode = command.opcode();
        let [counter_low, _] = counter.to_le_bytes();
        let octets = address.octets();

        let mut body = [0u8; BODY_LEN];
        body[0] = 0xFF;
        body[1] = salt(counter, opcode);
        body[2] = counter_low;
        body[3] = octets[0];
        body[4] = octets[1] & 0xF0;
        body[7] = opcode;
        body[8] = PAGE;
        body[9] = 0xFF;
        body[10] = counter_low;

        if command == Command::Pair {
            body[11..14].copy_from_slice(&PAIR_PARAMS);
        } else {
            body[11..14].copy_from_slice(&command.params());
            cipher::obfuscate(&mut body[9..14], PARAMS_CIPHER_KEY);
        }

        let crc = checksum::crc16(&body[..CRC_COVERAGE], 0);
        body[14..16].copy_from_slice(&crc.to_le_bytes());

        cipher::obfuscate(&mut body, BODY_CIPHER_KEY);

        let mut raw = [0u8; FRAME_LEN];
        raw[..4].copy_from_slice(&FRAME_MAGIC);
        raw[4..20].copy_from_slice(&body);
        raw[20..].copy_from_slice(&FRAME_TRAILER);
        CommandFrame::from_slice(&raw)
    }
}
