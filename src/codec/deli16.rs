use super::{CommandFrame, EncodingError, FrameCodec, PAGE, checksum};
use crate::address::DeviceAddress;
use crate::command::Command;

const FRAME_LEN: usize = 26;
const FRAME_HEADER: [u8; 3] = [0x71, 0x0F, 0x55];
const FRAME_TRAILER: [u8; 10] = [0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19];

const CRC_PREFIX: [u8; 3] = [0xCC, 0x55, 0xAA];
const CRC_INIT: u16 = 0xFFFF;
const CRC_XOROUT: u16 = 0xFFFF;

const WHITEN_PAYLOAD_KEY: u8 = 63;
const WHITEN_FRAME_KEY: u8 = 37;

/// The frame-wide whitening pass runs its keystream over this many bytes
/// before the first emitted byte.
const KEYSTREAM_LEAD: usize = 13;
const SCRATCH_LEN: usize = KEYSTREAM_LEAD + BODY_LEN;
const BODY_LEN: usize = 16;

/// Codec for the whitened "Deli" lamp frame format.
///
/// A 26-byte frame: a 16-byte body built from a bit-reversed header, a
/// CRC prefix, an XOR-folded data block and a reflected CRC-16, whitened
/// twice with the BLE channel LFSR, then a fixed 10-byte trailer.
pub struct Deli16Codec;

impl FrameCodec for Deli16Codec {
    fn encode(
        &self,
        command: Command,
        counter: u16,
        address: DeviceAddress,
    ) -> Result<CommandFrame, EncodingError> {
        command.validate()?;

        let opcode = command.opcode();
        let params = command.params();
        let [counter_low, _] = counter.to_le_bytes();
        let octets = address.octets();

        // Only the counter's low byte reaches the air in this format.
        let folded = params[2] ^ counter_low;
        let data: [u8; 8] = [
            folded ^ octets[0],
            folded ^ params[0],
            folded ^ PAGE,
            folded ^ params[1],
            folded ^ opcode,
            octets[1] ^ params[2] ^ counter_low,
            params[2] ^ octets[0],
            params[0] ^ counter_low,
        ];

        let mut scratch = [0u8; SCRATCH_LEN];
        scratch[13..16].copy_from_slice(&FRAME_HEADER);
        scratch[16..19].copy_from_slice(&CRC_PREFIX);
        scratch[19..27].copy_from_slice(&data);
        for byte in &mut scratch[13..19] {
            *byte = byte.reverse_bits();
        }
        let crc = frame_checksum(&data);
        scratch[27..29].copy_from_slice(&crc.to_le_bytes());

        whiten(&mut scratch[16..29], WHITEN_PAYLOAD_KEY);
        whiten(&mut scratch, WHITEN_FRAME_KEY);

        let mut raw = [0u8; FRAME_LEN];
        raw[..BODY_LEN].copy_from_slice(&scratch[KEYSTREAM_LEAD..]);
        raw[BODY_LEN..].copy_from_slice(&FRAME_TRAILER);
        CommandFrame::from_slice(&raw)
    }
}

/// Reflected CRC over the fixed prefix and the folded data block.
fn frame_checksum(data: &[u8; 8]) -> u16 {
    let mut reflected = [0u8; 8];
    for (slot, byte) in reflected.iter_mut().zip(data) {
        *slot = byte.reverse_bits();
    }
    let crc = checksum::crc16(&reflected, checksum::crc16(&CRC_PREFIX, CRC_INIT));
    (crc ^ CRC_XOROUT).reverse_bits()
}

/// BLE channel-whitening LFSR (x^7 + x^4 + 1), applied in place.
///
/// `key` seeds the register the way the radio seeds it for a channel
/// index; keys 63 and 37 match the lamp receiver.
fn whiten(data: &mut [u8], key: u8) {
    let mut register = ((key & 0x01) << 6)
        | ((key & 0x02) << 4)
        | ((key & 0x04) << 2)
        | (key & 0x08)
        | ((key & 0x10) >> 2)
        | ((key & 0x20) >> 4)
        | 1;

    for byte in data {
        let mut out = 0;
        for bit in 0..8 {
            let white = (register & 0x40) >> 6;
            out |= ((white << bit) ^ *byte) & (1 << bit);

            register <<= 1;
            let feedback = (register >> 7) & 1;
            register = (register & 0xFE) | feedback;
            register = (register & 0xEF) | ((register ^ (feedback << 4)) & 0x10);
        }
        *byte = out;
    }
}
