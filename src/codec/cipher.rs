//! Obfuscation primitives for the stock Hi-Flying frame format.
//!
//! The cipher table is fixed protocol data: the vendor key material run
//! backwards through 32 rounds of TEA. It is computed at compile time and
//! shared by every engine instance.

const TEA_KEY: &[u8; 16] = b"!hIflIngCypcal@#";
const TEA_DELTA: u32 = 0x9E37_79B9;
const TEA_SUM: u32 = 0xC6EF_3720;
const TEA_ROUNDS: usize = 32;

/// Vendor key material the cipher table is derived from.
const BASE_KEY: [u8; 16] = [
    0x52, 0xEA, 0x73, 0xFF, 0x49, 0x60, 0xBF, 0x56, 0x42, 0x05, 0x07, 0xE8, 0xD3, 0xA7, 0xB9,
    0x9D,
];

/// Obfuscation table applied to every non-pair frame body.
pub const CIPHER_TABLE: [u8; 16] = build_table();

const fn word(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Run one 8-byte block backwards through the TEA rounds.
const fn tea_decipher(block: [u8; 8]) -> [u8; 8] {
    let k0 = word(TEA_KEY, 0);
    let k1 = word(TEA_KEY, 4);
    let k2 = word(TEA_KEY, 8);
    let k3 = word(TEA_KEY, 12);

    let mut v0 = word(&block, 0);
    let mut v1 = word(&block, 4);
    let mut sum = TEA_SUM;

    let mut round = 0;
    while round < TEA_ROUNDS {
        v1 = v1.wrapping_sub(
            (v0 << 4).wrapping_add(k2) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k3),
        );
        v0 = v0.wrapping_sub(
            (v1 << 4).wrapping_add(k0) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k1),
        );
        sum = sum.wrapping_sub(TEA_DELTA);
        round += 1;
    }

    let [a0, a1, a2, a3] = v0.to_le_bytes();
    let [b0, b1, b2, b3] = v1.to_le_bytes();
    [a0, a1, a2, a3, b0, b1, b2, b3]
}

const fn build_table() -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut half = 0;
    while half < 2 {
        let mut block = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            block[i] = BASE_KEY[half * 8 + i];
            i += 1;
        }
        let deciphered = tea_decipher(block);
        let mut i = 0;
        while i < 8 {
            table[half * 8 + i] = deciphered[i];
            i += 1;
        }
        half += 1;
    }
    table
}

/// Table obfuscation applied in place.
///
/// The byte at index 1 seeds the XOR mask; `key` offsets the table walk.
/// Matches the deobfuscation baked into the bulb receivers.
pub fn obfuscate(block: &mut [u8], key: u8) {
    let Some(&seed) = block.get(1) else {
        return;
    };
    let mask = CIPHER_TABLE[usize::from(((seed >> 4) & 0x0F) ^ (seed & 0x0F))];
    for (i, byte) in block.iter_mut().enumerate() {
        let mixed = *byte ^ mask;
        *byte = mixed.wrapping_add(CIPHER_TABLE[(i + usize::from(key)) & 0x0F]);
    }
}
