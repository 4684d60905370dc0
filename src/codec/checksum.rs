//! CRC-16 shared by the frame formats.

/// CRC-16/CCITT polynomial.
const POLYNOMIAL: u16 = 0x1021;

/// Compute a CRC-16 over `data`, MSB first, starting from `initial`.
///
/// Chain calls to cover discontiguous regions.
#[allow(clippy::cast_lossless)]
pub const fn crc16(data: &[u8], initial: u16) -> u16 {
    let mut crc = initial;
    let mut i = 0;
    while i < data.len() {
        crc ^= (data[i] as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        i += 1;
    }
    crc
}
