/// Wire-order address base the per-instance addresses are derived from.
///
/// The most significant octet (0xC6, last in wire order) carries the BLE
/// static random address prefix and the locally administered bit.
const BASE_ADDRESS: [u8; 6] = [0x00, 0xA0, 0x55, 0x66, 0xAA, 0xC6];

/// BLE device address in wire order (least significant octet first).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceAddress([u8; 6]);

impl DeviceAddress {
    /// Derive the broadcast address for an instance id.
    ///
    /// The id becomes the low-order octet, which both frame formats embed
    /// as the sender identity. Every id in 1..=99 maps to a distinct
    /// address; range checking happens at settings validation.
    pub const fn derive(instance_id: u8) -> Self {
        let mut octets = BASE_ADDRESS;
        octets[0] = instance_id;
        Self(octets)
    }

    /// Raw octets in wire order.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl core::fmt::Debug for DeviceAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Conventional MSB-first rendering, e.g. C6:AA:66:55:A0:05
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[5], self.0[4], self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}
