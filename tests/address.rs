mod tests {
    use myrtio_light_beacon::DeviceAddress;

    #[test]
    fn test_derive_is_injective() {
        for a in 1..=99u8 {
            for b in (a + 1)..=99 {
                assert_ne!(DeviceAddress::derive(a), DeviceAddress::derive(b));
            }
        }
    }

    #[test]
    fn test_instance_id_lands_in_low_octet() {
        let address = DeviceAddress::derive(5);
        assert_eq!(address.octets()[0], 5);
        assert_eq!(address.octets()[1..], [0xA0, 0x55, 0x66, 0xAA, 0xC6]);
    }

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(DeviceAddress::derive(42), DeviceAddress::derive(42));
    }

    #[test]
    fn test_static_random_prefix_bits() {
        for id in 1..=99u8 {
            let octets = DeviceAddress::derive(id).octets();
            // Top two bits of the most significant octet mark a static
            // random address
            assert_eq!(octets[5] & 0xC0, 0xC0);
        }
    }

    #[test]
    fn test_debug_renders_msb_first() {
        let address = DeviceAddress::derive(5);
        assert_eq!(format!("{address:?}"), "C6:AA:66:55:A0:05");
    }
}
