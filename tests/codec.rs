mod tests {
    use myrtio_light_beacon::codec::{checksum, cipher};
    use myrtio_light_beacon::{
        Command, CommandFrame, Deli16Codec, DeviceAddress, EncodingError, FrameCodec,
        HiFlyingCodec,
    };

    // Reference frames generated with the vendor packet algorithms.
    // Names carry the inputs: instance id (I) and counter (C).

    const CIPHER_TABLE: [u8; 16] = [
        0x1D, 0x04, 0x11, 0x20, 0x98, 0x75, 0x28, 0x46, 0x0B, 0xAF, 0x43, 0xAC, 0xD6, 0xBE, 0x89,
        0x8E,
    ];

    const HF_POWER_ON_I5_C1: [u8; 26] = [
        0x48, 0x46, 0x4B, 0x4A, 0x78, 0x63, 0xB9, 0x59, 0x52, 0x5B, 0x85, 0xDA, 0x35, 0x1F, 0x3B,
        0x79, 0x7E, 0x42, 0x35, 0x47, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15,
    ];

    const HF_PAIR_I1_C1: [u8; 26] = [
        0x48, 0x46, 0x4B, 0x4A, 0x9E, 0x82, 0x93, 0x37, 0x6C, 0x35, 0x5F, 0xFB, 0x13, 0x04, 0xA5,
        0x27, 0x00, 0xFC, 0xF4, 0xD4, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15,
    ];

    const HF_BRIGHTNESS_500_I23_C700: [u8; 26] = [
        0x48, 0x46, 0x4B, 0x4A, 0x7B, 0xED, 0x1B, 0x6A, 0x4F, 0x58, 0x82, 0xD7, 0x38, 0xDE, 0x27,
        0xB4, 0xBA, 0xB7, 0x7C, 0xA2, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15,
    ];

    const DELI_POWER_OFF_I5_C9: [u8; 26] = [
        0xF9, 0x08, 0x49, 0xB2, 0xCE, 0x2C, 0x8B, 0x36, 0x64, 0x9D, 0x05, 0xA3, 0xE8, 0x30, 0x5E,
        0x66, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19,
    ];

    const DELI_CT_1000_I99_C65535: [u8; 26] = [
        0xF9, 0x08, 0x49, 0xB2, 0xCE, 0x2C, 0xF3, 0x28, 0x7A, 0x80, 0x1E, 0xBD, 0x66, 0xC6, 0x0A,
        0x51, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19,
    ];

    #[test]
    fn test_cipher_table_bytes() {
        assert_eq!(cipher::CIPHER_TABLE, CIPHER_TABLE);
    }

    #[test]
    fn test_crc16_check_value() {
        // CRC-16/XModem check value
        assert_eq!(checksum::crc16(b"123456789", 0), 0x31C3);
        assert_eq!(checksum::crc16(&[], 0x1234), 0x1234);
    }

    #[test]
    fn test_command_opcodes() {
        assert_eq!(Command::Power(false).opcode(), 0xB2);
        assert_eq!(Command::Power(true).opcode(), 0xB3);
        assert_eq!(Command::Pair.opcode(), 0xB4);
        assert_eq!(Command::Brightness(500).opcode(), 0xB5);
        assert_eq!(Command::ColorTemperature(500).opcode(), 0xB7);
    }

    #[test]
    fn test_level_params_travel_big_endian() {
        assert_eq!(Command::Brightness(500).params(), [0, 0x01, 0xF4]);
        assert_eq!(Command::ColorTemperature(1000).params(), [0, 0x03, 0xE8]);
        assert_eq!(Command::Power(true).params(), [0, 0, 0]);
        assert_eq!(Command::Pair.params(), [0, 0, 0]);
    }

    #[test]
    fn test_hiflying_power_on_frame() {
        let frame = HiFlyingCodec
            .encode(Command::Power(true), 1, DeviceAddress::derive(5))
            .unwrap();
        assert_eq!(frame.as_bytes(), HF_POWER_ON_I5_C1);
    }

    #[test]
    fn test_hiflying_pair_frame() {
        let frame = HiFlyingCodec
            .encode(Command::Pair, 1, DeviceAddress::derive(1))
            .unwrap();
        assert_eq!(frame.as_bytes(), HF_PAIR_I1_C1);
    }

    #[test]
    fn test_hiflying_brightness_frame() {
        let frame = HiFlyingCodec
            .encode(Command::Brightness(500), 700, DeviceAddress::derive(23))
            .unwrap();
        assert_eq!(frame.as_bytes(), HF_BRIGHTNESS_500_I23_C700);
    }

    #[test]
    fn test_hiflying_frame_structure() {
        let frame = HiFlyingCodec
            .encode(Command::Power(false), 9, DeviceAddress::derive(7))
            .unwrap();
        assert_eq!(frame.len(), 26);
        assert_eq!(&frame.as_bytes()[..4], b"HFKJ");
        assert_eq!(
            frame.as_bytes()[20..],
            [0x10, 0x11, 0x12, 0x13, 0x14, 0x15]
        );
    }

    #[test]
    fn test_deli16_power_off_frame() {
        let frame = Deli16Codec
            .encode(Command::Power(false), 9, DeviceAddress::derive(5))
            .unwrap();
        assert_eq!(frame.as_bytes(), DELI_POWER_OFF_I5_C9);
    }

    #[test]
    fn test_deli16_color_temperature_frame() {
        let frame = Deli16Codec
            .encode(Command::ColorTemperature(1000), 65535, DeviceAddress::derive(99))
            .unwrap();
        assert_eq!(frame.as_bytes(), DELI_CT_1000_I99_C65535);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let first = HiFlyingCodec
            .encode(Command::Brightness(777), 41, DeviceAddress::derive(12))
            .unwrap();
        let second = HiFlyingCodec
            .encode(Command::Brightness(777), 41, DeviceAddress::derive(12))
            .unwrap();
        assert_eq!(first, second);

        let first = Deli16Codec
            .encode(Command::Pair, 41, DeviceAddress::derive(12))
            .unwrap();
        let second = Deli16Codec
            .encode(Command::Pair, 41, DeviceAddress::derive(12))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_instances_yield_distinct_frames() {
        let a = HiFlyingCodec
            .encode(Command::Power(true), 1, DeviceAddress::derive(1))
            .unwrap();
        let b = HiFlyingCodec
            .encode(Command::Power(true), 1, DeviceAddress::derive(2))
            .unwrap();
        assert_ne!(a, b);

        let a = Deli16Codec
            .encode(Command::Power(true), 1, DeviceAddress::derive(1))
            .unwrap();
        let b = Deli16Codec
            .encode(Command::Power(true), 1, DeviceAddress::derive(2))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_deli16_embeds_counter_low_byte_only() {
        let low = Deli16Codec
            .encode(Command::Power(true), 0x0005, DeviceAddress::derive(1))
            .unwrap();
        let high = Deli16Codec
            .encode(Command::Power(true), 0x0105, DeviceAddress::derive(1))
            .unwrap();
        assert_eq!(low, high);
    }

    #[test]
    fn test_brightness_out_of_range() {
        let over = HiFlyingCodec
            .encode(Command::Brightness(1001), 1, DeviceAddress::derive(1))
            .unwrap_err();
        assert_eq!(over, EncodingError::Brightness(1001));

        let zero = Deli16Codec
            .encode(Command::Brightness(0), 1, DeviceAddress::derive(1))
            .unwrap_err();
        assert_eq!(zero, EncodingError::Brightness(0));
    }

    #[test]
    fn test_color_temperature_out_of_range() {
        let over = HiFlyingCodec
            .encode(Command::ColorTemperature(1500), 1, DeviceAddress::derive(1))
            .unwrap_err();
        assert_eq!(over, EncodingError::ColorTemperature(1500));
    }

    #[test]
    fn test_frame_capacity_limit() {
        assert!(CommandFrame::from_slice(&[0; 31]).is_ok());
        assert_eq!(
            CommandFrame::from_slice(&[0; 32]).unwrap_err(),
            EncodingError::Overflow
        );
    }
}
