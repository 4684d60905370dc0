mod tests {
    use myrtio_light_beacon::{SequenceCounter, WrapMode};

    #[test]
    fn test_reports_initial_value() {
        let counter = SequenceCounter::new(42, WrapMode::ToOne);
        assert_eq!(counter.value(), 42);
    }

    #[test]
    fn test_advance_steps_by_one() {
        let mut counter = SequenceCounter::new(7, WrapMode::ToZero);
        assert_eq!(counter.advance(), 8);
        assert_eq!(counter.advance(), 9);
        assert_eq!(counter.value(), 9);
    }

    #[test]
    fn test_wrap_to_one_skips_zero() {
        let mut counter = SequenceCounter::new(65535, WrapMode::ToOne);
        assert_eq!(counter.advance(), 1);
        assert_eq!(counter.advance(), 2);
    }

    #[test]
    fn test_wrap_to_zero() {
        let mut counter = SequenceCounter::new(65535, WrapMode::ToZero);
        assert_eq!(counter.advance(), 0);
        assert_eq!(counter.advance(), 1);
    }
}
