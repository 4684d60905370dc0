mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU16, AtomicUsize, Ordering};

    use myrtio_light_beacon::{Command, HookContext, HookError, HookRegistry, MAX_SEND_HOOKS};

    fn context() -> HookContext {
        HookContext {
            command: Command::Power(true),
            counter: 7,
        }
    }

    fn noop(_: &HookContext) -> Result<(), HookError> {
        Ok(())
    }

    #[test]
    fn test_empty_registry_runs_clean() {
        let registry = HookRegistry::new();
        assert_eq!(registry.run_before(&context()), 0);
        assert_eq!(registry.run_after(&context()), 0);
    }

    #[test]
    fn test_hooks_run_in_registration_order() {
        static ORDER: Mutex<Vec<u8>> = Mutex::new(Vec::new());

        let mut registry = HookRegistry::new();
        registry
            .add_before(|_| {
                ORDER.lock().unwrap().push(1);
                Ok(())
            })
            .unwrap();
        registry
            .add_before(|_| {
                ORDER.lock().unwrap().push(2);
                Ok(())
            })
            .unwrap();
        registry
            .add_before(|_| {
                ORDER.lock().unwrap().push(3);
                Ok(())
            })
            .unwrap();

        assert_eq!(registry.run_before(&context()), 0);
        assert_eq!(*ORDER.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_before_and_after_lists_are_independent() {
        static BEFORE_RUNS: AtomicUsize = AtomicUsize::new(0);
        static AFTER_RUNS: AtomicUsize = AtomicUsize::new(0);

        let mut registry = HookRegistry::new();
        registry
            .add_before(|_| {
                BEFORE_RUNS.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();
        registry
            .add_after(|_| {
                AFTER_RUNS.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        registry.run_before(&context());
        registry.run_before(&context());
        registry.run_after(&context());

        assert_eq!(BEFORE_RUNS.load(Ordering::SeqCst), 2);
        assert_eq!(AFTER_RUNS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_hook_does_not_stop_the_rest() {
        static SECOND_RAN: AtomicBool = AtomicBool::new(false);

        let mut registry = HookRegistry::new();
        registry.add_after(|_| Err(HookError)).unwrap();
        registry
            .add_after(|_| {
                SECOND_RAN.store(true, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        assert_eq!(registry.run_after(&context()), 1);
        assert!(SECOND_RAN.load(Ordering::SeqCst));
    }

    #[test]
    fn test_registration_rejected_when_full() {
        let mut registry = HookRegistry::new();
        for _ in 0..MAX_SEND_HOOKS {
            registry.add_before(noop).unwrap();
        }

        assert!(registry.add_before(noop).is_err());
        // Only the full list rejects.
        assert!(registry.add_after(noop).is_ok());
    }

    #[test]
    fn test_context_reaches_hooks() {
        static OPCODE: AtomicU8 = AtomicU8::new(0);
        static COUNTER: AtomicU16 = AtomicU16::new(0);

        let mut registry = HookRegistry::new();
        registry
            .add_before(|ctx| {
                OPCODE.store(ctx.command.opcode(), Ordering::SeqCst);
                COUNTER.store(ctx.counter, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        let sent = HookContext {
            command: Command::Brightness(500),
            counter: 321,
        };
        assert_eq!(registry.run_before(&sent), 0);

        assert_eq!(OPCODE.load(Ordering::SeqCst), 0xB5);
        assert_eq!(COUNTER.load(Ordering::SeqCst), 321);
    }
}
