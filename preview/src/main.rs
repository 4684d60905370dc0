//! Console preview for myrtio-light-beacon broadcasts
//!
//! Drives the protocol engine against a stdout radio that hex-dumps every
//! advertising packet instead of putting it on the air, so frame layout
//! and burst timing can be inspected without hardware.

use std::thread;
use std::time::Duration as StdDuration;

use myrtio_light_beacon::{
    CommandFrame, CommandSlot, DeviceAddress, EngineSettings, EngineStep, FrameCodec,
    HiFlyingCodec, Instant, ProtocolEngine, RadioDriver, TransmitError,
};

/// Static command slot shared between the script and the engine
static COMMANDS: CommandSlot = CommandSlot::new();

/// Radio driver that prints frames instead of broadcasting them.
struct StdoutRadio;

impl RadioDriver for StdoutRadio {
    fn broadcast(
        &mut self,
        address: DeviceAddress,
        frame: &CommandFrame,
    ) -> Result<(), TransmitError> {
        print!("{address:?} |");
        for byte in frame.as_bytes() {
            print!(" {byte:02X}");
        }
        println!();
        Ok(())
    }
}

fn main() {
    let settings = EngineSettings {
        instance_id: 5,
        color_temperature: true,
        ..EngineSettings::default()
    };
    let config = match settings.validate() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid settings: {error:?}");
            return;
        }
    };

    let mut engine = ProtocolEngine::new(COMMANDS.receiver(), &config, StdoutRadio, HiFlyingCodec);
    let _ = engine.add_before_send(|ctx| {
        println!("-> {:?} (counter {})", ctx.command, ctx.counter);
        Ok(())
    });
    let _ = engine.add_after_send(|_| {
        println!();
        Ok(())
    });

    let sender = COMMANDS.sender(config.color_temperature());

    sender.pair();
    pump(&mut engine);

    sender.set_power(true);
    pump(&mut engine);

    for level in [1000, 600, 200] {
        if sender.set_brightness(level).is_ok() {
            pump(&mut engine);
        }
    }

    if sender.set_color_temperature(750).is_ok() {
        pump(&mut engine);
    }

    sender.set_power(false);
    pump(&mut engine);
}

/// Poll the engine until the pending command has been fully broadcast.
fn pump<D: RadioDriver, C: FrameCodec>(engine: &mut ProtocolEngine<'_, D, C>) {
    loop {
        let now = Instant::now();
        match engine.poll(now) {
            EngineStep::Idle => return,
            EngineStep::Continue => {}
            EngineStep::Wait(deadline) => {
                thread::sleep(StdDuration::from_micros((deadline - now).as_micros()));
            }
            EngineStep::Aborted(error) => eprintln!("burst aborted: {error:?}"),
        }
    }
}
