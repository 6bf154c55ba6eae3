//! Headless sandbox demo
//!
//! Spawns a pair of entity controllers, runs a short tick loop, and
//! feeds one overlap notification through the collision phase. The
//! diagnostic stream prints at `info` level; set `RUST_LOG` to adjust.

use tick_engine::foundation::logging;
use tick_engine::prelude::*;

const FRAMES: u32 = 5;

fn main() {
    logging::init();
    log::info!("Starting sandbox simulation...");

    let mut scheduler = Scheduler::new();

    let rover = scheduler.spawn(Box::new(EntityController::default()));

    // A doomed entity: dies on its first tick.
    let debris_config = ControllerConfig {
        speed: 0.0,
        initial_health: 0,
    };
    let debris = scheduler.spawn(Box::new(EntityController::new(debris_config)));

    for frame in 0..FRAMES {
        log::info!("--- frame {frame} ---");
        scheduler.tick();

        if frame == 2 {
            // Pretend the physics host saw the rover brush the debris.
            scheduler.notify_overlap(rover, debris);
            scheduler.notify_overlap(debris, rover);
        }
    }

    log::info!(
        "Done: rover active = {}, debris active = {}",
        scheduler.is_active(rover),
        scheduler.is_active(debris)
    );
}
