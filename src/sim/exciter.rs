// exciter.rs - Excitation scheduling
//
// One tagged state machine instead of a pair of host timers: a slow random
// pulse while idle, a fast one while the pointer is held. Counts animation
// frames; the frame driver runs near 60 Hz.

/// Frames between automatic pulses with no pointer down (~5 s).
const IDLE_PERIOD: u32 = 300;
/// Frames between repeat pulses while the pointer is held (~200 ms).
const HELD_PERIOD: u32 = 12;

enum Schedule {
    Idle { countdown: u32 },
    Held { countdown: u32 },
}

pub struct Exciter {
    schedule: Schedule,
}

impl Exciter {
    pub fn new() -> Self {
        Self {
            schedule: Schedule::Idle { countdown: IDLE_PERIOD },
        }
    }

    /// Pointer pressed: switch to the fast repeat schedule.
    pub fn press(&mut self) {
        self.schedule = Schedule::Held { countdown: HELD_PERIOD };
    }

    /// Pointer released: resume idling from a full interval.
    pub fn release(&mut self) {
        self.schedule = Schedule::Idle { countdown: IDLE_PERIOD };
    }

    /// Advance one frame; true when a random pulse fires now.
    pub fn tick(&mut self) -> bool {
        let (countdown, period) = match &mut self.schedule {
            Schedule::Idle { countdown } => (countdown, IDLE_PERIOD),
            Schedule::Held { countdown } => (countdown, HELD_PERIOD),
        };
        *countdown -= 1;
        if *countdown == 0 {
            *countdown = period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_until_fire(ex: &mut Exciter, limit: u32) -> u32 {
        for n in 1..=limit {
            if ex.tick() {
                return n;
            }
        }
        panic!("no fire within {limit} frames");
    }

    #[test]
    fn idle_fires_every_idle_period() {
        let mut ex = Exciter::new();
        assert_eq!(ticks_until_fire(&mut ex, 1000), IDLE_PERIOD);
        assert_eq!(ticks_until_fire(&mut ex, 1000), IDLE_PERIOD);
    }

    #[test]
    fn held_fires_every_held_period() {
        let mut ex = Exciter::new();
        ex.press();
        assert_eq!(ticks_until_fire(&mut ex, 1000), HELD_PERIOD);
        assert_eq!(ticks_until_fire(&mut ex, 1000), HELD_PERIOD);
    }

    #[test]
    fn release_restarts_the_idle_interval() {
        let mut ex = Exciter::new();
        ex.press();
        for _ in 0..HELD_PERIOD - 1 {
            ex.tick();
        }
        ex.release();
        // The pending held countdown is cancelled outright
        assert_eq!(ticks_until_fire(&mut ex, 1000), IDLE_PERIOD);
    }

    #[test]
    fn press_cancels_the_idle_countdown() {
        let mut ex = Exciter::new();
        for _ in 0..IDLE_PERIOD - 1 {
            ex.tick();
        }
        ex.press();
        assert_eq!(ticks_until_fire(&mut ex, 1000), HELD_PERIOD);
    }
}
