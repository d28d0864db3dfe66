use derive_more::{Display, From, Into};

/// A clock for physics objects
/// Counts the discrete ticks a simulation has gone through.
/// The engine holds no timer, the host decides the cadence.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Display, From, Into)]
#[display(fmt = "tick {}", frame)]
pub struct Clock {
    frame: u64,
}

impl Clock {
    pub fn new(frame: u64) -> Self {
        Self { frame }
    }
    pub fn get_current_frame(&self) -> u64 {
        self.frame
    }
    /// Advance by one tick
    pub fn update(&mut self) {
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_advances_one_frame() {
        let mut clock = Clock::default();
        clock.update();
        clock.update();
        assert_eq!(clock.get_current_frame(), 2);
        assert_eq!(format!("{}", clock), "tick 2");
    }

    #[test]
    fn test_from_into() {
        let clock = Clock::from(7u64);
        let frame: u64 = clock.into();
        assert_eq!(frame, 7);
        assert!(Clock::new(3) < clock);
    }
}
