//! Tunable link parameters and their cyclic option tables.

const RATE_OPTIONS: &[&str] = &["500HZ", "250HZ", "150HZ", "50HZ"];
const POWER_OPTIONS: &[&str] = &["10mW", "25mW", "50mW", "100mW"];
const RATIO_OPTIONS: &[&str] = &[
    "OFF", "1:128", "1:64", "1:32", "1:16", "1:8", "1:4", "1:2",
];
const POWER_SAVING_OPTIONS: &[&str] = &["OFF", "ON"];
const SMART_FAN_OPTIONS: &[&str] = &["AUTO", "ON", "OFF"];

// Wraparound arithmetic needs at least one option per table.
const _: () = {
    assert!(!RATE_OPTIONS.is_empty());
    assert!(!POWER_OPTIONS.is_empty());
    assert!(!RATIO_OPTIONS.is_empty());
    assert!(!POWER_SAVING_OPTIONS.is_empty());
    assert!(!SMART_FAN_OPTIONS.is_empty());
};

/// Which way the Up action walks a parameter's option table.
///
/// The power-class tables run from weakest to strongest option, and Up is
/// expected to mean "stronger", so those step backwards through the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepDirection {
    Forward,
    Reverse,
}

/// A tunable link parameter with a fixed option table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Param {
    Rate,
    Power,
    TelemRatio,
    PowerSaving,
    SmartFan,
}

impl Param {
    pub const ALL: [Self; 5] = [
        Self::Rate,
        Self::Power,
        Self::TelemRatio,
        Self::PowerSaving,
        Self::SmartFan,
    ];

    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Rate => RATE_OPTIONS,
            Self::Power => POWER_OPTIONS,
            Self::TelemRatio => RATIO_OPTIONS,
            Self::PowerSaving => POWER_SAVING_OPTIONS,
            Self::SmartFan => SMART_FAN_OPTIONS,
        }
    }

    pub const fn option_count(self) -> u8 {
        self.options().len() as u8
    }

    pub const fn direction(self) -> StepDirection {
        match self {
            Self::Rate | Self::TelemRatio => StepDirection::Forward,
            Self::Power | Self::PowerSaving | Self::SmartFan => StepDirection::Reverse,
        }
    }

    /// One Up/Down step through the option table, wrapping at both ends.
    pub fn advance(self, index: u8, up: bool) -> u8 {
        let count = self.option_count();
        let index = if index >= count { count - 1 } else { index };
        let forward = match self.direction() {
            StepDirection::Forward => up,
            StepDirection::Reverse => !up,
        };
        if forward {
            if index + 1 >= count { 0 } else { index + 1 }
        } else if index == 0 {
            count - 1
        } else {
            index - 1
        }
    }

    /// Clamps an externally reported index into the option range.
    pub fn clamp_index(self, index: u8) -> u8 {
        index.min(self.option_count() - 1)
    }

    pub fn option_label(self, index: u8) -> &'static str {
        self.options()[self.clamp_index(index) as usize]
    }
}

/// Committed option index per parameter.
///
/// This mirrors what the link side last confirmed; edits in progress live
/// elsewhere and only land here on commit or on a telemetry update.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SelectionState {
    rate: u8,
    power: u8,
    telem_ratio: u8,
    power_saving: u8,
    smart_fan: u8,
}

impl SelectionState {
    pub const fn new() -> Self {
        Self {
            rate: 0,
            power: 0,
            telem_ratio: 0,
            power_saving: 0,
            smart_fan: 0,
        }
    }

    pub fn index(&self, param: Param) -> u8 {
        match param {
            Param::Rate => self.rate,
            Param::Power => self.power,
            Param::TelemRatio => self.telem_ratio,
            Param::PowerSaving => self.power_saving,
            Param::SmartFan => self.smart_fan,
        }
    }

    pub fn set_index(&mut self, param: Param, index: u8) {
        let index = param.clamp_index(index);
        match param {
            Param::Rate => self.rate = index,
            Param::Power => self.power = index,
            Param::TelemRatio => self.telem_ratio = index,
            Param::PowerSaving => self.power_saving = index,
            Param::SmartFan => self.smart_fan = index,
        }
    }

    pub fn value(&self, param: Param) -> &'static str {
        param.option_label(self.index(param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_up_walks_toward_stronger_options() {
        // POWER_OPTIONS runs weakest-first, so Up steps backwards and wraps
        // from the first entry to the last.
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            index = Param::Power.advance(index, true);
            seen.push(index);
        }
        assert_eq!(seen, [3, 2, 1, 0]);
        assert_eq!(Param::Power.advance(0, true), 3);
    }

    #[test]
    fn rate_up_walks_forward() {
        assert_eq!(Param::Rate.advance(0, true), 1);
        assert_eq!(Param::Rate.advance(3, true), 0);
        assert_eq!(Param::Rate.advance(0, false), 3);
    }

    #[test]
    fn up_then_down_restores_every_index() {
        for param in Param::ALL {
            for index in 0..param.option_count() {
                let stepped = param.advance(index, true);
                assert_eq!(
                    param.advance(stepped, false),
                    index,
                    "{param:?} at {index}"
                );
            }
        }
    }

    #[test]
    fn stepping_cycles_through_the_whole_table() {
        for param in Param::ALL {
            let count = param.option_count();
            let mut index = 0;
            let mut visited = vec![false; count as usize];
            for _ in 0..count {
                visited[index as usize] = true;
                index = param.advance(index, false);
            }
            assert!(visited.iter().all(|&v| v), "{param:?} skipped an option");
            assert_eq!(index, 0, "{param:?} did not close the cycle");
        }
    }

    #[test]
    fn external_indices_are_clamped() {
        let mut state = SelectionState::new();
        state.set_index(Param::Rate, 200);
        assert_eq!(state.index(Param::Rate), 3);
        assert_eq!(state.value(Param::Rate), "50HZ");

        // A clamped index still steps normally afterwards.
        assert_eq!(Param::Rate.advance(200, true), 0);
    }

    #[test]
    fn labels_match_the_committed_index() {
        let mut state = SelectionState::new();
        assert_eq!(state.value(Param::TelemRatio), "OFF");
        state.set_index(Param::TelemRatio, 4);
        assert_eq!(state.value(Param::TelemRatio), "1:16");
    }
}
