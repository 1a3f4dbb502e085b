use serde::{Deserialize, Serialize};

/// The keys driving one cycling gesture.
///
/// Names use X keysym spelling (`Alt_L`, `Tab`, `grave`); a single ASCII
/// character names itself. The gesture stays open while any listed modifier
/// is held, steps forward on `next` and backward on `previous`, and commits
/// when a modifier is released.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CycleBinding {
    pub modifiers: Vec<String>,
    pub next: String,
    pub previous: String,
}

impl Default for CycleBinding {
    fn default() -> Self {
        Self {
            modifiers: vec!["Alt_L".to_owned()],
            next: "Tab".to_owned(),
            previous: "grave".to_owned(),
        }
    }
}

pub trait Config {
    fn cycle_binding(&self) -> CycleBinding;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[allow(clippy::module_name_repetitions)]
    #[derive(Default)]
    pub struct TestConfig {
        pub binding: CycleBinding,
    }

    impl Config for TestConfig {
        fn cycle_binding(&self) -> CycleBinding {
            self.binding.clone()
        }
    }

    #[test]
    fn the_default_binding_holds_alt_and_taps_tab() {
        let binding = CycleBinding::default();
        assert_eq!(binding.modifiers, vec!["Alt_L".to_owned()]);
        assert_eq!(binding.next, "Tab");
        assert_eq!(binding.previous, "grave");
    }
}
