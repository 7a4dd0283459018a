use crate::daypart::TimeOfDay;
use crate::tier::SeverityTier;

pub const TIME_OF_DAY_SLOT: &str = "{time_of_day}";
/// Sentence-initial variant of [`TIME_OF_DAY_SLOT`].
pub const TIME_OF_DAY_SLOT_CAPITALIZED: &str = "{Time_of_day}";

/// A phrase from a tier pool, possibly carrying time-of-day slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryTemplate<'a> {
    pub tier: SeverityTier,
    pub text: &'a str,
}

impl<'a> AdvisoryTemplate<'a> {
    pub fn new(tier: SeverityTier, text: &'a str) -> Self {
        Self { tier, text }
    }

    pub fn has_time_slot(&self) -> bool {
        self.text.contains(TIME_OF_DAY_SLOT) || self.needs_capitalized_slot()
    }

    pub fn needs_capitalized_slot(&self) -> bool {
        self.text.contains(TIME_OF_DAY_SLOT_CAPITALIZED)
    }

    pub fn render(&self, time_of_day: TimeOfDay) -> String {
        if !self.has_time_slot() {
            return self.text.to_string();
        }
        let mut rendered = self.text.replace(TIME_OF_DAY_SLOT, time_of_day.label());
        if self.needs_capitalized_slot() {
            rendered = rendered.replace(TIME_OF_DAY_SLOT_CAPITALIZED, &time_of_day.capitalized());
        }
        rendered
    }
}
