/// One of the two station inputs on the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputSlot {
    #[default]
    Start,
    End,
}

impl InputSlot {
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Start => "start-station",
            Self::End => "end-station",
        }
    }
}

/// Current text of both inputs plus which one last received focus
///
/// The focus target is written only by [`StationInputs::focus`] and read
/// only when a sidebar station is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationInputs {
    start: String,
    end: String,
    focus: InputSlot,
}

impl StationInputs {
    #[must_use]
    pub fn value(&self, slot: InputSlot) -> &str {
        match slot {
            InputSlot::Start => &self.start,
            InputSlot::End => &self.end,
        }
    }

    pub fn set(&mut self, slot: InputSlot, value: String) {
        match slot {
            InputSlot::Start => self.start = value,
            InputSlot::End => self.end = value,
        }
    }

    pub fn focus(&mut self, slot: InputSlot) {
        self.focus = slot;
    }

    /// Write a station picked from the sidebar into the focused input
    pub fn fill_focused(&mut self, station: String) {
        self.set(self.focus, station);
    }
}
