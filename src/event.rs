pub(crate) const PODCAST_SELECTED: &str = "podcastSelected";

/// A native click travelling up from the element that received it.
#[derive(Debug, Default)]
pub(crate) struct Click {
    propagation_stopped: bool,
}

impl Click {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Emitted by a card when the user activates it. It always leaves the card's
/// shadow root and bubbles up to the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PodcastSelected {
    pub id: String,
}

impl PodcastSelected {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn name(&self) -> &'static str {
        PODCAST_SELECTED
    }
}
