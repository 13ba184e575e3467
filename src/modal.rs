use crate::card::Card;
use crate::model::InteractionStatus;

/// Label of the empty selector option.
pub const CHOOSE_STATUS: &str = "Choose status";

/// Drop-down of interaction statuses shown inside the detail dialog.
///
/// Index 0 is the empty option; the rest follow `InteractionStatus::ALL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSelector {
    selected: usize,
}

impl StatusSelector {
    pub const LEN: usize = InteractionStatus::ALL.len() + 1;

    /// Pre-select the option whose value equals `current`, or the empty one.
    pub fn preset(current: Option<&str>) -> Self {
        let selected = current
            .and_then(InteractionStatus::from_value)
            .and_then(|s| InteractionStatus::ALL.iter().position(|o| *o == s))
            .map(|i| i + 1)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(Self::LEN - 1);
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Self::LEN;
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + Self::LEN - 1) % Self::LEN;
    }

    /// The status under the cursor; `None` for the empty option.
    pub fn value(&self) -> Option<InteractionStatus> {
        self.selected
            .checked_sub(1)
            .and_then(|i| InteractionStatus::ALL.get(i).copied())
    }

    pub fn option_label(index: usize) -> &'static str {
        match index.checked_sub(1) {
            None => CHOOSE_STATUS,
            Some(i) => InteractionStatus::ALL
                .get(i)
                .map(|s| s.label())
                .unwrap_or(CHOOSE_STATUS),
        }
    }
}

/// Detail dialog for a single movie.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    body: Option<Card>,
    pub selector: StatusSelector,
}

impl Modal {
    /// Populate the dialog from a rendered movie and show it.
    /// Any previous content is replaced.
    pub fn open(&mut self, card: &Card) {
        let mut body = card.clone();
        body.expanded = true;
        self.selector = StatusSelector::preset(body.status_text());
        self.body = Some(body);
    }

    pub fn close(&mut self) {
        self.body = None;
        self.selector = StatusSelector::default();
    }

    pub fn is_visible(&self) -> bool {
        self.body.is_some()
    }

    pub fn body(&self) -> Option<&Card> {
        self.body.as_ref()
    }

    /// Body of the dialog if it currently shows `movie_id`.
    pub fn body_for_mut(&mut self, movie_id: i64) -> Option<&mut Card> {
        self.body.as_mut().filter(|b| b.movie_id == movie_id)
    }

    pub fn movie_id(&self) -> Option<i64> {
        self.body.as_ref().map(|b| b.movie_id)
    }
}
