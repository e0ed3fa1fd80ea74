// src/application/state.rs
//
// Per-page view state: Idle | Loading | Loaded | Failed

/// What a page currently shows.
///
/// `Loading` may carry the previously loaded value so a list can stay on
/// screen while the next page is fetched. `Failed` never carries data.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading(Option<T>),
    Loaded(T),
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    /// Enter `Loading`, keeping the current value only when `keep_stale`
    pub fn begin_loading(&mut self, keep_stale: bool) {
        let previous = std::mem::take(self);
        let stale = if keep_stale { previous.into_data() } else { None };
        *self = ViewState::Loading(stale);
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) | ViewState::Loading(Some(value)) => Some(value),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ViewState::Loaded(value) | ViewState::Loading(Some(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
