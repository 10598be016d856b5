//! View State
//!
//! Transient filter / search / sort configuration. Never persisted.

/// Bought-state filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Bought,
    Unbought,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Bought, Filter::Unbought];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Bought => "bought",
            Filter::Unbought => "unbought",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "bought" => Filter::Bought,
            "unbought" => Filter::Unbought,
            _ => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Bought => "Bought",
            Filter::Unbought => "Not bought",
        }
    }

    pub fn matches(&self, bought: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Bought => bought,
            Filter::Unbought => !bought,
        }
    }
}

/// Display order of the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Name,
    Priority,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::Name, SortMode::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Name => "name",
            SortMode::Priority => "priority",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "name" => SortMode::Name,
            "priority" => SortMode::Priority,
            _ => SortMode::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Name => "Name (A-Z)",
            SortMode::Priority => "Priority",
        }
    }
}

/// Filter, search text and sort mode of the list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: Filter,
    /// Always trimmed and lowercase
    pub query: String,
    pub sort: SortMode,
}

impl ViewState {
    /// Search text as stored in `query`
    pub fn normalize_query(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn is_default(&self) -> bool {
        *self == ViewState::default()
    }
}

/// Aggregate over the whole, unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub bought: usize,
}

/// Why the derived view is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been added yet
    NoItems,
    /// Items exist but the filter or search hides all of them
    NoMatches,
}
