//! Element type host contract.
//!
//! The admin panel lists and filters "elements" — kinds of content with a
//! table view, an optional status menu, and a source tree in the sidebar.
//! An [`ElementType`] describes one such kind. The host builds its filter
//! UI from [`ElementType::statuses`], turns a selected status into a query
//! predicate via [`ElementType::status_condition`], and `AND`-joins that
//! predicate with the ones produced for the other criteria fields.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::filter::Condition;
use crate::types::id::UserId;
use crate::types::sorting::SortField;

/// The admin-panel user a source tree or list view is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Identifier of the viewing user.
    pub user_id: UserId,
}

impl Viewer {
    /// Create a viewer for the given user.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// A named status offered in the host's status filter menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementStatus {
    /// Stable key the host sends back when the status is selected.
    pub key: String,
    /// Human-readable label.
    pub label: String,
}

impl ElementStatus {
    /// Create a new element status.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A column shown in the host's table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAttribute {
    /// Stable attribute key.
    pub key: String,
    /// Human-readable column header.
    pub label: String,
}

impl TableAttribute {
    /// Create a new table attribute.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// An entry in the host's sidebar source tree. Selecting a source applies
/// its criteria to the list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSource<C> {
    /// Stable source key (`"*"` for the all-elements source).
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Criteria applied when this source is selected.
    pub criteria: Option<C>,
}

/// Contract between an element type and the host admin panel.
///
/// `now` is always an explicit parameter on predicate-producing methods so
/// that status resolution stays deterministic; implementations must not
/// consult an ambient clock.
#[async_trait]
pub trait ElementType: Send + Sync + 'static {
    /// The record type listed by this element type.
    type Element: Send + Sync;
    /// The criteria type embedded in this element type's sources.
    type Criteria: Send + Sync;

    /// Human-readable element type name.
    fn name(&self) -> &str;

    /// Whether the host should render a status select menu.
    fn has_statuses(&self) -> bool {
        false
    }

    /// The statuses offered in the status filter menu.
    fn statuses(&self) -> Vec<ElementStatus> {
        Vec::new()
    }

    /// The columns available in table views.
    fn table_attributes(&self) -> Vec<TableAttribute>;

    /// Default ordering for list views.
    fn default_sort(&self) -> SortField;

    /// Produce the filter predicate equivalent to the given status key at
    /// time `now`. Fails with an invalid-status error for unknown keys.
    fn status_condition(&self, status: &str, now: DateTime<Utc>) -> AppResult<Condition>;

    /// Build the sidebar source tree for the given viewer.
    async fn sources(&self, viewer: &Viewer) -> AppResult<Vec<ElementSource<Self::Criteria>>>;

    /// Render the table cell value for one attribute of one element.
    async fn table_attribute_value(
        &self,
        element: &Self::Element,
        attribute: &str,
    ) -> AppResult<String>;
}
