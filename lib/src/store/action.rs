//! Action types for state transitions.
//!
//! Actions travel in the same `{ "type": ..., "payload": ... }` shape used by
//! the editor front end, so a recorded action log can be replayed verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::workpad::{Asset, AssetMap, Element, Position, Workpad};

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    // Workpad actions
    /// Replaces the loaded workpad, used when loading or creating workpads
    SetWorkpad(Workpad),
    /// Renames the workpad
    SetName(String),
    /// Replaces the global workpad css
    SetWorkpadCss(String),
    /// Replaces the colour palette
    SetColors(Vec<String>),
    /// Appends a colour to the palette if missing
    AddColor(String),
    /// Removes a colour from the palette
    RemoveColor(String),
    /// Resizes every page of the workpad
    SizeWorkpad {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
    /// Marks the workpad as writeable or read only
    SetWriteable(bool),

    // Page actions
    /// Inserts a blank page after the current page and navigates to it
    AddPage,
    /// Inserts a copy of the page after it and navigates to the copy
    DuplicatePage(String),
    /// Removes a page, unless it is the last one
    RemovePage(String),
    /// Moves a page by a relative offset
    MovePage {
        /// Page to move
        page_id: String,
        /// Relative offset, negative moves towards the front
        position: i64,
    },
    /// Navigates to the page at the given index
    GotoPage(usize),
    /// Replaces the style of a page
    SetPageStyle {
        /// Target page
        page_id: String,
        /// New css properties
        style: HashMap<String, String>,
    },
    /// Sets or clears the transition of a page
    SetPageTransition {
        /// Target page
        page_id: String,
        /// Transition name
        transition: Option<String>,
    },

    // Element actions
    /// Appends an element to a page
    AddElement {
        /// Target page
        page_id: String,
        /// The element to add
        element: Element,
    },
    /// Appends a copy of an element to the same page
    DuplicateElement {
        /// Page holding the element
        page_id: String,
        /// Element to copy
        element_id: String,
    },
    /// Removes elements from a page
    RemoveElements {
        /// Page holding the elements
        page_id: String,
        /// Elements to remove
        element_ids: Vec<String>,
    },
    /// Moves or resizes an element
    SetPosition {
        /// Page holding the element
        page_id: String,
        /// Target element
        element_id: String,
        /// New placement
        position: Position,
    },
    /// Replaces the expression of an element
    SetExpression {
        /// Page holding the element
        page_id: String,
        /// Target element
        element_id: String,
        /// New expression
        expression: String,
    },
    /// Sets or clears the filter contributed by an element
    SetFilter {
        /// Page holding the element
        page_id: String,
        /// Target element
        element_id: String,
        /// New filter expression
        filter: Option<String>,
    },

    // Asset actions
    /// Replaces the asset registry, used when loading assets
    SetAssets(AssetMap),
    /// Empties the asset registry, used when creating workpads
    ResetAssets,
    /// Adds or replaces a single asset
    SetAsset(Asset),
    /// Replaces the value of an existing asset
    SetAssetValue {
        /// Target asset
        id: String,
        /// New value
        value: String,
    },
    /// Removes an asset from the registry
    RemoveAsset(String),

    // Transient actions
    /// Selects an element, or clears the selection
    SelectElement(Option<String>),
    /// Sets the editor zoom scale
    SetZoomScale(f64),
    /// Enters or leaves fullscreen presentation
    SetFullscreen(bool),
    /// Enters or leaves edit mode
    SetEditing(bool),
    /// Sets the auto refresh interval in milliseconds, 0 disables it
    SetRefreshInterval(u64),

    // Resolved args actions
    /// Marks the cached value of an element as loading
    SetLoading {
        /// Target element
        element_id: String,
    },
    /// Caches the resolved value of an element
    SetValue {
        /// Target element
        element_id: String,
        /// Resolved expression output
        value: serde_json::Value,
    },
    /// Records an error raised while resolving an element
    SetError {
        /// Target element
        element_id: String,
        /// Error message
        error: String,
    },
    /// Drops the cached value of an element
    ClearValue {
        /// Target element
        element_id: String,
    },
    /// Drops cached values of elements that no longer exist
    PruneResolvedArgs,
}

/// Groups of actions that share a reducer and a persistence policy.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Display)]
pub enum ActionFamily {
    /// Document level edits
    Workpad,
    /// Page management and navigation
    Pages,
    /// Element edits
    Elements,
    /// Asset registry edits
    Assets,
    /// Ui-only state such as selection and zoom
    Transient,
    /// Cached output of element expressions
    ResolvedArgs,
}

/// Payload-free identity of every [`Action`], convertible to the string tag
/// the action travels with. Variants mirror [`Action`] one to one.
#[allow(missing_docs)]
#[derive(
    Debug, Copy, Clone, Eq, Hash, PartialEq, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    SetWorkpad,
    SetName,
    SetWorkpadCss,
    SetColors,
    AddColor,
    RemoveColor,
    SizeWorkpad,
    SetWriteable,
    AddPage,
    DuplicatePage,
    RemovePage,
    MovePage,
    GotoPage,
    SetPageStyle,
    SetPageTransition,
    AddElement,
    DuplicateElement,
    RemoveElements,
    SetPosition,
    SetExpression,
    SetFilter,
    SetAssets,
    ResetAssets,
    SetAsset,
    SetAssetValue,
    RemoveAsset,
    SelectElement,
    SetZoomScale,
    SetFullscreen,
    SetEditing,
    SetRefreshInterval,
    SetLoading,
    SetValue,
    SetError,
    ClearValue,
    PruneResolvedArgs,
}

impl ActionType {
    /// Returns the string tag of this action type
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns the family this action type belongs to
    pub fn family(self) -> ActionFamily {
        match self {
            Self::SetWorkpad
            | Self::SetName
            | Self::SetWorkpadCss
            | Self::SetColors
            | Self::AddColor
            | Self::RemoveColor
            | Self::SizeWorkpad
            | Self::SetWriteable => ActionFamily::Workpad,
            Self::AddPage
            | Self::DuplicatePage
            | Self::RemovePage
            | Self::MovePage
            | Self::GotoPage
            | Self::SetPageStyle
            | Self::SetPageTransition => ActionFamily::Pages,
            Self::AddElement
            | Self::DuplicateElement
            | Self::RemoveElements
            | Self::SetPosition
            | Self::SetExpression
            | Self::SetFilter => ActionFamily::Elements,
            Self::SetAssets
            | Self::ResetAssets
            | Self::SetAsset
            | Self::SetAssetValue
            | Self::RemoveAsset => ActionFamily::Assets,
            Self::SelectElement
            | Self::SetZoomScale
            | Self::SetFullscreen
            | Self::SetEditing
            | Self::SetRefreshInterval => ActionFamily::Transient,
            Self::SetLoading
            | Self::SetValue
            | Self::SetError
            | Self::ClearValue
            | Self::PruneResolvedArgs => ActionFamily::ResolvedArgs,
        }
    }

    /// Whether a state change caused by this action must reach the backing
    /// store. Every action type has to answer explicitly.
    pub fn affects_persistence(self) -> bool {
        match self {
            // loading and creating workpads
            Self::SetWorkpad => false,
            Self::SetName
            | Self::SetWorkpadCss
            | Self::SetColors
            | Self::AddColor
            | Self::RemoveColor
            | Self::SizeWorkpad
            | Self::SetWriteable => true,
            Self::AddPage
            | Self::DuplicatePage
            | Self::RemovePage
            | Self::MovePage
            | Self::GotoPage
            | Self::SetPageStyle
            | Self::SetPageTransition => true,
            Self::AddElement
            | Self::DuplicateElement
            | Self::RemoveElements
            | Self::SetPosition
            | Self::SetExpression
            | Self::SetFilter => true,
            // loading assets and resetting them for new workpads
            Self::SetAssets | Self::ResetAssets => false,
            Self::SetAsset | Self::SetAssetValue | Self::RemoveAsset => true,
            // ui-only state
            Self::SelectElement
            | Self::SetZoomScale
            | Self::SetFullscreen
            | Self::SetEditing
            | Self::SetRefreshInterval => false,
            // cached expression output
            Self::SetLoading
            | Self::SetValue
            | Self::SetError
            | Self::ClearValue
            | Self::PruneResolvedArgs => false,
        }
    }
}

impl Action {
    /// Returns the payload-free identity of this action
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::SetWorkpad(_) => ActionType::SetWorkpad,
            Self::SetName(_) => ActionType::SetName,
            Self::SetWorkpadCss(_) => ActionType::SetWorkpadCss,
            Self::SetColors(_) => ActionType::SetColors,
            Self::AddColor(_) => ActionType::AddColor,
            Self::RemoveColor(_) => ActionType::RemoveColor,
            Self::SizeWorkpad { .. } => ActionType::SizeWorkpad,
            Self::SetWriteable(_) => ActionType::SetWriteable,
            Self::AddPage => ActionType::AddPage,
            Self::DuplicatePage(_) => ActionType::DuplicatePage,
            Self::RemovePage(_) => ActionType::RemovePage,
            Self::MovePage { .. } => ActionType::MovePage,
            Self::GotoPage(_) => ActionType::GotoPage,
            Self::SetPageStyle { .. } => ActionType::SetPageStyle,
            Self::SetPageTransition { .. } => ActionType::SetPageTransition,
            Self::AddElement { .. } => ActionType::AddElement,
            Self::DuplicateElement { .. } => ActionType::DuplicateElement,
            Self::RemoveElements { .. } => ActionType::RemoveElements,
            Self::SetPosition { .. } => ActionType::SetPosition,
            Self::SetExpression { .. } => ActionType::SetExpression,
            Self::SetFilter { .. } => ActionType::SetFilter,
            Self::SetAssets(_) => ActionType::SetAssets,
            Self::ResetAssets => ActionType::ResetAssets,
            Self::SetAsset(_) => ActionType::SetAsset,
            Self::SetAssetValue { .. } => ActionType::SetAssetValue,
            Self::RemoveAsset(_) => ActionType::RemoveAsset,
            Self::SelectElement(_) => ActionType::SelectElement,
            Self::SetZoomScale(_) => ActionType::SetZoomScale,
            Self::SetFullscreen(_) => ActionType::SetFullscreen,
            Self::SetEditing(_) => ActionType::SetEditing,
            Self::SetRefreshInterval(_) => ActionType::SetRefreshInterval,
            Self::SetLoading { .. } => ActionType::SetLoading,
            Self::SetValue { .. } => ActionType::SetValue,
            Self::SetError { .. } => ActionType::SetError,
            Self::ClearValue { .. } => ActionType::ClearValue,
            Self::PruneResolvedArgs => ActionType::PruneResolvedArgs,
        }
    }

    /// Returns the string tag this action travels with
    pub fn type_tag(&self) -> &'static str {
        self.action_type().as_str()
    }
}

#[cfg(test)]
#[path = "./action_tests.rs"]
mod tests;
