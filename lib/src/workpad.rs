//! Data structures describing a workpad document and its assets
//!
//! A [`Workpad`] is the in-memory shape held by the store. The shape written to
//! the backing store is [`PersistedWorkpad`], which omits in-memory-only
//! fields and carries the asset registry alongside the pages.

use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    time::{SystemTime, UNIX_EPOCH},
};

/// Default width of a newly created workpad
pub const DEFAULT_WORKPAD_WIDTH: u32 = 1080;

/// Default height of a newly created workpad
pub const DEFAULT_WORKPAD_HEIGHT: u32 = 720;

/// Default css applied to every page of a newly created workpad
pub const DEFAULT_WORKPAD_CSS: &str = ".canvasPage {\n\n}";

/// Default page background
pub const DEFAULT_PAGE_BACKGROUND: &str = "#fff";

/// The only asset kind produced by uploads
pub const DATAURL_ASSET_KIND: &str = "dataurl";

/// Default colour palette offered by a new workpad
pub const DEFAULT_COLORS: [&str; 30] = [
    "#37988d",
    "#c19628",
    "#b83c6f",
    "#3f9939",
    "#1785b0",
    "#ca5f35",
    "#45bdb0",
    "#f2bc33",
    "#e74b8b",
    "#4fbf48",
    "#1ea6dc",
    "#fd7643",
    "#72cec3",
    "#f5cc5d",
    "#ec77a8",
    "#7acf74",
    "#4cbce4",
    "#fd986f",
    "#a1ded7",
    "#f8dd91",
    "#f2a4c5",
    "#a6dfa2",
    "#86d2ed",
    "#fdba9f",
    "#000000",
    "#444444",
    "#777777",
    "#BBBBBB",
    "#FFFFFF",
    "rgba(255,255,255,0)",
];

/// Asset registry keyed by asset id
pub type AssetMap = BTreeMap<String, Asset>;

fn default_true() -> bool {
    true
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Generates a prefixed id such as `page-V1StGXR8_Z5jdHi6B-myT`
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", nanoid!())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Placement of an element on its page
pub struct Position {
    /// Distance from the left edge of the page
    pub left: f64,
    /// Distance from the top edge of the page
    pub top: f64,
    /// Element width
    pub width: f64,
    /// Element height
    pub height: f64,
    /// Rotation in degrees
    #[serde(default)]
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single renderable element on a page
pub struct Element {
    /// Unique id of the element
    pub id: String,
    /// Where the element sits on the page
    pub position: Position,
    /// Expression producing the element's content
    pub expression: String,
    /// Optional filter expression contributed by the element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Element {
    /// Returns a new element with a generated id
    pub fn new(expression: impl Into<String>, position: Position) -> Self {
        Self {
            id: generate_id("element"),
            position,
            expression: expression.into(),
            filter: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A page of a workpad
pub struct Page {
    /// Unique id of the page
    pub id: String,
    /// Css properties applied to the page container
    #[serde(default)]
    pub style: HashMap<String, String>,
    /// Name of the transition played when navigating to this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    /// Elements rendered on this page, in paint order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    /// Returns an empty page with a generated id and default background
    pub fn new() -> Self {
        Self {
            id: generate_id("page"),
            style: HashMap::from([(
                "background".to_string(),
                DEFAULT_PAGE_BACKGROUND.to_string(),
            )]),
            transition: None,
            elements: Vec::new(),
        }
    }

    /// Returns a copy of this page where the page and every element receive
    /// fresh ids
    pub fn duplicate(&self) -> Self {
        Self {
            id: generate_id("page"),
            elements: self
                .elements
                .iter()
                .map(|e| Element {
                    id: generate_id("element"),
                    ..e.clone()
                })
                .collect(),
            ..self.clone()
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The user-editable workpad document as held in memory
pub struct Workpad {
    /// Stable id used to key the persisted document
    pub id: String,
    /// Display name
    pub name: String,
    /// Page width in pixels
    pub width: u32,
    /// Page height in pixels
    pub height: u32,
    /// Index of the page currently shown
    #[serde(default)]
    pub page: usize,
    /// Pages in display order
    pub pages: Vec<Page>,
    /// Palette offered by colour pickers
    #[serde(default)]
    pub colors: Vec<String>,
    /// Global css applied to every page
    #[serde(default)]
    pub css: String,
    /// Whether the current user may write this workpad. Never persisted.
    #[serde(default = "default_true", skip_serializing)]
    pub is_writeable: bool,
}

impl Workpad {
    /// Returns a new workpad with a single empty page
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id("workpad"),
            name: name.into(),
            width: DEFAULT_WORKPAD_WIDTH,
            height: DEFAULT_WORKPAD_HEIGHT,
            page: 0,
            pages: vec![Page::new()],
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            css: DEFAULT_WORKPAD_CSS.to_string(),
            is_writeable: true,
        }
    }

    /// Returns the element with the given id along with the id of the page
    /// holding it
    pub fn element_by_id(&self, element_id: &str) -> Option<(&str, &Element)> {
        self.pages.iter().find_map(|p| {
            p.elements
                .iter()
                .find(|e| e.id == element_id)
                .map(|e| (p.id.as_str(), e))
        })
    }

    /// Returns true if any page holds an element with the given id
    pub fn has_element(&self, element_id: &str) -> bool {
        self.element_by_id(element_id).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// An uploaded asset referenced by workpads, e.g. an image
pub struct Asset {
    /// Unique id of the asset
    pub id: String,
    /// Encoding of the asset value
    #[serde(rename = "type")]
    pub kind: String,
    /// The asset content, typically a data url
    pub value: String,
    /// Creation time in milliseconds since the unix epoch
    #[serde(rename = "@created", default)]
    pub created_at: u64,
}

impl Asset {
    /// Returns a new asset with a generated id and the current timestamp
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id("asset"),
            kind: kind.into(),
            value: value.into(),
            created_at: now_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The projection of a workpad that is written to the backing store
pub struct PersistedWorkpad {
    /// Stable id used to key the persisted document
    pub id: String,
    /// Display name
    pub name: String,
    /// Page width in pixels
    pub width: u32,
    /// Page height in pixels
    pub height: u32,
    /// Index of the page currently shown
    pub page: usize,
    /// Pages in display order
    pub pages: Vec<Page>,
    /// Palette offered by colour pickers
    pub colors: Vec<String>,
    /// Global css applied to every page
    pub css: String,
    /// Every asset known to the registry
    pub assets: AssetMap,
}

impl PersistedWorkpad {
    /// Builds the persisted projection from an in-memory workpad and the
    /// current asset registry
    pub fn from_parts(workpad: &Workpad, assets: &AssetMap) -> Self {
        Self {
            id: workpad.id.clone(),
            name: workpad.name.clone(),
            width: workpad.width,
            height: workpad.height,
            page: workpad.page,
            pages: workpad.pages.clone(),
            colors: workpad.colors.clone(),
            css: workpad.css.clone(),
            assets: assets.clone(),
        }
    }
}

#[cfg(test)]
#[path = "./workpad_tests.rs"]
mod tests;
