//! Type definitions for the bulletin-board document tree.
//!
//! A BoardDocument is a fixed two-tab mapping; each tab holds ordered
//! sections, and a section carries either items directly or named
//! subsections. Items are polymorphic: the shape is distinguished by which
//! fields are present in the JSON, so deserialization goes through untagged
//! enums with the most specific variant listed first.

use serde::{Deserialize, Serialize};

/// The whole persisted document: two fixed tabs keyed "all-staff" and "staff".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDocument {
    #[serde(rename = "all-staff")]
    pub all_staff: Tab,
    pub staff: Tab,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(flatten)]
    pub content: SectionContent,
}

/// A section has exactly one content shape: its own items, or subsections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    Items { items: Vec<Item> },
    Subsections { subsections: Vec<Subsection> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsection {
    pub name: String,
    pub items: Vec<Item>,
}

/// One entry on the board.
///
/// Variant order matters: `Info` carries date/content/detail and must be
/// tried first, and `Linked` must be tried before `Text` because an untagged
/// `Text` would otherwise also accept an object that has a `link` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Info {
        date: String,
        content: String,
        detail: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    },
    Linked {
        text: String,
        link: String,
    },
    Text {
        text: String,
    },
}

impl Item {
    /// The raw link field of this item, if the shape carries one.
    pub fn link(&self) -> Option<&str> {
        match self {
            Item::Info { link, .. } => link.as_deref(),
            Item::Linked { link, .. } => Some(link),
            Item::Text { .. } => None,
        }
    }

    pub fn link_mut(&mut self) -> Option<&mut String> {
        match self {
            Item::Info { link, .. } => link.as_mut(),
            Item::Linked { link, .. } => Some(link),
            Item::Text { .. } => None,
        }
    }
}

impl Section {
    /// All items in the section, flattening subsections, in document order.
    pub fn items_mut(&mut self) -> Vec<&mut Item> {
        match &mut self.content {
            SectionContent::Items { items } => items.iter_mut().collect(),
            SectionContent::Subsections { subsections } => subsections
                .iter_mut()
                .flat_map(|sub| sub.items.iter_mut())
                .collect(),
        }
    }
}

impl BoardDocument {
    pub fn tabs(&self) -> [&Tab; 2] {
        [&self.all_staff, &self.staff]
    }

    pub fn tabs_mut(&mut self) -> [&mut Tab; 2] {
        [&mut self.all_staff, &mut self.staff]
    }

    /// Visit every `link` field of every item and sub-item, in document order.
    pub fn for_each_link_mut<F: FnMut(&mut String)>(&mut self, mut f: F) {
        for tab in self.tabs_mut() {
            for section in &mut tab.sections {
                for item in section.items_mut() {
                    if let Some(link) = item.link_mut() {
                        f(link);
                    }
                }
            }
        }
    }
}
