use serde::Serialize;

/// Message of the placeholder entry shown when there is nothing to list.
pub const RECIPES_UNAVAILABLE: &str = "recipes data not available";
pub const NO_INGREDIENTS: &str = "Base ingredients not specified.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_NUTRITION: &str = "Estimated nutrition data not available.";

/// The recipe list screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub entries: Vec<ListEntry>,
}

impl ListView {
    /// True when the list holds the unavailable-data placeholder instead of
    /// recipes.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.entries.as_slice(), [ListEntry::Placeholder { .. }])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListEntry {
    Recipe { name: String, id: String },
    Placeholder { message: String },
}

/// The recipe detail screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub header: String,
    pub ingredients: Vec<String>,
    pub flavorings: OptionalSection,
    pub description: Vec<TextSegment>,
    pub nutrition: NutritionTable,
}

/// A section shown or hidden as a whole.
///
/// The section's heading and its lines share the one `visible` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionalSection {
    pub visible: bool,
    pub lines: Vec<String>,
}

impl OptionalSection {
    /// A visible section when `lines` is non-empty, a hidden empty one
    /// otherwise.
    pub fn from_lines(lines: Vec<String>) -> Self {
        OptionalSection {
            visible: !lines.is_empty(),
            lines,
        }
    }
}

/// A piece of description text; `LineBreak` stands for one `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum TextSegment {
    Text(String),
    LineBreak,
}

/// Two-column nutrient / amount table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionTable {
    pub rows: Vec<NutritionRow>,
}

impl NutritionTable {
    pub const COLUMNS: u8 = 2;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NutritionRow {
    Nutrient { label: String, amount: String },
    Placeholder(PlaceholderCell),
}

/// A single cell standing in for a whole table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderCell {
    pub text: String,
    pub column_span: u8,
    pub alignment: Alignment,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Normal,
    /// Muted italic text
    Informational,
}
