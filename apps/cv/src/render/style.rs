//! Per-template style descriptors consumed by the section renderers.
//!
//! A template is a set of background fills plus one or more column flows. Each
//! flow is an ordered list of [`Section`]s drawn top to bottom with its own cursor.

use crate::layout::{Rgb, StandardFont, TextStyle};
use crate::models::ContactKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgb,
}

/// Horizontal extent of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub width: f32,
}

impl Frame {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Where a flow's cursor starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowStart {
    At(f32),
    /// Where the flow at this index (in the template's flow list) finished.
    After(usize),
}

#[derive(Debug, Clone)]
pub struct Flow {
    pub frame: Frame,
    pub start: FlowStart,
    pub header: HeaderStyle,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone)]
pub struct TemplateSpec {
    pub label: &'static str,
    pub background: Vec<FillRect>,
    pub flows: Vec<Flow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Section {
    Heading {
        text: HeadingText,
        style: TextStyle,
        advance: f32,
    },
    ContactRow(ContactRowStyle),
    ContactList(ContactListStyle),
    Divider {
        color: Rgb,
        width: f32,
        advance: f32,
    },
    Header(&'static str),
    Summary(BodyStyle),
    Experience(ExperienceStyle),
    Projects(ProjectStyle),
    Skills(SkillsStyle),
    Education(EducationStyle),
    Gap(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadingText {
    Name,
    Subtitle,
    Literal(&'static str),
}

/// Wrapped paragraph text.
#[derive(Debug, Clone, Copy)]
pub struct BodyStyle {
    pub text: TextStyle,
    pub line_height: f32,
    /// Space added after the last line.
    pub after: f32,
}

#[derive(Debug, Clone, Copy)]
pub enum HeaderStyle {
    /// Title with a short accent rule beneath it.
    Underlined {
        text: TextStyle,
        rule_color: Rgb,
        rule_width: f32,
        rule_length: f32,
        /// Distance from the title baseline down to the rule.
        rule_gap: f32,
        after: f32,
    },
    /// Title on a full-width tinted band with an accent bar at its left edge.
    Banded {
        text: TextStyle,
        band: Rgb,
        accent: Rgb,
    },
    /// Code-comment style title: `// TITLE`.
    Comment { text: TextStyle, after: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub linked: bool,
}

impl ContactItem {
    pub const fn linked(kind: ContactKind) -> Self {
        Self { kind, linked: true }
    }

    pub const fn plain(kind: ContactKind) -> Self {
        Self {
            kind,
            linked: false,
        }
    }
}

/// Contacts on one line, joined by a separator.
#[derive(Debug, Clone)]
pub struct ContactRowStyle {
    /// Style for plain (unlinked) items.
    pub text: TextStyle,
    pub separator: &'static str,
    pub separator_color: Rgb,
    /// Colour for linked items; `None` keeps the plain colour.
    pub link_color: Option<Rgb>,
    pub items: Vec<ContactItem>,
    pub link_height: f32,
    pub advance: f32,
}

/// One contact per line, every item linked.
#[derive(Debug, Clone)]
pub struct ContactListStyle {
    pub text: TextStyle,
    pub items: Vec<ContactKind>,
    pub line_advance: f32,
    pub link_height: f32,
}

#[derive(Debug, Clone, Copy)]
pub enum ExperienceLayout {
    /// Role (+ right-aligned period), then company on its own line.
    Stacked { company: TextStyle },
    /// `role  —  company` (+ right-aligned period) on one line.
    Inline,
    /// Role, then `company · period` in the accent colour.
    CompanyPeriod { meta: TextStyle },
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceStyle {
    pub layout: ExperienceLayout,
    pub role: TextStyle,
    /// Right-aligned period; unused by `CompanyPeriod`.
    pub period: TextStyle,
    /// Advance after the role line and after the company line.
    pub line_advance: f32,
    pub description: BodyStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkPlacement {
    /// Links follow the tech tag on the tech line.
    AfterTech,
    /// Links follow the project name on the name line.
    AfterName,
    /// Links get a line of their own between name and tech.
    OwnLine { advance: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectStyle {
    pub name: TextStyle,
    pub name_advance: f32,
    pub links: LinkPlacement,
    pub link_size: f32,
    pub link_color: Rgb,
    pub tech: TextStyle,
    pub tech_brackets: bool,
    pub tech_advance: f32,
    pub bullet: &'static str,
    pub highlight: TextStyle,
    pub highlight_indent: f32,
    /// Width taken off the column when wrapping highlights.
    pub highlight_inset: f32,
    pub highlight_line_height: f32,
    pub highlight_gap: f32,
    pub after: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PillStyle {
    pub text: TextStyle,
    pub fill: Rgb,
    pub outline: Option<(Rgb, f32)>,
    pub padding: f32,
    pub height: f32,
    pub radius: f32,
    /// Pill top relative to the text baseline.
    pub rise: f32,
    pub gap: f32,
    pub row_advance: f32,
    pub after: f32,
}

#[derive(Debug, Clone, Copy)]
pub enum SkillsStyle {
    /// Category title, then each item prefixed on its own line.
    Grouped {
        title: TextStyle,
        title_advance: f32,
        item: TextStyle,
        item_prefix: &'static str,
        item_advance: f32,
        group_gap: f32,
    },
    /// Every skill flattened into wrapping pills.
    TagCloud(PillStyle),
    /// One comma-joined line (box-wrapped) per category.
    CommaLines { text: TextStyle, advance: f32 },
    /// `Title: a, b, c` per category.
    Labelled {
        title: TextStyle,
        items: TextStyle,
        advance: f32,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum EducationStyle {
    /// Degree, institution and period on successive lines.
    Stacked {
        degree: TextStyle,
        institution: TextStyle,
        period: TextStyle,
        /// Box-wrap degree and institution to this width.
        wrap: Option<f32>,
        advance: f32,
    },
    /// Degree, then `institution  ·  period`.
    Inline {
        degree: TextStyle,
        detail: TextStyle,
        advance: f32,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Shared palette
// ────────────────────────────────────────────────────────────────────────────

pub mod palette {
    use crate::layout::Rgb;

    pub const SLATE_900: Rgb = Rgb(15, 23, 42);
    pub const SLATE_800: Rgb = Rgb(30, 41, 59);
    pub const SLATE_700: Rgb = Rgb(51, 65, 85);
    pub const SLATE_500: Rgb = Rgb(100, 116, 139);
    pub const SLATE_400: Rgb = Rgb(148, 163, 184);
    pub const SLATE_300: Rgb = Rgb(203, 213, 225);
    pub const SLATE_200: Rgb = Rgb(226, 232, 240);
    pub const SLATE_100: Rgb = Rgb(241, 245, 249);
    pub const GREEN: Rgb = Rgb(61, 220, 132);
    pub const CYAN: Rgb = Rgb(56, 189, 248);
    pub const BLUE: Rgb = Rgb(37, 99, 235);
    pub const BLUE_200: Rgb = Rgb(191, 219, 254);
    pub const BLUE_100: Rgb = Rgb(219, 234, 254);
    pub const WHITE: Rgb = Rgb::WHITE;
}

pub const fn helvetica(size: f32, color: Rgb) -> TextStyle {
    TextStyle::new(StandardFont::Helvetica, size, color)
}

pub const fn helvetica_bold(size: f32, color: Rgb) -> TextStyle {
    TextStyle::new(StandardFont::HelveticaBold, size, color)
}

pub const fn helvetica_italic(size: f32, color: Rgb) -> TextStyle {
    TextStyle::new(StandardFont::HelveticaOblique, size, color)
}

pub const fn courier(size: f32, color: Rgb) -> TextStyle {
    TextStyle::new(StandardFont::Courier, size, color)
}

pub const fn courier_bold(size: f32, color: Rgb) -> TextStyle {
    TextStyle::new(StandardFont::CourierBold, size, color)
}
