//! Section step functions shared by every template.
//!
//! Each step takes the cursor it starts at and returns the cursor it finished
//! at. Steps only ever move the cursor down, so a flow's y is monotone.

use crate::layout::{draw_project_links, wrap_text, Page, PaintMode, TextStyle};
use crate::models::resume::{Education, Profile, Skills, WorkExperience};
use crate::models::{Project, Resume};
use crate::render::style::{
    BodyStyle, ContactListStyle, ContactRowStyle, EducationStyle, ExperienceLayout,
    ExperienceStyle, Frame, HeaderStyle, HeadingText, LinkPlacement, PillStyle, ProjectStyle,
    Section, SkillsStyle,
};

/// Vertical layout position (baseline of the next line) within one flow.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Cursor {
    pub y: f32,
}

impl Cursor {
    pub const fn at(y: f32) -> Self {
        Self { y }
    }

    /// Moves the cursor down by `dy`. Negative steps are clamped to zero.
    #[must_use]
    pub fn down(self, dy: f32) -> Self {
        debug_assert!(dy >= 0.0, "cursor moved up by {dy}");
        Self {
            y: self.y + dy.max(0.0),
        }
    }
}

/// Draws one section of a flow and returns the advanced cursor.
pub fn draw_section(
    page: &mut Page,
    frame: Frame,
    header: &HeaderStyle,
    resume: &Resume,
    section: &Section,
    cursor: Cursor,
) -> Cursor {
    match section {
        Section::Heading {
            text,
            style,
            advance,
        } => {
            let text = match text {
                HeadingText::Name => resume.profile.name.as_str(),
                HeadingText::Subtitle => resume.profile.subtitle.as_str(),
                HeadingText::Literal(s) => s,
            };
            heading(page, frame, cursor, text, *style, *advance)
        }
        Section::ContactRow(style) => contact_row(page, frame, cursor, &resume.profile, style),
        Section::ContactList(style) => contact_list(page, frame, cursor, &resume.profile, style),
        Section::Divider {
            color,
            width,
            advance,
        } => {
            page.set_draw_color(*color);
            page.set_line_width(*width);
            page.line(frame.x, cursor.y, frame.right(), cursor.y);
            cursor.down(*advance)
        }
        Section::Header(title) => section_header(page, frame, cursor, title, header),
        Section::Summary(style) => paragraph(page, frame.x, frame.width, cursor, &resume.summary, style),
        Section::Experience(style) => experience(page, frame, cursor, &resume.experience, style),
        Section::Projects(style) => projects(page, frame, cursor, &resume.projects, style),
        Section::Skills(style) => skills(page, frame, cursor, &resume.skills, style),
        Section::Education(style) => education(page, frame, cursor, &resume.education, style),
        Section::Gap(dy) => cursor.down(*dy),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Identity block
// ────────────────────────────────────────────────────────────────────────────

pub fn heading(
    page: &mut Page,
    frame: Frame,
    cursor: Cursor,
    text: &str,
    style: TextStyle,
    advance: f32,
) -> Cursor {
    page.set_text_style(style);
    page.text(text, frame.x, cursor.y);
    cursor.down(advance)
}

/// Contacts on a single baseline. Linked items get a clickable region.
pub fn contact_row(
    page: &mut Page,
    frame: Frame,
    cursor: Cursor,
    profile: &Profile,
    style: &ContactRowStyle,
) -> Cursor {
    let y = cursor.y;
    let mut x = frame.x;

    for (i, item) in style.items.iter().enumerate() {
        if i > 0 {
            page.set_text_style(style.text.with_color(style.separator_color));
            page.text(style.separator, x, y);
            x += page.text_width(style.separator);
        }

        let contact = profile.contact(item.kind);
        let color = match (item.linked, style.link_color) {
            (true, Some(link)) => link,
            _ => style.text.color,
        };
        page.set_text_style(style.text.with_color(color));
        let width = page.text_width(&contact.label);
        page.text(&contact.label, x, y);
        if item.linked {
            page.link(x, y, width, style.link_height, &contact.url);
        }
        x += width;
    }

    cursor.down(style.advance)
}

/// One linked contact per line.
pub fn contact_list(
    page: &mut Page,
    frame: Frame,
    mut cursor: Cursor,
    profile: &Profile,
    style: &ContactListStyle,
) -> Cursor {
    page.set_text_style(style.text);
    for kind in &style.items {
        let contact = profile.contact(*kind);
        let width = page.text_width(&contact.label);
        page.text(&contact.label, frame.x, cursor.y);
        page.link(frame.x, cursor.y, width, style.link_height, &contact.url);
        cursor = cursor.down(style.line_advance);
    }
    cursor
}

// ────────────────────────────────────────────────────────────────────────────
// Headers and body text
// ────────────────────────────────────────────────────────────────────────────

pub fn section_header(
    page: &mut Page,
    frame: Frame,
    cursor: Cursor,
    title: &str,
    style: &HeaderStyle,
) -> Cursor {
    match *style {
        HeaderStyle::Underlined {
            text,
            rule_color,
            rule_width,
            rule_length,
            rule_gap,
            after,
        } => {
            page.set_text_style(text);
            page.text(title, frame.x, cursor.y);
            let rule = cursor.down(rule_gap);
            page.set_draw_color(rule_color);
            page.set_line_width(rule_width);
            page.line(frame.x, rule.y, frame.x + rule_length, rule.y);
            rule.down(after)
        }
        HeaderStyle::Banded { text, band, accent } => {
            let top = cursor.y - 4.0;
            page.set_fill_color(band);
            page.rect(frame.x - 2.0, top, frame.width + 4.0, 8.0);
            page.set_text_style(text);
            page.text(title, frame.x, cursor.y);
            page.set_fill_color(accent);
            page.rect(frame.x - 2.0, top, 1.5, 8.0);
            cursor.down(8.0)
        }
        HeaderStyle::Comment { text, after } => {
            page.set_text_style(text);
            page.text(&format!("// {title}"), frame.x, cursor.y);
            cursor.down(after)
        }
    }
}

/// Wraps `text` to `width`, draws it at `style.line_height` spacing and
/// advances past the last line plus `style.after`.
pub fn paragraph(
    page: &mut Page,
    x: f32,
    width: f32,
    cursor: Cursor,
    text: &str,
    style: &BodyStyle,
) -> Cursor {
    let lines = wrap_text(text, style.text.font, style.text.size, width);
    page.set_text_style(style.text);
    page.text_lines(&lines, x, cursor.y, style.line_height);
    cursor.down(lines.len() as f32 * style.line_height + style.after)
}

fn right_aligned(page: &mut Page, frame: Frame, y: f32, text: &str, style: TextStyle) {
    page.set_text_style(style);
    let width = page.text_width(text);
    page.text(text, frame.right() - width, y);
}

// ────────────────────────────────────────────────────────────────────────────
// Content sections
// ────────────────────────────────────────────────────────────────────────────

pub fn experience(
    page: &mut Page,
    frame: Frame,
    mut cursor: Cursor,
    entries: &[WorkExperience],
    style: &ExperienceStyle,
) -> Cursor {
    for exp in entries {
        page.set_text_style(style.role);
        match style.layout {
            ExperienceLayout::Stacked { company } => {
                page.text(&exp.role, frame.x, cursor.y);
                right_aligned(page, frame, cursor.y, &exp.period, style.period);
                cursor = cursor.down(style.line_advance);
                page.set_text_style(company);
                page.text(&exp.company, frame.x, cursor.y);
                cursor = cursor.down(style.line_advance);
            }
            ExperienceLayout::Inline => {
                page.text(&format!("{}  —  {}", exp.role, exp.company), frame.x, cursor.y);
                right_aligned(page, frame, cursor.y, &exp.period, style.period);
                cursor = cursor.down(style.line_advance);
            }
            ExperienceLayout::CompanyPeriod { meta } => {
                page.text(&exp.role, frame.x, cursor.y);
                cursor = cursor.down(style.line_advance);
                page.set_text_style(meta);
                page.text(&format!("{} · {}", exp.company, exp.period), frame.x, cursor.y);
                cursor = cursor.down(style.line_advance);
            }
        }
        cursor = paragraph(page, frame.x, frame.width, cursor, &exp.description, &style.description);
    }
    cursor
}

pub fn projects(
    page: &mut Page,
    frame: Frame,
    mut cursor: Cursor,
    projects: &[Project],
    style: &ProjectStyle,
) -> Cursor {
    for project in projects {
        cursor = project_entry(page, frame, cursor, project, style);
    }
    cursor
}

/// Name line, link row, tech line, then one wrapped bullet per highlight.
///
/// Links inherit the font of the line they sit on.
pub fn project_entry(
    page: &mut Page,
    frame: Frame,
    mut cursor: Cursor,
    project: &Project,
    style: &ProjectStyle,
) -> Cursor {
    let x = frame.x;

    page.set_text_style(style.name);
    page.text(&project.name, x, cursor.y);
    if style.links == LinkPlacement::AfterName {
        let offset = page.text_width(&format!("{}  ", project.name));
        draw_project_links(page, project, x + offset, cursor.y, style.link_size, style.link_color);
    }
    cursor = cursor.down(style.name_advance);

    if let LinkPlacement::OwnLine { advance } = style.links {
        page.set_text_style(style.name);
        let consumed =
            draw_project_links(page, project, x, cursor.y, style.link_size, style.link_color);
        if consumed > 0.0 {
            cursor = cursor.down(advance);
        }
    }

    let tech = if style.tech_brackets {
        format!("[{}]", project.tech)
    } else {
        project.tech.clone()
    };
    page.set_text_style(style.tech);
    page.text(&tech, x, cursor.y);
    if style.links == LinkPlacement::AfterTech {
        let offset = page.text_width(&format!("{tech}  "));
        draw_project_links(page, project, x + offset, cursor.y, style.link_size, style.link_color);
    }
    cursor = cursor.down(style.tech_advance);

    let wrap_width = frame.width - style.highlight_inset;
    for highlight in &project.highlights {
        let bullet = format!("{} {}", style.bullet, highlight);
        let lines = wrap_text(&bullet, style.highlight.font, style.highlight.size, wrap_width);
        page.set_text_style(style.highlight);
        page.text_lines(&lines, x + style.highlight_indent, cursor.y, style.highlight_line_height);
        cursor = cursor.down(lines.len() as f32 * style.highlight_line_height + style.highlight_gap);
    }

    cursor.down(style.after)
}

pub fn skills(
    page: &mut Page,
    frame: Frame,
    mut cursor: Cursor,
    skills: &Skills,
    style: &SkillsStyle,
) -> Cursor {
    match *style {
        SkillsStyle::Grouped {
            title,
            title_advance,
            item,
            item_prefix,
            item_advance,
            group_gap,
        } => {
            for category in &skills.categories {
                page.set_text_style(title);
                page.text(&category.title, frame.x, cursor.y);
                cursor = cursor.down(title_advance);
                page.set_text_style(item);
                for name in &category.items {
                    page.text(&format!("{item_prefix}{name}"), frame.x, cursor.y);
                    cursor = cursor.down(item_advance);
                }
                cursor = cursor.down(group_gap);
            }
            cursor
        }
        SkillsStyle::TagCloud(pill) => tag_cloud(page, frame, cursor, &skills.flattened(), &pill),
        SkillsStyle::CommaLines { text, advance } => {
            page.set_text_style(text);
            for category in &skills.categories {
                page.text_box(&category.items.join(", "), frame.x, cursor.y, frame.width);
                cursor = cursor.down(advance);
            }
            cursor
        }
        SkillsStyle::Labelled {
            title,
            items,
            advance,
        } => {
            for category in &skills.categories {
                page.set_text_style(title);
                page.text(&format!("{}:", category.title), frame.x, cursor.y);
                let offset = items.width(&format!("{}: ", category.title));
                page.set_text_style(items);
                page.text_box(
                    &category.items.join(", "),
                    frame.x + offset,
                    cursor.y,
                    frame.width - offset,
                );
                cursor = cursor.down(advance);
            }
            cursor
        }
    }
}

/// Lays skills out as rounded pills, left to right, starting a new row when
/// the next pill would cross the frame's right edge. A pill that starts a row
/// is never moved, so only a pill wider than the whole frame can overflow.
pub fn tag_cloud(
    page: &mut Page,
    frame: Frame,
    cursor: Cursor,
    items: &[&str],
    pill: &PillStyle,
) -> Cursor {
    let mut row = cursor;
    let mut x = frame.x;

    for item in items {
        let width = pill.text.width(item) + pill.padding * 2.0;
        if x > frame.x && x + width > frame.right() {
            x = frame.x;
            row = row.down(pill.row_advance);
        }

        let top = row.y - pill.rise;
        page.set_fill_color(pill.fill);
        page.rounded_rect(x, top, width, pill.height, pill.radius, PaintMode::Fill);
        if let Some((color, line_width)) = pill.outline {
            page.set_draw_color(color);
            page.set_line_width(line_width);
            page.rounded_rect(x, top, width, pill.height, pill.radius, PaintMode::Stroke);
        }
        page.set_text_style(pill.text);
        page.text(item, x + pill.padding, row.y);

        x += width + pill.gap;
    }

    row.down(pill.after)
}

pub fn education(
    page: &mut Page,
    frame: Frame,
    cursor: Cursor,
    edu: &Education,
    style: &EducationStyle,
) -> Cursor {
    match *style {
        EducationStyle::Stacked {
            degree,
            institution,
            period,
            wrap,
            advance,
        } => {
            let mut cursor = cursor;
            for (text, text_style) in [(&edu.degree, degree), (&edu.institution, institution)] {
                page.set_text_style(text_style);
                match wrap {
                    Some(width) => {
                        page.text_box(text, frame.x, cursor.y, width);
                    }
                    None => page.text(text, frame.x, cursor.y),
                }
                cursor = cursor.down(advance);
            }
            page.set_text_style(period);
            page.text(&edu.period, frame.x, cursor.y);
            cursor.down(advance)
        }
        EducationStyle::Inline {
            degree,
            detail,
            advance,
        } => {
            page.set_text_style(degree);
            page.text(&edu.degree, frame.x, cursor.y);
            let cursor = cursor.down(advance);
            page.set_text_style(detail);
            page.text(
                &format!("{}  ·  {}", edu.institution, edu.period),
                frame.x,
                cursor.y,
            );
            cursor.down(advance)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
