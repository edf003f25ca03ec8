// Template engine: runs a template descriptor's flows over a résumé and
// produces a single A4 display-list page, then hands it to the PDF writer.

pub mod batch;
pub mod pdf;
pub mod sections;
pub mod style;
pub mod templates;

use serde::Serialize;
use tracing::debug;

use crate::layout::Page;
use crate::models::Resume;
use sections::{draw_section, Cursor};
use style::{FlowStart, TemplateSpec};

/// The five built-in designs, in CLI/URL numbering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    MidnightMono,
    BoldBlocks,
    NeonAccent,
    TerminalDark,
    DualColumn,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::MidnightMono,
        Template::BoldBlocks,
        Template::NeonAccent,
        Template::TerminalDark,
        Template::DualColumn,
    ];

    /// 1-based number used on the command line and in URLs.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            Template::MidnightMono => "Midnight Mono",
            Template::BoldBlocks => "Bold Blocks",
            Template::NeonAccent => "Neon Accent",
            Template::TerminalDark => "Terminal Dark",
            Template::DualColumn => "Dual Column",
        }
    }

    /// `cv.pdf` for the default design, `cv-<n>.pdf` for the rest.
    pub fn output_filename(self) -> String {
        match self.number() {
            1 => "cv.pdf".to_string(),
            n => format!("cv-{n}.pdf"),
        }
    }

    pub fn spec(self) -> TemplateSpec {
        match self {
            Template::MidnightMono => templates::midnight_mono(),
            Template::BoldBlocks => templates::bold_blocks(),
            Template::NeonAccent => templates::neon_accent(),
            Template::TerminalDark => templates::terminal_dark(),
            Template::DualColumn => templates::dual_column(),
        }
    }

    pub fn render(self, resume: &Resume) -> Page {
        render_spec(&self.spec(), resume)
    }
}

/// Paints the background fills, then runs every flow top to bottom.
///
/// Flows are drawn in declaration order. A flow that starts `After(i)` picks
/// up where flow `i` finished; `i` must name an earlier flow.
pub fn render_spec(spec: &TemplateSpec, resume: &Resume) -> Page {
    let mut page = Page::new(format!("{} CV", resume.profile.name));

    for fill in &spec.background {
        page.set_fill_color(fill.color);
        page.rect(fill.x, fill.y, fill.w, fill.h);
    }

    let mut ends: Vec<Cursor> = Vec::with_capacity(spec.flows.len());
    for flow in &spec.flows {
        let start = match flow.start {
            FlowStart::At(y) => Cursor::at(y),
            FlowStart::After(i) => {
                debug_assert!(i < ends.len(), "flow starts after unrendered flow {i}");
                ends.get(i).copied().unwrap_or_default()
            }
        };
        let end = flow.sections.iter().fold(start, |cursor, section| {
            draw_section(&mut page, flow.frame, &flow.header, resume, section, cursor)
        });
        ends.push(end);
    }

    debug!(
        template = spec.label,
        ops = page.ops().len(),
        links = page.links().len(),
        "rendered page"
    );
    page
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::A4_WIDTH;
    use crate::layout::DrawOp;
    use crate::models::cv_data;
    use crate::render::style::{Section, SkillsStyle};

    fn project_urls(resume: &Resume) -> Vec<String> {
        resume
            .projects
            .iter()
            .flat_map(|p| p.links().into_iter().map(|l| l.url))
            .collect()
    }

    #[test]
    fn test_template_numbers_and_filenames() {
        let names: Vec<String> = Template::ALL.iter().map(|t| t.output_filename()).collect();
        assert_eq!(
            names,
            vec!["cv.pdf", "cv-2.pdf", "cv-3.pdf", "cv-4.pdf", "cv-5.pdf"]
        );
        assert_eq!(Template::from_number(3), Some(Template::NeonAccent));
        assert_eq!(Template::from_number(0), None);
        assert_eq!(Template::from_number(6), None);
        for t in Template::ALL {
            assert_eq!(Template::from_number(t.number()), Some(t));
            assert_eq!(t.spec().label, t.label());
        }
    }

    #[test]
    fn test_flows_only_follow_earlier_flows() {
        for t in Template::ALL {
            for (i, flow) in t.spec().flows.iter().enumerate() {
                if let FlowStart::After(prev) = flow.start {
                    assert!(prev < i, "{}: flow {i} follows {prev}", t.label());
                }
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let resume = cv_data::resume();
        for t in Template::ALL {
            let a = t.render(resume);
            let b = t.render(resume);
            assert_eq!(a.ops(), b.ops(), "{}", t.label());
            assert_eq!(a.links(), b.links(), "{}", t.label());
        }
    }

    #[test]
    fn test_project_links_appear_in_priority_order() {
        let resume = cv_data::resume();
        let expected = project_urls(resume);
        assert_eq!(expected.len(), 3 + 1 + 3 + 2);

        for t in Template::ALL {
            let page = t.render(resume);
            let drawn: Vec<String> = page
                .links()
                .iter()
                .map(|l| l.url.clone())
                .filter(|url| expected.contains(url))
                .collect();
            assert_eq!(drawn, expected, "{}", t.label());
        }
    }

    #[test]
    fn test_every_template_links_email() {
        let resume = cv_data::resume();
        let mailto = format!("mailto:{}", resume.profile.email);
        for t in Template::ALL {
            let page = t.render(resume);
            assert!(
                page.links().iter().any(|l| l.url == mailto),
                "{} has no mailto link",
                t.label()
            );
        }
    }

    #[test]
    fn test_tag_clouds_stay_inside_content_column() {
        let resume = cv_data::resume();
        for t in [Template::BoldBlocks, Template::TerminalDark] {
            let spec = t.spec();
            assert!(spec.flows[0]
                .sections
                .iter()
                .any(|s| matches!(s, Section::Skills(SkillsStyle::TagCloud(_)))));
            let right = spec.flows[0].frame.right();
            let page = t.render(resume);
            let pills = page
                .ops()
                .iter()
                .filter_map(|op| match op {
                    DrawOp::RoundedRect { x, w, .. } => Some(x + w),
                    _ => None,
                })
                .collect::<Vec<_>>();
            assert!(!pills.is_empty());
            assert!(pills.iter().all(|edge| *edge <= right + 1e-4), "{}", t.label());
            assert!(right < A4_WIDTH);
        }
    }

    #[test]
    fn test_split_footer_headers_share_a_baseline() {
        let page = Template::NeonAccent.render(cv_data::resume());
        let y_of = |text: &str| page.text_runs().find(|r| r.text == text).map(|r| r.y);
        let skills = y_of("SKILLS").unwrap();
        assert_eq!(Some(skills), y_of("EDUCATION"));
        assert!(skills > y_of("PROJECTS").unwrap());
    }

    #[test]
    fn test_sidebar_background_comes_first() {
        let page = Template::MidnightMono.render(cv_data::resume());
        match &page.ops()[0] {
            DrawOp::Rect { x, w, color, .. } => {
                assert_eq!((*x, *w), (0.0, 62.0));
                assert_eq!(*color, style::palette::SLATE_900);
            }
            other => panic!("unexpected first op {other:?}"),
        }
    }
}
