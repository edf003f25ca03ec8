//! Inline row of project platform links: `Android · iOS · Web`.

use crate::layout::page::{Page, Rgb};
use crate::models::Project;

pub const LINK_SEPARATOR: &str = " · ";
pub const SEPARATOR_COLOR: Rgb = Rgb(120, 120, 120);
/// Link region height as a fraction of the font size (pt → mm, roughly the cap height).
pub const LINK_HEIGHT_FACTOR: f32 = 0.35;
const UNDERLINE_OFFSET: f32 = 0.5;
const UNDERLINE_WIDTH: f32 = 0.15;

/// Draws every present platform link of `project` on one baseline starting at `x`,
/// each label its own clickable region with an underline.
///
/// Uses the page's current font at `font_size`. Returns the horizontal width
/// consumed; a project without links draws nothing and returns 0.0.
pub fn draw_project_links(
    page: &mut Page,
    project: &Project,
    x: f32,
    y: f32,
    font_size: f32,
    link_color: Rgb,
) -> f32 {
    let links = project.links();
    if links.is_empty() {
        return 0.0;
    }

    let mut style = page.text_style();
    style.size = font_size;
    page.set_text_style(style);

    let mut cx = x;
    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            page.set_text_color(SEPARATOR_COLOR);
            page.text(LINK_SEPARATOR, cx, y);
            cx += page.text_width(LINK_SEPARATOR);
        }

        page.set_text_color(link_color);
        let label = link.label();
        let width = page.text_width(label);
        page.text(label, cx, y);
        page.link(cx, y, width, font_size * LINK_HEIGHT_FACTOR, &link.url);

        page.set_draw_color(link_color);
        page.set_line_width(UNDERLINE_WIDTH);
        page.line(cx, y + UNDERLINE_OFFSET, cx + width, y + UNDERLINE_OFFSET);

        cx += width;
    }

    cx - x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{measure_mm, StandardFont};
    use crate::layout::page::{DrawOp, TextStyle};

    const BLUE: Rgb = Rgb(37, 99, 235);

    fn project(android: bool, ios: bool, web: bool) -> Project {
        Project {
            name: "Example App".to_string(),
            tech: "Flutter".to_string(),
            android_url: android.then(|| "https://play.example/app".to_string()),
            ios_url: ios.then(|| "https://apps.example/app".to_string()),
            web_url: web.then(|| "https://example.app".to_string()),
            highlights: vec!["First".to_string(), "Second".to_string()],
        }
    }

    fn page() -> Page {
        let mut p = Page::new("links");
        p.set_text_style(TextStyle::new(StandardFont::Helvetica, 7.0, Rgb::BLACK));
        p
    }

    #[test]
    fn test_three_links_in_priority_order() {
        let mut p = page();
        let width = draw_project_links(&mut p, &project(true, true, true), 20.0, 50.0, 7.0, BLUE);

        let urls: Vec<&str> = p.links().iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://play.example/app",
                "https://apps.example/app",
                "https://example.app"
            ]
        );

        let texts: Vec<&str> = p.text_runs().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Android", " · ", "iOS", " · ", "Web"]);

        let expected = ["Android", " · ", "iOS", " · ", "Web"]
            .iter()
            .map(|t| measure_mm(StandardFont::Helvetica, 7.0, t))
            .sum::<f32>();
        assert!((width - expected).abs() < 1e-4);
    }

    #[test]
    fn test_regions_match_label_widths_and_advance() {
        let mut p = page();
        draw_project_links(&mut p, &project(true, false, true), 10.0, 40.0, 6.5, BLUE);
        let links = p.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].x, 10.0);
        assert!((links[0].width - measure_mm(StandardFont::Helvetica, 6.5, "Android")).abs() < 1e-4);
        assert!((links[0].height - 6.5 * LINK_HEIGHT_FACTOR).abs() < 1e-6);
        assert!(links[1].x > links[0].right(), "separator sits between regions");
    }

    #[test]
    fn test_single_link_has_no_separator() {
        let mut p = page();
        draw_project_links(&mut p, &project(true, false, false), 0.0, 10.0, 7.0, BLUE);
        assert!(p.text_runs().all(|r| r.text != LINK_SEPARATOR));
        assert_eq!(p.links().len(), 1);
    }

    #[test]
    fn test_zero_links_is_a_no_op() {
        let mut p = page();
        let width = draw_project_links(&mut p, &project(false, false, false), 0.0, 10.0, 7.0, BLUE);
        assert_eq!(width, 0.0);
        assert!(p.ops().is_empty());
        assert!(p.links().is_empty());
    }

    #[test]
    fn test_labels_are_underlined_in_link_colour() {
        let mut p = page();
        draw_project_links(&mut p, &project(false, true, false), 5.0, 30.0, 7.0, BLUE);
        let underline = p
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Line { y1, color, .. } => Some((*y1, *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(underline, (30.5, BLUE));
    }
}
