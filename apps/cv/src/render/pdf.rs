//! Serializes a [`Page`] display list into a single-page PDF with lopdf.
//!
//! Output is byte-for-byte reproducible: no creation dates, no document IDs,
//! and objects are numbered in draw order.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::errors::CvError;
use crate::layout::font_metrics::encode_win_ansi;
use crate::layout::page::{A4_HEIGHT, A4_WIDTH};
use crate::layout::{DrawOp, LinkRegion, Page, PaintMode, Rgb, StandardFont};

/// Points per millimetre.
const MM_TO_PT: f32 = 72.0 / 25.4;

/// Control-point distance for a quarter circle drawn with one cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

const PRODUCER: &str = concat!("portfolio-cv ", env!("CARGO_PKG_VERSION"));

fn pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// Converts a top-down y in mm to a bottom-up y in points.
fn flip(y_mm: f32) -> f32 {
    pt(A4_HEIGHT - y_mm)
}

fn reals(values: &[f32]) -> Vec<Object> {
    values.iter().map(|v| Object::Real(*v)).collect()
}

fn color_op(operator: &str, color: Rgb) -> Operation {
    Operation::new(operator, reals(&color.unit()))
}

/// Renders `page` to PDF bytes.
pub fn to_pdf_bytes(page: &Page) -> Result<Vec<u8>, CvError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in StandardFont::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let content = Content {
        operations: content_operations(page),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let annots: Vec<Object> = page
        .links()
        .iter()
        .map(|link| doc.add_object(link_annotation(link)).into())
        .collect();

    let mut page_dict = dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => reals(&[0.0, 0.0, pt(A4_WIDTH), pt(A4_HEIGHT)]),
        "Contents" => content_id,
        "Resources" => resources_id,
    };
    if !annots.is_empty() {
        page_dict.set("Annots", annots);
    }
    let page_id = doc.add_object(page_dict);

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(page.title()), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(lopdf::Error::from)?;
    Ok(bytes)
}

fn link_annotation(link: &LinkRegion) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => reals(&[pt(link.x), flip(link.bottom()), pt(link.right()), flip(link.y)]),
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::string_literal(link.url.as_str()),
        },
    }
}

fn content_operations(page: &Page) -> Vec<Operation> {
    let mut ops = Vec::new();
    for op in page.ops() {
        match op {
            DrawOp::Text(run) => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(color_op("rg", run.style.color));
                ops.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(run.style.font.resource_name().as_bytes().to_vec()),
                        Object::Real(run.style.size),
                    ],
                ));
                ops.push(Operation::new("Td", reals(&[pt(run.x), flip(run.y)])));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(&run.text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(color_op("RG", *color));
                ops.push(Operation::new("w", reals(&[pt(*width)])));
                ops.push(Operation::new("m", reals(&[pt(*x1), flip(*y1)])));
                ops.push(Operation::new("l", reals(&[pt(*x2), flip(*y2)])));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawOp::Rect { x, y, w, h, color } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(color_op("rg", *color));
                ops.push(Operation::new(
                    "re",
                    reals(&[pt(*x), flip(y + h), pt(*w), pt(*h)]),
                ));
                ops.push(Operation::new("f", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawOp::RoundedRect {
                x,
                y,
                w,
                h,
                radius,
                mode,
                color,
                line_width,
            } => {
                ops.push(Operation::new("q", vec![]));
                match mode {
                    PaintMode::Fill => ops.push(color_op("rg", *color)),
                    PaintMode::Stroke => {
                        ops.push(color_op("RG", *color));
                        ops.push(Operation::new("w", reals(&[pt(*line_width)])));
                    }
                }
                ops.extend(rounded_rect_path(*x, *y, *w, *h, *radius));
                let paint = match mode {
                    PaintMode::Fill => "f",
                    PaintMode::Stroke => "S",
                };
                ops.push(Operation::new(paint, vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }
    ops
}

/// Closed path for a rounded rectangle given in page millimetres.
fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Vec<Operation> {
    let (left, right) = (pt(x), pt(x + w));
    let (top, bottom) = (flip(y), flip(y + h));
    let r = pt(radius);
    let c = r * KAPPA;

    let point = |op: &str, coords: &[f32]| Operation::new(op, reals(coords));
    vec![
        point("m", &[left + r, bottom]),
        point("l", &[right - r, bottom]),
        point("c", &[right - r + c, bottom, right, bottom + r - c, right, bottom + r]),
        point("l", &[right, top - r]),
        point("c", &[right, top - r + c, right - r + c, top, right - r, top]),
        point("l", &[left + r, top]),
        point("c", &[left + r - c, top, left, top - r + c, left, top - r]),
        point("l", &[left, bottom + r]),
        point("c", &[left, bottom + r - c, left + r - c, bottom, left + r, bottom]),
        Operation::new("h", vec![]),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextStyle;
    use crate::models::cv_data;
    use crate::render::Template;

    fn annotation_uris(bytes: &[u8]) -> Vec<String> {
        let doc = Document::load_mem(bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        let page_id = *pages.values().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let Ok(annots) = page.get(b"Annots") else {
            return Vec::new();
        };
        annots
            .as_array()
            .unwrap()
            .iter()
            .map(|annot| {
                let dict = doc.get_dictionary(annot.as_reference().unwrap()).unwrap();
                assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Link");
                let action = dict.get(b"A").unwrap().as_dict().unwrap();
                let uri = action.get(b"URI").unwrap().as_str().unwrap();
                String::from_utf8_lossy(uri).into_owned()
            })
            .collect()
    }

    #[test]
    fn test_output_is_byte_identical_across_runs() {
        let resume = cv_data::resume();
        for t in Template::ALL {
            let a = to_pdf_bytes(&t.render(resume)).unwrap();
            let b = to_pdf_bytes(&t.render(resume)).unwrap();
            assert!(a.starts_with(b"%PDF-1.5"));
            assert_eq!(a, b, "{}", t.label());
        }
    }

    #[test]
    fn test_annotations_survive_round_trip() {
        let resume = cv_data::resume();
        for t in Template::ALL {
            let page = t.render(resume);
            let bytes = to_pdf_bytes(&page).unwrap();
            let expected: Vec<String> = page.links().iter().map(|l| l.url.clone()).collect();
            assert_eq!(annotation_uris(&bytes), expected, "{}", t.label());
        }
    }

    #[test]
    fn test_fonts_are_standard_type1() {
        let bytes = to_pdf_bytes(&Template::TerminalDark.render(cv_data::resume())).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let mut base_fonts: Vec<Vec<u8>> = doc
            .objects
            .values()
            .filter_map(|obj| obj.as_dict().ok())
            .filter(|d| matches!(d.get(b"Type").and_then(Object::as_name), Ok(b"Font")))
            .map(|d| d.get(b"BaseFont").unwrap().as_name().unwrap().to_vec())
            .collect();
        base_fonts.sort();
        let mut expected: Vec<Vec<u8>> = StandardFont::ALL
            .iter()
            .map(|f| f.base_font().as_bytes().to_vec())
            .collect();
        expected.sort();
        assert_eq!(base_fonts, expected);
    }

    #[test]
    fn test_page_without_links_has_no_annots() {
        let mut page = Page::new("plain");
        page.set_text_style(TextStyle::new(StandardFont::Helvetica, 8.0, Rgb::BLACK));
        page.text("hello", 10.0, 10.0);
        let bytes = to_pdf_bytes(&page).unwrap();
        assert!(annotation_uris(&bytes).is_empty());
    }

    #[test]
    fn test_link_rect_is_flipped_to_pdf_space() {
        let region = LinkRegion {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 3.0,
            url: "https://example.com".to_string(),
        };
        let dict = link_annotation(&region);
        let rect: Vec<f32> = dict
            .get(b"Rect")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect();
        assert!((rect[0] - pt(10.0)).abs() < 1e-3);
        assert!((rect[1] - pt(A4_HEIGHT - 23.0)).abs() < 1e-3);
        assert!((rect[2] - pt(40.0)).abs() < 1e-3);
        assert!((rect[3] - pt(A4_HEIGHT - 20.0)).abs() < 1e-3);
        assert!(rect[3] > rect[1]);
    }
}
