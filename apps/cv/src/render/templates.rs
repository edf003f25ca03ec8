//! The five CV designs, expressed as descriptors for the section engine.

use crate::layout::page::{A4_HEIGHT, A4_WIDTH, CONTENT_WIDTH, MARGIN};
use crate::layout::Rgb;
use crate::models::ContactKind;
use crate::render::style::palette::*;
use crate::render::style::{
    courier, courier_bold, helvetica, helvetica_bold, helvetica_italic, BodyStyle, ContactItem,
    ContactListStyle, ContactRowStyle, EducationStyle, ExperienceLayout, ExperienceStyle,
    FillRect, Flow, FlowStart, Frame, HeaderStyle, HeadingText, LinkPlacement, PillStyle,
    ProjectStyle, Section, SkillsStyle, TemplateSpec,
};

const CONTACT_LINK_HEIGHT: f32 = 3.0;

/// Email, phone, LinkedIn and portfolio on one row; phone linked or not.
fn banner_contacts(phone_linked: bool) -> Vec<ContactItem> {
    vec![
        ContactItem::linked(ContactKind::Email),
        ContactItem {
            kind: ContactKind::Phone,
            linked: phone_linked,
        },
        ContactItem::linked(ContactKind::Linkedin),
        ContactItem::linked(ContactKind::Portfolio),
    ]
}

fn underlined(text_color: Rgb, rule_color: Rgb, rule_width: f32, rule_length: f32) -> HeaderStyle {
    HeaderStyle::Underlined {
        text: helvetica_bold(9.0, text_color),
        rule_color,
        rule_width,
        rule_length,
        rule_gap: 1.5,
        after: 5.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// 1. Midnight Mono: dark sidebar, monospaced accents
// ────────────────────────────────────────────────────────────────────────────

pub fn midnight_mono() -> TemplateSpec {
    let side_width = 62.0;
    let main_x = side_width + 8.0;
    let main_width = A4_WIDTH - main_x - MARGIN;

    let sidebar = Flow {
        frame: Frame { x: 10.0, width: 42.0 },
        start: FlowStart::At(22.0),
        header: HeaderStyle::Underlined {
            text: helvetica_bold(7.0, SLATE_400),
            rule_color: GREEN,
            rule_width: 0.4,
            rule_length: 42.0,
            rule_gap: 1.0,
            after: 5.0,
        },
        sections: vec![
            Section::Heading {
                text: HeadingText::Name,
                style: helvetica_bold(16.0, WHITE),
                advance: 6.0,
            },
            Section::Heading {
                text: HeadingText::Subtitle,
                style: courier(7.5, GREEN),
                advance: 12.0,
            },
            Section::Header("CONTACT"),
            Section::ContactList(ContactListStyle {
                text: courier(6.5, CYAN),
                items: vec![
                    ContactKind::Email,
                    ContactKind::Phone,
                    ContactKind::Linkedin,
                    ContactKind::Github,
                    ContactKind::Portfolio,
                ],
                line_advance: 4.5,
                link_height: CONTACT_LINK_HEIGHT,
            }),
            Section::Gap(4.0),
            Section::Header("SKILLS"),
            Section::Skills(SkillsStyle::Grouped {
                title: helvetica_bold(6.5, WHITE),
                title_advance: 4.0,
                item: courier(6.0, SLATE_300),
                item_prefix: "> ",
                item_advance: 3.5,
                group_gap: 2.0,
            }),
            Section::Gap(2.0),
            Section::Header("EDUCATION"),
            Section::Education(EducationStyle::Stacked {
                degree: helvetica_bold(6.5, WHITE),
                institution: courier(6.0, SLATE_400),
                period: courier(6.0, GREEN),
                wrap: Some(44.0),
                advance: 7.0,
            }),
        ],
    };

    let main = Flow {
        frame: Frame {
            x: main_x,
            width: main_width,
        },
        start: FlowStart::At(22.0),
        header: underlined(SLATE_900, GREEN, 0.6, 30.0),
        sections: vec![
            Section::Header("SUMMARY"),
            Section::Summary(BodyStyle {
                text: helvetica(8.0, SLATE_700),
                line_height: 3.8,
                after: 4.0,
            }),
            Section::Header("EXPERIENCE"),
            Section::Experience(ExperienceStyle {
                layout: ExperienceLayout::Stacked {
                    company: helvetica_italic(7.5, SLATE_500),
                },
                role: helvetica_bold(8.5, SLATE_900),
                period: courier(7.0, GREEN),
                line_advance: 4.0,
                description: BodyStyle {
                    text: helvetica(7.5, SLATE_700),
                    line_height: 3.5,
                    after: 4.0,
                },
            }),
            Section::Gap(1.0),
            Section::Header("KEY PROJECTS"),
            Section::Projects(ProjectStyle {
                name: helvetica_bold(8.0, SLATE_900),
                name_advance: 3.5,
                links: LinkPlacement::AfterTech,
                link_size: 6.5,
                link_color: CYAN,
                tech: courier(6.5, SLATE_500),
                tech_brackets: false,
                tech_advance: 4.0,
                bullet: "•",
                highlight: helvetica(7.0, SLATE_700),
                highlight_indent: 2.0,
                highlight_inset: 2.0,
                highlight_line_height: 3.2,
                highlight_gap: 1.0,
                after: 3.0,
            }),
        ],
    };

    TemplateSpec {
        label: "Midnight Mono",
        background: vec![FillRect {
            x: 0.0,
            y: 0.0,
            w: side_width,
            h: A4_HEIGHT,
            color: SLATE_900,
        }],
        flows: vec![sidebar, main],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// 2. Bold Blocks: banner header, banded section titles
// ────────────────────────────────────────────────────────────────────────────

pub fn bold_blocks() -> TemplateSpec {
    let body = Flow {
        frame: Frame {
            x: MARGIN,
            width: CONTENT_WIDTH,
        },
        start: FlowStart::At(17.0),
        header: HeaderStyle::Banded {
            text: helvetica_bold(9.0, SLATE_900),
            band: SLATE_100,
            accent: GREEN,
        },
        sections: vec![
            Section::Heading {
                text: HeadingText::Name,
                style: helvetica_bold(22.0, WHITE),
                advance: 8.0,
            },
            Section::Heading {
                text: HeadingText::Subtitle,
                style: helvetica(10.0, GREEN),
                advance: 7.0,
            },
            Section::ContactRow(ContactRowStyle {
                text: helvetica(7.0, SLATE_400),
                separator: "  ·  ",
                separator_color: SLATE_400,
                link_color: None,
                items: banner_contacts(true),
                link_height: CONTACT_LINK_HEIGHT,
                advance: 12.0,
            }),
            Section::Header("PROFESSIONAL SUMMARY"),
            Section::Summary(BodyStyle {
                text: helvetica(8.0, SLATE_700),
                line_height: 3.8,
                after: 6.0,
            }),
            Section::Header("WORK EXPERIENCE"),
            Section::Experience(ExperienceStyle {
                layout: ExperienceLayout::Inline,
                role: helvetica_bold(8.5, SLATE_900),
                period: helvetica(7.0, SLATE_500),
                line_advance: 4.0,
                description: BodyStyle {
                    text: helvetica(7.5, SLATE_700),
                    line_height: 3.5,
                    after: 4.0,
                },
            }),
            Section::Gap(2.0),
            Section::Header("KEY PROJECTS"),
            Section::Projects(ProjectStyle {
                name: helvetica_bold(8.0, SLATE_900),
                name_advance: 3.5,
                links: LinkPlacement::AfterName,
                link_size: 7.0,
                link_color: BLUE,
                tech: courier(6.5, SLATE_500),
                tech_brackets: false,
                tech_advance: 4.0,
                bullet: "-",
                highlight: helvetica(7.0, SLATE_700),
                highlight_indent: 3.0,
                highlight_inset: 4.0,
                highlight_line_height: 3.2,
                highlight_gap: 1.0,
                after: 3.0,
            }),
            Section::Gap(1.0),
            Section::Header("TECHNICAL SKILLS"),
            Section::Skills(SkillsStyle::TagCloud(PillStyle {
                text: helvetica(6.5, SLATE_800),
                fill: SLATE_200,
                outline: None,
                padding: 2.0,
                height: 5.0,
                radius: 1.5,
                rise: 3.5,
                gap: 2.0,
                row_advance: 7.0,
                after: 11.0,
            })),
            Section::Header("EDUCATION"),
            Section::Education(EducationStyle::Inline {
                degree: helvetica_bold(8.0, SLATE_900),
                detail: helvetica(7.5, SLATE_700),
                advance: 4.0,
            }),
        ],
    };

    TemplateSpec {
        label: "Bold Blocks",
        background: vec![FillRect {
            x: 0.0,
            y: 0.0,
            w: A4_WIDTH,
            h: 36.0,
            color: SLATE_800,
        }],
        flows: vec![body],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// 3. Neon Accent: white page, green stripe, split skills/education footer
// ────────────────────────────────────────────────────────────────────────────

pub fn neon_accent() -> TemplateSpec {
    let x = MARGIN + 6.0;
    let width = A4_WIDTH - x - MARGIN;
    let half = width / 2.0 - 3.0;

    let main = Flow {
        frame: Frame { x, width },
        start: FlowStart::At(20.0),
        header: underlined(SLATE_900, GREEN, 0.5, 24.0),
        sections: vec![
            Section::Heading {
                text: HeadingText::Name,
                style: helvetica_bold(24.0, SLATE_900),
                advance: 7.0,
            },
            Section::Heading {
                text: HeadingText::Subtitle,
                style: helvetica(11.0, GREEN),
                advance: 8.0,
            },
            Section::ContactRow(ContactRowStyle {
                text: helvetica(7.0, SLATE_500),
                separator: "  |  ",
                separator_color: SLATE_500,
                link_color: Some(BLUE),
                items: banner_contacts(false),
                link_height: CONTACT_LINK_HEIGHT,
                advance: 5.0,
            }),
            Section::Divider {
                color: SLATE_200,
                width: 0.3,
                advance: 6.0,
            },
            Section::Summary(BodyStyle {
                text: helvetica(8.0, SLATE_700),
                line_height: 3.8,
                after: 5.0,
            }),
            Section::Header("EXPERIENCE"),
            Section::Experience(ExperienceStyle {
                layout: ExperienceLayout::Stacked {
                    company: helvetica_italic(7.5, SLATE_500),
                },
                role: helvetica_bold(8.5, SLATE_900),
                period: helvetica(7.0, GREEN),
                line_advance: 4.0,
                description: BodyStyle {
                    text: helvetica(7.5, SLATE_700),
                    line_height: 3.5,
                    after: 4.0,
                },
            }),
            Section::Gap(1.0),
            Section::Header("PROJECTS"),
            Section::Projects(ProjectStyle {
                name: helvetica_bold(8.0, SLATE_900),
                name_advance: 3.5,
                links: LinkPlacement::AfterName,
                link_size: 6.5,
                link_color: GREEN,
                tech: courier(6.5, SLATE_500),
                tech_brackets: false,
                tech_advance: 4.0,
                bullet: "–",
                highlight: helvetica(7.0, SLATE_700),
                highlight_indent: 2.0,
                highlight_inset: 3.0,
                highlight_line_height: 3.2,
                highlight_gap: 1.0,
                after: 3.0,
            }),
            Section::Gap(1.0),
        ],
    };

    let footer_header = underlined(SLATE_900, GREEN, 0.5, 18.0);

    let skills = Flow {
        frame: Frame { x, width: half },
        start: FlowStart::After(0),
        header: footer_header,
        sections: vec![
            Section::Header("SKILLS"),
            Section::Skills(SkillsStyle::CommaLines {
                text: helvetica(7.0, SLATE_700),
                advance: 4.0,
            }),
        ],
    };

    let education = Flow {
        frame: Frame {
            x: x + half + 6.0,
            width: half,
        },
        start: FlowStart::After(0),
        header: footer_header,
        sections: vec![
            Section::Header("EDUCATION"),
            Section::Education(EducationStyle::Stacked {
                degree: helvetica_bold(7.5, SLATE_900),
                institution: helvetica(7.0, SLATE_700),
                period: helvetica(7.0, GREEN),
                wrap: Some(half),
                advance: 7.0,
            }),
        ],
    };

    TemplateSpec {
        label: "Neon Accent",
        background: vec![FillRect {
            x: 0.0,
            y: 0.0,
            w: 4.0,
            h: A4_HEIGHT,
            color: GREEN,
        }],
        flows: vec![main, skills, education],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// 4. Terminal Dark: full dark page, shell-prompt styling
// ────────────────────────────────────────────────────────────────────────────

pub fn terminal_dark() -> TemplateSpec {
    let body = Flow {
        frame: Frame {
            x: MARGIN,
            width: CONTENT_WIDTH,
        },
        start: FlowStart::At(18.0),
        header: HeaderStyle::Comment {
            text: courier_bold(7.5, GREEN),
            after: 5.0,
        },
        sections: vec![
            Section::Heading {
                text: HeadingText::Literal("$ whoami"),
                style: courier_bold(8.0, GREEN),
                advance: 6.0,
            },
            Section::Heading {
                text: HeadingText::Name,
                style: helvetica_bold(20.0, WHITE),
                advance: 6.0,
            },
            Section::Heading {
                text: HeadingText::Subtitle,
                style: courier(8.0, GREEN),
                advance: 7.0,
            },
            Section::ContactRow(ContactRowStyle {
                text: courier(6.5, SLATE_300),
                separator: " | ",
                separator_color: SLATE_500,
                link_color: Some(CYAN),
                items: banner_contacts(false),
                link_height: CONTACT_LINK_HEIGHT,
                advance: 5.0,
            }),
            Section::Divider {
                color: SLATE_800,
                width: 0.3,
                advance: 5.0,
            },
            Section::Header("SUMMARY"),
            Section::Summary(BodyStyle {
                text: helvetica(7.5, SLATE_300),
                line_height: 3.6,
                after: 5.0,
            }),
            Section::Header("EXPERIENCE"),
            Section::Experience(ExperienceStyle {
                layout: ExperienceLayout::Stacked {
                    company: helvetica_italic(7.0, SLATE_400),
                },
                role: helvetica_bold(8.0, WHITE),
                period: courier(6.5, GREEN),
                line_advance: 4.0,
                description: BodyStyle {
                    text: helvetica(7.0, SLATE_300),
                    line_height: 3.3,
                    after: 4.0,
                },
            }),
            Section::Gap(1.0),
            Section::Header("PROJECTS"),
            Section::Projects(ProjectStyle {
                name: helvetica_bold(7.5, WHITE),
                name_advance: 3.5,
                links: LinkPlacement::AfterName,
                link_size: 6.5,
                link_color: CYAN,
                tech: courier(6.0, GREEN),
                tech_brackets: true,
                tech_advance: 4.0,
                bullet: ">",
                highlight: helvetica(6.5, SLATE_300),
                highlight_indent: 2.0,
                highlight_inset: 3.0,
                highlight_line_height: 3.0,
                highlight_gap: 1.0,
                after: 3.0,
            }),
            Section::Gap(1.0),
            Section::Header("SKILLS"),
            Section::Skills(SkillsStyle::TagCloud(PillStyle {
                text: courier(6.0, SLATE_300),
                fill: SLATE_800,
                outline: Some((GREEN, 0.15)),
                padding: 2.0,
                height: 5.0,
                radius: 1.0,
                rise: 3.5,
                gap: 2.0,
                row_advance: 6.0,
                after: 8.0,
            })),
            Section::Header("EDUCATION"),
            Section::Education(EducationStyle::Stacked {
                degree: helvetica_bold(7.5, WHITE),
                institution: helvetica(7.0, SLATE_400),
                period: courier(7.0, GREEN),
                wrap: None,
                advance: 4.0,
            }),
        ],
    };

    TemplateSpec {
        label: "Terminal Dark",
        background: vec![FillRect {
            x: 0.0,
            y: 0.0,
            w: A4_WIDTH,
            h: A4_HEIGHT,
            color: SLATE_900,
        }],
        flows: vec![body],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// 5. Dual Column: blue banner, experience left, projects right
// ────────────────────────────────────────────────────────────────────────────

pub fn dual_column() -> TemplateSpec {
    let column = CONTENT_WIDTH / 2.0 - 4.0;
    let right_x = MARGIN + column + 8.0;
    let header = underlined(BLUE, BLUE, 0.4, 20.0);

    let banner = Flow {
        frame: Frame {
            x: MARGIN,
            width: CONTENT_WIDTH,
        },
        start: FlowStart::At(15.0),
        header,
        sections: vec![
            Section::Heading {
                text: HeadingText::Name,
                style: helvetica_bold(20.0, WHITE),
                advance: 8.0,
            },
            Section::Heading {
                text: HeadingText::Subtitle,
                style: helvetica(10.0, BLUE_200),
                advance: 6.0,
            },
            Section::ContactRow(ContactRowStyle {
                text: helvetica(6.5, BLUE_100),
                separator: "  ·  ",
                separator_color: BLUE_100,
                link_color: None,
                items: banner_contacts(false),
                link_height: CONTACT_LINK_HEIGHT,
                advance: 11.0,
            }),
        ],
    };

    let left = Flow {
        frame: Frame {
            x: MARGIN,
            width: column,
        },
        start: FlowStart::At(40.0),
        header,
        sections: vec![
            Section::Header("SUMMARY"),
            Section::Summary(BodyStyle {
                text: helvetica(7.5, SLATE_700),
                line_height: 3.5,
                after: 5.0,
            }),
            Section::Header("EXPERIENCE"),
            Section::Experience(ExperienceStyle {
                layout: ExperienceLayout::CompanyPeriod {
                    meta: helvetica(7.0, BLUE),
                },
                role: helvetica_bold(8.0, SLATE_900),
                period: helvetica(7.0, BLUE),
                line_advance: 3.5,
                description: BodyStyle {
                    text: helvetica(7.0, SLATE_700),
                    line_height: 3.3,
                    after: 4.0,
                },
            }),
            Section::Header("SKILLS"),
            Section::Skills(SkillsStyle::Labelled {
                title: helvetica_bold(7.0, SLATE_900),
                items: helvetica(7.0, SLATE_700),
                advance: 4.5,
            }),
            Section::Gap(3.0),
            Section::Header("EDUCATION"),
            Section::Education(EducationStyle::Stacked {
                degree: helvetica_bold(7.5, SLATE_900),
                institution: helvetica(7.0, SLATE_700),
                period: helvetica(7.0, BLUE),
                wrap: Some(column),
                advance: 7.0,
            }),
        ],
    };

    let right = Flow {
        frame: Frame {
            x: right_x,
            width: column,
        },
        start: FlowStart::At(40.0),
        header,
        sections: vec![
            Section::Header("KEY PROJECTS"),
            Section::Projects(ProjectStyle {
                name: helvetica_bold(7.5, SLATE_900),
                name_advance: 3.0,
                links: LinkPlacement::OwnLine { advance: 3.5 },
                link_size: 6.0,
                link_color: BLUE,
                tech: courier(6.0, SLATE_500),
                tech_brackets: false,
                tech_advance: 4.0,
                bullet: "•",
                highlight: helvetica(6.5, SLATE_700),
                highlight_indent: 1.0,
                highlight_inset: 2.0,
                highlight_line_height: 3.0,
                highlight_gap: 1.0,
                after: 4.0,
            }),
        ],
    };

    TemplateSpec {
        label: "Dual Column",
        background: vec![FillRect {
            x: 0.0,
            y: 0.0,
            w: A4_WIDTH,
            h: 32.0,
            color: BLUE,
        }],
        flows: vec![banner, left, right],
    }
}
