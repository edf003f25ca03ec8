use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CvError;

/// A human-readable label paired with the URL it resolves to.
/// The label is what gets drawn; the URL is what the link region points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: LinkRef,
    pub github: LinkRef,
    pub portfolio: LinkRef,
}

/// Contact entries a template can show in its identity block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Email,
    Phone,
    Linkedin,
    Github,
    Portfolio,
}

impl Profile {
    /// Returns the drawn label and link target for a contact entry.
    pub fn contact(&self, kind: ContactKind) -> LinkRef {
        match kind {
            ContactKind::Email => LinkRef {
                label: self.email.clone(),
                url: format!("mailto:{}", self.email),
            },
            ContactKind::Phone => LinkRef {
                label: self.phone.clone(),
                url: format!("tel:{}", self.phone_digits()),
            },
            ContactKind::Linkedin => self.linkedin.clone(),
            ContactKind::Github => self.github.clone(),
            ContactKind::Portfolio => self.portfolio.clone(),
        }
    }

    /// Phone number with all whitespace removed, as used in `tel:` links.
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub role: String,
    pub company: String,
    /// Free-text range, e.g. "2020 — Present".
    pub period: String,
    pub description: String,
}

/// The fixed platform kinds a project can link to, in rendering priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PlatformKind {
    Android,
    Ios,
    Web,
}

impl PlatformKind {
    pub const PRIORITY: [PlatformKind; 3] =
        [PlatformKind::Android, PlatformKind::Ios, PlatformKind::Web];

    pub fn label(self) -> &'static str {
        match self {
            PlatformKind::Android => "Android",
            PlatformKind::Ios => "iOS",
            PlatformKind::Web => "Web",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: PlatformKind,
    pub url: String,
}

impl ProjectLink {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Free-text technology tag string, e.g. "Flutter, AI, Firebase".
    pub tech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    pub highlights: Vec<String>,
}

impl Project {
    pub fn url_for(&self, kind: PlatformKind) -> Option<&str> {
        match kind {
            PlatformKind::Android => self.android_url.as_deref(),
            PlatformKind::Ios => self.ios_url.as_deref(),
            PlatformKind::Web => self.web_url.as_deref(),
        }
    }

    /// Present links in fixed priority order (Android, iOS, Web).
    /// Empty URLs count as absent.
    pub fn links(&self) -> Vec<ProjectLink> {
        PlatformKind::PRIORITY
            .iter()
            .filter_map(|&kind| {
                self.url_for(kind)
                    .filter(|url| !url.is_empty())
                    .map(|url| ProjectLink {
                        kind,
                        url: url.to_string(),
                    })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
}

impl Skills {
    /// All skill names across every category, in category order.
    pub fn flattened(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(String::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

/// The full résumé snapshot every template renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub profile: Profile,
    pub summary: String,
    pub experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub education: Education,
}

impl Resume {
    /// Loads a résumé from a JSON document with the same shape as [`Resume`].
    pub fn from_json_file(path: &Path) -> Result<Self, CvError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CvError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv_data;

    fn project(android: Option<&str>, ios: Option<&str>, web: Option<&str>) -> Project {
        Project {
            name: "Example App".to_string(),
            tech: "Flutter".to_string(),
            android_url: android.map(str::to_string),
            ios_url: ios.map(str::to_string),
            web_url: web.map(str::to_string),
            highlights: vec!["One".to_string(), "Two".to_string()],
        }
    }

    #[test]
    fn test_links_follow_priority_order() {
        let p = project(Some("https://a"), Some("https://i"), Some("https://w"));
        let kinds: Vec<PlatformKind> = p.links().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![PlatformKind::Android, PlatformKind::Ios, PlatformKind::Web]
        );
    }

    #[test]
    fn test_links_skip_missing_and_empty() {
        let p = project(None, Some(""), Some("https://w"));
        let links = p.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label(), "Web");
        assert_eq!(links[0].url, "https://w");
    }

    #[test]
    fn test_links_empty_when_no_platforms() {
        assert!(project(None, None, None).links().is_empty());
    }

    #[test]
    fn test_contact_urls() {
        let profile = &cv_data::resume().profile;
        assert_eq!(
            profile.contact(ContactKind::Email).url,
            format!("mailto:{}", profile.email)
        );
        let tel = profile.contact(ContactKind::Phone).url;
        assert!(tel.starts_with("tel:+"));
        assert!(!tel.contains(' '));
    }

    #[test]
    fn test_flattened_skills_keep_category_order() {
        let skills = Skills {
            categories: vec![
                SkillCategory {
                    title: "A".to_string(),
                    items: vec!["a1".to_string(), "a2".to_string()],
                },
                SkillCategory {
                    title: "B".to_string(),
                    items: vec![],
                },
                SkillCategory {
                    title: "C".to_string(),
                    items: vec!["c1".to_string()],
                },
            ],
        };
        assert_eq!(skills.flattened(), vec!["a1", "a2", "c1"]);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        let json = serde_json::to_string_pretty(cv_data::resume()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Resume::from_json_file(&path).unwrap();
        assert_eq!(loaded.profile.name, cv_data::resume().profile.name);
        assert_eq!(loaded.projects.len(), cv_data::resume().projects.len());
    }

    #[test]
    fn test_missing_json_file_is_io_error() {
        let err = Resume::from_json_file(Path::new("/nonexistent/cv.json")).unwrap_err();
        assert!(matches!(err, CvError::Io { .. }));
    }
}
