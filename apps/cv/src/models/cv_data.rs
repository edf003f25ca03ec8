//! Built-in résumé content. Edit here to update the CV, or point `CV_DATA_PATH`
//! at a JSON document of the same shape.

use once_cell::sync::Lazy;

use crate::models::resume::{
    Education, LinkRef, Profile, Project, Resume, SkillCategory, Skills, WorkExperience,
};

static RESUME: Lazy<Resume> = Lazy::new(build);

/// The process-wide résumé snapshot.
pub fn resume() -> &'static Resume {
    &RESUME
}

fn s(v: &str) -> String {
    v.to_string()
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

fn build() -> Resume {
    Resume {
        profile: Profile {
            name: s("Nafis Kabbo"),
            title: s("Mobile Developer"),
            subtitle: s("Native Android | Native iOS | Flutter"),
            email: s("nafiskabbo30@gmail.com"),
            phone: s("+880 1772 988050"),
            location: s("Bangladesh"),
            linkedin: LinkRef {
                label: s("linkedin.com/in/nafiskabbo30"),
                url: s("https://www.linkedin.com/in/nafiskabbo30/"),
            },
            github: LinkRef {
                label: s("github.com/nafiskabbo"),
                url: s("https://github.com/nafiskabbo"),
            },
            portfolio: LinkRef {
                label: s("nafiskabbo.dev"),
                url: s("https://nafiskabbo.dev"),
            },
        },
        summary: s(
            "Results-driven Mobile Developer with 5+ years of experience shipping production \
             apps across Android, iOS, and Flutter — delivering AI-powered, user-centric \
             products that have reached 50K+ users worldwide.",
        ),
        experience: vec![
            WorkExperience {
                role: s("Mobile Developer"),
                company: s("Plottwist.org"),
                period: s("2025 — Present"),
                description: s(
                    "Building a mental wellness platform that leverages AI-driven frequency \
                     therapy and sound healing to improve user well-being and emotional resilience.",
                ),
            },
            WorkExperience {
                role: s("Freelance Mobile Developer"),
                company: s("Self-Employed"),
                period: s("2020 — Present"),
                description: s(
                    "Delivered 10+ production apps across fintech, health-tech, and AI — serving \
                     clients from startups to enterprises on Freelancer & Upwork.",
                ),
            },
        ],
        projects: vec![
            Project {
                name: s("Heal Tone AI Frequency Sounds"),
                tech: s("Flutter, AI, Firebase"),
                android_url: Some(s(
                    "https://play.google.com/store/apps/details?id=com.anythingspeaker.healtone",
                )),
                ios_url: Some(s(
                    "https://apps.apple.com/us/app/heal-tone-ai-frequency-sounds/id6746277347",
                )),
                web_url: Some(s("https://healtone.org")),
                highlights: list(&[
                    "AI-generated therapeutic frequencies with 15K+ downloads in first 3 months",
                    "Real-time audio engine processing 40+ frequency combinations simultaneously",
                ]),
            },
            Project {
                name: s("eMaisha Pay"),
                tech: s("Native Android, Kotlin, MVVM"),
                android_url: Some(s(
                    "https://play.google.com/store/apps/details?id=com.cabraltech.emaishacorporateapp",
                )),
                ios_url: None,
                web_url: None,
                highlights: list(&[
                    "Automated payment reconciliation reducing manual processing time by 70%",
                    "Implemented biometric auth and end-to-end encryption for 5K+ daily transactions",
                ]),
            },
            Project {
                name: s("Santa Personal Video & Call"),
                tech: s("Kotlin, SwiftUI, AI Video"),
                android_url: Some(s(
                    "https://play.google.com/store/apps/details?id=com.santa.chatbot",
                )),
                ios_url: Some(s(
                    "https://apps.apple.com/us/app/santa-personal-video-call/id6755621227",
                )),
                web_url: Some(s("https://santachat.org")),
                highlights: list(&[
                    "Native Android (Kotlin) + Native iOS (SwiftUI) — 30K+ seasonal downloads",
                    "AI-powered real-time video calling with <200ms latency and personalized responses",
                ]),
            },
            Project {
                name: s("DeenHub: Quran, Prayer & Qibla"),
                tech: s("Flutter, RAG, AI, Firebase"),
                android_url: Some(s(
                    "https://play.google.com/store/apps/details?id=com.deenhub.app",
                )),
                ios_url: Some(s(
                    "https://apps.apple.com/us/app/deenhub-quran-prayer-qibla/id6749580911",
                )),
                web_url: None,
                highlights: list(&[
                    "Built RAG-based Hadith AI system — 85% improvement in accurate hadith retrieval",
                    "Quran-Hadith cross-referencing engine with nearby mosque finder using geolocation",
                ]),
            },
        ],
        skills: Skills {
            categories: vec![
                SkillCategory {
                    title: s("Mobile"),
                    items: list(&["Kotlin", "SwiftUI", "Flutter", "Dart", "Jetpack Compose"]),
                },
                SkillCategory {
                    title: s("Architecture"),
                    items: list(&["MVVM", "Clean Architecture", "BLoC", "Provider"]),
                },
                SkillCategory {
                    title: s("Backend"),
                    items: list(&["Firebase", "Supabase", "REST APIs", "Node.js"]),
                },
                SkillCategory {
                    title: s("Tools"),
                    items: list(&["Git", "CI/CD", "Figma", "Xcode", "Android Studio"]),
                },
            ],
        },
        education: Education {
            degree: s("B.Sc. in Computer Science & Engineering"),
            institution: s("Rajshahi University of Engineering & Technology (RUET)"),
            period: s("2024 — 2028"),
        },
    }
}
