//! Compile-time page content.
//!
//! DESIGN
//! ======
//! Everything the page shows apart from the theme lives here as `'static`
//! data. Components read these slices directly; nothing in this module is
//! created or mutated at runtime, so rendered sections are a pure function
//! of what is declared below.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Identity shown at the top of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
}

/// Which network a social link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

impl SocialKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Email => "Email",
        }
    }

    /// Short glyph rendered inside the link.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::GitHub => "GH",
            Self::LinkedIn => "in",
            Self::Email => "✉",
        }
    }

    /// `mailto:` hands off to the mail client, so it stays in place.
    #[must_use]
    pub fn opens_new_context(self) -> bool {
        !matches!(self, Self::Email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub target: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A labeled line in the skills card, e.g. "Languages: Java, Python".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

impl SkillGroup {
    /// Comma-joined item list as displayed after the label.
    #[must_use]
    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}

/// One portfolio project rendered as a clickable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub link_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CertificationEntry {
    pub name: &'static str,
    pub issuer: &'static str,
}

impl CertificationEntry {
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} – {}", self.name, self.issuer)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Shashank Atmakur",
    tagline: "AI Developer | Full Stack Engineer | IoT Innovator",
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { kind: SocialKind::GitHub, target: "https://github.com/ShashankAtmakur" },
    SocialLink { kind: SocialKind::LinkedIn, target: "https://linkedin.com/in/ShashankAtmakur" },
    SocialLink { kind: SocialKind::Email, target: "mailto:1338shashank@gmail.com" },
];

pub const RESUME: ResumeLink = ResumeLink { label: "Download Resume", href: "/ShashankAtmakur_Resume.pdf" };

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup { label: "Languages", items: &["Java", "Python", "C++", "JavaScript"] },
    SkillGroup {
        label: "Web & Frameworks",
        items: &["React", "Flask", "Node.js", "Spring Boot", "Next.js"],
    },
    SkillGroup { label: "Databases", items: &["MySQL", "MongoDB", "Firebase"] },
    SkillGroup { label: "Tools", items: &["Git", "Postman", "VS Code", "Arduino IDE"] },
    SkillGroup {
        label: "Concepts",
        items: &["Deep Learning", "IoT", "Adversarial ML", "Cybersecurity"],
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Adversarial CAPTCHA Attacks",
        description: "Built an FGSM-based adversarial attack system using CNN and MobileNet, deployed as a Flask web app.",
        link_url: "https://github.com/ShashankAtmakur/IAASOIC",
    },
    ProjectEntry {
        title: "Smart Pole (IoT Emergency System)",
        description: "Arduino-based system for women's safety with GPS, GSM, buzzer, and LED alert integration.",
        link_url: "https://github.com/ShashankAtmakur/Smart-Pole-Safety-System",
    },
    ProjectEntry {
        title: "ChatGPT Web UI Clone",
        description: "Chat-style web page replicating ChatGPT's interface with responsive layout.",
        link_url: "https://github.com/ShashankAtmakur/ChatGPTWebPage",
    },
    ProjectEntry {
        title: "Hospital Management Website",
        description: "Simple static HTML/CSS website for hospital services and appointment booking.",
        link_url: "https://github.com/ShashankAtmakur/Hospital-Management-Html",
    },
];

pub const CERTIFICATIONS: &[CertificationEntry] = &[
    CertificationEntry { name: "Java Programming", issuer: "Oracle Academy" },
    CertificationEntry { name: "Cybersecurity Essentials & Ethical Hacking", issuer: "Cisco" },
    CertificationEntry { name: "JavaScript Essentials", issuer: "Cisco Network Academy" },
    CertificationEntry { name: "Apache Maven", issuer: "Simplilearn" },
];

pub const FOOTER_TEXT: &str = "© 2025 Shashank Atmakur. Built with Rust & Leptos.";
