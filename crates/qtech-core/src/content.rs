//! Fixed copy for the site chrome and the static pages.
//!
//! Text may contain `**bold**` markers; the TUI renders them as bold spans.

use chrono::Datelike;

pub const COMPANY_NAME: &str = "Q Tech Digital LLC";
pub const COMPANY_TAGLINE: &str = "Full Stack Consulting & Development";

/// A titled card of copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

// ─────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────

pub const HOME_HEADLINE: &str = "Build the future of your business, one **project** at a time.";

pub const HOME_INTRO: &str = "**Q Tech Digital LLC** is your partner for **end-to-end digital solutions,** providing **full-stack consulting, development, and expert project management.** Our goal is delivering **robust, scalable web applications,** whether you need a quick-start template or a custom-built scope.";

pub const HOME_SERVICES: [Card; 3] = [
    Card {
        title: "Consulting",
        body: "Strategic planning and architectural guidance to ensure a solid foundation for your digital transformation.",
    },
    Card {
        title: "Development",
        body: "Full-stack engineering of robust, high-performance web and mobile applications tailored to your business needs.",
    },
    Card {
        title: "Project Management",
        body: "Agile methodologies to ensure projects are delivered on time, within budget, and to specification.",
    },
];

// ─────────────────────────────────────────────────────────────────
// Portfolio
// ─────────────────────────────────────────────────────────────────

pub const PORTFOLIO_HEADLINE: &str = "Our Select Project Portfolio";
pub const PORTFOLIO_LIST_TITLE: &str = "Project List";
pub const PORTFOLIO_NOTE: &str = "Note: All GitHub links are mock placeholders for demonstration.";

// ─────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────

pub const CONTACT_HEADLINE: &str = "Let's Discuss Your Project";
pub const CONTACT_INTRO: &str = "Tell us about your digital goals, and we'll provide a roadmap for success. Required fields are marked with an asterisk (*).";
pub const CONTACT_FORM_TITLE: &str = "Project Inquiry";
pub const CONTACT_NAME_PLACEHOLDER: &str = "Your Name *";
pub const CONTACT_EMAIL_PLACEHOLDER: &str = "Your Work Email *";
pub const CONTACT_MESSAGE_PLACEHOLDER: &str = "Briefly describe your project...";
pub const CONTACT_SUBMIT_LABEL: &str = "Submit Consultation Request";
pub const CONTACT_SENDING_LABEL: &str = "Sending...";
pub const CONTACT_SUCCESS: &str =
    "Thank you! Your request has been received. We'll be in touch shortly.";
pub const CONTACT_FAILURE: &str =
    "There was a problem submitting your request. Please try again.";

// ─────────────────────────────────────────────────────────────────
// About
// ─────────────────────────────────────────────────────────────────

pub const ABOUT_HEADLINE: &str = "The Q Tech Digital Difference";
pub const ABOUT_MISSION: &str = "Our mission is to empower businesses with efficient, custom-built digital solutions that solve real-world problems and drive growth.";
pub const ABOUT_VALUES_TITLE: &str = "Core Values:";
pub const ABOUT_VALUES: [&str; 3] = [
    "**Transparency:** Clear communication and honest roadmaps from start to finish.",
    "**Scalability:** Building solutions that grow seamlessly with your business.",
    "**Quality:** Adherence to modern best practices in coding and security.",
];

// ─────────────────────────────────────────────────────────────────
// Fallback and footer
// ─────────────────────────────────────────────────────────────────

pub const NOT_FOUND: &str = "404: Page Not Found";

/// Footer copyright line for the given year
pub fn footer_text(year: i32) -> String {
    format!("© {} {}. All Rights Reserved.", year, COMPANY_NAME)
}

/// Current local calendar year
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Split text on `**` markers into `(segment, bold)` pairs.
///
/// An unmatched trailing marker is kept as literal text.
pub fn emphasis_segments(text: &str) -> Vec<(&str, bool)> {
    let parts: Vec<&str> = text.split("**").collect();
    let balanced = parts.len() % 2 == 1;
    let mut segments = Vec::with_capacity(parts.len());

    for (index, part) in parts.iter().enumerate() {
        let is_last = index == parts.len() - 1;
        if !balanced && is_last {
            // Odd number of markers: the final opener has no closer
            if !part.is_empty() || index > 0 {
                segments.push(("**", false));
            }
            if !part.is_empty() {
                segments.push((*part, false));
            }
            continue;
        }
        if !part.is_empty() {
            segments.push((*part, index % 2 == 1));
        }
    }

    segments
}
