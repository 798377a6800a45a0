//! Static project catalog shown by the portfolio page

/// A portfolio entry. The catalog is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Stable selection key, unique within the catalog
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Technology labels in display order
    pub tech_stack: &'static [&'static str],
    pub repository_url: &'static str,
    pub preview_url: &'static str,
}

/// The portfolio, in display order
pub const CATALOG: &[ProjectRecord] = &[
    ProjectRecord {
        id: "1",
        title: "Real-Time Logistics Dashboard",
        description: "A full-stack application built using React and Node.js to provide real-time tracking and optimization for delivery logistics. Features include live map updates and anomaly detection.",
        tech_stack: &["React", "Node.js", "MongoDB", "WebSockets"],
        repository_url: "https://github.com/qtech/logistics-dashboard",
        preview_url: "https://demo.qtech.com/logistics",
    },
    ProjectRecord {
        id: "2",
        title: "SaaS Billing API Integration",
        description: "Consulting and development of a secure, highly scalable microservice for managing subscription billing and payment processing via Stripe and AWS Lambda.",
        tech_stack: &["Python/Lambda", "Stripe API", "PostgreSQL", "AWS"],
        repository_url: "https://github.com/qtech/billing-service",
        preview_url: "https://demo.qtech.com/billing-api",
    },
    ProjectRecord {
        id: "3",
        title: "E-commerce Headless CMS",
        description: "Migration of a legacy e-commerce platform to a modern headless architecture using Next.js and a cloud-based CMS, significantly improving load times and content management workflows.",
        tech_stack: &["Next.js", "Sanity/Strapi CMS", "Tailwind CSS"],
        repository_url: "https://github.com/qtech/headless-shop",
        preview_url: "https://demo.qtech.com/ecommerce",
    },
];

/// Look up a record by id in the given catalog
pub fn find_project<'a>(catalog: &'a [ProjectRecord], id: &str) -> Option<&'a ProjectRecord> {
    catalog.iter().find(|project| project.id == id)
}

/// Which outbound link of a project to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    Preview,
    Repository,
}

impl ProjectRecord {
    pub fn link(&self, kind: ProjectLink) -> &'static str {
        match kind {
            ProjectLink::Preview => self.preview_url,
            ProjectLink::Repository => self.repository_url,
        }
    }
}
