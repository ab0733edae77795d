// =============================================================================
// Data Tables: projects and page copy
// =============================================================================
//
// Read-only records consumed by the engine at startup. Replace the sample
// values with real content; the shapes are what the engine relies on.
//
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::format_project_slug;

// -----------------------------------------------------------------------------
// Projects
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Backend,
    Mobile,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Web, Category::Backend, Category::Mobile];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Backend => "backend",
            Category::Mobile => "mobile",
        }
    }

    /// Parse a filter/category tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

/// What a project link points at, derived from its icon class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkKind {
    Demo,
    Source,
    External,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub url: String,
    pub icon: String,
}

impl ProjectLink {
    pub fn new(url: &str, icon: &str) -> Self {
        Self {
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn kind(&self) -> LinkKind {
        if self.icon.contains("github") {
            LinkKind::Source
        } else if self.icon.contains("play") {
            LinkKind::Demo
        } else {
            LinkKind::External
        }
    }

    /// CSS class added to the rendered link ("github-icon", "play-icon").
    pub fn icon_class(&self) -> &'static str {
        match self.kind() {
            LinkKind::Source => "github-icon",
            LinkKind::Demo => "play-icon",
            LinkKind::External => "",
        }
    }

    pub fn aria_label(&self, title: &str) -> String {
        match self.kind() {
            LinkKind::Source => format!("View source code for {title}"),
            LinkKind::Demo => format!("View live demo for {title}"),
            LinkKind::External => format!("External link for {title}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    /// Explicit slug. When absent the slug is derived from the title.
    #[serde(default)]
    pub slug: Option<String>,
    pub tags: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

impl ProjectRecord {
    pub fn slug(&self) -> String {
        match &self.slug {
            Some(s) if !s.is_empty() => s.clone(),
            _ => format_project_slug(&self.title),
        }
    }

    /// Image list used by the gallery; never empty.
    pub fn gallery_images(&self, fallback: &str) -> Vec<String> {
        if self.images.is_empty() {
            vec![fallback.to_string()]
        } else {
            self.images.clone()
        }
    }

    pub fn cover_image<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.images.first().map(String::as_str).unwrap_or(fallback)
    }
}

fn sample_images() -> Vec<String> {
    (1..=6)
        .map(|i| format!("./assets/images/sample{i}.png"))
        .collect()
}

fn sample_links() -> Vec<ProjectLink> {
    vec![
        ProjectLink::new("#", "fas fa-play-circle"),
        ProjectLink::new("https://github.com/", "fab fa-github"),
    ]
}

fn project(n: u32, tags: &str, description: &str, category: Category) -> ProjectRecord {
    ProjectRecord {
        title: format!("Project Title {n}"),
        slug: Some(format!("project-title-{n}")),
        tags: tags.to_string(),
        description: description.to_string(),
        category,
        images: sample_images(),
        links: sample_links(),
    }
}

/// The project table, in display order.
pub fn projects() -> Vec<ProjectRecord> {
    vec![
        project(
            1,
            "React, Node.js, MongoDB",
            "A full-stack web application for managing tasks.",
            Category::Web,
        ),
        project(
            2,
            "Node.js, Express, PostgreSQL",
            "A RESTful API for managing user data.",
            Category::Backend,
        ),
        project(
            3,
            "React Native, Firebase",
            "A mobile app for fitness tracking and nutrition logs.",
            Category::Mobile,
        ),
        project(
            4,
            "Vue.js, Firebase",
            "An example web app built with Vue.js and Firebase.",
            Category::Web,
        ),
        project(
            5,
            "Django, PostgreSQL",
            "A backend service using Django REST framework.",
            Category::Backend,
        ),
        project(
            6,
            "Flutter, Firebase",
            "A cross-platform mobile app for task management.",
            Category::Mobile,
        ),
    ]
}

// -----------------------------------------------------------------------------
// Page copy
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
pub struct HeroButton {
    pub text: &'static str,
    pub href: &'static str,
    pub kind: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct HomeData {
    pub title: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub professions: Vec<&'static str>,
    pub buttons: Vec<HeroButton>,
}

pub fn home() -> HomeData {
    HomeData {
        title: "Welcome to My Portfolio",
        name: "Ömer Öztoprak",
        description: "Explore my projects and get to know me better.",
        professions: vec![
            "Full Stack Developer",
            "AI-Powered App Creator",
            "Game Dev Enthusiast",
        ],
        buttons: vec![
            HeroButton {
                text: "View Projects",
                href: "#projects",
                kind: "primary",
            },
            HeroButton {
                text: "Contact Me",
                href: "#contact",
                kind: "secondary",
            },
        ],
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct AboutData {
    pub image: &'static str,
    pub bio: Vec<&'static str>,
    pub resume_url: &'static str,
    pub social: Vec<SocialLink>,
}

pub fn about() -> AboutData {
    AboutData {
        image: "./assets/images/profile.png",
        bio: vec![
            "Hello! I'm Ömer Öztoprak, a passionate software developer with a keen interest in web development and mobile applications. I love creating innovative solutions that enhance user experiences and solve real-world problems.",
            "With a strong foundation in programming languages and frameworks, I enjoy tackling challenges and continuously learning new technologies. My goal is to build applications that are not only functional but also visually appealing and user-friendly.",
        ],
        resume_url: "/assets/pdf/cv.pdf",
        social: vec![
            SocialLink { platform: "GitHub", url: "#", icon: "fab fa-github", color: "#171515" },
            SocialLink { platform: "LinkedIn", url: "#", icon: "fab fa-linkedin", color: "#0077B5" },
            SocialLink { platform: "Twitter", url: "#", icon: "fab fa-x-twitter", color: "#000000" },
            SocialLink {
                platform: "Instagram",
                url: "#",
                icon: "fab fa-instagram",
                color: "linear-gradient(45deg, #833AB4, #FD1D1D, #F77737)",
            },
        ],
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct SkillCategory {
    pub category: &'static str,
    pub icon: &'static str,
    pub skills: Vec<Skill>,
}

fn skill_list(items: &[(&'static str, &'static str)]) -> Vec<Skill> {
    items.iter().map(|&(name, icon)| Skill { name, icon }).collect()
}

pub fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            category: "Frontend",
            icon: "fas fa-code",
            skills: skill_list(&[
                ("HTML5", "devicon-html5-plain colored"),
                ("CSS3", "devicon-css3-plain colored"),
                ("JavaScript", "devicon-javascript-plain colored"),
                ("React", "devicon-react-original colored"),
                ("Vue.js", "devicon-vuejs-plain colored"),
                ("Tailwind", "devicon-tailwindcss-plain colored"),
                ("TypeScript", "devicon-typescript-plain colored"),
            ]),
        },
        SkillCategory {
            category: "Backend",
            icon: "fas fa-server",
            skills: skill_list(&[
                ("Node.js", "devicon-nodejs-plain colored"),
                ("Express", "devicon-express-original"),
                ("MongoDB", "devicon-mongodb-plain colored"),
                ("Python", "devicon-python-plain colored"),
                ("Django", "devicon-django-plain colored"),
                ("GraphQL", "devicon-graphql-plain colored"),
            ]),
        },
        SkillCategory {
            category: "Tools & Others",
            icon: "fas fa-tools",
            skills: skill_list(&[
                ("Git", "devicon-git-plain colored"),
                ("Docker", "devicon-docker-plain colored"),
                ("Figma", "devicon-figma-plain colored"),
                ("Jest", "devicon-jest-plain colored"),
            ]),
        },
    ]
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactMethod {
    pub kind: &'static str,
    pub icon: &'static str,
    pub href: Option<&'static str>,
    pub display: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactData {
    pub description: &'static str,
    pub methods: Vec<ContactMethod>,
}

pub fn contact() -> ContactData {
    ContactData {
        description: "If you have any questions or would like to get in touch, please feel free to reach out. I am always open to collaboration and new opportunities.",
        methods: vec![
            ContactMethod {
                kind: "Email",
                icon: "fas fa-envelope",
                href: Some("mailto:example@email.com"),
                display: "example@email.com",
            },
            ContactMethod {
                kind: "Location",
                icon: "fas fa-map-marker-alt",
                href: None,
                display: "Istanbul, Turkey",
            },
        ],
    }
}
