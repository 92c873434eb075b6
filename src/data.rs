pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Home",
        href: "#hero",
    },
    NavLink {
        name: "About",
        href: "#about",
    },
    NavLink {
        name: "Skills",
        href: "#skills",
    },
    NavLink {
        name: "Experience",
        href: "#experience",
    },
    NavLink {
        name: "Projects",
        href: "#projects",
    },
    NavLink {
        name: "Contact",
        href: "#contact",
    },
];

pub const HERO_ROLES: &[&str] = &[
    "Backend Engineer",
    "Systems Architect",
    "Microservices Specialist",
    "Performance Tuner",
];

pub struct ExperienceItem {
    pub year: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub client: Option<&'static str>,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        year: "Aug 2024 – Present",
        role: "Associate Consultant",
        company: "Infosys Ltd",
        client: Some("Danske Bank — Banking Domain"),
        description: "Designing and developing scalable microservices using Java 21 and Spring Boot for banking platforms supporting financial market workflows. Full ownership from development through testing, deployment, and production support (L3).",
        achievements: &[
            "Modernized legacy Java 8 services to Java 21, reducing API latency by ~30%",
            "Implemented asynchronous communication with RabbitMQ for resilience and throughput",
            "Applied fault-tolerance patterns (Resilience4j: timeouts, retries, circuit breakers)",
            "Optimized database interactions and query performance for PostgreSQL-backed services",
        ],
    },
    ExperienceItem {
        year: "Oct 2021 – Jun 2024",
        role: "Java Full Stack Developer",
        company: "DBQ Technologies Pvt. Ltd",
        client: Some("Bankhaus Scheich — Trading Automation Platform"),
        description: "Built backend microservices for trading automation using Java, Spring Boot, and event-driven messaging. Developed internal dashboards with React and integrated Camunda BPM for approval and trade workflows.",
        achievements: &[
            "Implemented secure REST APIs for order processing and trade lifecycle management",
            "Integrated Camunda BPM, reducing manual intervention by 15%",
            "Improved database performance through schema tuning, indexing, and query optimization",
            "Delivered features end-to-end in Agile sprint-based delivery",
        ],
    },
    ExperienceItem {
        year: "May 2021 – Sep 2021",
        role: "Intern",
        company: "DBQ Technologies Pvt. Ltd",
        client: None,
        description: "Assisted in backend and frontend development of internal tools using Java and React. Fixed production bugs and improved UI/UX for internal applications.",
        achievements: &[
            "Built and maintained Java + React components",
            "Improved build time and developer experience",
            "Learned production best practices and deployment workflows",
        ],
    },
];

pub struct ProjectItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[ProjectItem] = &[
    ProjectItem {
        id: "collateral-validation",
        title: "Collateral Validation Platform",
        description: "Microservices for validating financial assets and collateral data",
        long_description: "Developed microservices for validating financial assets and collateral data at Danske Bank. Migrated core modules to Java 21, improved service reliability, and introduced fault-tolerant patterns to handle downstream system failures.",
        image: "/projects/collateral-validation.jpg",
        tags: &["Java 21", "Spring Boot", "PostgreSQL", "Resilience4j", "Microservices"],
    },
    ProjectItem {
        id: "lpmm-trading",
        title: "LPMM Trading Automation",
        description: "Secure order flows and asynchronous processing for trade lifecycle",
        long_description: "Implemented secure order flows and asynchronous processing using RabbitMQ at Bankhaus Scheich. Supported full trade lifecycle from capture to execution with event-driven architecture.",
        image: "/projects/lpmm-trading.jpg",
        tags: &["Java", "Spring Boot", "RabbitMQ", "REST APIs", "Camunda"],
    },
    ProjectItem {
        id: "fincentives",
        title: "Fincentives — Regulated eScrip Platform",
        description: "Identity validation and transaction integrity with government systems",
        long_description: "Integrated with external government systems for identity validation. Improved audit logging, reconciliation, and transaction integrity for a regulated eScrip platform.",
        image: "/projects/fincentives.jpg",
        tags: &["Java", "Spring Boot", "Integration", "Audit", "Security"],
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Expert => "level-badge level-expert",
            Self::Advanced => "level-badge level-advanced",
            Self::Intermediate => "level-badge level-intermediate",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    pub description: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Backend & Microservices",
        skills: &[
            Skill {
                name: "Java",
                level: SkillLevel::Expert,
                description: "Java 8–21, Collections, Streams API, Concurrency",
            },
            Skill {
                name: "Spring Boot",
                level: SkillLevel::Expert,
                description: "REST APIs, Spring Cloud, Dependency Injection, Spring Security",
            },
            Skill {
                name: "Microservices",
                level: SkillLevel::Advanced,
                description: "Service discovery, API Gateway, distributed systems",
            },
            Skill {
                name: "Resilience4j",
                level: SkillLevel::Advanced,
                description: "Circuit breakers, retries, timeouts, bulkhead",
            },
            Skill {
                name: "Hibernate/JPA",
                level: SkillLevel::Advanced,
                description: "ORM, migrations, query optimization",
            },
        ],
    },
    SkillCategory {
        name: "Messaging & Streaming",
        skills: &[
            Skill {
                name: "RabbitMQ",
                level: SkillLevel::Advanced,
                description: "Event-driven architecture, queues, exchanges",
            },
            Skill {
                name: "Apache Kafka",
                level: SkillLevel::Intermediate,
                description: "Event streaming, producers, consumers",
            },
        ],
    },
    SkillCategory {
        name: "Databases",
        skills: &[
            Skill {
                name: "PostgreSQL",
                level: SkillLevel::Expert,
                description: "Schema design, query optimization, indexing, transactions",
            },
            Skill {
                name: "MySQL",
                level: SkillLevel::Advanced,
                description: "Performance tuning, replication",
            },
        ],
    },
    SkillCategory {
        name: "Observability",
        skills: &[
            Skill {
                name: "Micrometer",
                level: SkillLevel::Advanced,
                description: "Metrics, gauges, counters",
            },
            Skill {
                name: "Prometheus & Grafana",
                level: SkillLevel::Advanced,
                description: "Monitoring, dashboards, alerting",
            },
            Skill {
                name: "OpenTelemetry",
                level: SkillLevel::Intermediate,
                description: "Distributed tracing",
            },
        ],
    },
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill {
                name: "React",
                level: SkillLevel::Advanced,
                description: "Hooks, Context, component lifecycle",
            },
            Skill {
                name: "TypeScript",
                level: SkillLevel::Advanced,
                description: "Type safety, interfaces, generics",
            },
            Skill {
                name: "JavaScript / HTML / CSS",
                level: SkillLevel::Advanced,
                description: "Semantic HTML, responsive design",
            },
        ],
    },
    SkillCategory {
        name: "Tools & Practices",
        skills: &[
            Skill {
                name: "Git",
                level: SkillLevel::Advanced,
                description: "Version control, branching, CI/CD integration",
            },
            Skill {
                name: "Maven",
                level: SkillLevel::Advanced,
                description: "Build automation, dependency management",
            },
            Skill {
                name: "Jenkins / GitHub Actions",
                level: SkillLevel::Intermediate,
                description: "CI/CD pipelines",
            },
            Skill {
                name: "Docker",
                level: SkillLevel::Intermediate,
                description: "Containers, Dockerfile basics",
            },
            Skill {
                name: "Camunda BPM",
                level: SkillLevel::Advanced,
                description: "Workflow automation, BPMN, DMN",
            },
        ],
    },
];

pub const CORE_STACK: &[&str] = &[
    "Java",
    "Spring Boot",
    "PostgreSQL",
    "RabbitMQ",
    "Microservices",
    "React",
    "TypeScript",
    "Resilience4j",
    "Camunda",
    "Docker",
];

pub struct Power {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
}

pub const POWERS: &[Power] = &[
    Power {
        label: "Resilience",
        value: "98%",
        sub: "Fault-tolerant systems",
    },
    Power {
        label: "Scale",
        value: "95%",
        sub: "High-throughput microservices",
    },
    Power {
        label: "Performance",
        value: "92%",
        sub: "Latency & query optimization",
    },
    Power {
        label: "Uptime",
        value: "99.99%",
        sub: "Production reliability",
    },
    Power {
        label: "Ownership",
        value: "100%",
        sub: "End-to-end delivery",
    },
];

pub struct Stat {
    pub label: &'static str,
    pub end: u64,
    pub suffix: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        label: "Years Experience",
        end: 4,
        suffix: "+",
    },
    Stat {
        label: "Projects Delivered",
        end: 4,
        suffix: "+",
    },
    Stat {
        label: "Production Features",
        end: 15,
        suffix: "+",
    },
    Stat {
        label: "Daily Transactions",
        end: 100_000,
        suffix: "+",
    },
];

pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: "yadanaparthivineethreddy@gmail.com",
        href: "mailto:yadanaparthivineethreddy@gmail.com",
    },
    ContactMethod {
        label: "Phone",
        value: "+91 7036546590",
        href: "tel:+917036546590",
    },
    ContactMethod {
        label: "Location",
        value: "Bangalore, India",
        href: "https://maps.google.com/?q=Bangalore,India",
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: "https://github.com/yvineethreddy",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/vineeth-reddy-y",
    },
    SocialLink {
        name: "Email",
        href: "mailto:yadanaparthivineethreddy@gmail.com",
    },
];

pub const OWNER_NAME: &str = "Vineeth Reddy Yadanaparthi";
pub const OWNER_TITLE: &str = "Associate Consultant @ Infosys";
pub const OWNER_EMAIL: &str = "yadanaparthivineethreddy@gmail.com";
pub const OWNER_TAGLINE: &str = "Backend Engineer · Systems Architect · 4+ Years";
pub const OWNER_INTRO: &str = "Backend-Focused · Java · Spring Boot · Microservices";
pub const OWNER_BIO: &str = "I design and build resilient, scalable systems with Java, Spring Boot, and microservices. With 4+ years in banking and trading (Danske Bank, Bankhaus Scheich), I've modernized legacy platforms, reduced API latency by ~30%, and delivered end-to-end ownership from development to L3 production support. I focus on fault tolerance, performance optimization, and secure API design in Agile environments.";
pub const PROFILE_IMAGE: &str = "/vineeth-profile.jpg";
pub const RESUME_PATH: &str = "/vineeth_resume.pdf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_target_in_page_anchors() {
        assert!(!NAV_LINKS.is_empty());
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
            assert!(!link.name.is_empty());
        }
    }

    #[test]
    fn content_tables_are_populated() {
        assert!(!HERO_ROLES.is_empty());
        assert!(!EXPERIENCE.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!ABOUT_STATS.is_empty());
        assert!(SKILL_CATEGORIES
            .iter()
            .all(|category| !category.skills.is_empty()));
    }
}
