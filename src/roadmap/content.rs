//! Static content tables backing the roadmap generator
//!
//! These tables are data, not behavior: the generator only relies on the
//! registry's ordering (demand rank) and on lookups being keyed by the
//! normalized skill form. Swap the values freely without touching the
//! generator's invariants.

use super::DemandStatus;
use crate::skills::normalize;

/// One entry in the high-demand skill registry. Position in
/// [`DEMAND_REGISTRY`] is the fixed demand ranking (index 0 = hottest).
pub struct DemandEntry {
    pub skill: &'static str,
    pub status: DemandStatus,
    pub reason: &'static str,
}

/// High-demand skills in fixed demand order.
pub const DEMAND_REGISTRY: &[DemandEntry] = &[
    DemandEntry {
        skill: "TypeScript",
        status: DemandStatus::Exploding,
        reason: "Typed JavaScript is now the default for new frontend codebases",
    },
    DemandEntry {
        skill: "AWS",
        status: DemandStatus::Exploding,
        reason: "Cloud deployment experience appears in most placement listings",
    },
    DemandEntry {
        skill: "Machine Learning",
        status: DemandStatus::Exploding,
        reason: "AI features are moving into mainstream product teams",
    },
    DemandEntry {
        skill: "React",
        status: DemandStatus::Critical,
        reason: "Baseline expectation for frontend and full-stack roles",
    },
    DemandEntry {
        skill: "Python",
        status: DemandStatus::Critical,
        reason: "Dominant language for data, automation, and backend services",
    },
    DemandEntry {
        skill: "SQL",
        status: DemandStatus::Critical,
        reason: "Every data-touching role screens for query fluency",
    },
    DemandEntry {
        skill: "Docker",
        status: DemandStatus::Growing,
        reason: "Containers are the standard packaging unit for services",
    },
    DemandEntry {
        skill: "Kubernetes",
        status: DemandStatus::Growing,
        reason: "Orchestration skills differentiate infrastructure candidates",
    },
    DemandEntry {
        skill: "GraphQL",
        status: DemandStatus::Growing,
        reason: "Increasingly preferred over REST for product APIs",
    },
    DemandEntry {
        skill: "Node.js",
        status: DemandStatus::Stable,
        reason: "Established backend runtime with steady hiring demand",
    },
    DemandEntry {
        skill: "Java",
        status: DemandStatus::Stable,
        reason: "Enterprise backbone with a deep pool of openings",
    },
    DemandEntry {
        skill: "Git",
        status: DemandStatus::Stable,
        reason: "Assumed tooling knowledge for any engineering role",
    },
];

/// Demand rank and registry entry for a skill, if it is registered.
pub fn demand_rank(label: &str) -> Option<(usize, &'static DemandEntry)> {
    let key = normalize(label);
    DEMAND_REGISTRY
        .iter()
        .enumerate()
        .find(|(_, entry)| normalize(entry.skill) == key)
}

/// Domains where a skill applies, for the prediction cards.
pub fn domains_for(label: &str) -> Vec<String> {
    const TABLE: &[(&str, &[&str])] = &[
        ("typescript", &["Frontend", "Full Stack"]),
        ("aws", &["DevOps", "Cloud", "Backend"]),
        ("machine learning", &["Data Science", "AI Products"]),
        ("react", &["Frontend", "Mobile"]),
        ("python", &["Data Science", "Backend", "Automation"]),
        ("sql", &["Analytics", "Backend", "Finance"]),
        ("docker", &["DevOps", "Platform"]),
        ("kubernetes", &["DevOps", "Platform"]),
        ("graphql", &["Frontend", "API Design"]),
        ("node.js", &["Backend", "Full Stack"]),
        ("java", &["Enterprise", "Backend"]),
        ("git", &["Collaboration"]),
    ];
    let key = normalize(label);
    TABLE
        .iter()
        .find(|(skill, _)| *skill == key)
        .map(|(_, domains)| domains.iter().map(|d| d.to_string()).collect())
        .unwrap_or_default()
}

/// Per-skill learning content for one roadmap step.
pub struct StepContent {
    pub description: &'static str,
    pub tip: &'static str,
    pub resource_title: &'static str,
    pub resource_link: &'static str,
    pub resource_type: &'static str,
}

/// Tip and free-resource lookup for a skill, if curated content exists.
pub fn content_for(label: &str) -> Option<&'static StepContent> {
    const TABLE: &[(&str, StepContent)] = &[
        (
            "typescript",
            StepContent {
                description: "Add static types to your JavaScript knowledge and migrate a small project.",
                tip: "Convert one existing JS file a day instead of starting from scratch.",
                resource_title: "TypeScript Handbook",
                resource_link: "https://www.typescriptlang.org/docs/handbook/intro.html",
                resource_type: "Docs",
            },
        ),
        (
            "aws",
            StepContent {
                description: "Deploy a web app end to end on EC2 and S3, then automate it.",
                tip: "Stay inside the free tier; billing alarms first, services second.",
                resource_title: "AWS Cloud Practitioner Essentials",
                resource_link: "https://aws.amazon.com/training/digital/aws-cloud-practitioner-essentials/",
                resource_type: "Course",
            },
        ),
        (
            "machine learning",
            StepContent {
                description: "Work through regression and classification on a real dataset.",
                tip: "One Kaggle notebook reproduced by hand beats ten tutorials watched.",
                resource_title: "Google ML Crash Course",
                resource_link: "https://developers.google.com/machine-learning/crash-course",
                resource_type: "Course",
            },
        ),
        (
            "react",
            StepContent {
                description: "Build a multi-page app with hooks, routing, and state management.",
                tip: "Rebuild a site you use daily; requirements are already familiar.",
                resource_title: "React Official Tutorial",
                resource_link: "https://react.dev/learn",
                resource_type: "Docs",
            },
        ),
        (
            "python",
            StepContent {
                description: "Cover core syntax, then automate one task you do by hand.",
                tip: "Write scripts for your own chores; motivation stays high.",
                resource_title: "Automate the Boring Stuff",
                resource_link: "https://automatetheboringstuff.com/",
                resource_type: "Book",
            },
        ),
        (
            "sql",
            StepContent {
                description: "Practice joins, aggregation, and window functions on sample data.",
                tip: "Explain each query plan out loud; interviewers ask exactly that.",
                resource_title: "SQLZoo Interactive Tutorials",
                resource_link: "https://sqlzoo.net/",
                resource_type: "Interactive",
            },
        ),
        (
            "docker",
            StepContent {
                description: "Containerize one of your existing projects with a multi-stage build.",
                tip: "Read the official images' Dockerfiles; they encode best practice.",
                resource_title: "Docker Getting Started",
                resource_link: "https://docs.docker.com/get-started/",
                resource_type: "Docs",
            },
        ),
        (
            "kubernetes",
            StepContent {
                description: "Run a local cluster and deploy a two-service app with ingress.",
                tip: "Break the cluster on purpose; debugging teaches the object model.",
                resource_title: "Kubernetes Basics",
                resource_link: "https://kubernetes.io/docs/tutorials/kubernetes-basics/",
                resource_type: "Interactive",
            },
        ),
        (
            "graphql",
            StepContent {
                description: "Replace a REST endpoint in one of your projects with a GraphQL schema.",
                tip: "Design the schema from the client's queries backwards.",
                resource_title: "GraphQL Introduction",
                resource_link: "https://graphql.org/learn/",
                resource_type: "Docs",
            },
        ),
        (
            "node.js",
            StepContent {
                description: "Build a small REST API with Express, tests included.",
                tip: "Ship it behind a free host so you can demo a live URL.",
                resource_title: "Node.js Guides",
                resource_link: "https://nodejs.org/en/learn",
                resource_type: "Docs",
            },
        ),
    ];
    let key = normalize(label);
    TABLE.iter().find(|(skill, _)| *skill == key).map(|(_, content)| content)
}

/// Fallback tip when a skill has no curated entry.
pub const GENERIC_TIP: &str = "Block two focused hours, build something small, and publish it.";

/// Fallback free resource when a skill has no curated entry.
pub const GENERIC_RESOURCE: (&str, &str, &str) = (
    "freeCodeCamp",
    "https://www.freecodecamp.org/learn",
    "Course",
);

/// Reason shown for missing benchmark skills outside the demand registry.
pub const GENERIC_REASON: &str = "Listed in the placement benchmark for your track";

/// Phases the weekly plan cycles through.
pub const DEFAULT_PHASES: &[&str] = &["Foundation", "Core Skill", "Specialization", "Interview Prep"];

/// Reference set of industry skills used when the caller supplies no benchmark.
pub const DEFAULT_BENCHMARK: &[&str] = &[
    "React",
    "JavaScript",
    "TypeScript",
    "Node.js",
    "Python",
    "SQL",
    "AWS",
    "Docker",
    "Git",
    "System Design",
];
