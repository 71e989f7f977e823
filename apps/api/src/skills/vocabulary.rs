//! Skill vocabulary — the fixed catalogue of hard-skill terms per language.
//!
//! The German catalogue is intentionally German-language terms only; English
//! technology names found in German text are picked up by the English retry.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::keywords::normalize;
use crate::language::Language;

const ENGLISH_SKILLS: &[&str] = &[
    // Programming languages
    "python", "javascript", "typescript", "java", "c++", "c#", "golang", "rust", "ruby",
    "php", "swift", "kotlin", "scala", "matlab", "perl", "haskell", "erlang", "elixir",
    "clojure", "dart", "lua", "groovy", "objective-c", "cobol", "fortran", "sql", "bash",
    "powershell", "shell scripting", "html", "css", "sass", "graphql", "solidity", "julia",
    // Frameworks & libraries
    "react", "angular", "vue.js", "svelte", "next.js", "nuxt", "node.js", "django", "flask",
    "fastapi", "express", "nestjs", "spring", "spring boot", "ruby on rails", "laravel",
    "symfony", "asp.net", ".net", ".net core", "blazor", "actix", "axum", "tokio",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "scipy", "spark",
    "hadoop", "flink", "kafka", "rabbitmq", "celery", "airflow", "dbt", "bootstrap",
    "tailwind", "redux", "jquery", "react native", "flutter", "hugging face", "langchain",
    "opencv", "matplotlib", "selenium", "playwright", "cypress", "jest", "pytest", "junit",
    "hibernate", "graphql apollo", "grpc", "protobuf", "webassembly",
    // Tools & platforms
    "git", "github", "gitlab", "bitbucket", "docker", "kubernetes", "helm", "terraform",
    "ansible", "puppet", "chef", "jenkins", "circleci", "github actions", "gitlab ci",
    "azure devops", "aws", "azure", "gcp", "google cloud", "heroku", "vercel", "netlify",
    "cloudflare", "nginx", "apache", "tomcat", "redis", "memcached", "elasticsearch",
    "kibana", "logstash", "grafana", "prometheus", "datadog", "splunk", "sentry", "jira",
    "confluence", "figma", "postman", "swagger", "openapi", "mysql", "postgresql",
    "mongodb", "cassandra", "dynamodb", "firebase", "supabase", "sqlite", "oracle",
    "sql server", "mariadb", "neo4j", "snowflake", "bigquery", "redshift", "databricks",
    "tableau", "power bi", "looker", "excel", "webpack", "vite", "babel", "eslint",
    "linux", "unix", "windows server", "vmware", "openshift", "istio", "argo cd",
    "aws lambda", "amazon s3", "ec2", "cloudformation", "pulumi", "vault", "consul",
    "sap", "salesforce", "servicenow",
    // Technical skills
    "machine learning", "deep learning", "neural networks", "natural language processing",
    "nlp", "computer vision", "data science", "data analysis", "data engineering", "etl",
    "data visualization", "data modeling", "data warehousing", "big data", "statistics",
    "a/b testing", "api design", "rest", "restful apis", "rest api", "microservices",
    "distributed systems", "cloud computing", "serverless", "devops", "devsecops", "sre",
    "site reliability engineering", "ci/cd", "continuous integration",
    "continuous deployment", "infrastructure as code", "automation", "cybersecurity",
    "penetration testing", "encryption", "authentication", "oauth", "jwt", "sso",
    "database design", "query optimization", "caching", "load balancing",
    "high availability", "scalability", "performance optimization", "profiling",
    "debugging", "monitoring", "observability", "incident response", "code review",
    "unit testing", "integration testing", "test automation", "tdd", "bdd",
    "design patterns", "system design", "software architecture", "object-oriented programming",
    "functional programming", "concurrency", "multithreading", "embedded systems",
    "firmware", "fpga", "iot", "blockchain", "smart contracts", "game development",
    "opengl", "vulkan", "mobile development", "ios", "android", "frontend", "backend",
    "full stack", "responsive design", "accessibility", "seo", "web development",
    "version control", "technical writing", "containerization", "orchestration",
    "networking", "tcp/ip", "dns", "http", "websockets", "message queues",
    "event-driven architecture", "domain-driven design", "large language models", "llm",
    "generative ai", "mlops", "feature engineering", "reinforcement learning",
    "time series analysis", "predictive modeling", "business intelligence",
    "quality assurance", "requirements analysis",
    // Methodologies & soft skills
    "agile", "scrum", "kanban", "lean", "project management", "product management",
    "stakeholder management", "leadership", "communication", "teamwork", "collaboration",
    "problem solving", "problem-solving", "critical thinking", "mentoring",
    "time management", "presentation skills", "negotiation", "customer service",
];

const GERMAN_SKILLS: &[&str] = &[
    "softwareentwicklung", "webentwicklung", "anwendungsentwicklung", "programmierung",
    "objektorientierte programmierung", "maschinelles lernen", "künstliche intelligenz",
    "datenanalyse", "datenauswertung", "datenbanken", "datenbankentwicklung",
    "datenmodellierung", "datenvisualisierung", "datenschutz", "datenverarbeitung",
    "containerisierung", "cloud-dienste", "cloud-architektur", "systemadministration",
    "netzwerktechnik", "netzwerkadministration", "informationssicherheit", "it-sicherheit",
    "cybersicherheit", "versionskontrolle", "testautomatisierung", "qualitätssicherung",
    "softwaretests", "anforderungsanalyse", "anforderungsmanagement", "softwarearchitektur",
    "systemarchitektur", "schnittstellenentwicklung", "prozessoptimierung",
    "prozessautomatisierung", "automatisierung", "projektmanagement", "projektleitung",
    "produktmanagement", "agile methoden", "agile softwareentwicklung",
    "kontinuierliche integration", "verteilte systeme", "bildverarbeitung",
    "sprachverarbeitung", "statistik", "fehleranalyse", "fehlerbehebung",
    "technische dokumentation", "berichtswesen", "kundenbetreuung", "kundenberatung",
    "teamfähigkeit", "kommunikationsfähigkeit", "führungserfahrung", "mitarbeiterführung",
    "problemlösung", "analytisches denken", "zeitmanagement", "verhandlungsgeschick",
    "präsentationsfähigkeit", "eigenverantwortung", "englischkenntnisse",
    "deutschkenntnisse", "buchhaltung", "controlling", "vertrieb",
];

/// Normalized, unique skill terms in catalogue order.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl SkillVocabulary {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        vocabulary.extend(entries);
        vocabulary
    }

    pub fn builtin(lang: Language) -> Self {
        match lang {
            Language::English => Self::from_entries(ENGLISH_SKILLS),
            Language::German => Self::from_entries(GERMAN_SKILLS),
        }
    }

    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let term = normalize(entry.as_ref());
            if !term.is_empty() && self.index.insert(term.clone()) {
                self.entries.push(term);
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains(&normalize(term))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extra vocabulary terms loaded at start-up: `{"en": [...], "de": [...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct VocabularyExtensions {
    #[serde(default)]
    pub en: Vec<String>,
    #[serde(default)]
    pub de: Vec<String>,
}

impl VocabularyExtensions {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid skill vocabulary JSON in '{}'", path.display()))
    }

    pub fn for_language(&self, lang: Language) -> &[String] {
        match lang {
            Language::English => &self.en,
            Language::German => &self.de,
        }
    }
}
