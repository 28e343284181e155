// Deterministic one-line summaries for repositories.
//
// Lookup order: topics, then name tokens, then language. First rule wins.

use super::entities::GithubRepo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoKind {
    WebApp,
    Api,
    Mobile,
    Data,
    Tooling,
    General,
}

const KEYWORD_RULES: &[(RepoKind, &[&str])] = &[
    (
        RepoKind::Mobile,
        &["android", "ios", "mobile", "flutter", "react-native", "expo"],
    ),
    (
        RepoKind::Data,
        &[
            "machine-learning",
            "deep-learning",
            "data-science",
            "ml",
            "ai",
            "data",
            "analysis",
            "notebook",
            "pandas",
        ],
    ),
    (
        RepoKind::Api,
        &[
            "api",
            "backend",
            "server",
            "rest",
            "graphql",
            "express",
            "nestjs",
            "microservice",
        ],
    ),
    (
        RepoKind::Tooling,
        &["cli", "tool", "tools", "bot", "script", "scripts", "automation"],
    ),
    (
        RepoKind::WebApp,
        &[
            "react",
            "vue",
            "angular",
            "frontend",
            "website",
            "web",
            "portfolio",
            "nextjs",
            "landing-page",
        ],
    ),
];

const LANGUAGE_RULES: &[(&str, RepoKind)] = &[
    ("typescript", RepoKind::WebApp),
    ("javascript", RepoKind::WebApp),
    ("html", RepoKind::WebApp),
    ("css", RepoKind::WebApp),
    ("vue", RepoKind::WebApp),
    ("kotlin", RepoKind::Mobile),
    ("swift", RepoKind::Mobile),
    ("dart", RepoKind::Mobile),
    ("python", RepoKind::Data),
    ("jupyter notebook", RepoKind::Data),
    ("r", RepoKind::Data),
    ("java", RepoKind::Api),
    ("c#", RepoKind::Api),
    ("go", RepoKind::Api),
    ("php", RepoKind::Api),
    ("shell", RepoKind::Tooling),
    ("rust", RepoKind::Tooling),
];

fn tokens(value: &str) -> Vec<String> {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// True when the keyword's tokens appear consecutively in `haystack`.
fn has_keyword(haystack: &[String], keyword: &str) -> bool {
    let needle = tokens(keyword);
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle.as_slice())
}

fn match_keywords(haystack: &[String]) -> Option<RepoKind> {
    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| has_keyword(haystack, k)))
        .map(|(kind, _)| *kind)
}

pub fn classify(repo: &GithubRepo) -> RepoKind {
    let by_topic = repo.topics.iter().find_map(|t| match_keywords(&tokens(t)));
    if let Some(kind) = by_topic {
        return kind;
    }

    if let Some(kind) = match_keywords(&tokens(&repo.name)) {
        return kind;
    }

    repo.language
        .as_deref()
        .map(str::to_ascii_lowercase)
        .and_then(|lang| {
            LANGUAGE_RULES
                .iter()
                .find(|(l, _)| *l == lang)
                .map(|(_, kind)| *kind)
        })
        .unwrap_or(RepoKind::General)
}

pub fn describe(repo: &GithubRepo) -> String {
    let name = &repo.name;
    let lang = repo.language.as_deref().unwrap_or("modern technologies");

    match classify(repo) {
        RepoKind::WebApp => format!(
            "{name} is a web application built with {lang}, focused on a responsive and interactive user experience."
        ),
        RepoKind::Api => format!(
            "{name} is a backend service written in {lang} that exposes an API for client applications."
        ),
        RepoKind::Mobile => format!(
            "{name} is a mobile application written in {lang}, designed for a smooth experience on small screens."
        ),
        RepoKind::Data => {
            format!("{name} explores data processing and analysis using {lang}.")
        }
        RepoKind::Tooling => format!(
            "{name} is a developer tool written in {lang} that automates everyday tasks."
        ),
        RepoKind::General => {
            format!("{name} is a {lang} project from my public GitHub portfolio.")
        }
    }
}
