//! Keyword matching of free-text input against the career corpus.
//!
//! Matching is plain substring search over a lowercased haystack, so `java`
//! also hits `javascript`. Ranking is a two-tier stable partition: records
//! whose serialized form contains the raw input come first, everything else
//! keeps its corpus order behind them.

use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{CareerRecord, Resource};

pub const NO_RESULTS_ROLE: &str = "No results found";

/// Whole-input abbreviations and shorthands. Looked up with the complete
/// trimmed, lowercased input, never per word.
pub const KEYWORD_ALIASES: [(&str, &str); 13] = [
    ("ai", "artificial intelligence"),
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("js", "javascript"),
    ("py", "python"),
    ("reactjs", "react"),
    ("nodejs", "node"),
    ("frontend", "frontend developer"),
    ("backend", "backend developer"),
    ("fullstack", "full stack developer"),
    ("data", "data science"),
    ("devops", "devops engineer"),
    ("cloud", "cloud engineer"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("Failed to serialize career for ranking: {0}")]
    Serialization(String),
}

pub fn expand_alias(query: &str) -> Option<&'static str> {
    KEYWORD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == query)
        .map(|(_, phrase)| *phrase)
}

/// A validated, normalized search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    expanded: String,
}

impl SearchQuery {
    pub fn parse(input: &str) -> Result<Self, MatchError> {
        let raw = input.trim().to_lowercase();
        if raw.is_empty() {
            return Err(MatchError::EmptyQuery);
        }

        let expanded = expand_alias(&raw).map(str::to_string).unwrap_or_else(|| raw.clone());

        Ok(Self { raw, expanded })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn expanded(&self) -> &str {
        &self.expanded
    }

    pub fn matches(&self, career: &CareerRecord) -> bool {
        let haystack = haystack(career);

        haystack.contains(&self.raw)
            || haystack.contains(&self.expanded)
            || self
                .expanded
                .split_whitespace()
                .any(|token| haystack.contains(token))
    }

    fn tier(&self, career: &CareerRecord) -> Result<MatchTier, MatchError> {
        let serialized = serde_json::to_string(career)
            .map_err(|e| MatchError::Serialization(e.to_string()))?
            .to_lowercase();

        Ok(if serialized.contains(&self.raw) {
            MatchTier::Raw
        } else {
            MatchTier::Expanded
        })
    }
}

/// Role, designation and both skill lists, space-joined and lowercased.
pub fn haystack(career: &CareerRecord) -> String {
    std::iter::once(career.role.as_str())
        .chain(std::iter::once(career.designation.as_str()))
        .chain(career.required_skills.iter().map(String::as_str))
        .chain(career.next_skills.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Which ranking tier a match landed in. Ordered so `Raw` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Raw,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    Db,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MatchedCareer {
    #[serde(flatten)]
    pub career: CareerRecord,
    pub source: RecordSource,
    #[serde(skip)]
    pub tier: MatchTier,
}

/// Placeholder returned as the only element when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NoResults {
    pub role: String,
    pub designation: String,
    pub required_skills: Vec<String>,
    pub next_skills: Vec<String>,
    pub resources: Vec<Resource>,
}

impl Default for NoResults {
    fn default() -> Self {
        Self {
            role: NO_RESULTS_ROLE.to_string(),
            designation: "-".to_string(),
            required_skills: Vec::new(),
            next_skills: Vec::new(),
            resources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Recommendation {
    Match(MatchedCareer),
    NoResults(NoResults),
}

impl Recommendation {
    pub fn role(&self) -> &str {
        match self {
            Recommendation::Match(m) => &m.career.role,
            Recommendation::NoResults(n) => &n.role,
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, Recommendation::NoResults(_))
    }
}

/// Filters and ranks `corpus` against `query`.
///
/// Never returns an empty list: zero matches yield a single
/// [`Recommendation::NoResults`].
pub fn recommend(
    query: &SearchQuery,
    corpus: Vec<CareerRecord>,
) -> Result<Vec<Recommendation>, MatchError> {
    let mut matches = corpus
        .into_iter()
        .filter(|career| query.matches(career))
        .map(|career| {
            query.tier(&career).map(|tier| MatchedCareer {
                career,
                source: RecordSource::Db,
                tier,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if matches.is_empty() {
        return Ok(vec![Recommendation::NoResults(NoResults::default())]);
    }

    // sort_by_key is stable: ties keep corpus order
    matches.sort_by_key(|m| m.tier);

    Ok(matches.into_iter().map(Recommendation::Match).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::career::application::domain::entities::Resource;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn career(role: &str, designation: &str, required: &[&str], next: &[&str]) -> CareerRecord {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        CareerRecord {
            id: Uuid::new_v4(),
            role: role.to_string(),
            designation: designation.to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            next_skills: next.iter().map(|s| s.to_string()).collect(),
            resources: vec![],
            created_at: at,
            updated_at: at,
        }
    }

    fn frontend() -> CareerRecord {
        career(
            "Frontend Developer",
            "UI Engineer",
            &["HTML", "CSS", "JavaScript", "React"],
            &[],
        )
    }

    fn backend() -> CareerRecord {
        career("Backend Developer", "Software Engineer", &["Node.js", "Express"], &[])
    }

    fn run(input: &str, corpus: Vec<CareerRecord>) -> Vec<Recommendation> {
        recommend(&SearchQuery::parse(input).unwrap(), corpus).unwrap()
    }

    fn matched(rec: &Recommendation) -> &MatchedCareer {
        match rec {
            Recommendation::Match(m) => m,
            other => panic!("Expected a match, got {:?}", other),
        }
    }

    // ──────────────────────────────────────────────────────────
    // Query parsing
    // ──────────────────────────────────────────────────────────

    #[test]
    fn parse_rejects_empty_and_whitespace() {
        assert_eq!(SearchQuery::parse(""), Err(MatchError::EmptyQuery));
        assert_eq!(SearchQuery::parse("  \t\n "), Err(MatchError::EmptyQuery));
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let q = SearchQuery::parse("  ReAct  ").unwrap();
        assert_eq!(q.raw(), "react");
        assert_eq!(q.expanded(), "react");
    }

    #[test]
    fn alias_is_looked_up_with_whole_input() {
        assert_eq!(SearchQuery::parse("ML").unwrap().expanded(), "machine learning");
        assert_eq!(SearchQuery::parse("nodejs").unwrap().expanded(), "node");
        // not per word
        assert_eq!(SearchQuery::parse("ml ops").unwrap().expanded(), "ml ops");
    }

    #[test]
    fn alias_table_covers_all_shorthands() {
        let keys: Vec<&str> = KEYWORD_ALIASES.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            [
                "ai", "ml", "dl", "js", "py", "reactjs", "nodejs", "frontend", "backend",
                "fullstack", "data", "devops", "cloud"
            ]
        );
        assert_eq!(expand_alias("fullstack"), Some("full stack developer"));
        assert_eq!(expand_alias("rust"), None);
    }

    // ──────────────────────────────────────────────────────────
    // Matching
    // ──────────────────────────────────────────────────────────

    #[test]
    fn haystack_joins_role_designation_and_skills() {
        let c = career("Data Analyst", "Data Engineer", &["SQL"], &["Power BI"]);
        assert_eq!(haystack(&c), "data analyst data engineer sql power bi");
    }

    #[test]
    fn react_returns_only_frontend_in_raw_tier() {
        let result = run("react", vec![frontend(), backend()]);

        assert_eq!(result.len(), 1);
        let m = matched(&result[0]);
        assert_eq!(m.career.role, "Frontend Developer");
        assert_eq!(m.tier, MatchTier::Raw);
        assert_eq!(m.source, RecordSource::Db);
    }

    #[test]
    fn reactjs_alias_matches_frontend_via_expansion() {
        let result = run("reactjs", vec![frontend(), backend()]);

        assert_eq!(result.len(), 1);
        let m = matched(&result[0]);
        assert_eq!(m.career.role, "Frontend Developer");
        assert_eq!(m.tier, MatchTier::Expanded);
    }

    #[test]
    fn unknown_input_yields_single_sentinel() {
        let result = run("zzz-nonexistent", vec![frontend(), backend()]);

        assert_eq!(result, vec![Recommendation::NoResults(NoResults::default())]);
        assert!(result[0].is_no_results());
        assert_eq!(result[0].role(), NO_RESULTS_ROLE);
    }

    #[test]
    fn empty_corpus_yields_sentinel() {
        let result = run("react", vec![]);
        assert_eq!(result.len(), 1);
        assert!(result[0].is_no_results());
    }

    #[test]
    fn ai_alias_matches_capitalized_skill() {
        let ml = career(
            "Machine Learning Engineer",
            "Research Engineer",
            &["Python", "Artificial Intelligence"],
            &[],
        );
        let designer = career("UI/UX Designer", "Product Designer", &["Figma"], &[]);

        let result = run("AI", vec![designer, ml]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].role(), "Machine Learning Engineer");
    }

    #[test]
    fn substring_matching_over_matches_java_in_javascript() {
        let result = run("java", vec![frontend(), backend()]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].role(), "Frontend Developer");
    }

    #[test]
    fn any_expanded_token_is_enough() {
        // "backend developer" -> token "developer" hits every developer role
        let designer = career("UI/UX Designer", "Product Designer", &["Figma"], &[]);
        let result = run("backend", vec![frontend(), designer, backend()]);

        let roles: Vec<&str> = result.iter().map(|r| r.role()).collect();
        assert_eq!(roles, ["Backend Developer", "Frontend Developer"]);
    }

    #[test]
    fn exact_role_is_found_in_raw_tier() {
        let corpus = vec![frontend(), backend()];
        for record in &corpus {
            let result = run(&record.role.to_lowercase(), corpus.clone());
            let hit = result
                .iter()
                .map(matched)
                .find(|m| m.career.id == record.id)
                .expect("record must be returned");
            assert_eq!(hit.tier, MatchTier::Raw);
        }
    }

    #[test]
    fn next_skills_are_searched() {
        let c = career("Data Analyst", "Data Engineer", &["Excel"], &["Power BI"]);
        assert_eq!(run("power bi", vec![c]).len(), 1);
    }

    #[test]
    fn resources_are_not_in_haystack() {
        let mut c = career("Backend Developer", "Software Engineer", &["Go"], &[]);
        c.resources = vec![Resource::new("Kubernetes Handbook", "https://k8s.io")];

        let result = run("kubernetes", vec![c]);
        assert!(result[0].is_no_results());
    }

    // ──────────────────────────────────────────────────────────
    // Ranking
    // ──────────────────────────────────────────────────────────

    #[test]
    fn raw_matches_rank_before_expansion_matches() {
        // "frontend" expands to "frontend developer"; the backend record only
        // matches through the "developer" token
        let result = run("frontend", vec![backend(), frontend()]);

        let roles: Vec<&str> = result.iter().map(|r| r.role()).collect();
        assert_eq!(roles, ["Frontend Developer", "Backend Developer"]);
        assert_eq!(matched(&result[0]).tier, MatchTier::Raw);
        assert_eq!(matched(&result[1]).tier, MatchTier::Expanded);
    }

    #[test]
    fn raw_tier_considers_resources_in_serialized_form() {
        // matched only via the "developer" token, but the raw input appears
        // in a resource link, which lifts it into the raw tier
        let mut docs = career("Backend Developer", "Software Engineer", &["Go"], &[]);
        docs.resources = vec![Resource::new("Guide", "https://frontend.example")];
        let plain = career("Mobile Developer", "App Engineer", &["Swift"], &[]);

        let result = run("frontend", vec![plain, docs]);

        let roles: Vec<&str> = result.iter().map(|r| r.role()).collect();
        assert_eq!(roles, ["Backend Developer", "Mobile Developer"]);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let a = career("Full Stack Developer", "Software Engineer", &["React"], &[]);
        let b = frontend();
        let c = career("React Native Developer", "Mobile Engineer", &["React"], &[]);

        let result = run("react", vec![a.clone(), b.clone(), c.clone()]);

        let ids: Vec<Uuid> = result.iter().map(|r| matched(r).career.id).collect();
        assert_eq!(ids, [a.id, b.id, c.id]);
    }

    #[test]
    fn recommend_is_idempotent() {
        let corpus = vec![frontend(), backend()];
        let query = SearchQuery::parse("developer").unwrap();

        let first = recommend(&query, corpus.clone()).unwrap();
        let second = recommend(&query, corpus).unwrap();

        assert_eq!(first, second);
    }

    // ──────────────────────────────────────────────────────────
    // Serialization
    // ──────────────────────────────────────────────────────────

    #[test]
    fn matched_career_serializes_flat_with_source() {
        let result = run("react", vec![frontend()]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json[0]["role"], "Frontend Developer");
        assert_eq!(json[0]["source"], "db");
        assert_eq!(json[0]["required_skills"][3], "React");
        assert!(json[0].get("id").is_some());
        assert!(json[0].get("tier").is_none());
    }

    #[test]
    fn sentinel_serializes_without_id_or_source() {
        let json = serde_json::to_value(&run("zzz", vec![])).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "role": "No results found",
                "designation": "-",
                "required_skills": [],
                "next_skills": [],
                "resources": []
            }])
        );
    }
}
