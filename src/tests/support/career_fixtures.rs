use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::career::application::domain::entities::{CareerRecord, Resource};

pub fn career_record(
    role: &str,
    designation: &str,
    required_skills: &[&str],
    next_skills: &[&str],
) -> CareerRecord {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
    CareerRecord {
        id: Uuid::new_v4(),
        role: role.to_string(),
        designation: designation.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        next_skills: next_skills.iter().map(|s| s.to_string()).collect(),
        resources: vec![],
        created_at: at,
        updated_at: at,
    }
}

/// Three careers in insertion order, `created_at` one minute apart.
pub fn sample_corpus() -> Vec<CareerRecord> {
    let mut frontend = career_record(
        "Frontend Developer",
        "UI Engineer",
        &["HTML", "CSS", "JavaScript", "React"],
        &["Next.js", "TypeScript"],
    );
    frontend.resources = vec![Resource::new("React Docs", "https://react.dev")];

    let mut backend = career_record(
        "Backend Developer",
        "Software Engineer",
        &["Node.js", "Express", "MongoDB"],
        &["SQL", "Docker"],
    );
    backend.created_at += Duration::minutes(1);
    backend.updated_at = backend.created_at;

    let mut analyst = career_record(
        "Data Analyst",
        "Data Engineer",
        &["Excel", "SQL", "Python"],
        &["Power BI", "Machine Learning"],
    );
    analyst.created_at += Duration::minutes(2);
    analyst.updated_at = analyst.created_at;

    vec![frontend, backend, analyst]
}
