use crate::career::application::domain::entities::{CareerValidationError, NewCareer, Resource};

struct CareerSeed {
    role: &'static str,
    designation: &'static str,
    required_skills: &'static [&'static str],
    next_skills: &'static [&'static str],
    resources: &'static [(&'static str, &'static str)],
}

const CAREERS: &[CareerSeed] = &[
    CareerSeed {
        role: "Frontend Developer",
        designation: "UI Engineer",
        required_skills: &["HTML", "CSS", "JavaScript", "React"],
        next_skills: &["Next.js", "TypeScript", "Tailwind CSS"],
        resources: &[("React Docs", "https://react.dev")],
    },
    CareerSeed {
        role: "Backend Developer",
        designation: "Software Engineer",
        required_skills: &["Node.js", "Express", "MongoDB"],
        next_skills: &["SQL", "Docker", "AWS"],
        resources: &[("Node.js Docs", "https://nodejs.org/en/docs")],
    },
    CareerSeed {
        role: "Full Stack Developer",
        designation: "Software Engineer",
        required_skills: &["HTML", "CSS", "JavaScript", "React", "Node.js"],
        next_skills: &["GraphQL", "Docker", "CI/CD"],
        resources: &[("Full Stack Open", "https://fullstackopen.com/en/")],
    },
    CareerSeed {
        role: "UI/UX Designer",
        designation: "Product Designer",
        required_skills: &["Figma", "Adobe XD", "Wireframing"],
        next_skills: &["Prototyping", "Design Systems"],
        resources: &[("Figma Learn", "https://help.figma.com/")],
    },
    CareerSeed {
        role: "Data Analyst",
        designation: "Data Engineer",
        required_skills: &["Excel", "SQL", "Python"],
        next_skills: &["Power BI", "Machine Learning"],
        resources: &[("Kaggle Learn", "https://www.kaggle.com/learn")],
    },
];

// "R" appears twice on purpose; the list is stored as written.
#[rustfmt::skip]
pub const LANGUAGES: &[&str] = &[
    "JavaScript", "Python", "Java", "C", "C++", "C#", "TypeScript", "Ruby", "Go", "Swift",
    "Kotlin", "PHP", "Rust", "R", "Dart", "SQL", "HTML", "CSS", "JSON", "YAML",
    "Bash", "PowerShell", "R", "MATLAB", "Perl", "Scala", "Lua", "Elixir", "Haskell",
    "React", "Vue.js", "Angular", "Node.js", "Express.js", "Django", "Flask", "Spring Boot",
    "MongoDB", "PostgreSQL", "MySQL", "Firebase", "Dockerfile", "Terraform", "Kubernetes YAML",
    "TensorFlow", "PyTorch", "Keras", "NumPy", "Pandas", "Solidity", "Web3.js",
    "AWS Lambda", "Google Cloud", "Azure", "Raspberry Pi", "Arduino",
    "English", "Spanish", "French", "German", "Hindi", "Arabic", "Mandarin", "Japanese", "Korean", "Russian",
];

#[rustfmt::skip]
pub const DESIGNATIONS: &[&str] = &[
    "Frontend Developer", "Backend Developer", "Full Stack Developer", "Software Engineer", "Mobile App Developer",
    "Game Developer", "Blockchain Developer", "DevOps Engineer", "Cloud Engineer", "Site Reliability Engineer",
    "Machine Learning Engineer", "AI Engineer", "Data Scientist", "Data Analyst", "Database Administrator",
    "System Administrator", "Automation Engineer", "QA Engineer", "Security Engineer", "Cybersecurity Analyst",
    "UI Designer", "UX Designer", "Product Designer", "Graphic Designer", "Creative Director",
    "Project Manager", "Product Manager", "Scrum Master", "Agile Coach", "Business Analyst",
    "Network Engineer", "Hardware Engineer", "Embedded Systems Engineer", "IoT Developer", "Robotics Engineer",
    "Digital Marketing Manager", "SEO Specialist", "Content Writer", "Copywriter", "Social Media Manager",
    "Financial Analyst", "Accountant", "Investment Analyst", "HR Executive", "Recruiter", "HR Manager",
    "Lecturer", "Professor", "Research Scientist", "Video Editor", "Photographer", "Animator",
    "Entrepreneur", "Startup Founder", "Technical Writer", "Customer Support Specialist", "Operations Manager",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in career corpus, validated like any incoming career.
pub fn careers() -> Result<Vec<NewCareer>, CareerValidationError> {
    CAREERS
        .iter()
        .map(|seed| {
            NewCareer::new(
                Some(seed.role.to_string()),
                Some(seed.designation.to_string()),
                Some(owned(seed.required_skills)),
                Some(owned(seed.next_skills)),
                Some(
                    seed.resources
                        .iter()
                        .map(|(title, link)| Resource::new(*title, *link))
                        .collect(),
                ),
            )
        })
        .collect()
}

pub fn languages() -> Vec<String> {
    owned(LANGUAGES)
}

pub fn designations() -> Vec<String> {
    owned(DESIGNATIONS)
}
