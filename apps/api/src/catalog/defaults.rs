//! Built-in keyword tables used when no `CATALOG_PATH` is configured.

pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "c++",
    "machine learning",
    "deep learning",
    "nlp",
    "data science",
    "sql",
    "excel",
    "communication",
    "teamwork",
    "html",
    "css",
    "javascript",
    "power bi",
    "tensorflow",
    "pandas",
    "numpy",
    "linux",
    "problem solving",
];

pub const ROLE_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "Data Scientist",
        &[
            "python",
            "machine learning",
            "deep learning",
            "nlp",
            "pandas",
            "numpy",
            "tensorflow",
        ],
    ),
    ("Data Analyst", &["sql", "excel", "power bi", "tableau"]),
    (
        "Frontend Developer",
        &["html", "css", "javascript", "react", "angular"],
    ),
    (
        "Backend Developer",
        &["python", "java", "c++", "nodejs", "django", "flask"],
    ),
    (
        "Software Engineer",
        &["java", "c++", "python", "problem solving", "linux"],
    ),
    (
        "AI Engineer",
        &[
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "nlp",
        ],
    ),
    (
        "Business Analyst",
        &["communication", "teamwork", "excel", "sql", "presentation"],
    ),
];

pub const COMPANY_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "Google",
        &[
            "python",
            "data structures",
            "algorithms",
            "system design",
            "machine learning",
            "communication",
        ],
    ),
    (
        "Microsoft",
        &[
            "c++",
            "java",
            "data structures",
            "algorithms",
            "problem solving",
            "teamwork",
        ],
    ),
    (
        "Amazon",
        &[
            "java",
            "python",
            "data structures",
            "algorithms",
            "system design",
            "linux",
        ],
    ),
    (
        "Meta",
        &[
            "python",
            "c++",
            "javascript",
            "machine learning",
            "system design",
            "data structures",
        ],
    ),
    (
        "Deloitte",
        &[
            "excel",
            "sql",
            "power bi",
            "communication",
            "teamwork",
            "problem solving",
        ],
    ),
];
