//! Skill vocabularies for resume extraction, job requirements and interest mapping.

/// Technical keywords recognized in resume text.
pub(crate) const TECHNICAL_KEYWORDS: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "React", "Angular", "Vue", "Node.js", "Express",
    "MongoDB", "SQL", "PostgreSQL", "AWS", "Azure", "Docker", "Kubernetes", "CI/CD", "Git",
    "Agile", "Scrum", "Project Management", "UI/UX", "Figma", "Adobe XD", "Photoshop",
    "Illustrator", "Data Analysis", "Machine Learning", "AI", "Deep Learning", "TensorFlow",
    "PyTorch", "NLP", "Computer Vision", "Statistics", "R", "MATLAB",
];

/// Soft-skill keywords recognized in resume text.
pub(crate) const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "Communication",
    "Teamwork",
    "Leadership",
    "Problem Solving",
    "Critical Thinking",
    "Time Management",
    "Adaptability",
    "Creativity",
    "Collaboration",
    "Emotional Intelligence",
    "Conflict Resolution",
];

/// What a job title asks for.
#[derive(Debug)]
pub struct JobRequirements {
    pub key: &'static str,
    pub technical: &'static [&'static str],
    pub soft_skills: &'static [&'static str],
    pub experience: &'static str,
}

/// Matched by key containment against the folded job title, first match wins.
pub(crate) const JOB_REQUIREMENTS: &[JobRequirements] = &[
    JobRequirements {
        key: "software developer",
        technical: &["JavaScript", "HTML", "CSS", "React", "Node.js", "Git"],
        soft_skills: &["Problem Solving", "Teamwork", "Communication"],
        experience: "1-3 years",
    },
    JobRequirements {
        key: "data scientist",
        technical: &["Python", "R", "SQL", "Machine Learning", "Statistics", "Data Visualization"],
        soft_skills: &["Critical Thinking", "Communication", "Problem Solving"],
        experience: "2-4 years",
    },
    JobRequirements {
        key: "ux designer",
        technical: &["Figma", "Adobe XD", "UI/UX", "Wireframing", "Prototyping"],
        soft_skills: &["Creativity", "Empathy", "Communication"],
        experience: "1-3 years",
    },
    JobRequirements {
        key: "product manager",
        technical: &["Product Development", "Agile", "Scrum", "Market Research"],
        soft_skills: &["Leadership", "Communication", "Strategic Thinking"],
        experience: "3-5 years",
    },
];

pub(crate) const DEFAULT_JOB_REQUIREMENTS: JobRequirements = JobRequirements {
    key: "",
    technical: &["Problem Solving", "Critical Thinking", "Computer Skills"],
    soft_skills: &["Communication", "Teamwork", "Adaptability"],
    experience: "Entry level",
};

/// Interest category → skills it implies.
pub(crate) const INTEREST_SKILLS: &[(&str, &[&str])] = &[
    ("programming", &["JavaScript", "Python", "Java", "React", "Node.js"]),
    ("design", &["UI/UX", "Figma", "Adobe XD", "Graphic Design"]),
    ("business", &["Project Management", "Marketing", "Sales", "Communication"]),
    ("science", &["Data Analysis", "Research", "Statistics", "Machine Learning"]),
    ("writing", &["Content Creation", "Copywriting", "Technical Writing"]),
];
