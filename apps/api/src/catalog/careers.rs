//! Career seed tables.
//!
//! Two catalogs: the flat recommendation catalog behind `/predict-career`, and
//! the clustered career-path catalog behind `/career-path`.

use crate::models::career::{Cluster, GrowthOutlook};

/// Static form of a career before its salary string is parsed.
pub(crate) struct CareerSeed {
    pub title: &'static str,
    pub required_skills: &'static [&'static str],
    pub education_path: &'static [&'static str],
    pub salary_range: &'static str,
    pub growth_outlook: GrowthOutlook,
    pub roles: &'static [&'static str],
    pub traits: &'static [&'static str],
    pub cluster: Option<Cluster>,
}

pub(crate) const RECOMMENDATION_SEEDS: &[CareerSeed] = &[
    CareerSeed {
        title: "Software Developer",
        required_skills: &["programming", "problem solving", "javascript", "html", "css"],
        education_path: &["Computer Science", "Information Technology", "Software Engineering"],
        salary_range: "$70,000 - $120,000",
        growth_outlook: GrowthOutlook::High,
        roles: &["Junior Developer", "Software Developer", "Senior Developer", "Tech Lead"],
        traits: &["analytical", "logical", "problem-solver", "detail-oriented"],
        cluster: Some(Cluster::Technology),
    },
    CareerSeed {
        title: "Data Scientist",
        required_skills: &["statistics", "python", "machine learning", "data analysis", "sql"],
        education_path: &["Computer Science", "Statistics", "Mathematics"],
        salary_range: "$80,000 - $130,000",
        growth_outlook: GrowthOutlook::VeryHigh,
        roles: &["Data Analyst", "Data Scientist", "Senior Data Scientist", "Head of Data"],
        traits: &["analytical", "curious", "detail-oriented", "logical"],
        cluster: Some(Cluster::Technology),
    },
    CareerSeed {
        title: "UX Designer",
        required_skills: &["design", "user research", "wireframing", "prototyping", "creativity"],
        education_path: &["Design", "Psychology", "Human-Computer Interaction"],
        salary_range: "$65,000 - $105,000",
        growth_outlook: GrowthOutlook::Medium,
        roles: &["UX Researcher", "UX Designer", "Senior UX Designer", "UX Director"],
        traits: &["empathetic", "creative", "analytical", "user-focused"],
        cluster: Some(Cluster::Creative),
    },
    CareerSeed {
        title: "Digital Marketer",
        required_skills: &["social media", "content creation", "analytics", "seo", "communication"],
        education_path: &["Marketing", "Communications", "Business"],
        salary_range: "$50,000 - $100,000",
        growth_outlook: GrowthOutlook::Medium,
        roles: &["Marketing Coordinator", "Digital Marketer", "Marketing Manager", "CMO"],
        traits: &["creative", "outgoing", "persuasive", "strategic"],
        cluster: Some(Cluster::Business),
    },
    CareerSeed {
        title: "Project Manager",
        required_skills: &["organization", "leadership", "communication", "planning", "teamwork"],
        education_path: &["Business", "Management", "Engineering"],
        salary_range: "$60,000 - $120,000",
        growth_outlook: GrowthOutlook::Medium,
        roles: &["Project Coordinator", "Project Manager", "Program Manager", "Director of Operations"],
        traits: &["organized", "leadership", "communicative", "strategic"],
        cluster: Some(Cluster::Business),
    },
];

pub(crate) const PATH_SEEDS: &[CareerSeed] = &[
    // technology
    CareerSeed {
        title: "Software Development",
        required_skills: &["Programming", "Problem Solving", "Version Control", "Testing"],
        education_path: &["Computer Science Degree", "Coding Bootcamp", "Online Courses"],
        salary_range: "$70,000 - $150,000+",
        growth_outlook: GrowthOutlook::VeryHigh,
        roles: &["Junior Developer", "Software Engineer", "Senior Developer", "Tech Lead", "CTO"],
        traits: &["analytical", "logical", "problem-solver", "detail-oriented"],
        cluster: Some(Cluster::Technology),
    },
    CareerSeed {
        title: "Data Science",
        required_skills: &["Statistics", "Python", "Machine Learning", "Data Visualization"],
        education_path: &["Statistics/Math Degree", "Data Science Bootcamp", "Online Specializations"],
        salary_range: "$80,000 - $160,000+",
        growth_outlook: GrowthOutlook::VeryHigh,
        roles: &["Data Analyst", "Data Scientist", "Machine Learning Engineer", "AI Specialist"],
        traits: &["analytical", "curious", "detail-oriented", "logical"],
        cluster: Some(Cluster::Technology),
    },
    CareerSeed {
        title: "Cybersecurity",
        required_skills: &["Network Security", "Ethical Hacking", "Risk Assessment", "Security Tools"],
        education_path: &["Computer Science Degree", "Security Certifications", "Specialized Training"],
        salary_range: "$85,000 - $170,000+",
        growth_outlook: GrowthOutlook::VeryHigh,
        roles: &["Security Analyst", "Penetration Tester", "Security Engineer", "CISO"],
        traits: &["detail-oriented", "vigilant", "analytical", "ethical"],
        cluster: Some(Cluster::Technology),
    },
    // business
    CareerSeed {
        title: "Marketing",
        required_skills: &["Communication", "Analytics", "Social Media", "Content Creation"],
        education_path: &["Marketing Degree", "Business Administration", "Digital Marketing Certifications"],
        salary_range: "$50,000 - $140,000+",
        growth_outlook: GrowthOutlook::High,
        roles: &["Marketing Coordinator", "Marketing Manager", "Digital Marketing Specialist", "CMO"],
        traits: &["creative", "outgoing", "persuasive", "strategic"],
        cluster: Some(Cluster::Business),
    },
    CareerSeed {
        title: "Finance",
        required_skills: &["Financial Analysis", "Excel", "Accounting", "Risk Management"],
        education_path: &["Finance/Accounting Degree", "MBA", "CFA Certification"],
        salary_range: "$65,000 - $180,000+",
        growth_outlook: GrowthOutlook::Medium,
        roles: &["Financial Analyst", "Investment Banker", "Financial Advisor", "CFO"],
        traits: &["analytical", "detail-oriented", "logical", "risk-aware"],
        cluster: Some(Cluster::Business),
    },
    CareerSeed {
        title: "Project Management",
        required_skills: &["Organization", "Leadership", "Communication", "Risk Management"],
        education_path: &["Business Degree", "PMP Certification", "Agile/Scrum Certifications"],
        salary_range: "$60,000 - $150,000+",
        growth_outlook: GrowthOutlook::High,
        roles: &["Project Coordinator", "Project Manager", "Program Manager", "Director of Operations"],
        traits: &["organized", "leadership", "communicative", "strategic"],
        cluster: Some(Cluster::Business),
    },
    // healthcare
    CareerSeed {
        title: "Nursing",
        required_skills: &["Patient Care", "Medical Knowledge", "Communication", "Critical Thinking"],
        education_path: &["Nursing Degree", "Advanced Practice Degrees", "Specialization Certifications"],
        salary_range: "$70,000 - $120,000+",
        growth_outlook: GrowthOutlook::VeryHigh,
        roles: &["Registered Nurse", "Nurse Practitioner", "Nurse Manager", "Chief Nursing Officer"],
        traits: &["empathetic", "detail-oriented", "calm", "communicative"],
        cluster: Some(Cluster::Healthcare),
    },
    CareerSeed {
        title: "Healthcare Administration",
        required_skills: &["Organization", "Leadership", "Healthcare Knowledge", "Business Acumen"],
        education_path: &["Healthcare Administration Degree", "MBA in Healthcare", "Certifications"],
        salary_range: "$60,000 - $200,000+",
        growth_outlook: GrowthOutlook::High,
        roles: &["Administrative Assistant", "Department Manager", "Hospital Administrator", "CEO"],
        traits: &["organized", "leadership", "analytical", "communicative"],
        cluster: Some(Cluster::Healthcare),
    },
    CareerSeed {
        title: "Health Informatics",
        required_skills: &["Healthcare Knowledge", "Data Analysis", "IT Skills", "EHR Systems"],
        education_path: &["Health Informatics Degree", "IT with Healthcare Focus", "Certifications"],
        salary_range: "$65,000 - $130,000+",
        growth_outlook: GrowthOutlook::High,
        roles: &[
            "Health Information Technician",
            "Clinical Informatics Specialist",
            "Health Informatics Director",
        ],
        traits: &["analytical", "detail-oriented", "technical", "organized"],
        cluster: Some(Cluster::Healthcare),
    },
    // creative
    CareerSeed {
        title: "Graphic Design",
        required_skills: &["Design Software", "Typography", "Color Theory", "Visual Communication"],
        education_path: &["Design Degree", "Portfolio School", "Self-taught with Strong Portfolio"],
        salary_range: "$45,000 - $120,000+",
        growth_outlook: GrowthOutlook::Medium,
        roles: &["Junior Designer", "Graphic Designer", "Senior Designer", "Creative Director"],
        traits: &["creative", "visual", "detail-oriented", "artistic"],
        cluster: Some(Cluster::Creative),
    },
    CareerSeed {
        title: "UX/UI Design",
        required_skills: &["User Research", "Wireframing", "Prototyping", "Design Thinking"],
        education_path: &["Design Degree", "UX Bootcamp", "HCI Courses"],
        salary_range: "$70,000 - $150,000+",
        growth_outlook: GrowthOutlook::High,
        roles: &["UX Researcher", "UI Designer", "UX/UI Designer", "UX Director"],
        traits: &["empathetic", "creative", "analytical", "user-focused"],
        cluster: Some(Cluster::Creative),
    },
    CareerSeed {
        title: "Content Creation",
        required_skills: &["Writing", "Editing", "SEO", "Content Strategy"],
        education_path: &["Communications/English Degree", "Marketing Courses", "Writing Workshops"],
        salary_range: "$50,000 - $120,000+",
        growth_outlook: GrowthOutlook::Medium,
        roles: &["Content Writer", "Content Strategist", "Content Marketing Manager", "Editorial Director"],
        traits: &["creative", "communicative", "detail-oriented", "curious"],
        cluster: Some(Cluster::Creative),
    },
];

/// Interest keywords that pull a cluster into a career-path search.
pub(crate) const CLUSTER_KEYWORDS: &[(Cluster, &[&str])] = &[
    (Cluster::Technology, &["tech", "program", "data"]),
    (Cluster::Business, &["business", "market", "finance"]),
    (Cluster::Healthcare, &["health", "care", "medical"]),
    (Cluster::Creative, &["design", "art", "creat"]),
];
