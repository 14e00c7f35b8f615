//! Starter content written into empty tables on first boot.

use crate::about::application::domain::entities::{AboutMe, Contact};
use crate::experience::application::domain::entities::Experience;
use crate::project::application::domain::entities::Project;
use crate::skill::application::domain::entities::SkillCategory;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory::new(
            "Programming",
            strings(&["Python", "Java", "C++", "JavaScript", "HTML", "CSS"]),
        ),
        SkillCategory::new(
            "Frameworks",
            strings(&["Flask", "Django", "React", "Angular"]),
        ),
        SkillCategory::new(
            "Databases",
            strings(&["MySQL", "PostgreSQL", "SQLite", "MongoDB"]),
        ),
        SkillCategory::new(
            "Tools",
            strings(&["Git", "Docker", "Jenkins", "Jira", "Confluence"]),
        ),
        SkillCategory::new("Cloud", strings(&["AWS", "Azure", "Google Cloud"])),
    ]
}

pub fn languages() -> Vec<String> {
    strings(&["English", "Spanish", "French", "German", "Italian"])
}

pub fn experiences() -> Vec<Experience> {
    let entry = |title: &str, company: &str, dates: &str| Experience {
        title: title.to_string(),
        company_name: company.to_string(),
        position: "Software Engineer".to_string(),
        dates: dates.to_string(),
        description: "This is a job description.".to_string(),
    };

    vec![
        entry("company1", "Company 1", "Jan 2019 - Present"),
        entry("company2", "Company 2", "Jan 2017 - Dec 2018"),
    ]
}

pub fn projects() -> Vec<Project> {
    let entry = |name: &str, technologies: &[&str]| Project {
        name: name.to_string(),
        description: "This is a project description.".to_string(),
        technologies: strings(technologies),
        link: Some("#".to_string()),
    };

    vec![
        entry("Project 1", &["Python", "Flask", "MySQL"]),
        entry("Project 2", &["Python", "Django", "PostgreSQL"]),
    ]
}

pub fn about_me() -> AboutMe {
    AboutMe {
        name: "Alex Hurtado".to_string(),
        age: "21".to_string(),
        university: "University of Technology".to_string(),
        degree: "Bachelor of Computer Science".to_string(),
        year: "3rd Year".to_string(),
        bio: "I am a passionate computer science student with a keen interest in web \
              development, artificial intelligence, and data science. I love learning new \
              technologies and applying them to solve real-world problems."
            .to_string(),
        hobbies: strings(&["Coding", "Reading", "Gaming", "Hiking"]),
        goals: "To become a full-stack developer and contribute to open-source projects."
            .to_string(),
        contact: Contact {
            email: "alex.hurtado@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            linkedin: "https://www.linkedin.com/in/example".to_string(),
            github: "https://github.com/example".to_string(),
        },
    }
}
