//! Canonical rows written by the seed into empty tables.

use crate::entities::skill::SkillCategory;

pub struct ProjectFixture {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub image_url: &'static str,
}

pub struct SkillFixture {
    pub name: &'static str,
    pub category: SkillCategory,
}

pub struct ExperienceFixture {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: &[ProjectFixture] = &[
    ProjectFixture {
        title: "E-Commerce Dashboard",
        description: "A comprehensive dashboard for managing online stores, featuring real-time analytics, inventory management, and order processing.",
        tech_stack: &["React", "TypeScript", "Node.js", "PostgreSQL"],
        demo_url: Some("https://example.com/demo1"),
        repo_url: Some("https://github.com/justin/ecommerce"),
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f7a07d?w=800&q=80",
    },
    ProjectFixture {
        title: "Task Collaboration Platform",
        description: "Real-time task management tool allowing teams to collaborate seamlessly with kanban boards and chat integration.",
        tech_stack: &["Vue.js", "Firebase", "Tailwind CSS"],
        demo_url: Some("https://example.com/demo2"),
        repo_url: Some("https://github.com/justin/tasks"),
        image_url: "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?w=800&q=80",
    },
    ProjectFixture {
        title: "AI Content Generator",
        description: "SaaS application that uses OpenAI's API to generate blog posts and social media content for marketers.",
        tech_stack: &["Next.js", "OpenAI API", "Stripe"],
        demo_url: Some("https://example.com/demo3"),
        repo_url: Some("https://github.com/justin/ai-gen"),
        image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80",
    },
];

pub const SKILLS: &[SkillFixture] = &[
    SkillFixture { name: "React", category: SkillCategory::Frontend },
    SkillFixture { name: "TypeScript", category: SkillCategory::Frontend },
    SkillFixture { name: "Tailwind CSS", category: SkillCategory::Frontend },
    SkillFixture { name: "Next.js", category: SkillCategory::Frontend },
    SkillFixture { name: "Node.js", category: SkillCategory::Backend },
    SkillFixture { name: "Express", category: SkillCategory::Backend },
    SkillFixture { name: "PostgreSQL", category: SkillCategory::Backend },
    SkillFixture { name: "Python", category: SkillCategory::Backend },
    SkillFixture { name: "Git", category: SkillCategory::Tools },
    SkillFixture { name: "Docker", category: SkillCategory::Tools },
    SkillFixture { name: "AWS", category: SkillCategory::Tools },
    SkillFixture { name: "Figma", category: SkillCategory::Tools },
];

pub const EXPERIENCES: &[ExperienceFixture] = &[
    ExperienceFixture {
        role: "Senior Full Stack Developer",
        company: "TechFlow Systems",
        duration: "2023 - Present",
        description: "Leading a team of 5 developers building cloud-native applications. Architected the migration from monolith to microservices.",
    },
    ExperienceFixture {
        role: "Frontend Developer",
        company: "Creative Digital Agency",
        duration: "2021 - 2023",
        description: "Developed responsive websites and web applications for high-profile clients. Improved site performance by 40%.",
    },
    ExperienceFixture {
        role: "Junior Developer",
        company: "StartUp Inc",
        duration: "2020 - 2021",
        description: "Collaborated on the development of the MVP. Implemented key features using React and Node.js.",
    },
];

/// Fixture skill names in the given category, in seed order.
pub fn skill_names(category: SkillCategory) -> Vec<&'static str> {
    SKILLS
        .iter()
        .filter(|s| s.category == category)
        .map(|s| s.name)
        .collect()
}
