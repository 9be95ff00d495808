//! Starter content loaded into a fresh store.

use crate::models::{
    Lesson, LessonDifficulty, Project, ProjectDifficulty, Resource, ResourceType,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "1".to_string(),
            title: "Introduction to Renewable Energy".to_string(),
            description: "Learn the basics of solar, wind, and hydro power.".to_string(),
            category: "Renewable Energy".to_string(),
            difficulty: LessonDifficulty::Beginner,
            duration: "15 min".to_string(),
            content: "Renewable energy is energy from sources that are naturally replenishing but flow-limited...".to_string(),
            image: Some("https://images.unsplash.com/photo-1509391366360-2e959784a276?auto=format&fit=crop&q=80".to_string()),
        },
        Lesson {
            id: "2".to_string(),
            title: "Zero Waste Living 101".to_string(),
            description: "Simple steps to reduce your daily waste footprint.".to_string(),
            category: "Waste Reduction".to_string(),
            difficulty: LessonDifficulty::Beginner,
            duration: "10 min".to_string(),
            content: "The 5 Rs of Zero Waste: Refuse, Reduce, Reuse, Recycle, Rot...".to_string(),
            image: Some("https://images.unsplash.com/photo-1532996122724-e3c354a0b15b?auto=format&fit=crop&q=80".to_string()),
        },
        Lesson {
            id: "3".to_string(),
            title: "Urban Gardening Basics".to_string(),
            description: "Grow your own food even in small spaces.".to_string(),
            category: "Eco-friendly Lifestyle".to_string(),
            difficulty: LessonDifficulty::Intermediate,
            duration: "20 min".to_string(),
            content: "You do not need a big backyard to grow food. Balconies and windowsills work great...".to_string(),
            image: Some("https://images.unsplash.com/photo-1530836369250-ef72a3f5cda8?auto=format&fit=crop&q=80".to_string()),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Plastic-Free Week Challenge".to_string(),
            description: "Attempt to go one full week without buying single-use plastics."
                .to_string(),
            duration: "7 Days".to_string(),
            difficulty: ProjectDifficulty::Medium,
            impact: "Save ~15 plastic items".to_string(),
            instructions: strings(&[
                "Audit your current plastic use",
                "Prepare reusable alternatives",
                "Track your progress daily",
            ]),
            materials: strings(&["Reusable bag", "Water bottle", "Food containers"]),
            participants: 124,
        },
        Project {
            id: "2".to_string(),
            title: "Campus Energy Audit".to_string(),
            description: "Identify energy wastage in your school or home.".to_string(),
            duration: "2 Days".to_string(),
            difficulty: ProjectDifficulty::Easy,
            impact: "Potential 10% energy savings".to_string(),
            instructions: strings(&[
                "Walk through rooms",
                "Check for drafts",
                "Note electronics left on standby",
            ]),
            materials: strings(&["Notepad", "Checklist"]),
            participants: 45,
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".to_string(),
            title: "Global Climate Report 2024".to_string(),
            description: "Summary of the latest findings on climate change.".to_string(),
            kind: ResourceType::PDF,
            url: "#".to_string(),
            tag: "Advanced".to_string(),
        },
        Resource {
            id: "2".to_string(),
            title: "10 Ways to Save Water".to_string(),
            description: "Quick tips for water conservation at home.".to_string(),
            kind: ResourceType::Article,
            url: "#".to_string(),
            tag: "Beginner".to_string(),
        },
    ]
}
