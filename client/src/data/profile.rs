//! Developer profile rendered into the hero code panel.

/// Languages and frameworks listed under `stack`.
#[derive(Clone, Copy, Debug)]
pub struct TechStack {
    pub languages: &'static [&'static str],
    pub frameworks: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct DeveloperProfile {
    pub codename: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub stack: TechStack,
    pub traits: &'static [&'static str],
    pub mission_statement: &'static str,
    pub availability: &'static str,
}

pub const FIRST_NAME: &str = "Timothy";
pub const LAST_NAME: &str = "Murphy";
/// Garbled placeholder shown before the last-name flip completes.
pub const LAST_NAME_REVERSED: &str = "yhpruM";

pub static DEVELOPER_PROFILE: DeveloperProfile = DeveloperProfile {
    codename: "FullStackVet",
    location: "☕ Sipping coffee in the digital && physical realms",
    role: "Full-Stack Web, App & Software Developer",
    stack: TechStack {
        languages: &["JavaScript", "TypeScript", "Python", "Dart", "php", "Java", "SQL"],
        frameworks: &["ASP.NET", "Next.js", "Express.js", "TailwindCSS"],
    },
    traits: &[
        "pixel-perfectionist",
        "API Whisperer",
        "Dark Mode Advocate",
        "Terminal Aesthetic Enthusiast",
    ],
    mission_statement: "Full-Stack Missions, Veteran Execution",
    availability: "Available for hire",
};
