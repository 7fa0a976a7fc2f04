//! Copy, stats and skill levels for the about panel.

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub glyph: &'static str,
    /// Proficiency, 0..=100.
    pub level: u8,
}

pub const INTRO: &str = "A passionate full-stack developer with a love for creating innovative solutions to digital problems of all scopes.";

pub const DESCRIPTION: &str = "I am a Canadian Forces Veteran who found true purpose in full-stack development. With experience across the entire development stack, I bring ideas to life by creating responsive and practical applications that deliver exceptional user experiences. Developing applications isn't a job... It's a passion.";

pub static STATS: [Stat; 3] = [
    Stat { label: "Years Experience", value: "2+" },
    Stat { label: "Projects Completed", value: "30+" },
    Stat { label: "Technologies", value: "15+" },
];

pub static SKILLS: [Skill; 4] = [
    Skill { name: "Frontend", glyph: "◍", level: 90 },
    Skill { name: "Backend", glyph: "▤", level: 85 },
    Skill { name: "Databases", glyph: "⛁", level: 80 },
    Skill { name: "DevOps", glyph: "⚙", level: 75 },
];

/// CSS width for a skill bar, clamped to 100%.
#[must_use]
pub fn skill_bar_width(level: u8) -> String {
    format!("width: {}%", level.min(100))
}
