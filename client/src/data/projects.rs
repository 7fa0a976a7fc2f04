//! Project showcase entries.

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image_url: &'static str,
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
}

pub const ALL_PROJECTS_URL: &str = "https://github.com/FullStackVet";

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Chat App",
        description: "A full-stack chat application featuring user authentication, live chats, and full database built on the MERN stack.",
        technologies: &["MongoDB", "Express", "React", "JavaScript"],
        image_url: "./chatApp.png",
        github_url: "https://github.com/FullStackVet/MERNChatApp.git",
        live_url: None,
    },
    Project {
        id: 2,
        title: "Full Weather App",
        description: "A full weather app built in React/Express utilizing Axios to call weatherapi.com. Features a live, 5-day and 24-hour forecast",
        technologies: &["TailwindCSS", "React", "TypeScript", "Express"],
        image_url: "./weatherApp.png",
        github_url: "https://github.com/FullStackVet/React-Weather-App.git",
        live_url: None,
    },
    Project {
        id: 3,
        title: "Basic Finance App",
        description: "A basic finance app with visual graph, summary report, clean forms to add expenses/income and a tracker.",
        technologies: &["Flutter", "Dart", "C++", "Swift"],
        image_url: "./financeApp.png",
        github_url: "https://github.com/FullStackVet/basic-finance-app.git",
        live_url: None,
    },
];
