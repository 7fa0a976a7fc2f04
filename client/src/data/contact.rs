//! Contact details, social links and the resume-request mail template.

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub glyph: &'static str,
}

pub const LOCATION: &str = "Alberta, Canada 🍁";
pub const PHONE_HREF: &str = "tel:+1-825-977-5990";
pub const EMAIL_ADDRESS: &str = "fullstackvet@gmail.com";
pub const RESUME_PATH: &str = "/Murphy_T_Resume.docx";

pub const RESUME_REQUEST_SUBJECT: &str = "Resume Request from Your Portfolio";
pub const RESUME_REQUEST_BODY: &str =
    "Hello, I would like to receive your resume. Please send it at your earliest convenience.";

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", url: "https://github.com/FullStackVet", glyph: "GH" },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/timothy-murphy-4667b7375",
        glyph: "in",
    },
    SocialLink { label: "TikTok", url: "https://tiktok.com/@pyreborn", glyph: "♪" },
];

/// Subset of social links shown in the navigation bar.
#[must_use]
pub fn nav_social_links() -> &'static [SocialLink] {
    &SOCIAL_LINKS[..2]
}
