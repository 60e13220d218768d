//! Fixed contact identifiers and outbound profile links.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

/// Links opened in a new browsing context without referrer or opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub owner: &'static str,
    pub contact_info: &'static [ContactInfo],
    pub social_links: &'static [SocialLink],
    pub pitch: &'static str,
    pub highlights: &'static [&'static str],
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "veenayaksirohi@gmail.com",
        href: "mailto:veenayaksirohi@gmail.com",
    },
    ContactInfo {
        label: "Phone",
        value: "+91 7302223304",
        href: "tel:+917302223304",
    },
    ContactInfo {
        label: "Location",
        value: "Greater Noida, U.P",
        href: "https://maps.google.com/?q=Greater+Noida+U.P",
    },
];

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/veenayaksirohi",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/veenayak_sirohi-ab30ab227/",
    },
    SocialLink {
        label: "Email",
        href: "mailto:veenayaksirohi@gmail.com",
    },
];

const HIGHLIGHTS: &[&str] = &[
    "Seeking internships and entry-level roles in Data Analytics or Software Development",
    "Experienced with Python, Pandas, Power BI, and SQL",
    "Open to freelance and remote opportunities",
    "Enthusiastic about teamwork and continuous learning",
];

pub const PROFILE: Profile = Profile {
    owner: "Veenayak Sirohi",
    contact_info: CONTACT_INFO,
    social_links: SOCIAL_LINKS,
    pitch: "As a Computer Science student with a passion for data analysis and development, \
I'm eager to connect with professionals and organizations seeking skills in Python, Power BI, \
and data-driven solutions. If you have a project, internship, or collaboration in mind, or simply \
want to discuss technology and analytics, I'd love to hear from you!",
    highlights: HIGHLIGHTS,
};
