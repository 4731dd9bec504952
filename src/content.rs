//! Static page content. Everything the page renders lives here, defined once
//! at compile time and never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub meta: &'static str,
    /// Card colour theme, used as a class name.
    pub accent: &'static str,
    /// Decorative scene variant, used as a class name.
    pub model: &'static str,
    pub link: Option<&'static str>,
}

impl Project {
    /// Absolute links leave the site and open in a new browsing context.
    pub fn opens_new_tab(&self) -> bool {
        self.link.is_some_and(is_external)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub credit: &'static str,
}

pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

pub const PROFILE: Profile = Profile {
    name: "Abhishek Kumar Thakur",
    initials: "AKT",
    headline: "Software Engineer · Java · React.js",
    intro: "Software Engineer specializing in Java and React.js, crafting high-performance systems with cinematic frontends.",
    email: "at3519856@gmail.com",
    github: "https://github.com/abhishekth0203",
    linkedin: "https://www.linkedin.com/in/abhishek-kumar-thakur-5a4966244/",
    credit: "Crafted with Java + React",
};

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "CodeNeuton Platform",
        description: "Plane and developed the official CodeNeuton website using HTML, CSS, JavaScript, and React.js. Worked on responsive UI design, component-based architecture, and performance optimization. Contributed to improving user engagement and overall website usability.",
        meta: "3D workspace",
        accent: "cobalt",
        model: "workspace",
        link: Some("https://codeneuton.in/"),
    },
    Project {
        title: "Spotify Clone",
        description: "Create a Spotify-like music player using React.js with interactive UI, audio controls, and responsive design. Strengthened frontend development and state management skills.",
        meta: "Audio visualizer",
        accent: "neon",
        model: "visualizer",
        link: Some("https://spotifyab.netlify.app/"),
    },
    Project {
        title: "Weather App",
        description: "Built a real-time weather application using HTML, CSS, JavaScript, and React.js. Implemented API integration, responsive UI design, and performance optimization. Enhanced skills in React Hooks, API handling, and UI/UX design.",
        meta: "Weather globe",
        accent: "silver",
        model: "globe",
        link: Some("https://weatherapplication-a.netlify.app/"),
    },
    Project {
        title: "E-Commerce Solution",
        description: "Designed and built an e-commerce platform with product listings and cart functionality using HTML, CSS, and JavaScript. Focused on responsive layouts and user-centric design.",
        meta: "Cart icon",
        accent: "neon",
        model: "cart",
        link: Some("https://medcollection.netlify.app/"),
    },
];

pub const EXPERIENCES: [Experience; 2] = [
    Experience {
        role: "Software Engineer",
        company: "Magic Software",
        summary: "Built scalable services and delivered performant frontends to connect data-intensive systems with elegant UX.",
        detail: "Java, React.js, Microservices",
    },
    Experience {
        role: "Software Engineer",
        company: "Shop4deal",
        summary: "Engineered commerce workflows and automated testing pipelines to improve reliability.",
        detail: "React.js, Selenium, MongoDB",
    },
];

pub const TECH_STACK: [&str; 5] = ["Java", "Python", "React.js", "Selenium", "MongoDB"];

pub const CLI_LINES: [&str; 4] = [
    "$ initialize --profile abhishek",
    "$ link --backend Java --frontend React",
    "$ deploy --region global",
    "$ status: ready",
];

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Experience",
        href: "#experience",
    },
    NavLink {
        label: "Tech Stack",
        href: "#stack",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        value: "5+",
        caption: "Production systems",
    },
    Stat {
        value: "Java · React",
        caption: "Full-stack bridge",
    },
    Stat {
        value: "3D UX",
        caption: "Interactive UI systems",
    },
];
