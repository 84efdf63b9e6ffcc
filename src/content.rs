//! Static page copy. Everything here is compiled into the bundle and never mutated.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Terminal,
    Shield,
    Cpu,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Terminal => ">_",
            Self::Shield => "◈",
            Self::Cpu => "▣",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub icon: SkillIcon,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const OWNER_NAME: &str = "Ethan Dsouza";
pub const HERO_LINES: [&str; 2] = ["ETHAN", "DSOUZA"];
pub const CONTACT_EMAIL: &str = "mailto:ethan@example.com";
pub const ACCENT_COLOR: &str = "#00A6D6";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        anchor: "about",
    },
    NavLink {
        label: "Coursework",
        anchor: "coursework",
    },
    NavLink {
        label: "Skills",
        anchor: "skills",
    },
    NavLink {
        label: "Contact",
        anchor: "contact",
    },
];

pub const COURSEWORK: [CourseEntry; 3] = [
    CourseEntry {
        id: "EMF",
        title: "Elements of Mathematics: Foundations",
        institution: "IMACS",
        year: "2022 - Present",
        description: "A hyper-rigorous program for mathematically talented students. The curriculum entirely bypasses standard rote calculation, focusing instead on the axiomatic construction of mathematics. Covered Operational Systems, Set Theory (ZFC foundations), Modular Arithmetic, and formal Abstract Algebra.",
        skills: &[
            "Formal Proofs",
            "Set Theory",
            "Modular Arithmetic",
            "Abstract Algebra",
            "Boolean Logic",
        ],
    },
    CourseEntry {
        id: "AoPS",
        title: "Art of Problem Solving",
        institution: "AoPS",
        year: "2021 - 2023",
        description: "Advanced problem-solving curriculum targeted at competition-level mathematics. Deep dive into Number Theory (primes, divisibility, congruences) and Counting & Probability (combinatorial identities, geometric probability). Developed the ability to approach non-standard problems with lateral thinking.",
        skills: &[
            "Number Theory",
            "Combinatorics",
            "Geometric Probability",
            "Competition Math",
        ],
    },
    CourseEntry {
        id: "UCS1",
        title: "University Computer Science I",
        institution: "IMACS",
        year: "2023",
        description: "Undergraduate-level functional programming course utilizing Scheme/Racket. Focused on mathematical models of computation, functional abstraction, recursion patterns, and algorithmic efficiency analysis. This course lays the theoretical groundwork for compiler design and AI.",
        skills: &[
            "Scheme/Racket",
            "Functional Programming",
            "Recursion",
            "Algorithm Analysis",
            "Data Structures",
        ],
    },
];

pub const PROJECTS: [ProjectEntry; 2] = [
    ProjectEntry {
        title: "Packet Sniffer",
        description: "A raw-socket based network analysis tool written in Python. Manually parses TCP/IP headers to identify potentially malicious traffic patterns.",
        tech: &["Python", "Raw Sockets", "TCP/IP", "Cybersec"],
        link: None,
    },
    ProjectEntry {
        title: "Logic Gate Visualizer",
        description: "Interactive simulation of digital logic circuits. Built from scratch using HTML5 Canvas to demonstrate rendering optimization and graph traversal.",
        tech: &["Canvas API", "JavaScript", "Graph Theory"],
        link: None,
    },
];

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        icon: SkillIcon::Terminal,
        title: "Development",
        skills: &["Python (Expert)", "HTML/CSS", "TypeScript", "React"],
    },
    SkillCategory {
        icon: SkillIcon::Shield,
        title: "Cybersecurity",
        skills: &[
            "Network Analysis",
            "Packet Sniffing",
            "Linux Hardening",
            "Cryptography",
        ],
    },
    SkillCategory {
        icon: SkillIcon::Cpu,
        title: "Mathematics",
        skills: &["Formal Logic", "Graph Theory", "Combinatorics", "Set Theory"],
    },
];

/// `whoami` output shown in the About terminal card.
pub const WHOAMI_LINES: [&str; 3] = [
    OWNER_NAME,
    "Student @ IMACS / AoPS",
    "Future TU Delft Engineer",
];

pub const TERMINAL_SKILLS: [&str; 4] = ["Python", "Logic", "Cybersec", "Scheme"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_anchors_are_unique_and_render_as_fragments() {
        let anchors: HashSet<_> = NAV_LINKS.iter().map(|link| link.anchor).collect();
        assert_eq!(anchors.len(), NAV_LINKS.len());
        assert_eq!(NAV_LINKS[1].href(), "#coursework");
    }

    #[test]
    fn course_ids_are_unique() {
        let ids: HashSet<_> = COURSEWORK.iter().map(|course| course.id).collect();
        assert_eq!(ids.len(), COURSEWORK.len());
        assert!(COURSEWORK.iter().all(|course| !course.skills.is_empty()));
    }
}
