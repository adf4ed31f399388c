//! Fixed pages rendered by the informational commands.

use crate::catalog::{Project, PROJECTS};
use crate::output::{Output, Span, Style};

pub const EMAIL: &str = "contato.paulooliver9@gmail.com";

pub const BOOT_LINES: &[&str] = &[
    "Microsoft Windows [Version 10.0.19045.5854]",
    "(c) Microsoft Corporation. All rights reserved.",
    "",
    "Paulo Oliveira DevOS v1.0.0 - Personal Interactive Terminal",
    "Booting system...",
    "Loading developer modules...",
    "Initializing terminal interface...",
    "Loading projects...",
    "Configuring environment...",
    "✔️ Environment loaded successfully!",
    "User: paulooliveira",
    "System status: ✅ Online",
    "Type \"help\" to see the available commands.",
];

fn entry(cmd: &str, desc: &str) -> Vec<Span> {
    vec![Span::bold(cmd), Span::plain(format!(" → {}", desc))]
}

pub fn help() -> Output {
    Output::new()
        .styled(Style::Bold, "Check out what you can do:")
        .line(entry("help", "This right here. The list of tricks."))
        .line(entry("whoami", "Want to know who I am? Send this one."))
        .line(entry("ls [cv|documents|projects]", "Browse my files and projects."))
        .line(entry("open [project-name]", "Details about a specific project."))
        .line(entry("download [file]", "Download a file (e.g. my CV)."))
        .line(entry("cat [file]", "Print a file."))
        .line(entry("vim [file]", "Edit a file. Saved files live in this browser."))
        .line(entry("touch [file]", "Create an empty file."))
        .line(entry("rm [file]", "Remove a file you created."))
        .line(entry("session [info|clear]", "Inspect or wipe your saved files."))
        .line(entry("contact", "My socials, let's talk."))
        .line(entry("clear", "Clean up the screen."))
        .line(entry("color [theme]", "Change colors (default, green, blue, amber)."))
        .line(entry("matrix", "Follow the white rabbit."))
        .line(entry("glitch", "Shake things up a little."))
        .line(entry("sudo hire-me", "A special command for recruiters."))
        .gap()
        .styled(
            Style::Muted,
            "PS: I heard there is a command that... well, let's say it breaks reality. Use it wisely.",
        )
}

pub fn whoami() -> Output {
    Output::new()
        .styled(Style::Heading, "Hey there, I'm Paulo Oliveira!")
        .text("Full Stack Developer, hooked on energy drinks and building things for the web for over 3 years.")
        .text("My day-to-day stack:")
        .bullet("Frontend: React, Next.js, TypeScript (the respectable trio)")
        .bullet("Backend: Node.js (Express, NestJS) and Python to play with AI")
        .bullet("Databases: PostgreSQL and MySQL, no mystery.")
        .bullet("DevOps: Docker, AWS, CI/CD, Azure - to make the magic happen.")
        .text("Where did I study?")
        .text("Systems Analysis and Development at Anhanguera.")
        .line(vec![
            Span::plain("Send "),
            Span::bold("'ls projects'"),
            Span::plain(" to see my work or "),
            Span::bold("'contact'"),
            Span::plain(" to get in touch."),
        ])
}

pub fn contact() -> Output {
    Output::new()
        .styled(Style::Heading, "Let's talk?")
        .line(vec![
            Span::plain("E-mail: "),
            Span::link(EMAIL, format!("mailto:{}", EMAIL)),
        ])
        .line(vec![
            Span::plain("LinkedIn: "),
            Span::link("ppaulocunha", "https://www.linkedin.com/in/ppaulocunha/"),
        ])
        .line(vec![
            Span::plain("GitHub: "),
            Span::link("esc4n0rx", "https://github.com/esc4n0rx"),
        ])
        .line(vec![
            Span::plain("Twitter: "),
            Span::link("@paulooliveira_dev", "https://twitter.com/paulooliveira_dev"),
        ])
        .gap()
        .text("Always open to new projects and opportunities. Hit me up!")
}

pub fn hire_me() -> Output {
    Output::new()
        .styled(Style::Heading, "Nice, you found the command!")
        .text("Love to see it! If you got this far, the interest is real.")
        .line(vec![
            Span::plain("Send an e-mail to "),
            Span::link(EMAIL, format!("mailto:{}?subject=SUDO HIRE-ME", EMAIL)),
            Span::plain(" with the subject \"SUDO HIRE-ME\" and you skip the line!"),
        ])
        .gap()
        .styled(Style::Success, "Why have me on the team?")
        .bullet("I've pulled through some tough projects.")
        .bullet("I speak the team's language without `git blame`.")
        .bullet("I deliver on time and with clean code.")
        .bullet("Always learning something new.")
}

pub fn project_cards() -> Output {
    let mut out = Output::new().styled(Style::Bold, "Take a look at my work:");
    for p in PROJECTS {
        out = out.card(p.name, p.tagline);
    }
    out.line(vec![
        Span::plain("Like one? Type "),
        Span::bold("'open [project-name]'"),
        Span::plain(" (e.g. 'open routina')."),
    ])
}

pub fn project_detail(p: &Project) -> Output {
    let mut out = Output::new()
        .styled(Style::Heading, p.name)
        .text(p.description)
        .text("Built with:");
    for tech in p.stack {
        out = out.bullet(*tech);
    }
    for (label, url) in p.links {
        out = out.line(vec![Span::plain(format!("{}: ", label)), Span::link(*url, *url)]);
    }
    out
}

pub fn session_help() -> Output {
    Output::new()
        .styled(Style::Bold, "Session commands:")
        .line(entry("session info", "Show files saved in this browser."))
        .line(entry("session clear", "Delete every saved file."))
}

pub fn broken_screen() -> Output {
    Output::new()
        .styled(Style::Heading, "404")
        .styled(Style::Bold, "Not Found")
        .styled(Style::Muted, "The universe has been perfectly balanced...")
        .styled(Style::Muted, "Reload the page to restore reality.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_command() {
        let text = help().plain_text();
        // clearall is only hinted at
        for cmd in crate::shell::COMMAND_NAMES.iter().filter(|c| **c != "clearall") {
            assert!(text.contains(cmd), "help is missing {}", cmd);
        }
    }

    #[test]
    fn project_pages() {
        assert_eq!(
            project_cards()
                .blocks()
                .iter()
                .filter(|b| matches!(b, crate::output::Block::Card { .. }))
                .count(),
            4
        );
        let wally = crate::catalog::find_project("wally").unwrap();
        let text = project_detail(wally).plain_text();
        assert!(text.contains("wally-jade.vercel.app"));
        assert!(text.contains("Wallhaven"));
    }

    #[test]
    fn broken_screen_says_not_found() {
        assert!(broken_screen().plain_text().contains("Not Found"));
    }
}
