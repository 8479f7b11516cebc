//! Renders the portfolio dataset into file contents and builds the
//! virtual filesystem tree around them.
//!
//! Generators are pure `data -> String` functions using `\n` line endings;
//! the session layer converts to `\r\n` when writing to the terminal.

use std::rc::Rc;

use crate::config;
use crate::core::filesystem::{FsNode, Vfs};
use crate::core::host::HostEffects;
use crate::models::{Education, Experience, PortfolioData, Project};

// ============================================================================
// File content generators
// ============================================================================

pub fn about(data: &PortfolioData) -> String {
    format!(
        "\n[🕵️] {}\n{}\n\n{}\n",
        data.bio.name, data.bio.title, data.bio.description
    )
}

pub fn skills(data: &PortfolioData) -> String {
    let lines: Vec<String> = data
        .bio
        .skills
        .iter()
        .map(|skill| format!("  • {skill}"))
        .collect();
    format!("\n[🛠] Skills:\n{}\n", lines.join("\n"))
}

pub fn contact(data: &PortfolioData) -> String {
    let c = &data.contact;
    format!(
        "\n[📞] Contact Information:\n  \
         • Email:    {}\n  \
         • GitHub:   {}\n  \
         • LinkedIn: {}\n  \
         • Twitter:  {}\n\n\
         # Run executables in /bin to open links directly:\n  \
         $ ./bin/email\n  \
         $ ./bin/github\n  \
         $ ./bin/linkedin\n  \
         $ ./bin/twitter\n",
        c.email, c.github, c.linkedin, c.twitter
    )
}

pub fn project(project: &Project) -> String {
    let techs: Vec<String> = project
        .technologies
        .iter()
        .map(|tech| format!("  • {tech}"))
        .collect();
    format!(
        "\n[🔬] Project: {}\nDescription: {}\n\nTechnologies:\n{}\n\nGitHub: {}\n",
        project.name,
        project.description,
        techs.join("\n"),
        project.github_link
    )
}

pub fn education(data: &PortfolioData) -> String {
    let entries: Vec<String> = data.education.iter().map(education_entry).collect();
    format!("\n[🎓] Education:\n{}\n", entries.join("\n\n"))
}

fn education_entry(ed: &Education) -> String {
    format!("  • {}\n    {}\n    {}", ed.degree, ed.institution, ed.period)
}

pub fn experience(data: &PortfolioData) -> String {
    let entries: Vec<String> = data.experiences.iter().map(experience_entry).collect();
    format!("\n[💼] Professional Experience:\n{}\n", entries.join("\n\n"))
}

fn experience_entry(exp: &Experience) -> String {
    let tasks: Vec<String> = exp
        .tasks
        .iter()
        .map(|task| format!("      - {task}"))
        .collect();
    format!(
        "  • {} at {}\n    {}\n    {}\n\n    Tasks:\n{}",
        exp.position,
        exp.company,
        exp.period,
        exp.location,
        tasks.join("\n")
    )
}

pub fn certifications(data: &PortfolioData) -> String {
    let lines: Vec<String> = data
        .certifications
        .iter()
        .enumerate()
        .map(|(i, cert)| format!("  {}. {}", i + 1, cert))
        .collect();
    format!("\n[🏆] Certifications:\n{}\n", lines.join("\n"))
}

pub fn readme(data: &PortfolioData) -> String {
    format!(
        "# Welcome to {}'s Terminal Portfolio\n\n\
         Navigate through my portfolio using Linux-like commands.\n\
         Type 'help' to see available commands.\n",
        data.bio.name
    )
}

// ============================================================================
// Filesystem layout
// ============================================================================

/// Build the full virtual filesystem for a dataset. Root entry order is the
/// order `ls /` displays.
pub fn portfolio_tree(data: &Rc<PortfolioData>, fx: &Rc<dyn HostEffects>) -> Vfs {
    let projects: Vec<(String, FsNode)> = data
        .projects
        .iter()
        .map(|p| {
            let p = p.clone();
            (p.name.clone(), FsNode::file(move || project(&p)))
        })
        .collect();

    let root = FsNode::dir(vec![
        ("about.txt".to_string(), data_file(data, about)),
        ("contact.txt".to_string(), data_file(data, contact)),
        ("skills.txt".to_string(), data_file(data, skills)),
        ("README.md".to_string(), data_file(data, readme)),
        ("projects".to_string(), FsNode::dir(projects)),
        (
            "education".to_string(),
            FsNode::dir(vec![("diplomas.txt".to_string(), data_file(data, education))]),
        ),
        (
            "experience".to_string(),
            FsNode::dir(vec![("resume.txt".to_string(), data_file(data, experience))]),
        ),
        (
            "certifications".to_string(),
            FsNode::dir(vec![(
                "certs.txt".to_string(),
                data_file(data, certifications),
            )]),
        ),
        ("bin".to_string(), bin_dir(data, fx)),
    ]);

    Vfs::new(root)
}

fn data_file(data: &Rc<PortfolioData>, render: fn(&PortfolioData) -> String) -> FsNode {
    let data = Rc::clone(data);
    FsNode::file(move || render(&data))
}

fn bin_dir(data: &Rc<PortfolioData>, fx: &Rc<dyn HostEffects>) -> FsNode {
    let open_link = |data: &Rc<PortfolioData>,
                     fx: &Rc<dyn HostEffects>,
                     url_of: fn(&PortfolioData) -> String,
                     message: &'static str| {
        let data = Rc::clone(data);
        let fx = Rc::clone(fx);
        FsNode::executable(move || {
            fx.open_url(&url_of(&data));
            Some(message.to_string())
        })
    };

    let email = {
        let data = Rc::clone(data);
        let fx = Rc::clone(fx);
        FsNode::executable(move || {
            fx.open_url(&format!("mailto:{}", data.contact.email));
            Some(format!("Opening email client with {}", data.contact.email))
        })
    };

    let matrix = {
        let fx = Rc::clone(fx);
        FsNode::executable(move || {
            fx.matrix_start();
            Some("Matrix rain effect activated. Run \"clear\" to stop.".to_string())
        })
    };

    let hack = FsNode::executable(|| Some(config::HACK_BANNER.to_string()));

    let clear = {
        let fx = Rc::clone(fx);
        FsNode::executable(move || {
            fx.matrix_stop();
            fx.clear_screen();
            None
        })
    };

    FsNode::dir(vec![
        ("email".to_string(), email),
        (
            "gui".to_string(),
            open_link(
                data,
                fx,
                |d| d.contact.ui_portfolio.clone(),
                "Opening UI portfolio in new tab...",
            ),
        ),
        (
            "github".to_string(),
            open_link(
                data,
                fx,
                |d| d.contact.github.clone(),
                "Opening GitHub profile in new tab...",
            ),
        ),
        (
            "linkedin".to_string(),
            open_link(
                data,
                fx,
                |d| d.contact.linkedin.clone(),
                "Opening LinkedIn profile in new tab...",
            ),
        ),
        (
            "twitter".to_string(),
            open_link(
                data,
                fx,
                |d| d.contact.twitter.clone(),
                "Opening Twitter profile in new tab...",
            ),
        ),
        ("matrix".to_string(), matrix),
        ("hack".to_string(), hack),
        ("clear".to_string(), clear),
    ])
}
