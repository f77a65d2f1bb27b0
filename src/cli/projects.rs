//! Project listing command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::content::PROJECTS;
use crate::i18n::Translator;
use crate::prefs::Language;
use clap::Args;
use serde::Serialize;

/// List showcased projects with their addresses
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Language of titles and descriptions (en or es)
    #[arg(long, value_name = "CODE", default_value = "en")]
    lang: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ProjectsOutput {
    language: &'static str,
    projects: Vec<ProjectEntry>,
}

#[derive(Serialize, Debug)]
struct ProjectEntry {
    index: usize,
    route: String,
    title: String,
    description: String,
    category: &'static str,
    tags: Vec<&'static str>,
}

impl ProjectsArgs {
    /// Execute projects command
    pub fn execute(&self) -> CliResult<()> {
        let language: Language = self
            .lang
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid language: {e}")))?;
        let translator = Translator::bundled();
        let labels = translator.labels(language);

        let projects = PROJECTS
            .iter()
            .enumerate()
            .map(|(index, project)| ProjectEntry {
                index,
                route: format!("/project/{index}"),
                title: labels.t("projects", &project.title_key()),
                description: labels.t("projects", &project.description_key()),
                category: project.category.label(),
                tags: project.tags.iter().map(|tag| tag.name).collect(),
            })
            .collect();

        let output = ProjectsOutput {
            language: language.code(),
            projects,
        };

        if self.json {
            return print_json(&output);
        }

        for entry in &output.projects {
            println!("{:>2}  {}  [{}]", entry.index, entry.title, entry.category);
            println!("    {}", entry.description);
            if !entry.tags.is_empty() {
                println!("    {}", entry.tags.join(", "));
            }
        }
        Ok(())
    }
}
