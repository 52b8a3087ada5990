// ABOUTME: Interactive session driving the ticket form from resolved reference data
// ABOUTME: Linear flow: choose team, fill form, submit, persist selections, post-action

use anyhow::{Context, Result, bail};
use dialoguer::{Confirm, Editor, Input, MultiSelect, Select};
use lnr_sdk::{CreatedIssue, Label, LnrClient, Team, User, WorkflowState};
use owo_colors::OwoColorize;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::estimates::EstimateScale;
use crate::resolve::Resolver;
use crate::types::{Ticket, UserSelections};

/// Run the full interactive session: resolve reference data, collect the
/// ticket, create it, and offer a follow-up action.
pub async fn run(client: &LnrClient, cache: &CacheStore, config: &Config) -> Result<()> {
    let resolver = Resolver::new(client, cache);
    let selections = resolver.selections();

    let teams = resolver.teams().await?;
    if teams.is_empty() {
        bail!("no teams found in your workspace");
    }

    let team_id = choose_team(&teams, &selections)?;

    let labels = resolver.labels(&team_id).await?;
    let users = resolver.members(&team_id).await?;
    let states = resolver.states(&team_id).await?;

    let scale = config.scale();
    let ticket = fill_form(&team_id, &selections, scale, &labels, &users, &states)?;

    print_summary(&ticket, scale, &users, &states);

    println!();
    println!("{} Creating ticket in Linear...", "→".cyan());
    let issue = client
        .create_issue(ticket.to_issue_input(&labels))
        .await
        .context("creating ticket")?;
    println!(
        "{} Ticket created: {}",
        "✓".green(),
        issue.identifier.bold()
    );

    resolver.save_selections(&UserSelections::from(&ticket));

    post_action(&issue);
    Ok(())
}

/// The cached team is reused only while it still exists in the fresh team
/// list; a vanished team falls back to the picker.
pub fn verify_cached_team<'t>(cached_id: &str, teams: &'t [Team]) -> Option<&'t Team> {
    if cached_id.is_empty() {
        return None;
    }
    teams.iter().find(|team| team.id == cached_id)
}

fn choose_team(teams: &[Team], selections: &UserSelections) -> Result<String> {
    if let Some(team) = verify_cached_team(&selections.team_id, teams) {
        log::debug!("reusing cached team {}", team.name);
        return Ok(team.id.clone());
    }

    let names: Vec<&str> = teams.iter().map(|team| team.name.as_str()).collect();
    let index = Select::new()
        .with_prompt("Team")
        .items(&names)
        .default(0)
        .interact_opt()
        .context("team selection failed")?;

    match index {
        Some(index) => Ok(teams[index].id.clone()),
        None => bail!("team selection cancelled"),
    }
}

/// At most this many labels go on one ticket.
const MAX_LABELS: usize = 4;

/// Seed the form from the saved selections, dropping anything that no
/// longer applies to this team's reference data.
fn prefill_ticket(
    team_id: &str,
    selections: &UserSelections,
    labels: &[Label],
    states: &[WorkflowState],
) -> Ticket {
    let mut ticket = Ticket {
        team_id: team_id.to_string(),
        estimate: selections.estimate.clone(),
        labels: selections.labels.clone(),
        assignee_id: selections.assignee_id.clone(),
        status_id: selections.status_id.clone(),
        ..Default::default()
    };

    // A status cached for another team would otherwise ride along into the
    // mutation when this team has no states to prompt with.
    if states.is_empty() {
        ticket.status_id.clear();
    }
    if labels.is_empty() {
        ticket.labels.clear();
    }
    ticket.labels.truncate(MAX_LABELS);

    ticket
}

fn fill_form(
    team_id: &str,
    selections: &UserSelections,
    scale: EstimateScale,
    labels: &[Label],
    users: &[User],
    states: &[WorkflowState],
) -> Result<Ticket> {
    let mut ticket = prefill_ticket(team_id, selections, labels, states);

    let title: String = Input::new()
        .with_prompt("Title")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("title cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("reading title")?;
    ticket.title = title.trim().to_string();

    ticket.description = prompt_description()?;

    if !states.is_empty() {
        let names: Vec<&str> = states.iter().map(|state| state.name.as_str()).collect();
        let default = states
            .iter()
            .position(|state| state.id == ticket.status_id)
            .unwrap_or(0);
        let index = Select::new()
            .with_prompt("Status")
            .items(&names)
            .default(default)
            .interact_opt()
            .context("reading status")?;
        match index {
            Some(index) => ticket.status_id = states[index].id.clone(),
            None => bail!("form cancelled"),
        }
    }

    let options = scale.options();
    let option_labels: Vec<&str> = options.iter().map(|opt| opt.label).collect();
    let default = options
        .iter()
        .position(|opt| opt.code == ticket.estimate)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Estimate")
        .items(&option_labels)
        .default(default)
        .interact_opt()
        .context("reading estimate")?;
    match index {
        Some(index) => ticket.estimate = options[index].code.to_string(),
        None => bail!("form cancelled"),
    }

    if !labels.is_empty() {
        let names: Vec<&str> = labels.iter().map(|label| label.name.as_str()).collect();
        let checked: Vec<bool> = labels
            .iter()
            .map(|label| ticket.labels.contains(&label.name))
            .collect();
        let chosen = loop {
            let chosen = MultiSelect::new()
                .with_prompt("Labels (space to toggle, enter to confirm)")
                .items(&names)
                .defaults(&checked)
                .interact_opt()
                .context("reading labels")?;
            match chosen {
                Some(indices) if indices.len() > MAX_LABELS => {
                    println!("Select at most {MAX_LABELS} labels");
                }
                other => break other,
            }
        };
        match chosen {
            Some(indices) => {
                ticket.labels = indices
                    .into_iter()
                    .map(|index| labels[index].name.clone())
                    .collect();
            }
            None => bail!("form cancelled"),
        }
    }

    let mut assignee_items = vec!["No assignee".to_string()];
    assignee_items.extend(
        users
            .iter()
            .map(|user| format!("{} ({})", user.name, user.email)),
    );
    let default = users
        .iter()
        .position(|user| user.id == ticket.assignee_id)
        .map(|index| index + 1)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Assignee")
        .items(&assignee_items)
        .default(default)
        .interact_opt()
        .context("reading assignee")?;
    match index {
        Some(0) => ticket.assignee_id.clear(),
        Some(index) => ticket.assignee_id = users[index - 1].id.clone(),
        None => bail!("form cancelled"),
    }

    Ok(ticket)
}

fn prompt_description() -> Result<String> {
    let use_editor = Confirm::new()
        .with_prompt("Write a multi-line description?")
        .default(false)
        .interact()
        .context("reading description choice")?;

    if use_editor {
        let description = Editor::new()
            .edit("Enter your ticket description here...")
            .context("opening editor")?;
        Ok(description
            .map(|text| text.trim().to_string())
            .unwrap_or_default())
    } else {
        let description: String = Input::new()
            .with_prompt("Description (optional)")
            .allow_empty(true)
            .interact_text()
            .context("reading description")?;
        Ok(description.trim().to_string())
    }
}

fn print_summary(ticket: &Ticket, scale: EstimateScale, users: &[User], states: &[WorkflowState]) {
    let divider = "━".repeat(40);

    let estimate = match ticket.estimate.as_str() {
        "" | "0" => "No estimate".to_string(),
        code => scale.label_for(code).unwrap_or(code).to_string(),
    };
    let status = states
        .iter()
        .find(|state| state.id == ticket.status_id)
        .map(|state| state.name.as_str())
        .unwrap_or("Unknown");
    let assignee = users
        .iter()
        .find(|user| user.id == ticket.assignee_id)
        .map(|user| user.name.as_str())
        .unwrap_or("No assignee");
    let labels = if ticket.labels.is_empty() {
        "None".to_string()
    } else {
        ticket.labels.join(", ")
    };

    println!("\n{divider}");
    println!("{}", "Ticket Information".bold());
    println!("{divider}");
    println!("Title:       {}", ticket.title);
    println!("Description: {}", ticket.description);
    println!("Estimate:    {estimate}");
    println!("Status:      {status}");
    println!("Assignee:    {assignee}");
    println!("Labels:      {labels}");
    println!("{divider}");
}

/// Branch name derived from the issue identifier, matching Linear's own
/// branch naming.
pub fn branch_name(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// Prefer the URL the server reported; derive one only when it is absent.
pub fn issue_url(issue: &CreatedIssue) -> String {
    if issue.url.is_empty() {
        format!("https://linear.app/issue/{}", issue.identifier)
    } else {
        issue.url.clone()
    }
}

/// One-shot follow-up menu. Failures here are reported but never change the
/// exit status; the ticket already exists.
fn post_action(issue: &CreatedIssue) {
    let actions = ["Copy branch name", "Open in Linear", "Exit"];
    let choice = Select::new()
        .with_prompt("What would you like to do?")
        .items(&actions)
        .default(0)
        .interact_opt();

    match choice {
        Ok(Some(0)) => {
            let branch = branch_name(&issue.identifier);
            let copied = arboard::Clipboard::new()
                .and_then(|mut clipboard| clipboard.set_text(branch.clone()));
            match copied {
                Ok(()) => println!("{} Copied '{branch}' to clipboard", "✓".green()),
                Err(err) => eprintln!("{} Failed to copy to clipboard: {err}", "✗".red()),
            }
        }
        Ok(Some(1)) => {
            let url = issue_url(issue);
            if let Err(err) = open::that(&url) {
                eprintln!("{} Failed to open {url}: {err}", "✗".red());
            }
        }
        _ => {}
    }
}
