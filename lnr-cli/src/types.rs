// ABOUTME: In-progress ticket state and the persisted last-used selections
// ABOUTME: Maps the completed form onto the issueCreate mutation input

use lnr_sdk::{IssueCreateInput, Label};
use serde::{Deserialize, Serialize};

/// Form state collected by the interactive session. Lives for one run and is
/// consumed by ticket creation.
///
/// `estimate` holds the scale's point code; `""` and `"0"` both mean
/// "no estimate". `assignee_id` and `status_id` use `""` for "unset".
#[derive(Debug, Clone, Default)]
pub struct Ticket {
    pub title: String,
    pub description: String,
    pub estimate: String,
    pub labels: Vec<String>,
    pub team_id: String,
    pub assignee_id: String,
    pub status_id: String,
}

impl Ticket {
    /// Build the mutation input, resolving label names to ids in selection
    /// order. `"0"` and empty estimates are omitted from the payload entirely,
    /// as are unset optional fields.
    pub fn to_issue_input(&self, labels: &[Label]) -> IssueCreateInput {
        let estimate = match self.estimate.as_str() {
            "" | "0" => None,
            code => code.parse::<i64>().ok(),
        };

        let label_ids: Vec<String> = self
            .labels
            .iter()
            .filter_map(|name| {
                labels
                    .iter()
                    .find(|label| &label.name == name)
                    .map(|label| label.id.clone())
            })
            .collect();

        IssueCreateInput {
            team_id: self.team_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            estimate,
            label_ids: (!label_ids.is_empty()).then_some(label_ids),
            assignee_id: (!self.assignee_id.is_empty()).then(|| self.assignee_id.clone()),
            state_id: (!self.status_id.is_empty()).then(|| self.status_id.clone()),
        }
    }
}

/// Last-used form answers, persisted after every successful submission and
/// used to pre-fill the next run's form.
///
/// Field names on disk stay camelCase so existing cache entries keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSelections {
    pub team_id: String,
    pub assignee_id: String,
    pub labels: Vec<String>,
    pub estimate: String,
    pub status_id: String,
}

impl From<&Ticket> for UserSelections {
    fn from(ticket: &Ticket) -> Self {
        Self {
            team_id: ticket.team_id.clone(),
            assignee_id: ticket.assignee_id.clone(),
            labels: ticket.labels.clone(),
            estimate: ticket.estimate.clone(),
            status_id: ticket.status_id.clone(),
        }
    }
}
