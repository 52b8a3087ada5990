// ABOUTME: Fixed GraphQL documents, request envelope, and response data shapes
// ABOUTME: One document per operation; variables always carry an explicit cursor

use serde::{Deserialize, Serialize};

use crate::types::{Connection, CreatedIssue, IssueCreateInput, Label, Team, User, WorkflowState};

/// The POST body accepted by the Linear GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: &'a V,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

/// Variables for workspace-scoped list queries.
#[derive(Debug, Clone, Serialize)]
pub struct PageVariables {
    pub first: i64,
    pub after: Option<String>,
}

/// Variables for team-scoped list queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPageVariables {
    pub team_id: String,
    pub first: i64,
    pub after: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IssueCreateVariables {
    pub input: IssueCreateInput,
}

pub const TEAMS_QUERY: &str = "\
query Teams($first: Int!, $after: String) {
  teams(first: $first, after: $after) {
    nodes { id name }
    pageInfo { hasNextPage endCursor }
  }
}";

pub const TEAM_LABELS_QUERY: &str = "\
query TeamLabels($teamId: String!, $first: Int!, $after: String) {
  team(id: $teamId) {
    labels(first: $first, after: $after) {
      nodes { id name }
      pageInfo { hasNextPage endCursor }
    }
  }
}";

pub const TEAM_MEMBERS_QUERY: &str = "\
query TeamMembers($teamId: String!, $first: Int!, $after: String) {
  team(id: $teamId) {
    organization {
      users(first: $first, after: $after) {
        nodes { id name email }
        pageInfo { hasNextPage endCursor }
      }
    }
  }
}";

pub const TEAM_STATES_QUERY: &str = "\
query TeamWorkflowStates($teamId: String!, $first: Int!, $after: String) {
  team(id: $teamId) {
    states(first: $first, after: $after) {
      nodes { id name type }
      pageInfo { hasNextPage endCursor }
    }
  }
}";

pub const ISSUE_CREATE_MUTATION: &str = "\
mutation IssueCreate($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue { id identifier title url }
  }
}";

// Response data shapes, one per document.

#[derive(Debug, Deserialize)]
pub struct TeamsData {
    pub teams: Connection<Team>,
}

#[derive(Debug, Deserialize)]
pub struct TeamLabelsData {
    pub team: TeamLabelsNode,
}

#[derive(Debug, Deserialize)]
pub struct TeamLabelsNode {
    pub labels: Connection<Label>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMembersData {
    pub team: TeamMembersNode,
}

#[derive(Debug, Deserialize)]
pub struct TeamMembersNode {
    pub organization: OrganizationUsers,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationUsers {
    pub users: Connection<User>,
}

#[derive(Debug, Deserialize)]
pub struct TeamStatesData {
    pub team: TeamStatesNode,
}

#[derive(Debug, Deserialize)]
pub struct TeamStatesNode {
    pub states: Connection<WorkflowState>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateData {
    pub issue_create: IssueCreatePayload,
}

#[derive(Debug, Deserialize)]
pub struct IssueCreatePayload {
    pub success: bool,
    pub issue: Option<CreatedIssue>,
}
