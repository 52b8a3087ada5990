// ABOUTME: lnr SDK library providing a typed GraphQL client for the Linear API
// ABOUTME: Covers paginated reference-data reads and the issueCreate mutation

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use url::Url;

pub mod builder;
pub mod constants;
pub mod error;
pub mod graphql;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use builder::LnrClientConfig;
pub use error::LnrError;
pub use types::{CreatedIssue, IssueCreateInput, Label, Team, User, WorkflowState};

use constants::{pagination, urls};
use graphql::{
    GraphqlRequest, GraphqlResponse, IssueCreateData, IssueCreateVariables, PageVariables,
    TeamLabelsData, TeamMembersData, TeamPageVariables, TeamStatesData, TeamsData,
};

pub type Result<T, E = LnrError> = std::result::Result<T, E>;

/// Client for the Linear GraphQL API.
///
/// Holds no session state beyond the bearer credential baked into the default
/// headers at construction. Every operation is a single blocking-at-the-caller
/// request cycle with no retries.
pub struct LnrClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl LnrClient {
    pub(crate) fn from_config(config: LnrClientConfig) -> Result<Self> {
        let base = config.base_url.as_deref().unwrap_or(urls::LINEAR_API_BASE);
        let endpoint = Url::parse(base)
            .and_then(|url| url.join(urls::GRAPHQL_PATH))
            .map_err(|err| LnrError::Configuration(format!("Invalid API base URL: {err}")))?;

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(config.auth_token.expose_secret())
            .map_err(|_| LnrError::Configuration("API key contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, HeaderValue::from_static("lnr/0.1.0"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, endpoint })
    }

    /// List every team in the workspace, draining all pages.
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let mut teams = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let variables = PageVariables {
                first: pagination::PAGE_SIZE,
                after: after.clone(),
            };
            let data: TeamsData = self.post(graphql::TEAMS_QUERY, &variables).await?;
            teams.extend(data.teams.nodes);

            match data.teams.page_info.next_cursor() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => break,
            }
        }

        Ok(teams)
    }

    /// List every label configured for a team.
    pub async fn list_team_labels(&self, team_id: &str) -> Result<Vec<Label>> {
        let mut labels = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let variables = self.team_variables(team_id, after.clone());
            let data: TeamLabelsData = self.post(graphql::TEAM_LABELS_QUERY, &variables).await?;
            let page = data.team.labels;
            labels.extend(page.nodes);

            match page.page_info.next_cursor() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => break,
            }
        }

        Ok(labels)
    }

    /// List every member of the organization owning a team.
    pub async fn list_team_members(&self, team_id: &str) -> Result<Vec<User>> {
        let mut users = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let variables = self.team_variables(team_id, after.clone());
            let data: TeamMembersData = self.post(graphql::TEAM_MEMBERS_QUERY, &variables).await?;
            let page = data.team.organization.users;
            users.extend(page.nodes);

            match page.page_info.next_cursor() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => break,
            }
        }

        Ok(users)
    }

    /// List every workflow state of a team, in the server's order.
    pub async fn list_workflow_states(&self, team_id: &str) -> Result<Vec<WorkflowState>> {
        let mut states = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let variables = self.team_variables(team_id, after.clone());
            let data: TeamStatesData = self.post(graphql::TEAM_STATES_QUERY, &variables).await?;
            let page = data.team.states;
            states.extend(page.nodes);

            match page.page_info.next_cursor() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => break,
            }
        }

        Ok(states)
    }

    /// Create an issue and return the created record.
    ///
    /// A response with `success: false` or a missing issue node is an error;
    /// no partial identifier ever escapes.
    pub async fn create_issue(&self, input: IssueCreateInput) -> Result<CreatedIssue> {
        let variables = IssueCreateVariables { input };
        let data: IssueCreateData = self
            .post(graphql::ISSUE_CREATE_MUTATION, &variables)
            .await?;

        let payload = data.issue_create;
        if !payload.success {
            return Err(LnrError::Api {
                messages: vec!["issueCreate reported failure".to_string()],
            });
        }

        payload
            .issue
            .ok_or_else(|| LnrError::InvalidResponse("issueCreate returned no issue".to_string()))
    }

    fn team_variables(&self, team_id: &str, after: Option<String>) -> TeamPageVariables {
        TeamPageVariables {
            team_id: team_id.to_string(),
            first: pagination::PAGE_SIZE,
            after,
        }
    }

    async fn post<T, V>(&self, query: &'static str, variables: &V) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        V: serde::Serialize,
    {
        log::debug!("POST {} ({} bytes of query)", self.endpoint, query.len());

        let request = GraphqlRequest { query, variables };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(LnrError::Auth);
        }

        let body: GraphqlResponse<T> = response.json().await?;

        // A non-empty errors array wins over the HTTP status.
        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                return Err(LnrError::Api {
                    messages: errors.into_iter().map(|err| err.message).collect(),
                });
            }
        }

        if !status.is_success() {
            return Err(LnrError::Network(format!("unexpected HTTP status {status}")));
        }

        body.data
            .ok_or_else(|| LnrError::InvalidResponse("response carried no data".to_string()))
    }
}
