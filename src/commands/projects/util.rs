use anyhow::{Error, Result};

use super::types::{NamespacesResponse, Project, ProjectsResponse, SingleNamespaceResponse, SingleProjectResponse};
use crate::state::http::{api_error, ApiError, HttpClient};

/// Outcome of the best effort check on the currently selected project.
#[derive(Debug)]
pub enum ProjectAccess {
    Accessible,
    Forbidden(Error),
    NotFound(Error),
    Other(Error),
}

/// Checks that `name` still exists and is reachable by the caller. Clusters
/// without the dedicated project api get a second chance through the
/// namespace endpoint. One attempt, no retries.
pub async fn confirm_project_access(http: &HttpClient, name: &str) -> ProjectAccess {
    let error = match http
        .request::<SingleProjectResponse>("GET", &format!("/projects/{name}"))
        .await
    {
        Ok(_) => return ProjectAccess::Accessible,
        Err(error) => error,
    };

    let (forbidden, not_found) = match api_error(&error) {
        Some(api) => (api.is_forbidden(), api.is_not_found()),
        None => (false, false),
    };

    if forbidden {
        return ProjectAccess::Forbidden(error);
    }

    if not_found {
        // may be a cluster without the project api, check the namespace
        if http
            .request::<SingleNamespaceResponse>("GET", &format!("/namespaces/{name}"))
            .await
            .is_ok()
        {
            return ProjectAccess::Accessible;
        }

        return ProjectAccess::NotFound(error);
    }

    ProjectAccess::Other(error)
}

/// Every project visible to the caller, sorted ascending by name.
/// Enumeration either succeeds as a whole or fails as a whole, partial
/// listings are never returned.
pub async fn get_projects(http: &HttpClient) -> Result<Vec<Project>> {
    let mut projects = match http.request::<ProjectsResponse>("GET", "/projects").await {
        Ok(response) => response.map(|r| r.projects).unwrap_or_default(),

        Err(error) => {
            // clusters without the project api still serve plain namespaces
            let not_found = api_error(&error).is_some_and(ApiError::is_not_found);

            if !not_found {
                return Err(error);
            }

            http.request::<NamespacesResponse>("GET", "/namespaces")
                .await?
                .map(|r| r.namespaces)
                .unwrap_or_default()
                .into_iter()
                .map(Project::from)
                .collect()
        }
    };

    projects.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(projects)
}

/// Quotable display form of a project: the bare name, or `name (display)`
/// when a distinct display name exists.
pub fn display_name_and_name(project: &Project) -> String {
    match project.display_name() {
        Some(display) => format!("{} ({display})", project.name),
        None => project.name.clone(),
    }
}

/// Renders the main listing block. `current` is the selected project, passed
/// only when its access was confirmed.
pub fn format_project_list(
    projects: &[Project],
    current: Option<&str>,
    short: bool,
    command_name: &str,
) -> String {
    let mut msg = String::new();

    match projects.len() {
        0 => {
            if !short {
                msg.push_str("You are not a member of any projects. You can request a project to be created with the 'new-project' command.");
            }
        }

        1 => {
            if short {
                msg.push_str(&projects[0].name);
            } else {
                msg.push_str(&format!(
                    "You have one project on this server: {:?}.",
                    display_name_and_name(&projects[0])
                ));
            }
        }

        _ => {
            if !short {
                msg.push_str(&format!(
                    "You have access to the following projects and can switch between them with '{command_name} project <projectname>':\n"
                ));
            }

            let mut projects = projects.to_vec();
            projects.sort_by(|a, b| a.name.cmp(&b.name));

            for (count, project) in projects.iter().enumerate() {
                let marker = match current {
                    Some(current) if !short => {
                        if current == project.name {
                            "  * "
                        } else {
                            "    "
                        }
                    }

                    _ => "",
                };

                match project.display_name() {
                    Some(display) if !short => {
                        msg.push_str(&format!("\n{marker}{} - {display}", project.name));
                    }

                    _ => {
                        let linebreak = if short && count == 0 { "" } else { "\n" };

                        msg.push_str(&format!("{linebreak}{marker}{}", project.name));
                    }
                }
            }
        }
    }

    msg
}
