use std::collections::HashMap;

use serde::Deserialize;

/// Annotation carrying a project's human display name.
pub const DISPLAY_NAME_ANNOTATION: &str = "stratus.sh/display-name";
/// Pre-1.0 clusters annotated with a bare key, still honored second.
pub const LEGACY_DISPLAY_NAME_ANNOTATION: &str = "displayName";

#[derive(Debug, Deserialize, Clone)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Project {
    /// The distinct display name, when one is annotated. An empty value or
    /// one equal to the project name does not count as distinct.
    pub fn display_name(&self) -> Option<&str> {
        let display = self
            .annotations
            .get(DISPLAY_NAME_ANNOTATION)
            .filter(|value| !value.is_empty())
            .or_else(|| self.annotations.get(LEGACY_DISPLAY_NAME_ANNOTATION))?;

        if display.is_empty() || *display == self.name {
            return None;
        }

        Some(display.as_str())
    }
}

/// Plain namespace, served by clusters without the project api.
#[derive(Debug, Deserialize, Clone)]
pub struct Namespace {
    pub name: String,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl From<Namespace> for Project {
    fn from(namespace: Namespace) -> Self {
        Project {
            name: namespace.name,
            annotations: namespace.annotations,
        }
    }
}

// types for the API responses
#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct SingleProjectResponse {
    pub project: Project,
}

#[derive(Debug, Deserialize)]
pub struct NamespacesResponse {
    pub namespaces: Vec<Namespace>,
}

#[derive(Debug, Deserialize)]
pub struct SingleNamespaceResponse {
    pub namespace: Namespace,
}

#[cfg(test)]
mod test {
    use super::*;

    fn project_with(annotations: &[(&str, &str)]) -> Project {
        Project {
            name: "dev".to_string(),
            annotations: annotations
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_display_name_precedence() {
        let project = project_with(&[
            (DISPLAY_NAME_ANNOTATION, "Development"),
            (LEGACY_DISPLAY_NAME_ANNOTATION, "Old Name"),
        ]);

        assert_eq!(project.display_name(), Some("Development"));
    }

    #[test]
    fn test_display_name_legacy_fallback() {
        let project = project_with(&[(LEGACY_DISPLAY_NAME_ANNOTATION, "Old Name")]);

        assert_eq!(project.display_name(), Some("Old Name"));

        // an empty well known key falls through to the legacy one
        let project = project_with(&[
            (DISPLAY_NAME_ANNOTATION, ""),
            (LEGACY_DISPLAY_NAME_ANNOTATION, "Old Name"),
        ]);

        assert_eq!(project.display_name(), Some("Old Name"));
    }

    #[test]
    fn test_display_name_not_distinct() {
        assert_eq!(project_with(&[]).display_name(), None);
        assert_eq!(
            project_with(&[(DISPLAY_NAME_ANNOTATION, "dev")]).display_name(),
            None
        );
    }

    #[test]
    fn test_namespace_conversion() {
        let namespace = Namespace {
            name: "team-a".to_string(),
            annotations: HashMap::new(),
        };

        let project = Project::from(namespace);

        assert_eq!(project.name, "team-a");
        assert_eq!(project.display_name(), None);
    }
}
