//! Project records exchanged with the studio service.

use serde::{Deserialize, Serialize};

/// Kind of content a project produces.
///
/// Serialized as the variant name; the set is closed on the service side,
/// so an unknown value in a response is a decode error, not a fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    DataPack,
    ResourcePack,
    Mod,
    Plugin,
    Server,
}

impl ProjectType {
    /// All project types, in the order the create form offers them.
    pub const ALL: [ProjectType; 5] = [
        Self::DataPack,
        Self::ResourcePack,
        Self::Mod,
        Self::Plugin,
        Self::Server,
    ];

    /// Human-readable label for pickers and listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DataPack => "Data Pack",
            Self::ResourcePack => "Resource Pack",
            Self::Mod => "Mod",
            Self::Plugin => "Plugin",
            Self::Server => "Server",
        }
    }

    /// Wire value, as sent to and received from the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataPack => "DataPack",
            Self::ResourcePack => "ResourcePack",
            Self::Mod => "Mod",
            Self::Plugin => "Plugin",
            Self::Server => "Server",
        }
    }
}

/// A content project as known to the service.
///
/// `name` and `namespace` are unique per service instance; uniqueness is
/// enforced server-side. Instances are plain values: a fetched project is
/// never edited in place, only replaced by a newer fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Optional icon as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Game version the project targets (one of the service's version list).
    pub version: String,
    pub namespace: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            icon: None,
            name: "My Pack".to_string(),
            description: Some("demo project".to_string()),
            version: "1.21".to_string(),
            namespace: "my_pack".to_string(),
            project_type: ProjectType::DataPack,
        }
    }

    #[test]
    fn test_project_round_trip() {
        let project = sample();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn test_type_wire_value() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "DataPack");
        for ty in ProjectType::ALL {
            assert_eq!(serde_json::to_value(ty).unwrap(), ty.as_str());
        }
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let project = Project {
            icon: None,
            description: None,
            ..sample()
        };
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("icon").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_missing_options_deserialize() {
        let json = r#"{"name":"p","version":"1.21","namespace":"p","type":"Mod"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_type, ProjectType::Mod);
        assert_eq!(project.icon, None);
        assert_eq!(project.description, None);
    }

    #[test]
    fn test_unknown_type_is_a_decode_error() {
        let json = r#"{"name":"p","version":"1.21","namespace":"p","type":"Widget"}"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }

    #[test]
    fn test_project_list_keeps_service_order() {
        // The client must not reorder, filter, or deduplicate listings.
        let json = r#"[
            {"name":"zeta","version":"1.21","namespace":"z","type":"Mod"},
            {"name":"alpha","version":"1.20","namespace":"a","type":"DataPack"},
            {"name":"alpha","version":"1.20","namespace":"a","type":"DataPack"}
        ]"#;
        let list: Vec<Project> = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "alpha"]);
    }
}
