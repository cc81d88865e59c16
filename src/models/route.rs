//! Hash-based routing for the editor views.
//!
//! URL format: `#/project/{name}`, `#/project/datapack/{name}/{path…}`.
//! The trailing segments of a data-pack route are captured as an ordered
//! sequence so directory listings can be deep-linked.

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Project list / landing view: `#/` or empty hash.
    Home,
    /// Single-project editor: `#/project/{name}`.
    ProjectEdit { name: String },
    /// Data-pack sub-resource editor: `#/project/datapack/{name}/{path…}`.
    /// `path` holds the remaining segments in order; empty means the
    /// archive root.
    DataPackEdit { name: String, path: Vec<String> },
    /// Diagnostic view: `#/test`.
    Test,
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown hashes resolve to Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');

        if path.is_empty() {
            return Self::Home;
        }
        if path == "test" {
            return Self::Test;
        }

        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            ["project", "datapack", name, rest @ ..] => Self::DataPackEdit {
                name: (*name).to_string(),
                path: rest.iter().map(|s| (*s).to_string()).collect(),
            },
            ["project", name] => Self::ProjectEdit {
                name: (*name).to_string(),
            },
            _ => Self::Home,
        }
    }

    /// Convert a route back to its URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::ProjectEdit { name } => format!("#/project/{}", name),
            Self::DataPackEdit { name, path } => {
                if path.is_empty() {
                    format!("#/project/datapack/{}", name)
                } else {
                    format!("#/project/datapack/{}/{}", name, path.join("/"))
                }
            }
            Self::Test => "#/test".to_string(),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the browser URL to match this route (adds a history entry).
    ///
    /// Setting the hash through `location` fires `hashchange`, so the
    /// router picks up in-app navigation the same way it picks up the
    /// back/forward buttons.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }

    /// Data-pack route one directory deeper than this one.
    ///
    /// Only meaningful on `DataPackEdit`; other routes return themselves.
    pub fn enter_dir(&self, segment: &str) -> Self {
        match self {
            Self::DataPackEdit { name, path } => {
                let mut path = path.clone();
                path.push(segment.to_string());
                Self::DataPackEdit {
                    name: name.clone(),
                    path,
                }
            }
            other => other.clone(),
        }
    }

    /// Data-pack route one directory up; at the archive root returns itself.
    pub fn parent_dir(&self) -> Self {
        match self {
            Self::DataPackEdit { name, path } if !path.is_empty() => Self::DataPackEdit {
                name: name.clone(),
                path: path[..path.len() - 1].to_vec(),
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_route() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
    }

    #[test]
    fn test_project_edit_route() {
        assert_eq!(
            AppRoute::from_hash("#/project/demo"),
            AppRoute::ProjectEdit {
                name: "demo".to_string(),
            }
        );
        // A project literally named "datapack" still parses as a project name.
        assert_eq!(
            AppRoute::from_hash("#/project/datapack"),
            AppRoute::ProjectEdit {
                name: "datapack".to_string(),
            }
        );
    }

    #[test]
    fn test_datapack_route_captures_path_segments_in_order() {
        assert_eq!(
            AppRoute::from_hash("#/project/datapack/demo/a/b/c"),
            AppRoute::DataPackEdit {
                name: "demo".to_string(),
                path: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/project/datapack/demo"),
            AppRoute::DataPackEdit {
                name: "demo".to_string(),
                path: vec![],
            }
        );
    }

    #[test]
    fn test_test_route() {
        assert_eq!(AppRoute::from_hash("#/test"), AppRoute::Test);
    }

    #[test]
    fn test_unknown_hash_falls_back_to_home() {
        assert_eq!(AppRoute::from_hash("#/nope/nope"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/project"), AppRoute::Home);
    }

    #[test]
    fn test_to_hash_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Test,
            AppRoute::ProjectEdit {
                name: "demo".to_string(),
            },
            AppRoute::DataPackEdit {
                name: "demo".to_string(),
                path: vec![],
            },
            AppRoute::DataPackEdit {
                name: "demo".to_string(),
                path: vec!["data".to_string(), "ns".to_string()],
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_enter_and_leave_directories() {
        let root = AppRoute::DataPackEdit {
            name: "demo".to_string(),
            path: vec![],
        };
        let deeper = root.enter_dir("data").enter_dir("ns");
        assert_eq!(
            deeper,
            AppRoute::DataPackEdit {
                name: "demo".to_string(),
                path: vec!["data".to_string(), "ns".to_string()],
            }
        );
        assert_eq!(deeper.parent_dir().parent_dir(), root);
        assert_eq!(root.parent_dir(), root);
    }
}
