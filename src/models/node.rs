//! Directory-listing entries for project file trees.
//!
//! A listing returned by the service is a sequence whose entries are file
//! nodes, folder nodes, or JSON `null` placeholders. The null case is kept
//! explicit as [`DirEntry::Empty`] instead of an `Option`, and its position
//! in the sequence is preserved through both decode and encode — the policy
//! behind a placeholder slot belongs to the service, not this layer.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A file inside a project archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Service-classified type description (e.g. "function", "json").
    pub file_type: String,
    /// Modification time, an opaque server-formatted string.
    pub datetime: String,
    /// Display name distinct from the raw `name`; may be empty.
    pub alias: String,
}

/// A folder inside a project archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub name: String,
    pub size: u64,
    pub datetime: String,
    pub alias: String,
}

/// Wire shape of a non-null listing entry, discriminated by the `type` field.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Node {
    File(FileNode),
    Folder(FolderNode),
}

/// Borrowing counterpart of [`Node`] for encoding.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum NodeRef<'a> {
    File(&'a FileNode),
    Folder(&'a FolderNode),
}

/// One slot in a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirEntry {
    File(FileNode),
    Folder(FolderNode),
    /// A `null` slot in the listing. Preserved verbatim.
    Empty,
}

impl DirEntry {
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Raw entry name; empty for placeholder slots.
    pub fn name(&self) -> &str {
        match self {
            Self::File(node) => &node.name,
            Self::Folder(node) => &node.name,
            Self::Empty => "",
        }
    }

    /// Display name: the alias when the service provides one, else `name`.
    pub fn display_name(&self) -> &str {
        let alias = match self {
            Self::File(node) => &node.alias,
            Self::Folder(node) => &node.alias,
            Self::Empty => return "",
        };
        if alias.is_empty() { self.name() } else { alias }
    }

    pub fn size(&self) -> Option<u64> {
        match self {
            Self::File(node) => Some(node.size),
            Self::Folder(node) => Some(node.size),
            Self::Empty => None,
        }
    }

    pub fn datetime(&self) -> &str {
        match self {
            Self::File(node) => &node.datetime,
            Self::Folder(node) => &node.datetime,
            Self::Empty => "",
        }
    }
}

impl<'de> Deserialize<'de> for DirEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Node>::deserialize(deserializer)? {
            Some(Node::File(node)) => Self::File(node),
            Some(Node::Folder(node)) => Self::Folder(node),
            None => Self::Empty,
        })
    }
}

impl Serialize for DirEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::File(node) => NodeRef::File(node).serialize(serializer),
            Self::Folder(node) => NodeRef::Folder(node).serialize(serializer),
            Self::Empty => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {"type":"folder","name":"function","size":0,"datetime":"2025-06-01 10:00:00","alias":"Functions"},
        null,
        {"type":"file","name":"pack.mcmeta","size":128,"file_type":"json","datetime":"2025-06-01 10:00:00","alias":""}
    ]"#;

    #[test]
    fn test_discriminates_files_and_folders() {
        let entries: Vec<DirEntry> = serde_json::from_str(LISTING).unwrap();
        assert!(entries[0].is_folder());
        assert!(matches!(entries[2], DirEntry::File(_)));
        assert_eq!(entries[0].display_name(), "Functions");
        assert_eq!(entries[2].display_name(), "pack.mcmeta");
    }

    #[test]
    fn test_null_entry_keeps_its_position() {
        let entries: Vec<DirEntry> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], DirEntry::Empty);

        // And survives encoding as null in the same slot.
        let json = serde_json::to_value(&entries).unwrap();
        assert!(json[1].is_null());
        assert_eq!(json[0]["type"], "folder");
        assert_eq!(json[2]["type"], "file");
    }

    #[test]
    fn test_listing_order_is_preserved() {
        let entries: Vec<DirEntry> = serde_json::from_str(LISTING).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["function", "", "pack.mcmeta"]);
    }

    #[test]
    fn test_unknown_discriminant_is_a_decode_error() {
        let json = r#"[{"type":"symlink","name":"x","size":0,"datetime":"","alias":""}]"#;
        assert!(serde_json::from_str::<Vec<DirEntry>>(json).is_err());
    }

    #[test]
    fn test_empty_alias_falls_back_to_name() {
        let node = FolderNode {
            name: "tags".to_string(),
            size: 0,
            datetime: String::new(),
            alias: String::new(),
        };
        assert_eq!(DirEntry::Folder(node).display_name(), "tags");
    }
}
