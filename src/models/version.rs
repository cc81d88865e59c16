//! Game version metadata.

use serde::{Deserialize, Serialize};

/// A game version together with its compatible format revisions.
///
/// Read-only from the client's perspective: the service derives these from
/// its pack-format table and the client only ever displays them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    /// Resource-pack format revision for this version.
    pub resource: i32,
    /// Data-pack format revision for this version.
    pub data: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_decode() {
        let json = r#"{"version":"1.21","resource":34,"data":48}"#;
        let info: VersionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.version, "1.21");
        assert_eq!(info.resource, 34);
        assert_eq!(info.data, 48);
    }
}
