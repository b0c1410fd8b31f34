use serde::{Deserialize, Serialize};

/// Which figure offset a multi-geometry or collection shape records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerOffsets {
    /// Containers hold no points of their own and always record `-1`.
    #[default]
    Unanchored,

    /// A non-empty container records the index its first descendant figure will occupy, as SQL
    /// Server itself does. Empty containers still record `-1`.
    Anchored,
}

/// Options for encoding geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Spatial reference identifier written into the serialized header. Carried as-is.
    pub srid: i32,

    /// The deepest nesting of geometries that will be encoded. The root geometry is at depth 1.
    pub max_depth: usize,

    pub container_offsets: ContainerOffsets,

    /// Whether serialized values are flagged as valid.
    pub valid: bool,
}

impl EncodeOptions {
    pub fn with_srid(self, srid: i32) -> Self {
        Self { srid, ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_container_offsets(self, container_offsets: ContainerOffsets) -> Self {
        Self {
            container_offsets,
            ..self
        }
    }

    pub fn with_valid(self, valid: bool) -> Self {
        Self { valid, ..self }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            srid: 0,
            max_depth: 64,
            container_offsets: Default::default(),
            valid: true,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let options: EncodeOptions = serde_json::from_str(r#"{"srid": 4326}"#).unwrap();
        assert_eq!(options, EncodeOptions::default().with_srid(4326));
    }

    #[test]
    fn json_round_trip() {
        let options = EncodeOptions::default()
            .with_max_depth(8)
            .with_container_offsets(ContainerOffsets::Anchored)
            .with_valid(false);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            serde_json::from_str::<EncodeOptions>(&json).unwrap(),
            options
        );
    }
}
