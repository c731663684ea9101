use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Identifier of a file, unique within a browser instance.
pub type FileId = String;

/// Immutable file record supplied by the host application.
///
/// Capability flags are optional: an absent flag means the capability
/// takes its default, see the `is_*` predicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileData {
    pub id: FileId,
    pub name: String,
    pub ext: Option<String>,
    pub size: Option<u64>,
    #[serde(with = "rfc3339")]
    pub mod_date: Option<SystemTime>,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub is_symlink: bool,
    pub is_encrypted: bool,
    pub openable: Option<bool>,
    pub selectable: Option<bool>,
    pub draggable: Option<bool>,
    pub droppable: Option<bool>,
    pub renamable: Option<bool>,
    pub children_count: Option<u64>,
}

impl FileData {
    /// Create a regular file record.
    pub fn file(id: impl Into<FileId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a directory record.
    pub fn folder(id: impl Into<FileId>, name: impl Into<String>) -> Self {
        Self {
            is_dir: true,
            ..Self::file(id, name)
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_mod_date(mut self, mod_date: SystemTime) -> Self {
        self.mod_date = Some(mod_date);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn renamable(mut self) -> Self {
        self.renamable = Some(true);
        self
    }

    pub fn not_selectable(mut self) -> Self {
        self.selectable = Some(false);
        self
    }

    pub fn not_openable(mut self) -> Self {
        self.openable = Some(false);
        self
    }

    pub fn not_draggable(mut self) -> Self {
        self.draggable = Some(false);
        self
    }

    pub fn not_droppable(mut self) -> Self {
        self.droppable = Some(false);
        self
    }

    pub fn is_directory(&self) -> bool {
        self.is_dir
    }

    pub fn is_openable(&self) -> bool {
        self.openable != Some(false)
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable != Some(false)
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable != Some(false)
    }

    /// Only directories accept drops.
    pub fn is_droppable(&self) -> bool {
        self.is_dir && self.droppable != Some(false)
    }

    /// Whether hovering a drag over this entry may navigate into it.
    pub fn is_dnd_openable(&self) -> bool {
        self.is_dir && self.is_openable()
    }

    /// Renaming is opt-in: the host must mark the file as renamable.
    pub fn is_renamable(&self) -> bool {
        self.renamable == Some(true)
    }

    /// Extension used for display, falling back to the name suffix.
    pub fn extension(&self) -> Option<&str> {
        if self.is_dir {
            return None;
        }
        if let Some(ext) = self.ext.as_deref() {
            return Some(ext);
        }
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() { None } else { Some(ext) }
    }
}

/// `modDate` travels as an RFC 3339 timestamp, e.g. `2020-01-01T00:00:00Z`.
mod rfc3339 {
    use std::time::SystemTime;

    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Option<SystemTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_some(
                &DateTime::<Utc>::from(*time)
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<SystemTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        DateTime::parse_from_rfc3339(&raw)
            .map(|time| Some(SystemTime::from(time)))
            .map_err(|err| D::Error::custom(format!("modDate `{raw}`: {err}")))
    }
}
