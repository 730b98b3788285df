use crate::schema::Table;
use core::fmt;

/// A queryable field of the metadata schema.
///
/// Each field knows the table it lives in, its physical column, and the
/// AQL-facing label used to alias it in the projection. Fields referenced in
/// a projection, criterion or sort force the owning table into the join
/// graph of the active domain's generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    ItemRepo,
    ItemPath,
    ItemName,
    ItemType,
    ItemSize,
    ItemCreated,
    ItemCreatedBy,
    ItemModified,
    ItemModifiedBy,
    ItemUpdated,
    ItemDepth,
    ItemActualSha1,
    ItemOriginalSha1,
    ItemActualMd5,
    ItemOriginalMd5,
    PropertyKey,
    PropertyValue,
    ArchiveEntryName,
    ArchiveEntryPath,
    StatDownloads,
    StatDownloaded,
    StatDownloadedBy,
    BuildName,
    BuildNumber,
    BuildCreated,
    BuildCreatedBy,
    BuildUrl,
    BuildModuleName,
    BuildArtifactName,
    BuildArtifactType,
    BuildDependencyName,
    BuildDependencyScope,
    BuildDependencyType,
    BuildPropertyKey,
    BuildPropertyValue,
}

impl QueryField {
    /// The table this field's column lives in.
    pub const fn table(&self) -> Table {
        match self {
            QueryField::ItemRepo
            | QueryField::ItemPath
            | QueryField::ItemName
            | QueryField::ItemType
            | QueryField::ItemSize
            | QueryField::ItemCreated
            | QueryField::ItemCreatedBy
            | QueryField::ItemModified
            | QueryField::ItemModifiedBy
            | QueryField::ItemUpdated
            | QueryField::ItemDepth
            | QueryField::ItemActualSha1
            | QueryField::ItemOriginalSha1
            | QueryField::ItemActualMd5
            | QueryField::ItemOriginalMd5 => Table::Nodes,
            QueryField::PropertyKey | QueryField::PropertyValue => Table::NodeProps,
            QueryField::ArchiveEntryName => Table::ArchiveNames,
            QueryField::ArchiveEntryPath => Table::ArchivePaths,
            QueryField::StatDownloads
            | QueryField::StatDownloaded
            | QueryField::StatDownloadedBy => Table::Stats,
            QueryField::BuildName
            | QueryField::BuildNumber
            | QueryField::BuildCreated
            | QueryField::BuildCreatedBy
            | QueryField::BuildUrl => Table::Builds,
            QueryField::BuildModuleName => Table::BuildModules,
            QueryField::BuildArtifactName | QueryField::BuildArtifactType => {
                Table::BuildArtifacts
            }
            QueryField::BuildDependencyName
            | QueryField::BuildDependencyScope
            | QueryField::BuildDependencyType => Table::BuildDependencies,
            QueryField::BuildPropertyKey | QueryField::BuildPropertyValue => Table::BuildProps,
        }
    }

    /// The bare column name.
    pub const fn column(&self) -> &'static str {
        match self {
            QueryField::ItemRepo => "repo",
            QueryField::ItemPath => "node_path",
            QueryField::ItemName => "node_name",
            QueryField::ItemType => "node_type",
            QueryField::ItemSize => "bin_length",
            QueryField::ItemCreated => "created",
            QueryField::ItemCreatedBy => "created_by",
            QueryField::ItemModified => "modified",
            QueryField::ItemModifiedBy => "modified_by",
            QueryField::ItemUpdated => "updated",
            QueryField::ItemDepth => "depth",
            QueryField::ItemActualSha1 => "sha1_actual",
            QueryField::ItemOriginalSha1 => "sha1_original",
            QueryField::ItemActualMd5 => "md5_actual",
            QueryField::ItemOriginalMd5 => "md5_original",
            QueryField::PropertyKey => "prop_key",
            QueryField::PropertyValue => "prop_value",
            QueryField::ArchiveEntryName => "entry_name",
            QueryField::ArchiveEntryPath => "entry_path",
            QueryField::StatDownloads => "download_count",
            QueryField::StatDownloaded => "last_downloaded",
            QueryField::StatDownloadedBy => "last_downloaded_by",
            QueryField::BuildName => "build_name",
            QueryField::BuildNumber => "build_number",
            QueryField::BuildCreated => "created",
            QueryField::BuildCreatedBy => "created_by",
            QueryField::BuildUrl => "ci_url",
            QueryField::BuildModuleName => "module_name",
            QueryField::BuildArtifactName => "artifact_name",
            QueryField::BuildArtifactType => "artifact_type",
            QueryField::BuildDependencyName => "dependency_name",
            QueryField::BuildDependencyScope => "dependency_scopes",
            QueryField::BuildDependencyType => "dependency_type",
            QueryField::BuildPropertyKey => "prop_key",
            QueryField::BuildPropertyValue => "prop_value",
        }
    }

    /// The alias-qualified column reference, e.g. `n.node_name`.
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.table().alias(), self.column())
    }

    /// The AQL-facing field name, used to label projected columns so the
    /// caller can map result-set columns back to fields.
    pub const fn label(&self) -> &'static str {
        match self {
            QueryField::ItemRepo => "repo",
            QueryField::ItemPath => "path",
            QueryField::ItemName => "name",
            QueryField::ItemType => "type",
            QueryField::ItemSize => "size",
            QueryField::ItemCreated => "created",
            QueryField::ItemCreatedBy => "created_by",
            QueryField::ItemModified => "modified",
            QueryField::ItemModifiedBy => "modified_by",
            QueryField::ItemUpdated => "updated",
            QueryField::ItemDepth => "depth",
            QueryField::ItemActualSha1 => "actual_sha1",
            QueryField::ItemOriginalSha1 => "original_sha1",
            QueryField::ItemActualMd5 => "actual_md5",
            QueryField::ItemOriginalMd5 => "original_md5",
            QueryField::PropertyKey => "property.key",
            QueryField::PropertyValue => "property.value",
            QueryField::ArchiveEntryName => "archive.entry.name",
            QueryField::ArchiveEntryPath => "archive.entry.path",
            QueryField::StatDownloads => "stat.downloads",
            QueryField::StatDownloaded => "stat.downloaded",
            QueryField::StatDownloadedBy => "stat.downloaded_by",
            QueryField::BuildName => "build.name",
            QueryField::BuildNumber => "build.number",
            QueryField::BuildCreated => "build.created",
            QueryField::BuildCreatedBy => "build.created_by",
            QueryField::BuildUrl => "build.url",
            QueryField::BuildModuleName => "build.module.name",
            QueryField::BuildArtifactName => "build.artifact.name",
            QueryField::BuildArtifactType => "build.artifact.type",
            QueryField::BuildDependencyName => "build.dependency.name",
            QueryField::BuildDependencyScope => "build.dependency.scope",
            QueryField::BuildDependencyType => "build.dependency.type",
            QueryField::BuildPropertyKey => "build.property.key",
            QueryField::BuildPropertyValue => "build.property.value",
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
