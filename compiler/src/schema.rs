//! Table layout of the normalized artifact-metadata schema.
//!
//! The node tree lives in `nodes`, with properties, download statistics and
//! indexed archive entries hanging off it; build records live in their own
//! `builds` subtree. Each table carries the short alias the generators use
//! to qualify its columns, so two joined tables can never produce an
//! ambiguous column reference.

/// A physical table of the metadata schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Files and folders: one row per node in the repository tree.
    Nodes,
    /// Key/value properties attached to nodes.
    NodeProps,
    /// Download statistics, one row per downloaded node.
    Stats,
    /// Archives whose entries have been indexed, keyed by content checksum.
    IndexedArchives,
    /// One row per entry inside an indexed archive.
    ArchiveEntries,
    /// Interned archive entry file names.
    ArchiveNames,
    /// Interned archive entry directory paths.
    ArchivePaths,
    /// Build records.
    Builds,
    /// Modules of a build.
    BuildModules,
    /// Artifacts produced by a build module.
    BuildArtifacts,
    /// Dependencies consumed by a build module.
    BuildDependencies,
    /// Key/value properties attached to builds.
    BuildProps,
}

impl Table {
    pub const fn name(&self) -> &'static str {
        match self {
            Table::Nodes => "nodes",
            Table::NodeProps => "node_props",
            Table::Stats => "stats",
            Table::IndexedArchives => "indexed_archives",
            Table::ArchiveEntries => "indexed_archives_entries",
            Table::ArchiveNames => "archive_names",
            Table::ArchivePaths => "archive_paths",
            Table::Builds => "builds",
            Table::BuildModules => "build_modules",
            Table::BuildArtifacts => "build_artifacts",
            Table::BuildDependencies => "build_dependencies",
            Table::BuildProps => "build_props",
        }
    }

    /// The alias used to qualify this table's columns in generated SQL.
    pub const fn alias(&self) -> &'static str {
        match self {
            Table::Nodes => "n",
            Table::NodeProps => "np",
            Table::Stats => "st",
            Table::IndexedArchives => "ia",
            Table::ArchiveEntries => "iae",
            Table::ArchiveNames => "an",
            Table::ArchivePaths => "ap",
            Table::Builds => "b",
            Table::BuildModules => "bm",
            Table::BuildArtifacts => "ba",
            Table::BuildDependencies => "bd",
            Table::BuildProps => "bp",
        }
    }

    /// Renders `name alias` for use in a FROM or JOIN clause.
    pub fn declaration(&self) -> String {
        format!("{} {}", self.name(), self.alias())
    }
}
