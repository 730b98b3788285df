use core::fmt;

/// The logical result shape an AQL query targets.
///
/// Each domain maps to exactly one SQL generator; the mapping is fixed at
/// compile time and never mutated, so concurrent lookups need no locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryDomain {
    /// Artifact nodes from local and remote repositories.
    Artifacts,
    /// Artifact nodes including virtual-repository rows. Shares the
    /// artifact generator; virtual expansion happens before compilation.
    AllArtifacts,
    /// Key/value properties attached to artifacts.
    Properties,
    /// Entries inside indexed archives.
    ArchiveEntries,
    /// Download statistics.
    Statistics,
    /// Artifacts produced by builds.
    BuildArtifacts,
    /// Dependencies consumed by builds.
    BuildDependencies,
    /// Build modules.
    BuildModules,
    /// Key/value properties attached to builds.
    BuildProperties,
    /// Build records.
    Builds,
    /// Release bundles. The AST producer knows this domain but it is served
    /// from the distribution store, not the relational schema; the SQL
    /// registry rejects it.
    ReleaseBundles,
    /// Files of a release bundle; rejected like [`QueryDomain::ReleaseBundles`].
    ReleaseBundleFiles,
}

impl QueryDomain {
    /// The AQL-facing domain name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            QueryDomain::Artifacts => "items",
            QueryDomain::AllArtifacts => "items.all",
            QueryDomain::Properties => "properties",
            QueryDomain::ArchiveEntries => "archive.entries",
            QueryDomain::Statistics => "statistics",
            QueryDomain::BuildArtifacts => "build.artifacts",
            QueryDomain::BuildDependencies => "build.dependencies",
            QueryDomain::BuildModules => "build.modules",
            QueryDomain::BuildProperties => "build.properties",
            QueryDomain::Builds => "builds",
            QueryDomain::ReleaseBundles => "release_bundles",
            QueryDomain::ReleaseBundleFiles => "release_bundle.files",
        }
    }
}

impl fmt::Display for QueryDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
