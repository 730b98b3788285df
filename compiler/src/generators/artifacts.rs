use super::{DomainGenerator, JoinStep};
use crate::model::QueryField;
use crate::schema::Table;

/// Generator for the artifact domains (`items` and `items.all`).
///
/// The base is the node tree; properties, statistics and the indexed
/// archive chain are joined in only when a referenced field needs them.
/// The virtual-repository variant compiles identically — virtual repos are
/// expanded into concrete ones before the AST reaches the compiler.
pub(crate) struct ArtifactsGenerator;

impl DomainGenerator for ArtifactsGenerator {
    fn base_table(&self) -> Table {
        Table::Nodes
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::NodeProps,
                on: "np.node_id = n.node_id",
                requires: &[],
            },
            JoinStep {
                table: Table::Stats,
                on: "st.node_id = n.node_id",
                requires: &[],
            },
            JoinStep {
                table: Table::IndexedArchives,
                on: "ia.archive_sha1 = n.sha1_actual",
                requires: &[],
            },
            JoinStep {
                table: Table::ArchiveEntries,
                on: "iae.indexed_archives_id = ia.indexed_archives_id",
                requires: &[Table::IndexedArchives],
            },
            JoinStep {
                table: Table::ArchiveNames,
                on: "an.name_id = iae.entry_name_id",
                requires: &[Table::ArchiveEntries],
            },
            JoinStep {
                table: Table::ArchivePaths,
                on: "ap.path_id = iae.entry_path_id",
                requires: &[Table::ArchiveEntries],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::ItemRepo, QueryField::ItemPath, QueryField::ItemName]
    }
}
