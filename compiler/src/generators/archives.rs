use super::{DomainGenerator, JoinStep};
use crate::model::QueryField;
use crate::schema::Table;

/// Generator for the `archive.entries` domain.
///
/// Rows are entries of indexed archives; the default projection already
/// needs the interned name and path tables, and item fields reach the node
/// tree through the archive checksum.
pub(crate) struct ArchiveEntriesGenerator;

impl DomainGenerator for ArchiveEntriesGenerator {
    fn base_table(&self) -> Table {
        Table::ArchiveEntries
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::ArchiveNames,
                on: "an.name_id = iae.entry_name_id",
                requires: &[],
            },
            JoinStep {
                table: Table::ArchivePaths,
                on: "ap.path_id = iae.entry_path_id",
                requires: &[],
            },
            JoinStep {
                table: Table::IndexedArchives,
                on: "ia.indexed_archives_id = iae.indexed_archives_id",
                requires: &[],
            },
            JoinStep {
                table: Table::Nodes,
                on: "n.sha1_actual = ia.archive_sha1",
                requires: &[Table::IndexedArchives],
            },
            JoinStep {
                table: Table::NodeProps,
                on: "np.node_id = n.node_id",
                requires: &[Table::Nodes],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::ArchiveEntryPath, QueryField::ArchiveEntryName]
    }
}
