use super::{DomainGenerator, JoinStep};
use crate::model::QueryField;
use crate::schema::Table;

/// Generator for the `statistics` domain: download counters keyed by node.
pub(crate) struct StatisticsGenerator;

impl DomainGenerator for StatisticsGenerator {
    fn base_table(&self) -> Table {
        Table::Stats
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::Nodes,
                on: "n.node_id = st.node_id",
                requires: &[],
            },
            JoinStep {
                table: Table::NodeProps,
                on: "np.node_id = n.node_id",
                requires: &[Table::Nodes],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::StatDownloads, QueryField::StatDownloaded]
    }
}
