use super::{DomainGenerator, JoinStep};
use crate::model::QueryField;
use crate::schema::Table;

/// Generator for the `properties` domain: rows are key/value pairs, with
/// the owning node (and its statistics) reachable through joins.
pub(crate) struct PropertiesGenerator;

impl DomainGenerator for PropertiesGenerator {
    fn base_table(&self) -> Table {
        Table::NodeProps
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::Nodes,
                on: "n.node_id = np.node_id",
                requires: &[],
            },
            JoinStep {
                table: Table::Stats,
                on: "st.node_id = n.node_id",
                requires: &[Table::Nodes],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::PropertyKey, QueryField::PropertyValue]
    }
}
