use crate::model::criteria::Criterion;
use crate::model::domain::QueryDomain;
use crate::model::element::{QueryElement, SortSpec};
use crate::model::field::QueryField;
use aqueduct_core::UNLIMITED;

/// A compiled query request: domain, ordered elements, requested result
/// fields and limit.
///
/// Built fluently, immutable once handed to [`crate::compile`]. The field
/// list is de-duplicated on insertion while preserving first-seen order. An
/// empty element list means "match everything"; a limit of `0` or
/// [`UNLIMITED`] disables pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct AqlQuery {
    domain: QueryDomain,
    elements: Vec<QueryElement>,
    fields: Vec<QueryField>,
    limit: u64,
}

impl AqlQuery {
    pub fn new(domain: QueryDomain) -> Self {
        Self {
            domain,
            elements: Vec::new(),
            fields: Vec::new(),
            limit: UNLIMITED,
        }
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.elements.push(QueryElement::Criterion(criterion));
        self
    }

    pub fn with_sort(mut self, spec: SortSpec) -> Self {
        self.elements.push(QueryElement::Sort(spec));
        self
    }

    pub fn with_field(mut self, field: QueryField) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    pub fn with_fields(self, fields: impl IntoIterator<Item = QueryField>) -> Self {
        fields.into_iter().fold(self, AqlQuery::with_field)
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn domain(&self) -> QueryDomain {
        self.domain
    }

    pub fn elements(&self) -> &[QueryElement] {
        &self.elements
    }

    /// The requested result fields, de-duplicated, in request order.
    pub fn result_fields(&self) -> &[QueryField] {
        &self.fields
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Whether any criterion exists anywhere in the element list.
    pub fn has_criteria(&self) -> bool {
        self.elements
            .iter()
            .any(|element| matches!(element, QueryElement::Criterion(_)))
    }

    /// The criterion elements, in list order.
    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.elements.iter().filter_map(|element| match element {
            QueryElement::Criterion(criterion) => Some(criterion),
            QueryElement::Sort(_) => None,
        })
    }

    /// The sort specifications, in list order.
    pub fn sorts(&self) -> impl Iterator<Item = &SortSpec> {
        self.elements.iter().filter_map(|element| match element {
            QueryElement::Sort(spec) => Some(spec),
            QueryElement::Criterion(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::criteria::ComparisonOp;

    #[test]
    fn fields_are_deduplicated_in_order() {
        let query = AqlQuery::new(QueryDomain::Artifacts)
            .with_field(QueryField::ItemName)
            .with_field(QueryField::ItemRepo)
            .with_field(QueryField::ItemName);

        assert_eq!(
            query.result_fields(),
            &[QueryField::ItemName, QueryField::ItemRepo]
        );
    }

    #[test]
    fn criteria_presence() {
        let empty = AqlQuery::new(QueryDomain::Artifacts).with_sort(SortSpec::asc(
            QueryField::ItemName,
        ));
        assert!(!empty.has_criteria());

        let filtered = empty.with_criterion(Criterion::leaf(
            QueryField::ItemRepo,
            ComparisonOp::Equals,
            "libs-release",
        ));
        assert!(filtered.has_criteria());
        assert_eq!(filtered.criteria().count(), 1);
        assert_eq!(filtered.sorts().count(), 1);
    }

    #[test]
    fn defaults_to_unlimited() {
        assert_eq!(AqlQuery::new(QueryDomain::Builds).limit(), UNLIMITED);
    }
}
