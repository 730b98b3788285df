//! Per-domain SQL generators and their registry.
//!
//! A generator owns the schema knowledge of its domain: the base table, the
//! join chain reaching related tables, and the default projection. The four
//! generation operations are pure functions of the query AST; the assembly
//! stage only stitches their text output together.

mod archives;
mod artifacts;
mod builds;
mod properties;
mod statistics;

use crate::error::{CompileError, Result};
use crate::model::{AqlQuery, QueryDomain, QueryElement, QueryField};
use crate::schema::Table;
use aqueduct_core::SqlFragment;
use smallvec::SmallVec;

use archives::ArchiveEntriesGenerator;
use artifacts::ArtifactsGenerator;
use builds::{
    BuildArtifactsGenerator, BuildDependenciesGenerator, BuildModulesGenerator,
    BuildPropertiesGenerator, BuildsGenerator,
};
use properties::PropertiesGenerator;
use statistics::StatisticsGenerator;

/// One optional inner join in a generator's fixed join chain.
///
/// Steps are declared base-outward; `requires` names the tables that must
/// already be joined for `on` to resolve.
pub(crate) struct JoinStep {
    pub table: Table,
    pub on: &'static str,
    pub requires: &'static [Table],
}

/// SQL generation contract, implemented once per domain.
///
/// `projection`, `tables`, `predicate` and `sort` are side-effect-free; each
/// call renders from the AST alone. The shared implementations below cover
/// the criterion walk and sort rendering, which are identical across
/// domains once fields resolve to qualified columns.
pub(crate) trait DomainGenerator: Sync {
    /// The table the domain's rows come from.
    fn base_table(&self) -> Table;

    /// The join chain from the base table, declared base-outward.
    fn join_steps(&self) -> &'static [JoinStep];

    /// Projection used when the caller requested no fields.
    fn default_fields(&self) -> &'static [QueryField];

    /// The fields to project: the caller's list, or the domain default.
    fn projected_fields<'q>(&self, query: &'q AqlQuery) -> &'q [QueryField] {
        if query.result_fields().is_empty() {
            self.default_fields()
        } else {
            query.result_fields()
        }
    }

    /// The first referenced field whose table neither is the base nor
    /// appears in the join chain, if any. The chain is fixed per domain, so
    /// such a field can never be joined; the driver rejects the query
    /// before any SQL is generated.
    fn unreachable_field(&self, query: &AqlQuery) -> Option<QueryField> {
        let base = self.base_table();
        let steps = self.join_steps();
        let reachable = |field: QueryField| {
            let table = field.table();
            table == base || steps.iter().any(|step| step.table == table)
        };

        if let Some(field) = self
            .projected_fields(query)
            .iter()
            .find(|field| !reachable(**field))
        {
            return Some(*field);
        }
        for element in query.elements() {
            match element {
                QueryElement::Criterion(criterion) => {
                    let mut found = None;
                    criterion.for_each_field(&mut |field| {
                        if found.is_none() && !reachable(field) {
                            found = Some(field);
                        }
                    });
                    if found.is_some() {
                        return found;
                    }
                }
                QueryElement::Sort(spec) => {
                    if !reachable(spec.field) {
                        return Some(spec.field);
                    }
                }
            }
        }
        None
    }

    /// SELECT-clause column list, each column labeled with its AQL field
    /// name.
    fn projection(&self, query: &AqlQuery) -> String {
        let fields = self.projected_fields(query);
        let mut out = String::with_capacity(fields.len() * 24);
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&field.qualified());
            out.push_str(" as \"");
            out.push_str(field.label());
            out.push('"');
        }
        out
    }

    /// FROM/JOIN clause covering every table referenced by the projection,
    /// the criteria or the sorts, in the chain's declared order.
    fn tables(&self, query: &AqlQuery) -> String {
        let base = self.base_table();
        let steps = self.join_steps();

        let mut needed: SmallVec<[Table; 4]> = SmallVec::new();
        {
            let mut note = |field: QueryField| {
                let table = field.table();
                if table != base && !needed.contains(&table) {
                    needed.push(table);
                }
            };
            for field in self.projected_fields(query) {
                note(*field);
            }
            for element in query.elements() {
                match element {
                    QueryElement::Criterion(criterion) => criterion.for_each_field(&mut note),
                    QueryElement::Sort(spec) => note(spec.field),
                }
            }
        }

        // Close over join prerequisites. Steps are ordered base-outward, so
        // one reverse pass reaches the whole chain.
        for i in (0..steps.len()).rev() {
            if needed.contains(&steps[i].table) {
                for requirement in steps[i].requires {
                    if *requirement != base && !needed.contains(requirement) {
                        needed.push(*requirement);
                    }
                }
            }
        }

        let mut out = base.declaration();
        for step in steps {
            if needed.contains(&step.table) {
                out.push_str(" inner join ");
                out.push_str(&step.table.declaration());
                out.push_str(" on ");
                out.push_str(step.on);
            }
        }
        out
    }

    /// WHERE-clause body plus bound values in leaf visitation order.
    /// Multiple top-level criterion elements combine with `and`.
    fn predicate(&self, query: &AqlQuery) -> SqlFragment {
        let mut out = SqlFragment::new();
        for criterion in query.criteria() {
            if !out.is_empty() {
                out.push_raw(" and ");
            }
            criterion.render(&mut out);
        }
        out
    }

    /// ORDER BY clause in specification order; empty when no sort was
    /// requested (the compiler asserts no default ordering).
    fn sort(&self, query: &AqlQuery) -> String {
        let mut out = String::new();
        for spec in query.sorts() {
            if out.is_empty() {
                out.push_str("order by ");
            } else {
                out.push_str(", ");
            }
            out.push_str(&spec.field.qualified());
            out.push(' ');
            out.push_str(spec.direction.as_str());
        }
        out
    }
}

static ARTIFACTS: ArtifactsGenerator = ArtifactsGenerator;
static PROPERTIES: PropertiesGenerator = PropertiesGenerator;
static ARCHIVE_ENTRIES: ArchiveEntriesGenerator = ArchiveEntriesGenerator;
static STATISTICS: StatisticsGenerator = StatisticsGenerator;
static BUILDS: BuildsGenerator = BuildsGenerator;
static BUILD_ARTIFACTS: BuildArtifactsGenerator = BuildArtifactsGenerator;
static BUILD_DEPENDENCIES: BuildDependenciesGenerator = BuildDependenciesGenerator;
static BUILD_MODULES: BuildModulesGenerator = BuildModulesGenerator;
static BUILD_PROPERTIES: BuildPropertiesGenerator = BuildPropertiesGenerator;

/// Looks up the generator responsible for a domain.
///
/// The mapping is an exhaustive match: adding a domain without deciding its
/// generator fails to compile. Both artifact domains share one generator.
/// The release-bundle domains are served from the distribution store rather
/// than this schema and therefore have no entry.
pub(crate) fn generator_for(domain: QueryDomain) -> Result<&'static dyn DomainGenerator> {
    match domain {
        QueryDomain::Artifacts | QueryDomain::AllArtifacts => Ok(&ARTIFACTS),
        QueryDomain::Properties => Ok(&PROPERTIES),
        QueryDomain::ArchiveEntries => Ok(&ARCHIVE_ENTRIES),
        QueryDomain::Statistics => Ok(&STATISTICS),
        QueryDomain::BuildArtifacts => Ok(&BUILD_ARTIFACTS),
        QueryDomain::BuildDependencies => Ok(&BUILD_DEPENDENCIES),
        QueryDomain::BuildModules => Ok(&BUILD_MODULES),
        QueryDomain::BuildProperties => Ok(&BUILD_PROPERTIES),
        QueryDomain::Builds => Ok(&BUILDS),
        QueryDomain::ReleaseBundles | QueryDomain::ReleaseBundleFiles => {
            Err(CompileError::DomainNotSupported(domain))
        }
    }
}
