//! End-to-end compilation behavior across every supported domain.

use aqueduct::prelude::*;

/// Every domain the SQL registry supports.
const SUPPORTED: [QueryDomain; 10] = [
    QueryDomain::Artifacts,
    QueryDomain::AllArtifacts,
    QueryDomain::Properties,
    QueryDomain::ArchiveEntries,
    QueryDomain::Statistics,
    QueryDomain::BuildArtifacts,
    QueryDomain::BuildDependencies,
    QueryDomain::BuildModules,
    QueryDomain::BuildProperties,
    QueryDomain::Builds,
];

fn repo_criterion() -> Criterion {
    Criterion::leaf(QueryField::ItemRepo, ComparisonOp::Equals, "libs-release")
}

#[test]
fn empty_element_list_compiles_without_where() {
    for domain in SUPPORTED {
        let compiled = compile(&AqlQuery::new(domain), DbType::PostgreSql).unwrap();
        assert!(
            !compiled.sql().contains("where"),
            "{domain}: unexpected where in {}",
            compiled.sql()
        );
        assert!(compiled.params().is_empty(), "{domain}: unexpected params");
        assert!(compiled.sql().starts_with("select distinct "));
    }
}

#[test]
fn criterion_emits_one_where_and_aligned_params() {
    for domain in SUPPORTED {
        // Build fields for build domains, item fields elsewhere; both
        // shapes exercise a two-leaf combinator.
        let criterion = match domain {
            QueryDomain::BuildArtifacts
            | QueryDomain::BuildDependencies
            | QueryDomain::BuildModules
            | QueryDomain::BuildProperties
            | QueryDomain::Builds => Criterion::and(vec![
                Criterion::leaf(QueryField::BuildName, ComparisonOp::Equals, "frontend"),
                Criterion::leaf(QueryField::BuildNumber, ComparisonOp::Greater, 17i64),
            ]),
            _ => Criterion::and(vec![
                repo_criterion(),
                Criterion::leaf(QueryField::ItemName, ComparisonOp::Like, "%.jar"),
            ]),
        };

        let compiled =
            compile(&AqlQuery::new(domain).with_criterion(criterion), DbType::MySql).unwrap();

        assert_eq!(
            compiled.sql().matches(" where ").count(),
            1,
            "{domain}: {}",
            compiled.sql()
        );
        assert_eq!(
            compiled.sql().matches('?').count(),
            compiled.params().len(),
            "{domain}: placeholder/param mismatch in {}",
            compiled.sql()
        );
        assert_eq!(compiled.params().len(), 2);
    }
}

#[test]
fn compilation_is_deterministic() {
    let build = || {
        AqlQuery::new(QueryDomain::Artifacts)
            .with_criterion(repo_criterion())
            .with_field(QueryField::ItemName)
            .with_field(QueryField::ItemSize)
            .with_sort(SortSpec::desc(QueryField::ItemModified))
            .with_limit(50)
    };

    let first = compile(&build(), DbType::Oracle).unwrap();
    let second = compile(&build(), DbType::Oracle).unwrap();
    assert_eq!(first.sql(), second.sql());
    assert_eq!(first.params(), second.params());
}

#[test]
fn requested_fields_round_trip_and_drive_projection() {
    let query = AqlQuery::new(QueryDomain::Artifacts)
        .with_fields([QueryField::ItemName, QueryField::StatDownloads]);
    let compiled = compile(&query, DbType::PostgreSql).unwrap();

    assert_eq!(
        compiled.result_fields(),
        &[QueryField::ItemName, QueryField::StatDownloads]
    );
    assert_eq!(
        compiled.sql(),
        "select distinct n.node_name as \"name\", st.download_count as \"stat.downloads\" \
         from nodes n inner join stats st on st.node_id = n.node_id"
    );
}

#[test]
fn precedence_is_preserved_by_parentheses() {
    let query = AqlQuery::new(QueryDomain::Artifacts).with_criterion(Criterion::and(vec![
        repo_criterion(),
        Criterion::or(vec![
            Criterion::leaf(QueryField::ItemName, ComparisonOp::Like, "%.jar"),
            Criterion::leaf(QueryField::ItemName, ComparisonOp::Like, "%.war"),
        ]),
    ]));

    let compiled = compile(&query, DbType::PostgreSql).unwrap();
    assert!(compiled.sql().ends_with(
        "where (n.repo = ? and (n.node_name like ? or n.node_name like ?))"
    ));
    assert_eq!(
        compiled.params(),
        &[
            AqlValue::from("libs-release"),
            AqlValue::from("%.jar"),
            AqlValue::from("%.war"),
        ]
    );
}

#[test]
fn sorts_render_in_specification_order() {
    let query = AqlQuery::new(QueryDomain::Artifacts)
        .with_sort(SortSpec::asc(QueryField::ItemRepo))
        .with_sort(SortSpec::desc(QueryField::ItemModified));
    let compiled = compile(&query, DbType::MySql).unwrap();
    assert!(compiled
        .sql()
        .ends_with("order by n.repo asc, n.modified desc"));
}

#[test]
fn null_criterion_binds_no_parameter() {
    let query = AqlQuery::new(QueryDomain::Properties).with_criterion(Criterion::leaf(
        QueryField::PropertyValue,
        ComparisonOp::Equals,
        AqlValue::Null,
    ));
    let compiled = compile(&query, DbType::PostgreSql).unwrap();
    assert!(compiled.sql().contains("np.prop_value is null"));
    assert!(compiled.params().is_empty());
}

#[test]
fn criterion_field_outside_the_join_chain_is_rejected() {
    // `builds` is not reachable from the artifact join chain; compiling
    // must fail instead of returning SQL with an unjoined `b` alias.
    let query = AqlQuery::new(QueryDomain::Artifacts).with_criterion(Criterion::leaf(
        QueryField::BuildName,
        ComparisonOp::Equals,
        "frontend",
    ));
    let err = compile(&query, DbType::PostgreSql).unwrap_err();
    assert_eq!(
        err,
        CompileError::FieldUnreachable {
            domain: QueryDomain::Artifacts,
            field: QueryField::BuildName,
        }
    );
    assert_eq!(
        err.to_string(),
        "field `build.name` is not reachable from the `items` domain"
    );
}

#[test]
fn projection_and_sort_fields_outside_the_join_chain_are_rejected() {
    let projected = AqlQuery::new(QueryDomain::Builds).with_field(QueryField::ItemRepo);
    assert_eq!(
        compile(&projected, DbType::MySql).unwrap_err(),
        CompileError::FieldUnreachable {
            domain: QueryDomain::Builds,
            field: QueryField::ItemRepo,
        }
    );

    let sorted = AqlQuery::new(QueryDomain::Statistics)
        .with_sort(SortSpec::asc(QueryField::ArchiveEntryName));
    assert_eq!(
        compile(&sorted, DbType::MySql).unwrap_err(),
        CompileError::FieldUnreachable {
            domain: QueryDomain::Statistics,
            field: QueryField::ArchiveEntryName,
        }
    );
}

#[test]
fn unsupported_domain_is_a_loud_failure() {
    let err = compile(&AqlQuery::new(QueryDomain::ReleaseBundles), DbType::MySql).unwrap_err();
    assert_eq!(
        err,
        CompileError::DomainNotSupported(QueryDomain::ReleaseBundles)
    );
    assert_eq!(
        err.to_string(),
        "query domain `release_bundles` is not supported by the SQL compiler"
    );
}
