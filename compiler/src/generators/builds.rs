//! Generators for the build-record domains.
//!
//! Builds, their modules, the artifacts and dependencies of those modules,
//! and build properties each form their own domain; all of them navigate
//! the same `builds` → `build_modules` → `build_artifacts` /
//! `build_dependencies` chain, from different starting points.

use super::{DomainGenerator, JoinStep};
use crate::model::QueryField;
use crate::schema::Table;

pub(crate) struct BuildsGenerator;

impl DomainGenerator for BuildsGenerator {
    fn base_table(&self) -> Table {
        Table::Builds
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::BuildModules,
                on: "bm.build_id = b.build_id",
                requires: &[],
            },
            JoinStep {
                table: Table::BuildArtifacts,
                on: "ba.module_id = bm.module_id",
                requires: &[Table::BuildModules],
            },
            JoinStep {
                table: Table::BuildDependencies,
                on: "bd.module_id = bm.module_id",
                requires: &[Table::BuildModules],
            },
            JoinStep {
                table: Table::BuildProps,
                on: "bp.build_id = b.build_id",
                requires: &[],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::BuildName, QueryField::BuildNumber, QueryField::BuildCreated]
    }
}

pub(crate) struct BuildModulesGenerator;

impl DomainGenerator for BuildModulesGenerator {
    fn base_table(&self) -> Table {
        Table::BuildModules
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::Builds,
                on: "b.build_id = bm.build_id",
                requires: &[],
            },
            JoinStep {
                table: Table::BuildArtifacts,
                on: "ba.module_id = bm.module_id",
                requires: &[],
            },
            JoinStep {
                table: Table::BuildDependencies,
                on: "bd.module_id = bm.module_id",
                requires: &[],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::BuildModuleName]
    }
}

pub(crate) struct BuildArtifactsGenerator;

impl DomainGenerator for BuildArtifactsGenerator {
    fn base_table(&self) -> Table {
        Table::BuildArtifacts
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::BuildModules,
                on: "bm.module_id = ba.module_id",
                requires: &[],
            },
            JoinStep {
                table: Table::Builds,
                on: "b.build_id = bm.build_id",
                requires: &[Table::BuildModules],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::BuildArtifactName, QueryField::BuildArtifactType]
    }
}

pub(crate) struct BuildDependenciesGenerator;

impl DomainGenerator for BuildDependenciesGenerator {
    fn base_table(&self) -> Table {
        Table::BuildDependencies
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[
            JoinStep {
                table: Table::BuildModules,
                on: "bm.module_id = bd.module_id",
                requires: &[],
            },
            JoinStep {
                table: Table::Builds,
                on: "b.build_id = bm.build_id",
                requires: &[Table::BuildModules],
            },
        ]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[
            QueryField::BuildDependencyName,
            QueryField::BuildDependencyScope,
            QueryField::BuildDependencyType,
        ]
    }
}

pub(crate) struct BuildPropertiesGenerator;

impl DomainGenerator for BuildPropertiesGenerator {
    fn base_table(&self) -> Table {
        Table::BuildProps
    }

    fn join_steps(&self) -> &'static [JoinStep] {
        &[JoinStep {
            table: Table::Builds,
            on: "b.build_id = bp.build_id",
            requires: &[],
        }]
    }

    fn default_fields(&self) -> &'static [QueryField] {
        &[QueryField::BuildPropertyKey, QueryField::BuildPropertyValue]
    }
}
