#[path = "e2e/hp_hierarchy.rs"]
mod hp_hierarchy;

#[path = "e2e/multi_relation.rs"]
mod multi_relation;

#[path = "e2e/prebuilt_matrix.rs"]
mod prebuilt_matrix;
