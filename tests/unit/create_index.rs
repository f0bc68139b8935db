use pretty_assertions::assert_eq;
use shardline::prelude::*;

fn restore(stmt: &dyn Statement, flag: RestoreFlag) -> Restored {
    restore_statement(stmt, flag).unwrap()
}

#[test]
fn test_unique_index_on_single_column() {
    let stmt = Index::create("idx_a")
        .key_type(IndexKeyType::Unique)
        .table("t1")
        .key(IndexPartSpec::column("colA"));
    let restored = restore(&stmt, RestoreFlag::empty());
    assert_eq!(restored.sql, "CREATE UNIQUE INDEX idx_a ON t1 (colA)");
    assert!(restored.args.is_empty());
}

#[test]
fn test_unset_table_ignores_remaining_clauses() {
    let stmt = Index::create("idx_b")
        .key(IndexPartSpec::column("colA"))
        .key(IndexPartSpec::column("colB"))
        .index_option(IndexOption::new().comment("ignored"))
        .lock_alg(IndexLockAndAlgorithm::new(LockType::Shared, AlgorithmType::Copy));
    assert_eq!(restore(&stmt, RestoreFlag::DEFAULT).sql, "CREATE INDEX idx_b");
    assert_eq!(restore(&stmt, RestoreFlag::empty()).sql, "CREATE INDEX idx_b");
}

#[test]
fn test_multi_key_join() {
    let stmt = Index::create("idx_ab")
        .table("t1")
        .key(IndexPartSpec::column("colA"))
        .key(IndexPartSpec::column("colB"));
    assert_eq!(
        restore(&stmt, RestoreFlag::empty()).sql,
        "CREATE INDEX idx_ab ON t1 (colA, colB)"
    );
}

#[test]
fn test_option_renders_before_lock_and_algorithm() {
    let stmt = Index::create("idx_ab")
        .table("t1")
        .key(IndexPartSpec::column("colA"))
        .lock_alg(IndexLockAndAlgorithm::new(LockType::None, AlgorithmType::Inplace))
        .index_option(IndexOption::new().using(IndexType::Hash));
    assert_eq!(
        restore(&stmt, RestoreFlag::empty()).sql,
        "CREATE INDEX idx_ab ON t1 (colA) USING HASH ALGORITHM = INPLACE LOCK = NONE"
    );
}

#[test]
fn test_backend_flags_quote_identifiers_only() {
    let stmt = Index::create("idx_uid")
        .key_type(IndexKeyType::Unique)
        .table(TableName::qualified("school_0000", "student_0003"))
        .key(IndexPartSpec::column("uid").order(SortOrder::Asc))
        .index_option(IndexOption::new().comment("shard 3"));
    assert_eq!(
        restore(&stmt, RestoreFlag::DEFAULT).sql,
        "CREATE UNIQUE INDEX idx_uid ON `school_0000`.`student_0003` (`uid` ASC) COMMENT 'shard 3'"
    );
}

#[test]
fn test_invalid_enums_degrade_to_text() {
    let stmt = Index::create("idx")
        .table("t")
        .key(IndexPartSpec::column("c"))
        .index_option(IndexOption::new().using(IndexType::from(99)))
        .lock_alg(IndexLockAndAlgorithm::new(LockType::from(99), AlgorithmType::from(99)));
    // Both clauses are present but render nothing, each still preceded by one space.
    assert_eq!(restore(&stmt, RestoreFlag::empty()).sql, "CREATE INDEX idx ON t (c)  ");
}

#[test]
fn test_drop_and_show_index() {
    let drop = Index::drop("idx_uid").if_exists().table("student");
    assert_eq!(
        restore(&drop, RestoreFlag::empty()).sql,
        "DROP INDEX IF EXISTS idx_uid ON student"
    );

    let show = Index::show("student").filter(ShowFilter::Where(ExpressionNode::compare(
        shardline::CompareOperator::Eq,
        ExpressionNode::column("Non_unique"),
        ExpressionNode::Param(3),
    )));
    let restored = restore(&show, RestoreFlag::empty());
    assert_eq!(restored.sql, "SHOW INDEX FROM student WHERE Non_unique = ?");
    assert_eq!(restored.args, vec![3]);
}
