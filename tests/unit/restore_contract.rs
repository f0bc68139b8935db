use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use shardline::prelude::*;
use shardline::{CompareOperator, Literal};

fn sample_statements() -> Vec<StatementNode> {
    vec![
        Index::create("idx_a")
            .key_type(IndexKeyType::Spatial)
            .table("geo")
            .key(IndexPartSpec::column("pos"))
            .into(),
        Index::create("idx_b")
            .table(TableName::qualified("db", "t"))
            .key(IndexPartSpec::column("a").length(8))
            .key(IndexPartSpec::expr(ExpressionNode::function(
                "json_extract",
                vec![ExpressionNode::column("doc"), ExpressionNode::string("$.id")],
            )))
            .index_option(IndexOption::new().key_block_size(4).visibility(IndexVisibility::Visible))
            .lock_alg(IndexLockAndAlgorithm::new(LockType::Exclusive, AlgorithmType::Copy))
            .into(),
        Index::drop("idx_c").table("t").into(),
        Index::show("t")
            .filter(ShowFilter::Where(
                ExpressionNode::compare(
                    CompareOperator::Eq,
                    ExpressionNode::column("Key_name"),
                    ExpressionNode::Param(2),
                )
                .or(ExpressionNode::compare(
                    CompareOperator::Lt,
                    ExpressionNode::column("Seq_in_index"),
                    ExpressionNode::Literal(Literal::Int(2)),
                ))
                .or(ExpressionNode::compare(
                    CompareOperator::Eq,
                    ExpressionNode::column("Index_type"),
                    ExpressionNode::Param(0),
                )),
            ))
            .into(),
    ]
}

fn all_flags() -> Vec<RestoreFlag> {
    vec![
        RestoreFlag::empty(),
        RestoreFlag::DEFAULT,
        RestoreFlag::STRING_DOUBLE_QUOTES | RestoreFlag::STRING_ESCAPE_BACKSLASH,
        RestoreFlag::DEFAULT | RestoreFlag::MASK_LITERALS,
    ]
}

#[test]
fn test_every_node_satisfies_restorer() {
    let nodes: Vec<Box<dyn Restorer>> = vec![
        Box::new(TableName::new("t")),
        Box::new(ColumnName::new("c")),
        Box::new(ExpressionNode::Param(0)),
        Box::new(Literal::Null),
        Box::new(IndexPartSpec::column("c")),
        Box::new(IndexOption::new()),
        Box::new(IndexLockAndAlgorithm::default()),
        Box::new(ShowFilter::Like("x".into())),
        Box::new(CreateIndexStatement::new("idx")),
        Box::new(DropIndexStatement::new("idx")),
        Box::new(ShowIndexStatement::new("t")),
        Box::new(StatementNode::from(CreateIndexStatement::new("idx"))),
    ];
    for node in &nodes {
        let mut sb = String::new();
        let mut args = vec![];
        node.restore(RestoreFlag::DEFAULT, &mut sb, &mut args).unwrap();
        assert_eq!(node.cnt_params(), args.len());
    }

    let statements: Vec<Box<dyn Statement>> = vec![
        Box::new(CreateIndexStatement::new("idx")),
        Box::new(DropIndexStatement::new("idx")),
        Box::new(ShowIndexStatement::new("t")),
    ];
    let modes: Vec<SQLType> = statements.iter().map(|s| s.mode()).collect();
    assert_eq!(modes, vec![SQLType::CreateIndex, SQLType::DropIndex, SQLType::ShowIndex]);
}

#[test]
fn test_restore_is_deterministic() {
    for stmt in sample_statements() {
        for flag in all_flags() {
            let first = restore_statement(&stmt, flag).unwrap();
            let second = restore_statement(&stmt, flag).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_cnt_params_matches_emitted_placeholders() {
    for stmt in sample_statements() {
        for flag in all_flags() {
            let restored = restore_statement(&stmt, flag).unwrap();
            assert_eq!(stmt.cnt_params(), restored.args.len(), "{}", restored.sql);
            if stmt.mode() == SQLType::CreateIndex {
                assert!(restored.args.is_empty());
            }
        }
    }
}

#[test]
fn test_placeholder_positions_follow_emission_order() {
    let show = &sample_statements()[3];
    let restored = restore_statement(show, RestoreFlag::DEFAULT | RestoreFlag::MASK_LITERALS).unwrap();
    assert_eq!(
        restored.sql,
        "SHOW INDEX FROM `t` WHERE `Key_name` = ? OR `Seq_in_index` < ? OR `Index_type` = ?"
    );
    // Masked literals render as `?` but are not bound parameters.
    assert_eq!(restored.args, vec![2, 0]);
}

#[test]
fn test_concurrent_restores_share_one_tree() {
    let statements = Arc::new(sample_statements());
    let expected: Vec<Restored> = statements
        .iter()
        .map(|s| restore_statement(s, RestoreFlag::DEFAULT).unwrap())
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let statements = Arc::clone(&statements);
                scope.spawn(move || {
                    statements
                        .iter()
                        .map(|s| restore_statement(s, RestoreFlag::DEFAULT).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_error_discards_partial_output() {
    let stmt = Index::create("idx")
        .table("t")
        .key(IndexPartSpec::expr(ExpressionNode::function("", vec![])));
    let result = restore_statement(&stmt, RestoreFlag::DEFAULT);
    assert_eq!(result, Err(shardline::RestoreError::EmptyFunctionName));

    let stmt = Index::create("idx")
        .table(TableName(vec!["db".into(), "".into()]))
        .key(IndexPartSpec::column("a"));
    let result = restore_statement(&stmt, RestoreFlag::DEFAULT);
    assert_eq!(result, Err(shardline::RestoreError::EmptyIdentifier { what: "table" }));

    // Restoring into a caller-owned buffer leaves the prefix behind; the
    // driver hands back no text at all.
    let mut sb = String::new();
    assert!(stmt.restore(RestoreFlag::DEFAULT, &mut sb, &mut vec![]).is_err());
    assert_eq!(sb, "CREATE INDEX idx ON `db`");
}

#[test]
fn test_placeholder_in_key_part_is_rejected() {
    let stmt = Index::create("idx").table("t").key(IndexPartSpec::expr(ExpressionNode::compare(
        CompareOperator::Eq,
        ExpressionNode::column("a"),
        ExpressionNode::Param(0),
    )));
    assert_eq!(stmt.cnt_params(), 0);
    let result = restore_statement(&stmt, RestoreFlag::DEFAULT);
    assert!(matches!(result, Err(shardline::RestoreError::Unsupported(_))));
}
