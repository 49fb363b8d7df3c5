//! Tests for operation labels.

use crate::access::OperationKind;
use crate::task::domain::TaskField;
use rstest::rstest;

#[rstest]
#[case(OperationKind::MoveTask, "move task")]
#[case(OperationKind::EditField(TaskField::DueDate), "edit task field 'due_date'")]
#[case(OperationKind::ReadChat, "read conversation")]
fn operation_kind_display(#[case] kind: OperationKind, #[case] expected: &str) {
    assert_eq!(kind.to_string(), expected);
}

#[rstest]
fn operation_kind_serializes_with_field_payload() {
    let json = serde_json::to_value(OperationKind::EditField(TaskField::Priority))
        .expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({"type": "edit_field", "field": "priority"})
    );

    let plain = serde_json::to_value(OperationKind::Comment).expect("serializable");
    assert_eq!(plain, serde_json::json!({"type": "comment"}));
}
