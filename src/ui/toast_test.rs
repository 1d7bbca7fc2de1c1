use super::*;

#[test]
fn new_queue_is_empty() {
    let queue = ToastQueue::new();
    assert!(queue.is_empty());
    assert!(queue.drain().is_empty());
}

#[test]
fn push_returns_queued_toast() {
    let queue = ToastQueue::new();
    let toast = queue.push(CONNECTION_ERROR_MESSAGE, ToastKind::Danger);
    assert!(toast.id.starts_with("toast-"));
    assert_eq!(toast.kind, ToastKind::Danger);
    assert_eq!(queue.snapshot(), vec![toast]);
}

#[test]
fn toast_ids_are_unique() {
    let queue = ToastQueue::new();
    let a = queue.push("a", ToastKind::Info);
    let b = queue.push("b", ToastKind::Info);
    assert_ne!(a.id, b.id);
}

#[test]
fn drain_empties_in_fifo_order() {
    let queue = ToastQueue::new();
    queue.push("first", ToastKind::Info);
    queue.push("second", ToastKind::Warning);

    let drained = queue.drain();
    let messages: Vec<&str> = drained.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
    assert_eq!(queue.len(), 0);
}

#[test]
fn clones_share_queue() {
    let queue = ToastQueue::new();
    queue.clone().push("shared", ToastKind::Success);
    assert_eq!(queue.len(), 1);
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ToastKind::Danger).unwrap(), "danger");
    assert_eq!(ToastKind::default(), ToastKind::Info);
    assert_eq!(ToastKind::Warning.as_str(), "warning");
}

#[test]
fn connection_error_keeps_product_wording() {
    assert_eq!(CONNECTION_ERROR_MESSAGE, "Erro de conexão. Tente novamente.");
    let queue = ToastQueue::new();
    let toast = queue.push(CONNECTION_ERROR_MESSAGE, ToastKind::Danger);
    assert_eq!(serde_json::to_value(&toast).unwrap()["message"], "Erro de conexão. Tente novamente.");
}
