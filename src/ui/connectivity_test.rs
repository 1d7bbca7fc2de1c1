use super::*;

#[test]
fn starts_online_without_toasts() {
    let toasts = ToastQueue::new();
    let monitor = ConnectivityMonitor::new(toasts.clone());
    assert_eq!(monitor.state(), LinkState::Online);
    assert!(toasts.is_empty());
}

#[test]
fn going_offline_queues_warning() {
    let toasts = ToastQueue::new();
    let monitor = ConnectivityMonitor::new(toasts.clone());

    let toast = monitor.report(LinkState::Offline).unwrap();
    assert_eq!(toast.kind, ToastKind::Warning);
    assert_eq!(toast.message, "Sem conexão com a internet");
    assert_eq!(monitor.state(), LinkState::Offline);
    assert_eq!(toasts.len(), 1);
}

#[test]
fn coming_back_online_queues_success() {
    let toasts = ToastQueue::new();
    let monitor = ConnectivityMonitor::new(toasts.clone());
    monitor.report(LinkState::Offline);

    let toast = monitor.report(LinkState::Online).unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Conexão restaurada");

    let kinds: Vec<ToastKind> = toasts.drain().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [ToastKind::Warning, ToastKind::Success]);
}

#[test]
fn repeated_state_is_ignored() {
    let toasts = ToastQueue::new();
    let monitor = ConnectivityMonitor::new(toasts.clone());

    assert!(monitor.report(LinkState::Online).is_none());
    monitor.report(LinkState::Offline);
    assert!(monitor.report(LinkState::Offline).is_none());
    assert_eq!(toasts.len(), 1);
}

#[test]
fn clones_share_link_state() {
    let monitor = ConnectivityMonitor::new(ToastQueue::new());
    monitor.clone().report(LinkState::Offline);
    assert_eq!(monitor.state(), LinkState::Offline);
}
