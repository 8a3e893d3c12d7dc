use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::kernel::container::ServiceContainer;

trait Widget: Send + Sync {
    fn id(&self) -> usize;
}

#[derive(Debug)]
struct TestWidget(usize);

impl Widget for TestWidget {
    fn id(&self) -> usize {
        self.0
    }
}

#[test]
fn singleton_is_constructed_lazily() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = constructed.clone();

    let mut container = ServiceContainer::new();
    container.singleton::<dyn Widget, _>(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Arc::new(TestWidget(7)) as Arc<dyn Widget>
    });

    // Registration alone must not run the factory.
    assert_eq!(constructed.load(Ordering::SeqCst), 0);

    let widget = container.resolve::<dyn Widget>().expect("binding registered");
    assert_eq!(widget.id(), 7);
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn singleton_resolves_to_same_instance() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = constructed.clone();

    let mut container = ServiceContainer::new();
    container.singleton::<dyn Widget, _>(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Arc::new(TestWidget(1)) as Arc<dyn Widget>
    });

    let first = container.resolve::<dyn Widget>().expect("first resolve");
    let second = container.resolve::<dyn Widget>().expect("second resolve");

    assert!(Arc::ptr_eq(&first, &second), "both resolves should share one instance");
    assert_eq!(constructed.load(Ordering::SeqCst), 1, "factory should run exactly once");
}

#[test]
fn resolve_unbound_capability_returns_none() {
    trait Unbound: Send + Sync {}

    let mut container = ServiceContainer::new();
    assert!(container.resolve::<dyn Unbound>().is_none());
    assert!(!container.contains::<dyn Unbound>());
}

#[test]
fn rebinding_replaces_factory_and_instance() {
    let mut container = ServiceContainer::new();
    container.singleton::<dyn Widget, _>(|| Arc::new(TestWidget(1)) as Arc<dyn Widget>);

    let first = container.resolve::<dyn Widget>().expect("first binding");
    assert_eq!(first.id(), 1);

    container.singleton::<dyn Widget, _>(|| Arc::new(TestWidget(2)) as Arc<dyn Widget>);
    assert_eq!(container.registered_count(), 1, "rebinding should not add a slot");

    let second = container.resolve::<dyn Widget>().expect("second binding");
    assert_eq!(second.id(), 2);
    assert!(!Arc::ptr_eq(&first, &second));
}
