#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::effects::on_unmount;
    use crate::effects_ext::disposable_effect;
    use crate::input::{self, PointerEvent, PointerEventKind};
    use crate::launched_effect;
    use crate::runtime::{Composition, clear_slots, remember, remember_with_key};
    use crate::scope::{Scope, scoped_effect};
    use crate::signal::signal;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(false));

        let called_clone = called.clone();
        sig.subscribe(move |_| {
            *called_clone.borrow_mut() = true;
        });

        sig.set(42);
        assert!(*called.borrow());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_key_based_remember() {
        clear_slots();

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        // Should return the same instance
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42); // Not 100, because key exists
    }

    #[test]
    fn test_slot_remember_stable_across_passes() {
        clear_slots();
        let comp = Composition::new();

        let first = comp.compose(|| Rc::as_ptr(&remember(|| 7)));
        let second = comp.compose(|| {
            let slot = remember(|| 9);
            assert_eq!(*slot, 7);
            Rc::as_ptr(&slot)
        });
        assert_eq!(first, second);

        comp.dispose();
    }

    #[test]
    fn test_composition_dispose_runs_scope_disposers() {
        clear_slots();
        let comp = Composition::new();
        let unmounted = Rc::new(RefCell::new(false));

        comp.compose(|| {
            let unmounted = unmounted.clone();
            scoped_effect(move || Box::new(move || *unmounted.borrow_mut() = true));
        });

        assert!(!*unmounted.borrow());
        comp.dispose();
        assert!(*unmounted.borrow());
    }

    #[test]
    fn test_disposable_effect_key_change_and_unmount() {
        clear_slots();
        let comp = Composition::new();
        let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let pass = |comp: &Composition, key: u32| {
            let log = log.clone();
            comp.compose(move || {
                disposable_effect(key, {
                    let log = log.clone();
                    move || {
                        log.borrow_mut().push(format!("attach {key}"));
                        on_unmount(move || log.borrow_mut().push(format!("detach {key}")))
                    }
                });
            });
        };

        pass(&comp, 1);
        pass(&comp, 1); // same key: no re-run
        pass(&comp, 2); // key change: detach 1, attach 2
        comp.dispose(); // unmount: detach 2

        assert_eq!(
            *log.borrow(),
            vec!["attach 1", "detach 1", "attach 2", "detach 2"]
        );
    }

    #[test]
    fn test_launched_effect_once_per_key() {
        clear_slots();
        let comp = Composition::new();
        let runs = Rc::new(RefCell::new(0));

        let pass = |comp: &Composition, key: u32| {
            let runs = runs.clone();
            comp.compose(move || {
                launched_effect!(key, {
                    let runs = runs.clone();
                    move || *runs.borrow_mut() += 1
                });
            });
        };

        pass(&comp, 1);
        pass(&comp, 1);
        pass(&comp, 1);
        assert_eq!(*runs.borrow(), 1);

        pass(&comp, 2);
        assert_eq!(*runs.borrow(), 2);

        comp.dispose();
    }

    #[test]
    fn test_listener_registry() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let enter = input::attach(5, PointerEventKind::Enter, {
            let seen = seen.clone();
            move |ev: PointerEvent| seen.borrow_mut().push(ev.event)
        });
        let leave = input::attach(5, PointerEventKind::Leave, {
            let seen = seen.clone();
            move |ev: PointerEvent| seen.borrow_mut().push(ev.event)
        });
        assert_eq!(input::listener_count(5), 2);

        input::dispatch(PointerEvent {
            target: 5,
            event: PointerEventKind::Enter,
        });
        input::dispatch(PointerEvent {
            target: 7, // different target: nobody listening
            event: PointerEventKind::Enter,
        });
        input::dispatch(PointerEvent {
            target: 5,
            event: PointerEventKind::Leave,
        });
        assert_eq!(
            *seen.borrow(),
            vec![PointerEventKind::Enter, PointerEventKind::Leave]
        );

        input::detach(enter);
        input::detach(leave);
        input::detach(leave); // double detach is a no-op
        assert_eq!(input::listener_count(5), 0);
    }
}
