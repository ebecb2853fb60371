use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Flags its own drop, standing in for an observer handle.
struct Handle(Rc<Cell<bool>>);

impl Drop for Handle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

#[test]
fn slot_contents_are_dropped_when_owner_cleans_up() {
    let root = Owner::new();
    root.set();
    let released = Rc::new(Cell::new(false));

    let transcript = root.child();
    let slot = transcript.with(release_on_cleanup::<Handle>);
    slot.set_value(Some(Handle(released.clone())));
    assert!(!released.get());

    transcript.cleanup();
    assert!(released.get());
}

#[test]
fn empty_slot_cleans_up_quietly() {
    let root = Owner::new();
    root.set();
    let transcript = root.child();
    let slot = transcript.with(release_on_cleanup::<Handle>);
    assert!(slot.with_value(Option::is_none));
    transcript.cleanup();
}
