use rivalscope_core::{AuthUser, SessionHub, SessionState};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn hub_starts_loading_with_no_user() {
    let hub = SessionHub::new();
    assert!(hub.state().is_loading);
    assert!(hub.state().user.is_none());
    assert_eq!(hub.current_user_id(), None);
}

#[test]
fn subscribers_see_every_state_change_until_unsubscribed() {
    let mut hub = SessionHub::new();
    let seen: Rc<RefCell<Vec<SessionState>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let subscription = hub.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    hub.update(SessionState::signed_in(AuthUser {
        id: "user-1".to_string(),
        email: "owner@example.com".to_string(),
    }));
    hub.sign_out();

    assert!(hub.unsubscribe(subscription));
    hub.update(SessionState::loading());

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(
        seen[0].user.as_ref().map(|user| user.id.as_str()),
        Some("user-1")
    );
    assert!(!seen[0].is_loading);
    assert!(seen[1].user.is_none());
}

#[test]
fn unsubscribe_is_idempotent() {
    let mut hub = SessionHub::new();
    let subscription = hub.subscribe(|_| {});
    assert!(hub.unsubscribe(subscription));
    assert!(!hub.unsubscribe(subscription));
}

#[test]
fn current_user_id_tracks_sign_in_and_out() {
    let mut hub = SessionHub::new();

    hub.update(SessionState::signed_in(AuthUser {
        id: "user-7".to_string(),
        email: String::new(),
    }));
    assert_eq!(hub.current_user_id(), Some("user-7"));

    hub.sign_out();
    assert_eq!(hub.current_user_id(), None);
    assert!(!hub.state().is_loading);
}
