use super::*;

#[test]
fn chat_session_endpoint_formats_expected_path() {
    assert_eq!(chat_session_endpoint("session_abc"), "/api/chat/session/session_abc");
}

#[test]
fn notice_endpoint_formats_expected_path() {
    assert_eq!(notice_endpoint("n-1"), "/api/notices/n-1");
}

#[test]
fn static_endpoints_match_backend_routes() {
    assert_eq!(CHAT_ENDPOINT, "/api/chat");
    assert_eq!(NOTICES_ENDPOINT, "/api/notices");
    assert_eq!(GENERATE_ENDPOINT, "/generate-notice");
    assert_eq!(TEMPLATE_ENDPOINT, "/api/template-structure");
}

#[test]
fn chat_fields_carry_message_and_session() {
    assert_eq!(
        chat_fields("안녕", "session_1"),
        vec![("message", "안녕".to_owned()), ("session_id", "session_1".to_owned())]
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    // Drive the SSR stubs with a no-op waker; none of them await anything.
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    fn ready<T>(fut: impl Future<Output = T>) -> T {
        let mut cx = Context::from_waker(Waker::noop());
        match pin!(fut).poll(&mut cx) {
            Poll::Ready(value) => value,
            Poll::Pending => panic!("stub should resolve immediately"),
        }
    }

    assert_eq!(ready(send_chat("hi", "s")), Err(ApiError::Unavailable));
    assert_eq!(ready(fetch_notices()), Err(ApiError::Unavailable));
    assert_eq!(ready(delete_notice("n")), Err(ApiError::Unavailable));
}
