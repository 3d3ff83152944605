use actix_session::Session;

/// Queue a one-shot notice shown on the next rendered page.
pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert("flash", message) {
        log::warn!("Failed to set flash message: {e}");
    }
}

/// Take (and clear) the pending flash message, if any.
pub fn take_flash(session: &Session) -> Option<String> {
    session.remove_as::<String>("flash").and_then(Result::ok)
}
