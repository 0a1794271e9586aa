use crate::shared::infrastructure::session::{Session, SessionError};

/// Forget the stored token. Requests sent afterwards go out unauthenticated.
pub async fn sign_out(session: &Session) -> Result<(), SessionError> {
    session.sign_out().await?;
    tracing::info!("signed out");
    Ok(())
}
