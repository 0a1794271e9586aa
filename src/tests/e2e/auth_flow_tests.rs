use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::modules::auth::use_cases::current_user::handler::CurrentUserController;
use crate::modules::auth::use_cases::login::command::Credentials;
use crate::modules::auth::use_cases::login::handler::{LoginController, LoginError};
use crate::modules::auth::use_cases::sign_out::handler::sign_out;
use crate::modules::users::use_cases::list_users::handler::{LOAD_FAILED, UserListController};
use crate::shared::core::errors::ControllerError;
use crate::shared::infrastructure::notifications::in_memory::InMemoryNotifier;
use crate::tests::e2e::fake_forseti_api::{ADMIN_PASSWORD, ADMIN_USERNAME, FakeForsetiApi, ISSUED_TOKEN};

#[tokio::test]
async fn signs_in_and_resolves_the_display_name() {
    let api = FakeForsetiApi::spawn().await;
    let client = api.client();
    let cancel = CancellationToken::new();

    let user = LoginController::new(client.clone())
        .submit(&Credentials::new(ADMIN_USERNAME, ADMIN_PASSWORD), &cancel)
        .await
        .unwrap();
    assert_eq!(user.email, ADMIN_USERNAME);
    assert_eq!(client.session().bearer().await.as_deref(), Some(ISSUED_TOKEN));

    let mut current = CurrentUserController::new(client);
    let me = current.load(Some(user.email.as_str()), &cancel).await.unwrap();
    assert_eq!(me.id.as_deref(), Some("/api/users/1"));
    assert_eq!(me.display_name, "Admin Forseti");
}

#[tokio::test]
async fn surfaces_the_api_message_when_credentials_are_wrong() {
    let api = FakeForsetiApi::spawn().await;
    let client = api.client();

    let mut login = LoginController::new(client.clone());
    let error = login
        .submit(&Credentials::new(ADMIN_USERNAME, "wrong"), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(error, LoginError::Rejected(ref message) if message == "Invalid credentials"));
    assert_eq!(login.state().error(), Some("Invalid credentials"));
    assert_eq!(client.session().bearer().await, None);
}

#[tokio::test]
async fn falls_back_to_the_default_name_without_a_token() {
    let api = FakeForsetiApi::spawn().await;

    let mut current = CurrentUserController::new(api.client());
    let me = current.load(None, &CancellationToken::new()).await.unwrap();

    assert_eq!(me.email, None);
    assert_eq!(me.display_name, "Utilisateur");
}

#[tokio::test]
async fn rejects_list_loads_after_sign_out() {
    let api = FakeForsetiApi::spawn().await;
    let client = api.client();
    let cancel = CancellationToken::new();
    LoginController::new(client.clone())
        .submit(&Credentials::new(ADMIN_USERNAME, ADMIN_PASSWORD), &cancel)
        .await
        .unwrap();

    sign_out(client.session()).await.unwrap();

    let notifier = Arc::new(InMemoryNotifier::new());
    let mut list = UserListController::new(client, notifier.clone(), 50);
    let error = list.load(&cancel).await.unwrap_err();

    match error {
        ControllerError::Client(error) => {
            assert!(error.is_auth_failure());
            assert_eq!(error.to_string(), "JWT Token not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(list.error(), Some(LOAD_FAILED));
    assert!(list.users().is_empty());
    assert_eq!(notifier.errors(), vec![LOAD_FAILED.to_string()]);
}
