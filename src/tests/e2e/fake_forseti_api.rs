// In-process stand-in for the Forseti GraphQL API.
//
// Serves the operations the client sends, with API Platform naming (`input`
// objects, `*Input` type names, cursor connections for users and offset
// collections for profiles). Every resolver except login requires the bearer
// token handed out by `loginAuthToken`.

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, ID, InputObject, Json, Object, Result as GqlResult, Schema,
    SimpleObject,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::routing::post;
use axum::{Extension, Router};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::graphql_client::http::{HttpTransport, HttpTransportOptions};
use crate::shared::infrastructure::session::Session;

pub const ADMIN_USERNAME: &str = "admin@forseti.io";
pub const ADMIN_PASSWORD: &str = "admin-pass";
pub const ISSUED_TOKEN: &str = "jwt-e2e-0001";

#[derive(Debug, Clone)]
pub struct FakeUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub locked: bool,
    pub deleted: bool,
    pub created_at: String,
    pub profile: String,
    pub password: String,
}

#[derive(Debug, Clone)]
struct FakeProfile {
    id: String,
    legacy_id: i32,
    label: String,
    person_type: String,
    active: bool,
    permission: Value,
}

pub struct FakeState {
    pub users: Mutex<Vec<FakeUser>>,
    profiles: Vec<FakeProfile>,
    permissions: Vec<(String, String)>,
}

impl FakeState {
    fn seeded() -> Self {
        let user = |n: u32, name: &str, email: &str, profile: &str, locked: bool, password: &str| FakeUser {
            id: format!("/api/users/{n}"),
            email: email.into(),
            display_name: name.into(),
            locked,
            deleted: false,
            created_at: format!("2024-03-0{n}T08:30:00+00:00"),
            profile: profile.into(),
            password: password.into(),
        };
        Self {
            users: Mutex::new(vec![
                user(1, "Admin Forseti", ADMIN_USERNAME, "Administrateur", false, ADMIN_PASSWORD),
                user(2, "Bruno Petit", "bruno@forseti.io", "Gestionnaire", true, "bruno-pass"),
                user(3, "Chloé Durand", "chloe@example.com", "Consultant", false, "chloe-pass"),
            ]),
            profiles: vec![
                FakeProfile {
                    id: "/api/profiles/1".into(),
                    legacy_id: 1,
                    label: "Administrateur".into(),
                    person_type: "interne".into(),
                    active: true,
                    permission: json!(["ROLE_ADMIN", "ROLE_USER_DETAILS"]),
                },
                FakeProfile {
                    id: "/api/profiles/2".into(),
                    legacy_id: 2,
                    label: "Consultant".into(),
                    person_type: "externe".into(),
                    active: false,
                    permission: json!("ROLE_AUDIT"),
                },
            ],
            permissions: vec![("ROLE_ADMIN".into(), "Administrer la plateforme".into())],
        }
    }

    fn profile_label(&self, iri: &str) -> Option<String> {
        self.profiles
            .iter()
            .find(|profile| profile.id == iri)
            .map(|profile| profile.label.clone())
    }
}

struct Bearer(String);

fn authorize(context: &Context<'_>) -> GqlResult<()> {
    match context.data_opt::<Bearer>() {
        Some(Bearer(token)) if token == ISSUED_TOKEN => Ok(()),
        _ => Err(Error::new("JWT Token not found").extend_with(|_, e| e.set("code", "UNAUTHENTICATED"))),
    }
}

#[derive(SimpleObject, Clone)]
struct GqlProfileRef {
    label: String,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "User")]
struct GqlUser {
    id: ID,
    email: String,
    display_name: String,
    locked: bool,
    deleted: bool,
    created_at: String,
    profile: Option<GqlProfileRef>,
}

impl From<&FakeUser> for GqlUser {
    fn from(user: &FakeUser) -> Self {
        Self {
            id: ID(user.id.clone()),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            locked: user.locked,
            deleted: user.deleted,
            created_at: user.created_at.clone(),
            profile: Some(GqlProfileRef {
                label: user.profile.clone(),
            }),
        }
    }
}

#[derive(SimpleObject)]
struct GqlUserEdge {
    node: GqlUser,
    cursor: String,
}

#[derive(SimpleObject)]
struct GqlPageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(SimpleObject)]
#[graphql(name = "UserConnection")]
struct GqlUserConnection {
    edges: Vec<GqlUserEdge>,
    page_info: GqlPageInfo,
    total_count: i32,
}

#[derive(SimpleObject)]
struct GqlUserPayload {
    user: Option<GqlUser>,
}

#[derive(SimpleObject)]
struct GqlMe {
    id: ID,
    email: String,
    username: String,
}

#[derive(SimpleObject)]
struct GqlAuthToken {
    token: String,
}

#[derive(SimpleObject)]
struct GqlLoginPayload {
    auth_token: Option<GqlAuthToken>,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Profile")]
struct GqlProfile {
    id: ID,
    #[graphql(name = "_id")]
    legacy_id: i32,
    label: String,
    person_type: String,
    active: bool,
    permission: Json<Value>,
    created_at: String,
    updated_at: String,
}

impl From<&FakeProfile> for GqlProfile {
    fn from(profile: &FakeProfile) -> Self {
        Self {
            id: ID(profile.id.clone()),
            legacy_id: profile.legacy_id,
            label: profile.label.clone(),
            person_type: profile.person_type.clone(),
            active: profile.active,
            permission: Json(profile.permission.clone()),
            created_at: "2024-01-01T00:00:00+00:00".into(),
            updated_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }
}

#[derive(SimpleObject)]
struct GqlPaginationInfo {
    items_per_page: i32,
    last_page: i32,
    total_count: i32,
    current_page: i32,
    has_next_page: bool,
}

impl GqlPaginationInfo {
    fn single_page(total: usize, items_per_page: i32) -> Self {
        Self {
            items_per_page,
            last_page: 1,
            total_count: total as i32,
            current_page: 1,
            has_next_page: false,
        }
    }
}

#[derive(SimpleObject)]
struct GqlProfileCollection {
    collection: Vec<GqlProfile>,
    pagination_info: GqlPaginationInfo,
}

#[derive(SimpleObject)]
#[graphql(name = "Permission")]
struct GqlPermission {
    id: ID,
    role: String,
    label: String,
}

#[derive(SimpleObject)]
struct GqlPermissionCollection {
    collection: Vec<GqlPermission>,
    pagination_info: GqlPaginationInfo,
}

#[derive(InputObject)]
#[graphql(name = "loginAuthTokenInput")]
struct LoginAuthTokenInput {
    username: String,
    password: String,
}

#[derive(InputObject)]
#[graphql(name = "updateUserInput")]
struct UpdateUserInput {
    id: ID,
    display_name: Option<String>,
    email: Option<String>,
    profile: Option<String>,
}

#[derive(InputObject)]
#[graphql(name = "createUserInput")]
struct CreateUserInput {
    display_name: String,
    email: String,
    plain_password: String,
    profile: Option<String>,
}

#[derive(InputObject)]
#[graphql(name = "deleteUserInput")]
struct DeleteUserInput {
    id: ID,
}

#[derive(InputObject)]
#[graphql(name = "toggleLockUserInput")]
struct ToggleLockUserInput {
    id: ID,
}

#[derive(InputObject)]
#[graphql(name = "changePasswordUserInput")]
struct ChangePasswordUserInput {
    id: ID,
    plain_password: String,
}

fn not_found(id: &str) -> Error {
    Error::new(format!("Item \"{id}\" not found."))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn me(&self, context: &Context<'_>) -> GqlResult<Option<GqlMe>> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let users = state.users.lock().await;
        Ok(users.iter().find(|user| user.email == ADMIN_USERNAME).map(|user| GqlMe {
            id: ID(user.id.clone()),
            email: user.email.clone(),
            username: user.email.clone(),
        }))
    }

    async fn users(
        &self,
        context: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        email: Option<String>,
    ) -> GqlResult<GqlUserConnection> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let users = state.users.lock().await;
        let matching: Vec<&FakeUser> = users
            .iter()
            .filter(|user| email.as_ref().is_none_or(|email| &user.email == email))
            .collect();
        let skip = after.and_then(|cursor| cursor.parse::<usize>().ok()).unwrap_or(0);
        let first = first.unwrap_or(30).max(0) as usize;
        let edges: Vec<GqlUserEdge> = matching
            .iter()
            .enumerate()
            .skip(skip)
            .take(first)
            .map(|(index, user)| GqlUserEdge {
                node: GqlUser::from(*user),
                cursor: (index + 1).to_string(),
            })
            .collect();
        Ok(GqlUserConnection {
            page_info: GqlPageInfo {
                has_next_page: skip + edges.len() < matching.len(),
                end_cursor: edges.last().map(|edge| edge.cursor.clone()),
            },
            total_count: matching.len() as i32,
            edges,
        })
    }

    async fn user(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlUser>> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let users = state.users.lock().await;
        Ok(users.iter().find(|user| user.id == id.as_str()).map(GqlUser::from))
    }

    async fn profiles(
        &self,
        context: &Context<'_>,
        page: Option<i32>,
        items_per_page: Option<i32>,
    ) -> GqlResult<GqlProfileCollection> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let _ = page;
        Ok(GqlProfileCollection {
            collection: state.profiles.iter().map(GqlProfile::from).collect(),
            pagination_info: GqlPaginationInfo::single_page(state.profiles.len(), items_per_page.unwrap_or(30)),
        })
    }

    async fn profile(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlProfile>> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        Ok(state
            .profiles
            .iter()
            .find(|profile| profile.id == id.as_str())
            .map(GqlProfile::from))
    }

    async fn permissions(
        &self,
        context: &Context<'_>,
        page: Option<i32>,
        items_per_page: Option<i32>,
    ) -> GqlResult<GqlPermissionCollection> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let _ = page;
        Ok(GqlPermissionCollection {
            collection: state
                .permissions
                .iter()
                .enumerate()
                .map(|(index, (role, label))| GqlPermission {
                    id: ID(format!("/api/permissions/{}", index + 1)),
                    role: role.clone(),
                    label: label.clone(),
                })
                .collect(),
            pagination_info: GqlPaginationInfo::single_page(state.permissions.len(), items_per_page.unwrap_or(30)),
        })
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn login_auth_token(&self, context: &Context<'_>, input: LoginAuthTokenInput) -> GqlResult<GqlLoginPayload> {
        let state = context.data_unchecked::<Arc<FakeState>>();
        let users = state.users.lock().await;
        let known = users
            .iter()
            .any(|user| user.email == input.username && user.password == input.password && !user.locked);
        if !known {
            return Err(Error::new("Invalid credentials"));
        }
        Ok(GqlLoginPayload {
            auth_token: Some(GqlAuthToken {
                token: ISSUED_TOKEN.into(),
            }),
        })
    }

    async fn update_user(&self, context: &Context<'_>, input: UpdateUserInput) -> GqlResult<GqlUserPayload> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let profile = input.profile.as_deref().and_then(|iri| state.profile_label(iri));
        let mut users = state.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == input.id.as_str())
            .ok_or_else(|| not_found(&input.id))?;
        if let Some(display_name) = input.display_name {
            user.display_name = display_name;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(profile) = profile {
            user.profile = profile;
        }
        Ok(GqlUserPayload {
            user: Some(GqlUser::from(&*user)),
        })
    }

    async fn create_user(&self, context: &Context<'_>, input: CreateUserInput) -> GqlResult<GqlUserPayload> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let profile = input
            .profile
            .as_deref()
            .and_then(|iri| state.profile_label(iri))
            .unwrap_or_else(|| "Utilisateur".into());
        let mut users = state.users.lock().await;
        if users.iter().any(|user| user.email == input.email) {
            return Err(Error::new("email: Cette valeur est déjà utilisée."));
        }
        let user = FakeUser {
            id: format!("/api/users/{}", Uuid::now_v7()),
            email: input.email,
            display_name: input.display_name,
            locked: false,
            deleted: false,
            created_at: "2024-06-01T12:00:00+00:00".into(),
            profile,
            password: input.plain_password,
        };
        let created = GqlUser::from(&user);
        users.push(user);
        Ok(GqlUserPayload { user: Some(created) })
    }

    async fn delete_user(&self, context: &Context<'_>, input: DeleteUserInput) -> GqlResult<GqlUserPayload> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let mut users = state.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == input.id.as_str())
            .ok_or_else(|| not_found(&input.id))?;
        user.deleted = true;
        Ok(GqlUserPayload {
            user: Some(GqlUser::from(&*user)),
        })
    }

    async fn toggle_lock_user(&self, context: &Context<'_>, input: ToggleLockUserInput) -> GqlResult<GqlUserPayload> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let mut users = state.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == input.id.as_str())
            .ok_or_else(|| not_found(&input.id))?;
        user.locked = !user.locked;
        Ok(GqlUserPayload {
            user: Some(GqlUser::from(&*user)),
        })
    }

    async fn change_password_user(
        &self,
        context: &Context<'_>,
        input: ChangePasswordUserInput,
    ) -> GqlResult<GqlUserPayload> {
        authorize(context)?;
        let state = context.data_unchecked::<Arc<FakeState>>();
        let mut users = state.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == input.id.as_str())
            .ok_or_else(|| not_found(&input.id))?;
        user.password = input.plain_password;
        Ok(GqlUserPayload {
            user: Some(GqlUser::from(&*user)),
        })
    }
}

pub type FakeSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

async fn graphql(Extension(schema): Extension<FakeSchema>, headers: HeaderMap, req: GraphQLRequest) -> GraphQLResponse {
    let mut request = req.into_inner();
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| Bearer(token.to_string()));
    if let Some(bearer) = bearer {
        request = request.data(bearer);
    }
    schema.execute(request).await.into()
}

pub struct FakeForsetiApi {
    pub endpoint: String,
    pub state: Arc<FakeState>,
}

impl FakeForsetiApi {
    /// Bind on an ephemeral port and serve until the test runtime shuts down.
    pub async fn spawn() -> Self {
        let state = Arc::new(FakeState::seeded());
        let schema: FakeSchema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
            .data(state.clone())
            .finish();

        let app = Router::new()
            .route("/api/graphql", post(graphql))
            .layer(Extension(schema))
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{addr}/api/graphql"),
            state,
        }
    }

    /// A client over the real HTTP transport, with a fresh signed-out session.
    pub fn client(&self) -> GraphqlClient {
        let transport = HttpTransport::new(self.endpoint.clone(), HttpTransportOptions::default()).unwrap();
        GraphqlClient::new(Arc::new(transport), Session::in_memory())
    }

    pub async fn user(&self, id: &str) -> Option<FakeUser> {
        self.state.users.lock().await.iter().find(|user| user.id == id).cloned()
    }

    pub async fn user_count(&self) -> usize {
        self.state.users.lock().await.len()
    }
}
