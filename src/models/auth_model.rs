/// Identity resolved by the authorization gate and injected as a request
/// extension. There is no session behind it; the credential is simply a
/// username that exists.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i32,
    pub name: String,
}
