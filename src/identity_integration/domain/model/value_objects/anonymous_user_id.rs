/// User id issued by the identity provider for an anonymous login.
///
/// Provider ids are opaque hex strings, so the only local rule is that the id is present.
/// The value is kept byte for byte: it feeds the color hash.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnonymousUserId(String);

impl AnonymousUserId {
    pub fn new(value: &str) -> Result<Self, String> {
        if value.trim().is_empty() {
            return Err("user_id must not be empty".to_string());
        }
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }
}
