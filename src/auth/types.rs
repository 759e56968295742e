use serde::{Deserialize, Serialize};

/// Values of `usuarios.rol`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Cliente,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cliente => "cliente",
            Role::Admin => "admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cliente" => Ok(Role::Cliente),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

pub trait RequiredRole {
    fn required() -> Role;
}

pub struct AdminRole;

impl RequiredRole for AdminRole {
    fn required() -> Role {
        Role::Admin
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // usuarios.id
    pub exp: usize,
    pub iat: usize,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone)]
pub struct TokenBundle {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::{AdminRole, RequiredRole, Role};

    #[test]
    fn parses_stored_role_values() {
        assert_eq!(Role::try_from("cliente"), Ok(Role::Cliente));
        assert_eq!(Role::try_from(" ADMIN "), Ok(Role::Admin));
        assert!(Role::try_from("vendedor").is_err());
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn admin_marker_requires_admin_role() {
        assert_eq!(AdminRole::required(), Role::Admin);
    }
}
