#[allow(unused_imports)]
pub mod prelude {
    pub use super::login_security::Entity as LoginSecurity;
    pub use super::usuario::Entity as Usuario;
}

pub mod login_security;
pub mod usuario;
