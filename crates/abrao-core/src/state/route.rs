//! Client routes: `/`, `/cadastro`, `/dashboard/:authorId`

use std::fmt;

use super::auth_form::AuthMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// The sign-in / sign-up form, opened in the given mode
    Cadastro(AuthMode),
    Dashboard { author_id: String },
}

impl Route {
    pub fn dashboard(author_id: impl Into<String>) -> Self {
        Route::Dashboard {
            author_id: author_id.into(),
        }
    }

    /// Parse a route path. Unknown paths and a dashboard path without an id
    /// yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/cadastro" => Some(Route::Cadastro(AuthMode::SignIn)),
            _ => {
                let id = trimmed.strip_prefix("/dashboard/")?;
                if id.is_empty() || id.contains('/') {
                    None
                } else {
                    Some(Route::dashboard(id))
                }
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Cadastro(_) => "/cadastro".to_string(),
            Route::Dashboard { author_id } => format!("/dashboard/{}", author_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Some(Route::Home))]
    #[case("", Some(Route::Home))]
    #[case("/cadastro", Some(Route::Cadastro(AuthMode::SignIn)))]
    #[case("/cadastro/", Some(Route::Cadastro(AuthMode::SignIn)))]
    #[case("/dashboard/0000-0002-1825-0097", Some(Route::dashboard("0000-0002-1825-0097")))]
    #[case("/dashboard/", None)]
    #[case("/dashboard/a/b", None)]
    #[case("/settings", None)]
    fn test_parse(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::parse(path), expected);
    }

    #[test]
    fn test_dashboard_path() {
        let route = Route::dashboard("0000-0002-1825-0097");
        assert_eq!(route.to_string(), "/dashboard/0000-0002-1825-0097");
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}
