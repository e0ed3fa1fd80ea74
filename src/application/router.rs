// src/application/router.rs
//
// Front end routes: "/", "/{collection}" and "/{collection}/{id}"

use std::str::FromStr;

use crate::domain::ResourceKind;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List(ResourceKind),
    Detail(ResourceKind, u64),
}

impl Route {
    /// "/" lands on the characters list
    pub const HOME: Route = Route::List(ResourceKind::Characters);

    pub fn kind(&self) -> ResourceKind {
        match self {
            Route::List(kind) | Route::Detail(kind, _) => *kind,
        }
    }

    /// The list a detail page links back to
    pub fn parent(&self) -> Route {
        Route::List(self.kind())
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::HOME
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let path = raw.trim();
        // Query strings and fragments are not part of the route
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::HOME),
            [collection] => ResourceKind::from_collection(collection)
                .map(Route::List)
                .ok_or_else(|| AppError::InvalidRoute(raw.to_string())),
            [collection, id] => {
                let kind = ResourceKind::from_collection(collection)
                    .ok_or_else(|| AppError::InvalidRoute(raw.to_string()))?;
                let id = id
                    .parse::<u64>()
                    .map_err(|_| AppError::InvalidRoute(raw.to_string()))?;
                Ok(Route::Detail(kind, id))
            }
            _ => Err(AppError::InvalidRoute(raw.to_string())),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::List(kind) => write!(f, "/{}", kind.collection()),
            Route::Detail(kind, id) => write!(f, "/{}/{}", kind.collection(), id),
        }
    }
}
