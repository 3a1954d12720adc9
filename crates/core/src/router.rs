use crate::content::ContentStore;

/// A page of the site, as selected by a URL path.
///
/// Parameterised routes carry their slug unchecked; whether the slug names
/// real content is decided when the page renders, so an unknown slug still
/// resolves to [`Route::Article`] and the article page shows its not-found
/// view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Article(String),
    Process,
    ProcessStudy(String),
    Experience,
    NotFound(String),
}

impl Route {
    /// Map a URL path onto the route table.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["article", slug] => Route::Article(slug.to_string()),
            ["process"] => Route::Process,
            ["process", slug] => Route::ProcessStudy(slug.to_string()),
            ["experience"] => Route::Experience,
            _ => Route::NotFound(format!("/{}", segments.join("/"))),
        }
    }

    /// Canonical URL path
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Article(slug) => format!("/article/{}", slug),
            Route::Process => "/process".to_string(),
            Route::ProcessStudy(slug) => format!("/process/{}", slug),
            Route::Experience => "/experience".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// File the static build writes this route to, relative to the output dir
    pub fn output_path(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            Route::NotFound(_) => "404.html".to_string(),
            other => format!("{}/index.html", other.path().trim_start_matches('/')),
        }
    }

    /// Whether the route names a page that exists in `store`
    pub fn exists_in(&self, store: &ContentStore) -> bool {
        match self {
            Route::Article(slug) => store.article(slug).is_some(),
            Route::ProcessStudy(slug) => store.study(slug).is_some(),
            Route::NotFound(_) => false,
            _ => true,
        }
    }

    /// Every concrete page of the site, in build order
    pub fn static_routes(store: &ContentStore) -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::About,
            Route::Process,
            Route::Experience,
        ];
        routes.extend(
            store
                .articles()
                .iter()
                .map(|a| Route::Article(a.slug.clone())),
        );
        routes.extend(
            store
                .studies()
                .iter()
                .map(|s| Route::ProcessStudy(s.slug.clone())),
        );
        routes
    }
}
