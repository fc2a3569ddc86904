use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/photos")]
    Photos,
    #[at("/celebration")]
    Celebration,
    #[at("/celebration/:id")]
    Celebrate { id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}
