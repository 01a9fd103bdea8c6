use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod styles;
mod state {
    pub mod accordion;
    pub mod navigation;
    pub mod reveal;
}
mod components {
    pub mod animated_section;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, nav::SiteHeader};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::BASE}</style>
            <SiteHeader />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use pretty_assertions::assert_eq;
    use yew::Reducible;

    use crate::state::accordion::{AccordionAction, AccordionState};
    use crate::state::navigation::{NavAction, NavigationState};

    #[test]
    fn page_session_walkthrough() {
        let mut nav = Rc::new(NavigationState::default());
        let mut faq = Rc::new(AccordionState::default());
        assert_eq!((nav.header_scrolled, nav.drawer_open, faq.open_index), (false, false, None));

        nav = nav.reduce(NavAction::Scrolled(120.0));
        assert!(nav.header_scrolled);

        faq = faq.reduce(AccordionAction::Select(2));
        assert_eq!(faq.open_index, Some(2));
        faq = faq.reduce(AccordionAction::Select(2));
        assert_eq!(faq.open_index, None);

        nav = nav.reduce(NavAction::ToggleDrawer);
        assert!(nav.drawer_open);
        // Nav links close the drawer
        nav = nav.reduce(NavAction::CloseDrawer);
        assert!(!nav.drawer_open);
        assert!(nav.header_scrolled);
    }
}
