use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::components::animated_section::ObserverError;
use crate::config;
use crate::content::{Section, BRAND};
use crate::state::navigation::{NavAction, NavigationState};

/// Window scroll listener that reports `scroll_y` on every event. Detached
/// when dropped.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn attach(on_scroll: Callback<f64>) -> Result<Self, ObserverError> {
        let window = web_sys::window().ok_or(ObserverError::Unsupported)?;

        let callback = {
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if let Ok(offset) = window.scroll_y() {
                    on_scroll.emit(offset);
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;

        Ok(Self { window, callback })
    }

    /// Current offset, for sampling once right after attaching.
    pub fn offset(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to detach scroll listener: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    class: &'static str,
    #[prop_or_default]
    on_navigate: Option<Callback<MouseEvent>>,
}

#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <nav class={props.class}>
            { for Section::ALL.iter().map(|section| html! {
                <a href={section.href()} onclick={props.on_navigate.clone()}>{section.nav_label()}</a>
            }) }
        </nav>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let nav = use_reducer(NavigationState::default);

    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                let on_scroll = {
                    let nav = nav.clone();
                    Callback::from(move |offset: f64| nav.dispatch(NavAction::Scrolled(offset)))
                };
                let subscription = match ScrollSubscription::attach(on_scroll) {
                    Ok(subscription) => {
                        if let Some(offset) = subscription.offset() {
                            nav.dispatch(NavAction::Scrolled(offset));
                        }
                        Some(subscription)
                    }
                    Err(e) => {
                        warn!("Header scroll tracking disabled: {}", e);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_drawer = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::ToggleDrawer))
    };

    let close_drawer = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::CloseDrawer))
    };

    let drawer_active = nav.drawer_open.then_some("active");

    html! {
        <>
            <header class={classes!("header", nav.header_scrolled.then_some("scrolled"))}>
                <a href="#" class="header-logo">
                    <img src={config::LOGO_PATH} alt={BRAND} />
                </a>
                <NavLinks class="header-nav" />
                <button
                    class={classes!("header-menu", drawer_active)}
                    aria-label="Menu"
                    aria-expanded={nav.drawer_open.to_string()}
                    onclick={toggle_drawer}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </header>

            <div class={classes!("mobile-menu-overlay", drawer_active)} onclick={close_drawer.clone()}></div>
            <NavLinks class={if nav.drawer_open { "mobile-nav active" } else { "mobile-nav" }} on_navigate={close_drawer} />
        </>
    }
}
