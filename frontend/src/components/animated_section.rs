use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::state::reveal::{RevealAction, RevealState};

#[derive(Debug, Error, PartialEq)]
pub enum ObserverError {
    #[error("IntersectionObserver is not available in this browser")]
    Unsupported,
    #[error("target element is not mounted")]
    Unmounted,
    #[error("browser rejected observer: {0}")]
    Js(String),
}

impl From<JsValue> for ObserverError {
    fn from(value: JsValue) -> Self {
        ObserverError::Js(format!("{:?}", value))
    }
}

/// Live intersection observer for one element. Dropping the handle
/// disconnects the observer, so callbacks never outlive the component.
pub struct RevealSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealSubscription {
    /// Starts watching `target`. `on_reveal` fires once, on the first
    /// intersecting entry, after which the observer disconnects itself.
    pub fn observe(target: &Element, on_reveal: Callback<()>) -> Result<Self, ObserverError> {
        let window = web_sys::window().ok_or(ObserverError::Unsupported)?;
        if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
            return Err(ObserverError::Unsupported);
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if intersecting {
                on_reveal.emit(());
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(config::REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tracks whether the element behind `node` has scrolled into view.
/// Falls back to visible when the element can't be observed.
#[hook]
pub fn use_scroll_reveal(node: NodeRef) -> bool {
    let state = use_reducer(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node| {
                let on_reveal = {
                    let state = state.clone();
                    Callback::from(move |_: ()| {
                        state.dispatch(RevealAction::Observed { intersecting: true })
                    })
                };
                let subscription = node
                    .cast::<Element>()
                    .ok_or(ObserverError::Unmounted)
                    .and_then(|target| RevealSubscription::observe(&target, on_reveal));

                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(ObserverError::Unsupported) => {
                        debug!("No IntersectionObserver, revealing content immediately");
                        state.dispatch(RevealAction::Fallback);
                        None
                    }
                    Err(e) => {
                        warn!("Scroll reveal unavailable: {}", e);
                        state.dispatch(RevealAction::Fallback);
                        None
                    }
                };

                move || {
                    if let Some(subscription) = subscription {
                        subscription.release();
                    }
                }
            },
            node,
        );
    }

    state.visible()
}

/// Inline style for a revealed block: caller styles followed by the
/// transition delay.
pub fn transition_style(extra: &str, delay_ms: u32) -> String {
    let extra = extra.trim().trim_end_matches(';');
    if extra.is_empty() {
        format!("transition-delay: {}ms;", delay_ms)
    } else {
        format!("{}; transition-delay: {}ms;", extra, delay_ms)
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_scroll_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("animate-on-scroll", "animate-fade-up", visible.then_some("visible"), props.class.clone())}
            style={transition_style(&props.style, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn delay_only() {
        assert_eq!(transition_style("", 0), "transition-delay: 0ms;");
        assert_eq!(transition_style("  ", 150), "transition-delay: 150ms;");
    }

    #[test]
    fn caller_style_comes_first() {
        assert_eq!(
            transition_style("grid-column: span 1;", 50),
            "grid-column: span 1; transition-delay: 50ms;"
        );
        assert_eq!(
            transition_style("height: 100%", 200),
            "height: 100%; transition-delay: 200ms;"
        );
    }

    #[test]
    fn js_errors_keep_their_text() {
        let err = ObserverError::Js("SyntaxError".into());
        assert_eq!(err.to_string(), "browser rejected observer: SyntaxError");
    }
}
