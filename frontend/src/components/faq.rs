use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::config;
use crate::content::{FaqEntry, FAQS};
use crate::state::accordion::{AccordionAction, AccordionState};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.is_open.then_some("active"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={props.on_toggle.clone()}>
                {props.entry.question}
                <span class="faq-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

/// FAQ entries where opening one closes whichever was open before.
#[function_component(FaqList)]
pub fn faq_list() -> Html {
    let accordion = use_reducer(AccordionState::default);

    html! {
        <div class="faq-container">
            { for FAQS.iter().enumerate().map(|(i, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(AccordionAction::Select(i));
                    })
                };
                html! {
                    <AnimatedSection key={i} delay_ms={i as u32 * config::STAGGER_DENSE_MS}>
                        <FaqItem {entry} is_open={accordion.is_open(i)} {on_toggle} />
                    </AnimatedSection>
                }
            }) }
        </div>
    }
}
